//! HTTP adapters: the outbound profile client and the inbound profile API.

pub mod profile;
mod profile_client;

pub use profile_client::{HttpProfileClient, ProfileClientConfig};
