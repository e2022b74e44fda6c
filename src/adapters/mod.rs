//! Adapters - Implementations of ports against concrete infrastructure.

pub mod connectivity;
pub mod http;
pub mod profile;
pub mod storage;
