//! InclusiveAID - Adaptive Accessibility Assistant
//!
//! This crate implements a personal accessibility profile service: local
//! preference state with durable storage, a debounced synchronizer against
//! a remote profile API, and the profile API itself.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
