//! Charla HTTP client
//!
//! One shared API client for the chat backend. Every outgoing request is
//! decorated with `Authorization: Bearer <token>` when the injected token
//! store holds a credential at dispatch time; an empty store attaches
//! nothing and raises nothing — the server is the only enforcement point.

pub mod client;
pub mod config;
pub mod error;
pub mod types;

pub use client::{ApiClient, ApiClientBuilder};
pub use error::ClientError;
