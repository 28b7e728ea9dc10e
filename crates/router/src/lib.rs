//! Charla router core
//!
//! The navigable surface of the chat application and the guard that gates
//! it. Framework-agnostic: a hosting UI layer feeds navigation attempts in
//! and renders whatever route comes back. Every attempt — the very first
//! load included — is classified synchronously before anything renders.

pub mod error;
pub mod router;

pub use error::RouterError;
pub use router::{NavigationOutcome, Router, default_table};
