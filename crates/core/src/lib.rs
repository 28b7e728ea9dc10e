//! Charla core types and utilities
//!
//! The credential-provider capability shared by the HTTP client and the
//! router, plus the route descriptors and the pure guard decision both
//! are built on.

pub mod error;
pub mod guard;
pub mod route;
pub mod token;

#[cfg(target_arch = "wasm32")]
pub mod browser;

pub use error::{CoreError, CoreResult};
pub use guard::GuardDecision;
pub use route::{Route, RouteMeta, RouteName, RouteTable};
pub use token::{MemoryTokenStore, TokenStore};

#[cfg(target_arch = "wasm32")]
pub use browser::BrowserTokenStore;
