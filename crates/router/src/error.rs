//! Router error types

use charla_core::CoreError;
use thiserror::Error;

/// Router error types
#[derive(Debug, Clone, Error)]
pub enum RouterError {
    /// The navigation target matches no declared route
    #[error("No route matches {target}")]
    RouteNotFound { target: String },

    /// The table declares no Home route, so the guard has nowhere to redirect
    #[error("Route table has no Home route to redirect to")]
    MissingHomeRoute,

    /// Route table construction failed
    #[error(transparent)]
    Core(#[from] CoreError),
}

impl RouterError {
    /// Create a route-not-found error
    pub fn not_found(target: impl Into<String>) -> Self {
        Self::RouteNotFound {
            target: target.into(),
        }
    }
}
