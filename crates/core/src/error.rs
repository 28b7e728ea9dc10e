//! Common error handling utilities and conventions

/// Standard result type for core operations
pub type CoreResult<T> = std::result::Result<T, CoreError>;

/// Core error types that can be shared across crates
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize, thiserror::Error)]
pub enum CoreError {
    #[error("Duplicate route path: {path}")]
    DuplicateRoutePath { path: String },

    #[error("Duplicate route name: {name}")]
    DuplicateRouteName { name: String },
}

impl CoreError {
    /// Create a duplicate route path error
    pub fn duplicate_path(path: impl Into<String>) -> Self {
        Self::DuplicateRoutePath { path: path.into() }
    }

    /// Create a duplicate route name error
    pub fn duplicate_name(name: impl Into<String>) -> Self {
        Self::DuplicateRouteName { name: name.into() }
    }
}
