//! Base URL resolution

use tracing::debug;

/// Environment variable overriding the API base URL
pub const BASE_URL_ENV: &str = "CHARLA_API_BASE_URL";

/// Default API origin, the local development backend
pub const DEFAULT_BASE_URL: &str = "http://localhost:8000/";

/// Resolve the base URL from an optional override
///
/// Absent and empty overrides both fall back to [`DEFAULT_BASE_URL`]. A
/// non-empty override is used exactly as given.
pub fn resolve_base_url(override_value: Option<&str>) -> String {
    match override_value {
        Some(value) if !value.is_empty() => value.to_string(),
        _ => DEFAULT_BASE_URL.to_string(),
    }
}

/// Resolve the base URL from the process environment
pub fn base_url_from_env() -> String {
    let override_value = std::env::var(BASE_URL_ENV).ok();
    let resolved = resolve_base_url(override_value.as_deref());
    debug!(base_url = %resolved, "resolved API base URL");
    resolved
}
