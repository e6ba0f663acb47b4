//! API utilities for frontend-backend communication
//!
//! Endpoints are written as relative paths (`"api/vets"`) and resolved against
//! the application base URL.

/// Compile-time override of the API base URL, e.g. `http://localhost:9966/petclinic`.
const API_URL_OVERRIDE: Option<&str> = option_env!("PETCLINIC_API_URL");

/// Get the base URL for API requests
///
/// # Returns
/// - `PETCLINIC_API_URL` if it was set at build time
/// - otherwise the origin of the current page, like "http://localhost:8080"
/// - empty string if window is not available
pub fn api_base() -> String {
    if let Some(base) = API_URL_OVERRIDE {
        return base.to_string();
    }
    let Some(window) = web_sys::window() else {
        return String::new();
    };
    window.location().origin().unwrap_or_default()
}

/// Build a full API URL from a relative path
///
/// # Example
/// ```rust,ignore
/// let url = api_url("api/vets");
/// ```
pub fn api_url(path: &str) -> String {
    join_url(&api_base(), path)
}

/// Joins `base` and `path` with exactly one `/`.
///
/// An empty base leaves a root-relative path.
pub fn join_url(base: &str, path: &str) -> String {
    format!(
        "{}/{}",
        base.trim_end_matches('/'),
        path.trim_start_matches('/')
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_join_url() {
        assert_eq!(
            join_url("http://localhost:8080", "api/vets"),
            "http://localhost:8080/api/vets"
        );
        assert_eq!(
            join_url("http://localhost:8080/", "/api/vets"),
            "http://localhost:8080/api/vets"
        );
        assert_eq!(
            join_url("http://host/petclinic", "api/owner/list?lastName="),
            "http://host/petclinic/api/owner/list?lastName="
        );
    }

    #[test]
    fn test_join_url_empty_base() {
        assert_eq!(join_url("", "api/vets"), "/api/vets");
    }
}
