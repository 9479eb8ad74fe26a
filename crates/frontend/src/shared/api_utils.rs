//! API URL helpers for frontend-backend communication.

/// Base URL for API requests, derived from the current window location.
/// Empty outside a browser context.
pub fn api_base() -> String {
    let window = match web_sys::window() {
        Some(w) => w,
        None => return String::new(),
    };
    let location = window.location();
    location.origin().unwrap_or_default()
}

/// Build a full API URL from a path starting with "/api/".
pub fn api_url(path: &str) -> String {
    format!("{}{}", api_base(), path)
}
