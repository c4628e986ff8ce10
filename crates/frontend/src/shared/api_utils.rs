//! API utilities for frontend-backend communication
//!
//! Provides helper functions for constructing API URLs.

use crate::shared::config::ApiConfig;

/// Get the base URL for API requests
///
/// Constructs the API base URL from the current window location,
/// using the configured backend port and route prefix.
///
/// # Returns
/// - API base URL like "http://localhost:5000/api"
/// - Just the prefix if window is not available
pub fn api_base(config: &ApiConfig) -> String {
    let window = match web_sys::window() {
        Some(w) => w,
        None => return config.prefix.clone(),
    };
    let location = window.location();
    let protocol = location.protocol().unwrap_or_else(|_| "http:".to_string());
    let hostname = location
        .hostname()
        .unwrap_or_else(|_| "localhost".to_string());
    base_url(&protocol, &hostname, config)
}

fn base_url(protocol: &str, hostname: &str, config: &ApiConfig) -> String {
    format!(
        "{}//{}:{}{}",
        protocol,
        hostname,
        config.port,
        config.prefix.trim_end_matches('/')
    )
}

/// Build a full API URL from a path
///
/// # Example
/// ```rust,ignore
/// let url = api_url(&config.api, "/upload/status");
/// ```
pub fn api_url(config: &ApiConfig, path: &str) -> String {
    format!("{}{}", api_base(config), path)
}
