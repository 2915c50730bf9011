//! Runtime configuration of the workbench
//!
//! The API is served from the same origin by default. A different backend can
//! be selected by storing its base URL in localStorage under
//! [`API_BASE_KEY`], e.g. `http://127.0.0.1:5000`.

use web_sys::window;

pub const API_BASE_KEY: &str = "order_workbench.api_base";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// Prefix for every `/api/...` path; empty means same origin
    pub api_base: String,
    /// Page size of the order list
    pub per_page: u32,
    /// Lifetime of a notification banner
    pub alert_timeout_ms: u32,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_base: String::new(),
            per_page: 50,
            alert_timeout_ms: 5000,
        }
    }
}

impl AppConfig {
    /// Defaults plus whatever the browser storage overrides
    pub fn load() -> Self {
        let mut config = Self::default();
        if let Some(base) = stored_api_base() {
            config.api_base = normalize_base(&base);
        }
        log::debug!("workbench config: {:?}", config);
        config
    }

    /// Build a full API URL from a path starting with "/api/"
    pub fn api_url(&self, path: &str) -> String {
        format!("{}{}", self.api_base, path)
    }
}

fn get_local_storage() -> Option<web_sys::Storage> {
    window()?.local_storage().ok()?
}

fn stored_api_base() -> Option<String> {
    get_local_storage()?.get_item(API_BASE_KEY).ok()?
}

/// Trim whitespace and trailing slashes so paths can be appended verbatim
pub fn normalize_base(raw: &str) -> String {
    raw.trim().trim_end_matches('/').to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_same_origin() {
        let config = AppConfig::default();
        assert_eq!(config.api_url("/api/orders"), "/api/orders");
        assert_eq!(config.per_page, 50);
        assert_eq!(config.alert_timeout_ms, 5000);
    }

    #[test]
    fn stored_base_is_normalized() {
        let config = AppConfig {
            api_base: normalize_base(" http://127.0.0.1:5000/ "),
            ..AppConfig::default()
        };
        assert_eq!(
            config.api_url("/api/orders/42"),
            "http://127.0.0.1:5000/api/orders/42"
        );
    }
}
