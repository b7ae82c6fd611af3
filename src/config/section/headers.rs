//! `[headers]` section configuration.
//!
//! CORS response headers applied to every route in server mode.
//!
//! # Example
//!
//! ```toml
//! [headers]
//! allow_credentials = true
//! allow_origin = "*"
//! allow_methods = "GET,OPTIONS"
//! ```

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct HeadersConfig {
    /// Emit any CORS headers at all.
    pub enable: bool,
    pub allow_credentials: bool,
    pub allow_origin: String,
    pub allow_methods: String,
    pub allow_headers: String,
}

impl Default for HeadersConfig {
    fn default() -> Self {
        Self {
            enable: true,
            allow_credentials: true,
            allow_origin: "*".into(),
            allow_methods: "GET,OPTIONS,PATCH,DELETE,POST,PUT".into(),
            allow_headers: "X-CSRF-Token, X-Requested-With, Accept, Accept-Version, \
                            Content-Length, Content-MD5, Content-Type, Date, X-Api-Version"
                .into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::config::test_parse_config;

    #[test]
    fn test_headers_defaults() {
        let config = test_parse_config("");
        assert!(config.headers.enable);
        assert_eq!(config.headers.allow_origin, "*");
        assert!(config.headers.allow_headers.starts_with("X-CSRF-Token, "));
        assert!(config.headers.allow_headers.ends_with("X-Api-Version"));
    }

    #[test]
    fn test_headers_override() {
        let config = test_parse_config("[headers]\nallow_origin = \"https://blog.example\"");
        assert_eq!(config.headers.allow_origin, "https://blog.example");
        assert!(config.headers.allow_credentials);
    }
}
