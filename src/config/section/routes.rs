//! `[routes]` section configuration.
//!
//! # Example
//!
//! ```toml
//! [routes]
//! feed = "/rss/feed.xml"                    # `/feed` permanently redirects here
//! strip_html = true                         # rewrite /:path*.html -> /:path*
//! export_exclude = ["/sitemap.xml", "/auth"] # dropped from static export
//! ```

use crate::config::{ConfigDiagnostics, FieldPath};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct RoutesConfig {
    /// Redirect target for `/feed`.
    pub feed: String,

    /// Serve `*.html` URLs from their extensionless route.
    pub strip_html: bool,

    /// Routes removed from the static export path map.
    pub export_exclude: Vec<String>,
}

impl Default for RoutesConfig {
    fn default() -> Self {
        Self {
            feed: "/rss/feed.xml".into(),
            strip_html: true,
            export_exclude: vec!["/sitemap.xml".into(), "/auth".into()],
        }
    }
}

impl RoutesConfig {
    pub const FEED: FieldPath = FieldPath::new("routes.feed");
    pub const EXPORT_EXCLUDE: FieldPath = FieldPath::new("routes.export_exclude");

    pub fn validate(&self, diag: &mut ConfigDiagnostics) {
        if !self.feed.starts_with('/') {
            diag.error_with_hint(
                Self::FEED,
                format!("'{}' is not an absolute route", self.feed),
                "use format like /rss/feed.xml",
            );
        }
        for route in &self.export_exclude {
            if !route.starts_with('/') {
                diag.error(
                    Self::EXPORT_EXCLUDE,
                    format!("'{route}' is not an absolute route"),
                );
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::config::{ConfigDiagnostics, test_parse_config};

    #[test]
    fn test_routes_defaults() {
        let config = test_parse_config("");
        assert_eq!(config.routes.feed, "/rss/feed.xml");
        assert!(config.routes.strip_html);
        assert_eq!(config.routes.export_exclude, vec!["/sitemap.xml", "/auth"]);
    }

    #[test]
    fn test_validate_routes() {
        let config = test_parse_config("[routes]\nfeed = \"\"\nexport_exclude = [\"auth\"]");
        let mut diag = ConfigDiagnostics::new();
        config.routes.validate(&mut diag);
        assert_eq!(diag.len(), 2);
    }
}
