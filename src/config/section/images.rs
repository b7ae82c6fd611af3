//! `[images]` section configuration.
//!
//! Remote image hosts and preferred output formats for the framework's
//! image optimizer.
//!
//! # Example
//!
//! ```toml
//! [images]
//! formats = ["image/avif", "image/webp"]
//! domains = ["www.notion.so", "images.unsplash.com"]
//! ```

use crate::config::{ConfigDiagnostics, FieldPath};
use serde::{Deserialize, Serialize};

const DEFAULT_DOMAINS: &[&str] = &[
    "gravatar.com",
    "www.notion.so",
    "avatars.githubusercontent.com",
    "images.unsplash.com",
    "source.unsplash.com",
    "p1.qhimg.com",
    "webmention.io",
    "ko-fi.com",
];

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ImagesConfig {
    /// Output formats, in preference order.
    pub formats: Vec<String>,

    /// Hosts allowed as remote image sources.
    pub domains: Vec<String>,
}

impl Default for ImagesConfig {
    fn default() -> Self {
        Self {
            formats: vec!["image/avif".into(), "image/webp".into()],
            domains: DEFAULT_DOMAINS.iter().map(|d| (*d).to_string()).collect(),
        }
    }
}

impl ImagesConfig {
    pub const FORMATS: FieldPath = FieldPath::new("images.formats");
    pub const DOMAINS: FieldPath = FieldPath::new("images.domains");

    /// Validate image configuration.
    ///
    /// # Checks
    /// - each domain is a bare host (no scheme, port, path)
    /// - each format is an `image/*` MIME type
    pub fn validate(&self, diag: &mut ConfigDiagnostics) {
        for domain in &self.domains {
            if !is_bare_host(domain) {
                diag.error_with_hint(
                    Self::DOMAINS,
                    format!("'{domain}' is not a bare host name"),
                    "use format like images.unsplash.com",
                );
            }
        }

        for format in &self.formats {
            if !format.starts_with("image/") || format.len() == "image/".len() {
                diag.error(Self::FORMATS, format!("'{format}' is not an image MIME type"));
            }
        }
    }
}

/// Whether `domain` parses as exactly a host, e.g. `www.notion.so`.
fn is_bare_host(domain: &str) -> bool {
    if domain.is_empty() || domain.contains(['/', ':', '@', '?', '#']) {
        return false;
    }
    url::Url::parse(&format!("https://{domain}"))
        .ok()
        .and_then(|parsed| parsed.host_str().map(|host| host.eq_ignore_ascii_case(domain)))
        .unwrap_or(false)
}
