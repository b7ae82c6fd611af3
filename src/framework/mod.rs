//! Framework-facing output.
//!
//! - [`SiteDirectives`]: locales, rewrites and themes, derived once
//! - [`FrameworkConfig`]: the complete document handed to the framework

mod directives;
mod document;

pub use directives::SiteDirectives;
pub use document::{FrameworkConfig, filter_export_paths};
