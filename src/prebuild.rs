//! Pre-build cleanup.
//!
//! The framework generates `/sitemap.xml` from a page route. A static
//! `sitemap.xml` left in the public directory or the project root would
//! shadow it, so both are removed before a build or export.

use crate::{log, utils::fs::FileSystem};
use anyhow::{Context, Result};
use std::path::{Path, PathBuf};

const SITEMAP: &str = "sitemap.xml";

/// Package-manager lifecycle events that trigger cleanup.
const BUILD_LIFECYCLES: &[&str] = &["build", "export"];

/// Whether cleanup should run for the given lifecycle event.
///
/// Without an event (direct invocation) nothing is deleted.
pub fn should_clean(lifecycle: Option<&str>) -> bool {
    lifecycle.is_some_and(|event| BUILD_LIFECYCLES.contains(&event))
}

/// Remove stale sitemap files; returns the deleted paths.
pub fn clean_stale_sitemaps(
    fs: &impl FileSystem,
    root: &Path,
    public_dir: &Path,
    lifecycle: Option<&str>,
) -> Result<Vec<PathBuf>> {
    if !should_clean(lifecycle) {
        return Ok(Vec::new());
    }

    let candidates = [
        (public_dir.join(SITEMAP), "public directory"),
        (root.join(SITEMAP), "root directory"),
    ];

    let mut removed = Vec::new();
    for (path, location) in candidates {
        if !fs.is_file(&path) {
            continue;
        }
        fs.remove_file(&path)
            .with_context(|| format!("failed to delete {}", path.display()))?;
        log!("prebuild"; "deleted existing {} from {}", SITEMAP, location);
        removed.push(path);
    }
    Ok(removed)
}
