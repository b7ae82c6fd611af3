//! Theme discovery.
//!
//! Every immediate subdirectory of the themes root is a theme. Names are
//! sorted so the runtime theme list does not depend on directory order.

use crate::utils::fs::FileSystem;
use anyhow::{Context, Result};
use std::path::Path;

/// Names of the immediate subdirectories of `root`.
pub fn scan_themes(fs: &impl FileSystem, root: &Path) -> Result<Vec<String>> {
    let entries = fs
        .read_dir(root)
        .with_context(|| format!("failed to scan themes directory {}", root.display()))?;

    let mut themes: Vec<String> = entries
        .into_iter()
        .filter(|entry| entry.is_dir)
        .map(|entry| entry.name)
        .collect();
    themes.sort_unstable();
    Ok(themes)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::fs::{MemoryFs, RealFs};
    use std::fs;

    #[test]
    fn test_scan_memory_fs() {
        let mem = MemoryFs::new()
            .with_dir("/blog/themes/simple")
            .with_dir("/blog/themes/hexo/components")
            .with_dir("/blog/themes/fukasawa")
            .with_file("/blog/themes/theme.js");

        let themes = scan_themes(&mem, Path::new("/blog/themes")).unwrap();
        assert_eq!(themes, vec!["fukasawa", "hexo", "simple"]);
    }

    #[test]
    fn test_scan_empty_root() {
        let mem = MemoryFs::new().with_dir("/blog/themes");
        assert!(scan_themes(&mem, Path::new("/blog/themes")).unwrap().is_empty());
    }

    #[test]
    fn test_scan_missing_root() {
        let err = scan_themes(&MemoryFs::new(), Path::new("/blog/themes")).unwrap_err();
        assert!(err.to_string().contains("/blog/themes"));
    }

    #[test]
    fn test_scan_real_fs() {
        let dir = tempfile::tempdir().unwrap();
        fs::create_dir(dir.path().join("next")).unwrap();
        fs::create_dir(dir.path().join("heo")).unwrap();
        fs::write(dir.path().join("index.js"), "").unwrap();

        let themes = scan_themes(&RealFs, dir.path()).unwrap();
        assert_eq!(themes, vec!["heo", "next"]);
    }
}
