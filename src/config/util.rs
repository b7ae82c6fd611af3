//! Configuration utility functions.

use std::path::{Path, PathBuf};

/// Find config file by searching upward from current directory
///
/// Starts from cwd and walks up parent directories until finding `config_name`
/// Returns the absolute path to the config file if found
///
/// # Example
/// ```text
/// /home/user/blog/themes/simple/  ← cwd
/// /home/user/blog/blog.toml       ← found!
/// ```
pub fn find_config_file(config_name: &Path) -> Option<PathBuf> {
    let cwd = std::env::current_dir().ok()?;
    find_config_from(&cwd, config_name)
}

/// Same as [`find_config_file`], starting from `start`.
pub fn find_config_from(start: &Path, config_name: &Path) -> Option<PathBuf> {
    if config_name.is_absolute() {
        return config_name.exists().then(|| config_name.to_path_buf());
    }

    let mut current = start;
    loop {
        let candidate = current.join(config_name);
        if candidate.exists() {
            return Some(candidate);
        }

        match current.parent() {
            Some(parent) => current = parent,
            None => return None, // Reached filesystem root
        }
    }
}

/// Resolve a configured directory against the project root.
///
/// Expands a leading `~`, joins relative paths onto `root`, then tries
/// `canonicalize()` and falls back to the joined path when the directory
/// does not exist yet.
pub fn resolve_dir(path: &Path, root: &Path) -> PathBuf {
    let expanded = match path.to_str() {
        Some(s) => PathBuf::from(shellexpand::tilde(s).into_owned()),
        None => path.to_path_buf(),
    };
    let full = if expanded.is_relative() {
        root.join(expanded)
    } else {
        expanded
    };
    full.canonicalize().unwrap_or(full)
}

// ============================================================================
// tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn test_find_config_walks_upward() {
        let dir = tempfile::tempdir().unwrap();
        let root = dir.path().canonicalize().unwrap();
        fs::write(root.join("blog.toml"), "").unwrap();
        let nested = root.join("themes/simple");
        fs::create_dir_all(&nested).unwrap();

        let found = find_config_from(&nested, Path::new("blog.toml"));
        assert_eq!(found, Some(root.join("blog.toml")));
    }

    #[test]
    fn test_find_config_missing() {
        let dir = tempfile::tempdir().unwrap();
        let found = find_config_from(dir.path(), Path::new("no-such-config-7f3a.toml"));
        assert_eq!(found, None);
    }

    #[test]
    fn test_find_config_absolute() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("site.toml");
        assert_eq!(find_config_from(dir.path(), &path), None);
        fs::write(&path, "").unwrap();
        assert_eq!(find_config_from(Path::new("/"), &path), Some(path));
    }

    #[test]
    fn test_resolve_dir_relative() {
        let resolved = resolve_dir(Path::new("themes"), Path::new("/srv/blog-missing"));
        assert_eq!(resolved, PathBuf::from("/srv/blog-missing/themes"));
    }

    #[test]
    fn test_resolve_dir_absolute() {
        let resolved = resolve_dir(Path::new("/opt/themes-missing"), Path::new("/srv/blog"));
        assert_eq!(resolved, PathBuf::from("/opt/themes-missing"));
    }

    #[test]
    fn test_resolve_dir_existing_is_canonical() {
        let dir = tempfile::tempdir().unwrap();
        fs::create_dir(dir.path().join("public")).unwrap();
        let resolved = resolve_dir(Path::new("./public"), dir.path());
        assert_eq!(resolved, dir.path().canonicalize().unwrap().join("public"));
    }
}
