//! Filesystem capability.
//!
//! Theme discovery and prebuild cleanup only touch the disk through
//! [`FileSystem`], so their logic can be exercised against [`MemoryFs`]
//! without real directories.

use std::io;
use std::path::Path;
#[cfg(test)]
use std::path::PathBuf;

/// A directory entry: file name and whether it is a directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirEntry {
    pub name: String,
    pub is_dir: bool,
}

/// The filesystem operations this crate needs.
pub trait FileSystem {
    /// List the immediate children of `dir`.
    fn read_dir(&self, dir: &Path) -> io::Result<Vec<DirEntry>>;

    /// Whether `path` exists and is a regular file.
    fn is_file(&self, path: &Path) -> bool;

    /// Delete a file.
    fn remove_file(&self, path: &Path) -> io::Result<()>;
}

/// [`FileSystem`] backed by `std::fs`.
#[derive(Debug, Clone, Copy, Default)]
pub struct RealFs;

impl FileSystem for RealFs {
    fn read_dir(&self, dir: &Path) -> io::Result<Vec<DirEntry>> {
        let mut entries = Vec::new();
        for entry in std::fs::read_dir(dir)? {
            let entry = entry?;
            // Follow symlinks, a linked theme directory still counts
            let is_dir = std::fs::metadata(entry.path())
                .map(|m| m.is_dir())
                .unwrap_or(false);
            entries.push(DirEntry {
                name: entry.file_name().to_string_lossy().into_owned(),
                is_dir,
            });
        }
        Ok(entries)
    }

    fn is_file(&self, path: &Path) -> bool {
        path.is_file()
    }

    fn remove_file(&self, path: &Path) -> io::Result<()> {
        std::fs::remove_file(path)
    }
}

/// In-memory [`FileSystem`] for tests.
#[cfg(test)]
#[derive(Debug, Default)]
pub struct MemoryFs {
    dirs: std::cell::RefCell<std::collections::BTreeSet<PathBuf>>,
    files: std::cell::RefCell<std::collections::BTreeSet<PathBuf>>,
}

#[cfg(test)]
impl MemoryFs {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a directory (and its ancestors).
    pub fn with_dir(self, path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let mut dirs = self.dirs.borrow_mut();
        for ancestor in path.ancestors() {
            if !ancestor.as_os_str().is_empty() {
                dirs.insert(ancestor.to_path_buf());
            }
        }
        drop(dirs);
        self
    }

    /// Add a file (and its parent directories).
    pub fn with_file(self, path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let this = match path.parent() {
            Some(parent) => self.with_dir(parent),
            None => self,
        };
        this.files.borrow_mut().insert(path);
        this
    }

    pub fn has_file(&self, path: &Path) -> bool {
        self.files.borrow().contains(path)
    }
}

#[cfg(test)]
impl FileSystem for MemoryFs {
    fn read_dir(&self, dir: &Path) -> io::Result<Vec<DirEntry>> {
        if !self.dirs.borrow().contains(dir) {
            return Err(io::Error::new(io::ErrorKind::NotFound, "no such directory"));
        }
        let child_name = |p: &PathBuf| -> Option<String> {
            if p.parent() != Some(dir) {
                return None;
            }
            p.file_name().map(|n| n.to_string_lossy().into_owned())
        };
        let mut entries: Vec<DirEntry> = self
            .dirs
            .borrow()
            .iter()
            .filter_map(|p| child_name(p).map(|name| DirEntry { name, is_dir: true }))
            .collect();
        entries.extend(
            self.files
                .borrow()
                .iter()
                .filter_map(|p| child_name(p).map(|name| DirEntry { name, is_dir: false })),
        );
        Ok(entries)
    }

    fn is_file(&self, path: &Path) -> bool {
        self.files.borrow().contains(path)
    }

    fn remove_file(&self, path: &Path) -> io::Result<()> {
        if self.files.borrow_mut().remove(path) {
            Ok(())
        } else {
            Err(io::Error::new(io::ErrorKind::NotFound, "no such file"))
        }
    }
}
