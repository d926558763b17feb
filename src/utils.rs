//! Utility functions
use std::path::Path;

use log::{debug, warn};
use tempfile::{Builder, TempDir};

use crate::errors::{Gh2bbError, Gh2bbErrorKind};

/// Temporary folder removed (recursively) when dropped
#[derive(Debug)]
pub struct TempFolder {
    /// Underlying directory, taken on drop
    dir: Option<TempDir>,
}

impl TempFolder {
    /// Create a new uniquely named folder under the OS temp dir
    /// # Errors
    /// `TempDir` if the folder can't be created
    pub fn new(prefix: &str) -> Result<Self, Gh2bbError> {
        Self::from_builder(Builder::new().prefix(prefix).tempdir())
    }

    /// Create a new uniquely named folder under `parent`
    /// # Errors
    /// `TempDir` if the folder can't be created
    pub fn new_in(parent: &Path, prefix: &str) -> Result<Self, Gh2bbError> {
        Self::from_builder(Builder::new().prefix(prefix).tempdir_in(parent))
    }

    /// Wrap the result of a [`Builder`]
    fn from_builder(dir: std::io::Result<TempDir>) -> Result<Self, Gh2bbError> {
        let dir = dir.map_err(|e| {
            Gh2bbError::new(Gh2bbErrorKind::TempDir)
                .with_text("creating temp dir")
                .with_source(e)
        })?;
        debug!("Created {}", dir.path().display());
        Ok(Self { dir: Some(dir) })
    }

    /// Path of the folder
    pub fn path(&self) -> &Path {
        match &self.dir {
            Some(dir) => dir.path(),
            None => Path::new(""),
        }
    }
}

impl Drop for TempFolder {
    fn drop(&mut self) {
        if let Some(dir) = self.dir.take() {
            let path = dir.path().to_path_buf();
            debug!("Cleaning up {}", path.display());
            if let Err(e) = dir.close() {
                warn!("Unable to remove {}: {e}", path.display());
            }
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn removed_on_drop() {
        let folder = TempFolder::new("gh2bb-test-").unwrap();
        let path = folder.path().to_path_buf();
        std::fs::create_dir(path.join("repo.git")).unwrap();
        std::fs::write(path.join("repo.git").join("HEAD"), "ref: refs/heads/main").unwrap();
        assert!(path.is_dir());
        drop(folder);
        assert!(!path.exists());
    }

    #[test]
    fn unique_names() {
        let a = TempFolder::new("gh2bb-test-").unwrap();
        let b = TempFolder::new("gh2bb-test-").unwrap();
        assert_ne!(a.path(), b.path());
        assert!(a
            .path()
            .file_name()
            .and_then(|n| n.to_str())
            .is_some_and(|n| n.starts_with("gh2bb-test-")));
    }

    #[test]
    fn missing_parent_fails() {
        let root = tempfile::tempdir().unwrap();
        let parent = root.path().join("does-not-exist").join("nested");
        let err = TempFolder::new_in(&parent, "gh2bb-").unwrap_err();
        assert_eq!(err.kind(), &Gh2bbErrorKind::TempDir);
    }

    #[test]
    fn removal_failure_is_not_fatal() {
        let folder = TempFolder::new("gh2bb-test-").unwrap();
        let path = folder.path().to_path_buf();
        std::fs::remove_dir_all(&path).unwrap();
        drop(folder);
        assert!(!path.exists());
    }
}
