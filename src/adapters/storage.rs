use crate::core::Storage;
use crate::utils::error::{BucketError, Result};
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

/// Bucket files under a base directory on the local filesystem.
#[derive(Debug, Clone)]
pub struct LocalStorage {
    base_path: PathBuf,
}

impl LocalStorage {
    pub fn new(base_path: impl Into<PathBuf>) -> Self {
        Self {
            base_path: base_path.into(),
        }
    }

    pub fn base_path(&self) -> &Path {
        &self.base_path
    }

    fn storage_error(path: PathBuf, source: std::io::Error) -> BucketError {
        BucketError::StorageError { path, source }
    }
}

impl Storage for LocalStorage {
    fn read_file(&self, path: &Path) -> Result<Option<Vec<u8>>> {
        let full_path = self.base_path.join(path);
        // A file standing where a bucket directory should be also means "no record".
        if !full_path.exists() {
            return Ok(None);
        }

        match fs::read(&full_path) {
            Ok(data) => Ok(Some(data)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(Self::storage_error(full_path, e)),
        }
    }

    fn write_file(&self, path: &Path, data: &[u8]) -> Result<()> {
        let full_path = self.base_path.join(path);

        if let Some(parent) = full_path.parent() {
            fs::create_dir_all(parent).map_err(|e| Self::storage_error(parent.to_path_buf(), e))?;
        }

        fs::write(&full_path, data).map_err(|e| Self::storage_error(full_path.clone(), e))?;
        Ok(())
    }
}
