use std::fs;
use std::io;
use std::path::Path;

use super::{split_lines, Storage, VfsError};

/// Storage backed by the local filesystem; locations are file paths.
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalStorage;

impl LocalStorage {
    /// Create filesystem-backed storage
    pub fn new() -> Self {
        LocalStorage
    }
}

impl Storage for LocalStorage {
    fn exists(&self, location: &str) -> Result<bool, VfsError> {
        Ok(Path::new(location).is_file())
    }

    fn read_lines(&self, location: &str) -> Result<Vec<String>, VfsError> {
        match fs::read_to_string(location) {
            Ok(content) => Ok(split_lines(&content)),
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                Err(VfsError::NotFound(location.to_string()))
            }
            Err(e) => Err(e.into()),
        }
    }

    fn write_text(&self, location: &str, content: &str) -> Result<(), VfsError> {
        fs::write(location, content)?;
        Ok(())
    }
}
