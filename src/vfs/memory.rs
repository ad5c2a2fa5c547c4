use std::cell::{Cell, RefCell};
use std::collections::HashMap;

use super::{split_lines, Storage, VfsError};

/// In-memory storage keyed by location name.
///
/// Counts writes per location and can refuse writes, which makes it handy for
/// observing save behavior without touching the disk.
#[derive(Debug, Default)]
pub struct MemoryStorage {
    files: RefCell<HashMap<String, String>>,
    writes: RefCell<HashMap<String, usize>>,
    read_only: Cell<bool>,
}

impl MemoryStorage {
    /// Create empty in-memory storage
    pub fn new() -> Self {
        Self::default()
    }

    /// Create storage holding a single location
    pub fn with_file(location: &str, content: &str) -> Self {
        let storage = Self::new();
        storage.insert(location, content);
        storage
    }

    /// Put content at a location without counting it as a write
    pub fn insert(&self, location: &str, content: &str) {
        self.files
            .borrow_mut()
            .insert(location.to_string(), content.to_string());
    }

    /// Drop a location, returning its content
    pub fn remove(&self, location: &str) -> Option<String> {
        self.files.borrow_mut().remove(location)
    }

    /// Current content of a location
    pub fn content(&self, location: &str) -> Option<String> {
        self.files.borrow().get(location).cloned()
    }

    /// Number of successful `write_text` calls for a location
    pub fn write_count(&self, location: &str) -> usize {
        self.writes.borrow().get(location).copied().unwrap_or(0)
    }

    /// Make every following write fail
    pub fn set_read_only(&self, read_only: bool) {
        self.read_only.set(read_only);
    }
}

impl Storage for MemoryStorage {
    fn exists(&self, location: &str) -> Result<bool, VfsError> {
        Ok(self.files.borrow().contains_key(location))
    }

    fn read_lines(&self, location: &str) -> Result<Vec<String>, VfsError> {
        self.files
            .borrow()
            .get(location)
            .map(|content| split_lines(content))
            .ok_or_else(|| VfsError::NotFound(location.to_string()))
    }

    fn write_text(&self, location: &str, content: &str) -> Result<(), VfsError> {
        if self.read_only.get() {
            return Err(VfsError::StorageError(format!(
                "{} is read-only",
                location
            )));
        }
        self.insert(location, content);
        *self
            .writes
            .borrow_mut()
            .entry(location.to_string())
            .or_insert(0) += 1;
        Ok(())
    }
}
