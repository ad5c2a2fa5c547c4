pub mod local;
pub mod memory;

use thiserror::Error;

pub use local::LocalStorage;
pub use memory::MemoryStorage;

#[derive(Error, Debug)]
pub enum VfsError {
    #[error("File not found: {0}")]
    NotFound(String),

    #[error("Storage error: {0}")]
    StorageError(String),

    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),
}

/// Whole-file access to the place a document lives.
///
/// Every call reads or writes the entire location; there is no partial I/O.
pub trait Storage {
    fn exists(&self, location: &str) -> Result<bool, VfsError>;

    /// Read the location as text lines, without terminators.
    ///
    /// An empty location yields no lines, and a trailing terminator does not
    /// produce an extra empty line.
    fn read_lines(&self, location: &str) -> Result<Vec<String>, VfsError>;

    /// Replace the contents of the location with `content`
    fn write_text(&self, location: &str, content: &str) -> Result<(), VfsError>;
}

/// Split text the way `read_lines` reports it, dropping a leading BOM
pub(crate) fn split_lines(content: &str) -> Vec<String> {
    content
        .strip_prefix('\u{feff}')
        .unwrap_or(content)
        .lines()
        .map(str::to_string)
        .collect()
}
