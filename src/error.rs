use thiserror::Error;

use crate::parser::ParseError;
use crate::vfs::VfsError;

/// Errors returned by session operations
#[derive(Error, Debug)]
pub enum IniError {
    #[error("INI file not found: {0}")]
    NotFound(String),

    #[error("Failed to parse {location}: {source}")]
    Parse {
        location: String,
        #[source]
        source: ParseError,
    },

    #[error("Storage error: {0}")]
    Io(#[from] VfsError),
}

impl IniError {
    /// Whether the document had no lines at all
    pub fn is_empty_source(&self) -> bool {
        matches!(
            self,
            IniError::Parse {
                source: ParseError::EmptySource,
                ..
            }
        )
    }

    /// The grammar error behind this failure, if any
    pub fn parse_error(&self) -> Option<&ParseError> {
        match self {
            IniError::Parse { source, .. } => Some(source),
            _ => None,
        }
    }
}
