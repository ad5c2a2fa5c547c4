pub mod error;
pub mod generator;
pub mod models;
pub mod parser;
pub mod session;
pub mod settings;
pub mod vfs;

// Re-export the main session types for easier access
pub use error::IniError;
pub use session::IniSession;

// Re-export document and grammar types
pub use generator::{serialize, LineEnding};
pub use models::{Document, SectionEntries};
pub use parser::{parse_lines, ParseError};
pub use settings::SessionSettings;
pub use vfs::{LocalStorage, MemoryStorage, Storage, VfsError};
