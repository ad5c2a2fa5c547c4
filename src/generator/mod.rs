pub mod ini;

pub use ini::{serialize, write_document, LineEnding};
