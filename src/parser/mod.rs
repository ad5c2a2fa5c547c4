pub mod ini_parser;

pub use ini_parser::{parse_lines, parse_str, ParseError};
