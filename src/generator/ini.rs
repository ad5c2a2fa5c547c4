//! INI text output
//!
//! Writes one `[section]` header per section followed by its `key=value`
//! lines, with no blank separators. Comments and blank lines from the source
//! are not preserved.

use serde::{Deserialize, Serialize};

use crate::models::Document;

/// Line terminator used when writing a document
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LineEnding {
    /// `\r\n` on Windows, `\n` elsewhere
    #[default]
    Native,
    Lf,
    CrLf,
}

impl LineEnding {
    /// Terminator text written after every line
    pub fn as_str(self) -> &'static str {
        match self {
            LineEnding::Native => {
                if cfg!(windows) {
                    "\r\n"
                } else {
                    "\n"
                }
            }
            LineEnding::Lf => "\n",
            LineEnding::CrLf => "\r\n",
        }
    }
}

/// Render a document with the given line terminator
pub fn write_document(document: &Document, line_ending: LineEnding) -> String {
    let eol = line_ending.as_str();
    let mut output = String::new();

    for (section, entries) in document.sections() {
        output.push('[');
        output.push_str(section);
        output.push(']');
        output.push_str(eol);

        for (key, value) in entries {
            output.push_str(key);
            output.push('=');
            output.push_str(value);
            output.push_str(eol);
        }
    }

    output
}

/// Render a document with the platform's native line terminator
pub fn serialize(document: &Document) -> String {
    write_document(document, LineEnding::Native)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::ini_parser::parse_str;

    #[test]
    fn test_write_document() {
        let doc = parse_str(
            "; header comment\n[Numbers]\nBinary = 11001010\n\nOctal=312 # c\n[Strings]\nText=Hello",
        )
        .unwrap();
        assert_eq!(
            write_document(&doc, LineEnding::Lf),
            "[Numbers]\nBinary=11001010\nOctal=312\n[Strings]\nText=Hello\n"
        );
        assert_eq!(
            write_document(&doc, LineEnding::CrLf),
            "[Numbers]\r\nBinary=11001010\r\nOctal=312\r\n[Strings]\r\nText=Hello\r\n"
        );
    }

    #[test]
    fn test_default_section_header() {
        let doc = parse_str("top=1\n[A]\nk=2").unwrap();
        assert_eq!(write_document(&doc, LineEnding::Lf), "[]\ntop=1\n[A]\nk=2\n");
    }

    #[test]
    fn test_empty_document() {
        assert_eq!(serialize(&Document::new()), "");
    }

    #[test]
    fn test_round_trip() {
        let source = "global=yes\n[Numbers]\nBinary=11001010\nOctal=312 ; c\n\
                      [Strings]\nText = Hello\nBase64=SGVsbG8=\n[ Spaced ]\nempty=\n[Numbers]\nHex=CA";
        let doc = parse_str(source).unwrap();
        for line_ending in [LineEnding::Native, LineEnding::Lf, LineEnding::CrLf] {
            let reparsed = parse_str(&write_document(&doc, line_ending)).unwrap();
            assert_eq!(reparsed, doc);
            let order: Vec<_> = reparsed.iter().collect();
            let expected: Vec<_> = doc.iter().collect();
            assert_eq!(order, expected);
        }
    }

    #[test]
    fn test_line_ending_from_toml_name() {
        #[derive(Deserialize)]
        struct Wrapper {
            line_ending: LineEnding,
        }
        let parsed: Wrapper = toml::from_str("line_ending = \"crlf\"").unwrap();
        assert_eq!(parsed.line_ending, LineEnding::CrLf);
        assert_eq!(LineEnding::default(), LineEnding::Native);
    }
}
