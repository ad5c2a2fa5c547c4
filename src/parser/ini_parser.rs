//! Line grammar for INI documents
//!
//! Each line has everything from the first `;` or `#` removed, then is
//! trimmed. Blank lines are skipped, `[name]` switches the current section and
//! anything else must be `key=value`, split on the first `=`.

use log::debug;
use thiserror::Error;

use crate::models::Document;

/// Characters that start a comment anywhere on a line
pub const COMMENT_MARKERS: [char; 2] = [';', '#'];

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    #[error("Empty document")]
    EmptySource,

    #[error("Line {line}: expected `key=value`, found `{content}`")]
    MalformedLine { line: usize, content: String },

    #[error("Line {line}: duplicate key `{key}` in section [{section}]")]
    DuplicateKey {
        line: usize,
        section: String,
        key: String,
    },
}

/// One meaningful line after comment stripping
#[derive(Debug, PartialEq, Eq)]
enum Line<'a> {
    Blank,
    Section(&'a str),
    Entry { key: &'a str, value: &'a str },
}

fn strip_comment(line: &str) -> &str {
    match line.find(&COMMENT_MARKERS[..]) {
        Some(pos) => &line[..pos],
        None => line,
    }
}

fn classify(raw: &str) -> Option<Line<'_>> {
    let line = strip_comment(raw).trim();
    if line.is_empty() {
        return Some(Line::Blank);
    }

    if line.len() >= 2 && line.starts_with('[') && line.ends_with(']') {
        return Some(Line::Section(&line[1..line.len() - 1]));
    }

    let (key, value) = line.split_once('=')?;
    Some(Line::Entry {
        key: key.trim(),
        value: value.trim(),
    })
}

/// Parse a sequence of lines into a new document.
///
/// The document is only returned when every line is valid; nothing partial
/// escapes on error.
pub fn parse_lines<I, S>(lines: I) -> Result<Document, ParseError>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut lines = lines.into_iter().peekable();
    if lines.peek().is_none() {
        return Err(ParseError::EmptySource);
    }

    let mut document = Document::new();
    let mut current_section = String::new();

    for (index, raw) in lines.enumerate() {
        let raw = raw.as_ref();
        let line = index + 1;

        match classify(raw) {
            Some(Line::Blank) => {}
            Some(Line::Section(name)) => current_section = name.to_string(),
            Some(Line::Entry { key, value }) => {
                if !document.insert_new(&current_section, key, value) {
                    return Err(ParseError::DuplicateKey {
                        line,
                        section: current_section,
                        key: key.to_string(),
                    });
                }
            }
            None => {
                return Err(ParseError::MalformedLine {
                    line,
                    content: raw.trim().to_string(),
                })
            }
        }
    }

    debug!(
        "Parsed {} entries in {} sections",
        document.len(),
        document.section_names().count()
    );
    Ok(document)
}

/// Parse INI text, splitting it into lines first
pub fn parse_str(content: &str) -> Result<Document, ParseError> {
    parse_lines(content.lines())
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = "[Numbers]\nBinary=11001010\nOctal=312 ; inline comment\n[Strings]\nText = Hello\n";

    #[test]
    fn test_strip_comment() {
        assert_eq!(strip_comment("a=1 ; note"), "a=1 ");
        assert_eq!(strip_comment("a=1 # note ; more"), "a=1 ");
        assert_eq!(strip_comment("; whole line"), "");
        assert_eq!(strip_comment("a=1"), "a=1");
    }

    #[test]
    fn test_classify() {
        assert_eq!(classify("   "), Some(Line::Blank));
        assert_eq!(classify("# [Hidden]"), Some(Line::Blank));
        assert_eq!(classify("  [Main] ; c"), Some(Line::Section("Main")));
        assert_eq!(classify("[]"), Some(Line::Section("")));
        assert_eq!(classify("[ Spaced ]"), Some(Line::Section(" Spaced ")));
        assert_eq!(
            classify("url = a=b"),
            Some(Line::Entry {
                key: "url",
                value: "a=b"
            })
        );
        assert_eq!(
            classify("empty="),
            Some(Line::Entry {
                key: "empty",
                value: ""
            })
        );
        assert_eq!(classify("garbage"), None);
        assert_eq!(classify("[open"), None);
        assert_eq!(
            classify(" = value"),
            Some(Line::Entry {
                key: "",
                value: "value"
            })
        );
    }

    #[test]
    fn test_parse_sample() {
        let doc = parse_str(SAMPLE).unwrap();
        assert_eq!(doc.get("Numbers", "Binary"), Some("11001010"));
        assert_eq!(doc.get("Numbers", "Octal"), Some("312"));
        assert_eq!(doc.get("Strings", "Text"), Some("Hello"));
        assert_eq!(doc.len(), 3);

        let keys: Vec<_> = doc.section_entries("Numbers").keys().cloned().collect();
        assert_eq!(keys, vec!["Binary", "Octal"]);
    }

    #[test]
    fn test_default_section() {
        let doc = parse_str("top=1\n[A]\nk=2").unwrap();
        assert_eq!(doc.get("", "top"), Some("1"));
        assert_eq!(doc.get("A", "k"), Some("2"));
        let names: Vec<_> = doc.section_names().collect();
        assert_eq!(names, vec!["", "A"]);
    }

    #[test]
    fn test_empty_source() {
        assert_eq!(parse_str(""), Err(ParseError::EmptySource));
        assert_eq!(
            parse_lines(Vec::<String>::new()),
            Err(ParseError::EmptySource)
        );
    }

    #[test]
    fn test_only_comments_is_not_empty_source() {
        let doc = parse_str("; nothing here\n\n# still nothing").unwrap();
        assert!(doc.is_empty());
    }

    #[test]
    fn test_malformed_line() {
        let err = parse_str("[A]\nk=1\ngarbage\n").unwrap_err();
        assert_eq!(
            err,
            ParseError::MalformedLine {
                line: 3,
                content: "garbage".to_string()
            }
        );
    }

    #[test]
    fn test_duplicate_key() {
        let err = parse_str("[A]\nK=1\nK=2").unwrap_err();
        assert_eq!(
            err,
            ParseError::DuplicateKey {
                line: 3,
                section: "A".to_string(),
                key: "K".to_string()
            }
        );
    }

    #[test]
    fn test_same_key_in_other_section() {
        let doc = parse_str("[A]\nK=1\n[B]\nK=2").unwrap();
        assert_eq!(doc.get("A", "K"), Some("1"));
        assert_eq!(doc.get("B", "K"), Some("2"));
    }

    #[test]
    fn test_reopened_section_is_merged() {
        let doc = parse_str("[A]\nx=1\n[B]\ny=2\n[A]\nz=3").unwrap();
        let entries: Vec<_> = doc.iter().collect();
        assert_eq!(
            entries,
            vec![("A", "x", "1"), ("A", "z", "3"), ("B", "y", "2")]
        );
        assert!(matches!(
            parse_str("[A]\nx=1\n[B]\n[A]\nx=2"),
            Err(ParseError::DuplicateKey { line: 5, .. })
        ));
    }

    #[test]
    fn test_empty_key_round_trips() {
        let doc = parse_str("[A]\n = x\nk=v").unwrap();
        assert_eq!(doc.get("A", ""), Some("x"));
        assert_eq!(parse_str(&doc.to_string()).unwrap(), doc);
    }

    #[test]
    fn test_empty_header_without_entries_is_dropped() {
        let doc = parse_str("[Empty]\n[Full]\nk=v").unwrap();
        assert!(!doc.section_exists("Empty"));
        assert!(doc.section_entries("Empty").is_empty());
    }

    #[test]
    fn test_crlf_lines() {
        let doc = parse_str("[A]\r\nk = v \r\n").unwrap();
        assert_eq!(doc.get("A", "k"), Some("v"));
    }
}
