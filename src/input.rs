//! Document acquisition: read text from a file or stdin, parse it with
//! JSON-path context in errors, then optionally narrow it with a pointer.
use std::fmt;
use std::fs;
use std::io::{self, BufRead};
use std::path::PathBuf;

use serde_json::Value;
use tracing::debug;

use crate::error::InputError;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Source {
    /// Standard input, read line by line until the first empty line or EOF.
    Stdin,
    Path(PathBuf),
}

impl Source {
    /// `-` means stdin, anything else is a path.
    pub fn parse(raw: &str) -> Self {
        match raw {
            "-" => Self::Stdin,
            path => Self::Path(PathBuf::from(path)),
        }
    }
}

impl fmt::Display for Source {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Stdin => f.write_str("<stdin>"),
            Self::Path(path) => write!(f, "{}", path.display()),
        }
    }
}

/// Collect lines up to (not including) the first empty one. A document pasted
/// interactively ends with a blank line instead of requiring EOF.
pub fn read_until_blank_line(reader: impl BufRead) -> io::Result<String> {
    let mut text = String::new();
    for line in reader.lines() {
        let line = line?;
        if line.is_empty() {
            break;
        }
        text.push_str(&line);
        text.push('\n');
    }
    Ok(text)
}

pub fn read_text(source: &Source) -> Result<String, InputError> {
    match source {
        Source::Stdin => read_until_blank_line(io::stdin().lock()).map_err(InputError::Stdin),
        Source::Path(path) => fs::read_to_string(path).map_err(|source| InputError::Read {
            path: path.clone(),
            source,
        }),
    }
}

/// Parse a whole document. Errors carry the JSON path reached before the
/// failure; trailing content after the value is rejected.
pub fn parse_document(text: &str, origin: &str) -> Result<Value, InputError> {
    let parse_error = |path: String, message: String| InputError::Parse {
        origin: origin.to_string(),
        path,
        message,
    };
    let mut de = serde_json::Deserializer::from_str(text);
    let value: Value = serde_path_to_error::deserialize(&mut de)
        .map_err(|err| parse_error(err.path().to_string(), err.into_inner().to_string()))?;
    de.end().map_err(|err| parse_error(".".to_string(), err.to_string()))?;
    Ok(value)
}

/// Narrow `value` to the node at `pointer` (RFC 6901). `None` and `""` keep
/// the whole document.
pub fn select(value: Value, pointer: Option<&str>) -> Result<Value, InputError> {
    match pointer {
        None | Some("") => Ok(value),
        Some(pointer) => {
            let mut value = value;
            value
                .pointer_mut(pointer)
                .map(Value::take)
                .ok_or_else(|| InputError::PointerNotFound(pointer.to_string()))
        }
    }
}

pub fn load(source: &Source, pointer: Option<&str>) -> Result<Value, InputError> {
    let text = read_text(source)?;
    debug!(%source, bytes = text.len(), "read input");
    let value = parse_document(&text, &source.to_string())?;
    select(value, pointer)
}

// ---------------------------------- Tests ---------------------------------- //

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::io::{Cursor, Write};

    #[test]
    fn dash_means_stdin() {
        assert_eq!(Source::parse("-"), Source::Stdin);
        assert_eq!(Source::parse("data.json"), Source::Path("data.json".into()));
        assert_eq!(Source::Stdin.to_string(), "<stdin>");
    }

    #[test]
    fn stdin_reading_stops_at_first_blank_line() {
        let input = Cursor::new("{\"a\":\n 1}\n\n{\"ignored\": true}\n");
        assert_eq!(read_until_blank_line(input).unwrap(), "{\"a\":\n 1}\n");
    }

    #[test]
    fn stdin_reading_stops_at_eof() {
        let input = Cursor::new("[1, 2]");
        assert_eq!(read_until_blank_line(input).unwrap(), "[1, 2]\n");
        assert_eq!(read_until_blank_line(Cursor::new("")).unwrap(), "");
    }

    #[test]
    fn parse_errors_report_the_json_path() {
        let err = parse_document(r#"{"user": {"tags": [1, }}"#, "doc.json").unwrap_err();
        match err {
            InputError::Parse { origin, path, .. } => {
                assert_eq!(origin, "doc.json");
                assert!(path.starts_with("user.tags"), "path was {path}");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn trailing_content_is_rejected() {
        assert!(matches!(parse_document("{} {}", "x"), Err(InputError::Parse { .. })));
        assert!(matches!(parse_document("", "x"), Err(InputError::Parse { .. })));
    }

    #[test]
    fn pointer_selects_a_subnode() {
        let doc = json!({"data": {"items": [{"id": 1}]}});
        assert_eq!(select(doc.clone(), Some("/data/items/0")).unwrap(), json!({"id": 1}));
        assert_eq!(select(doc.clone(), None).unwrap(), doc);
        assert_eq!(select(doc.clone(), Some("")).unwrap(), doc);

        let err = select(doc, Some("/data/missing")).unwrap_err();
        assert!(matches!(err, InputError::PointerNotFound(p) if p == "/data/missing"));
    }

    #[test]
    fn loads_and_narrows_a_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{"payload": {{"name": "x"}}}}"#).unwrap();
        let source = Source::Path(file.path().to_path_buf());
        assert_eq!(load(&source, Some("/payload")).unwrap(), json!({"name": "x"}));
    }

    #[test]
    fn missing_files_are_read_errors() {
        let tmp = tempfile::tempdir().unwrap();
        let source = Source::Path(tmp.path().join("absent.json"));
        assert!(matches!(load(&source, None), Err(InputError::Read { .. })));
    }
}
