//! Reading JSON records from files or stdin

use crate::error::{DaylogError, Result};
use serde_json::Value;
use std::fs;
use std::io::Read;
use std::path::Path;

/// Read one JSON document from `path`, or from stdin when `path` is `None`
/// or `-`
pub fn read_json(path: Option<&Path>) -> Result<Value> {
    let contents = match path {
        Some(path) if path != Path::new("-") => {
            log::debug!("reading input from {}", path.display());
            fs::read_to_string(path)?
        }
        _ => {
            log::debug!("reading input from stdin");
            let mut buffer = String::new();
            std::io::stdin().read_to_string(&mut buffer)?;
            buffer
        }
    };

    parse_json(&contents)
}

/// Parse untyped JSON, mapping syntax errors to `MalformedInput`
pub fn parse_json(contents: &str) -> Result<Value> {
    serde_json::from_str(contents).map_err(|e| DaylogError::MalformedInput(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use tempfile::TempDir;

    #[test]
    fn test_parse_json_object() {
        let value = parse_json(r#"{"work": "ok"}"#).unwrap();
        assert_eq!(value, json!({ "work": "ok" }));
    }

    #[test]
    fn test_parse_json_malformed() {
        let err = parse_json("{work: ok").unwrap_err();
        assert!(matches!(err, DaylogError::MalformedInput(_)));
        assert_eq!(err.exit_code(), 3);
    }

    #[test]
    fn test_read_json_from_file() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("entry.json");
        fs::write(&path, r#"{"work": "w", "struggle": "s", "intention": "i"}"#).unwrap();

        let value = read_json(Some(&path)).unwrap();
        assert_eq!(value["struggle"], json!("s"));
    }

    #[test]
    fn test_read_json_missing_file() {
        let temp = TempDir::new().unwrap();
        let err = read_json(Some(&temp.path().join("absent.json"))).unwrap_err();
        assert!(matches!(err, DaylogError::Io(_)));
    }
}
