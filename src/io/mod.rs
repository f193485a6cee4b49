pub mod output;
pub mod writers;

pub use output::{create_writer, OutputFormat, OutputWriter};

use crate::core::{Error, Result};
use serde_json::Value;
use std::fs;
use std::path::Path;

pub fn read_file(path: &Path) -> Result<String> {
    fs::read_to_string(path).map_err(|e| Error::file_system("Failed to read file", path, e))
}

pub fn write_file(path: &Path, content: &str) -> Result<()> {
    fs::write(path, content).map_err(|e| Error::file_system("Failed to write file", path, e))
}

/// Read and decode a JSON document.
pub fn read_json(path: &Path) -> Result<Value> {
    let contents = read_file(path)?;
    Ok(serde_json::from_str(&contents)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_read_json_round_trip() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("indicator.json");
        write_file(&path, r#"{"id": "a", "frequencyValue": 2}"#).unwrap();

        let value = read_json(&path).unwrap();
        assert_eq!(value["frequencyValue"], 2);
    }

    #[test]
    fn test_missing_file_is_file_system_error() {
        let dir = TempDir::new().unwrap();
        let err = read_json(&dir.path().join("missing.json")).unwrap_err();
        assert!(matches!(err, Error::FileSystem { .. }));
        assert!(!err.is_user_fixable());
    }

    #[test]
    fn test_malformed_json_is_user_fixable() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("bad.json");
        write_file(&path, "{not json").unwrap();

        let err = read_json(&path).unwrap_err();
        assert!(matches!(err, Error::Json(_)));
        assert!(err.is_user_fixable());
    }
}
