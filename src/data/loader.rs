use std::fs;
use std::io::Read;
use std::path::Path;

use crate::error::BankError;
use crate::models::PageRecord;

pub fn load_records_from_str(json: &str) -> Result<Vec<PageRecord>, BankError> {
    Ok(serde_json::from_str(json)?)
}

pub fn load_records_from_reader<R: Read>(reader: R) -> Result<Vec<PageRecord>, BankError> {
    Ok(serde_json::from_reader(reader)?)
}

pub fn load_records_from_path<P: AsRef<Path>>(path: P) -> Result<Vec<PageRecord>, BankError> {
    let path = path.as_ref();

    let json_content = fs::read_to_string(path).map_err(|source| BankError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    tracing::debug!("read {} bytes from {}", json_content.len(), path.display());
    load_records_from_str(&json_content)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_records_from_str() {
        let json = r#"[{"id": "pg1", "questions": []}]"#;
        let records = load_records_from_str(json).unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].id, "pg1");
    }

    #[test]
    fn test_malformed_json() {
        let err = load_records_from_str(r#"[{"id": "pg1""#).unwrap_err();
        assert!(matches!(err, BankError::Json(_)));

        let err = load_records_from_reader(&b"{\"id\": \"pg1\"}"[..]).unwrap_err();
        assert!(matches!(err, BankError::Json(_)));
    }

    #[test]
    fn test_missing_file() {
        let path = std::env::temp_dir().join("question-bank-does-not-exist.json");
        let err = load_records_from_path(&path).unwrap_err();
        match err {
            BankError::Io { path: p, .. } => assert_eq!(p, path),
            other => panic!("expected Io error, got {other:?}"),
        }
    }
}
