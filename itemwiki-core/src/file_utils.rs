//! File utility functions.

use crate::error::{ItemWikiError, Result};
use crate::fields::RawFields;
use serde::Deserialize;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// Recursively find files with given extension in a directory.
pub fn find_files_with_extension(dir: &Path, extension: &str) -> Result<Vec<PathBuf>> {
    if !dir.exists() {
        return Err(ItemWikiError::Io(std::io::Error::new(
            std::io::ErrorKind::NotFound,
            format!("Directory not found: {}", dir.display()),
        )));
    }

    let mut files: Vec<PathBuf> = WalkDir::new(dir)
        .into_iter()
        .filter_map(|e| e.ok())
        .filter(|entry| entry.file_type().is_file())
        .filter(|entry| entry.path().extension().is_some_and(|ext| ext == extension))
        .map(|entry| entry.path().to_path_buf())
        .collect();
    files.sort();
    Ok(files)
}

/// A field dump holds either one item table or a list of them.
#[derive(Deserialize)]
#[serde(untagged)]
enum FieldDump {
    Many(Vec<RawFields>),
    One(RawFields),
}

/// Read raw field maps from a JSON file.
pub fn read_field_dump(path: &Path) -> Result<Vec<RawFields>> {
    let content = std::fs::read_to_string(path)?;
    let dump: FieldDump = serde_json::from_str(&content).map_err(|e| {
        ItemWikiError::Parse(format!("Invalid field dump {}: {}", path.display(), e))
    })?;
    Ok(match dump {
        FieldDump::Many(records) => records,
        FieldDump::One(record) => vec![record],
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_find_files_with_extension() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::create_dir(dir.path().join("nested")).unwrap();
        std::fs::write(dir.path().join("b.json"), "{}").unwrap();
        std::fs::write(dir.path().join("nested").join("a.json"), "{}").unwrap();
        std::fs::write(dir.path().join("notes.txt"), "").unwrap();

        let files = find_files_with_extension(dir.path(), "json").unwrap();
        assert_eq!(files.len(), 2);
        assert!(files.iter().all(|f| f.extension().unwrap() == "json"));
    }

    #[test]
    fn test_missing_directory() {
        let dir = tempfile::tempdir().unwrap();
        assert!(find_files_with_extension(&dir.path().join("nope"), "json").is_err());
    }

    #[test]
    fn test_read_single_and_list_dumps() {
        let dir = tempfile::tempdir().unwrap();
        let one = dir.path().join("one.json");
        let many = dir.path().join("many.json");
        std::fs::write(&one, r#"{"1": "Boots", "code": "1001"}"#).unwrap();
        let dump = r#"[{"1": "Boots", "code": "1001"}, {"1": "Cull", "code": "1083"}]"#;
        std::fs::write(&many, dump).unwrap();

        assert_eq!(read_field_dump(&one).unwrap().len(), 1);
        let records = read_field_dump(&many).unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[1].get("1"), "Cull");
    }

    #[test]
    fn test_invalid_dump_is_parse_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bad.json");
        std::fs::write(&path, r#"{"1": 5}"#).unwrap();
        assert!(matches!(read_field_dump(&path), Err(ItemWikiError::Parse(_))));
    }
}
