//! # Output Files
//!
//! Every record lands as pretty-printed JSON (two-space indent). All writes use
//! atomic rename (write `.tmp`, then `rename()`) so a crash never leaves the
//! front end reading half a file.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use log::{debug, warn};
use serde::Serialize;

use crate::core::puzzle::WordsRecord;

pub const BOARD_FILE: &str = "BOARD.json";
pub const WORDS_FILE: &str = "WORDS.json";
pub const DEFINE_FILE: &str = "DEFINE.json";

/// `HINTS_<date>.json`
pub fn hints_file_name(date: &str) -> String {
    format!("HINTS_{}.json", date)
}

/// Where the board export is attempted, in order.
pub fn board_candidates(out_dir: &Path) -> Vec<PathBuf> {
    vec![
        out_dir.join("data").join(BOARD_FILE),
        out_dir.join(BOARD_FILE),
    ]
}

/// Atomically write `data` as JSON to `path`, creating parent directories.
pub fn write_json<T: Serialize>(path: &Path, data: &T) -> io::Result<()> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent)?;
    }

    let tmp_path = path.with_extension("tmp");
    let json = serde_json::to_string_pretty(data)
        .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;
    fs::write(&tmp_path, json)?;
    fs::rename(&tmp_path, path)?;
    debug!("Wrote {}", path.display());
    Ok(())
}

/// Tries each candidate in turn and returns the first path written.
/// Fails with the last error only if every candidate fails.
pub fn write_first_available<T: Serialize>(candidates: &[PathBuf], data: &T) -> io::Result<PathBuf> {
    let mut last_err = io::Error::new(io::ErrorKind::InvalidInput, "no output locations given");
    for path in candidates {
        match write_json(path, data) {
            Ok(()) => return Ok(path.clone()),
            Err(e) => {
                warn!("Could not write to {}: {}", path.display(), e);
                last_err = e;
            }
        }
    }
    Err(last_err)
}

/// Load a previously scraped `WORDS.json`.
pub fn read_words_record(path: &Path) -> io::Result<WordsRecord> {
    let json = fs::read_to_string(path)?;
    serde_json::from_str(&json).map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::puzzle::HintsRecord;

    #[test]
    fn test_hints_file_name() {
        assert_eq!(hints_file_name("2024-10-18"), "HINTS_2024-10-18.json");
    }

    #[test]
    fn test_write_json_creates_parents_and_uses_two_space_indent() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("HINTS.json");
        let record = HintsRecord {
            date: "2024-10-18".to_string(),
            words: vec!["CABLE".to_string()],
        };

        write_json(&path, &record).unwrap();

        let written = fs::read_to_string(&path).unwrap();
        assert_eq!(
            written,
            "{\n  \"date\": \"2024-10-18\",\n  \"words\": [\n    \"CABLE\"\n  ]\n}"
        );
        assert!(!path.with_extension("tmp").exists());
    }

    #[test]
    fn test_write_first_available_skips_unwritable() {
        let dir = tempfile::tempdir().unwrap();
        // A regular file where a directory is expected makes the first candidate fail
        let blocker = dir.path().join("data");
        fs::write(&blocker, "not a directory").unwrap();

        let candidates = board_candidates(dir.path());
        let written = write_first_available(&candidates, &serde_json::json!({"ok": true})).unwrap();

        assert_eq!(written, dir.path().join(BOARD_FILE));
    }

    #[test]
    fn test_write_first_available_with_no_candidates_fails() {
        assert!(write_first_available(&[], &1).is_err());
    }

    #[test]
    fn test_read_words_record_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(WORDS_FILE);
        let record = WordsRecord::placeholder("2024-10-18");
        write_json(&path, &record).unwrap();

        assert_eq!(read_words_record(&path).unwrap(), record);
    }

    #[test]
    fn test_read_words_record_rejects_bad_json() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(WORDS_FILE);
        fs::write(&path, "{not json").unwrap();

        let err = read_words_record(&path).unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::InvalidData);
    }
}
