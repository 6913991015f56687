//! Readers for the deck directory's comma-separated input files.
//!
//! Header names are matched case-insensitively, so `Front,Back` and
//! `front,back` both work.

use crate::error::{DeckError, Result};
use crate::ranking::{Entry, OverrideRule};
use serde::de::DeserializeOwned;
use serde::Deserialize;
use std::fs::File;
use std::path::Path;

#[derive(Deserialize, Debug)]
struct WordRow {
    front: String,
    back: String,
}

#[derive(Deserialize, Debug)]
struct ExtraRow {
    front: String,
    back: String,
    order: i64,
}

fn open(path: &Path) -> csv::Result<csv::Reader<File>> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .from_path(path)?;
    let headers: csv::StringRecord = reader
        .headers()?
        .iter()
        .map(|h| h.trim_start_matches('\u{feff}').trim().to_lowercase())
        .collect();
    reader.set_headers(headers);
    Ok(reader)
}

/// Read the main word list. Every entry starts with `order` 0.
pub fn read_word_list(path: &Path) -> Result<Vec<Entry>> {
    if !path.exists() {
        return Err(DeckError::MissingWordList(path.to_path_buf()));
    }

    let mut reader = open(path).map_err(|e| DeckError::csv(path, e))?;
    let mut entries = Vec::new();
    for row in reader.deserialize::<WordRow>() {
        let row = row.map_err(|e| DeckError::csv(path, e))?;
        entries.push(Entry::new(row.front, row.back, 0));
    }
    Ok(entries)
}

/// Read an optional file. Missing means empty; unreadable files and bad rows
/// are logged and skipped.
fn read_optional<T: DeserializeOwned>(path: &Path, what: &str) -> Vec<T> {
    if !path.exists() {
        log::debug!("No {} file at {:?}", what, path);
        return Vec::new();
    }

    let mut reader = match open(path) {
        Ok(r) => r,
        Err(e) => {
            log::warn!("Ignoring unreadable {} file {:?}: {}", what, path, e);
            return Vec::new();
        }
    };

    let mut rows = Vec::new();
    for (i, row) in reader.deserialize::<T>().enumerate() {
        match row {
            Ok(r) => rows.push(r),
            Err(e) => log::warn!("Skipping {} row {} in {:?}: {}", what, i + 1, path, e),
        }
    }
    rows
}

pub fn read_overrides(path: &Path) -> Vec<OverrideRule> {
    read_optional::<OverrideRule>(path, "overrides")
        .into_iter()
        .filter(|rule| {
            let blank = rule.front_prefix.trim().is_empty();
            if blank {
                log::warn!("Skipping override with blank prefix (order {})", rule.order);
            }
            !blank
        })
        .collect()
}

/// Extras keep their file order; `order` is carried but not used to sort.
pub fn read_extras(path: &Path) -> Vec<Entry> {
    read_optional::<ExtraRow>(path, "extras")
        .into_iter()
        .map(|row| Entry::new(row.front, row.back, row.order))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn write(dir: &TempDir, name: &str, content: &str) -> std::path::PathBuf {
        let path = dir.path().join(name);
        fs::write(&path, content).unwrap();
        path
    }

    #[test]
    fn test_word_list_with_either_header_case() {
        let dir = TempDir::new().unwrap();
        let path = write(&dir, "a.csv", "Front,Back\nHaus,house\n\"Buch(es)\",book\n");
        let entries = read_word_list(&path).unwrap();
        assert_eq!(
            entries,
            vec![Entry::new("Haus", "house", 0), Entry::new("Buch(es)", "book", 0)]
        );

        let path = write(&dir, "b.csv", "front,back\n\"das Auto (Autos)\",\"the car, auto\"\n");
        let entries = read_word_list(&path).unwrap();
        assert_eq!(entries, vec![Entry::new("das Auto (Autos)", "the car, auto", 0)]);
    }

    #[test]
    fn test_missing_word_list_is_fatal() {
        let dir = TempDir::new().unwrap();
        let err = read_word_list(&dir.path().join("nope.csv")).unwrap_err();
        assert!(matches!(err, DeckError::MissingWordList(_)));
    }

    #[test]
    fn test_malformed_word_list_is_fatal() {
        let dir = TempDir::new().unwrap();
        let path = write(&dir, "a.csv", "front,back\nHaus,house\nBuch\n");
        assert!(matches!(read_word_list(&path), Err(DeckError::Csv { .. })));
    }

    #[test]
    fn test_overrides() {
        let dir = TempDir::new().unwrap();
        let path = write(
            &dir,
            "overrides.csv",
            "Front,Order\nder Hund,0\n,5\ndie Katze,abc\ndas Pferd,-2\n",
        );
        let rules = read_overrides(&path);
        assert_eq!(
            rules,
            vec![OverrideRule::new("der Hund", 0), OverrideRule::new("das Pferd", -2)]
        );

        let path = write(&dir, "o2.csv", "frontPrefix,order\nder,3\n");
        assert_eq!(read_overrides(&path), vec![OverrideRule::new("der", 3)]);
    }

    #[test]
    fn test_missing_optional_files_are_empty() {
        let dir = TempDir::new().unwrap();
        assert!(read_overrides(&dir.path().join("overrides.csv")).is_empty());
        assert!(read_extras(&dir.path().join("extra.csv")).is_empty());
    }

    #[test]
    fn test_extras_keep_file_order() {
        let dir = TempDir::new().unwrap();
        let path = write(&dir, "extra.csv", "Front,Back,Order\nja,yes,5\nnein,no,1\n");
        assert_eq!(
            read_extras(&path),
            vec![Entry::new("ja", "yes", 5), Entry::new("nein", "no", 1)]
        );
    }
}
