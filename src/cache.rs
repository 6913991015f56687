//! Persistent frequency cache.
//!
//! The whole file is loaded once at the start of a run and written back once
//! at the end. File format: a JSON object mapping query keys to a record or
//! `null` for a confirmed-absent lookup.
//!
//! Entries that do not parse as a record are kept verbatim and written back
//! unchanged, so a run never drops cached data it cannot read.

use crate::error::{DeckError, Result};
use crate::frequency::{FrequencyRecord, Lookup};
use serde_json::Value;
use std::collections::BTreeMap;
use std::fs::{self, File};
use std::io::{BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;

pub struct FrequencyCache {
    path: PathBuf,
    entries: BTreeMap<String, Lookup>,
    /// Raw values that failed to parse, preserved for the next flush.
    unreadable: BTreeMap<String, Value>,
    dirty: bool,
}

impl FrequencyCache {
    /// Empty cache that will be written to `path` on flush.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            entries: BTreeMap::new(),
            unreadable: BTreeMap::new(),
            dirty: false,
        }
    }

    /// Load the cache at `path`. A missing file gives an empty cache. A file
    /// that is not a JSON object is an error and is left untouched; single
    /// bad entries are logged and carried through unchanged.
    pub fn load(path: impl Into<PathBuf>) -> Result<Self> {
        let mut cache = Self::new(path);
        if !cache.path.exists() {
            log::debug!("No frequency cache at {:?}, starting empty", cache.path);
            return Ok(cache);
        }

        for (key, value) in read_stored(&cache.path)? {
            match serde_json::from_value::<Option<FrequencyRecord>>(value.clone()) {
                Ok(record) => {
                    cache.entries.insert(key, Lookup::from(record));
                }
                Err(e) => {
                    log::warn!("Keeping unreadable cache entry {:?} as is: {}", key, e);
                    cache.unreadable.insert(key, value);
                }
            }
        }
        log::info!(
            "Loaded {} cached lookups from {:?}",
            cache.entries.len(),
            cache.path
        );
        Ok(cache)
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn get(&self, key: &str) -> Option<&Lookup> {
        self.entries.get(key)
    }

    pub fn put(&mut self, key: impl Into<String>, lookup: Lookup) {
        let key = key.into();
        self.unreadable.remove(&key);
        self.entries.insert(key, lookup);
        self.dirty = true;
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Number of stored entries that could not be parsed.
    pub fn unreadable_len(&self) -> usize {
        self.unreadable.len()
    }

    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Lookup)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Write the full cache back to disk if anything changed.
    pub fn flush(&mut self) -> Result<()> {
        if !self.dirty {
            return Ok(());
        }

        let mut stored = self.unreadable.clone();
        for (key, lookup) in &self.entries {
            stored.insert(key.clone(), serde_json::to_value(lookup.record())?);
        }

        let parent_dir = self
            .path
            .parent()
            .filter(|p| !p.as_os_str().is_empty())
            .unwrap_or_else(|| Path::new("."));
        fs::create_dir_all(parent_dir).map_err(|e| DeckError::io(parent_dir, e))?;

        let temp_file =
            NamedTempFile::new_in(parent_dir).map_err(|e| DeckError::io(parent_dir, e))?;
        {
            let mut writer = BufWriter::new(&temp_file);
            serde_json::to_writer_pretty(&mut writer, &stored)?;
            writer.flush().map_err(|e| DeckError::io(&self.path, e))?;
        }
        temp_file
            .persist(&self.path)
            .map_err(|e| DeckError::io(&self.path, e.error))?;

        self.dirty = false;
        log::info!("Saved {} cached lookups to {:?}", stored.len(), self.path);
        Ok(())
    }
}

fn read_stored(path: &Path) -> Result<BTreeMap<String, Value>> {
    let file = File::open(path).map_err(|e| DeckError::io(path, e))?;
    serde_json::from_reader(BufReader::new(file)).map_err(|source| {
        DeckError::CacheFormat {
            path: path.to_path_buf(),
            source,
        }
    })
}
