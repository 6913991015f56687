//! Tab-separated deck output with a directive header.

use crate::error::{DeckError, Result};
use crate::identity::identify;
use crate::ranking::Entry;
use serde::Serialize;
use std::fs;
use std::io::{BufWriter, Write};
use std::path::Path;
use tempfile::NamedTempFile;

pub const DEFAULT_NOTE_TYPE: &str = "Einfach (beide Richtungen)";

/// Directive lines preceding the rows. Columns are 1-based.
pub const HEADER: [&str; 6] = [
    "#separator:tab",
    "#html:true",
    "#guid column:1",
    "#notetype column:2",
    "#deck column:3",
    "#tags column:6",
];

#[derive(Serialize)]
struct DeckRow<'a> {
    id: String,
    note_type: &'a str,
    deck: &'a str,
    front: &'a str,
    back: &'a str,
    tags: &'a str,
}

/// Write header and one row per entry, in the given order.
pub fn emit<W: Write>(
    mut writer: W,
    entries: &[Entry],
    deck_name: &str,
    note_type: &str,
) -> csv::Result<()> {
    for line in HEADER {
        writeln!(writer, "{line}")?;
    }

    let mut rows = csv::WriterBuilder::new()
        .delimiter(b'\t')
        .has_headers(false)
        .terminator(csv::Terminator::Any(b'\n'))
        .from_writer(writer);

    for entry in entries {
        rows.serialize(DeckRow {
            id: identify(&entry.front),
            note_type,
            deck: deck_name,
            front: &entry.front,
            back: &entry.back,
            tags: "",
        })?;
    }
    rows.flush()?;
    Ok(())
}

/// Write the deck file atomically; an error leaves any previous file intact.
pub fn write_deck(path: &Path, entries: &[Entry], deck_name: &str, note_type: &str) -> Result<()> {
    let parent_dir = path
        .parent()
        .filter(|p| !p.as_os_str().is_empty())
        .unwrap_or_else(|| Path::new("."));
    fs::create_dir_all(parent_dir).map_err(|e| DeckError::io(parent_dir, e))?;

    let temp_file = NamedTempFile::new_in(parent_dir).map_err(|e| DeckError::io(parent_dir, e))?;
    emit(BufWriter::new(&temp_file), entries, deck_name, note_type)
        .map_err(|e| DeckError::csv(path, e))?;
    temp_file
        .persist(path)
        .map_err(|e| DeckError::io(path, e.error))?;
    Ok(())
}
