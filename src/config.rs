//! Where a deck lives and how it is built.
//!
//! Layout under the project root:
//! ```text
//! decks/{deck-name}/
//! ├── original-words.csv     # word list (required)
//! ├── overrides.csv          # prefix -> order rules (optional)
//! ├── extra.csv              # always-first entries (optional)
//! ├── frequency_cache.json   # created on first run
//! └── anki-deck.csv          # output
//! ```

use crate::deck::DEFAULT_NOTE_TYPE;
use crate::error::{DeckError, Result};
use crate::resolver::DEFAULT_API_URL;
use std::path::{Path, PathBuf};

pub const DECKS_DIR: &str = "decks";
pub const WORD_LIST_FILE: &str = "original-words.csv";
pub const OVERRIDES_FILE: &str = "overrides.csv";
pub const EXTRAS_FILE: &str = "extra.csv";
pub const CACHE_FILE: &str = "frequency_cache.json";
pub const OUTPUT_FILE: &str = "anki-deck.csv";

#[derive(Clone, Debug)]
pub struct DeckConfig {
    pub deck_name: String,
    pub deck_dir: PathBuf,
    pub api_url: String,
    pub note_type: String,
}

impl DeckConfig {
    /// Config for `deck_name` under `project_root`, with default service and
    /// note type.
    pub fn new(project_root: &Path, deck_name: impl Into<String>) -> Self {
        let deck_name = deck_name.into();
        Self {
            deck_dir: project_root.join(DECKS_DIR).join(&deck_name),
            deck_name,
            api_url: DEFAULT_API_URL.to_string(),
            note_type: DEFAULT_NOTE_TYPE.to_string(),
        }
    }

    pub fn word_list_path(&self) -> PathBuf {
        self.deck_dir.join(WORD_LIST_FILE)
    }

    pub fn overrides_path(&self) -> PathBuf {
        self.deck_dir.join(OVERRIDES_FILE)
    }

    pub fn extras_path(&self) -> PathBuf {
        self.deck_dir.join(EXTRAS_FILE)
    }

    pub fn cache_path(&self) -> PathBuf {
        self.deck_dir.join(CACHE_FILE)
    }

    pub fn output_path(&self) -> PathBuf {
        self.deck_dir.join(OUTPUT_FILE)
    }
}

/// Nearest ancestor of `start` (inclusive) that has a `decks/` directory.
pub fn find_project_root(start: &Path) -> Result<PathBuf> {
    start
        .ancestors()
        .filter(|dir| !dir.as_os_str().is_empty())
        .find(|dir| dir.join(DECKS_DIR).is_dir())
        .map(Path::to_path_buf)
        .ok_or_else(|| DeckError::ProjectRootNotFound(start.to_path_buf()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_paths() {
        let config = DeckConfig::new(Path::new("/proj"), "Deutsch A1");
        assert_eq!(config.deck_dir, Path::new("/proj/decks/Deutsch A1"));
        assert_eq!(
            config.word_list_path(),
            Path::new("/proj/decks/Deutsch A1/original-words.csv")
        );
        assert_eq!(
            config.cache_path(),
            Path::new("/proj/decks/Deutsch A1/frequency_cache.json")
        );
        assert_eq!(config.output_path(), Path::new("/proj/decks/Deutsch A1/anki-deck.csv"));
        assert_eq!(config.note_type, "Einfach (beide Richtungen)");
    }

    #[test]
    fn test_find_project_root_walks_up() {
        let dir = TempDir::new().unwrap();
        fs::create_dir_all(dir.path().join("decks")).unwrap();
        let nested = dir.path().join("src").join("bin");
        fs::create_dir_all(&nested).unwrap();

        assert_eq!(find_project_root(&nested).unwrap(), dir.path());
        assert_eq!(find_project_root(dir.path()).unwrap(), dir.path());
    }

    #[test]
    fn test_find_project_root_fails_without_decks() {
        // Relative ancestors stop at "no-such-root"; the empty path is not
        // treated as the working directory.
        let start = Path::new("no-such-root/x");
        assert!(matches!(
            find_project_root(start),
            Err(DeckError::ProjectRootNotFound(p)) if p == start
        ));
    }
}
