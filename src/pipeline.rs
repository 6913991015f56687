//! One deck run: read, resolve, rank, write.

use crate::cache::FrequencyCache;
use crate::config::DeckConfig;
use crate::deck::write_deck;
use crate::error::Result;
use crate::input::{read_extras, read_overrides, read_word_list};
use crate::lexical::query_key;
use crate::ranking::rank;
use crate::resolver::{FrequencyResolver, FrequencySource};
use std::path::PathBuf;

/// Summary of a finished run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeckReport {
    pub output: PathBuf,
    pub cards: usize,
    pub extras: usize,
    pub network_calls: usize,
    /// Word-list entries without frequency data.
    pub unresolved: usize,
}

pub struct DeckProcessor<S> {
    config: DeckConfig,
    source: S,
}

impl<S: FrequencySource> DeckProcessor<S> {
    pub fn new(config: DeckConfig, source: S) -> Self {
        Self { config, source }
    }

    pub fn config(&self) -> &DeckConfig {
        &self.config
    }

    /// Build the deck file. The cache is loaded once here and flushed once
    /// after the deck is written; nothing is written if the word list fails.
    pub fn process(&self) -> Result<DeckReport> {
        let config = &self.config;
        let overrides = read_overrides(&config.overrides_path());
        let mut cache = FrequencyCache::load(config.cache_path())?;

        let mut entries = read_word_list(&config.word_list_path())?;
        log::info!(
            "Deck {:?}: {} words, {} overrides",
            config.deck_name,
            entries.len(),
            overrides.len()
        );

        let mut resolver = FrequencyResolver::new(&mut cache, &self.source);
        let mut unresolved = 0;
        for entry in &mut entries {
            let lookup = resolver.resolve(&query_key(&entry.front));
            if !lookup.is_found() {
                unresolved += 1;
            }
            entry.order = lookup.rank();
        }
        let network_calls = resolver.network_calls();

        let extras = read_extras(&config.extras_path());
        let extras_count = extras.len();
        let ranked = rank(entries, &overrides, extras);

        let output = config.output_path();
        write_deck(&output, &ranked, &config.deck_name, &config.note_type)?;
        cache.flush()?;

        log::info!(
            "Wrote {} cards ({} extras, {} unresolved, {} network calls)",
            ranked.len(),
            extras_count,
            unresolved,
            network_calls
        );

        Ok(DeckReport {
            output,
            cards: ranked.len(),
            extras: extras_count,
            network_calls,
            unresolved,
        })
    }
}
