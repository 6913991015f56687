//! Frequency-ranked flashcard deck generation.
//!
//! A raw word list is expanded into lookup keys, ranked by corpus frequency
//! (with a persistent cache in front of the frequency service), reordered by
//! user overrides and extras, and written as a tab-separated deck with stable
//! per-card ids.

pub mod cache;
pub mod config;
pub mod deck;
pub mod error;
pub mod frequency;
pub mod identity;
pub mod input;
pub mod lexical;
pub mod pipeline;
pub mod ranking;
pub mod resolver;

pub use cache::FrequencyCache;
pub use config::{find_project_root, DeckConfig};
pub use error::{DeckError, LookupError};
pub use frequency::{FrequencyRecord, Lookup};
pub use identity::identify;
pub use lexical::{expand, lookup_forms, query_key};
pub use pipeline::{DeckProcessor, DeckReport};
pub use ranking::{rank, Entry, OverrideRule};
pub use resolver::{FrequencyResolver, FrequencySource, HttpFrequencySource};
