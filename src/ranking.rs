//! Deck ordering: frequency rank, then overrides, then extras on top.

use serde::Deserialize;

/// One front/back vocabulary pair.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Entry {
    pub front: String,
    pub back: String,
    pub order: i64,
}

impl Entry {
    pub fn new(front: impl Into<String>, back: impl Into<String>, order: i64) -> Self {
        Self {
            front: front.into(),
            back: back.into(),
            order,
        }
    }
}

/// Forces entries whose front starts with `front_prefix` (ignoring case) to `order`.
#[derive(Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct OverrideRule {
    #[serde(rename = "frontprefix", alias = "front")]
    pub front_prefix: String,
    pub order: i64,
}

impl OverrideRule {
    pub fn new(front_prefix: impl Into<String>, order: i64) -> Self {
        Self {
            front_prefix: front_prefix.into(),
            order,
        }
    }

    pub fn matches(&self, front: &str) -> bool {
        starts_with_ignore_case(front, &self.front_prefix)
    }
}

fn starts_with_ignore_case(text: &str, prefix: &str) -> bool {
    let mut text = text.chars().flat_map(char::to_lowercase);
    prefix
        .chars()
        .flat_map(char::to_lowercase)
        .all(|p| text.next() == Some(p))
}

/// First rule in list order whose prefix matches. Not a longest-prefix match.
pub fn find_override<'a>(rules: &'a [OverrideRule], front: &str) -> Option<&'a OverrideRule> {
    rules.iter().find(|rule| rule.matches(front))
}

/// Steps 1-4: stable sort by the frequency rank held in `order`, number by
/// position, apply overrides, stable sort again.
pub fn apply_frequency_order(entries: &mut [Entry], overrides: &[OverrideRule]) {
    entries.sort_by_key(|e| e.order);

    for (i, entry) in entries.iter_mut().enumerate() {
        entry.order = i as i64;
        if let Some(rule) = find_override(overrides, &entry.front) {
            entry.order = rule.order;
        }
    }

    entries.sort_by_key(|e| e.order);
}

/// Put extras in front, in their given order. Their own `order` values do not
/// interleave them with the ranked entries.
pub fn prepend_extras(entries: &mut Vec<Entry>, extras: Vec<Entry>) {
    entries.splice(0..0, extras);
}

/// Reassign `order` as the 0-based position.
pub fn renumber(entries: &mut [Entry]) {
    for (i, entry) in entries.iter_mut().enumerate() {
        entry.order = i as i64;
    }
}

/// Full ordering pass. `entries` must carry their frequency rank in `order`.
pub fn rank(mut entries: Vec<Entry>, overrides: &[OverrideRule], extras: Vec<Entry>) -> Vec<Entry> {
    apply_frequency_order(&mut entries, overrides);
    prepend_extras(&mut entries, extras);
    renumber(&mut entries);
    entries
}
