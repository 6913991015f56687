//! Lexical expansion of raw vocabulary entries into lookup keys.
//!
//! Two parenthesis conventions are recognised:
//! - `das Haus (Häuser)`: a space before `(` marks an annotation, which is dropped.
//! - `Haus(-es,-er)`: no space marks inflectional endings glued onto the stem.

use regex::Regex;
use std::sync::OnceLock;
use unicode_normalization::UnicodeNormalization;

/// Separator between forms inside a query key.
pub const FORM_SEPARATOR: &str = "|";

/// A plain space before `(` marks an annotation. Tabs and other whitespace
/// do not.
const ANNOTATION_MARKER: &str = " (";

fn annotation() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"\s*\([^)]*\)").expect("valid regex"))
}

fn inflection() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"(\w+)\(([^)]+)\)").expect("valid regex"))
}

/// Expand a raw entry into its canonical lexical forms.
///
/// Always returns at least one form. Malformed parentheses fall back to the
/// raw word.
pub fn expand(raw: &str) -> Vec<String> {
    if !raw.contains('(') {
        return vec![raw.to_string()];
    }

    if raw.contains(ANNOTATION_MARKER) {
        return vec![annotation().replace_all(raw, "").trim().to_string()];
    }

    if let Some(caps) = inflection().captures(raw) {
        let stem = &caps[1];
        return caps[2]
            .split(',')
            .map(|ending| {
                let ending = ending.trim();
                let ending = ending.strip_prefix('-').unwrap_or(ending);
                format!("{stem}{ending}")
            })
            .collect();
    }

    vec![raw.to_string()]
}

/// Forms actually sent to the frequency service: the lead token of the first
/// expanded form, NFC-normalized.
pub fn lookup_forms(raw: &str) -> Vec<String> {
    expand(raw)
        .into_iter()
        .take(1)
        .map(|form| {
            let lead = form
                .split(|c: char| matches!(c, ',' | ' ' | '('))
                .next()
                .unwrap_or_default();
            lead.nfc().collect::<String>()
        })
        .collect()
}

/// Cache and service key for a raw entry.
pub fn query_key(raw: &str) -> String {
    lookup_forms(raw).join(FORM_SEPARATOR)
}
