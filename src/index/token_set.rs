//! Labeled token accumulation shared by the write-side and query-side
//! builders.

use std::collections::BTreeSet;

use ahash::{AHashMap, AHashSet};

/// A mapping from label to a deduplicated set of tokens.
///
/// Labels are unordered (flat output is sorted at build time); token sets
/// iterate in sorted order so composite generation is deterministic.
/// Insert-only: tokens are never removed, duplicates are silently absorbed.
#[derive(Debug, Clone, Default)]
pub(crate) struct LabeledTokenSet {
    map: AHashMap<String, BTreeSet<String>>,
}

impl LabeledTokenSet {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Insert one token under `label`.
    pub(crate) fn insert(&mut self, label: &str, token: String) {
        self.map.entry(label.to_string()).or_default().insert(token);
    }

    /// The token set for `label`, empty if the label was never added to.
    pub(crate) fn tokens(&self, label: &str) -> Option<&BTreeSet<String>> {
        self.map.get(label)
    }

    pub(crate) fn has_tokens(&self, label: &str) -> bool {
        self.map.get(label).is_some_and(|t| !t.is_empty())
    }

    /// Render sorted `"{label} {token}"` entries for every label not in
    /// `exclude`.
    pub(crate) fn flat_entries(&self, exclude: &[String]) -> Vec<String> {
        let exclude: AHashSet<&str> = exclude.iter().map(String::as_str).collect();

        let mut entries: Vec<String> = self
            .map
            .iter()
            .filter(|(label, _)| !exclude.contains(label.as_str()))
            .flat_map(|(label, tokens)| tokens.iter().map(move |t| format!("{label} {t}")))
            .collect();

        entries.sort();
        entries
    }
}
