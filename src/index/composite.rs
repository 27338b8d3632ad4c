//! Bitmask-tagged composite entry generation.
//!
//! A composite entry collapses an N-label AND condition into a single
//! equality key. The label at position `i` of the configured label list
//! owns bit `1 << i`; an entry renders as
//! `"{decimal-bitmask} {token;token;...}"` with tokens joined in ascending
//! label position order.
//!
//! The write side generates **exhaustively**: every mask with at least two
//! bits set, crossed over the full Cartesian product of the included
//! labels' token sets, so any query-side combination is guaranteed to
//! exist. The query side generates **minimally**: one mask covering the
//! labels that actually carry tokens, with product combinations suppressed
//! once every one of their (label, token) coordinates has already been
//! emitted. That bounds the multiplicative blow-up of a filter that holds
//! many alternative tokens per label (e.g. the bigrams of a fuzzy term)
//! while still covering every (label, token) pair at least once.

use ahash::{AHashMap, AHashSet};

use crate::error::{KasugaiError, Result};
use crate::index::config::MAX_COMPOSITE_INDEX_LABELS;
use crate::index::token_set::LabeledTokenSet;

const COMPOSITE_SEPARATOR: &str = ";";

/// Composite generation strategy.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum CompositeMode {
    /// Write side: all label-subset combinations with two or more labels.
    Exhaustive,
    /// Query side: the single combination set needed to match a query.
    Minimal,
}

/// Generate composite entries for `labels` from the accumulated `set`.
///
/// # Errors
///
/// Returns [`KasugaiError::LabelLimitExceeded`] if `labels` is longer than
/// [`MAX_COMPOSITE_INDEX_LABELS`].
pub(crate) fn composite_entries(
    labels: &[String],
    set: &LabeledTokenSet,
    mode: CompositeMode,
) -> Result<Vec<String>> {
    if labels.len() > MAX_COMPOSITE_INDEX_LABELS {
        return Err(KasugaiError::label_limit_exceeded(labels.len()));
    }

    match mode {
        CompositeMode::Exhaustive => Ok(exhaustive_entries(labels, set)),
        CompositeMode::Minimal => Ok(minimal_entries(labels, set)),
    }
}

/// Every mask in `[0, 2^n)` with population count >= 2, crossed over the
/// full token product. Masks with fewer bits are already covered by flat
/// entries.
fn exhaustive_entries(labels: &[String], set: &LabeledTokenSet) -> Vec<String> {
    let mut entries = Vec::with_capacity(64);

    for mask in 0u32..(1u32 << labels.len()) {
        if mask.count_ones() < 2 {
            continue;
        }
        let included = included_labels(labels, set, mask);
        if included.len() != mask.count_ones() as usize {
            // An included label has no tokens; the product is empty.
            continue;
        }
        for combination in CartesianProduct::new(&included) {
            entries.push(render(mask, &combination));
        }
    }

    entries
}

/// One mask covering exactly the labels that carry tokens, with
/// already-covered combinations suppressed.
fn minimal_entries(labels: &[String], set: &LabeledTokenSet) -> Vec<String> {
    let mut mask = 0u32;
    for (i, label) in labels.iter().enumerate() {
        if set.has_tokens(label) {
            mask |= 1 << i;
        }
    }
    if mask == 0 {
        return Vec::new();
    }

    let included = included_labels(labels, set, mask);
    let mut used: AHashMap<&str, AHashSet<&str>> = AHashMap::new();
    let mut entries = Vec::with_capacity(included.len());

    for combination in CartesianProduct::new(&included) {
        let mut some_new = false;
        for (label, token) in included.iter().map(|(l, _)| *l).zip(combination.iter().copied()) {
            if used.entry(label).or_default().insert(token) {
                some_new = true;
            }
        }
        if some_new {
            entries.push(render(mask, &combination));
        }
    }

    entries
}

/// The labels whose bit is set in `mask` and that have at least one token,
/// in ascending bit position order, each paired with its sorted tokens.
fn included_labels<'a>(
    labels: &'a [String],
    set: &'a LabeledTokenSet,
    mask: u32,
) -> Vec<(&'a str, Vec<&'a str>)> {
    labels
        .iter()
        .enumerate()
        .filter(|(i, _)| mask & (1 << i) != 0)
        .filter_map(|(_, label)| {
            set.tokens(label).and_then(|tokens| {
                if tokens.is_empty() {
                    None
                } else {
                    Some((label.as_str(), tokens.iter().map(String::as_str).collect()))
                }
            })
        })
        .collect()
}

fn render(mask: u32, combination: &[&str]) -> String {
    format!("{mask} {}", combination.join(COMPOSITE_SEPARATOR))
}

/// Odometer-style Cartesian product over per-label token lists: the last
/// label's tokens vary fastest.
struct CartesianProduct<'a> {
    axes: &'a [(&'a str, Vec<&'a str>)],
    cursor: Vec<usize>,
    done: bool,
}

impl<'a> CartesianProduct<'a> {
    fn new(axes: &'a [(&'a str, Vec<&'a str>)]) -> Self {
        Self {
            cursor: vec![0; axes.len()],
            done: axes.is_empty(),
            axes,
        }
    }
}

impl<'a> Iterator for CartesianProduct<'a> {
    type Item = Vec<&'a str>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }

        let combination: Vec<&str> = self
            .cursor
            .iter()
            .zip(self.axes.iter())
            .map(|(&i, (_, tokens))| tokens[i])
            .collect();

        // Advance the odometer from the rightmost axis.
        self.done = true;
        for pos in (0..self.cursor.len()).rev() {
            self.cursor[pos] += 1;
            if self.cursor[pos] < self.axes[pos].1.len() {
                self.done = false;
                break;
            }
            self.cursor[pos] = 0;
        }

        Some(combination)
    }
}
