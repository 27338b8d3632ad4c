//! Query-side filter entry builder.

use crate::analysis::ngram::bigrams;
use crate::error::{KasugaiError, Result};
use crate::index::composite::{CompositeMode, composite_entries};
use crate::index::config::{INDEX_NO_FILTERS, IndexConfig, MAX_INDEXES_SIZE};
use crate::index::token_set::LabeledTokenSet;
use crate::index::value::FilterValue;

/// Accumulates labeled tokens for a query and builds the equality filter
/// values to look up.
///
/// Every entry `build` produces is guaranteed to exist among the entries
/// [`Indexes::build`] produces for the same (label, value) pairs under the
/// same configuration, so a filter value is always matchable.
///
/// # Examples
///
/// ```
/// use kasugai::index::config::IndexConfig;
/// use kasugai::index::filters::Filters;
///
/// let mut filters = Filters::new(IndexConfig::default());
/// filters.add("title", "rust").add_prefix("body", "ab");
/// let built = filters.build()?;
/// assert_eq!(built, vec!["body ab", "title rust"]);
/// # Ok::<(), kasugai::error::KasugaiError>(())
/// ```
///
/// [`Indexes::build`]: crate::index::indexes::Indexes::build
#[derive(Debug, Clone)]
pub struct Filters {
    set: LabeledTokenSet,
    config: IndexConfig,
}

impl Filters {
    /// Create an empty query-side builder with the given configuration.
    pub fn new(config: IndexConfig) -> Self {
        Self {
            set: LabeledTokenSet::new(),
            config,
        }
    }

    /// Add one filter token under `label`.
    ///
    /// The token is lowercased first iff `ignore_case` is configured;
    /// duplicates are silently absorbed.
    pub fn add(&mut self, label: &str, token: &str) -> &mut Self {
        let token = if self.config.ignore_case {
            token.to_lowercase()
        } else {
            token.to_string()
        };
        self.set.insert(label, token);
        self
    }

    /// Add every token in `tokens` under `label`.
    pub fn add_all<I, S>(&mut self, label: &str, tokens: I) -> &mut Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        for token in tokens {
            self.add(label, token.as_ref());
        }
        self
    }

    /// Add the filter tokens for a bigram-indexed `text` under `label`.
    ///
    /// Same filter as biunigrams': bigrams carry the match, the unigram
    /// fallback only matters for a single-character query.
    pub fn add_bigrams(&mut self, label: &str, text: &str) -> &mut Self {
        self.add_biunigrams(label, text)
    }

    /// Add the filter tokens for a biunigram-indexed `text` under `label`.
    ///
    /// A single-character query is inserted verbatim (it matches the
    /// unigram entry; its bigram set would be empty); anything longer
    /// contributes its bigrams only.
    pub fn add_biunigrams(&mut self, label: &str, text: &str) -> &mut Self {
        match text.chars().count() {
            0 => self,
            1 => self.add(label, text),
            _ => self.add_all(label, bigrams(text)),
        }
    }

    /// Add a prefix query term under `label`.
    ///
    /// The query side does not tokenize: the literal fragment is the value
    /// a range scan over prefix entries starts from.
    pub fn add_prefix(&mut self, label: &str, text: &str) -> &mut Self {
        self.add(label, text)
    }

    /// Add a suffix query term under `label`.
    ///
    /// The caller supplies the fragment already reversed to match the
    /// reversed-suffix entries on the write side.
    pub fn add_suffix(&mut self, label: &str, text: &str) -> &mut Self {
        self.add(label, text)
    }

    /// Add the rendered token(s) of a non-string value under `label`.
    ///
    /// Sequences contribute one token per element; timestamps render as
    /// nanoseconds since the Unix epoch; other values use their display
    /// rendering. See [`FilterValue`].
    pub fn add_value(&mut self, label: &str, value: impl Into<FilterValue>) -> &mut Self {
        for token in value.into().tokens() {
            self.add(label, &token);
        }
        self
    }

    /// Build the filter values to query with.
    ///
    /// Flat entries for every label except the composite ones (those are
    /// queried only through the composite entry, never individually, which
    /// is what avoids the zig-zag join), minimal composite entries when two
    /// or more composite labels are configured, and the
    /// [`INDEX_NO_FILTERS`] sentinel when `save_no_filters_index` is set
    /// and the result is empty. The result is sorted and deduplicated.
    ///
    /// Note: with exactly one configured composite label, that label is
    /// excluded from flat output but the composite step (which requires two
    /// labels) never replaces it, so its filter value disappears. Configure
    /// zero or two-plus composite labels.
    ///
    /// # Errors
    ///
    /// - [`KasugaiError::LabelLimitExceeded`] if too many composite labels
    ///   are configured
    /// - [`KasugaiError::TooManyIndexes`] if the built list exceeds
    ///   [`MAX_INDEXES_SIZE`]
    pub fn build(&self) -> Result<Vec<String>> {
        self.config.validate()?;

        let mut built = self.set.flat_entries(&self.config.composite_idx_labels);

        if self.config.composite_idx_labels.len() > 1 {
            built.extend(composite_entries(
                &self.config.composite_idx_labels,
                &self.set,
                CompositeMode::Minimal,
            )?);
        }

        if self.config.save_no_filters_index && built.is_empty() {
            built.push(INDEX_NO_FILTERS.to_string());
        }

        built.sort();
        built.dedup();

        if built.len() > MAX_INDEXES_SIZE {
            return Err(KasugaiError::too_many_indexes(built.len()));
        }

        Ok(built)
    }

    /// Build the filter values, panicking on error.
    ///
    /// # Panics
    ///
    /// Panics with the build error message if [`build`] fails.
    ///
    /// [`build`]: Filters::build
    pub fn must_build(&self) -> Vec<String> {
        match self.build() {
            Ok(built) => built,
            Err(e) => panic!("{e}"),
        }
    }
}
