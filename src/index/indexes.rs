//! Write-side index entry builder.

use crate::analysis::ngram::{bigrams, biunigrams, prefixes, suffixes};
use crate::error::{KasugaiError, Result};
use crate::index::composite::{CompositeMode, composite_entries};
use crate::index::config::{INDEX_NO_FILTERS, IndexConfig, MAX_INDEXES_SIZE};
use crate::index::token_set::LabeledTokenSet;
use crate::index::value::FilterValue;

/// Accumulates labeled tokens for a record and builds the entry list to
/// store alongside it.
///
/// Intended for exclusive single-owner use over an `add* -> build` lifetime,
/// typically one request; the `&mut self` receivers encode that discipline.
///
/// # Examples
///
/// ```
/// use kasugai::index::config::IndexConfig;
/// use kasugai::index::indexes::Indexes;
///
/// let mut indexes = Indexes::new(IndexConfig::default());
/// indexes
///     .add("title", "rust")
///     .add_biunigrams("body", "abc");
/// let built = indexes.build()?;
/// assert!(built.contains(&"title rust".to_string()));
/// assert!(built.contains(&"body ab".to_string()));
/// # Ok::<(), kasugai::error::KasugaiError>(())
/// ```
#[derive(Debug, Clone)]
pub struct Indexes {
    set: LabeledTokenSet,
    config: IndexConfig,
}

impl Indexes {
    /// Create an empty write-side builder with the given configuration.
    pub fn new(config: IndexConfig) -> Self {
        Self {
            set: LabeledTokenSet::new(),
            config,
        }
    }

    /// Add one token under `label`.
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

    /// Add the bigram tokens of `text` under `label`.
    pub fn add_bigrams(&mut self, label: &str, text: &str) -> &mut Self {
        self.add_all(label, bigrams(text))
    }

    /// Add the bigram and unigram tokens of `text` under `label`.
    pub fn add_biunigrams(&mut self, label: &str, text: &str) -> &mut Self {
        self.add_all(label, biunigrams(text))
    }

    /// Add every word-prefix token of `text` under `label`.
    pub fn add_prefixes(&mut self, label: &str, text: &str) -> &mut Self {
        self.add_all(label, prefixes(text))
    }

    /// Add every reversed word-suffix token of `text` under `label`.
    pub fn add_suffixes(&mut self, label: &str, text: &str) -> &mut Self {
        self.add_all(label, suffixes(text))
    }

    /// Add tokens rendered from a non-string value under `label`.
    ///
    /// Not supported on the write side; present so the asymmetry with
    /// [`Filters::add_value`] is explicit rather than silent.
    ///
    /// # Panics
    ///
    /// Always panics. Add pre-rendered tokens with [`add`] instead.
    ///
    /// [`Filters::add_value`]: crate::index::filters::Filters::add_value
    /// [`add`]: Indexes::add
    pub fn add_value(&mut self, _label: &str, _value: FilterValue) -> &mut Self {
        unimplemented!("Indexes::add_value is not supported")
    }

    /// Build the entry list to store with the record.
    ///
    /// Flat entries for every label, exhaustive composite entries when two
    /// or more composite labels are configured, and the
    /// [`INDEX_NO_FILTERS`] sentinel whenever `save_no_filters_index` is
    /// set (a record must always carry the sentinel or an empty-filter
    /// query could never match it). The result is sorted and deduplicated.
    ///
    /// # Errors
    ///
    /// - [`KasugaiError::LabelLimitExceeded`] if too many composite labels
    ///   are configured
    /// - [`KasugaiError::TooManyIndexes`] if the built list exceeds
    ///   [`MAX_INDEXES_SIZE`]
    pub fn build(&self) -> Result<Vec<String>> {
        self.config.validate()?;

        let mut built = self.set.flat_entries(&[]);

        if self.config.composite_idx_labels.len() > 1 {
            built.extend(composite_entries(
                &self.config.composite_idx_labels,
                &self.set,
                CompositeMode::Exhaustive,
            )?);
        }

        if self.config.save_no_filters_index {
            built.push(INDEX_NO_FILTERS.to_string());
        }

        built.sort();
        built.dedup();

        if built.len() > MAX_INDEXES_SIZE {
            return Err(KasugaiError::too_many_indexes(built.len()));
        }

        Ok(built)
    }

    /// Build the entry list, panicking on error.
    ///
    /// # Panics
    ///
    /// Panics with the build error message if [`build`] fails.
    ///
    /// [`build`]: Indexes::build
    pub fn must_build(&self) -> Vec<String> {
        match self.build() {
            Ok(built) => built,
            Err(e) => panic!("{e}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::ngram;
    use crate::index::config::MAX_COMPOSITE_INDEX_LABELS;

    fn assert_built(mut actual: Vec<String>, expected: &[&str]) {
        let mut expected: Vec<String> = expected.iter().map(|s| s.to_string()).collect();
        actual.sort();
        expected.sort();
        assert_eq!(actual, expected);
    }

    #[test]
    fn test_add() {
        let mut idx = Indexes::new(IndexConfig::default());
        idx.add_all("label1", ["abc dあいbCh", "sample"]);
        idx.add_all("label2", ["abc debch iJあdeN", "sample"]);

        assert_built(
            idx.must_build(),
            &[
                "label1 abc dあいbCh",
                "label1 sample",
                "label2 abc debch iJあdeN",
                "label2 sample",
            ],
        );
    }

    #[test]
    fn test_add_deduplicates() {
        let mut idx = Indexes::new(IndexConfig::default());
        idx.add("label1", "sample").add("label1", "sample");

        assert_built(idx.must_build(), &["label1 sample"]);
    }

    #[test]
    fn test_add_bigrams() {
        let mut idx = Indexes::new(IndexConfig::default());
        idx.add_bigrams("label1", "abc dあいbCh");

        let expected: Vec<String> = ngram::bigrams("abc dあいbCh")
            .into_iter()
            .map(|t| format!("label1 {t}"))
            .collect();
        let expected: Vec<&str> = expected.iter().map(String::as_str).collect();
        assert_built(idx.must_build(), &expected);
    }

    #[test]
    fn test_add_biunigrams() {
        let mut idx = Indexes::new(IndexConfig::default());
        idx.add_biunigrams("label1", "abc");

        assert_built(
            idx.must_build(),
            &["label1 a", "label1 ab", "label1 b", "label1 bc", "label1 c"],
        );
    }

    #[test]
    fn test_add_prefixes_and_suffixes() {
        let mut idx = Indexes::new(IndexConfig::default());
        idx.add_prefixes("label1", "abc");
        idx.add_suffixes("label2", "abc");

        assert_built(
            idx.must_build(),
            &[
                "label1 a",
                "label1 ab",
                "label1 abc",
                "label2 c",
                "label2 cb",
                "label2 cba",
            ],
        );
    }

    #[test]
    #[should_panic(expected = "not supported")]
    fn test_add_value_unsupported() {
        let mut idx = Indexes::new(IndexConfig::default());
        idx.add_value("label1", FilterValue::Integer(123));
    }

    #[test]
    fn test_composite_labels() {
        let config = IndexConfig {
            composite_idx_labels: vec![
                "label1".to_string(),
                "label2".to_string(),
                "label3".to_string(),
            ],
            ..IndexConfig::default()
        };
        let mut idx = Indexes::new(config);
        idx.add("label1", "a")
            .add("label2", "b")
            .add("label3", "c")
            .add("label4", "d");

        assert_built(
            idx.must_build(),
            &[
                "label1 a",
                "label2 b",
                "label3 c",
                "label4 d",
                "3 a;b",
                "5 a;c",
                "6 b;c",
                "7 a;b;c",
            ],
        );
    }

    #[test]
    fn test_ignore_case() {
        let config = IndexConfig {
            ignore_case: true,
            ..IndexConfig::default()
        };
        let mut idx = Indexes::new(config);
        idx.add_all("label1", ["AbC", "saMPle", "sample"]);

        assert_built(idx.must_build(), &["label1 abc", "label1 sample"]);
    }

    #[test]
    fn test_save_no_filters_index_is_force_applied() {
        let config = IndexConfig {
            save_no_filters_index: true,
            ..IndexConfig::default()
        };
        let mut idx = Indexes::new(config);
        idx.add("label1", "a");

        assert_built(idx.must_build(), &["label1 a", "__NoFilters__"]);
    }

    #[test]
    fn test_build_label_limit() {
        let config = IndexConfig {
            composite_idx_labels: (0..=MAX_COMPOSITE_INDEX_LABELS)
                .map(|i| format!("label{i}"))
                .collect(),
            ..IndexConfig::default()
        };
        let idx = Indexes::new(config);

        assert_eq!(
            idx.build(),
            Err(KasugaiError::label_limit_exceeded(
                MAX_COMPOSITE_INDEX_LABELS + 1
            ))
        );
    }

    #[test]
    fn test_build_size_limit() {
        let mut idx = Indexes::new(IndexConfig::default());
        for i in 0..=MAX_INDEXES_SIZE {
            idx.add(&format!("label{i}"), "abc");
        }

        assert_eq!(
            idx.build(),
            Err(KasugaiError::too_many_indexes(MAX_INDEXES_SIZE + 1))
        );
    }

    #[test]
    fn test_build_at_size_limit() {
        let mut idx = Indexes::new(IndexConfig::default());
        for i in 0..MAX_INDEXES_SIZE {
            idx.add(&format!("label{i}"), "abc");
        }

        let built = idx.build().unwrap();
        assert_eq!(built.len(), MAX_INDEXES_SIZE);
    }

    #[test]
    #[should_panic(expected = "index size exceeds")]
    fn test_must_build_panics_over_size_limit() {
        let mut idx = Indexes::new(IndexConfig::default());
        for i in 0..=MAX_INDEXES_SIZE {
            idx.add(&format!("label{i}"), "abc");
        }
        idx.must_build();
    }
}
