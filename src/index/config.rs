//! Configuration for index and filter generation.

use serde::{Deserialize, Serialize};

use crate::error::{KasugaiError, Result};

/// Sentinel entry saved when a filter build with the save-empty option
/// yields zero entries, signaling "match everything" to the caller.
pub const INDEX_NO_FILTERS: &str = "__NoFilters__";

/// Maximum number of entries a single build may produce.
pub const MAX_INDEXES_SIZE: usize = 512;

/// Maximum number of labels in a composite index label list.
pub const MAX_COMPOSITE_INDEX_LABELS: usize = 8;

/// Configuration shared by the write-side and query-side builders.
///
/// Construct one per use and pass it by value; there is deliberately no
/// process-wide default instance that requests could accidentally share.
///
/// # Examples
///
/// ```
/// use kasugai::index::config::IndexConfig;
///
/// let config = IndexConfig {
///     composite_idx_labels: vec!["title".to_string(), "city".to_string()],
///     ignore_case: true,
///     ..IndexConfig::default()
/// };
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct IndexConfig {
    /// Ordered label list designated for composite expansion.
    ///
    /// Position `i` in this list is permanently bound to bit `1 << i` in
    /// every composite bitmask produced from it. At most
    /// [`MAX_COMPOSITE_INDEX_LABELS`] labels.
    pub composite_idx_labels: Vec<String>,

    /// Whether tokens are lowercased at insertion time.
    pub ignore_case: bool,

    /// Whether to save the [`INDEX_NO_FILTERS`] sentinel.
    ///
    /// The write side appends the sentinel whenever this is set, so every
    /// record can match an empty query; the query side appends it only when
    /// the built filter set is empty.
    pub save_no_filters_index: bool,
}

impl IndexConfig {
    /// Validate the configuration.
    ///
    /// # Errors
    ///
    /// Returns [`KasugaiError::LabelLimitExceeded`] if more than
    /// [`MAX_COMPOSITE_INDEX_LABELS`] composite labels are configured.
    pub fn validate(&self) -> Result<()> {
        if self.composite_idx_labels.len() > MAX_COMPOSITE_INDEX_LABELS {
            return Err(KasugaiError::label_limit_exceeded(
                self.composite_idx_labels.len(),
            ));
        }
        Ok(())
    }

    /// Validate the configuration, panicking if it is invalid.
    ///
    /// # Panics
    ///
    /// Panics with the validation error message if [`validate`] fails.
    ///
    /// [`validate`]: IndexConfig::validate
    pub fn must_validate(self) -> Self {
        match self.validate() {
            Ok(()) => self,
            Err(e) => panic!("{e}"),
        }
    }
}
