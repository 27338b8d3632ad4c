//! Error types for the Kasugai library.
//!
//! All fallible operations return [`KasugaiError`] through the crate-wide
//! [`Result`] alias. Both variants are detected synchronously at build time;
//! there is never a partial result on error.
//!
//! # Examples
//!
//! ```
//! use kasugai::error::{KasugaiError, Result};
//!
//! fn example_operation() -> Result<()> {
//!     Err(KasugaiError::label_limit_exceeded(9))
//! }
//!
//! match example_operation() {
//!     Ok(_) => println!("Success"),
//!     Err(e) => eprintln!("Error: {}", e),
//! }
//! ```

use thiserror::Error;

use crate::index::config::{MAX_COMPOSITE_INDEX_LABELS, MAX_INDEXES_SIZE};

/// The main error type for Kasugai operations.
///
/// Both variants are configuration/ceiling violations surfaced by the
/// fallible `build` entry points. The panicking `must_build` wrappers
/// convert them into aborts for callers that treat them as programmer
/// errors.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum KasugaiError {
    /// More composite index labels configured than the ceiling allows.
    #[error("composite index labels size exceeds {limit}: got {count}")]
    LabelLimitExceeded {
        /// Number of labels that were configured.
        count: usize,
        /// The `MAX_COMPOSITE_INDEX_LABELS` ceiling.
        limit: usize,
    },

    /// The built entry list exceeds the maximum index size.
    #[error("index size exceeds {limit}: got {count}")]
    TooManyIndexes {
        /// Number of entries the build produced.
        count: usize,
        /// The `MAX_INDEXES_SIZE` ceiling.
        limit: usize,
    },
}

/// Result type alias for operations that may fail with [`KasugaiError`].
pub type Result<T> = std::result::Result<T, KasugaiError>;

impl KasugaiError {
    /// Create a new label-limit error for `count` configured labels.
    pub fn label_limit_exceeded(count: usize) -> Self {
        KasugaiError::LabelLimitExceeded {
            count,
            limit: MAX_COMPOSITE_INDEX_LABELS,
        }
    }

    /// Create a new index-size error for a build that produced `count` entries.
    pub fn too_many_indexes(count: usize) -> Self {
        KasugaiError::TooManyIndexes {
            count,
            limit: MAX_INDEXES_SIZE,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = KasugaiError::label_limit_exceeded(9);
        assert_eq!(
            err.to_string(),
            "composite index labels size exceeds 8: got 9"
        );

        let err = KasugaiError::too_many_indexes(513);
        assert_eq!(err.to_string(), "index size exceeds 512: got 513");
    }
}
