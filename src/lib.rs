//! # Kasugai
//!
//! Composite index and filter generation for schemaless key-value datastores
//! whose query engines only support equality lookups on indexed fields.
//!
//! Such engines answer a multi-field AND with an expensive interleaved
//! zig-zag scan across separate single-field indexes. Kasugai collapses an
//! N-field AND into a single equality lookup by writing bitmask-tagged
//! composite entries alongside each record and deriving the matching filter
//! entry from the query, with the guarantee that every filter value the
//! query side can produce exists among the index values written for the
//! same data under the same configuration.
//!
//! ## Features
//!
//! - Bigram / biunigram / prefix / reversed-suffix tokenization for
//!   substring-searchable text
//! - Exhaustive (write-side) and minimal (query-side) composite generation
//! - Bit-combination in-filter keys for boolean "contains any of" queries
//! - Pure in-memory string output; datastore I/O stays with the caller
//!
//! ## Example
//!
//! ```
//! use kasugai::index::config::IndexConfig;
//! use kasugai::index::filters::Filters;
//! use kasugai::index::indexes::Indexes;
//!
//! let config = IndexConfig {
//!     composite_idx_labels: vec!["title".to_string(), "city".to_string()],
//!     ..IndexConfig::default()
//! };
//!
//! // Write side: stored with the record.
//! let mut indexes = Indexes::new(config.clone());
//! indexes.add("title", "rust").add("city", "osaka");
//! let stored = indexes.build()?;
//!
//! // Query side: one equality key instead of a zig-zag join.
//! let mut filters = Filters::new(config);
//! filters.add("title", "rust").add("city", "osaka");
//! let query = filters.build()?;
//!
//! assert!(query.iter().all(|f| stored.contains(f)));
//! # Ok::<(), kasugai::error::KasugaiError>(())
//! ```

pub mod analysis;
pub mod error;
pub mod index;

pub use crate::error::{KasugaiError, Result};
pub use crate::index::config::{
    INDEX_NO_FILTERS, IndexConfig, MAX_COMPOSITE_INDEX_LABELS, MAX_INDEXES_SIZE,
};
pub use crate::index::filters::Filters;
pub use crate::index::in_filter::{Bit, InFilterBuilder};
pub use crate::index::indexes::Indexes;
pub use crate::index::value::FilterValue;

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
