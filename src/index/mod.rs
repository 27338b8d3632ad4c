//! Index and filter entry generation.
//!
//! Two parallel accumulators share the machinery in this module:
//! [`indexes::Indexes`] produces the entries written alongside a record and
//! [`filters::Filters`] produces the entries derived from a query. Both
//! collect tokens per label, then a terminal `build` renders flat
//! `"{label} {token}"` entries plus bitmask-tagged composite entries and
//! enforces the size ceilings.

mod composite;
pub mod config;
pub mod filters;
pub mod in_filter;
pub mod indexes;
mod token_set;
pub mod value;

// Re-export commonly used types
pub use config::*;
pub use filters::*;
pub use in_filter::*;
pub use indexes::*;
pub use value::*;
