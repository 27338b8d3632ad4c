//! Bit-combination keys for boolean "contains any of" conditions.
//!
//! An equality-only engine cannot answer "record has at least one of these
//! flags" directly. [`InFilterBuilder`] issues one bit per boolean
//! condition. At write time a record stores [`indexes`], the hex rendering
//! of every mask value that ANDs non-zero with the record's flags; at query
//! time [`filter`] renders the OR of the wanted flags, turning the OR
//! condition into a single equality lookup.
//!
//! [`indexes`]: InFilterBuilder::indexes
//! [`filter`]: InFilterBuilder::filter

use serde::{Deserialize, Serialize};

/// A single in-filter mask bit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Bit(u16);

impl Bit {
    /// The raw mask value of this bit.
    pub fn value(self) -> u16 {
        self.0
    }
}

/// Issues mask bits and renders in-filter index/filter keys.
///
/// # Examples
///
/// ```
/// use kasugai::index::in_filter::InFilterBuilder;
///
/// let mut builder = InFilterBuilder::new();
/// let red = builder.new_bit();
/// let blue = builder.new_bit();
/// let green = builder.new_bit();
///
/// // Query: "red or green" is the single equality key "5".
/// assert_eq!(builder.filter(&[red, green]), "5");
///
/// // Write: a blue record stores every mask containing its bit.
/// assert_eq!(builder.indexes(&[blue]), vec!["2", "3", "6", "7"]);
/// ```
#[derive(Debug, Clone)]
pub struct InFilterBuilder {
    next_bit: u16,
}

impl Default for InFilterBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl InFilterBuilder {
    /// Create a builder with no bits issued.
    pub fn new() -> Self {
        Self { next_bit: 1 }
    }

    /// Issue the next power-of-two bit.
    ///
    /// # Panics
    ///
    /// Panics once all 16 bits have been issued.
    pub fn new_bit(&mut self) -> Bit {
        if self.next_bit == 0 {
            panic!("in-filter bit overflow: all 16 bits issued");
        }

        let bit = Bit(self.next_bit);
        self.next_bit <<= 1;
        bit
    }

    /// The query-side equality key for "has at least one of `bits`":
    /// the OR of the bits as a lowercase hex string.
    pub fn filter(&self, bits: &[Bit]) -> String {
        format!("{:x}", combine_bits(bits))
    }

    /// The write-side keys a record carrying any of `bits` must store:
    /// for every integer from 1 through the all-issued-bits mask, its
    /// lowercase hex string whenever it ANDs non-zero with the OR of
    /// `bits`.
    pub fn indexes(&self, bits: &[Bit]) -> Vec<String> {
        let all_bits = combine_bits(bits);
        let highest = self.next_bit.wrapping_sub(1);

        (1..=highest)
            .filter(|i| i & all_bits != 0)
            .map(|i| format!("{i:x}"))
            .collect()
    }
}

fn combine_bits(bits: &[Bit]) -> u16 {
    bits.iter().fold(0, |acc, bit| acc | bit.0)
}
