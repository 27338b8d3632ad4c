//! Character n-gram, prefix, and reversed-suffix token functions.
//!
//! All functions operate on Unicode scalar values (`char`), treat the ASCII
//! space character as the only word separator, and return a sorted,
//! deduplicated `Vec<String>` so output order is deterministic and testable.
//! They are pure: calling them twice on the same input yields the same set.
//!
//! # Examples
//!
//! ```
//! use kasugai::analysis::ngram::{bigrams, suffixes};
//!
//! assert_eq!(bigrams("abc"), vec!["ab", "bc"]);
//! // Suffix tokens are reversed so a prefix-scan engine can answer
//! // "ends with" queries.
//! assert_eq!(suffixes("abc"), vec!["c", "cb", "cba"]);
//! ```

use std::collections::BTreeSet;

/// Returns the distinct bigram tokens of `s`.
///
/// A bigram is every pair of adjacent characters where neither character is
/// the ASCII space. Duplicates collapse; a one-character or empty input
/// yields nothing.
///
/// # Examples
///
/// ```
/// use kasugai::analysis::ngram::bigrams;
///
/// assert_eq!(bigrams("abco abc"), vec!["ab", "bc", "co"]);
/// assert_eq!(bigrams("a"), Vec::<String>::new());
/// ```
pub fn bigrams(s: &str) -> Vec<String> {
    let mut set = BTreeSet::new();
    collect_bigrams(s, &mut set);
    set.into_iter().collect()
}

/// Returns the union of bigram and unigram tokens of `s`.
///
/// Unigrams are the distinct non-space characters, each rendered as a
/// one-character string. A one-character input degenerates correctly to
/// exactly that unigram and no bigrams.
///
/// # Examples
///
/// ```
/// use kasugai::analysis::ngram::biunigrams;
///
/// assert_eq!(biunigrams("ab"), vec!["a", "ab", "b"]);
/// assert_eq!(biunigrams("a"), vec!["a"]);
/// ```
pub fn biunigrams(s: &str) -> Vec<String> {
    let mut set = BTreeSet::new();
    collect_bigrams(s, &mut set);
    for c in s.chars() {
        if c != ' ' {
            set.insert(c.to_string());
        }
    }
    set.into_iter().collect()
}

/// Returns every non-empty character prefix of every space-separated word
/// in `s`.
///
/// Empty words (from leading, trailing, or doubled spaces) are discarded;
/// prefixes shared across words collapse.
///
/// # Examples
///
/// ```
/// use kasugai::analysis::ngram::prefixes;
///
/// assert_eq!(prefixes("ab cd"), vec!["a", "ab", "c", "cd"]);
/// assert_eq!(prefixes("  "), Vec::<String>::new());
/// ```
pub fn prefixes(s: &str) -> Vec<String> {
    let mut set = BTreeSet::new();
    for word in s.split(' ') {
        if word.is_empty() {
            continue;
        }
        let mut prefix = String::new();
        for c in word.chars() {
            prefix.push(c);
            set.insert(prefix.clone());
        }
    }
    set.into_iter().collect()
}

/// Returns every suffix of every space-separated word in `s`, with each
/// suffix's characters reversed.
///
/// `"abc"` yields `{"c", "cb", "cba"}`, not `{"c", "bc", "abc"}`. Storing
/// suffixes reversed lets a range-scan-over-prefix engine answer
/// "ends with X" by reversing X and doing a prefix scan.
///
/// # Examples
///
/// ```
/// use kasugai::analysis::ngram::suffixes;
///
/// assert_eq!(suffixes("abc"), vec!["c", "cb", "cba"]);
/// ```
pub fn suffixes(s: &str) -> Vec<String> {
    let mut set = BTreeSet::new();
    for word in s.split(' ') {
        if word.is_empty() {
            continue;
        }
        let mut suffix = String::new();
        for c in word.chars().rev() {
            suffix.push(c);
            set.insert(suffix.clone());
        }
    }
    set.into_iter().collect()
}

fn collect_bigrams(s: &str, set: &mut BTreeSet<String>) {
    let mut prev: Option<char> = None;
    for c in s.chars() {
        if let Some(p) = prev
            && p != ' '
            && c != ' '
        {
            let mut pair = String::with_capacity(p.len_utf8() + c.len_utf8());
            pair.push(p);
            pair.push(c);
            set.insert(pair);
        }
        prev = Some(c);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bigrams_skips_spaces() {
        let tokens = bigrams("abc debch iJあdeN");
        let expected = vec!["Jあ", "ab", "bc", "ch", "de", "eN", "eb", "iJ", "あd"];
        let expected: Vec<String> = {
            let mut v: Vec<String> = expected.into_iter().map(String::from).collect();
            v.sort();
            v
        };
        assert_eq!(tokens, expected);
    }

    #[test]
    fn test_bigrams_preserves_case() {
        // Case folding is the accumulator's job.
        assert!(bigrams("iJ").contains(&"iJ".to_string()));
    }

    #[test]
    fn test_bigrams_deduplicates() {
        assert_eq!(bigrams("ababab"), vec!["ab", "ba"]);
    }

    #[test]
    fn test_bigrams_empty_and_single() {
        assert!(bigrams("").is_empty());
        assert!(bigrams("a").is_empty());
        assert!(bigrams("a b").is_empty());
        assert!(bigrams("   ").is_empty());
    }

    #[test]
    fn test_biunigrams_union() {
        let tokens = biunigrams("abc dあいbCh");
        // 8 distinct non-space chars + bigrams within each word.
        for unigram in ["a", "b", "c", "C", "d", "あ", "い", "h"] {
            assert!(tokens.contains(&unigram.to_string()), "missing {unigram}");
        }
        for bigram in ["ab", "bc", "dあ", "あい", "いb", "bC", "Ch"] {
            assert!(tokens.contains(&bigram.to_string()), "missing {bigram}");
        }
        assert_eq!(tokens.len(), 15);
    }

    #[test]
    fn test_biunigrams_single_char() {
        assert_eq!(biunigrams("x"), vec!["x"]);
    }

    #[test]
    fn test_prefixes_multiword() {
        let tokens = prefixes("abc dあいbCh");
        let mut expected: Vec<String> = [
            "a", "ab", "abc", "d", "dあ", "dあい", "dあいb", "dあいbC", "dあいbCh",
        ]
        .iter()
        .map(|s| s.to_string())
        .collect();
        expected.sort();
        assert_eq!(tokens, expected);
    }

    #[test]
    fn test_prefixes_collapse_across_words() {
        assert_eq!(prefixes("ab ab"), vec!["a", "ab"]);
    }

    #[test]
    fn test_prefixes_ignores_empty_words() {
        assert_eq!(prefixes("  a   b "), vec!["a", "b"]);
        assert!(prefixes("").is_empty());
    }

    #[test]
    fn test_suffixes_reversed_orientation() {
        assert_eq!(suffixes("abc"), vec!["c", "cb", "cba"]);
    }

    #[test]
    fn test_suffixes_multiword() {
        let tokens = suffixes("ab cd");
        let mut expected: Vec<String> =
            ["b", "ba", "d", "dc"].iter().map(|s| s.to_string()).collect();
        expected.sort();
        assert_eq!(tokens, expected);
    }

    #[test]
    fn test_suffixes_multibyte() {
        assert_eq!(suffixes("あい"), vec!["い", "いあ"]);
    }

    #[test]
    fn test_tokenization_is_idempotent() {
        let s = "abc dあいbCh";
        assert_eq!(bigrams(s), bigrams(s));
        assert_eq!(biunigrams(s), biunigrams(s));
        assert_eq!(prefixes(s), prefixes(s));
        assert_eq!(suffixes(s), suffixes(s));
    }
}
