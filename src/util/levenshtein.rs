//! Levenshtein edit distance.
//!
//! Used by the keyword normalizer to decide whether a bracketed span is an
//! abbreviation of the words in front of it.

use std::cmp::min;

/// Calculate the Levenshtein distance between two strings.
///
/// This is the minimum number of single-character edits (insertions, deletions
/// or substitutions) required to change one string into the other. Characters
/// are compared exactly, so callers fold case themselves when they need to.
pub fn levenshtein_distance(s1: &str, s2: &str) -> usize {
    let s1_chars: Vec<char> = s1.chars().collect();
    let s2_chars: Vec<char> = s2.chars().collect();

    if s1_chars.is_empty() {
        return s2_chars.len();
    }
    if s2_chars.is_empty() {
        return s1_chars.len();
    }

    // Two rows are enough since every cell only looks one row back.
    let mut prev_row: Vec<usize> = (0..=s2_chars.len()).collect();
    let mut curr_row = vec![0; s2_chars.len() + 1];

    for (i, c1) in s1_chars.iter().enumerate() {
        curr_row[0] = i + 1;

        for (j, c2) in s2_chars.iter().enumerate() {
            let cost = if c1 == c2 { 0 } else { 1 };

            curr_row[j + 1] = min(
                min(
                    prev_row[j + 1] + 1, // deletion
                    curr_row[j] + 1,     // insertion
                ),
                prev_row[j] + cost, // substitution
            );
        }

        std::mem::swap(&mut prev_row, &mut curr_row);
    }

    prev_row[s2_chars.len()]
}

/// Levenshtein distance divided by the length of the longer string.
///
/// 0.0 means identical strings, 1.0 means nothing in common. Two empty strings
/// have a distance of 0.0.
pub fn normalized_distance(s1: &str, s2: &str) -> f64 {
    let max_len = s1.chars().count().max(s2.chars().count());

    if max_len == 0 {
        return 0.0;
    }

    levenshtein_distance(s1, s2) as f64 / max_len as f64
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_levenshtein_distance() {
        assert_eq!(levenshtein_distance("", ""), 0);
        assert_eq!(levenshtein_distance("", "a"), 1);
        assert_eq!(levenshtein_distance("a", ""), 1);
        assert_eq!(levenshtein_distance("a", "a"), 0);
        assert_eq!(levenshtein_distance("ab", "ac"), 1);
        assert_eq!(levenshtein_distance("abc", "def"), 3);
        assert_eq!(levenshtein_distance("kitten", "sitting"), 3);
        assert_eq!(levenshtein_distance("search", "serach"), 2);
    }

    #[test]
    fn test_identity_and_empty() {
        for s in ["", "mrf", "ontology", "größe"] {
            assert_eq!(levenshtein_distance(s, s), 0);
            assert_eq!(levenshtein_distance(s, ""), s.chars().count());
        }
    }

    #[test]
    fn test_symmetry() {
        let pairs = [("mrf", "mrfs"), ("lcw", "lcwa"), ("kitten", "sitting"), ("", "xyz")];
        for (a, b) in pairs {
            assert_eq!(levenshtein_distance(a, b), levenshtein_distance(b, a));
        }
    }

    #[test]
    fn test_case_sensitive() {
        assert_eq!(levenshtein_distance("MRF", "mrf"), 3);
    }

    #[test]
    fn test_normalized_distance() {
        assert!((normalized_distance("", "") - 0.0).abs() < 1e-9);
        assert!((normalized_distance("abc", "abc") - 0.0).abs() < 1e-9);
        assert!((normalized_distance("abc", "def") - 1.0).abs() < 1e-9);
        assert!((normalized_distance("mrf", "mrfs") - 0.25).abs() < 1e-9);
    }
}
