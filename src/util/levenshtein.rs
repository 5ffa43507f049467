//! Levenshtein edit distance and the fuzzy similarity score built on it.
//!
//! Both functions work on Unicode scalar values, so an Arabic letter counts as
//! one character exactly like a Latin one.

use std::cmp::min;

/// Calculate the Levenshtein distance between two strings.
///
/// Insertions, deletions and substitutions each cost 1. Only two rows of the
/// dynamic-programming table are kept, sized by the shorter input.
pub fn edit_distance(a: &str, b: &str) -> usize {
    let a_chars: Vec<char> = a.chars().collect();
    let b_chars: Vec<char> = b.chars().collect();

    // Rows run over the shorter string.
    let (long, short) = if a_chars.len() >= b_chars.len() {
        (&a_chars, &b_chars)
    } else {
        (&b_chars, &a_chars)
    };

    if short.is_empty() {
        return long.len();
    }

    let mut prev_row: Vec<usize> = (0..=short.len()).collect();
    let mut curr_row = vec![0; short.len() + 1];

    for (i, long_char) in long.iter().enumerate() {
        curr_row[0] = i + 1;

        for (j, short_char) in short.iter().enumerate() {
            let cost = if long_char == short_char { 0 } else { 1 };

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

    prev_row[short.len()]
}

/// Similarity of `query` against `target` in `[0, 1]`.
///
/// - `1.0` for equal strings
/// - `0.9` when `target` contains `query`
/// - `0.0` when either side has two characters or fewer
/// - otherwise `0.8 * (1 - distance / max_len)` if the edit distance is
///   within `floor(0.35 * max_len)` (at least 1), else `0.0`
pub fn fuzzy_score(query: &str, target: &str) -> f64 {
    if query == target {
        return 1.0;
    }
    if target.contains(query) {
        return 0.9;
    }

    let query_len = query.chars().count();
    let target_len = target.chars().count();
    if query_len <= 2 || target_len <= 2 {
        return 0.0;
    }

    let max_len = query_len.max(target_len);
    let threshold = ((0.35 * max_len as f64).floor() as usize).max(1);
    let distance = edit_distance(query, target);

    if distance <= threshold {
        0.8 * (1.0 - distance as f64 / max_len as f64).max(0.0)
    } else {
        0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_edit_distance() {
        assert_eq!(edit_distance("", ""), 0);
        assert_eq!(edit_distance("", "a"), 1);
        assert_eq!(edit_distance("a", ""), 1);
        assert_eq!(edit_distance("a", "a"), 0);
        assert_eq!(edit_distance("ab", "ac"), 1);
        assert_eq!(edit_distance("abc", "def"), 3);
        assert_eq!(edit_distance("kitten", "sitting"), 3);
        assert_eq!(edit_distance("search", "serach"), 2);
        assert_eq!(edit_distance("flaw", "lawn"), 2);
    }

    #[test]
    fn test_edit_distance_arabic() {
        // One letter differs: taa marbuta vs haa.
        assert_eq!(edit_distance("قهوة", "قهوه"), 1);
        assert_eq!(edit_distance("مطعم", "مطاعم"), 1);
        assert_eq!(edit_distance("مسقط", ""), 4);
    }

    #[test]
    fn test_edit_distance_symmetry() {
        let pairs = [
            ("restaurant", "resturant"),
            ("cafe", "coffee"),
            ("", "muscat"),
            ("صيدلية", "صيدليه"),
        ];
        for (a, b) in pairs {
            assert_eq!(edit_distance(a, b), edit_distance(b, a));
            assert_eq!(edit_distance(a, a), 0);
        }
    }

    #[test]
    fn test_fuzzy_score_exact_and_substring() {
        assert_eq!(fuzzy_score("cafe", "cafe"), 1.0);
        assert_eq!(fuzzy_score("cafe", "cafeteria"), 0.9);
        // Containment is checked before the length guard.
        assert_eq!(fuzzy_score("ab", "abc"), 0.9);
    }

    #[test]
    fn test_fuzzy_score_short_strings() {
        assert_eq!(fuzzy_score("ab", "ac"), 0.0);
        assert_eq!(fuzzy_score("abc", "xy"), 0.0);
    }

    #[test]
    fn test_fuzzy_score_within_threshold() {
        // max_len 10, threshold floor(3.5) = 3, distance 1.
        let score = fuzzy_score("resturant", "restaurant");
        assert_eq!(score, 0.8 * (1.0 - 1.0 / 10.0));

        // max_len 6, threshold 2, distance 2.
        let score = fuzzy_score("search", "serach");
        assert_eq!(score, 0.8 * (1.0 - 2.0 / 6.0));
    }

    #[test]
    fn test_fuzzy_score_outside_threshold() {
        // max_len 4, threshold 1, distance 3.
        assert_eq!(fuzzy_score("cafe", "shop"), 0.0);
        assert_eq!(fuzzy_score("pharmacy", "bakery"), 0.0);
    }

    #[test]
    fn test_fuzzy_score_minimum_threshold() {
        // max_len 3 gives floor(1.05) = 1.
        assert_eq!(fuzzy_score("cat", "cut"), 0.8 * (1.0 - 1.0 / 3.0));
        assert_eq!(fuzzy_score("cat", "dog"), 0.0);
    }
}
