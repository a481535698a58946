//! Character-level edit distance used by the fuzzy menu lookup.

/// Computes the Levenshtein distance between two strings: the minimum number
/// of single-character insertions, deletions, and substitutions (unit cost
/// each) needed to transform `a` into `b`.
///
/// Operates on `char`s, so multi-byte input is counted per character, not per
/// byte. Case is significant here; callers that want case-insensitive
/// matching lowercase both sides first.
pub fn edit_distance(a: &str, b: &str) -> usize {
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();

    if a.is_empty() {
        return b.len();
    }
    if b.is_empty() {
        return a.len();
    }

    // Two-row dynamic programming table.
    let mut prev: Vec<usize> = (0..=b.len()).collect();
    let mut curr: Vec<usize> = vec![0; b.len() + 1];

    for (i, ca) in a.iter().enumerate() {
        curr[0] = i + 1;
        for (j, cb) in b.iter().enumerate() {
            let substitution = prev[j] + usize::from(ca != cb);
            let deletion = prev[j + 1] + 1;
            let insertion = curr[j] + 1;
            curr[j + 1] = substitution.min(deletion).min(insertion);
        }
        std::mem::swap(&mut prev, &mut curr);
    }

    prev[b.len()]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn identical_strings_have_zero_distance() {
        assert_eq!(edit_distance("pizza", "pizza"), 0);
    }

    #[test]
    fn empty_sides() {
        assert_eq!(edit_distance("", "salad"), 5);
        assert_eq!(edit_distance("salad", ""), 5);
        assert_eq!(edit_distance("", ""), 0);
    }

    #[test]
    fn single_edits() {
        // deletion
        assert_eq!(edit_distance("piza", "pizza"), 1);
        // substitution
        assert_eq!(edit_distance("colb", "cola"), 1);
        // insertion
        assert_eq!(edit_distance("pizzza", "pizza"), 1);
    }

    #[test]
    fn unrelated_strings() {
        assert_eq!(edit_distance("kitten", "sitting"), 3);
        assert!(edit_distance("xyz123", "pizza") >= 3);
    }

    #[test]
    fn case_is_significant() {
        assert_eq!(edit_distance("Pizza", "pizza"), 1);
    }
}
