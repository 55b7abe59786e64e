//! Distinct permutations of a multiset in lexicographic order
//!
//! Uses the classic "next permutation" step: find the rightmost ascent
//! `seq[i] < seq[i + 1]`, swap `seq[i]` with the rightmost larger element to
//! its right, then reverse the suffix after `i`. Repeated elements are never
//! distinguished, so `[a, a, b]` yields 3 arrangements rather than 6.
//!
//! # Example
//!
//! ```
//! use mnk::search::Permutations;
//!
//! let all: Vec<Vec<char>> = Permutations::new(vec!['b', 'a', 'a']).collect();
//! assert_eq!(all, vec![
//!     vec!['a', 'a', 'b'],
//!     vec!['a', 'b', 'a'],
//!     vec!['b', 'a', 'a'],
//! ]);
//! ```

/// Advance `seq` to the next lexicographic arrangement in place.
///
/// Returns `false` (leaving `seq` untouched) once `seq` is in descending
/// order, i.e. it was the last arrangement.
pub fn next_permutation<T: Ord>(seq: &mut [T]) -> bool {
    let len = seq.len();
    if len < 2 {
        return false;
    }

    // Rightmost i with seq[i] < seq[i + 1]
    let Some(i) = (0..len - 1).rev().find(|&i| seq[i] < seq[i + 1]) else {
        return false;
    };
    // Rightmost j > i with seq[j] > seq[i]; exists because seq[i + 1] qualifies
    let j = (i + 1..len).rev().find(|&j| seq[j] > seq[i]).unwrap_or(i + 1);

    seq.swap(i, j);
    seq[i + 1..].reverse();
    true
}

/// Number of distinct arrangements of `first` copies of one symbol and
/// `second` copies of another: `(first + second)! / (first! * second!)`.
///
/// Returns `None` if the count does not fit in a `u128`.
pub fn distinct_permutation_count(first: usize, second: usize) -> Option<u128> {
    let n = first.checked_add(second)? as u128;
    let k = first.min(second) as u128;
    // C(n, k) built incrementally; every intermediate is itself a binomial
    let mut count: u128 = 1;
    for i in 0..k {
        count = count.checked_mul(n - i)? / (i + 1);
    }
    Some(count)
}

/// Lazy iterator over the distinct permutations of a multiset.
///
/// Starts at the sorted arrangement and ends after yielding the descending
/// one. Each arrangement is produced once; enumerating again requires a new
/// iterator.
#[derive(Debug, Clone)]
pub struct Permutations<T> {
    current: Option<Vec<T>>,
}

impl<T: Ord + Clone> Permutations<T> {
    /// Create an enumerator seeded from any arrangement of the multiset
    pub fn new(mut items: Vec<T>) -> Self {
        items.sort();
        Self {
            current: Some(items),
        }
    }
}

impl<T: Ord + Clone> Iterator for Permutations<T> {
    type Item = Vec<T>;

    fn next(&mut self) -> Option<Self::Item> {
        let current = self.current.take()?;
        let mut next = current.clone();
        if next_permutation(&mut next) {
            self.current = Some(next);
        }
        Some(current)
    }
}

impl<T: Ord + Clone> std::iter::FusedIterator for Permutations<T> {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::Mark;
    use std::collections::HashSet;

    #[test]
    fn test_next_permutation_step() {
        let mut seq = vec![1, 2, 3];
        assert!(next_permutation(&mut seq));
        assert_eq!(seq, vec![1, 3, 2]);
        assert!(next_permutation(&mut seq));
        assert_eq!(seq, vec![2, 1, 3]);
    }

    #[test]
    fn test_next_permutation_last() {
        let mut seq = vec![3, 2, 1];
        assert!(!next_permutation(&mut seq));
        assert_eq!(seq, vec![3, 2, 1]);
    }

    #[test]
    fn test_short_sequences() {
        let mut empty: Vec<u8> = Vec::new();
        assert!(!next_permutation(&mut empty));
        let mut single = vec![7];
        assert!(!next_permutation(&mut single));
    }

    #[test]
    fn test_duplicates_not_distinguished() {
        let all: Vec<_> = Permutations::new(vec!['x', 'x', 'o']).collect();
        assert_eq!(all.len(), 3);
    }

    #[test]
    fn test_all_equal_yields_once() {
        let all: Vec<_> = Permutations::new(vec![Mark::Player; 4]).collect();
        assert_eq!(all, vec![vec![Mark::Player; 4]]);
    }

    #[test]
    fn test_empty_multiset_yields_one_empty() {
        let all: Vec<Vec<Mark>> = Permutations::new(Vec::new()).collect();
        assert_eq!(all, vec![Vec::<Mark>::new()]);
    }

    #[test]
    fn test_marks_count_and_order() {
        for m in 0..=10usize {
            let seed: Vec<Mark> = (0..m)
                .map(|i| if i % 2 == 0 { Mark::Computer } else { Mark::Player })
                .collect();
            let computer = m.div_ceil(2);
            let player = m / 2;

            let all: Vec<Vec<Mark>> = Permutations::new(seed.clone()).collect();
            let expected = distinct_permutation_count(computer, player).unwrap();
            assert_eq!(all.len() as u128, expected, "m = {}", m);

            let unique: HashSet<_> = all.iter().cloned().collect();
            assert_eq!(unique.len(), all.len());

            let mut ascending = seed.clone();
            ascending.sort();
            let mut descending = ascending.clone();
            descending.reverse();
            assert_eq!(all.first(), Some(&ascending));
            assert_eq!(all.last(), Some(&descending));

            assert!(all.windows(2).all(|w| w[0] < w[1]), "not lexicographic for m = {}", m);
        }
    }

    #[test]
    fn test_iterator_is_fused() {
        let mut perms = Permutations::new(vec![1, 2]);
        assert_eq!(perms.next(), Some(vec![1, 2]));
        assert_eq!(perms.next(), Some(vec![2, 1]));
        assert_eq!(perms.next(), None);
        assert_eq!(perms.next(), None);
    }

    #[test]
    fn test_distinct_count() {
        assert_eq!(distinct_permutation_count(0, 0), Some(1));
        assert_eq!(distinct_permutation_count(2, 1), Some(3));
        assert_eq!(distinct_permutation_count(4, 4), Some(70));
        assert_eq!(distinct_permutation_count(8, 7), Some(6435));
        assert_eq!(distinct_permutation_count(12, 12), Some(2_704_156));
        assert!(distinct_permutation_count(200, 200).is_none());
    }
}
