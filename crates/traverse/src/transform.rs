//! Sequence transforms
//!
//! One-shot transformations: each consumes its input sequence once and
//! builds a new `Vec`. Inputs are assumed finite.

use std::collections::HashSet;
use std::hash::Hash;

/// Map each element to a sequence and concatenate the results in order.
pub fn flat_map<I, J>(sequence: I, f: impl FnMut(I::Item) -> J) -> Vec<J::Item>
where
    I: IntoIterator,
    J: IntoIterator,
{
    sequence.into_iter().flat_map(f).collect()
}

/// Flatten a sequence of sequences by one level.
pub fn concat<I>(sequences: I) -> Vec<<I::Item as IntoIterator>::Item>
where
    I: IntoIterator,
    I::Item: IntoIterator,
{
    sequences.into_iter().flatten().collect()
}

/// Insert `separator` between every pair of adjacent elements.
///
/// Zero or one element is returned unchanged; `n` elements become `2n - 1`.
pub fn intersperse<I>(sequence: I, separator: I::Item) -> Vec<I::Item>
where
    I: IntoIterator,
    I::Item: Clone,
{
    let iter = sequence.into_iter();
    let mut result = Vec::with_capacity(iter.size_hint().0.saturating_mul(2));
    for elem in iter {
        if !result.is_empty() {
            result.push(separator.clone());
        }
        result.push(elem);
    }
    result
}

/// Every intermediate result of a left fold, starting with `initial`.
///
/// An `n`-element input gives `n + 1` results.
pub fn scan<I, U>(sequence: I, initial: U, mut combine: impl FnMut(U, I::Item) -> U) -> Vec<U>
where
    I: IntoIterator,
    U: Clone,
{
    let iter = sequence.into_iter();
    let mut results = Vec::with_capacity(iter.size_hint().0 + 1);
    let mut acc = initial;
    for elem in iter {
        results.push(acc.clone());
        acc = combine(acc, elem);
    }
    results.push(acc);
    results
}

/// All `2^n` order-preserving subsequences.
///
/// Starts from the empty subsequence; as each element is consumed, every
/// subsequence found so far is repeated with that element appended.
pub fn subsequences<I>(sequence: I) -> Vec<Vec<I::Item>>
where
    I: IntoIterator,
    I::Item: Clone,
{
    let mut found: Vec<Vec<I::Item>> = vec![Vec::new()];
    for elem in sequence {
        let extended: Vec<Vec<I::Item>> = found
            .iter()
            .map(|subsequence| {
                let mut next = subsequence.clone();
                next.push(elem.clone());
                next
            })
            .collect();
        found.extend(extended);
    }
    found
}

/// Remove repeated elements, keeping first occurrences in input order.
///
/// Uses only `==`, so each element is compared against the distinct
/// elements seen so far. See [`distinct_hashed`] for a linear version.
pub fn distinct<I>(sequence: I) -> Vec<I::Item>
where
    I: IntoIterator,
    I::Item: PartialEq,
{
    let mut result: Vec<I::Item> = Vec::new();
    for elem in sequence {
        if !result.contains(&elem) {
            result.push(elem);
        }
    }
    result
}

/// [`distinct`] for hashable elements, in linear time.
pub fn distinct_hashed<I>(sequence: I) -> Vec<I::Item>
where
    I: IntoIterator,
    I::Item: Eq + Hash + Clone,
{
    let mut seen = HashSet::new();
    sequence
        .into_iter()
        .filter(|elem| seen.insert(elem.clone()))
        .collect()
}

/// The remainder of `sequence` after `prefix`, or `None` if it does not
/// start with `prefix`.
///
/// The remainder may be empty (`strip_prefix("foo", "foo")`).
pub fn strip_prefix<I, P>(sequence: I, prefix: P) -> Option<Vec<I::Item>>
where
    I: IntoIterator,
    P: IntoIterator,
    I::Item: PartialEq<P::Item>,
{
    let mut iter = sequence.into_iter();
    for expected in prefix {
        match iter.next() {
            Some(elem) if elem == expected => {}
            _ => return None,
        }
    }
    Some(iter.collect())
}

/// All elements but the first; empty input gives an empty result.
pub fn tail<I>(sequence: I) -> Vec<I::Item>
where
    I: IntoIterator,
{
    sequence.into_iter().skip(1).collect()
}

/// All elements but the last; empty input gives an empty result.
pub fn rtail<I>(sequence: I) -> Vec<I::Item>
where
    I: IntoIterator,
{
    let mut elements: Vec<I::Item> = sequence.into_iter().collect();
    elements.pop();
    elements
}

/// All suffixes, longest first, ending with the empty suffix.
pub fn tails<I>(sequence: I) -> Vec<Vec<I::Item>>
where
    I: IntoIterator,
    I::Item: Clone,
{
    let elements: Vec<I::Item> = sequence.into_iter().collect();
    (0..=elements.len())
        .map(|start| elements[start..].to_vec())
        .collect()
}

/// All prefixes, shortest first, starting with the empty prefix.
pub fn rtails<I>(sequence: I) -> Vec<Vec<I::Item>>
where
    I: IntoIterator,
    I::Item: Clone,
{
    let elements: Vec<I::Item> = sequence.into_iter().collect();
    (0..=elements.len())
        .map(|end| elements[..end].to_vec())
        .collect()
}

/// True if both sequences hold equal elements in the same order.
pub fn sequence_eq<L, R>(lhs: L, rhs: R) -> bool
where
    L: IntoIterator,
    R: IntoIterator,
    L::Item: PartialEq<R::Item>,
{
    lhs.into_iter().eq(rhs)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flat_map() {
        let result = flat_map([4, 2, 3], |e| [e, e * 10 + e]);
        assert_eq!(result, vec![4, 44, 2, 22, 3, 33]);
    }

    #[test]
    fn test_flat_map_empty_inner() {
        let result = flat_map(1..=4, |e| if e % 2 == 0 { vec![e] } else { vec![] });
        assert_eq!(result, vec![2, 4]);
    }

    #[test]
    fn test_concat() {
        let nested = vec![vec![1, 2, 3], vec![4, 5, 6], vec![7, 8, 9]];
        assert_eq!(concat(nested), vec![1, 2, 3, 4, 5, 6, 7, 8, 9]);
        assert_eq!(concat(Vec::<Vec<i32>>::new()), Vec::<i32>::new());
    }

    #[test]
    fn test_intersperse() {
        let result: String = intersperse("abcde".chars(), ',').into_iter().collect();
        assert_eq!(result, "a,b,c,d,e");
    }

    #[test]
    fn test_intersperse_short_inputs() {
        assert_eq!(intersperse(Vec::<i32>::new(), 0), Vec::<i32>::new());
        assert_eq!(intersperse([7], 0), vec![7]);
    }

    #[test]
    fn test_scan() {
        assert_eq!(scan([4, 2, 4], 64, |x, y| x / y), vec![64, 16, 8, 2]);
        assert_eq!(scan([1, 2, 3], 4, |x, y| 2 * x + y), vec![4, 9, 20, 43]);
    }

    #[test]
    fn test_scan_empty_keeps_initial() {
        assert_eq!(scan(Vec::<i32>::new(), 10, |x, y| x + y), vec![10]);
    }

    #[test]
    fn test_subsequences() {
        assert_eq!(
            subsequences([1, 2, 3]),
            vec![
                vec![],
                vec![1],
                vec![2],
                vec![1, 2],
                vec![3],
                vec![1, 3],
                vec![2, 3],
                vec![1, 2, 3]
            ]
        );
    }

    #[test]
    fn test_subsequences_of_empty() {
        assert_eq!(subsequences(Vec::<u8>::new()), vec![Vec::<u8>::new()]);
    }

    #[test]
    fn test_distinct() {
        assert_eq!(
            distinct([1, 2, 3, 4, 5, 4, 3, 2, 3, 1, 0]),
            vec![1, 2, 3, 4, 5, 0]
        );
        assert_eq!(distinct("bannana".chars()), vec!['b', 'a', 'n']);
    }

    #[test]
    fn test_distinct_hashed_matches_distinct() {
        let input = [1, 2, 3, 4, 5, 4, 3, 2, 3, 1, 0];
        assert_eq!(distinct_hashed(input), distinct(input));
    }

    #[test]
    fn test_distinct_partial_eq_only() {
        let floats = [1.0, 2.5, 1.0, f64::NAN, 2.5];
        let result = distinct(floats);
        assert_eq!(result.len(), 3);
        assert!(result[2].is_nan());
    }

    #[test]
    fn test_strip_prefix() {
        assert_eq!(
            strip_prefix("foobar".chars(), "foo".chars()),
            Some(vec!['b', 'a', 'r'])
        );
        assert_eq!(strip_prefix("foo".chars(), "foo".chars()), Some(vec![]));
        assert_eq!(strip_prefix("barfoo".chars(), "foo".chars()), None);
        assert_eq!(strip_prefix("barfoobaz".chars(), "foo".chars()), None);
    }

    #[test]
    fn test_strip_prefix_longer_than_sequence() {
        assert_eq!(strip_prefix([1, 2], [1, 2, 3]), None);
        assert_eq!(strip_prefix([1, 2], Vec::<i32>::new()), Some(vec![1, 2]));
    }

    #[test]
    fn test_tail() {
        assert_eq!(tail([1, 2, 3, 4, 5, 6]), vec![2, 3, 4, 5, 6]);
        assert_eq!(tail(Vec::<i32>::new()), Vec::<i32>::new());
    }

    #[test]
    fn test_rtail() {
        assert_eq!(rtail([1, 2, 3, 4, 5, 6]), vec![1, 2, 3, 4, 5]);
        assert_eq!(rtail(Vec::<i32>::new()), Vec::<i32>::new());
    }

    #[test]
    fn test_tails() {
        assert_eq!(
            tails([1, 2, 3, 4]),
            vec![vec![1, 2, 3, 4], vec![2, 3, 4], vec![3, 4], vec![4], vec![]]
        );
        assert_eq!(tails(Vec::<i32>::new()), vec![Vec::<i32>::new()]);
    }

    #[test]
    fn test_rtails() {
        assert_eq!(
            rtails([1, 2, 3, 4]),
            vec![vec![], vec![1], vec![1, 2], vec![1, 2, 3], vec![1, 2, 3, 4]]
        );
    }

    #[test]
    fn test_sequence_eq() {
        assert!(sequence_eq([1, 2, 3, 4, 5, 6], vec![1, 2, 3, 4, 5, 6]));
        assert!(!sequence_eq([1, 2, 3], [1, 2]));
        assert!(sequence_eq("abc".chars(), ['a', 'b', 'c']));
    }
}
