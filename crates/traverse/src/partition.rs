//! Conditional partitioning
//!
//! `take_while`/`drop_while`/`span` locate the first element that fails a
//! predicate with [`find_index`] and then split there, so every function in
//! the family agrees on the split point. `group_by` partitions a sequence
//! into runs under a binary relation.
//!
//! # Grouping
//!
//! A candidate joins the current run when `relation(last, candidate)` holds,
//! where `last` is the most recently added member of the run, not its
//! first. The relation need not be transitive:
//!
//! ```
//! use traverse::group_by;
//!
//! let runs = group_by([5, 6, 1, 3, 4, 5], |a, b| a < b);
//! assert_eq!(runs, vec![vec![5, 6], vec![1, 3, 4, 5]]);
//! ```

use crate::slice::{drop, find_index, split_at, take};
use traverse_core::Indexable;

fn first_failure<C>(collection: &C, mut pred: impl FnMut(&C::Element) -> bool) -> C::Position
where
    C: Indexable + ?Sized,
{
    find_index(collection, |elem| !pred(elem)).unwrap_or_else(|| collection.end_position())
}

/// Longest prefix whose elements all satisfy `pred`.
pub fn take_while<C>(collection: &C, pred: impl FnMut(&C::Element) -> bool) -> Vec<C::Element>
where
    C: Indexable + ?Sized,
{
    take(collection, first_failure(collection, pred))
}

/// Remainder after the longest prefix satisfying `pred`.
pub fn drop_while<C>(collection: &C, pred: impl FnMut(&C::Element) -> bool) -> Vec<C::Element>
where
    C: Indexable + ?Sized,
{
    drop(collection, first_failure(collection, pred))
}

/// `(take_while(pred), drop_while(pred))` from a single predicate scan.
pub fn span<C>(
    collection: &C,
    pred: impl FnMut(&C::Element) -> bool,
) -> (Vec<C::Element>, Vec<C::Element>)
where
    C: Indexable + ?Sized,
{
    split_at(collection, first_failure(collection, pred))
}

/// `take_while` for a single-pass sequence.
pub fn take_while_seq<I>(sequence: I, mut pred: impl FnMut(&I::Item) -> bool) -> Vec<I::Item>
where
    I: IntoIterator,
{
    sequence.into_iter().take_while(|elem| pred(elem)).collect()
}

/// `drop_while` for a single-pass sequence.
pub fn drop_while_seq<I>(sequence: I, mut pred: impl FnMut(&I::Item) -> bool) -> Vec<I::Item>
where
    I: IntoIterator,
{
    sequence.into_iter().skip_while(|elem| pred(elem)).collect()
}

/// `span` for a single-pass sequence.
///
/// The sequence is consumed once; the element that ends the prefix is the
/// first element of the suffix.
pub fn span_seq<I>(
    sequence: I,
    mut pred: impl FnMut(&I::Item) -> bool,
) -> (Vec<I::Item>, Vec<I::Item>)
where
    I: IntoIterator,
{
    let mut iter = sequence.into_iter();
    let mut prefix = Vec::new();
    let mut suffix = Vec::new();
    for elem in iter.by_ref() {
        if pred(&elem) {
            prefix.push(elem);
        } else {
            suffix.push(elem);
            break;
        }
    }
    suffix.extend(iter);
    (prefix, suffix)
}

/// Partition `sequence` into maximal runs under `relation`.
///
/// `relation(last, candidate)` is called once for every element after the
/// first, with `last` the latest member of the current run. Concatenating
/// the runs reproduces the input; empty input gives no runs.
pub fn group_by<I>(
    sequence: I,
    mut relation: impl FnMut(&I::Item, &I::Item) -> bool,
) -> Vec<Vec<I::Item>>
where
    I: IntoIterator,
{
    let mut groups: Vec<Vec<I::Item>> = Vec::new();
    for elem in sequence {
        match groups.last_mut() {
            Some(run) if run.last().is_some_and(|last| relation(last, &elem)) => run.push(elem),
            _ => groups.push(vec![elem]),
        }
    }
    groups
}

/// Runs of equal adjacent elements.
pub fn group<I>(sequence: I) -> Vec<Vec<I::Item>>
where
    I: IntoIterator,
    I::Item: PartialEq,
{
    group_by(sequence, |a, b| a == b)
}
