//! Positional operations on indexable collections
//!
//! A position splits a collection into the elements strictly before it and
//! the elements at or after it. Positions are compared with
//! [`Indexable::precedes`], so out-of-range positions are clamped rather
//! than rejected: anything at or past the end takes everything and drops
//! nothing.
//!
//! ```
//! use traverse::{drop, split_at, take};
//!
//! let col = vec![1, 2, 3, 4, 5, 6, 7];
//! assert_eq!(take(&col, 3), vec![1, 2, 3]);
//! assert_eq!(drop(&col, 3), vec![4, 5, 6, 7]);
//! assert_eq!(split_at(&col, 99), (col.clone(), vec![]));
//! ```

use tracing::trace;
use traverse_core::Indexable;

/// Position of the first element satisfying `pred`.
///
/// Returns `None` if no element matches or the collection is empty.
pub fn find_index<C>(
    collection: &C,
    mut pred: impl FnMut(&C::Element) -> bool,
) -> Option<C::Position>
where
    C: Indexable + ?Sized,
{
    collection.positions().find(|&position| {
        collection
            .element_at(position)
            .is_some_and(|elem| pred(&elem))
    })
}

fn note_clamp<C: Indexable + ?Sized>(collection: &C, index: C::Position, op: &str) {
    if collection.precedes(collection.end_position(), index) {
        trace!(
            "{}: position {:?} is past the end {:?}, clamping",
            op,
            index,
            collection.end_position()
        );
    }
}

/// Elements strictly before `index`.
pub fn take<C>(collection: &C, index: C::Position) -> Vec<C::Element>
where
    C: Indexable + ?Sized,
{
    note_clamp(collection, index, "take");
    collection
        .positions()
        .take_while(|&position| collection.precedes(position, index))
        .filter_map(|position| collection.element_at(position))
        .collect()
}

/// Elements at or after `index`.
pub fn drop<C>(collection: &C, index: C::Position) -> Vec<C::Element>
where
    C: Indexable + ?Sized,
{
    note_clamp(collection, index, "drop");
    collection
        .positions()
        .skip_while(|&position| collection.precedes(position, index))
        .filter_map(|position| collection.element_at(position))
        .collect()
}

/// `(take(index), drop(index))`; the halves concatenate to the collection.
pub fn split_at<C>(collection: &C, index: C::Position) -> (Vec<C::Element>, Vec<C::Element>)
where
    C: Indexable + ?Sized,
{
    note_clamp(collection, index, "split_at");
    let mut prefix = Vec::new();
    let mut suffix = Vec::new();
    for position in collection.positions() {
        let Some(elem) = collection.element_at(position) else {
            continue;
        };
        if collection.precedes(position, index) {
            prefix.push(elem);
        } else {
            suffix.push(elem);
        }
    }
    (prefix, suffix)
}

/// Every element but the first (empty for an empty collection).
pub fn drop_first<C>(collection: &C) -> Vec<C::Element>
where
    C: Indexable + ?Sized,
{
    let start = collection.start_position();
    drop(collection, collection.successor(start))
}

/// Every element but the last (empty for an empty collection).
pub fn drop_last<C>(collection: &C) -> Vec<C::Element>
where
    C: Indexable + ?Sized,
{
    let mut elements: Vec<C::Element> = collection
        .positions()
        .filter_map(|position| collection.element_at(position))
        .collect();
    elements.pop();
    elements
}
