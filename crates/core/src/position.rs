//! Positions in indexable collections
//!
//! An [`Indexable`] collection is an ordered sequence that can be traversed
//! more than once and addressed by an opaque position. Positions are only
//! compared through [`Indexable::precedes`] and [`Indexable::distance`],
//! never through integer arithmetic, so collections whose positions are not
//! plain offsets (text, addressed by character boundary) work with the same
//! algorithms as arrays.
//!
//! `precedes` is the per-step ordering check used while traversing and must
//! be constant time. `distance` may walk the collection.
//!
//! ```text
//!   start                          end
//!     │                             │
//!     ▼                             ▼
//!   ┌─────┬─────┬─────┬─────┬─────┐
//!   │  a  │  b  │  c  │  d  │  e  │   end is one-past-the-last
//!   └─────┴─────┴─────┴─────┴─────┘   and is never dereferenced
//! ```

use std::collections::VecDeque;
use std::fmt;

/// An ordered, multi-pass collection addressable by position.
pub trait Indexable {
    /// Element produced when a position is dereferenced.
    type Element;

    /// Opaque marker for an element or a boundary.
    type Position: Copy + Eq + fmt::Debug;

    /// Position of the first element (equal to `end_position` when empty).
    fn start_position(&self) -> Self::Position;

    /// One past the last element.
    fn end_position(&self) -> Self::Position;

    /// The position following `position`.
    ///
    /// Positions at or beyond the end still have a successor; it is simply
    /// never dereferenced.
    fn successor(&self, position: Self::Position) -> Self::Position;

    /// Signed number of steps from `from` to `to`.
    ///
    /// Negative when `to` precedes `from`. Positions beyond the end are
    /// accepted and measured as if the collection continued past its end.
    /// Gaps wider than `isize::MAX` saturate.
    fn distance(&self, from: Self::Position, to: Self::Position) -> isize;

    /// True when `a` comes strictly before `b`.
    ///
    /// Agrees with `distance(a, b) > 0`. Implementations whose `distance`
    /// is not constant time should override this.
    fn precedes(&self, a: Self::Position, b: Self::Position) -> bool {
        self.distance(a, b) > 0
    }

    /// The element at `position`, or `None` at/after the end.
    fn element_at(&self, position: Self::Position) -> Option<Self::Element>;

    /// Every valid position from start to end (exclusive).
    fn positions(&self) -> Positions<'_, Self> {
        Positions {
            collection: self,
            current: self.start_position(),
            end: self.end_position(),
        }
    }

    /// Number of elements between start and end.
    fn count(&self) -> usize {
        self.distance(self.start_position(), self.end_position())
            .max(0) as usize
    }
}

/// Iterator over the valid positions of an [`Indexable`].
pub struct Positions<'a, C: Indexable + ?Sized> {
    collection: &'a C,
    current: C::Position,
    end: C::Position,
}

impl<C: Indexable + ?Sized> Iterator for Positions<'_, C> {
    type Item = C::Position;

    fn next(&mut self) -> Option<C::Position> {
        if !self.collection.precedes(self.current, self.end) {
            return None;
        }
        let position = self.current;
        self.current = self.collection.successor(position);
        Some(position)
    }
}

fn offset_distance(from: usize, to: usize) -> isize {
    if from <= to {
        isize::try_from(to - from).unwrap_or(isize::MAX)
    } else {
        isize::try_from(from - to).map_or(isize::MIN, |gap| -gap)
    }
}

impl<T: Clone> Indexable for [T] {
    type Element = T;
    type Position = usize;

    fn start_position(&self) -> usize {
        0
    }

    fn end_position(&self) -> usize {
        self.len()
    }

    fn successor(&self, position: usize) -> usize {
        position.saturating_add(1)
    }

    fn distance(&self, from: usize, to: usize) -> isize {
        offset_distance(from, to)
    }

    fn precedes(&self, a: usize, b: usize) -> bool {
        a < b
    }

    fn element_at(&self, position: usize) -> Option<T> {
        self.get(position).cloned()
    }

    fn count(&self) -> usize {
        self.len()
    }
}

impl<T: Clone, const N: usize> Indexable for [T; N] {
    type Element = T;
    type Position = usize;

    fn start_position(&self) -> usize {
        0
    }

    fn end_position(&self) -> usize {
        N
    }

    fn successor(&self, position: usize) -> usize {
        position.saturating_add(1)
    }

    fn distance(&self, from: usize, to: usize) -> isize {
        offset_distance(from, to)
    }

    fn precedes(&self, a: usize, b: usize) -> bool {
        a < b
    }

    fn element_at(&self, position: usize) -> Option<T> {
        self.get(position).cloned()
    }
}

impl<T: Clone> Indexable for Vec<T> {
    type Element = T;
    type Position = usize;

    fn start_position(&self) -> usize {
        0
    }

    fn end_position(&self) -> usize {
        self.len()
    }

    fn successor(&self, position: usize) -> usize {
        position.saturating_add(1)
    }

    fn distance(&self, from: usize, to: usize) -> isize {
        offset_distance(from, to)
    }

    fn precedes(&self, a: usize, b: usize) -> bool {
        a < b
    }

    fn element_at(&self, position: usize) -> Option<T> {
        self.get(position).cloned()
    }

    fn count(&self) -> usize {
        self.len()
    }
}

impl<T: Clone> Indexable for VecDeque<T> {
    type Element = T;
    type Position = usize;

    fn start_position(&self) -> usize {
        0
    }

    fn end_position(&self) -> usize {
        self.len()
    }

    fn successor(&self, position: usize) -> usize {
        position.saturating_add(1)
    }

    fn distance(&self, from: usize, to: usize) -> isize {
        offset_distance(from, to)
    }

    fn precedes(&self, a: usize, b: usize) -> bool {
        a < b
    }

    fn element_at(&self, position: usize) -> Option<T> {
        self.get(position).cloned()
    }

    fn count(&self) -> usize {
        self.len()
    }
}

/// A character boundary in a string, stored as a byte offset.
///
/// Positions are produced by [`Indexable::positions`] or
/// [`CharPosition::at_char`]; an offset past the end of the text is a
/// valid (clamped) position for `take`/`drop` style operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CharPosition(usize);

impl CharPosition {
    pub const fn new(byte_offset: usize) -> Self {
        CharPosition(byte_offset)
    }

    pub const fn byte_offset(self) -> usize {
        self.0
    }

    /// Position of the `n`th character of `text`.
    ///
    /// Past the last character this keeps counting one byte per step, so
    /// `at_char(text, count + k)` lies `k` steps beyond the end.
    pub fn at_char(text: &str, n: usize) -> Self {
        match text.char_indices().nth(n) {
            Some((offset, _)) => CharPosition(offset),
            None => CharPosition(text.len().saturating_add(n - text.chars().count())),
        }
    }
}

impl Indexable for str {
    type Element = char;
    type Position = CharPosition;

    fn start_position(&self) -> CharPosition {
        CharPosition(0)
    }

    fn end_position(&self) -> CharPosition {
        CharPosition(self.len())
    }

    fn successor(&self, position: CharPosition) -> CharPosition {
        let step = self.element_at(position).map_or(1, char::len_utf8);
        CharPosition(position.0.saturating_add(step))
    }

    fn distance(&self, from: CharPosition, to: CharPosition) -> isize {
        let (lo, hi, sign) = if from <= to {
            (from.0, to.0, 1)
        } else {
            (to.0, from.0, -1)
        };
        let len = self.len();
        let inside_lo = lo.min(len);
        let inside_hi = hi.min(len);
        // Offsets that split a character count bytewise
        let inside = self
            .get(inside_lo..inside_hi)
            .map_or(inside_hi - inside_lo, |s| s.chars().count());
        let beyond = hi - inside_hi.max(lo);
        let steps = isize::try_from(inside.saturating_add(beyond)).unwrap_or(isize::MAX);
        sign * steps
    }

    fn precedes(&self, a: CharPosition, b: CharPosition) -> bool {
        a.0 < b.0
    }

    fn element_at(&self, position: CharPosition) -> Option<char> {
        self.get(position.0..)?.chars().next()
    }

    fn count(&self) -> usize {
        self.chars().count()
    }
}

impl Indexable for String {
    type Element = char;
    type Position = CharPosition;

    fn start_position(&self) -> CharPosition {
        self.as_str().start_position()
    }

    fn end_position(&self) -> CharPosition {
        self.as_str().end_position()
    }

    fn successor(&self, position: CharPosition) -> CharPosition {
        self.as_str().successor(position)
    }

    fn distance(&self, from: CharPosition, to: CharPosition) -> isize {
        self.as_str().distance(from, to)
    }

    fn precedes(&self, a: CharPosition, b: CharPosition) -> bool {
        self.as_str().precedes(a, b)
    }

    fn element_at(&self, position: CharPosition) -> Option<char> {
        self.as_str().element_at(position)
    }

    fn count(&self) -> usize {
        self.as_str().count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slice_positions() {
        let items = [10, 20, 30];
        let positions: Vec<usize> = items[..].positions().collect();
        assert_eq!(positions, vec![0, 1, 2]);
        assert_eq!(items[..].element_at(3), None);
    }

    #[test]
    fn test_empty_collection_has_no_positions() {
        let empty: Vec<i32> = Vec::new();
        assert_eq!(empty.positions().count(), 0);
        assert_eq!(Indexable::count(&empty), 0);
    }

    #[test]
    fn test_slice_distance_is_signed() {
        let items = vec![1, 2, 3];
        assert_eq!(items.distance(0, 3), 3);
        assert_eq!(items.distance(3, 0), -3);
        assert_eq!(items.distance(2, 2), 0);
        assert_eq!(items.distance(1, 10), 9);
    }

    #[test]
    fn test_str_positions_follow_char_boundaries() {
        let text = "aé€b";
        let positions: Vec<usize> = text.positions().map(CharPosition::byte_offset).collect();
        assert_eq!(positions, vec![0, 1, 3, 6]);

        let chars: Vec<char> = text
            .positions()
            .filter_map(|p| text.element_at(p))
            .collect();
        assert_eq!(chars, vec!['a', 'é', '€', 'b']);
    }

    #[test]
    fn test_str_distance_counts_chars() {
        let text = "aé€b";
        assert_eq!(text.distance(text.start_position(), text.end_position()), 4);
        assert_eq!(text.distance(CharPosition::new(6), CharPosition::new(1)), -2);
        assert_eq!(Indexable::count(text), 4);
    }

    #[test]
    fn test_str_distance_beyond_end() {
        let text = "abc";
        assert_eq!(text.distance(CharPosition::new(1), CharPosition::new(5)), 4);
        assert_eq!(text.distance(CharPosition::new(5), CharPosition::new(0)), -5);
    }

    #[test]
    fn test_at_char() {
        let text = "héllo";
        assert_eq!(CharPosition::at_char(text, 0), CharPosition::new(0));
        assert_eq!(CharPosition::at_char(text, 2), CharPosition::new(3));
        assert_eq!(CharPosition::at_char(text, 5), text.end_position());
        assert_eq!(CharPosition::at_char(text, 7), CharPosition::new(text.len() + 2));
    }

    #[test]
    fn test_distance_saturates() {
        let items = vec![1, 2, 3];
        assert_eq!(items.distance(0, usize::MAX), isize::MAX);
        assert_eq!(items.distance(usize::MAX, 0), isize::MIN);
        assert!(items.precedes(items.end_position(), usize::MAX));

        let text = "abc";
        let far = CharPosition::new(usize::MAX);
        assert_eq!(text.distance(text.start_position(), far), isize::MAX);
        assert_eq!(text.distance(far, text.start_position()), -isize::MAX);
        assert!(text.precedes(text.end_position(), far));
    }

    #[test]
    fn test_precedes_agrees_with_distance() {
        let text = "aé€b";
        let offsets = [0, 1, 3, 6, 7, 9];
        for &a in &offsets {
            for &b in &offsets {
                let (a, b) = (CharPosition::new(a), CharPosition::new(b));
                assert_eq!(text.precedes(a, b), text.distance(a, b) > 0);
            }
        }
    }

    #[test]
    fn test_at_char_far_past_end() {
        assert_eq!(CharPosition::at_char("é", usize::MAX), CharPosition::new(usize::MAX));
        assert_eq!(CharPosition::at_char("", usize::MAX), CharPosition::new(usize::MAX));
    }

    #[test]
    fn test_vec_deque_positions() {
        let mut deque = VecDeque::new();
        deque.push_back('x');
        deque.push_front('w');
        let elements: Vec<char> = deque
            .positions()
            .filter_map(|p| deque.element_at(p))
            .collect();
        assert_eq!(elements, vec!['w', 'x']);
    }
}
