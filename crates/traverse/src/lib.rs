//! Traverse: functional combinators over sequences and indexable collections
//!
//! Every operation is a free function taking the subject sequence or
//! collection first, then the predicate, relation or position, then any
//! extra configuration. Inputs are never mutated; results are new `Vec`s
//! (or an `Option` where the answer may be absent).
//!
//! Two input abstractions are used:
//! - **Sequence**: any `IntoIterator`, consumed once from first to last
//! - **Collection**: any [`Indexable`], addressed by opaque positions and
//!   traversed as often as needed
//!
//! # Modules
//!
//! - `predicate`: `any`, `all`, `and`, `or`, `exists_any`, `exists_all`
//! - `slice`: `find_index`, `take`, `drop`, `split_at`, `drop_first`, `drop_last`
//! - `partition`: `take_while`, `drop_while`, `span`, `group_by`, `group`
//! - `transform`: `flat_map`, `concat`, `intersperse`, `scan`, `subsequences`,
//!   `distinct`, `strip_prefix`, `tail`, `rtail`, `tails`, `rtails`, `sequence_eq`
//! - `fold`: `sum`, `product`, `checked_sum`, `checked_product`
//! - `cast`: `cast`, `try_cast`
//!
//! # Example
//!
//! ```
//! use traverse::{group, scan, span, strip_prefix};
//!
//! assert_eq!(group([1, 1, 2, 3, 3]), vec![vec![1, 1], vec![2], vec![3, 3]]);
//! assert_eq!(scan([4, 2, 4], 64, |x, y| x / y), vec![64, 16, 8, 2]);
//! assert_eq!(span(&vec![1, 2, 3, 1], |&x| x < 3), (vec![1, 2], vec![3, 1]));
//! assert_eq!(
//!     strip_prefix("foobar".chars(), "foo".chars()),
//!     Some(vec!['b', 'a', 'r'])
//! );
//! ```

pub mod cast;
pub mod fold;
pub mod partition;
pub mod predicate;
pub mod slice;
pub mod transform;

pub use cast::{cast, try_cast};
pub use fold::{checked_product, checked_sum, product, sum};
pub use partition::{
    drop_while, drop_while_seq, group, group_by, span, span_seq, take_while, take_while_seq,
};
pub use predicate::{all, and, any, exists_all, exists_any, or};
pub use slice::{drop, drop_first, drop_last, find_index, split_at, take};
pub use transform::{
    concat, distinct, distinct_hashed, flat_map, intersperse, rtail, rtails, scan, sequence_eq,
    strip_prefix, subsequences, tail, tails,
};

// Core types
pub use traverse_core::{
    Arithmetic, CastError, CharPosition, CheckedArithmetic, Indexable, Narrow, Positions, Symbol,
    Value, VariantData,
};
