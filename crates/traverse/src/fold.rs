//! Numeric folds
//!
//! `sum` and `product` are left folds seeded with the element type's
//! identity from [`Arithmetic`]: `0`/`1` for integers, `0.0`/`1.0` for
//! floating point. Plain folds follow the element type's own overflow
//! behaviour; `checked_sum`/`checked_product` report integer overflow as
//! absence instead.

use num_traits::{CheckedAdd, CheckedMul};
use tracing::debug;
use traverse_core::{Arithmetic, CheckedArithmetic};

/// Sum of all elements (the additive identity when empty).
pub fn sum<I>(sequence: I) -> I::Item
where
    I: IntoIterator,
    I::Item: Arithmetic,
{
    sequence
        .into_iter()
        .fold(<I::Item as Arithmetic>::ADDITIVE_IDENTITY, |acc, elem| acc + elem)
}

/// Product of all elements (the multiplicative identity when empty).
pub fn product<I>(sequence: I) -> I::Item
where
    I: IntoIterator,
    I::Item: Arithmetic,
{
    sequence
        .into_iter()
        .fold(<I::Item as Arithmetic>::MULTIPLICATIVE_IDENTITY, |acc, elem| acc * elem)
}

/// Integer sum, or `None` if an intermediate result overflows.
pub fn checked_sum<I>(sequence: I) -> Option<I::Item>
where
    I: IntoIterator,
    I::Item: CheckedArithmetic,
{
    let mut acc = <I::Item as Arithmetic>::ADDITIVE_IDENTITY;
    for (index, elem) in sequence.into_iter().enumerate() {
        match CheckedAdd::checked_add(&acc, &elem) {
            Some(next) => acc = next,
            None => {
                debug!("checked_sum: overflow at element {}", index);
                return None;
            }
        }
    }
    Some(acc)
}

/// Integer product, or `None` if an intermediate result overflows.
pub fn checked_product<I>(sequence: I) -> Option<I::Item>
where
    I: IntoIterator,
    I::Item: CheckedArithmetic,
{
    let mut acc = <I::Item as Arithmetic>::MULTIPLICATIVE_IDENTITY;
    for (index, elem) in sequence.into_iter().enumerate() {
        match CheckedMul::checked_mul(&acc, &elem) {
            Some(next) => acc = next,
            None => {
                debug!("checked_product: overflow at element {}", index);
                return None;
            }
        }
    }
    Some(acc)
}
