//! Arithmetic identities for numeric folds
//!
//! `sum` and `product` seed their fold with the element type's identity.
//! Integers and floating-point numbers are instantiated separately because
//! their identities are different literals (`0`/`1` versus `0.0`/`1.0`)
//! and only integers support checked (overflow-aware) folds.

use num_traits::{CheckedAdd, CheckedMul};
use std::ops::{Add, Mul};

/// Element types that `sum` and `product` can fold.
pub trait Arithmetic: Copy + Add<Output = Self> + Mul<Output = Self> {
    /// Identity of `+`
    const ADDITIVE_IDENTITY: Self;

    /// Identity of `*`
    const MULTIPLICATIVE_IDENTITY: Self;
}

macro_rules! integer_arithmetic {
    ($($t:ty)*) => {
        $(
            impl Arithmetic for $t {
                const ADDITIVE_IDENTITY: Self = 0;
                const MULTIPLICATIVE_IDENTITY: Self = 1;
            }
        )*
    };
}

macro_rules! floating_arithmetic {
    ($($t:ty)*) => {
        $(
            impl Arithmetic for $t {
                const ADDITIVE_IDENTITY: Self = 0.0;
                const MULTIPLICATIVE_IDENTITY: Self = 1.0;
            }
        )*
    };
}

integer_arithmetic! { i8 i16 i32 i64 i128 isize u8 u16 u32 u64 u128 usize }
floating_arithmetic! { f32 f64 }

/// Integer element types whose folds can detect overflow.
///
/// Floating-point types are excluded: `num-traits` gives them no checked
/// operations, and overflow there saturates to infinity instead.
pub trait CheckedArithmetic: Arithmetic + CheckedAdd + CheckedMul {}

impl<T: Arithmetic + CheckedAdd + CheckedMul> CheckedArithmetic for T {}
