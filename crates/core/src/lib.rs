//! Traverse Core: foundation types for the traverse combinators
//!
//! This crate holds the types the combinators are generic over, kept apart
//! so they can be implemented for new collections without pulling in the
//! combinators themselves.
//!
//! # Modules
//!
//! - `position`: `Indexable` collections addressed by opaque positions
//! - `value`: dynamic `Value` and the `Narrow` checked projection
//! - `arithmetic`: additive/multiplicative identities for numeric folds
//! - `error`: `CastError`

pub mod arithmetic;
pub mod error;
pub mod position;
pub mod value;

// Re-export key types
pub use arithmetic::{Arithmetic, CheckedArithmetic};
pub use error::CastError;
pub use position::{CharPosition, Indexable, Positions};
pub use value::{Narrow, Symbol, Value, VariantData};
