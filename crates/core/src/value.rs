//! Dynamic values and checked narrowing
//!
//! `Value` is the tagged union used when the element type of a sequence is
//! only known at runtime. [`Narrow`] is the capability-checked projection
//! from such a value to a concrete type: it either yields the payload or
//! reports that the value holds something else. The same trait covers
//! `Box<dyn Any>` and `&dyn Any`, which narrow by downcast.

use std::any::Any;
use std::sync::Arc;

/// Variant (sum type with tagged fields)
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct VariantData {
    pub tag: String,
    pub fields: Box<[Value]>,
}

impl VariantData {
    pub fn new(tag: impl Into<String>, fields: Vec<Value>) -> Self {
        Self {
            tag: tag.into(),
            fields: fields.into_boxed_slice(),
        }
    }
}

/// Symbol payload, kept distinct from `String` so the two narrow separately.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Symbol(pub String);

/// A dynamically typed value
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Value {
    /// Integer value
    Int(i64),

    /// Floating-point value (IEEE 754 double precision)
    Float(f64),

    /// Boolean value
    Bool(bool),

    /// Owned string
    String(String),

    /// Symbol (identifier, e.g. a variant tag)
    Symbol(Symbol),

    /// Variant (sum type with tagged fields)
    /// Uses Arc for O(1) cloning
    Variant(Arc<VariantData>),
}

impl Value {
    /// Name of the kind currently held, as used in cast diagnostics.
    pub fn kind_name(&self) -> &'static str {
        match self {
            Value::Int(_) => "Int",
            Value::Float(_) => "Float",
            Value::Bool(_) => "Bool",
            Value::String(_) => "String",
            Value::Symbol(_) => "Symbol",
            Value::Variant(_) => "Variant",
        }
    }

    /// Build a variant value from a tag and its fields.
    pub fn variant(tag: impl Into<String>, fields: Vec<Value>) -> Self {
        Value::Variant(Arc::new(VariantData::new(tag, fields)))
    }
}

impl From<i64> for Value {
    fn from(n: i64) -> Self {
        Value::Int(n)
    }
}

impl From<f64> for Value {
    fn from(x: f64) -> Self {
        Value::Float(x)
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::String(s)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::String(s.to_string())
    }
}

impl From<Symbol> for Value {
    fn from(s: Symbol) -> Self {
        Value::Symbol(s)
    }
}

/// Checked projection to `T`.
///
/// `narrow` returns `None` when the value does not hold a `T`; it never
/// converts between kinds (an `Int` does not narrow to `f64`).
pub trait Narrow<T>: Sized {
    fn narrow(self) -> Option<T>;

    /// Name of the runtime kind held by `self`, for diagnostics.
    fn kind_name(&self) -> &'static str;
}

macro_rules! narrow_owned {
    ($($target:ty => $variant:ident),* $(,)?) => {
        $(
            impl Narrow<$target> for Value {
                fn narrow(self) -> Option<$target> {
                    match self {
                        Value::$variant(payload) => Some(payload),
                        _ => None,
                    }
                }

                fn kind_name(&self) -> &'static str {
                    Value::kind_name(self)
                }
            }
        )*
    };
}

narrow_owned! {
    i64 => Int,
    f64 => Float,
    bool => Bool,
    String => String,
    Symbol => Symbol,
    Arc<VariantData> => Variant,
}

impl Narrow<Value> for Value {
    fn narrow(self) -> Option<Value> {
        Some(self)
    }

    fn kind_name(&self) -> &'static str {
        Value::kind_name(self)
    }
}

macro_rules! narrow_copied {
    ($($target:ty => $variant:ident),* $(,)?) => {
        $(
            impl Narrow<$target> for &Value {
                fn narrow(self) -> Option<$target> {
                    match self {
                        Value::$variant(payload) => Some(*payload),
                        _ => None,
                    }
                }

                fn kind_name(&self) -> &'static str {
                    Value::kind_name(self)
                }
            }
        )*
    };
}

narrow_copied! {
    i64 => Int,
    f64 => Float,
    bool => Bool,
}

impl<'a> Narrow<&'a str> for &'a Value {
    fn narrow(self) -> Option<&'a str> {
        match self {
            Value::String(s) => Some(s.as_str()),
            _ => None,
        }
    }

    fn kind_name(&self) -> &'static str {
        Value::kind_name(self)
    }
}

impl<'a> Narrow<&'a VariantData> for &'a Value {
    fn narrow(self) -> Option<&'a VariantData> {
        match self {
            Value::Variant(v) => Some(v.as_ref()),
            _ => None,
        }
    }

    fn kind_name(&self) -> &'static str {
        Value::kind_name(self)
    }
}

impl<T: Any> Narrow<T> for Box<dyn Any> {
    fn narrow(self) -> Option<T> {
        self.downcast::<T>().ok().map(|boxed| *boxed)
    }

    fn kind_name(&self) -> &'static str {
        "dyn Any"
    }
}

impl<T: Any> Narrow<T> for Box<dyn Any + Send> {
    fn narrow(self) -> Option<T> {
        self.downcast::<T>().ok().map(|boxed| *boxed)
    }

    fn kind_name(&self) -> &'static str {
        "dyn Any + Send"
    }
}

impl<'a, T: Any> Narrow<&'a T> for &'a dyn Any {
    fn narrow(self) -> Option<&'a T> {
        self.downcast_ref::<T>()
    }

    fn kind_name(&self) -> &'static str {
        "dyn Any"
    }
}
