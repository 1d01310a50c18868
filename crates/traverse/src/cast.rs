//! All-or-nothing type narrowing
//!
//! `cast` projects every element of a sequence through [`Narrow`]. Either
//! every element narrows and the projected `Vec` is returned, or the whole
//! operation yields nothing. Evaluation stops at the first failure.
//!
//! ```
//! use traverse::{Value, cast};
//!
//! let ints = vec![Value::Int(1), Value::Int(2)];
//! assert_eq!(cast::<_, i64>(ints), Some(vec![1, 2]));
//!
//! let mixed = vec![Value::Int(1), Value::from("two")];
//! assert_eq!(cast::<_, i64>(mixed), None);
//! ```

use std::any::type_name;
use tracing::debug;
use traverse_core::{CastError, Narrow};

/// Narrow every element to `U`, or return `None` if any element fails.
pub fn cast<I, U>(sequence: I) -> Option<Vec<U>>
where
    I: IntoIterator,
    I::Item: Narrow<U>,
{
    try_cast(sequence).ok()
}

/// Like [`cast`], but reports which element failed and what it held.
pub fn try_cast<I, U>(sequence: I) -> Result<Vec<U>, CastError>
where
    I: IntoIterator,
    I::Item: Narrow<U>,
{
    let iter = sequence.into_iter();
    let mut narrowed = Vec::with_capacity(iter.size_hint().0);
    for (index, elem) in iter.enumerate() {
        let found = elem.kind_name();
        match elem.narrow() {
            Some(value) => narrowed.push(value),
            None => {
                let expected = type_name::<U>();
                debug!(
                    "cast: element {} is {}, cannot narrow to {}",
                    index, found, expected
                );
                return Err(CastError::Mismatch {
                    index,
                    expected,
                    found,
                });
            }
        }
    }
    Ok(narrowed)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::any::Any;
    use traverse_core::{Symbol, Value};

    #[test]
    fn test_cast_uniform_values() {
        let strs = vec![Value::from("aaa"), Value::from(""), Value::from("ag")];
        let result: Option<Vec<String>> = cast(strs);
        assert_eq!(
            result,
            Some(vec!["aaa".to_string(), String::new(), "ag".to_string()])
        );
    }

    #[test]
    fn test_cast_mixed_values_is_absent() {
        let objs = vec![Value::from("aaa"), Value::Int(123), Value::from("ag")];
        let result: Option<Vec<String>> = cast(objs);
        assert_eq!(result, None);
    }

    #[test]
    fn test_cast_empty_succeeds() {
        let result: Option<Vec<bool>> = cast(Vec::<Value>::new());
        assert_eq!(result, Some(vec![]));
    }

    #[test]
    fn test_cast_borrowed_values() {
        let values = [Value::from("x"), Value::from("y")];
        let result: Option<Vec<&str>> = cast(&values);
        assert_eq!(result, Some(vec!["x", "y"]));
    }

    #[test]
    fn test_cast_stops_at_first_failure() {
        let mut seen = 0;
        let values = [Value::Int(1), Value::Bool(true), Value::Int(3)]
            .into_iter()
            .inspect(|_| seen += 1);
        let result: Option<Vec<i64>> = cast(values);
        assert_eq!(result, None);
        assert_eq!(seen, 2);
    }

    #[test]
    fn test_cast_boxed_any() {
        let objs: Vec<Box<dyn Any>> = vec![Box::new(1u32), Box::new(2u32), Box::new(3u32)];
        let result: Option<Vec<u32>> = cast(objs);
        assert_eq!(result, Some(vec![1, 2, 3]));

        let objs: Vec<Box<dyn Any>> = vec![Box::new(1u32), Box::new("two"), Box::new(3u32)];
        let result: Option<Vec<u32>> = cast(objs);
        assert_eq!(result, None);
    }

    #[test]
    fn test_try_cast_reports_mismatch() {
        let values = vec![
            Value::Symbol(Symbol("a".into())),
            Value::Symbol(Symbol("b".into())),
            Value::Float(1.0),
        ];
        let err = try_cast::<_, Symbol>(values).unwrap_err();
        assert_eq!(err.index(), 2);
        assert_eq!(
            err,
            CastError::Mismatch {
                index: 2,
                expected: type_name::<Symbol>(),
                found: "Float",
            }
        );
    }
}
