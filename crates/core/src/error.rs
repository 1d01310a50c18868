//! Cast error type.

/// Error returned by `try_cast` when an element cannot be narrowed.
///
/// `cast` reports the same failure as plain absence; this type keeps the
/// position and kinds involved for callers that want to explain it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CastError {
    /// The element at `index` held `found` where `expected` was required
    Mismatch {
        index: usize,
        expected: &'static str,
        found: &'static str,
    },
}

impl CastError {
    /// Index of the first element that failed to narrow.
    pub fn index(&self) -> usize {
        match self {
            CastError::Mismatch { index, .. } => *index,
        }
    }
}

impl std::fmt::Display for CastError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CastError::Mismatch {
                index,
                expected,
                found,
            } => write!(
                f,
                "cast: element {} is {}, expected {}",
                index, found, expected
            ),
        }
    }
}

impl std::error::Error for CastError {}
