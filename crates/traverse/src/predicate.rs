//! Boolean reductions over sequences
//!
//! `any`/`all` stop at the first deciding element, so the predicate is
//! called at most once per element and possibly not at all for the
//! remainder. Results never depend on how often it is called.

/// True if `pred` holds for at least one element. False on empty input.
pub fn any<I>(sequence: I, mut pred: impl FnMut(&I::Item) -> bool) -> bool
where
    I: IntoIterator,
{
    sequence.into_iter().any(|elem| pred(&elem))
}

/// True if `pred` holds for every element. True on empty input.
pub fn all<I>(sequence: I, mut pred: impl FnMut(&I::Item) -> bool) -> bool
where
    I: IntoIterator,
{
    sequence.into_iter().all(|elem| pred(&elem))
}

/// Conjunction of a sequence of booleans (`true` when empty).
pub fn and<I>(sequence: I) -> bool
where
    I: IntoIterator<Item = bool>,
{
    all(sequence, |&b| b)
}

/// Disjunction of a sequence of booleans (`false` when empty).
pub fn or<I>(sequence: I) -> bool
where
    I: IntoIterator<Item = bool>,
{
    any(sequence, |&b| b)
}

/// True if some element is present.
pub fn exists_any<I, T>(sequence: I) -> bool
where
    I: IntoIterator<Item = Option<T>>,
{
    any(sequence, Option::is_some)
}

/// True if every element is present (vacuously true when empty).
pub fn exists_all<I, T>(sequence: I) -> bool
where
    I: IntoIterator<Item = Option<T>>,
{
    all(sequence, Option::is_some)
}
