//! Tagged result of a soft-failing query.
//!
//! Every fallible backend operation returns an [`Outcome`] instead of a
//! `Result`: a failure is recovered at its origin into `Degraded` carrying
//! the benign default, so the "callers never observe an error" contract is
//! enforced by the signature. The cost is that `Degraded(0)` and a truly
//! empty collection look identical to the caller; the tag exists so tests
//! and any future instrumentation can still tell them apart.

/// Result of a query that can only degrade, never fail.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome<T> {
    /// The backend answered; `T` is its answer.
    Success(T),
    /// The query failed (not-yet-connected, network, or backend error,
    /// already logged); `T` is the benign default the caller receives.
    Degraded(T),
}

impl<T> Outcome<T> {
    /// The carried value, regardless of tag. This is what request handlers
    /// consume.
    pub fn into_value(self) -> T {
        match self {
            Outcome::Success(value) | Outcome::Degraded(value) => value,
        }
    }

    pub fn is_degraded(&self) -> bool {
        matches!(self, Outcome::Degraded(_))
    }
}

impl<T: Default> Outcome<T> {
    /// Recover an error into a degraded default, logging having been done
    /// by the caller.
    pub fn degraded_default() -> Self {
        Outcome::Degraded(T::default())
    }
}
