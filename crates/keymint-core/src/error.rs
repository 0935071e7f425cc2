//! Shared error types.

use thiserror::Error;

/// Common result type.
pub type Result<T> = std::result::Result<T, Error>;

/// Error raised by a caller-supplied uniqueness predicate.
///
/// Predicates typically wrap datastore lookups; whatever they raise is
/// carried through unchanged as the source of [`Error::Predicate`].
pub type PredicateError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Top-level error type shared by the keymint crates.
#[derive(Debug, Error)]
pub enum Error {
    /// Invalid construction or call parameters: a radix outside the
    /// alphabet, duplicate alphabet symbols, an empty sampling range.
    /// Never recovered internally.
    #[error("configuration error: {0}")]
    Configuration(String),

    /// Invalid value passed to a conversion: a symbol outside the
    /// configured alphabet, a value that does not fit the target type,
    /// a malformed address.
    #[error("invalid input: {0}")]
    Input(String),

    /// The secure random source failed. Fatal for the operation that
    /// needed the bytes; never retried internally.
    #[error("entropy source unavailable: {0}")]
    EntropyUnavailable(String),

    /// A caller-supplied uniqueness predicate failed. The retry loop is
    /// aborted and the predicate's own error is preserved as the source.
    #[error("uniqueness predicate failed")]
    Predicate(#[source] PredicateError),
}
