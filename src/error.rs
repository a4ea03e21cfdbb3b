//! Error types for combinator construction.
//!
//! Wrapped functions are never caught or translated: panics unwind through
//! the combinators untouched and `Result` values are passed along as plain
//! results. The only errors this crate defines are rejected arguments at
//! construction time.

/// Represents an argument rejected when building a combinator.
///
/// # Examples
///
/// ```rust
/// use combinars::CombinatorError;
///
/// let error = CombinatorError::ZeroCount { combinator: "every_count" };
/// assert_eq!(
///     format!("{error}"),
///     "every_count: count must be greater than zero"
/// );
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CombinatorError {
    /// A counting combinator was given a count of zero, which has no
    /// meaningful period.
    ZeroCount {
        /// The name of the combinator that rejected the count.
        combinator: &'static str,
    },
}

impl std::fmt::Display for CombinatorError {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::ZeroCount { combinator } => {
                write!(formatter, "{combinator}: count must be greater than zero")
            }
        }
    }
}

impl std::error::Error for CombinatorError {}
