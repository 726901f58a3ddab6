//! Error types for the curry engine.
//!
//! The engine itself never fails while accumulating arguments: excess
//! arguments are dropped and a target's own failures are returned to the
//! caller untouched. Errors only arise when
//!
//! - a declared parameter list has no well-defined fixed prefix
//!   ([`ArityError`]), or
//! - the [`Step`](crate::engine::Step) helpers are asked for something the
//!   current branch cannot provide ([`CurryError`]).

/// Represents an error when a [`Signature`](crate::engine::Signature) cannot
/// determine the arity of a target function.
///
/// # Examples
///
/// ```rust
/// use curry_engine::engine::{Parameter, Signature};
/// use curry_engine::error::ArityError;
///
/// let error = Signature::new([Parameter::Rest, Parameter::Required]).unwrap_err();
/// assert_eq!(error, ArityError::RestNotLast { position: 0 });
/// assert_eq!(
///     format!("{error}"),
///     "rest parameter at position 0 must be the last parameter"
/// );
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArityError {
    /// A rest parameter is followed by further parameters.
    RestNotLast {
        /// Zero-based position of the offending rest parameter.
        position: usize,
    },
    /// More than one rest parameter was declared.
    MultipleRest {
        /// Number of rest parameters found.
        count: usize,
    },
}

impl std::fmt::Display for ArityError {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::RestNotLast { position } => write!(
                formatter,
                "rest parameter at position {position} must be the last parameter"
            ),
            Self::MultipleRest { count } => write!(
                formatter,
                "a signature may declare at most one rest parameter, found {count}"
            ),
        }
    }
}

impl std::error::Error for ArityError {}

/// Represents errors that can occur when driving a curry session.
///
/// # Examples
///
/// ```rust
/// use curry_engine::engine::curry;
/// use curry_engine::error::CurryError;
///
/// let add = curry(2, |arguments: Vec<i32>| arguments[0] + arguments[1]);
/// let error = add.apply([1]).into_complete().unwrap_err();
/// assert_eq!(error, CurryError::Incomplete { supplied: 1, arity: 2 });
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CurryError {
    /// The declared signature is invalid.
    Arity(ArityError),
    /// A result was requested from a branch that is still collecting arguments.
    Incomplete {
        /// Number of arguments accumulated so far.
        supplied: usize,
        /// Number of arguments the target function expects.
        arity: usize,
    },
    /// Arguments were applied to a branch whose target was already invoked.
    AlreadyInvoked,
}

impl std::fmt::Display for CurryError {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Arity(error) => write!(formatter, "invalid signature: {error}"),
            Self::Incomplete { supplied, arity } => write!(
                formatter,
                "curried function is incomplete: {supplied} of {arity} arguments supplied"
            ),
            Self::AlreadyInvoked => {
                write!(formatter, "target function has already been invoked")
            }
        }
    }
}

impl std::error::Error for CurryError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Arity(error) => Some(error),
            Self::Incomplete { .. } | Self::AlreadyInvoked => None,
        }
    }
}

impl From<ArityError> for CurryError {
    fn from(error: ArityError) -> Self {
        Self::Arity(error)
    }
}
