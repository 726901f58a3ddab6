//! Declared parameter lists and the arity derived from them.
//!
//! A [`Signature`] records, for each declared parameter, whether it is
//! required, optional, or a rest parameter collecting any remaining values.
//! The arity used for currying is the number of required parameters that
//! precede the first optional or rest parameter:
//!
//! ```text
//! (_, _, _)        arity 3
//! (_, _?, _)       arity 1
//! (_, _, ..._)     arity 2
//! (..._)           arity 0   // fully variadic: invoked on the first call
//! ```

use std::fmt;

use crate::error::ArityError;

/// The kind of a single declared parameter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Parameter {
    /// A parameter that must be supplied.
    Required,
    /// A parameter with a default value.
    Optional,
    /// A parameter collecting every remaining argument.
    Rest,
}

/// A validated, declared parameter list.
///
/// # Examples
///
/// ```rust
/// use curry_engine::engine::{Parameter, Signature};
///
/// let signature = Signature::new([
///     Parameter::Required,
///     Parameter::Required,
///     Parameter::Rest,
/// ])
/// .unwrap();
///
/// assert_eq!(signature.arity(), 2);
/// assert!(signature.is_variadic());
/// assert_eq!(signature.to_string(), "(_, _, ..._)");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "Vec<Parameter>", into = "Vec<Parameter>"))]
pub struct Signature {
    parameters: Vec<Parameter>,
    arity: usize,
}

impl Signature {
    /// Validates a parameter list.
    ///
    /// # Errors
    ///
    /// - [`ArityError::MultipleRest`] if more than one rest parameter is declared.
    /// - [`ArityError::RestNotLast`] if a rest parameter is not in last position.
    pub fn new<I>(parameters: I) -> Result<Self, ArityError>
    where
        I: IntoIterator<Item = Parameter>,
    {
        let parameters: Vec<Parameter> = parameters.into_iter().collect();

        let rest_count = parameters
            .iter()
            .filter(|parameter| **parameter == Parameter::Rest)
            .count();
        if rest_count > 1 {
            return Err(ArityError::MultipleRest { count: rest_count });
        }

        if let Some(position) = parameters
            .iter()
            .position(|parameter| *parameter == Parameter::Rest)
            && position + 1 != parameters.len()
        {
            return Err(ArityError::RestNotLast { position });
        }

        let arity = parameters
            .iter()
            .take_while(|parameter| **parameter == Parameter::Required)
            .count();

        Ok(Self { parameters, arity })
    }

    /// Creates a signature of `arity` required parameters.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use curry_engine::engine::Signature;
    ///
    /// assert_eq!(Signature::fixed(3).arity(), 3);
    /// ```
    #[must_use]
    pub fn fixed(arity: usize) -> Self {
        Self {
            parameters: vec![Parameter::Required; arity],
            arity,
        }
    }

    /// Creates a signature of `fixed` required parameters followed by a rest
    /// parameter.
    #[must_use]
    pub fn variadic(fixed: usize) -> Self {
        let mut parameters = vec![Parameter::Required; fixed];
        parameters.push(Parameter::Rest);
        Self {
            parameters,
            arity: fixed,
        }
    }

    /// Returns the number of arguments a curried function waits for.
    #[inline]
    #[must_use]
    pub const fn arity(&self) -> usize {
        self.arity
    }

    /// Returns `true` if the signature ends with a rest parameter.
    #[must_use]
    pub fn is_variadic(&self) -> bool {
        self.parameters.last() == Some(&Parameter::Rest)
    }

    /// Returns the declared parameters.
    #[must_use]
    pub fn parameters(&self) -> &[Parameter] {
        &self.parameters
    }
}

impl TryFrom<Vec<Parameter>> for Signature {
    type Error = ArityError;

    fn try_from(parameters: Vec<Parameter>) -> Result<Self, Self::Error> {
        Self::new(parameters)
    }
}

impl From<Signature> for Vec<Parameter> {
    fn from(signature: Signature) -> Self {
        signature.parameters
    }
}

impl fmt::Display for Parameter {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Required => write!(formatter, "_"),
            Self::Optional => write!(formatter, "_?"),
            Self::Rest => write!(formatter, "..._"),
        }
    }
}

impl fmt::Display for Signature {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "(")?;
        for (index, parameter) in self.parameters.iter().enumerate() {
            if index > 0 {
                write!(formatter, ", ")?;
            }
            write!(formatter, "{parameter}")?;
        }
        write!(formatter, ")")
    }
}
