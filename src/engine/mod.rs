//! The curry engine.
//!
//! This module turns an n-ary target function into a [`Curried`] value that
//! accumulates argument batches until the target's arity is reached.
//!
//! # Overview
//!
//! - [`curry`]: curry a function of `Vec<A>` with an explicit arity
//! - [`curry_signature`]: take the arity from a declared [`Signature`]
//! - [`curry_fn`]: take the arity from the closure type itself
//! - [`curry_with_context`]: curry a function that also receives an
//!   invocation context
//!
//! Every call to [`Curried::apply`] returns a [`Step`]: either the target's
//! result, or a new [`Curried`] closed over the arguments collected so far.
//!
//! # Examples
//!
//! ```rust
//! use curry_engine::engine::curry_fn;
//!
//! let product = curry_fn(|a: i32, b: i32, c: i32| a * b * c);
//!
//! // (2)(3)(4)
//! let result = product
//!     .apply([2])
//!     .try_apply([3])
//!     .and_then(|step| step.try_apply([4]))
//!     .and_then(|step| step.into_complete());
//! assert_eq!(result, Ok(24));
//!
//! // (2, 3)(4)
//! let with_two = product.apply([2, 3]).partial().unwrap();
//! assert_eq!(with_two.apply([4]).complete(), Some(24));
//!
//! // (2, 3, 4)
//! assert_eq!(product.apply([2, 3, 4]).complete(), Some(24));
//! ```
//!
//! # State Machine
//!
//! ```text
//! Collecting(k) --j arguments--> Collecting(k + j)   if k + j < N
//! Collecting(k) --j arguments--> Invoked             if k + j >= N
//! ```
//!
//! `Invoked` is terminal for its branch. Arguments beyond `N` are dropped,
//! unless the target was curried from a variadic [`Signature`]: its rest
//! parameter receives every argument supplied up to and including the
//! completing call.
//!
//! # Branch Independence
//!
//! A [`Curried`] is immutable. Applying a batch never changes the receiver, so
//! the same intermediate value can be applied to any number of different
//! batches, sequentially or from several threads at once.

mod arguments;
mod arity;
mod function;

pub use arguments::{Arguments, ArgumentsIterator};
pub use arity::{Parameter, Signature};
pub use function::Function;

use std::fmt;
use std::sync::Arc;

use crate::error::CurryError;

/// The shared target of a curry session.
type Target<A, R, C> = dyn Fn(&C, Vec<A>) -> R + Send + Sync;

/// A function value accumulating arguments toward its target's arity.
///
/// `Curried` is cheap to clone: the target and the accumulated arguments are
/// shared behind reference counts. It is `Send + Sync` whenever `A` is.
///
/// # Type Parameters
///
/// * `A` - The argument type
/// * `R` - The target's return type
/// * `C` - The invocation context forwarded to the target (`()` if unused)
pub struct Curried<A, R, C = ()> {
    target: Arc<Target<A, R, C>>,
    arity: usize,
    variadic: bool,
    arguments: Arguments<A>,
}

/// The outcome of applying a batch of arguments to a [`Curried`].
#[derive(Clone)]
pub enum Step<A, R, C = ()> {
    /// The arity was reached and the target returned this value.
    Complete(R),
    /// More arguments are required.
    Partial(Curried<A, R, C>),
}

/// Curries a target taking its arguments as a `Vec` of exactly `arity` values.
///
/// # Examples
///
/// ```rust
/// use curry_engine::engine::curry;
///
/// let add = curry(2, |arguments: Vec<i32>| arguments.iter().sum::<i32>());
///
/// let add_one = add.apply([1]).partial().unwrap();
/// assert_eq!(add_one.apply([2]).complete(), Some(3));
///
/// // Trailing arguments beyond the arity are ignored.
/// assert_eq!(add.apply([1, 2, 99]).complete(), Some(3));
/// ```
pub fn curry<A, R, F>(arity: usize, target: F) -> Curried<A, R>
where
    F: Fn(Vec<A>) -> R + Send + Sync + 'static,
{
    curry_with_context(arity, move |_: &(), arguments| target(arguments))
}

/// Curries a target whose arity is described by `signature`.
///
/// # Examples
///
/// ```rust
/// use curry_engine::engine::{curry_signature, Signature};
///
/// // A fully variadic target is invoked on the first call with everything
/// // that call supplied.
/// let join = curry_signature(&Signature::variadic(0), |words: Vec<&str>| words.join(" "));
/// assert_eq!(join.apply(["hello", "world"]).complete(), Some("hello world".to_string()));
///
/// // The rest parameter collects every argument past the fixed prefix.
/// let greet = curry_signature(&Signature::variadic(2), |words: Vec<&str>| words.join(" "));
/// let pending = greet.apply(["hello"]).partial().unwrap();
/// assert_eq!(
///     pending.apply(["world", "again"]).complete(),
///     Some("hello world again".to_string())
/// );
///
/// // Fixed signatures still drop trailing arguments.
/// let pair = curry_signature(&Signature::fixed(2), |words: Vec<&str>| words.join(" "));
/// assert_eq!(pair.apply(["hello", "world", "again"]).complete(), Some("hello world".to_string()));
/// ```
pub fn curry_signature<A, R, F>(signature: &Signature, target: F) -> Curried<A, R>
where
    F: Fn(Vec<A>) -> R + Send + Sync + 'static,
{
    let mut curried = curry(signature.arity(), target);
    curried.variadic = signature.is_variadic();
    curried
}

/// Curries a closure or function item, taking the arity from its type.
///
/// # Examples
///
/// ```rust
/// use curry_engine::engine::curry_fn;
///
/// fn add(first: i32, second: i32) -> i32 {
///     first + second
/// }
///
/// let curried = curry_fn(add);
/// assert_eq!(curried.arity(), 2);
///
/// let step = curried.apply([]).partial().unwrap();
/// let step = step.apply([1]).partial().unwrap();
/// assert_eq!(step.apply([2]).complete(), Some(3));
/// ```
pub fn curry_fn<A, R, M, F>(target: F) -> Curried<A, R>
where
    F: Function<A, R, M>,
{
    curry(F::ARITY, move |arguments| target.invoke(arguments))
}

/// Curries a target that receives the context of the completing call.
///
/// The context is never stored: each call to [`Curried::apply_with`] borrows
/// it, and only the call that reaches the arity forwards it to the target.
///
/// # Examples
///
/// ```rust
/// use curry_engine::engine::curry_with_context;
///
/// struct Account {
///     balance: i64,
/// }
///
/// let transfer = curry_with_context(2, |account: &Account, amounts: Vec<i64>| {
///     account.balance - amounts[0] - amounts[1]
/// });
///
/// let savings = Account { balance: 1_000 };
/// let checking = Account { balance: 50 };
///
/// let pending = transfer.apply_with(&savings, [300]).partial().unwrap();
/// assert_eq!(pending.apply_with(&checking, [20]).complete(), Some(-270));
/// assert_eq!(pending.apply_with(&savings, [20]).complete(), Some(680));
/// ```
pub fn curry_with_context<A, R, C, F>(arity: usize, target: F) -> Curried<A, R, C>
where
    F: Fn(&C, Vec<A>) -> R + Send + Sync + 'static,
{
    Curried {
        target: Arc::new(target),
        arity,
        variadic: false,
        arguments: Arguments::new(),
    }
}

impl<A, R, C> Curried<A, R, C> {
    /// Returns the number of arguments the target expects.
    #[inline]
    #[must_use]
    pub const fn arity(&self) -> usize {
        self.arity
    }

    /// Returns `true` if the target collects every argument past its arity.
    #[inline]
    #[must_use]
    pub const fn is_variadic(&self) -> bool {
        self.variadic
    }

    /// Returns the number of arguments accumulated so far.
    #[inline]
    #[must_use]
    pub const fn supplied(&self) -> usize {
        self.arguments.len()
    }

    /// Returns the number of arguments still required.
    #[inline]
    #[must_use]
    pub const fn remaining(&self) -> usize {
        self.arity - self.arguments.len()
    }

    /// Returns the accumulated arguments.
    #[inline]
    #[must_use]
    pub const fn arguments(&self) -> &Arguments<A> {
        &self.arguments
    }

    /// Applies a batch of arguments, forwarding `context` if the target is
    /// invoked.
    ///
    /// The receiver is left untouched; see the [module documentation](self).
    pub fn apply_with<I>(&self, context: &C, batch: I) -> Step<A, R, C>
    where
        A: Clone,
        I: IntoIterator<Item = A>,
    {
        let combined = self.arguments.concat(batch);

        #[cfg(feature = "tracing")]
        tracing::trace!(
            supplied = combined.len(),
            arity = self.arity,
            "curry step"
        );

        if combined.len() >= self.arity {
            let forwarded = if self.variadic {
                combined.len()
            } else {
                self.arity
            };

            #[cfg(feature = "tracing")]
            tracing::debug!(
                arity = self.arity,
                forwarded,
                dropped = combined.len() - forwarded,
                "invoking curried target"
            );

            Step::Complete((self.target)(context, combined.first_n(forwarded)))
        } else {
            Step::Partial(Self {
                target: Arc::clone(&self.target),
                arity: self.arity,
                variadic: self.variadic,
                arguments: combined,
            })
        }
    }
}

impl<A, R> Curried<A, R> {
    /// Applies a batch of arguments.
    ///
    /// Returns [`Step::Complete`] with the target's result once the arity is
    /// reached, or [`Step::Partial`] otherwise.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use curry_engine::engine::curry_fn;
    ///
    /// let add = curry_fn(|a: i32, b: i32| a + b);
    /// let add_five = add.apply([5]).partial().unwrap();
    ///
    /// assert_eq!(add_five.apply([3]).complete(), Some(8));
    /// assert_eq!(add_five.apply([10]).complete(), Some(15));
    /// ```
    pub fn apply<I>(&self, batch: I) -> Step<A, R>
    where
        A: Clone,
        I: IntoIterator<Item = A>,
    {
        self.apply_with(&(), batch)
    }
}

impl<A, R, C> Clone for Curried<A, R, C> {
    fn clone(&self) -> Self {
        Self {
            target: Arc::clone(&self.target),
            arity: self.arity,
            variadic: self.variadic,
            arguments: self.arguments.clone(),
        }
    }
}

impl<A: fmt::Debug, R, C> fmt::Debug for Curried<A, R, C> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("Curried")
            .field("arity", &self.arity)
            .field("variadic", &self.variadic)
            .field("arguments", &self.arguments)
            .finish_non_exhaustive()
    }
}

impl<A, R, C> Step<A, R, C> {
    /// Returns `true` if the target has been invoked.
    #[inline]
    #[must_use]
    pub const fn is_complete(&self) -> bool {
        matches!(self, Self::Complete(_))
    }

    /// Returns the target's result, or `None` if more arguments are required.
    #[must_use]
    pub fn complete(self) -> Option<R> {
        match self {
            Self::Complete(result) => Some(result),
            Self::Partial(_) => None,
        }
    }

    /// Returns the pending curried function, or `None` if the target has been
    /// invoked.
    #[must_use]
    pub fn partial(self) -> Option<Curried<A, R, C>> {
        match self {
            Self::Complete(_) => None,
            Self::Partial(curried) => Some(curried),
        }
    }

    /// Returns the target's result.
    ///
    /// # Errors
    ///
    /// Returns [`CurryError::Incomplete`] if more arguments are required.
    pub fn into_complete(self) -> Result<R, CurryError> {
        match self {
            Self::Complete(result) => Ok(result),
            Self::Partial(curried) => Err(CurryError::Incomplete {
                supplied: curried.supplied(),
                arity: curried.arity(),
            }),
        }
    }

    /// Applies a further batch to a pending step, forwarding `context`.
    ///
    /// # Errors
    ///
    /// Returns [`CurryError::AlreadyInvoked`] if the target has already been
    /// invoked on this branch.
    pub fn try_apply_with<I>(self, context: &C, batch: I) -> Result<Self, CurryError>
    where
        A: Clone,
        I: IntoIterator<Item = A>,
    {
        match self {
            Self::Complete(_) => Err(CurryError::AlreadyInvoked),
            Self::Partial(curried) => Ok(curried.apply_with(context, batch)),
        }
    }
}

impl<A, R> Step<A, R> {
    /// Applies a further batch to a pending step.
    ///
    /// # Errors
    ///
    /// Returns [`CurryError::AlreadyInvoked`] if the target has already been
    /// invoked on this branch.
    pub fn try_apply<I>(self, batch: I) -> Result<Self, CurryError>
    where
        A: Clone,
        I: IntoIterator<Item = A>,
    {
        self.try_apply_with(&(), batch)
    }
}

impl<A: fmt::Debug, R: fmt::Debug, C> fmt::Debug for Step<A, R, C> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Complete(result) => formatter.debug_tuple("Complete").field(result).finish(),
            Self::Partial(curried) => formatter.debug_tuple("Partial").field(curried).finish(),
        }
    }
}

static_assertions::assert_impl_all!(Curried<i32, i32>: Send, Sync, Clone);
static_assertions::assert_impl_all!(Curried<String, String, String>: Send, Sync, Clone);
static_assertions::assert_impl_all!(Arguments<String>: Send, Sync, Clone);
static_assertions::assert_not_impl_any!(Curried<std::rc::Rc<i32>, i32>: Send, Sync);
