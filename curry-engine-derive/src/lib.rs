//! Procedural macros for curry-engine.
//!
//! # Available Function-like Macros
//!
//! - [`curry!`]: Curries a closure or function through the runtime engine
//!
//! `curry!` reads the arity from the closure's parameter list (or takes it
//! explicitly for a function path) and expands to
//! `curry_engine::engine::curry_fn`, so the result accumulates argument
//! batches of any size like every other curried function.
//!
//! # Example
//!
//! ```rust,ignore
//! use curry_engine::curry;
//!
//! let product = curry!(|a: i32, b: i32, c: i32| a * b * c);
//! assert_eq!(product.apply([2, 3, 4]).complete(), Some(24));
//!
//! let doubled = product.apply([2]).partial().unwrap();
//! assert_eq!(doubled.apply([3]).partial().unwrap().apply([4]).complete(), Some(24));
//! assert_eq!(doubled.apply([5, 1]).complete(), Some(10));
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

mod curry;

use proc_macro::TokenStream;

/// Curries a closure or function, taking the arity from its declaration.
///
/// # Usage
///
/// ```rust,ignore
/// use curry_engine::curry;
///
/// // With a closure: the arity is the number of closure parameters
/// let add = curry!(|a: i32, b: i32| a + b);
/// assert_eq!(add.apply([5, 3]).complete(), Some(8));
///
/// // With a function path: the arity is given explicitly
/// fn add_three(a: i32, b: i32, c: i32) -> i32 { a + b + c }
/// let curried = curry!(add_three, 3);
/// let step = curried.apply([1]).partial().unwrap();
/// assert_eq!(step.apply([2, 3]).complete(), Some(6));
/// ```
///
/// # Arities
///
/// Closures and paths of zero to eight parameters are accepted, all of one
/// argument type. A zero-arity target is invoked on the first call. Larger
/// arities are a compile error; use `curry_engine::engine::curry` with an
/// explicit arity instead.
///
/// # Type constraints
///
/// The expansion is an `engine::Curried`, so arguments must be `Clone` and
/// the target `Send + Sync + 'static`. Closure parameters need type
/// annotations when they cannot be inferred from the body.
#[proc_macro]
pub fn curry(input: TokenStream) -> TokenStream {
    curry::curry_impl(input)
}
