//! # curry-engine
//!
//! Arity-driven currying for Rust.
//!
//! ## Overview
//!
//! A curried function accumulates arguments across successive calls until the
//! number collected reaches the target function's arity, then invokes the
//! target with exactly that many arguments. Until then every call returns a
//! new curried function closed over the arguments collected so far.
//!
//! - **Engine**: [`engine::curry`], [`engine::curry_fn`],
//!   [`engine::curry_signature`], [`engine::curry_with_context`]
//! - **Persistent arguments**: [`engine::Arguments`] shares common prefixes
//!   between branches without ever mutating them
//! - **Macro**: `curry!` (feature `derive`) curries a closure or function
//!   path through [`engine::curry_fn`], reading the arity from its declaration
//!
//! ## Feature Flags
//!
//! - `derive`: the `curry!` procedural macro (enabled by default)
//! - `serde`: `Serialize`/`Deserialize` for [`engine::Signature`]
//! - `tracing`: emit `tracing` events for every curry step
//! - `full`: Enable all features
//!
//! ## Example
//!
//! ```rust
//! use curry_engine::prelude::*;
//!
//! let product = curry_fn(|a: i32, b: i32, c: i32| a * b * c);
//!
//! let doubled = product.apply([2]).partial().unwrap();
//! assert_eq!(doubled.apply([3, 4]).complete(), Some(24));
//! assert_eq!(doubled.apply([5, 1]).complete(), Some(10));
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
// Note: Disabling redundant_closure_for_method_calls due to clippy 0.1.92 panic bug
#![allow(clippy::redundant_closure_for_method_calls)]

/// Prelude module for convenient imports.
///
/// Re-exports commonly used types and functions.
///
/// # Usage
///
/// ```rust
/// use curry_engine::prelude::*;
/// ```
pub mod prelude {
    pub use crate::engine::{
        Arguments, Curried, Function, Parameter, Signature, Step, curry, curry_fn,
        curry_signature, curry_with_context,
    };

    pub use crate::error::{ArityError, CurryError};

    #[cfg(feature = "derive")]
    pub use crate::curry;
}

pub mod engine;
pub mod error;

#[cfg(feature = "derive")]
pub use curry_engine_derive::curry;
