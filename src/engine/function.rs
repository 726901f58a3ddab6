//! Arity derived from a closure's type.
//!
//! [`Function`] is implemented for every `Fn` taking between zero and eight
//! parameters of the same type `A`. Its [`ARITY`](Function::ARITY) is the
//! parameter count of the closure type, so [`curry_fn`](super::curry_fn) never
//! needs to be told how many arguments to wait for.
//!
//! The `Marker` parameter only distinguishes the implementations for each
//! arity; it is always inferred.

/// A target function whose arity is known at compile time.
///
/// # Examples
///
/// ```rust
/// use curry_engine::engine::Function;
///
/// fn arity_of<F: Function<i32, i32, M>, M>(_: &F) -> usize {
///     F::ARITY
/// }
///
/// assert_eq!(arity_of(&|a: i32, b: i32, c: i32| a * b * c), 3);
/// assert_eq!(arity_of(&|| 7), 0);
/// ```
pub trait Function<A, R, Marker>: Send + Sync + 'static {
    /// Number of parameters the function declares.
    const ARITY: usize;

    /// Invokes the function with exactly [`ARITY`](Self::ARITY) arguments.
    ///
    /// # Panics
    ///
    /// Panics if `arguments.len() != Self::ARITY`. The curry engine never
    /// violates this.
    fn invoke(&self, arguments: Vec<A>) -> R;
}

macro_rules! parameter_type {
    ($_parameter:ident, $type:ty) => {
        $type
    };
}

macro_rules! impl_function {
    ($arity:literal $(, $parameter:ident)*) => {
        impl<F, A, R> Function<A, R, ($(parameter_type!($parameter, A),)*)> for F
        where
            F: Fn($(parameter_type!($parameter, A)),*) -> R + Send + Sync + 'static,
        {
            const ARITY: usize = $arity;

            #[inline]
            fn invoke(&self, arguments: Vec<A>) -> R {
                let supplied = arguments.len();
                match <[A; $arity]>::try_from(arguments) {
                    Ok([$($parameter),*]) => self($($parameter),*),
                    Err(_) => unreachable!(
                        "target function declares {} parameters but received {}",
                        $arity,
                        supplied
                    ),
                }
            }
        }
    };
}

impl_function!(0);
impl_function!(1, first);
impl_function!(2, first, second);
impl_function!(3, first, second, third);
impl_function!(4, first, second, third, fourth);
impl_function!(5, first, second, third, fourth, fifth);
impl_function!(6, first, second, third, fourth, fifth, sixth);
impl_function!(7, first, second, third, fourth, fifth, sixth, seventh);
impl_function!(8, first, second, third, fourth, fifth, sixth, seventh, eighth);
