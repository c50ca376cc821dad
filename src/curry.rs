//! Explicit partial application
//!
//! Every binary free function in this crate takes the container as its last
//! argument so that the leading argument (usually a function or a default)
//! can be bound first and the result handed around as a plain closure.
//!
//! ```
//! use monad_maniac::curry::partial;
//!
//! fn add(a: i32, b: i32) -> i32 {
//!     a + b
//! }
//!
//! let add_ten = partial(add, 10);
//! assert_eq!(add_ten(5), 15);
//! ```

/// Bind the first argument of a two-argument operation.
///
/// The returned closure waits for the second argument and then calls `op`.
/// This is the building block for the `curried` modules of
/// [`optional`](crate::optional::curried) and
/// [`disjunction`](crate::disjunction::curried).
///
/// # Example
///
/// ```
/// use monad_maniac::curry::partial;
/// use monad_maniac::{optional, Optional};
///
/// let double_it = partial(optional::map, |x: i32| x * 2);
/// assert_eq!(double_it(Optional::of(21)), Optional::of(42));
/// ```
#[inline]
pub fn partial<A, B, C, F>(op: F, first: A) -> impl FnOnce(B) -> C
where
    F: FnOnce(A, B) -> C,
{
    move |second| op(first, second)
}

/// Swap the argument order of a two-argument operation.
///
/// Useful for binding the container first and supplying the function later.
///
/// # Example
///
/// ```
/// use monad_maniac::curry::{flip, partial};
/// use monad_maniac::{optional, Optional};
///
/// let from_five = partial(flip(optional::get_or_else), Optional::<i32>::Absent);
/// assert_eq!(from_five(5), 5);
/// ```
#[inline]
pub fn flip<A, B, C, F>(op: F) -> impl FnOnce(B, A) -> C
where
    F: FnOnce(A, B) -> C,
{
    move |b, a| op(a, b)
}
