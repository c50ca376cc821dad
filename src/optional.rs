//! A value that may be missing.
//!
//! # Optional vs Option
//!
//! `Optional<T>` carries the same information as `Option<T>` but exposes the
//! map/chain/fold vocabulary shared with [`Disjunction`] and [`Effect`](crate::Effect),
//! together with container-last free functions and their curried forms.
//! Convert freely in both directions with `From`.
//!
//! # No null inside the box
//!
//! "Null" is `Option::None`. The constructors and [`Optional::map_nullable`]
//! collapse a `None` into [`Optional::Absent`], so a pipeline that reaches a
//! missing value stops there and every later `map` is skipped.
//!
//! # Examples
//!
//! ```rust
//! use monad_maniac::Optional;
//!
//! struct Inner {
//!     c: Option<&'static str>,
//! }
//!
//! struct Outer {
//!     b: Option<Inner>,
//! }
//!
//! let full = Outer { b: Some(Inner { c: Some("monad-maniac") }) };
//! let described = Optional::of(full)
//!     .map_nullable(|outer| outer.b)
//!     .map_nullable(|inner| inner.c)
//!     .map(|s| format!("this is {}", s));
//! assert_eq!(described.to_string(), "Present(this is monad-maniac)");
//!
//! let empty = Outer { b: None };
//! let described = Optional::of(empty)
//!     .map_nullable(|outer| outer.b)
//!     .map_nullable(|inner| inner.c)
//!     .map(|s| format!("this is {}", s));
//! assert_eq!(described.to_string(), "Absent()");
//! ```

use std::fmt;

use crate::Disjunction;

/// A value that is either `Present(T)` or `Absent`.
///
/// Operations never mutate: each one consumes or borrows the container and
/// returns a new one. `Absent` short-circuits every transformation, so the
/// function handed to `map`, `chain` or `filter` is never invoked on it.
///
/// # Example
///
/// ```rust
/// use monad_maniac::Optional;
///
/// let ten = Optional::of(10);
/// let nothing = Optional::<i32>::of(None);
///
/// assert_eq!(ten.map(|x| x * 2).to_string(), "Present(20)");
/// assert_eq!(nothing.map(|x| x * 2).to_string(), "Absent()");
///
/// let label = ten.case_of(|n| format!("got {}", n), || "nothing".to_string());
/// assert_eq!(label, "got 10");
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Optional<T> {
    /// A value is present
    Present(T),
    /// No value
    Absent,
}

impl<T> Optional<T> {
    // ========== Constructors ==========

    /// Wrap a possibly-missing value.
    ///
    /// Accepts either a bare value or an `Option`. `None` becomes `Absent`,
    /// anything else becomes `Present`. When passing an `Option` whose element
    /// type is not otherwise pinned down, name the type on `Optional` or use
    /// [`Optional::from_option`].
    ///
    /// # Example
    ///
    /// ```rust
    /// use monad_maniac::Optional;
    ///
    /// assert_eq!(Optional::of(10), Optional::Present(10));
    /// assert_eq!(Optional::of("foo").to_string(), "Present(foo)");
    /// assert_eq!(Optional::<i32>::of(None), Optional::Absent);
    /// assert_eq!(Optional::<i32>::of(Some(3)), Optional::Present(3));
    /// ```
    #[inline]
    pub fn of<V>(value: V) -> Self
    where
        V: Into<Option<T>>,
    {
        Self::from_option(value.into())
    }

    /// Wrap an `Option`: `Some` becomes `Present`, `None` becomes `Absent`.
    #[inline]
    pub fn from_option(value: Option<T>) -> Self {
        match value {
            Some(v) => Optional::Present(v),
            None => Optional::Absent,
        }
    }

    // ========== Predicates ==========

    /// Returns `true` if a value is present.
    #[inline]
    pub fn is_just(&self) -> bool {
        matches!(self, Optional::Present(_))
    }

    /// Returns `true` if no value is present.
    #[inline]
    pub fn is_nothing(&self) -> bool {
        matches!(self, Optional::Absent)
    }

    /// Alias for [`Optional::is_just`].
    #[inline]
    pub fn is_present(&self) -> bool {
        self.is_just()
    }

    /// Alias for [`Optional::is_nothing`].
    #[inline]
    pub fn is_absent(&self) -> bool {
        self.is_nothing()
    }

    // ========== Extractors ==========

    /// Convert to `Optional<&T>`.
    #[inline]
    pub fn as_ref(&self) -> Optional<&T> {
        match self {
            Optional::Present(v) => Optional::Present(v),
            Optional::Absent => Optional::Absent,
        }
    }

    /// Convert into a standard `Option`.
    #[inline]
    pub fn into_option(self) -> Option<T> {
        match self {
            Optional::Present(v) => Some(v),
            Optional::Absent => None,
        }
    }

    /// Unwrap the present value, or return `default`.
    ///
    /// # Example
    ///
    /// ```rust
    /// use monad_maniac::Optional;
    ///
    /// assert_eq!(Optional::of(5).map(|x| x * 2).get_or_else(0), 10);
    /// assert_eq!(Optional::<i32>::Absent.get_or_else(-1), -1);
    /// ```
    #[inline]
    pub fn get_or_else(self, default: T) -> T {
        match self {
            Optional::Present(v) => v,
            Optional::Absent => default,
        }
    }

    /// Unwrap the present value, or compute a default lazily.
    #[inline]
    pub fn get_or_else_with<F>(self, f: F) -> T
    where
        F: FnOnce() -> T,
    {
        match self {
            Optional::Present(v) => v,
            Optional::Absent => f(),
        }
    }

    // ========== Transformations ==========

    /// Apply `f` to a present value.
    ///
    /// `Absent` is returned unchanged and `f` is never called.
    ///
    /// # Example
    ///
    /// ```rust
    /// use monad_maniac::Optional;
    ///
    /// let five = Optional::of(5);
    /// assert_eq!(five.map(|x| x * 2).map(|x| x * 2), Optional::Present(20));
    /// ```
    #[inline]
    pub fn map<U, F>(self, f: F) -> Optional<U>
    where
        F: FnOnce(T) -> U,
    {
        match self {
            Optional::Present(v) => Optional::Present(f(v)),
            Optional::Absent => Optional::Absent,
        }
    }

    /// Apply a function that may itself produce no value.
    ///
    /// A `None` result collapses the container to `Absent` rather than
    /// producing `Present(None)`.
    ///
    /// # Example
    ///
    /// ```rust
    /// use monad_maniac::Optional;
    ///
    /// let ten_divide = |n: i32| if n == 0 { None } else { Some(10 / n) };
    ///
    /// assert_eq!(Optional::of(0).map_nullable(ten_divide), Optional::Absent);
    /// assert_eq!(Optional::of(2).map_nullable(ten_divide), Optional::Present(5));
    /// ```
    #[inline]
    pub fn map_nullable<U, F>(self, f: F) -> Optional<U>
    where
        F: FnOnce(T) -> Option<U>,
    {
        match self {
            Optional::Present(v) => Optional::from_option(f(v)),
            Optional::Absent => Optional::Absent,
        }
    }

    /// Hand the present value to `f` and return its result as is.
    ///
    /// The result of `f` is not re-wrapped. On `Absent` the absent container
    /// itself is returned.
    ///
    /// # Example
    ///
    /// ```rust
    /// use monad_maniac::Optional;
    ///
    /// let half = |n: i32| if n % 2 == 0 { Optional::of(n / 2) } else { Optional::Absent };
    ///
    /// assert_eq!(Optional::of(10).chain(half), Optional::Present(5));
    /// assert_eq!(Optional::of(5).chain(half), Optional::Absent);
    /// assert_eq!(Optional::Absent.chain(half), Optional::Absent);
    /// ```
    #[inline]
    pub fn chain<U, F>(self, f: F) -> Optional<U>
    where
        F: FnOnce(T) -> Optional<U>,
    {
        match self {
            Optional::Present(v) => f(v),
            Optional::Absent => Optional::Absent,
        }
    }

    /// Keep a present value only if it satisfies `predicate`.
    ///
    /// # Example
    ///
    /// ```rust
    /// use monad_maniac::Optional;
    ///
    /// let result = Optional::of(10)
    ///     .map(|x| x * x)
    ///     .filter(|x| *x > 50)
    ///     .filter(|x| *x < 90);
    ///
    /// assert_eq!(result.to_string(), "Absent()");
    /// ```
    #[inline]
    pub fn filter<P>(self, predicate: P) -> Self
    where
        P: FnOnce(&T) -> bool,
    {
        match self {
            Optional::Present(v) => {
                if predicate(&v) {
                    Optional::Present(v)
                } else {
                    Optional::Absent
                }
            }
            Optional::Absent => Optional::Absent,
        }
    }

    /// Apply a wrapped function to this wrapped value.
    ///
    /// The result is present only when both the function and the value are.
    ///
    /// # Example
    ///
    /// ```rust
    /// use monad_maniac::Optional;
    ///
    /// let double = Optional::of(|x: i32| x * 2);
    /// assert_eq!(Optional::of(5).apply(double).map(|x| x + 15), Optional::Present(25));
    ///
    /// let missing: Optional<fn(i32) -> i32> = Optional::Absent;
    /// assert_eq!(Optional::of(5).apply(missing), Optional::Absent);
    /// ```
    #[inline]
    pub fn apply<U, F>(self, maybe_fn: Optional<F>) -> Optional<U>
    where
        F: FnOnce(T) -> U,
    {
        match (self, maybe_fn) {
            (Optional::Present(v), Optional::Present(f)) => Optional::Present(f(v)),
            _ => Optional::Absent,
        }
    }

    /// Like [`Optional::apply`], but a `None` from the wrapped function
    /// collapses to `Absent`.
    ///
    /// # Example
    ///
    /// ```rust
    /// use monad_maniac::Optional;
    ///
    /// let first_char = Optional::of(|s: &str| s.chars().next());
    /// assert_eq!(Optional::of("hello").apply_nullable(first_char), Optional::Present('h'));
    /// assert_eq!(Optional::of("").apply_nullable(first_char), Optional::Absent);
    /// ```
    #[inline]
    pub fn apply_nullable<U, F>(self, maybe_fn: Optional<F>) -> Optional<U>
    where
        F: FnOnce(T) -> Option<U>,
    {
        match (self, maybe_fn) {
            (Optional::Present(v), Optional::Present(f)) => Optional::from_option(f(v)),
            _ => Optional::Absent,
        }
    }

    // ========== Folding ==========

    /// Eliminate both cases into a single value.
    ///
    /// # Example
    ///
    /// ```rust
    /// use monad_maniac::Optional;
    ///
    /// let plus_five = |x: i32| x + 5;
    /// assert_eq!(Optional::of(10).case_of(plus_five, || 0), 15);
    /// assert_eq!(Optional::Absent.case_of(plus_five, || 0), 0);
    /// ```
    #[inline]
    pub fn case_of<U, J, N>(self, just: J, nothing: N) -> U
    where
        J: FnOnce(T) -> U,
        N: FnOnce() -> U,
    {
        match self {
            Optional::Present(v) => just(v),
            Optional::Absent => nothing(),
        }
    }

    // ========== Equality ==========

    /// Compare the held value against a bare (possibly missing) value.
    ///
    /// A present value equals `Some(v)` when the two compare equal. `Absent`
    /// equals `None` only.
    ///
    /// # Example
    ///
    /// ```rust
    /// use monad_maniac::Optional;
    ///
    /// assert!(Optional::of(3).equals_value(Some(&3)));
    /// assert!(!Optional::of(3).equals_value(None));
    /// assert!(Optional::<i32>::Absent.equals_value(None));
    /// ```
    #[inline]
    pub fn equals_value(&self, value: Option<&T>) -> bool
    where
        T: PartialEq,
    {
        match (self, value) {
            (Optional::Present(held), Some(given)) => held == given,
            (Optional::Absent, None) => true,
            _ => false,
        }
    }

    /// Compare with another `Optional`: both present and equal, or both absent.
    #[inline]
    pub fn equals(&self, other: &Optional<T>) -> bool
    where
        T: PartialEq,
    {
        self == other
    }

    // ========== Conversions ==========

    /// Convert to a [`Disjunction`]: present values go right,
    /// `Absent` becomes `Left(left_default)`.
    ///
    /// # Example
    ///
    /// ```rust
    /// use monad_maniac::{Disjunction, Optional};
    ///
    /// assert_eq!(Optional::of(150).to_either("missing"), Disjunction::Right(150));
    /// assert_eq!(Optional::<i32>::Absent.to_either("missing"), Disjunction::Left("missing"));
    /// ```
    #[inline]
    pub fn to_either<L>(self, left_default: L) -> Disjunction<L, T> {
        match self {
            Optional::Present(v) => Disjunction::Right(v),
            Optional::Absent => Disjunction::Left(left_default),
        }
    }

    /// Alias for [`Optional::to_either`].
    #[inline]
    pub fn to_disjunction<L>(self, left_default: L) -> Disjunction<L, T> {
        self.to_either(left_default)
    }
}

impl<T> Optional<Optional<T>> {
    /// Remove one level of nesting.
    ///
    /// # Example
    ///
    /// ```rust
    /// use monad_maniac::Optional;
    ///
    /// assert_eq!(Optional::Present(Optional::of(1)).join(), Optional::Present(1));
    /// assert_eq!(Optional::Present(Optional::<i32>::Absent).join(), Optional::Absent);
    /// assert_eq!(Optional::<Optional<i32>>::Absent.join(), Optional::Absent);
    /// ```
    ///
    /// A flat optional has nothing to join:
    ///
    /// ```compile_fail
    /// use monad_maniac::Optional;
    ///
    /// let flat: Optional<i32> = Optional::Present(1);
    /// let _ = flat.join();
    /// ```
    #[inline]
    pub fn join(self) -> Optional<T> {
        match self {
            Optional::Present(inner) => inner,
            Optional::Absent => Optional::Absent,
        }
    }
}

// ========== Trait Implementations ==========

impl<T: fmt::Display> fmt::Display for Optional<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Optional::Present(v) => write!(f, "Present({})", v),
            Optional::Absent => f.write_str("Absent()"),
        }
    }
}

impl<T> From<Option<T>> for Optional<T> {
    fn from(value: Option<T>) -> Self {
        Optional::from_option(value)
    }
}

impl<T> From<Optional<T>> for Option<T> {
    fn from(value: Optional<T>) -> Self {
        value.into_option()
    }
}

impl<T> Default for Optional<T> {
    /// Returns `Optional::Absent`.
    fn default() -> Self {
        Optional::Absent
    }
}

impl<T> IntoIterator for Optional<T> {
    type Item = T;
    type IntoIter = std::option::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.into_option().into_iter()
    }
}

impl<'a, T> IntoIterator for &'a Optional<T> {
    type Item = &'a T;
    type IntoIter = std::option::IntoIter<&'a T>;

    fn into_iter(self) -> Self::IntoIter {
        self.as_ref().into_option().into_iter()
    }
}

// ========== Free Functions ==========
//
// Container-last versions of the methods above. Each binary one has a
// one-argument form in `curried`.

/// Wrap a possibly-missing value. See [`Optional::of`].
#[inline]
pub fn of<T, V>(value: V) -> Optional<T>
where
    V: Into<Option<T>>,
{
    Optional::of(value)
}

/// Lift a function that may produce no value over a possibly-missing input.
///
/// Equivalent to `of(value).map_nullable(f)`.
///
/// # Example
///
/// ```rust
/// use monad_maniac::optional::lift;
/// use monad_maniac::Optional;
///
/// let first_char = |s: &str| s.chars().next();
///
/// assert_eq!(lift(first_char, "abc"), Optional::Present('a'));
/// assert_eq!(lift(first_char, ""), Optional::Absent);
/// assert_eq!(lift(first_char, None::<&str>), Optional::Absent);
/// ```
#[inline]
pub fn lift<T, U, V, F>(f: F, value: V) -> Optional<U>
where
    V: Into<Option<T>>,
    F: FnOnce(T) -> Option<U>,
{
    Optional::of(value).map_nullable(f)
}

/// See [`Optional::map`].
#[inline]
pub fn map<T, U, F>(f: F, maybe: Optional<T>) -> Optional<U>
where
    F: FnOnce(T) -> U,
{
    maybe.map(f)
}

/// See [`Optional::map_nullable`].
#[inline]
pub fn map_nullable<T, U, F>(f: F, maybe: Optional<T>) -> Optional<U>
where
    F: FnOnce(T) -> Option<U>,
{
    maybe.map_nullable(f)
}

/// See [`Optional::chain`].
#[inline]
pub fn chain<T, U, F>(f: F, maybe: Optional<T>) -> Optional<U>
where
    F: FnOnce(T) -> Optional<U>,
{
    maybe.chain(f)
}

/// See [`Optional::filter`].
#[inline]
pub fn filter<T, P>(predicate: P, maybe: Optional<T>) -> Optional<T>
where
    P: FnOnce(&T) -> bool,
{
    maybe.filter(predicate)
}

/// See [`Optional::get_or_else`].
#[inline]
pub fn get_or_else<T>(default: T, maybe: Optional<T>) -> T {
    maybe.get_or_else(default)
}

/// Apply a wrapped function to a wrapped value. See [`Optional::apply`].
#[inline]
pub fn apply<T, U, F>(maybe_fn: Optional<F>, maybe: Optional<T>) -> Optional<U>
where
    F: FnOnce(T) -> U,
{
    maybe.apply(maybe_fn)
}

/// See [`Optional::case_of`].
#[inline]
pub fn case_of<T, U, J, N>(just: J, nothing: N, maybe: Optional<T>) -> U
where
    J: FnOnce(T) -> U,
    N: FnOnce() -> U,
{
    maybe.case_of(just, nothing)
}

/// See [`Optional::to_either`].
#[inline]
pub fn to_either<L, T>(left_default: L, maybe: Optional<T>) -> Disjunction<L, T> {
    maybe.to_either(left_default)
}

/// See [`Optional::is_just`].
#[inline]
pub fn is_just<T>(maybe: &Optional<T>) -> bool {
    maybe.is_just()
}

/// See [`Optional::is_nothing`].
#[inline]
pub fn is_nothing<T>(maybe: &Optional<T>) -> bool {
    maybe.is_nothing()
}

/// Render as `Present(value)` or `Absent()`.
#[inline]
pub fn to_string<T: fmt::Display>(maybe: &Optional<T>) -> String {
    format!("{}", maybe)
}

/// One-argument forms of the binary free functions.
///
/// Each returns a closure that waits for the container.
///
/// ```rust
/// use monad_maniac::optional::curried;
/// use monad_maniac::Optional;
///
/// let concat_bar = curried::map(|s: &str| format!("{}bar", s));
/// assert_eq!(concat_bar(Optional::of("foo")).to_string(), "Present(foobar)");
///
/// let or_none = curried::get_or_else("none");
/// assert_eq!(or_none(Optional::Absent), "none");
/// ```
pub mod curried {
    use crate::curry::partial;
    use crate::{Disjunction, Optional};

    /// Curried [`map`](super::map).
    pub fn map<T, U, F>(f: F) -> impl FnOnce(Optional<T>) -> Optional<U>
    where
        F: FnOnce(T) -> U,
    {
        partial(super::map::<T, U, F>, f)
    }

    /// Curried [`map_nullable`](super::map_nullable).
    pub fn map_nullable<T, U, F>(f: F) -> impl FnOnce(Optional<T>) -> Optional<U>
    where
        F: FnOnce(T) -> Option<U>,
    {
        partial(super::map_nullable::<T, U, F>, f)
    }

    /// Curried [`chain`](super::chain).
    pub fn chain<T, U, F>(f: F) -> impl FnOnce(Optional<T>) -> Optional<U>
    where
        F: FnOnce(T) -> Optional<U>,
    {
        partial(super::chain::<T, U, F>, f)
    }

    /// Curried [`filter`](super::filter).
    pub fn filter<T, P>(predicate: P) -> impl FnOnce(Optional<T>) -> Optional<T>
    where
        P: FnOnce(&T) -> bool,
    {
        partial(super::filter::<T, P>, predicate)
    }

    /// Curried [`get_or_else`](super::get_or_else).
    pub fn get_or_else<T>(default: T) -> impl FnOnce(Optional<T>) -> T {
        partial(super::get_or_else::<T>, default)
    }

    /// Curried [`apply`](super::apply).
    pub fn apply<T, U, F>(maybe_fn: Optional<F>) -> impl FnOnce(Optional<T>) -> Optional<U>
    where
        F: FnOnce(T) -> U,
    {
        partial(super::apply::<T, U, F>, maybe_fn)
    }

    /// Curried [`to_either`](super::to_either).
    pub fn to_either<L, T>(left_default: L) -> impl FnOnce(Optional<T>) -> Disjunction<L, T> {
        partial(super::to_either::<L, T>, left_default)
    }
}
