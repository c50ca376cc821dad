//! One of two possible outcomes.
//!
//! # Right-Biased Convention
//!
//! `Disjunction<L, R>` is "right-biased": `map`, `chain` and `filter` operate
//! on the `Right` variant, which conventionally holds the successful result.
//! A `Left` (conventionally the error) passes through untouched, so the
//! functions handed to those methods are never invoked on it. Recovery is
//! explicit through [`Disjunction::or_else`], [`Disjunction::get_or_else`] or
//! [`Disjunction::case_of`].
//!
//! # From fallible code
//!
//! The `attempt` family bridges fallible Rust code into a `Disjunction`:
//!
//! - [`attempt`]: `Err` becomes `Left`, `Ok` becomes `Right`
//! - [`attempt_catching`]: additionally turns a panic into `Left`
//! - [`attempt_async`]: awaits a future, rejection goes left
//! - [`attempt_async_catching`]: additionally turns a panic while polling into `Left`
//!
//! # Examples
//!
//! ```rust
//! use monad_maniac::Disjunction;
//!
//! fn parse_port(raw: &str) -> Disjunction<String, u16> {
//!     match raw.parse::<u16>() {
//!         Ok(port) => Disjunction::right(port),
//!         Err(e) => Disjunction::left(format!("bad port {:?}: {}", raw, e)),
//!     }
//! }
//!
//! let next = parse_port("8080").map(|p| p + 1);
//! assert_eq!(next.to_string(), "Right(8081)");
//!
//! let described = parse_port("http").case_of(
//!     |err| format!("error: {}", err),
//!     |port| format!("port {}", port),
//! );
//! assert!(described.starts_with("error: bad port"));
//! ```

use std::fmt;
use std::future::Future;
use std::panic::{catch_unwind, AssertUnwindSafe};

use futures::FutureExt;

use crate::{Optional, Panicked};

/// A value that is either `Left(L)` or `Right(R)`.
///
/// Exactly one side is populated. By convention `Left` is the failure and
/// `Right` the success.
///
/// # Example
///
/// ```rust
/// use monad_maniac::Disjunction;
///
/// let left: Disjunction<&str, i32> = Disjunction::left("Server error");
/// let right: Disjunction<&str, i32> = Disjunction::right(150);
///
/// assert_eq!(left.map(|x| x * 2).to_string(), "Left(Server error)");
/// assert_eq!(right.map(|x| x * 2).to_string(), "Right(300)");
///
/// let size = |d: Disjunction<&str, i32>| d.case_of(|msg| msg.len() as i32, |n| n * 2);
/// assert_eq!(size(left), 12);
/// assert_eq!(size(right), 300);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Disjunction<L, R> {
    /// The left variant, conventionally a failure
    Left(L),
    /// The right variant, conventionally a success
    Right(R),
}

impl<L, R> Disjunction<L, R> {
    // ========== Constructors ==========

    /// Create a Left value.
    ///
    /// # Example
    ///
    /// ```rust
    /// use monad_maniac::Disjunction;
    ///
    /// let d: Disjunction<i32, &str> = Disjunction::left(42);
    /// assert!(d.is_left());
    /// ```
    #[inline]
    pub fn left(value: L) -> Self {
        Disjunction::Left(value)
    }

    /// Create a Right value.
    ///
    /// # Example
    ///
    /// ```rust
    /// use monad_maniac::Disjunction;
    ///
    /// let d: Disjunction<i32, &str> = Disjunction::right("hello");
    /// assert!(d.is_right());
    /// ```
    #[inline]
    pub fn right(value: R) -> Self {
        Disjunction::Right(value)
    }

    /// Alias for [`Disjunction::right`].
    #[inline]
    pub fn of(value: R) -> Self {
        Disjunction::Right(value)
    }

    /// `Some` goes right, `None` becomes `Left(left_default)`.
    ///
    /// # Example
    ///
    /// ```rust
    /// use monad_maniac::Disjunction;
    ///
    /// assert_eq!(Disjunction::from_nullable(Some(0), "missing"), Disjunction::Right(0));
    /// assert_eq!(Disjunction::<_, i32>::from_nullable(None, "missing"), Disjunction::Left("missing"));
    /// ```
    #[inline]
    pub fn from_nullable(value: Option<R>, left_default: L) -> Self {
        match value {
            Some(r) => Disjunction::Right(r),
            None => Disjunction::Left(left_default),
        }
    }

    // ========== Predicates ==========

    /// Returns `true` if this is a `Left` value.
    #[inline]
    pub fn is_left(&self) -> bool {
        matches!(self, Disjunction::Left(_))
    }

    /// Returns `true` if this is a `Right` value.
    #[inline]
    pub fn is_right(&self) -> bool {
        matches!(self, Disjunction::Right(_))
    }

    // ========== Extractors ==========

    /// Returns the left value if present, consuming self.
    #[inline]
    pub fn into_left(self) -> Option<L> {
        match self {
            Disjunction::Left(l) => Some(l),
            Disjunction::Right(_) => None,
        }
    }

    /// Returns the right value if present, consuming self.
    #[inline]
    pub fn into_right(self) -> Option<R> {
        match self {
            Disjunction::Left(_) => None,
            Disjunction::Right(r) => Some(r),
        }
    }

    /// Convert to `Disjunction<&L, &R>`.
    #[inline]
    pub fn as_ref(&self) -> Disjunction<&L, &R> {
        match self {
            Disjunction::Left(l) => Disjunction::Left(l),
            Disjunction::Right(r) => Disjunction::Right(r),
        }
    }

    /// Unwrap a right value, or return `default` for a left one.
    ///
    /// # Example
    ///
    /// ```rust
    /// use monad_maniac::Disjunction;
    ///
    /// let left: Disjunction<&str, i32> = Disjunction::left("Server error");
    /// let right: Disjunction<&str, i32> = Disjunction::right(150);
    ///
    /// assert_eq!(left.get_or_else(-1), -1);
    /// assert_eq!(right.get_or_else(-1), 150);
    /// ```
    #[inline]
    pub fn get_or_else(self, default: R) -> R {
        match self {
            Disjunction::Left(_) => default,
            Disjunction::Right(r) => r,
        }
    }

    /// Recover from a left value by turning it into a right-typed one.
    ///
    /// A right value is returned as is. Either way the container is gone.
    ///
    /// # Example
    ///
    /// ```rust
    /// use monad_maniac::Disjunction;
    ///
    /// let left: Disjunction<&str, usize> = Disjunction::left("Server error");
    /// let right: Disjunction<&str, usize> = Disjunction::right(150);
    ///
    /// assert_eq!(left.or_else(|msg| msg.len()), 12);
    /// assert_eq!(right.or_else(|msg| msg.len()), 150);
    /// ```
    #[inline]
    pub fn or_else<F>(self, f: F) -> R
    where
        F: FnOnce(L) -> R,
    {
        match self {
            Disjunction::Left(l) => f(l),
            Disjunction::Right(r) => r,
        }
    }

    // ========== Transformations ==========

    /// Transform the right value, passing left values through unchanged.
    ///
    /// # Example
    ///
    /// ```rust
    /// use monad_maniac::Disjunction;
    ///
    /// let left: Disjunction<&str, i32> = Disjunction::left("err");
    /// let right: Disjunction<&str, i32> = Disjunction::right(150);
    ///
    /// assert_eq!(left.map(|x| x * 2), Disjunction::Left("err"));
    /// assert_eq!(right.map(|x| x * 2), Disjunction::Right(300));
    /// ```
    #[inline]
    pub fn map<U, F>(self, f: F) -> Disjunction<L, U>
    where
        F: FnOnce(R) -> U,
    {
        match self {
            Disjunction::Left(l) => Disjunction::Left(l),
            Disjunction::Right(r) => Disjunction::Right(f(r)),
        }
    }

    /// Transform the left value, passing right values through unchanged.
    #[inline]
    pub fn map_left<L2, F>(self, f: F) -> Disjunction<L2, R>
    where
        F: FnOnce(L) -> L2,
    {
        match self {
            Disjunction::Left(l) => Disjunction::Left(f(l)),
            Disjunction::Right(r) => Disjunction::Right(r),
        }
    }

    /// Transform both variants.
    #[inline]
    pub fn bimap<L2, R2, F, G>(self, f: F, g: G) -> Disjunction<L2, R2>
    where
        F: FnOnce(L) -> L2,
        G: FnOnce(R) -> R2,
    {
        match self {
            Disjunction::Left(l) => Disjunction::Left(f(l)),
            Disjunction::Right(r) => Disjunction::Right(g(r)),
        }
    }

    /// Swap Left and Right.
    #[inline]
    pub fn swap(self) -> Disjunction<R, L> {
        match self {
            Disjunction::Left(l) => Disjunction::Right(l),
            Disjunction::Right(r) => Disjunction::Left(r),
        }
    }

    /// Hand a right value to `f` and return its result as is.
    ///
    /// A left value is re-wrapped with its payload preserved.
    ///
    /// # Example
    ///
    /// ```rust
    /// use monad_maniac::Disjunction;
    ///
    /// let halve = |n: i32| {
    ///     if n % 2 == 0 {
    ///         Disjunction::right(n / 2)
    ///     } else {
    ///         Disjunction::left("odd")
    ///     }
    /// };
    ///
    /// assert_eq!(Disjunction::right(150).chain(halve), Disjunction::Right(75));
    /// assert_eq!(Disjunction::right(75).chain(halve), Disjunction::Left("odd"));
    /// assert_eq!(Disjunction::left("early").chain(halve), Disjunction::Left("early"));
    /// ```
    #[inline]
    pub fn chain<U, F>(self, f: F) -> Disjunction<L, U>
    where
        F: FnOnce(R) -> Disjunction<L, U>,
    {
        match self {
            Disjunction::Left(l) => Disjunction::Left(l),
            Disjunction::Right(r) => f(r),
        }
    }

    /// Demote a right value that fails `predicate` into `Left(value)`.
    ///
    /// Left values are unaffected. Only the predicate decides, so "falsy"
    /// values such as `0` or `""` stay right when the predicate accepts them.
    ///
    /// # Example
    ///
    /// ```rust
    /// use monad_maniac::Disjunction;
    ///
    /// let zero: Disjunction<i32, i32> = Disjunction::right(0);
    /// let result = zero.filter(|x| *x != 0).map(|x| 1 / x);
    /// assert_eq!(result, Disjunction::Left(0));
    /// assert_eq!(result.get(), 0);
    /// ```
    #[inline]
    pub fn filter<P>(self, predicate: P) -> Self
    where
        P: FnOnce(&R) -> bool,
        R: Into<L>,
    {
        match self {
            Disjunction::Right(r) => {
                if predicate(&r) {
                    Disjunction::Right(r)
                } else {
                    Disjunction::Left(r.into())
                }
            }
            left => left,
        }
    }

    // ========== Folding ==========

    /// Eliminate both variants into a single value.
    ///
    /// # Example
    ///
    /// ```rust
    /// use monad_maniac::Disjunction;
    ///
    /// let left: Disjunction<i32, &str> = Disjunction::left(42);
    /// let right: Disjunction<i32, &str> = Disjunction::right("hello");
    ///
    /// assert_eq!(left.case_of(|x| x.to_string(), |s| s.to_string()), "42");
    /// assert_eq!(right.case_of(|x| x.to_string(), |s| s.to_string()), "hello");
    /// ```
    #[inline]
    pub fn case_of<T, F, G>(self, left_fn: F, right_fn: G) -> T
    where
        F: FnOnce(L) -> T,
        G: FnOnce(R) -> T,
    {
        match self {
            Disjunction::Left(l) => left_fn(l),
            Disjunction::Right(r) => right_fn(r),
        }
    }

    /// Alias for [`Disjunction::case_of`].
    #[inline]
    pub fn fold<T, F, G>(self, left_fn: F, right_fn: G) -> T
    where
        F: FnOnce(L) -> T,
        G: FnOnce(R) -> T,
    {
        self.case_of(left_fn, right_fn)
    }

    // ========== Conversions ==========

    /// Keep only the right side: `Right(v)` becomes `Present(v)`, any left
    /// value becomes `Absent`.
    ///
    /// # Example
    ///
    /// ```rust
    /// use monad_maniac::{Disjunction, Optional};
    ///
    /// let right: Disjunction<&str, i32> = Disjunction::right(7);
    /// let left: Disjunction<&str, i32> = Disjunction::left("nope");
    ///
    /// assert_eq!(right.to_maybe().get_or_else(0), 7);
    /// assert_eq!(left.to_maybe(), Optional::Absent);
    /// ```
    #[inline]
    pub fn to_maybe(self) -> Optional<R> {
        match self {
            Disjunction::Left(_) => Optional::Absent,
            Disjunction::Right(r) => Optional::Present(r),
        }
    }

    /// Convert to Result (Right becomes Ok, Left becomes Err).
    #[inline]
    pub fn into_result(self) -> Result<R, L> {
        match self {
            Disjunction::Left(l) => Err(l),
            Disjunction::Right(r) => Ok(r),
        }
    }

    /// Create from Result (Ok becomes Right, Err becomes Left).
    #[inline]
    pub fn from_result(result: Result<R, L>) -> Self {
        match result {
            Ok(r) => Disjunction::Right(r),
            Err(l) => Disjunction::Left(l),
        }
    }
}

impl<T> Disjunction<T, T> {
    /// Unwrap whichever side is populated.
    ///
    /// Only available when both sides share a type; otherwise eliminate with
    /// [`Disjunction::case_of`].
    ///
    /// # Example
    ///
    /// ```rust
    /// use monad_maniac::Disjunction;
    ///
    /// let left: Disjunction<String, String> = Disjunction::left("Server error".into());
    /// let right: Disjunction<i32, i32> = Disjunction::right(150);
    ///
    /// assert_eq!(left.get(), "Server error");
    /// assert_eq!(right.map(|x| x * 2).get(), 300);
    /// ```
    #[inline]
    pub fn get(self) -> T {
        match self {
            Disjunction::Left(v) | Disjunction::Right(v) => v,
        }
    }
}

// Flatten for nested Disjunction
impl<L, R> Disjunction<L, Disjunction<L, R>> {
    /// Flatten a nested right side.
    #[inline]
    pub fn flatten(self) -> Disjunction<L, R> {
        match self {
            Disjunction::Left(l) => Disjunction::Left(l),
            Disjunction::Right(inner) => inner,
        }
    }
}

// ========== Trait Implementations ==========

impl<L: fmt::Display, R: fmt::Display> fmt::Display for Disjunction<L, R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Disjunction::Left(l) => write!(f, "Left({})", l),
            Disjunction::Right(r) => write!(f, "Right({})", r),
        }
    }
}

impl<L, R> From<Result<R, L>> for Disjunction<L, R> {
    fn from(result: Result<R, L>) -> Self {
        Disjunction::from_result(result)
    }
}

impl<L, R> From<Disjunction<L, R>> for Result<R, L> {
    fn from(disjunction: Disjunction<L, R>) -> Self {
        disjunction.into_result()
    }
}

impl<L, R> IntoIterator for Disjunction<L, R> {
    type Item = R;
    type IntoIter = std::option::IntoIter<R>;

    fn into_iter(self) -> Self::IntoIter {
        self.into_right().into_iter()
    }
}

// ========== Constructors From Fallible Code ==========

/// Alias for [`right`].
#[inline]
pub fn of<L, R>(value: R) -> Disjunction<L, R> {
    Disjunction::Right(value)
}

/// Create a Left value.
#[inline]
pub fn left<L, R>(value: L) -> Disjunction<L, R> {
    Disjunction::Left(value)
}

/// Create a Right value.
#[inline]
pub fn right<L, R>(value: R) -> Disjunction<L, R> {
    Disjunction::Right(value)
}

/// See [`Disjunction::from_nullable`].
#[inline]
pub fn from_nullable<L, R>(value: Option<R>, left_default: L) -> Disjunction<L, R> {
    Disjunction::from_nullable(value, left_default)
}

/// Run a fallible function: `Err(e)` becomes `Left(e)`, `Ok(v)` becomes `Right(v)`.
///
/// Pass several arguments as a tuple.
///
/// # Example
///
/// ```rust
/// use monad_maniac::disjunction::attempt;
///
/// let divide = |(a, b): (i32, i32)| a.checked_div(b).ok_or("division by zero");
///
/// assert_eq!(attempt(divide, (10, 2)).get_or_else(0), 5);
///
/// let failed = attempt(divide, (10, 0));
/// assert!(failed.is_left());
/// assert_eq!(failed.into_left(), Some("division by zero"));
/// ```
pub fn attempt<A, T, E, F>(f: F, args: A) -> Disjunction<E, T>
where
    F: FnOnce(A) -> Result<T, E>,
{
    match f(args) {
        Ok(value) => Disjunction::Right(value),
        Err(error) => {
            #[cfg(feature = "tracing")]
            tracing::debug!("attempt returned an error, producing Left");
            Disjunction::Left(error)
        }
    }
}

/// Like [`attempt`], but a panic inside `f` also becomes a left value.
///
/// The panic is converted through `From<Panicked>`, so `E` can be
/// [`Panicked`] itself or a caller error type wrapping it.
///
/// # Example
///
/// ```rust
/// use monad_maniac::disjunction::attempt_catching;
/// use monad_maniac::Panicked;
///
/// let index = |i: usize| -> Result<i32, Panicked> { Ok([1, 2, 3][i]) };
///
/// assert_eq!(attempt_catching(index, 1).get_or_else(0), 2);
/// assert!(attempt_catching(index, 10).is_left());
/// ```
pub fn attempt_catching<A, T, E, F>(f: F, args: A) -> Disjunction<E, T>
where
    F: FnOnce(A) -> Result<T, E>,
    E: From<Panicked>,
{
    match catch_unwind(AssertUnwindSafe(move || f(args))) {
        Ok(result) => Disjunction::from_result(result),
        Err(payload) => {
            let panicked = Panicked::from_payload(payload);
            #[cfg(feature = "tracing")]
            tracing::debug!("attempt panicked, producing Left: {}", panicked.message());
            Disjunction::Left(E::from(panicked))
        }
    }
}

/// Await a fallible async operation and capture its outcome.
///
/// Resolution goes right, rejection goes left. The future is awaited once;
/// the caller is resumed when it completes.
///
/// # Example
///
/// ```rust
/// use monad_maniac::disjunction::attempt_async;
///
/// async fn fetch(id: u32) -> Result<String, String> {
///     if id == 1 {
///         Ok("Jake".to_string())
///     } else {
///         Err(format!("no user {}", id))
///     }
/// }
///
/// # tokio_test::block_on(async {
/// assert_eq!(attempt_async(fetch, 1).await.to_string(), "Right(Jake)");
/// assert_eq!(attempt_async(fetch, 2).await.to_string(), "Left(no user 2)");
/// # });
/// ```
pub async fn attempt_async<A, T, E, F, Fut>(f: F, args: A) -> Disjunction<E, T>
where
    F: FnOnce(A) -> Fut,
    Fut: Future<Output = Result<T, E>>,
{
    match f(args).await {
        Ok(value) => Disjunction::Right(value),
        Err(error) => {
            #[cfg(feature = "tracing")]
            tracing::debug!("async attempt rejected, producing Left");
            Disjunction::Left(error)
        }
    }
}

/// Like [`attempt_async`], but a panic while creating or polling the future
/// also becomes a left value.
///
/// # Example
///
/// ```rust
/// use monad_maniac::disjunction::attempt_async_catching;
/// use monad_maniac::Panicked;
///
/// async fn checked(n: i32) -> Result<i32, Panicked> {
///     if n < 0 {
///         panic!("negative input");
///     }
///     Ok(n * 2)
/// }
///
/// # tokio_test::block_on(async {
/// assert_eq!(attempt_async_catching(checked, 4).await.get_or_else(0), 8);
/// let failed = attempt_async_catching(checked, -1).await;
/// assert_eq!(failed.into_left().map(|p| p.message().to_string()), Some("negative input".to_string()));
/// # });
/// ```
pub async fn attempt_async_catching<A, T, E, F, Fut>(f: F, args: A) -> Disjunction<E, T>
where
    F: FnOnce(A) -> Fut,
    Fut: Future<Output = Result<T, E>>,
    E: From<Panicked>,
{
    let outcome = match catch_unwind(AssertUnwindSafe(move || f(args))) {
        Ok(fut) => AssertUnwindSafe(fut).catch_unwind().await,
        Err(payload) => Err(payload),
    };

    match outcome {
        Ok(result) => Disjunction::from_result(result),
        Err(payload) => {
            let panicked = Panicked::from_payload(payload);
            #[cfg(feature = "tracing")]
            tracing::debug!("async attempt panicked, producing Left: {}", panicked.message());
            Disjunction::Left(E::from(panicked))
        }
    }
}

// ========== Container-Last Free Functions ==========

/// See [`Disjunction::map`].
#[inline]
pub fn map<L, R, U, F>(f: F, disjunction: Disjunction<L, R>) -> Disjunction<L, U>
where
    F: FnOnce(R) -> U,
{
    disjunction.map(f)
}

/// See [`Disjunction::or_else`].
#[inline]
pub fn or_else<L, R, F>(f: F, disjunction: Disjunction<L, R>) -> R
where
    F: FnOnce(L) -> R,
{
    disjunction.or_else(f)
}

/// See [`Disjunction::chain`].
#[inline]
pub fn chain<L, R, U, F>(f: F, disjunction: Disjunction<L, R>) -> Disjunction<L, U>
where
    F: FnOnce(R) -> Disjunction<L, U>,
{
    disjunction.chain(f)
}

/// See [`Disjunction::filter`].
#[inline]
pub fn filter<L, R, P>(predicate: P, disjunction: Disjunction<L, R>) -> Disjunction<L, R>
where
    P: FnOnce(&R) -> bool,
    R: Into<L>,
{
    disjunction.filter(predicate)
}

/// See [`Disjunction::get_or_else`].
#[inline]
pub fn get_or_else<L, R>(default: R, disjunction: Disjunction<L, R>) -> R {
    disjunction.get_or_else(default)
}

/// See [`Disjunction::get`].
#[inline]
pub fn get<T>(disjunction: Disjunction<T, T>) -> T {
    disjunction.get()
}

/// See [`Disjunction::case_of`].
#[inline]
pub fn case_of<L, R, T, F, G>(left_fn: F, right_fn: G, disjunction: Disjunction<L, R>) -> T
where
    F: FnOnce(L) -> T,
    G: FnOnce(R) -> T,
{
    disjunction.case_of(left_fn, right_fn)
}

/// See [`Disjunction::to_maybe`].
#[inline]
pub fn to_maybe<L, R>(disjunction: Disjunction<L, R>) -> Optional<R> {
    disjunction.to_maybe()
}

/// See [`Disjunction::is_left`].
#[inline]
pub fn is_left<L, R>(disjunction: &Disjunction<L, R>) -> bool {
    disjunction.is_left()
}

/// See [`Disjunction::is_right`].
#[inline]
pub fn is_right<L, R>(disjunction: &Disjunction<L, R>) -> bool {
    disjunction.is_right()
}

/// Render as `Left(value)` or `Right(value)`.
#[inline]
pub fn to_string<L: fmt::Display, R: fmt::Display>(disjunction: &Disjunction<L, R>) -> String {
    format!("{}", disjunction)
}

// ========== Collection Utilities ==========

/// Partition an iterator of disjunctions into two vectors.
///
/// # Example
///
/// ```rust
/// use monad_maniac::disjunction::{partition, Disjunction};
///
/// let items = vec![
///     Disjunction::left(1),
///     Disjunction::right("a"),
///     Disjunction::left(2),
///     Disjunction::right("b"),
/// ];
///
/// let (lefts, rights) = partition(items);
/// assert_eq!(lefts, vec![1, 2]);
/// assert_eq!(rights, vec!["a", "b"]);
/// ```
pub fn partition<L, R, I>(iter: I) -> (Vec<L>, Vec<R>)
where
    I: IntoIterator<Item = Disjunction<L, R>>,
{
    let mut lefts = Vec::new();
    let mut rights = Vec::new();

    for item in iter {
        match item {
            Disjunction::Left(l) => lefts.push(l),
            Disjunction::Right(r) => rights.push(r),
        }
    }

    (lefts, rights)
}

/// Extract all Right values from an iterator.
pub fn rights<L, R, I>(iter: I) -> impl Iterator<Item = R>
where
    I: IntoIterator<Item = Disjunction<L, R>>,
{
    iter.into_iter().filter_map(|d| d.into_right())
}

/// Extract all Left values from an iterator.
pub fn lefts<L, R, I>(iter: I) -> impl Iterator<Item = L>
where
    I: IntoIterator<Item = Disjunction<L, R>>,
{
    iter.into_iter().filter_map(|d| d.into_left())
}

/// One-argument forms of the binary free functions.
///
/// ```rust
/// use monad_maniac::disjunction::{curried, Disjunction};
///
/// let double = curried::map(|x: i32| x * 2);
/// let right: Disjunction<&str, i32> = Disjunction::right(150);
/// assert_eq!(double(right).get_or_else(0), 300);
/// ```
pub mod curried {
    use crate::curry::partial;
    use crate::Disjunction;

    /// Curried [`map`](super::map).
    pub fn map<L, R, U, F>(f: F) -> impl FnOnce(Disjunction<L, R>) -> Disjunction<L, U>
    where
        F: FnOnce(R) -> U,
    {
        partial(super::map::<L, R, U, F>, f)
    }

    /// Curried [`or_else`](super::or_else).
    pub fn or_else<L, R, F>(f: F) -> impl FnOnce(Disjunction<L, R>) -> R
    where
        F: FnOnce(L) -> R,
    {
        partial(super::or_else::<L, R, F>, f)
    }

    /// Curried [`chain`](super::chain).
    pub fn chain<L, R, U, F>(f: F) -> impl FnOnce(Disjunction<L, R>) -> Disjunction<L, U>
    where
        F: FnOnce(R) -> Disjunction<L, U>,
    {
        partial(super::chain::<L, R, U, F>, f)
    }

    /// Curried [`filter`](super::filter).
    pub fn filter<L, R, P>(predicate: P) -> impl FnOnce(Disjunction<L, R>) -> Disjunction<L, R>
    where
        P: FnOnce(&R) -> bool,
        R: Into<L>,
    {
        partial(super::filter::<L, R, P>, predicate)
    }

    /// Curried [`get_or_else`](super::get_or_else).
    pub fn get_or_else<L, R>(default: R) -> impl FnOnce(Disjunction<L, R>) -> R {
        partial(super::get_or_else::<L, R>, default)
    }
}
