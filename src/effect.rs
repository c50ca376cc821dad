//! Deferred computations
//!
//! `Effect<T>` wraps a zero-argument function. Building and composing an
//! effect never runs it; only [`Effect::run`] or [`Effect::chain`] does.
//! This keeps construction pure and moves execution to one deliberate point
//! at the edge of the program.
//!
//! # Examples
//!
//! ## Composition without execution
//!
//! ```
//! use monad_maniac::Effect;
//!
//! let squared = Effect::from(|| 4).map(|x| x * x);
//! assert_eq!(squared.run(), 16);
//! assert_eq!(Effect::of(222).run(), 222);
//! ```
//!
//! ## Discharging a pipeline
//!
//! ```
//! use std::cell::RefCell;
//! use std::rc::Rc;
//! use monad_maniac::{Disjunction, Effect};
//!
//! let names = Rc::new(RefCell::new(vec!["Jake".to_string()]));
//!
//! let store = Rc::clone(&names);
//! let read_first = move || match store.borrow().first() {
//!     Some(name) => Disjunction::right(name.clone()),
//!     None => Disjunction::left("Name not found".to_string()),
//! };
//!
//! let announced = Effect::from(read_first)
//!     .map(|name| name.map(|n| format!("{} was fired!", n)))
//!     .chain(|name| name.case_of(|err| err, |ok| ok));
//!
//! assert_eq!(announced, "Jake was fired!");
//! ```

use std::fmt;
use std::rc::Rc;

/// A computation that is not executed until it is run.
///
/// The wrapped function is held behind a shared pointer, so cloning an
/// effect is cheap and both clones run the same function. Every call to
/// [`Effect::run`] re-invokes the function; results are never cached.
///
/// # Example
///
/// ```
/// use std::cell::Cell;
/// use std::rc::Rc;
/// use monad_maniac::Effect;
///
/// let runs = Rc::new(Cell::new(0));
/// let counter = Rc::clone(&runs);
/// let effect = Effect::from(move || {
///     counter.set(counter.get() + 1);
///     counter.get()
/// });
///
/// assert_eq!(runs.get(), 0);
/// assert_eq!(effect.run(), 1);
/// assert_eq!(effect.run(), 2);
/// ```
pub struct Effect<T> {
    thunk: Rc<dyn Fn() -> T>,
}

// Manual Debug implementation since Fn is not Debug
impl<T> fmt::Debug for Effect<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Effect")
            .field("thunk", &"<function>")
            .finish()
    }
}

impl<T> Clone for Effect<T> {
    fn clone(&self) -> Self {
        Effect {
            thunk: Rc::clone(&self.thunk),
        }
    }
}

impl<T: 'static> Effect<T> {
    /// Wrap a zero-argument function without calling it.
    ///
    /// # Examples
    ///
    /// ```
    /// use monad_maniac::Effect;
    ///
    /// let effect = Effect::from(|| "deferred".len());
    /// assert_eq!(effect.run(), 8);
    /// ```
    pub fn from<F>(f: F) -> Self
    where
        F: Fn() -> T + 'static,
    {
        Effect { thunk: Rc::new(f) }
    }

    /// Wrap a constant. Each run yields a clone of it.
    ///
    /// # Examples
    ///
    /// ```
    /// use monad_maniac::Effect;
    ///
    /// let effect = Effect::of(vec![1, 2, 3]);
    /// assert_eq!(effect.run(), vec![1, 2, 3]);
    /// assert_eq!(effect.run(), vec![1, 2, 3]);
    /// ```
    pub fn of(value: T) -> Self
    where
        T: Clone,
    {
        Effect::from(move || value.clone())
    }

    /// Execute the wrapped function and return its result.
    pub fn run(&self) -> T {
        #[cfg(feature = "tracing")]
        tracing::trace!("running effect");
        (self.thunk)()
    }

    /// Compose `f` after this effect without running anything.
    ///
    /// The returned effect runs this one and then applies `f` each time it
    /// is itself run.
    ///
    /// # Examples
    ///
    /// ```
    /// use monad_maniac::Effect;
    ///
    /// let effect = Effect::from(|| 5).map(|x| x * 2).map(|x| x + 10);
    /// assert_eq!(effect.run(), 20);
    /// ```
    pub fn map<U, F>(self, f: F) -> Effect<U>
    where
        F: Fn(T) -> U + 'static,
        U: 'static,
    {
        Effect::from(move || f(self.run()))
    }

    /// Run this effect now and hand its result to `f`.
    ///
    /// The result of `f` is returned directly, not wrapped. This is how a
    /// composed pipeline is finally discharged.
    ///
    /// # Examples
    ///
    /// ```
    /// use monad_maniac::Effect;
    ///
    /// let length = Effect::of("hello").chain(|s| s.len());
    /// assert_eq!(length, 5);
    /// ```
    pub fn chain<U, F>(&self, f: F) -> U
    where
        F: FnOnce(T) -> U,
    {
        f(self.run())
    }

    /// Sequence another effect chosen from this one's result, still deferred.
    ///
    /// # Examples
    ///
    /// ```
    /// use monad_maniac::Effect;
    ///
    /// let effect = Effect::of(3).flat_map(|n| Effect::from(move || n * 7));
    /// assert_eq!(effect.run(), 21);
    /// ```
    pub fn flat_map<U, F>(self, f: F) -> Effect<U>
    where
        F: Fn(T) -> Effect<U> + 'static,
        U: 'static,
    {
        Effect::from(move || f(self.run()).run())
    }

    /// Run inside `span` every time this effect runs.
    ///
    /// # Example
    ///
    /// ```rust,ignore
    /// use monad_maniac::Effect;
    /// use tracing::info_span;
    ///
    /// let effect = Effect::from(|| load_user(7))
    ///     .instrument(info_span!("load_user", user_id = 7));
    /// ```
    #[cfg(feature = "tracing")]
    pub fn instrument(self, span: tracing::Span) -> Effect<T> {
        Effect::from(move || {
            let _entered = span.enter();
            self.run()
        })
    }
}



#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn prop_of_run_identity(x: i64) {
            prop_assert_eq!(Effect::of(x).run(), x);
        }

        #[test]
        fn prop_map_composition(x: i32) {
            let f = |v: i32| v.wrapping_add(1);
            let g = |v: i32| v.wrapping_mul(2);
            prop_assert_eq!(
                Effect::of(x).map(f).map(g).run(),
                Effect::of(x).map(move |v| g(f(v))).run()
            );
        }

        #[test]
        fn prop_chain_equals_apply_after_run(x: i32) {
            let f = |v: i32| v.wrapping_sub(3);
            prop_assert_eq!(Effect::of(x).chain(f), f(x));
        }
    }
}
