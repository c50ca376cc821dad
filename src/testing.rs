//! Testing utilities for code built on these containers
//!
//! Assertion macros that report the unexpected variant on failure, and
//! `proptest` strategies behind the `proptest` feature.
//!
//! # Examples
//!
//! ```rust
//! use monad_maniac::{assert_absent, assert_left, assert_present, assert_right};
//! use monad_maniac::{Disjunction, Optional};
//!
//! assert_present!(Optional::of(42));
//! assert_absent!(Optional::<i32>::of(None));
//!
//! let ok: Disjunction<String, i32> = Disjunction::right(1);
//! assert_right!(ok);
//!
//! let err: Disjunction<String, i32> = Disjunction::left("boom".to_string());
//! assert_left!(err, "boom".to_string());
//! ```

/// Assert that an `Optional` holds a value, optionally a specific one.
///
/// # Example
///
/// ```rust
/// use monad_maniac::{assert_present, Optional};
///
/// assert_present!(Optional::of(3));
/// assert_present!(Optional::of(3).map(|x| x * 2), 6);
/// ```
#[macro_export]
macro_rules! assert_present {
    ($optional:expr) => {
        match $optional {
            $crate::Optional::Present(_) => {}
            $crate::Optional::Absent => {
                panic!("Expected Present, got Absent");
            }
        }
    };
    ($optional:expr, $expected:expr) => {
        match $optional {
            $crate::Optional::Present(v) => {
                assert_eq!(v, $expected);
            }
            $crate::Optional::Absent => {
                panic!("Expected Present({:?}), got Absent", $expected);
            }
        }
    };
}

/// Assert that an `Optional` is absent.
///
/// # Example
///
/// ```rust
/// use monad_maniac::{assert_absent, Optional};
///
/// assert_absent!(Optional::of(3).filter(|x| *x > 10));
/// ```
#[macro_export]
macro_rules! assert_absent {
    ($optional:expr) => {
        match $optional {
            $crate::Optional::Absent => {}
            $crate::Optional::Present(v) => {
                panic!("Expected Absent, got Present: {:?}", v);
            }
        }
    };
}

/// Assert that a `Disjunction` is a left, optionally holding a specific value.
///
/// # Example
///
/// ```rust
/// use monad_maniac::{assert_left, Disjunction};
///
/// let d: Disjunction<&str, i32> = Disjunction::left("err");
/// assert_left!(d);
/// assert_left!(d, "err");
/// ```
#[macro_export]
macro_rules! assert_left {
    ($disjunction:expr) => {
        match $disjunction {
            $crate::Disjunction::Left(_) => {}
            $crate::Disjunction::Right(v) => {
                panic!("Expected Left, got Right: {:?}", v);
            }
        }
    };
    ($disjunction:expr, $expected:expr) => {
        match $disjunction {
            $crate::Disjunction::Left(v) => {
                assert_eq!(v, $expected);
            }
            $crate::Disjunction::Right(v) => {
                panic!("Expected Left({:?}), got Right: {:?}", $expected, v);
            }
        }
    };
}

/// Assert that a `Disjunction` is a right, optionally holding a specific value.
///
/// # Example
///
/// ```rust
/// use monad_maniac::{assert_right, Disjunction};
///
/// let d: Disjunction<&str, i32> = Disjunction::right(150);
/// assert_right!(d.map(|x| x * 2), 300);
/// ```
#[macro_export]
macro_rules! assert_right {
    ($disjunction:expr) => {
        match $disjunction {
            $crate::Disjunction::Right(_) => {}
            $crate::Disjunction::Left(v) => {
                panic!("Expected Right, got Left: {:?}", v);
            }
        }
    };
    ($disjunction:expr, $expected:expr) => {
        match $disjunction {
            $crate::Disjunction::Right(v) => {
                assert_eq!(v, $expected);
            }
            $crate::Disjunction::Left(v) => {
                panic!("Expected Right({:?}), got Left: {:?}", $expected, v);
            }
        }
    };
}

#[cfg(feature = "proptest")]
use proptest::prelude::*;

#[cfg(feature = "proptest")]
use crate::{Disjunction, Optional};

#[cfg(feature = "proptest")]
impl<T> Arbitrary for Optional<T>
where
    T: Arbitrary + Clone + 'static,
{
    type Parameters = T::Parameters;
    type Strategy = BoxedStrategy<Self>;

    fn arbitrary_with(args: Self::Parameters) -> Self::Strategy {
        prop_oneof![
            any_with::<T>(args).prop_map(Optional::Present),
            Just(Optional::Absent),
        ]
        .boxed()
    }
}

#[cfg(feature = "proptest")]
impl<L, R> Arbitrary for Disjunction<L, R>
where
    L: Arbitrary + 'static,
    R: Arbitrary + 'static,
{
    type Parameters = (L::Parameters, R::Parameters);
    type Strategy = BoxedStrategy<Self>;

    fn arbitrary_with(args: Self::Parameters) -> Self::Strategy {
        let (l_params, r_params) = args;
        prop_oneof![
            any_with::<L>(l_params).prop_map(Disjunction::Left),
            any_with::<R>(r_params).prop_map(Disjunction::Right),
        ]
        .boxed()
    }
}
