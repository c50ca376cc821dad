//! # Monad Maniac
//!
//! Small algebraic containers for code that would otherwise be littered with
//! null checks and early returns.
//!
//! - [`Optional`] holds a value that may be missing.
//! - [`Disjunction`] holds one of two outcomes, conventionally failure on the
//!   left and success on the right.
//! - [`Effect`] defers a computation until it is explicitly run.
//!
//! Every operation is available as an inherent method, as a free function
//! taking the container last, and as a curried form in the `curried`
//! submodule of [`optional`] and [`disjunction`].
//!
//! ## Quick Example
//!
//! ```rust
//! use monad_maniac::{Disjunction, Optional};
//!
//! fn parse_port(raw: Option<&str>) -> Disjunction<String, u16> {
//!     Optional::<&str>::of(raw)
//!         .map_nullable(|s| s.parse::<u16>().ok())
//!         .to_either("port missing or invalid".to_string())
//! }
//!
//! assert_eq!(parse_port(Some("8080")).to_string(), "Right(8080)");
//! assert_eq!(
//!     parse_port(None).to_string(),
//!     "Left(port missing or invalid)"
//! );
//!
//! let doubled = Optional::of(10).map(|x| x * 2);
//! assert_eq!(doubled.to_string(), "Present(20)");
//! ```
//!
//! ## Free functions and currying
//!
//! ```rust
//! use monad_maniac::optional::{self, curried};
//! use monad_maniac::Optional;
//!
//! let add_one = curried::map(|x: i32| x + 1);
//! assert_eq!(add_one(Optional::of(41)), Optional::of(42));
//! assert_eq!(optional::get_or_else(0, Optional::Absent), 0);
//! ```

#![warn(missing_docs)]
#![warn(missing_debug_implementations)]

pub mod curry;
pub mod disjunction;
pub mod effect;
pub mod error;
pub mod optional;
pub mod testing;

#[cfg(feature = "serde")]
mod serde_impl;

// Re-exports
pub use disjunction::Disjunction;
pub use effect::Effect;
pub use error::Panicked;
pub use optional::Optional;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::curry::{flip, partial};
    pub use crate::disjunction::{attempt, attempt_async, Disjunction};
    pub use crate::effect::Effect;
    pub use crate::error::Panicked;
    pub use crate::optional::Optional;
}
