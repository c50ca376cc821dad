//! Error value captured from a panicking attempt
//!
//! Container operations never fail on their own. The one failure this crate
//! manufactures is [`Panicked`], the left side produced when
//! [`attempt_catching`](crate::disjunction::attempt_catching) or
//! [`attempt_async_catching`](crate::disjunction::attempt_async_catching)
//! observes a panic instead of a return value.
//!
//! # Example
//!
//! ```
//! use monad_maniac::disjunction::attempt_catching;
//! use monad_maniac::Panicked;
//!
//! let result = attempt_catching(|n: i32| -> Result<i32, Panicked> {
//!     if n == 0 {
//!         panic!("division by zero");
//!     }
//!     Ok(100 / n)
//! }, 0);
//!
//! assert!(result.is_left());
//! assert_eq!(result.into_left().unwrap().message(), "division by zero");
//! ```

use std::any::Any;
use std::error::Error as StdError;
use std::fmt;

const OPAQUE_PAYLOAD: &str = "panic with a non-string payload";

/// A panic converted into a value.
///
/// Holds the panic message when the payload was a `&str` or `String`,
/// otherwise a fixed description.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Panicked {
    message: String,
}

impl Panicked {
    /// Create a `Panicked` with the given message.
    pub fn new(message: impl Into<String>) -> Self {
        Panicked {
            message: message.into(),
        }
    }

    /// Build from the payload returned by `catch_unwind`.
    pub fn from_payload(payload: Box<dyn Any + Send>) -> Self {
        let message = match payload.downcast::<String>() {
            Ok(message) => *message,
            Err(payload) => match payload.downcast::<&'static str>() {
                Ok(message) => (*message).to_string(),
                Err(_) => OPAQUE_PAYLOAD.to_string(),
            },
        };
        Panicked { message }
    }

    /// The panic message.
    pub fn message(&self) -> &str {
        &self.message
    }
}

impl fmt::Display for Panicked {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "panicked: {}", self.message)
    }
}

impl StdError for Panicked {}
