//! Serde support for `Optional` (feature-gated)
//!
//! `Optional<T>` serializes exactly like `Option<T>`: a present value is
//! written as the value itself and `Absent` as the format's null. Missing
//! struct fields therefore need `#[serde(default)]` to deserialize as
//! `Absent`, the same as with `Option`.
//!
//! `Disjunction<L, R>` derives its implementations and uses serde's external
//! tagging, `{"Left": ..}` or `{"Right": ..}`.
//!
//! # Example
//!
//! ```rust,ignore
//! use serde::{Deserialize, Serialize};
//! use monad_maniac::Optional;
//!
//! #[derive(Serialize, Deserialize)]
//! struct Profile {
//!     name: String,
//!     #[serde(default)]
//!     nickname: Optional<String>,
//! }
//!
//! let profile: Profile = serde_json::from_str(r#"{"name": "Jake"}"#).unwrap();
//! assert!(profile.nickname.is_absent());
//! ```

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::Optional;

impl<T> Serialize for Optional<T>
where
    T: Serialize,
{
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Optional::Present(value) => serializer.serialize_some(value),
            Optional::Absent => serializer.serialize_none(),
        }
    }
}

impl<'de, T> Deserialize<'de> for Optional<T>
where
    T: Deserialize<'de>,
{
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Option::<T>::deserialize(deserializer).map(Optional::from_option)
    }
}
