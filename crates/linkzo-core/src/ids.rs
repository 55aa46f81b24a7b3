//! Identifier types for Linkzo.
//!
//! Both entities use integer row identifiers assigned by the store in
//! insertion order. The newtypes keep an order id from being passed where a
//! creator id is expected.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Macro to define an integer row identifier with standard trait implementations.
///
/// The generated type serializes as a plain JSON number.
macro_rules! row_id_type {
    ($name:ident, $doc:expr) => {
        #[doc = $doc]
        #[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(i64);

        impl $name {
            /// Wrap a raw row identifier.
            #[must_use]
            pub const fn new(id: i64) -> Self {
                Self(id)
            }

            /// Return the raw row identifier.
            #[must_use]
            pub const fn get(self) -> i64 {
                self.0
            }
        }

        impl fmt::Debug for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}({})", stringify!($name), self.0)
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl From<i64> for $name {
            fn from(id: i64) -> Self {
                Self(id)
            }
        }

        impl From<$name> for i64 {
            fn from(id: $name) -> Self {
                id.0
            }
        }
    };
}

row_id_type!(OrderId, "Identifier of a persisted company order.");
row_id_type!(CreatorId, "Identifier of a persisted creator registration.");
