//! Strongly-typed identifiers used across the console.
//!
//! The backends issue opaque string identifiers, so these are string
//! newtypes rather than raw `Uuid`s; `new()` mints a UUIDv7 for the rare
//! client-originated id (tests, sample data).

use serde::{Deserialize, Serialize};
use uuid::Uuid;

macro_rules! impl_string_newtype {
    ($t:ident) => {
        /// Opaque server-issued identifier.
        #[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $t(String);

        impl $t {
            /// Mint a fresh identifier (UUIDv7, time-ordered).
            ///
            /// Prefer passing ids explicitly in tests for determinism.
            pub fn new() -> Self {
                Self(Uuid::now_v7().to_string())
            }

            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl Default for $t {
            fn default() -> Self {
                Self::new()
            }
        }

        impl core::fmt::Display for $t {
            fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl From<String> for $t {
            fn from(value: String) -> Self {
                Self(value)
            }
        }

        impl From<&str> for $t {
            fn from(value: &str) -> Self {
                Self(value.to_string())
            }
        }

        impl From<$t> for String {
            fn from(value: $t) -> Self {
                value.0
            }
        }
    };
}

impl_string_newtype!(UserId);
impl_string_newtype!(CompanyId);
impl_string_newtype!(InvitationId);
impl_string_newtype!(TransactionId);
impl_string_newtype!(ExpenseId);
impl_string_newtype!(IncomeId);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ids_serialize_as_bare_strings() {
        let id = CompanyId::from("company-1");
        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json, "\"company-1\"");

        let back: CompanyId = serde_json::from_str(&json).unwrap();
        assert_eq!(back, id);
    }

    #[test]
    fn minted_ids_are_unique() {
        assert_ne!(UserId::new(), UserId::new());
    }
}
