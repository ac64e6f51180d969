//! Strongly-typed identifiers used across the domain.
//!
//! The hosted store hands out opaque keys: UUID strings for most tables, plain
//! integers for some. Identifiers are therefore kept as opaque text and only
//! compared for equality; nothing in the domain parses their contents.

use core::str::FromStr;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::DomainError;

/// Identifier of an inventory batch row.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "RawId", into = "String")]
pub struct InventoryRecordId(String);

/// Identifier of a seedling species/cultivar.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "RawId", into = "String")]
pub struct SeedlingId(String);

/// Identifier of a seedling category.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "RawId", into = "String")]
pub struct CategoryId(String);

/// Identifier of an activity log entry.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "RawId", into = "String")]
pub struct ActivityId(String);

/// Wire representation accepted for identifiers (text or integer keys).
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum RawId {
    Text(String),
    Integer(i64),
}

macro_rules! impl_opaque_id {
    ($t:ty, $name:literal) => {
        impl $t {
            /// Create a fresh identifier.
            ///
            /// Uses UUIDv7 (time-ordered). Prefer passing IDs explicitly in tests
            /// for determinism.
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

        impl From<&str> for $t {
            fn from(value: &str) -> Self {
                Self(value.to_string())
            }
        }

        impl From<Uuid> for $t {
            fn from(value: Uuid) -> Self {
                Self(value.to_string())
            }
        }

        impl From<$t> for String {
            fn from(value: $t) -> Self {
                value.0
            }
        }

        impl FromStr for $t {
            type Err = DomainError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                let trimmed = s.trim();
                if trimmed.is_empty() {
                    return Err(DomainError::invalid_id(format!("{}: empty", $name)));
                }
                Ok(Self(trimmed.to_string()))
            }
        }

        impl TryFrom<RawId> for $t {
            type Error = DomainError;

            fn try_from(raw: RawId) -> Result<Self, Self::Error> {
                match raw {
                    RawId::Text(s) => s.parse(),
                    RawId::Integer(n) => Ok(Self(n.to_string())),
                }
            }
        }
    };
}

impl_opaque_id!(InventoryRecordId, "InventoryRecordId");
impl_opaque_id!(SeedlingId, "SeedlingId");
impl_opaque_id!(CategoryId, "CategoryId");
impl_opaque_id!(ActivityId, "ActivityId");
