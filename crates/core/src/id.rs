//! Unique entity identifier value object.

use core::str::FromStr;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::{DomainError, DomainResult};
use crate::value_object::ValueObject;

/// Identity of an entity: a UUID kept in its 8-4-4-4-12 textual form.
///
/// The string is validated once, when the identifier is built, and never
/// changes afterwards. Equality is plain string equality.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct UniqueEntityId {
    value: String,
    uuid: Uuid,
}

impl UniqueEntityId {
    /// Generate a fresh random (v4) identifier.
    pub fn new() -> Self {
        Self::from(Uuid::new_v4())
    }

    /// Adopt a caller-supplied identifier, keeping the string exactly as given.
    pub fn parse(value: impl Into<String>) -> DomainResult<Self> {
        let value = value.into();
        let uuid = if is_valid_uuid(&value) {
            Uuid::parse_str(&value).ok()
        } else {
            None
        };
        let Some(uuid) = uuid else {
            tracing::debug!(value = %value, "rejected malformed entity identifier");
            return Err(DomainError::InvalidUuid);
        };
        Ok(Self { value, uuid })
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    pub fn as_uuid(&self) -> Uuid {
        self.uuid
    }
}

impl Default for UniqueEntityId {
    fn default() -> Self {
        Self::new()
    }
}

impl ValueObject for UniqueEntityId {}

impl core::fmt::Display for UniqueEntityId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(&self.value)
    }
}

impl AsRef<str> for UniqueEntityId {
    fn as_ref(&self) -> &str {
        &self.value
    }
}

impl From<Uuid> for UniqueEntityId {
    /// Renders lowercase hyphenated text, checked against the same grammar as
    /// [`UniqueEntityId::parse`] in every build profile.
    fn from(uuid: Uuid) -> Self {
        let value = uuid.hyphenated().to_string();
        assert!(
            is_valid_uuid(&value),
            "hyphenated uuid `{value}` does not match the identifier grammar"
        );
        Self { value, uuid }
    }
}

impl From<UniqueEntityId> for String {
    fn from(id: UniqueEntityId) -> Self {
        id.value
    }
}

impl TryFrom<String> for UniqueEntityId {
    type Error = DomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(value)
    }
}

impl TryFrom<&str> for UniqueEntityId {
    type Error = DomainError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::parse(value)
    }
}

impl FromStr for UniqueEntityId {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

/// Hex groups of 8-4-4-4-12 separated by hyphens, case-insensitive.
fn is_valid_uuid(s: &str) -> bool {
    const HYPHENS: [usize; 4] = [8, 13, 18, 23];

    s.len() == 36
        && s.bytes().enumerate().all(|(i, b)| {
            if HYPHENS.contains(&i) {
                b == b'-'
            } else {
                b.is_ascii_hexdigit()
            }
        })
}
