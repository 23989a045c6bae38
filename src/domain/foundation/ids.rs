//! Strongly-typed identifier value objects.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::ValidationError;

/// Identity of the business entity (talent) a readiness score belongs to.
///
/// Identifiers are issued by the owning CRM store, so the engine treats
/// them as opaque non-empty strings rather than generating its own.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct EntityId(String);

impl EntityId {
    /// Creates a new EntityId, returning error if empty or blank.
    pub fn new(id: impl Into<String>) -> Result<Self, ValidationError> {
        let id = id.into();
        let trimmed = id.trim();
        if trimmed.is_empty() {
            return Err(ValidationError::empty_field("entity_id"));
        }
        Ok(Self(trimmed.to_string()))
    }

    /// Returns the inner string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for EntityId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for EntityId {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl TryFrom<String> for EntityId {
    type Error = ValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<EntityId> for String {
    fn from(id: EntityId) -> Self {
        id.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn entity_id_accepts_non_empty_string() {
        let id = EntityId::new("talent-42").unwrap();
        assert_eq!(id.as_str(), "talent-42");
    }

    #[test]
    fn entity_id_rejects_empty_string() {
        let result = EntityId::new("");
        assert!(matches!(result, Err(ValidationError::EmptyField { .. })));
    }

    #[test]
    fn entity_id_rejects_whitespace() {
        assert!(EntityId::new("   ").is_err());
    }

    #[test]
    fn entity_id_trims_surrounding_whitespace() {
        let id: EntityId = " talent-7 ".parse().unwrap();
        assert_eq!(id.as_str(), "talent-7");
    }

    #[test]
    fn entity_id_displays_correctly() {
        let id = EntityId::new("clx0abc").unwrap();
        assert_eq!(format!("{}", id), "clx0abc");
    }

    #[test]
    fn entity_id_serializes_as_plain_string() {
        let id = EntityId::new("talent-1").unwrap();
        assert_eq!(serde_json::to_string(&id).unwrap(), "\"talent-1\"");
    }

    #[test]
    fn entity_id_deserialization_rejects_empty() {
        let result: Result<EntityId, _> = serde_json::from_str("\"\"");
        assert!(result.is_err());
    }
}
