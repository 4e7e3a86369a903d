//! Field value object

use super::error::DomainError;
use serde::{Deserialize, Serialize};

/// The professional field posts are written for (Value Object)
///
/// Examples: "Healthcare", "Artificial Intelligence", "Supply Chain".
/// Surrounding whitespace is stripped; an empty field is rejected.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Field {
    name: String,
}

impl Field {
    /// Create a new field, rejecting empty or whitespace-only names
    pub fn new(name: impl Into<String>) -> Result<Self, DomainError> {
        let name = name.into();
        let trimmed = name.trim();
        if trimmed.is_empty() {
            return Err(DomainError::EmptyField);
        }
        Ok(Self {
            name: trimmed.to_string(),
        })
    }

    /// Get the field name
    pub fn as_str(&self) -> &str {
        &self.name
    }

    /// Consume and return the inner name
    pub fn into_inner(self) -> String {
        self.name
    }
}

impl std::fmt::Display for Field {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name)
    }
}

impl TryFrom<String> for Field {
    type Error = DomainError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        Field::new(s)
    }
}

impl TryFrom<&str> for Field {
    type Error = DomainError;

    fn try_from(s: &str) -> Result<Self, Self::Error> {
        Field::new(s)
    }
}

impl From<Field> for String {
    fn from(field: Field) -> Self {
        field.name
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_field_creation() {
        let field = Field::new("Healthcare").unwrap();
        assert_eq!(field.as_str(), "Healthcare");
    }

    #[test]
    fn test_field_is_trimmed() {
        let field = Field::new("  Supply Chain \n").unwrap();
        assert_eq!(field.to_string(), "Supply Chain");
    }

    #[test]
    fn test_empty_field_rejected() {
        assert_eq!(Field::new(""), Err(DomainError::EmptyField));
        assert_eq!(Field::new("   "), Err(DomainError::EmptyField));
    }

    #[test]
    fn test_field_deserialize_validates() {
        let ok: Field = serde_json::from_str("\"Fintech\"").unwrap();
        assert_eq!(ok.as_str(), "Fintech");
        assert!(serde_json::from_str::<Field>("\"  \"").is_err());
    }
}
