//! BusinessQuery - Validated lookup request
//!
//! Pure domain entity without infrastructure dependencies.

use serde::Serialize;

use crate::domain::errors::DomainError;

/// Field-level message for a missing business name
pub const NAME_REQUIRED: &str = "Business name is required";
/// Field-level message for a missing location
pub const LOCATION_REQUIRED: &str = "Location is required";

/// A validated (name, location) pair
///
/// Fields are trimmed and non-empty by construction; downstream code
/// relies on that and does not re-validate.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BusinessQuery {
    name: String,
    location: String,
}

impl BusinessQuery {
    /// Trim and validate raw form input
    pub fn new(name: &str, location: &str) -> Result<Self, DomainError> {
        let name = name.trim();
        if name.is_empty() {
            return Err(DomainError::validation(NAME_REQUIRED));
        }

        let location = location.trim();
        if location.is_empty() {
            return Err(DomainError::validation(LOCATION_REQUIRED));
        }

        Ok(Self {
            name: name.to_string(),
            location: location.to_string(),
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn location(&self) -> &str {
        &self.location
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accepts_valid_input() {
        let query = BusinessQuery::new("Cake & Co", "Mumbai").unwrap();
        assert_eq!(query.name(), "Cake & Co");
        assert_eq!(query.location(), "Mumbai");
    }

    #[test]
    fn test_trims_surrounding_whitespace() {
        let query = BusinessQuery::new("  Cake & Co ", "\tMumbai\n").unwrap();
        assert_eq!(query.name(), "Cake & Co");
        assert_eq!(query.location(), "Mumbai");
    }

    #[test]
    fn test_rejects_empty_name() {
        let err = BusinessQuery::new("   ", "Mumbai").unwrap_err();
        assert_eq!(err, DomainError::Validation(NAME_REQUIRED.to_string()));
    }

    #[test]
    fn test_rejects_empty_location() {
        let err = BusinessQuery::new("Cake & Co", "").unwrap_err();
        assert_eq!(err, DomainError::Validation(LOCATION_REQUIRED.to_string()));
    }

    #[test]
    fn test_name_is_checked_before_location() {
        let err = BusinessQuery::new("", "").unwrap_err();
        assert_eq!(err, DomainError::Validation(NAME_REQUIRED.to_string()));
    }
}
