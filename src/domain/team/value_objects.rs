use serde::{Deserialize, Serialize};

/// Descriptive fields of a team, validated on construction
///
/// # Invariants
/// - Name and location are trimmed
/// - Neither name nor location may be blank
///
/// # Example
/// ```
/// use teams_api::domain::team::value_objects::TeamDetails;
///
/// let details = TeamDetails::new("Hawks", " Atlanta ").expect("valid details");
/// assert_eq!(details.location(), "Atlanta");
/// assert!(TeamDetails::new("", "Atlanta").is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TeamDetails {
    name: String,
    location: String,
}

impl TeamDetails {
    /// Creates validated team details
    ///
    /// # Returns
    /// * `Ok(TeamDetails)` - If both fields are non-blank
    /// * `Err(String)` - Naming the first blank field
    pub fn new(name: impl Into<String>, location: impl Into<String>) -> Result<Self, String> {
        let name = name.into().trim().to_string();
        let location = location.into().trim().to_string();

        if name.is_empty() {
            return Err("Team name cannot be empty".to_string());
        }
        if location.is_empty() {
            return Err("Team location cannot be empty".to_string());
        }

        Ok(Self { name, location })
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
    fn valid_details() {
        let details = TeamDetails::new("Hawks", "Atlanta").unwrap();
        assert_eq!(details.name(), "Hawks");
        assert_eq!(details.location(), "Atlanta");
    }

    #[test]
    fn details_are_trimmed() {
        let details = TeamDetails::new("  Hawks ", "\tAtlanta\n").unwrap();
        assert_eq!(details.name(), "Hawks");
        assert_eq!(details.location(), "Atlanta");
    }

    #[test]
    fn empty_name_fails() {
        let err = TeamDetails::new("", "Atlanta").unwrap_err();
        assert!(err.contains("name"));
    }

    #[test]
    fn blank_location_fails() {
        let err = TeamDetails::new("Hawks", "   ").unwrap_err();
        assert!(err.contains("location"));
    }
}
