use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Validated first and last name of a new player
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerName {
    first: String,
    last: String,
}

impl PlayerName {
    /// Both parts are trimmed and must be non-empty
    pub fn new(first: impl Into<String>, last: impl Into<String>) -> Result<Self, String> {
        let first = first.into().trim().to_string();
        let last = last.into().trim().to_string();

        if first.is_empty() {
            return Err("Player first name cannot be empty".to_string());
        }
        if last.is_empty() {
            return Err("Player last name cannot be empty".to_string());
        }

        Ok(Self { first, last })
    }

    pub fn first(&self) -> &str {
        &self.first
    }

    pub fn last(&self) -> &str {
        &self.last
    }
}

/// A player record
///
/// `team_id` is the back-reference to the owning team, if any. Players are
/// never updated through the API; only roster assignment and team deletion
/// move the back-reference.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Player {
    id: i64,
    first_name: String,
    last_name: String,
    team_id: Option<i64>,
    created_at: DateTime<Utc>,
}

impl Player {
    pub fn id(&self) -> i64 {
        self.id
    }

    pub fn first_name(&self) -> &str {
        &self.first_name
    }

    pub fn last_name(&self) -> &str {
        &self.last_name
    }

    pub fn team_id(&self) -> Option<i64> {
        self.team_id
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    pub(crate) fn join(&mut self, team_id: i64) {
        self.team_id = Some(team_id);
    }

    /// Reconstructs a Player from persistence layer data
    pub fn from_persistence(
        id: i64,
        first_name: String,
        last_name: String,
        team_id: Option<i64>,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            first_name,
            last_name,
            team_id,
            created_at,
        }
    }
}
