// Repository implementations (data access layer)
// Adapters that implement domain repository interfaces

pub mod sqlite_player_repository;
pub mod sqlite_team_repository;

pub use sqlite_player_repository::SqlitePlayerRepository;
pub use sqlite_team_repository::SqliteTeamRepository;

use chrono::{DateTime, Utc};

use crate::domain::player::Player;

/// Row shape shared by both repositories
#[derive(Debug, sqlx::FromRow)]
pub(crate) struct PlayerRow {
    pub id: i64,
    pub first_name: String,
    pub last_name: String,
    pub team_id: Option<i64>,
    pub created_at: DateTime<Utc>,
}

impl PlayerRow {
    pub fn into_player(self) -> Player {
        Player::from_persistence(
            self.id,
            self.first_name,
            self.last_name,
            self.team_id,
            self.created_at,
        )
    }
}

pub(crate) const PLAYER_COLUMNS: &str = "id, first_name, last_name, team_id, created_at";
