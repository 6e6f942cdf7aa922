use async_trait::async_trait;
use chrono::Utc;
use sqlx::SqlitePool;

use super::{PlayerRow, PLAYER_COLUMNS};
use crate::domain::player::{Player, PlayerName};
use crate::domain::repositories::errors::StoreResult;
use crate::domain::repositories::PlayerRepository;

/// SQLite implementation of PlayerRepository
#[derive(Clone)]
pub struct SqlitePlayerRepository {
    pool: SqlitePool,
}

impl SqlitePlayerRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl PlayerRepository for SqlitePlayerRepository {
    async fn create(&self, name: &PlayerName) -> StoreResult<Player> {
        let created_at = Utc::now();
        let result = sqlx::query(
            r#"
            INSERT INTO players (first_name, last_name, created_at)
            VALUES (?, ?, ?)
            "#,
        )
        .bind(name.first())
        .bind(name.last())
        .bind(created_at)
        .execute(&self.pool)
        .await?;

        Ok(Player::from_persistence(
            result.last_insert_rowid(),
            name.first().to_string(),
            name.last().to_string(),
            None,
            created_at,
        ))
    }

    async fn find_by_id(&self, id: i64) -> StoreResult<Option<Player>> {
        let row = sqlx::query_as::<_, PlayerRow>(&format!(
            "SELECT {PLAYER_COLUMNS} FROM players WHERE id = ?"
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(PlayerRow::into_player))
    }

    async fn find_all(&self) -> StoreResult<Vec<Player>> {
        let rows = sqlx::query_as::<_, PlayerRow>(&format!(
            "SELECT {PLAYER_COLUMNS} FROM players ORDER BY id"
        ))
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(PlayerRow::into_player).collect())
    }
}
