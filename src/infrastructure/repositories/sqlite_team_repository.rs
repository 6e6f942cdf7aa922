use std::collections::HashMap;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::SqlitePool;

use super::{PlayerRow, PLAYER_COLUMNS};
use crate::domain::player::Player;
use crate::domain::repositories::errors::StoreResult;
use crate::domain::repositories::{StoreError, TeamOrder, TeamRepository};
use crate::domain::team::{Team, TeamDetails};

const TEAM_COLUMNS: &str = "id, name, location, version, created_at";

#[derive(Debug, sqlx::FromRow)]
struct TeamRow {
    id: i64,
    name: String,
    location: String,
    version: i64,
    created_at: DateTime<Utc>,
}

impl TeamRow {
    fn into_team(self, players: Vec<Player>) -> StoreResult<Team> {
        let details = TeamDetails::new(self.name, self.location).map_err(StoreError::Database)?;
        Ok(Team::from_persistence(
            self.id,
            details,
            players,
            self.version,
            self.created_at,
        ))
    }
}

/// SQLite implementation of TeamRepository
///
/// Rosters live on the players table as a `team_id` back-reference plus a
/// `roster_position`, and are always loaded together with their team.
#[derive(Clone)]
pub struct SqliteTeamRepository {
    pool: SqlitePool,
}

impl SqliteTeamRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    async fn roster(&self, team_id: i64) -> StoreResult<Vec<Player>> {
        let rows = sqlx::query_as::<_, PlayerRow>(&format!(
            "SELECT {PLAYER_COLUMNS} FROM players WHERE team_id = ? ORDER BY roster_position, id"
        ))
        .bind(team_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(PlayerRow::into_player).collect())
    }

    async fn find_one_where(&self, column: &str, value: &str) -> StoreResult<Option<Team>> {
        let row = sqlx::query_as::<_, TeamRow>(&format!(
            "SELECT {TEAM_COLUMNS} FROM teams WHERE {column} = ?"
        ))
        .bind(value)
        .fetch_optional(&self.pool)
        .await?;

        match row {
            Some(row) => {
                let players = self.roster(row.id).await?;
                Ok(Some(row.into_team(players)?))
            }
            None => Ok(None),
        }
    }
}

fn order_clause(order: TeamOrder) -> &'static str {
    match order {
        TeamOrder::Id => "id",
        TeamOrder::Name => "name, id",
        TeamOrder::Location => "location, id",
    }
}

#[async_trait]
impl TeamRepository for SqliteTeamRepository {
    async fn create(&self, details: &TeamDetails) -> StoreResult<Team> {
        let created_at = Utc::now();
        let result = sqlx::query(
            r#"
            INSERT INTO teams (name, location, version, created_at)
            VALUES (?, ?, 0, ?)
            "#,
        )
        .bind(details.name())
        .bind(details.location())
        .bind(created_at)
        .execute(&self.pool)
        .await?;

        Ok(Team::from_persistence(
            result.last_insert_rowid(),
            details.clone(),
            Vec::new(),
            0,
            created_at,
        ))
    }

    async fn find_by_id(&self, id: i64) -> StoreResult<Option<Team>> {
        let row = sqlx::query_as::<_, TeamRow>(&format!(
            "SELECT {TEAM_COLUMNS} FROM teams WHERE id = ?"
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        match row {
            Some(row) => {
                let players = self.roster(row.id).await?;
                Ok(Some(row.into_team(players)?))
            }
            None => Ok(None),
        }
    }

    async fn find_all(&self, order: TeamOrder) -> StoreResult<Vec<Team>> {
        let rows = sqlx::query_as::<_, TeamRow>(&format!(
            "SELECT {TEAM_COLUMNS} FROM teams ORDER BY {}",
            order_clause(order)
        ))
        .fetch_all(&self.pool)
        .await?;

        let rostered = sqlx::query_as::<_, PlayerRow>(&format!(
            "SELECT {PLAYER_COLUMNS} FROM players WHERE team_id IS NOT NULL ORDER BY roster_position, id"
        ))
        .fetch_all(&self.pool)
        .await?;

        let mut rosters: HashMap<i64, Vec<Player>> = HashMap::new();
        for row in rostered {
            if let Some(team_id) = row.team_id {
                rosters.entry(team_id).or_default().push(row.into_player());
            }
        }

        rows.into_iter()
            .map(|row| {
                let players = rosters.remove(&row.id).unwrap_or_default();
                row.into_team(players)
            })
            .collect()
    }

    async fn find_by_name(&self, name: &str) -> StoreResult<Option<Team>> {
        self.find_one_where("name", name).await
    }

    async fn find_by_location(&self, location: &str) -> StoreResult<Option<Team>> {
        self.find_one_where("location", location).await
    }

    async fn update(&self, team: &Team) -> StoreResult<()> {
        let conflict = || StoreError::Conflict {
            entity: "Team",
            id: team.id(),
        };

        let mut tx = self.pool.begin().await?;

        let result = sqlx::query(
            r#"
            UPDATE teams
            SET name = ?, location = ?, version = version + 1
            WHERE id = ? AND version = ?
            "#,
        )
        .bind(team.name())
        .bind(team.location())
        .bind(team.id())
        .bind(team.version())
        .execute(&mut *tx)
        .await?;

        if result.rows_affected() == 0 {
            return Err(conflict());
        }

        for (position, player) in team.players().iter().enumerate() {
            let result = sqlx::query(
                r#"
                UPDATE players
                SET team_id = ?, roster_position = ?
                WHERE id = ? AND (team_id IS NULL OR team_id = ?)
                "#,
            )
            .bind(team.id())
            .bind(position as i64)
            .bind(player.id())
            .bind(team.id())
            .execute(&mut *tx)
            .await?;

            // Player deleted or claimed by another team since it was read
            if result.rows_affected() == 0 {
                return Err(conflict());
            }
        }

        tx.commit().await?;
        Ok(())
    }

    async fn exists(&self, id: i64) -> StoreResult<bool> {
        let found: Option<i64> = sqlx::query_scalar("SELECT id FROM teams WHERE id = ?")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(found.is_some())
    }

    async fn delete(&self, id: i64) -> StoreResult<()> {
        let result = sqlx::query("DELETE FROM teams WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(StoreError::NotFound { entity: "Team", id });
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn orderings_break_ties_by_id() {
        assert_eq!(order_clause(TeamOrder::Id), "id");
        assert_eq!(order_clause(TeamOrder::Name), "name, id");
        assert_eq!(order_clause(TeamOrder::Location), "location, id");
    }
}
