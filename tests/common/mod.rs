//! Shared helpers for integration tests

#![allow(dead_code)]

use async_trait::async_trait;
use sqlx::SqlitePool;

use teams_api::config::Config;
use teams_api::domain::repositories::errors::StoreResult;
use teams_api::domain::repositories::{TeamOrder, TeamRepository};
use teams_api::domain::team::{Team, TeamDetails};
use teams_api::infrastructure::database;
use teams_api::infrastructure::repositories::SqliteTeamRepository;

/// Fresh, migrated in-memory database; every call gets its own
pub async fn setup_test_db() -> SqlitePool {
    database::connect(&Config::default())
        .await
        .expect("Failed to open test database")
}

/// What a competing writer does just before our update lands
#[derive(Debug, Clone, Copy)]
pub enum Race {
    DeleteTeam,
    ModifyTeam,
}

/// Team repository that lets a competing writer win every update race
pub struct RacingTeamRepository {
    pub inner: SqliteTeamRepository,
    pub race: Race,
}

impl RacingTeamRepository {
    pub fn new(pool: SqlitePool, race: Race) -> Self {
        Self {
            inner: SqliteTeamRepository::new(pool),
            race,
        }
    }
}

#[async_trait]
impl TeamRepository for RacingTeamRepository {
    async fn create(&self, details: &TeamDetails) -> StoreResult<Team> {
        self.inner.create(details).await
    }

    async fn find_by_id(&self, id: i64) -> StoreResult<Option<Team>> {
        self.inner.find_by_id(id).await
    }

    async fn find_all(&self, order: TeamOrder) -> StoreResult<Vec<Team>> {
        self.inner.find_all(order).await
    }

    async fn find_by_name(&self, name: &str) -> StoreResult<Option<Team>> {
        self.inner.find_by_name(name).await
    }

    async fn find_by_location(&self, location: &str) -> StoreResult<Option<Team>> {
        self.inner.find_by_location(location).await
    }

    async fn update(&self, team: &Team) -> StoreResult<()> {
        match self.race {
            Race::DeleteTeam => self.inner.delete(team.id()).await?,
            Race::ModifyTeam => self.inner.update(team).await?,
        }
        self.inner.update(team).await
    }

    async fn exists(&self, id: i64) -> StoreResult<bool> {
        self.inner.exists(id).await
    }

    async fn delete(&self, id: i64) -> StoreResult<()> {
        self.inner.delete(id).await
    }
}
