use async_trait::async_trait;

use super::errors::StoreResult;
use crate::domain::team::{Team, TeamDetails};

/// Orderings supported by [`TeamRepository::find_all`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TeamOrder {
    /// Insertion order
    #[default]
    Id,
    /// Ascending by name
    Name,
    /// Ascending by location
    Location,
}

/// Repository trait for the Team aggregate
///
/// Every team returned carries its full roster.
#[async_trait]
pub trait TeamRepository: Send + Sync {
    /// Insert a new team with an empty roster; the store assigns the id
    async fn create(&self, details: &TeamDetails) -> StoreResult<Team>;

    /// Find a team by its ID
    async fn find_by_id(&self, id: i64) -> StoreResult<Option<Team>>;

    /// All teams in the requested order
    async fn find_all(&self, order: TeamOrder) -> StoreResult<Vec<Team>>;

    /// Find the team using this exact name
    async fn find_by_name(&self, name: &str) -> StoreResult<Option<Team>>;

    /// Find the team using this exact location
    async fn find_by_location(&self, location: &str) -> StoreResult<Option<Team>>;

    /// Write name, location and roster back
    ///
    /// Fails with [`StoreError::Conflict`](super::StoreError::Conflict) when the
    /// stored version no longer matches `team.version()` or the team is gone.
    async fn update(&self, team: &Team) -> StoreResult<()>;

    async fn exists(&self, id: i64) -> StoreResult<bool>;

    /// Delete a team, leaving its players without a team
    async fn delete(&self, id: i64) -> StoreResult<()>;
}
