use async_trait::async_trait;

use super::errors::StoreResult;
use crate::domain::player::{Player, PlayerName};

/// Repository trait for players
#[async_trait]
pub trait PlayerRepository: Send + Sync {
    /// Insert a new, unassigned player
    async fn create(&self, name: &PlayerName) -> StoreResult<Player>;

    async fn find_by_id(&self, id: i64) -> StoreResult<Option<Player>>;

    /// All players ordered by id
    async fn find_all(&self) -> StoreResult<Vec<Player>>;
}
