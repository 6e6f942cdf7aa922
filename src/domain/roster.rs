//! Player-to-team assignment
//!
//! The one rule spanning both aggregates: a player joins at most one roster,
//! and a roster holds at most [`MAX_ROSTER_SIZE`] players.

use thiserror::Error;

use super::player::Player;
use super::repositories::{PlayerRepository, StoreError, TeamRepository};
use super::team::{RosterError, Team, MAX_ROSTER_SIZE};

/// Why an assignment was refused
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AssignmentError {
    #[error("Team not found: {0}")]
    TeamNotFound(i64),

    #[error("Team already has {} players", MAX_ROSTER_SIZE)]
    RosterFull(i64),

    #[error("Player {player_id} already on a team")]
    PlayerAlreadyAssigned { player_id: i64, team_id: i64 },

    #[error("Player not found: {0}")]
    PlayerNotFound(i64),

    #[error(transparent)]
    Store(#[from] StoreError),
}

/// Assigns a player to a team and persists the roster
///
/// Preconditions are checked in this order, first failure wins:
/// 1. team exists
/// 2. roster has room
/// 3. player is not on any roster
/// 4. player exists
///
/// A store conflict on write is reported as [`AssignmentError::TeamNotFound`]
/// when the team has since been deleted and propagated otherwise.
pub async fn assign_player(
    teams: &dyn TeamRepository,
    players: &dyn PlayerRepository,
    team_id: i64,
    player_id: i64,
) -> Result<Team, AssignmentError> {
    let mut team = teams
        .find_by_id(team_id)
        .await?
        .ok_or(AssignmentError::TeamNotFound(team_id))?;

    if team.is_roster_full() {
        return Err(AssignmentError::RosterFull(team_id));
    }

    let player = players.find_by_id(player_id).await?;
    if let Some(owner) = player.as_ref().and_then(Player::team_id) {
        return Err(AssignmentError::PlayerAlreadyAssigned {
            player_id,
            team_id: owner,
        });
    }
    let player = player.ok_or(AssignmentError::PlayerNotFound(player_id))?;

    team.assign(player).map_err(|e| match e {
        RosterError::Full => AssignmentError::RosterFull(team_id),
        RosterError::AlreadyOnRoster(_) => AssignmentError::PlayerAlreadyAssigned {
            player_id,
            team_id,
        },
        RosterError::AssignedElsewhere { team_id, .. } => {
            AssignmentError::PlayerAlreadyAssigned { player_id, team_id }
        }
    })?;

    save_or_not_found(teams, &team)
        .await
        .map_err(|e| match e {
            StoreError::NotFound { .. } => AssignmentError::TeamNotFound(team_id),
            other => AssignmentError::Store(other),
        })?;

    tracing::info!(team_id, player_id, roster_size = team.players().len(), "Player assigned");
    Ok(team)
}

/// Writes a team, resolving a conflict into `NotFound` when the team is gone
///
/// Any other conflict is returned unchanged for the caller to treat as fatal.
pub async fn save_or_not_found(teams: &dyn TeamRepository, team: &Team) -> Result<(), StoreError> {
    match teams.update(team).await {
        Err(conflict @ StoreError::Conflict { .. }) => {
            if teams.exists(team.id()).await? {
                tracing::error!(team_id = team.id(), "Unresolved update conflict");
                Err(conflict)
            } else {
                Err(StoreError::NotFound {
                    entity: "Team",
                    id: team.id(),
                })
            }
        }
        other => other,
    }
}
