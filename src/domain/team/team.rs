use super::value_objects::TeamDetails;
use crate::domain::player::Player;
use chrono::{DateTime, Utc};
use thiserror::Error;

/// Largest roster a team may carry
pub const MAX_ROSTER_SIZE: usize = 8;

/// Reasons a player cannot join a roster
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RosterError {
    #[error("Team already has {} players", MAX_ROSTER_SIZE)]
    Full,

    #[error("Player {0} is already on this team")]
    AlreadyOnRoster(i64),

    #[error("Player {player_id} already belongs to team {team_id}")]
    AssignedElsewhere { player_id: i64, team_id: i64 },
}

/// Team aggregate root
///
/// Owns its ordered roster. Players point back at the team through
/// [`Player::team_id`]; the team never shares ownership of a player.
///
/// # Invariants
/// - The roster never exceeds [`MAX_ROSTER_SIZE`] players
/// - Every rostered player's `team_id` is this team's id
/// - `version` is the optimistic concurrency token the store checks on update
///
/// # Example
/// ```
/// use chrono::Utc;
/// use teams_api::domain::player::Player;
/// use teams_api::domain::team::{Team, TeamDetails};
///
/// let details = TeamDetails::new("Hawks", "Atlanta").expect("valid details");
/// let mut team = Team::from_persistence(1, details, Vec::new(), 0, Utc::now());
/// let player = Player::from_persistence(7, "Jo".into(), "Lee".into(), None, Utc::now());
///
/// team.assign(player).expect("room on roster");
/// assert!(team.has_player(7));
/// ```
#[derive(Debug, Clone)]
pub struct Team {
    id: i64,
    details: TeamDetails,
    players: Vec<Player>,
    version: i64,
    created_at: DateTime<Utc>,
}

impl Team {
    /// Adds a player to the end of the roster
    ///
    /// # Business Rules
    /// - Roster must have room
    /// - Player must not already be on this or any other team
    pub fn assign(&mut self, mut player: Player) -> Result<(), RosterError> {
        if self.is_roster_full() {
            return Err(RosterError::Full);
        }

        match player.team_id() {
            Some(team_id) if team_id == self.id => {
                return Err(RosterError::AlreadyOnRoster(player.id()))
            }
            Some(team_id) => {
                return Err(RosterError::AssignedElsewhere {
                    player_id: player.id(),
                    team_id,
                })
            }
            // Rostered player with no back-reference: inconsistent persisted state
            None if self.has_player(player.id()) => {
                return Err(RosterError::AlreadyOnRoster(player.id()))
            }
            None => {}
        }

        player.join(self.id);
        self.players.push(player);
        Ok(())
    }

    /// Replaces name and location, leaving the roster untouched
    pub fn replace_details(&mut self, details: TeamDetails) {
        self.details = details;
    }

    /// Pins the version the next update must find in the store
    pub fn expect_version(&mut self, version: i64) {
        self.version = version;
    }

    pub fn is_roster_full(&self) -> bool {
        self.players.len() >= MAX_ROSTER_SIZE
    }

    pub fn has_player(&self, player_id: i64) -> bool {
        self.players.iter().any(|p| p.id() == player_id)
    }

    // ===== Getters =====

    pub fn id(&self) -> i64 {
        self.id
    }

    pub fn details(&self) -> &TeamDetails {
        &self.details
    }

    pub fn name(&self) -> &str {
        self.details.name()
    }

    pub fn location(&self) -> &str {
        self.details.location()
    }

    /// Rostered players in assignment order
    pub fn players(&self) -> &[Player] {
        &self.players
    }

    pub fn version(&self) -> i64 {
        self.version
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Reconstructs a Team from persistence layer data
    ///
    /// Skips roster validation since stored data already satisfied it.
    /// Only to be used by repository implementations and tests.
    pub fn from_persistence(
        id: i64,
        details: TeamDetails,
        players: Vec<Player>,
        version: i64,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            details,
            players,
            version,
            created_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn team(id: i64) -> Team {
        let details = TeamDetails::new("Hawks", "Atlanta").unwrap();
        Team::from_persistence(id, details, Vec::new(), 0, Utc::now())
    }

    fn free_agent(id: i64) -> Player {
        Player::from_persistence(id, "Jo".to_string(), "Lee".to_string(), None, Utc::now())
    }

    #[test]
    fn assign_appends_in_order_and_sets_back_reference() {
        let mut team = team(1);

        team.assign(free_agent(10)).unwrap();
        team.assign(free_agent(4)).unwrap();

        let ids: Vec<i64> = team.players().iter().map(Player::id).collect();
        assert_eq!(ids, vec![10, 4]);
        assert!(team.players().iter().all(|p| p.team_id() == Some(1)));
    }

    #[test]
    fn ninth_player_is_rejected() {
        let mut team = team(1);
        for id in 1..=MAX_ROSTER_SIZE as i64 {
            team.assign(free_agent(id)).unwrap();
        }

        assert!(team.is_roster_full());
        assert_eq!(team.assign(free_agent(99)), Err(RosterError::Full));
        assert_eq!(team.players().len(), MAX_ROSTER_SIZE);
    }

    #[test]
    fn player_on_another_team_is_rejected() {
        let mut team = team(1);
        let player = Player::from_persistence(5, "A".into(), "B".into(), Some(2), Utc::now());

        assert_eq!(
            team.assign(player),
            Err(RosterError::AssignedElsewhere {
                player_id: 5,
                team_id: 2
            })
        );
        assert!(team.players().is_empty());
    }

    #[test]
    fn same_player_twice_is_rejected() {
        let mut team = team(1);
        team.assign(free_agent(3)).unwrap();

        assert_eq!(
            team.assign(free_agent(3)),
            Err(RosterError::AlreadyOnRoster(3))
        );
        assert_eq!(team.players().len(), 1);
    }

    #[test]
    fn replace_details_keeps_roster() {
        let mut team = team(1);
        team.assign(free_agent(3)).unwrap();

        team.replace_details(TeamDetails::new("Nuggets", "Denver").unwrap());

        assert_eq!(team.name(), "Nuggets");
        assert_eq!(team.location(), "Denver");
        assert!(team.has_player(3));
    }

    #[test]
    fn roster_full_message_names_the_cap() {
        assert_eq!(RosterError::Full.to_string(), "Team already has 8 players");
    }
}
