use axum::{
    extract::{Path, State},
    http::{header, StatusCode},
    response::IntoResponse,
    Json,
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::players::PlayerResponse;
use crate::api::errors::ApiError;
use crate::api::extract::JsonBody;
use crate::api::AppState;
use crate::domain::repositories::{StoreError, TeamOrder, TeamRepository};
use crate::domain::roster;
use crate::domain::team::{Team, TeamDetails};

/// Request body for creating a team
///
/// Any `id` in the payload is ignored; the store assigns one.
#[derive(Debug, Deserialize)]
pub struct CreateTeamRequest {
    pub name: String,
    pub location: String,
}

/// Request body for replacing a team
#[derive(Debug, Deserialize)]
pub struct ReplaceTeamRequest {
    pub id: i64,
    pub name: String,
    pub location: String,
    /// Optimistic concurrency token from a previous read
    pub version: Option<i64>,
}

/// Request body for adding a player to a roster: `5` or `{"player_id": 5}`
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum AssignPlayerRequest {
    Id(i64),
    Object { player_id: i64 },
}

impl AssignPlayerRequest {
    pub fn player_id(&self) -> i64 {
        match self {
            Self::Id(id) | Self::Object { player_id: id } => *id,
        }
    }
}

/// Team as returned by the API, roster included
#[derive(Debug, Serialize)]
pub struct TeamResponse {
    pub id: i64,
    pub name: String,
    pub location: String,
    pub version: i64,
    pub created_at: DateTime<Utc>,
    pub players: Vec<PlayerResponse>,
}

impl From<&Team> for TeamResponse {
    fn from(team: &Team) -> Self {
        Self {
            id: team.id(),
            name: team.name().to_string(),
            location: team.location().to_string(),
            version: team.version(),
            created_at: team.created_at(),
            players: team.players().iter().map(PlayerResponse::from).collect(),
        }
    }
}

async fn list(state: &AppState, order: TeamOrder) -> Result<Json<Vec<TeamResponse>>, ApiError> {
    let teams = state
        .teams
        .find_all(order)
        .await
        .map_err(ApiError::from_read)?;

    Ok(Json(teams.iter().map(TeamResponse::from).collect()))
}

/// Rejects details whose name or location another team already uses
async fn ensure_unique(
    teams: &dyn TeamRepository,
    details: &TeamDetails,
    except: Option<i64>,
) -> Result<(), StoreError> {
    let is_other = |team: &Team| Some(team.id()) != except;

    if teams
        .find_by_name(details.name())
        .await?
        .is_some_and(|t| is_other(&t))
    {
        return Err(StoreError::Duplicate {
            entity: "Team",
            field: "name",
        });
    }

    if teams
        .find_by_location(details.location())
        .await?
        .is_some_and(|t| is_other(&t))
    {
        return Err(StoreError::Duplicate {
            entity: "Team",
            field: "location",
        });
    }

    Ok(())
}

/// List all teams with their rosters
///
/// GET /api/teams
pub async fn list_teams(State(state): State<AppState>) -> Result<Json<Vec<TeamResponse>>, ApiError> {
    list(&state, TeamOrder::Id).await
}

/// List all teams ordered by name
///
/// GET /api/teams/sort
pub async fn list_teams_by_name(
    State(state): State<AppState>,
) -> Result<Json<Vec<TeamResponse>>, ApiError> {
    list(&state, TeamOrder::Name).await
}

/// List all teams ordered by location
///
/// GET /api/teams/location
pub async fn list_teams_by_location(
    State(state): State<AppState>,
) -> Result<Json<Vec<TeamResponse>>, ApiError> {
    list(&state, TeamOrder::Location).await
}

/// Get a team by ID
///
/// GET /api/teams/:id
pub async fn get_team(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<TeamResponse>, ApiError> {
    let team = state
        .teams
        .find_by_id(id)
        .await
        .map_err(ApiError::from_read)?
        .ok_or_else(|| ApiError::not_found(format!("Team not found: {}", id)))?;

    Ok(Json(TeamResponse::from(&team)))
}

/// Create a new team
///
/// POST /api/teams
pub async fn create_team(
    State(state): State<AppState>,
    JsonBody(req): JsonBody<CreateTeamRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let details = TeamDetails::new(req.name, req.location).map_err(ApiError::bad_request)?;

    ensure_unique(state.teams.as_ref(), &details, None)
        .await
        .map_err(ApiError::from_create)?;

    let team = state
        .teams
        .create(&details)
        .await
        .map_err(ApiError::from_create)?;

    tracing::info!(team_id = team.id(), name = team.name(), "Team created");

    Ok((
        StatusCode::CREATED,
        [(header::LOCATION, format!("/api/teams/{}", team.id()))],
        Json(TeamResponse::from(&team)),
    ))
}

/// Replace a team's name and location
///
/// PUT /api/teams/:id
pub async fn replace_team(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    JsonBody(req): JsonBody<ReplaceTeamRequest>,
) -> Result<StatusCode, ApiError> {
    if req.id != id {
        return Err(ApiError::bad_request(format!(
            "Team id {} does not match path id {}",
            req.id, id
        )));
    }

    let details = TeamDetails::new(req.name, req.location).map_err(ApiError::bad_request)?;

    let mut team = state
        .teams
        .find_by_id(id)
        .await?
        .ok_or_else(|| ApiError::not_found(format!("Team not found: {}", id)))?;

    ensure_unique(state.teams.as_ref(), &details, Some(id)).await?;

    team.replace_details(details);
    if let Some(version) = req.version {
        team.expect_version(version);
    }

    roster::save_or_not_found(state.teams.as_ref(), &team).await?;

    tracing::info!(team_id = id, "Team replaced");
    Ok(StatusCode::NO_CONTENT)
}

/// Add a player to a team's roster
///
/// PATCH /api/teams/:id
pub async fn assign_player(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    JsonBody(req): JsonBody<AssignPlayerRequest>,
) -> Result<StatusCode, ApiError> {
    roster::assign_player(
        state.teams.as_ref(),
        state.players.as_ref(),
        id,
        req.player_id(),
    )
    .await?;

    Ok(StatusCode::NO_CONTENT)
}

/// Delete a team; its players stay, without a team
///
/// DELETE /api/teams/:id
pub async fn delete_team(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<StatusCode, ApiError> {
    state.teams.delete(id).await?;

    tracing::info!(team_id = id, "Team deleted");
    Ok(StatusCode::NO_CONTENT)
}
