use axum::{
    extract::{Path, State},
    http::{header, StatusCode},
    response::IntoResponse,
    Json,
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::api::errors::ApiError;
use crate::api::extract::JsonBody;
use crate::api::AppState;
use crate::domain::player::{Player, PlayerName};

/// Request body for creating a player
#[derive(Debug, Deserialize)]
pub struct CreatePlayerRequest {
    pub first_name: String,
    pub last_name: String,
}

#[derive(Debug, Serialize)]
pub struct PlayerResponse {
    pub id: i64,
    pub first_name: String,
    pub last_name: String,
    pub team_id: Option<i64>,
    pub created_at: DateTime<Utc>,
}

impl From<&Player> for PlayerResponse {
    fn from(player: &Player) -> Self {
        Self {
            id: player.id(),
            first_name: player.first_name().to_string(),
            last_name: player.last_name().to_string(),
            team_id: player.team_id(),
            created_at: player.created_at(),
        }
    }
}

/// Create a new player, not yet on any team
///
/// POST /api/players
pub async fn create_player(
    State(state): State<AppState>,
    JsonBody(req): JsonBody<CreatePlayerRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let name = PlayerName::new(req.first_name, req.last_name).map_err(ApiError::bad_request)?;

    let player = state
        .players
        .create(&name)
        .await
        .map_err(ApiError::from_create)?;

    tracing::info!(player_id = player.id(), "Player created");

    Ok((
        StatusCode::CREATED,
        [(header::LOCATION, format!("/api/players/{}", player.id()))],
        Json(PlayerResponse::from(&player)),
    ))
}

/// GET /api/players
pub async fn list_players(
    State(state): State<AppState>,
) -> Result<Json<Vec<PlayerResponse>>, ApiError> {
    let players = state
        .players
        .find_all()
        .await
        .map_err(ApiError::from_read)?;

    Ok(Json(players.iter().map(PlayerResponse::from).collect()))
}

/// GET /api/players/:id
pub async fn get_player(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<PlayerResponse>, ApiError> {
    let player = state
        .players
        .find_by_id(id)
        .await
        .map_err(ApiError::from_read)?
        .ok_or_else(|| ApiError::not_found(format!("Player not found: {}", id)))?;

    Ok(Json(PlayerResponse::from(&player)))
}
