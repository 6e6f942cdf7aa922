// API layer module (adapters for controllers)
// Follows Hexagonal Architecture - API is an adapter

pub mod errors;
pub mod extract;
pub mod handlers;

use std::sync::Arc;

use axum::{routing::get, Router};
use sqlx::SqlitePool;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::domain::repositories::{PlayerRepository, TeamRepository};
use crate::infrastructure::repositories::{SqlitePlayerRepository, SqliteTeamRepository};
use handlers::{health, players, teams};

/// Shared handler state: the injected store
#[derive(Clone)]
pub struct AppState {
    pub teams: Arc<dyn TeamRepository>,
    pub players: Arc<dyn PlayerRepository>,
}

impl AppState {
    pub fn new(teams: Arc<dyn TeamRepository>, players: Arc<dyn PlayerRepository>) -> Self {
        Self { teams, players }
    }

    /// State backed by the SQLite repositories
    pub fn sqlite(pool: SqlitePool) -> Self {
        Self::new(
            Arc::new(SqliteTeamRepository::new(pool.clone())),
            Arc::new(SqlitePlayerRepository::new(pool)),
        )
    }
}

/// Builds the full application router
pub fn router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        // Health check
        .route("/health", get(health::health_check))
        // Team routes
        .route("/api/teams", get(teams::list_teams).post(teams::create_team))
        .route("/api/teams/sort", get(teams::list_teams_by_name))
        .route("/api/teams/location", get(teams::list_teams_by_location))
        .route(
            "/api/teams/:id",
            get(teams::get_team)
                .put(teams::replace_team)
                .patch(teams::assign_player)
                .delete(teams::delete_team),
        )
        // Player routes
        .route(
            "/api/players",
            get(players::list_players).post(players::create_player),
        )
        .route("/api/players/:id", get(players::get_player))
        // Middleware
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}
