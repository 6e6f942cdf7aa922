use tracing_subscriber::EnvFilter;

use teams_api::api::{self, AppState};
use teams_api::config::Config;
use teams_api::infrastructure::database;

#[tokio::main]
async fn main() {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("teams_api=info,tower_http=info")),
        )
        .init();

    let config = Config::from_env();

    tracing::info!("Connecting to database...");
    let pool = database::connect(&config)
        .await
        .expect("Failed to connect to database");

    if config.is_in_memory() {
        tracing::info!("Using in-memory database; data resets on restart");
    }
    tracing::info!("Database ready");

    let app = api::router(AppState::sqlite(pool));

    let addr = config.server_address();
    tracing::info!("Server listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .expect("Failed to bind address");

    axum::serve(listener, app)
        .await
        .expect("Server failed");
}
