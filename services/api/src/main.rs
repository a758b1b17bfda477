use anyhow::Result;
use tracing::{Level, info};
use tracing_subscriber::FmtSubscriber;

use api::{
    routes,
    session::{self, SessionConfig},
    state::AppState,
};
use common::{database, error::DatabaseError};

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    let subscriber = FmtSubscriber::builder()
        .with_max_level(Level::INFO)
        .finish();

    tracing::subscriber::set_global_default(subscriber).expect("setting default subscriber failed");

    info!("Starting clinic API service");

    // Initialize database connection pool
    let db_config = database::DatabaseConfig::from_env()?;
    let pool = database::init_pool(&db_config).await?;

    // Check database connectivity
    if database::health_check(&pool).await? {
        info!("Database connection successful");
    } else {
        anyhow::bail!("Failed to connect to database");
    }

    // Apply schema migrations
    sqlx::migrate!()
        .run(&pool)
        .await
        .map_err(|e| DatabaseError::Migration(e.to_string()))?;

    let session_config = SessionConfig::from_env();
    let state = AppState::new(pool, session_config.clone());

    // Expired sessions are invisible to lookup either way; the purge task
    // keeps the table from growing without bound.
    session::spawn_expiry_purge(
        state.session_repository.clone(),
        session_config.purge_interval_secs,
    );

    info!("Clinic API service initialized successfully");

    // Start the web server
    let app = routes::create_router(state);

    let port: u16 = std::env::var("PORT")
        .ok()
        .and_then(|s| s.parse().ok())
        .unwrap_or(5000);

    let listener = tokio::net::TcpListener::bind(("0.0.0.0", port)).await?;
    info!("Clinic API service listening on 0.0.0.0:{}", port);

    axum::serve(listener, app).await?;

    Ok(())
}
