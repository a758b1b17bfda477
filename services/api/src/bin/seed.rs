//! Seed a test practitioner account for manual testing.

use anyhow::Result;
use tracing::{Level, info};
use tracing_subscriber::FmtSubscriber;

use api::{models::NewDoctor, repositories::DoctorRepository};
use common::{database, error::DatabaseError};

#[tokio::main]
async fn main() -> Result<()> {
    let subscriber = FmtSubscriber::builder()
        .with_max_level(Level::INFO)
        .finish();

    tracing::subscriber::set_global_default(subscriber).expect("setting default subscriber failed");

    let db_config = database::DatabaseConfig::from_env()?;
    let pool = database::init_pool(&db_config).await?;
    sqlx::migrate!()
        .run(&pool)
        .await
        .map_err(|e| DatabaseError::Migration(e.to_string()))?;

    let repository = DoctorRepository::new(pool);

    if repository.find_by_username("testdoctor").await?.is_some() {
        info!("Test doctor already exists");
        return Ok(());
    }

    repository
        .create(&NewDoctor {
            username: "testdoctor".to_string(),
            password: "password123".to_string(),
            full_name: Some("Test Doctor".to_string()),
            mobile: Some("1234567890".to_string()),
            email: Some("test@doctor.com".to_string()),
        })
        .await?;

    info!("Test doctor created (username: testdoctor, password: password123)");

    Ok(())
}
