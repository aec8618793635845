pub mod entities;
pub mod migrator;
pub mod repositories;

use std::time::Duration;

use sea_orm::{ConnectOptions, Database, DatabaseConnection};
use tracing::info;

use crate::config::DatabaseSection;

/// Database configuration
#[derive(Debug, Clone)]
pub struct DatabaseConfig {
    /// Database URL (e.g., "sqlite://./travel.db?mode=rwc")
    pub url: String,
    pub max_connections: u32,
    pub min_connections: u32,
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self::from(&DatabaseSection::default())
    }
}

impl From<&DatabaseSection> for DatabaseConfig {
    fn from(section: &DatabaseSection) -> Self {
        Self {
            url: section.connection_url(),
            max_connections: section.max_connections,
            min_connections: section.min_connections,
        }
    }
}

impl DatabaseConfig {
    /// Create config for a SQLite file
    pub fn sqlite(path: &str) -> Self {
        Self {
            url: format!("sqlite://{}?mode=rwc", path),
            ..Self::default()
        }
    }

    /// Private in-memory SQLite database. A single pooled connection keeps
    /// it alive for the lifetime of the pool.
    pub fn in_memory() -> Self {
        Self {
            url: "sqlite::memory:".to_string(),
            max_connections: 1,
            min_connections: 1,
        }
    }
}

/// Initialize database connection
pub async fn init_database(config: &DatabaseConfig) -> Result<DatabaseConnection, sea_orm::DbErr> {
    info!("Connecting to database: {}", config.url);

    let mut options = ConnectOptions::new(config.url.clone());
    options
        .max_connections(config.max_connections.max(1))
        .min_connections(config.min_connections.min(config.max_connections.max(1)))
        .connect_timeout(Duration::from_secs(10))
        .sqlx_logging_level(log::LevelFilter::Debug);

    let db = Database::connect(options).await?;
    info!("Database connected successfully");
    Ok(db)
}

/// Fresh in-memory database with all migrations applied
#[cfg(test)]
pub(crate) async fn test_connection() -> DatabaseConnection {
    use migrator::{Migrator, MigratorTrait};

    let db = init_database(&DatabaseConfig::in_memory())
        .await
        .expect("in-memory database");
    Migrator::up(&db, None).await.expect("migrations");
    db
}
