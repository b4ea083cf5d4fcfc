use std::env;

use persistence::db::{DatabaseConfig, create_postgres_pool, run_migrations};
use sqlx::PgPool;

const DEFAULT_MIGRATIONS_PATH: &str = "infrastructure/persistence/migrations";

/// Where the price catalog lives
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CatalogConfig {
    /// PostgreSQL database, migrated on startup
    Postgres {
        database_url: String,
        migrations_path: String,
        max_connections: Option<u32>,
    },
    /// Process memory, preloaded with the reference tariffs
    InMemory,
}

impl CatalogConfig {
    /// Load catalog configuration from environment variables
    ///
    /// Environment variables:
    /// - DATABASE_URL: PostgreSQL connection string (optional; in-memory catalog when unset)
    /// - MIGRATIONS_PATH: SQL migrations directory
    ///   (default: "infrastructure/persistence/migrations")
    /// - DATABASE_MAX_CONNECTIONS: pool size (default: 5)
    pub fn from_env() -> Self {
        Self::from_values(
            env::var("DATABASE_URL").ok(),
            env::var("MIGRATIONS_PATH").ok(),
            env::var("DATABASE_MAX_CONNECTIONS").ok(),
        )
    }

    fn from_values(
        database_url: Option<String>,
        migrations_path: Option<String>,
        max_connections: Option<String>,
    ) -> Self {
        match database_url.filter(|url| !url.trim().is_empty()) {
            Some(database_url) => CatalogConfig::Postgres {
                database_url,
                migrations_path: migrations_path
                    .unwrap_or_else(|| DEFAULT_MIGRATIONS_PATH.to_string()),
                max_connections: max_connections
                    .and_then(|value| value.trim().parse().ok())
                    .filter(|&value| value > 0),
            },
            None => CatalogConfig::InMemory,
        }
    }
}

/// Initialize the database connection pool and bring the schema up to date
///
/// # Errors
/// Returns error if the connection or a migration fails
pub async fn init_database(
    database_url: &str,
    migrations_path: &str,
    max_connections: Option<u32>,
) -> anyhow::Result<PgPool> {
    let mut config = DatabaseConfig::new(database_url.to_string());
    if let Some(max_connections) = max_connections {
        config = config.with_max_connections(max_connections);
    }

    let pool = create_postgres_pool(&config).await?;
    run_migrations(&pool, migrations_path).await?;
    Ok(pool)
}
