//! Database module for handling PostgreSQL connections and operations
//!
//! This module provides connection pooling, configuration, and health checks
//! for the PostgreSQL database. The pool is created once at startup and
//! handed to repositories explicitly; every query checks a connection out of
//! it and returns the connection when the query future completes or is dropped.

use crate::error::{DatabaseError, DatabaseResult};
use sqlx::{
    PgPool,
    postgres::{PgConnectOptions, PgPoolOptions},
};
use std::time::Duration;
use tracing::{error, info};

/// Database configuration struct
#[derive(Clone)]
pub struct DatabaseConfig {
    /// Database server host
    pub host: String,
    /// Database server port
    pub port: u16,
    /// Database name
    pub database: String,
    /// Role used to connect
    pub username: String,
    /// Password for `username`
    pub password: String,
    /// Maximum number of connections in the pool
    pub max_connections: u32,
    /// Minimum number of idle connections kept in the pool
    pub min_connections: u32,
    /// Pool acquire timeout in seconds
    pub connection_timeout: u64,
}

impl Default for DatabaseConfig {
    /// Local development defaults
    fn default() -> Self {
        Self {
            host: "localhost".to_string(),
            port: 5432,
            database: "brc_brainrot".to_string(),
            username: "brc_brainrot_user".to_string(),
            password: "brc_brainrot_password".to_string(),
            max_connections: 10,
            min_connections: 1,
            connection_timeout: 30,
        }
    }
}

// Hand-written so the password never ends up in logs.
impl std::fmt::Debug for DatabaseConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DatabaseConfig")
            .field("host", &self.host)
            .field("port", &self.port)
            .field("database", &self.database)
            .field("username", &self.username)
            .field("password", &"***")
            .field("max_connections", &self.max_connections)
            .field("min_connections", &self.min_connections)
            .field("connection_timeout", &self.connection_timeout)
            .finish()
    }
}

impl DatabaseConfig {
    /// Build the connection options for this configuration
    pub fn connect_options(&self) -> PgConnectOptions {
        PgConnectOptions::new()
            .host(&self.host)
            .port(self.port)
            .database(&self.database)
            .username(&self.username)
            .password(&self.password)
    }
}

/// Initialize a PostgreSQL connection pool
///
/// # Arguments
///
/// * `config` - Database configuration
///
/// # Returns
///
/// * `DatabaseResult<PgPool>` - PostgreSQL connection pool or error
pub async fn init_pool(config: &DatabaseConfig) -> DatabaseResult<PgPool> {
    if config.max_connections == 0 {
        return Err(DatabaseError::Configuration(
            "max_connections must be greater than zero".to_string(),
        ));
    }

    info!(
        host = %config.host,
        database = %config.database,
        "Initializing database connection pool"
    );

    let pool = PgPoolOptions::new()
        .max_connections(config.max_connections)
        .min_connections(config.min_connections.min(config.max_connections))
        .acquire_timeout(Duration::from_secs(config.connection_timeout))
        .connect_with(config.connect_options())
        .await
        .map_err(DatabaseError::Connection)?;

    info!("Database connection pool initialized successfully");
    Ok(pool)
}

/// Check database connectivity
///
/// # Arguments
///
/// * `pool` - PostgreSQL connection pool
///
/// # Returns
///
/// * `DatabaseResult<bool>` - True if the database answered, false otherwise
pub async fn health_check(pool: &PgPool) -> DatabaseResult<bool> {
    match sqlx::query("SELECT 1").execute(pool).await {
        Ok(_) => Ok(true),
        Err(e) => {
            error!("Database health check failed: {}", e);
            Ok(false)
        }
    }
}
