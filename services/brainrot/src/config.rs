//! Service configuration loaded from environment variables
//!
//! # Environment Variables
//! - `PORT`: HTTP listen port (default: 4001)
//! - `PGHOST`: Database host (default: "localhost")
//! - `PGPORT`: Database port (default: 5432)
//! - `PGDATABASE`: Database name (default: "brc_brainrot")
//! - `PGUSER`: Database role (default: "brc_brainrot_user")
//! - `PGPASSWORD`: Database password (default: "brc_brainrot_password")
//! - `DATABASE_MAX_CONNECTIONS`: Maximum pool size (default: 10)
//! - `DATABASE_MIN_CONNECTIONS`: Minimum idle connections (default: 1)
//! - `DATABASE_CONNECTION_TIMEOUT`: Pool acquire timeout in seconds (default: 30)
//!
//! The defaults are meant for local development only.

use common::database::DatabaseConfig;
use config::{Config, ConfigError, Environment, Map};
use serde::Deserialize;

/// Flat view of the environment as read by the `config` crate
#[derive(Debug, Deserialize)]
struct EnvSettings {
    port: u16,
    pghost: String,
    pgport: u16,
    pgdatabase: String,
    pguser: String,
    pgpassword: String,
    database_max_connections: u32,
    database_min_connections: u32,
    database_connection_timeout: u64,
}

/// Brainrot service configuration
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// HTTP listen port
    pub port: u16,
    /// Relational store connection settings
    pub database: DatabaseConfig,
}

impl AppConfig {
    /// Load the configuration from the process environment
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::load(Environment::default())
    }

    /// Load the configuration from an explicit set of variables
    pub fn from_map(vars: Map<String, String>) -> Result<Self, ConfigError> {
        Self::load(Environment::default().source(Some(vars)))
    }

    fn load(environment: Environment) -> Result<Self, ConfigError> {
        let defaults = DatabaseConfig::default();

        let settings: EnvSettings = Config::builder()
            .set_default("port", 4001_i64)?
            .set_default("pghost", defaults.host)?
            .set_default("pgport", i64::from(defaults.port))?
            .set_default("pgdatabase", defaults.database)?
            .set_default("pguser", defaults.username)?
            .set_default("pgpassword", defaults.password)?
            .set_default("database_max_connections", i64::from(defaults.max_connections))?
            .set_default("database_min_connections", i64::from(defaults.min_connections))?
            .set_default("database_connection_timeout", defaults.connection_timeout as i64)?
            .add_source(environment)
            .build()?
            .try_deserialize()?;

        Ok(Self {
            port: settings.port,
            database: DatabaseConfig {
                host: settings.pghost,
                port: settings.pgport,
                database: settings.pgdatabase,
                username: settings.pguser,
                password: settings.pgpassword,
                max_connections: settings.database_max_connections,
                min_connections: settings.database_min_connections,
                connection_timeout: settings.database_connection_timeout,
            },
        })
    }
}
