//! Common library for the Brainrot application
//!
//! This crate provides shared infrastructure used by the services in the
//! workspace: PostgreSQL connection configuration, pooling, health checks
//! and the database error type.
//!
//! ```rust,no_run
//! use common::database::{DatabaseConfig, init_pool, health_check};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = DatabaseConfig::default();
//!     let pool = init_pool(&config).await?;
//!     let is_healthy = health_check(&pool).await?;
//!     println!("Database health check: {}", is_healthy);
//!     Ok(())
//! }
//! ```

pub mod database;
pub mod error;
