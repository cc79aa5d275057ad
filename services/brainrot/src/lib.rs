//! Brainrot service
//!
//! CRUD over HTTP for Brainrot game entities, stored in PostgreSQL.
//! Requests flow through [`routes`] into [`service::BrainrotService`],
//! which normalizes input and delegates to a
//! [`repositories::BrainrotRepository`].

pub mod config;
pub mod error;
pub mod models;
pub mod repositories;
pub mod routes;
pub mod service;
pub mod state;
