//! Repositories for Brainrot persistence
//!
//! [`BrainrotRepository`] is the storage contract the service depends on.
//! Absence is reported through `Option`/`bool` results, never as an error.

use async_trait::async_trait;
use common::error::DatabaseResult;
use uuid::Uuid;

use crate::models::{Brainrot, NewBrainrot};

pub mod memory;
pub mod postgres;

pub use memory::InMemoryBrainrotRepository;
pub use postgres::PgBrainrotRepository;

/// Storage contract for Brainrot records
#[async_trait]
pub trait BrainrotRepository: Send + Sync + 'static {
    /// All records, newest `created_at` first
    async fn get_all(&self) -> DatabaseResult<Vec<Brainrot>>;

    /// The record with `id`, if any
    async fn get_by_id(&self, id: Uuid) -> DatabaseResult<Option<Brainrot>>;

    /// Persist a new record, assigning its id and creation time
    async fn create(&self, input: &NewBrainrot) -> DatabaseResult<Brainrot>;

    /// Replace every mutable field of the record with `id`.
    ///
    /// `id` and `created_at` are kept. Returns `None` when no record matches.
    async fn update(&self, id: Uuid, input: &NewBrainrot) -> DatabaseResult<Option<Brainrot>>;

    /// Remove the record with `id`, returning whether one was removed
    async fn delete(&self, id: Uuid) -> DatabaseResult<bool>;
}
