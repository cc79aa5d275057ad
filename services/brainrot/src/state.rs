//! Application state shared across handlers

use crate::service::BrainrotService;

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub brainrot_service: BrainrotService,
}
