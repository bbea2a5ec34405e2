//! Shared application state injected into all Axum handlers.

use std::sync::Arc;

use crate::service::RosterService;

/// Shared application state available to all handlers via Axum's
/// `State` extractor.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Roster service for all business logic.
    pub roster_service: Arc<RosterService>,
}
