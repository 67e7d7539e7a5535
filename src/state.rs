//! Shared state injected into every handler.

use std::sync::Arc;

use crate::application::services::LinkService;
use crate::infrastructure::persistence::SqliteLinkRepository;

/// Link service bound to the production store.
pub type AppLinkService = LinkService<SqliteLinkRepository>;

/// Application state shared across handlers.
///
/// Built once at startup; cloning only bumps reference counts.
#[derive(Clone)]
pub struct AppState {
    pub link_service: Arc<AppLinkService>,
}

impl AppState {
    pub fn new(link_service: Arc<AppLinkService>) -> Self {
        Self { link_service }
    }
}
