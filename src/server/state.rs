//! Application state shared across HTTP handlers

use crate::config::ServerConfig;
use crate::services::MoveService;
use std::sync::Arc;

/// HTTP server state shared across handlers
#[derive(Clone)]
pub struct AppState {
    /// Control surface configuration (shared read-only)
    pub server: Arc<ServerConfig>,
    /// Run orchestration, owns the run history
    pub service: MoveService,
}

impl AppState {
    pub fn new(server: ServerConfig, service: MoveService) -> Self {
        Self {
            server: Arc::new(server),
            service,
        }
    }
}
