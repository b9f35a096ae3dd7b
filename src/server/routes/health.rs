//! Health check endpoint

use crate::server::routes::ApiResponse;
use crate::server::state::AppState;
use actix_web::{HttpResponse, web};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Configure health check routes
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/health", web::get().to(health_check));
}

/// Health status response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthStatus {
    pub status: String,
    pub version: String,
    pub git_hash: String,
    pub timestamp: chrono::DateTime<chrono::Utc>,
    /// Runs currently held in the history
    pub recorded_runs: usize,
}

/// Basic health check endpoint
pub async fn health_check(state: web::Data<AppState>) -> HttpResponse {
    debug!("Health check requested");

    let info = crate::build_info();
    let health = HealthStatus {
        status: "healthy".to_string(),
        version: info.version.to_string(),
        git_hash: info.git_hash.to_string(),
        timestamp: chrono::Utc::now(),
        recorded_runs: state.service.history().len(),
    };

    HttpResponse::Ok().json(ApiResponse::success(health))
}
