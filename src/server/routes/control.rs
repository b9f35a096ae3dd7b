//! Run and status endpoints

use crate::server::routes::ApiResponse;
use crate::server::state::AppState;
use crate::services::RunCommand;
use crate::services::render::render_history;
use crate::utils::error::MoveError;
use actix_web::{HttpRequest, HttpResponse, web};
use serde::Deserialize;
use tracing::debug;

/// Default number of runs returned by `/v1/status`
pub const DEFAULT_STATUS_LIMIT: usize = 10;

/// Configure control routes
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/v1")
            .route("/run", web::post().to(run_config))
            .route("/status", web::get().to(run_status)),
    );
}

/// Body of `POST /v1/run`
#[derive(Debug, Clone, Deserialize)]
pub struct RunRequest {
    pub name: String,
    /// Operator tag, defaults to `anonymous`
    #[serde(default)]
    pub user: Option<String>,
    #[serde(default)]
    pub roles: Vec<String>,
}

/// Query of `GET /v1/status`
#[derive(Debug, Clone, Deserialize)]
pub struct StatusQuery {
    pub limit: Option<usize>,
    /// `text` returns the rendered listing instead of JSON records
    pub format: Option<String>,
}

/// Check the bearer token when one is configured
fn authorize(req: &HttpRequest, state: &AppState) -> Result<(), MoveError> {
    let Some(expected) = state.server.control_token.as_deref() else {
        return Ok(());
    };

    let provided = req
        .headers()
        .get(actix_web::http::header::AUTHORIZATION)
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.strip_prefix("Bearer "));

    match provided {
        Some(token) if constant_time_eq(token, expected) => Ok(()),
        Some(_) => Err(MoveError::unauthorized("invalid control token")),
        None => Err(MoveError::unauthorized("missing bearer token")),
    }
}

/// Constant-time string comparison
fn constant_time_eq(a: &str, b: &str) -> bool {
    if a.len() != b.len() {
        return false;
    }

    let mut result = 0u8;
    for (a_byte, b_byte) in a.bytes().zip(b.bytes()) {
        result |= a_byte ^ b_byte;
    }

    result == 0
}

/// Run a named config and wait for the batch to settle
pub async fn run_config(
    req: HttpRequest,
    state: web::Data<AppState>,
    body: web::Json<RunRequest>,
) -> Result<HttpResponse, MoveError> {
    authorize(&req, &state)?;

    let body = body.into_inner();
    debug!(name = %body.name, "Run requested");

    let command = RunCommand {
        name: body.name,
        user_tag: body.user.unwrap_or_else(|| "anonymous".to_string()),
        roles: body.roles.into_iter().collect(),
    };

    let report = state.service.run(command).await?;
    Ok(HttpResponse::Ok().json(ApiResponse::success(report)))
}

/// Most recent runs, newest first
pub async fn run_status(
    req: HttpRequest,
    state: web::Data<AppState>,
    query: web::Query<StatusQuery>,
) -> Result<HttpResponse, MoveError> {
    authorize(&req, &state)?;

    let limit = query.limit.unwrap_or(DEFAULT_STATUS_LIMIT);
    let records = state.service.status(limit);

    if query.format.as_deref() == Some("text") {
        return Ok(HttpResponse::Ok()
            .content_type("text/plain; charset=utf-8")
            .body(render_history(&records)));
    }
    Ok(HttpResponse::Ok().json(ApiResponse::success(records)))
}
