//! HTTP server core implementation

use crate::config::Settings;
use crate::server::routes;
use crate::server::state::AppState;
use crate::services::MoveService;
use crate::utils::error::{MoveError, Result};
use actix_web::{
    App, HttpServer as ActixHttpServer,
    middleware::{DefaultHeaders, Logger},
    web,
};
use tracing::info;

/// HTTP server
pub struct HttpServer {
    bind_addr: String,
    state: AppState,
}

impl HttpServer {
    /// Create a new HTTP server
    pub fn new(settings: &Settings) -> Result<Self> {
        info!("Creating HTTP server");

        let service = MoveService::from_settings(settings)?;
        let state = AppState::new(settings.server.clone(), service);

        Ok(Self {
            bind_addr: settings.server.address(),
            state,
        })
    }

    /// Create the Actix-web application
    pub fn create_app(
        state: web::Data<AppState>,
    ) -> App<
        impl actix_web::dev::ServiceFactory<
            actix_web::dev::ServiceRequest,
            Config = (),
            Response = actix_web::dev::ServiceResponse<impl actix_web::body::MessageBody>,
            Error = actix_web::Error,
            InitError = (),
        >,
    > {
        App::new()
            .app_data(state)
            .wrap(Logger::default())
            .wrap(DefaultHeaders::new().add(("Server", "move-runner")))
            .configure(routes::health::configure_routes)
            .configure(routes::control::configure_routes)
    }

    /// Start the HTTP server
    pub async fn start(self) -> Result<()> {
        info!("Starting HTTP server on {}", self.bind_addr);
        info!("   GET  /health - Health check");
        info!("   POST /v1/run - Run a named config");
        info!("   GET  /v1/status - Recent runs");

        let state = web::Data::new(self.state);

        let server = ActixHttpServer::new(move || Self::create_app(state.clone()))
            .bind(&self.bind_addr)
            .map_err(|e| {
                MoveError::configuration(format!("Failed to bind {}: {}", self.bind_addr, e))
            })?
            .run();

        server.await?;

        info!("HTTP server stopped");
        Ok(())
    }
}
