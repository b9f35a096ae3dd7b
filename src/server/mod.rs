//! HTTP control surface
//!
//! Lets a chat bot or operator tooling start runs and query the run history
//! over HTTP.

pub mod routes;
pub mod server;
pub mod state;


pub use server::HttpServer;
pub use state::AppState;
