//! Services module
//!
//! Everything around the engine that a front end needs: permission checks,
//! the run history, failure notifications, message rendering, and the run
//! command that ties them together.

pub mod access;
pub mod command;
pub mod history;
pub mod notify;
pub mod render;

pub use access::{is_allowed, parse_allow_list};
pub use command::{MoveService, RunCommand, RunReport};
pub use history::{RunHistory, RunRecord};
pub use notify::{ErrorNotification, LogChannel, NotificationChannel, WebhookChannel};
