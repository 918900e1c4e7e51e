/// Request middleware
pub mod auth;

pub use auth::{require_admin_session, AdminSession, SESSION_COOKIE};
