/// API route modules
pub mod albums;
pub mod auth;
pub mod health;
