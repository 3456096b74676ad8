pub mod config;
pub mod email;
pub mod handlers;
pub mod persistence;
pub mod triggers;
