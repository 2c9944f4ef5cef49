pub mod auth;
pub mod config;

pub use auth::*;
pub use config::Config;
