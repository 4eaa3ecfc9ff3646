pub mod api;
pub mod config;
pub mod database;
pub mod domain;
pub mod models;
pub mod router;
pub mod services;

pub use config::*;
pub use models::*;
