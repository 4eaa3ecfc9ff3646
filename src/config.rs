use crate::services::DuplicateNamePolicy;
use std::env;

#[derive(Clone, Debug)]
pub struct Config {
    pub port: u16,
    /// When unset the service runs on the seeded in-memory store.
    pub database_url: Option<String>,
    pub duplicate_name_policy: DuplicateNamePolicy,
    pub static_dir: String,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if it exists
        dotenvy::dotenv().ok();

        let port = env::var("PORT")
            .unwrap_or_else(|_| "3001".to_string())
            .parse()
            .map_err(|_| ConfigError::InvalidPort)?;

        let database_url = env::var("DATABASE_URL").ok();

        let duplicate_name_policy = env::var("DUPLICATE_NAME_POLICY")
            .unwrap_or_else(|_| "reject".to_string())
            .parse()
            .map_err(ConfigError::InvalidDuplicatePolicy)?;

        let static_dir = env::var("STATIC_DIR").unwrap_or_else(|_| "dist".to_string());

        Ok(Config {
            port,
            database_url,
            duplicate_name_policy,
            static_dir,
        })
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid port number")]
    InvalidPort,

    #[error("Invalid duplicate name policy: {0}")]
    InvalidDuplicatePolicy(String),
}
