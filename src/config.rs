use crate::error::{config::ConfigError, AppError};

const DEFAULT_ALLOWED_ORIGIN: &str = "http://localhost:3000";

pub struct Config {
    pub database_url: String,

    pub allowed_origins: Vec<String>,

    pub storage_upload_url: String,
    pub storage_api_key: String,

    pub listen_addr: String,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        Ok(Self {
            database_url: std::env::var("DATABASE_URL")
                .map_err(|_| ConfigError::MissingEnvVar("DATABASE_URL".to_string()))?,
            allowed_origins: std::env::var("ALLOWED_ORIGINS")
                .unwrap_or_else(|_| DEFAULT_ALLOWED_ORIGIN.to_string())
                .split(',')
                .map(|origin| origin.trim().to_string())
                .filter(|origin| !origin.is_empty())
                .collect(),
            storage_upload_url: std::env::var("STORAGE_UPLOAD_URL")
                .map_err(|_| ConfigError::MissingEnvVar("STORAGE_UPLOAD_URL".to_string()))?,
            storage_api_key: std::env::var("STORAGE_API_KEY")
                .map_err(|_| ConfigError::MissingEnvVar("STORAGE_API_KEY".to_string()))?,
            listen_addr: std::env::var("LISTEN_ADDR")
                .unwrap_or_else(|_| "0.0.0.0:3001".to_string()),
        })
    }
}
