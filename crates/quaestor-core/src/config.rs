use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    pub database_url: String,
    /// Empty when no credential is configured; the AI classifier is
    /// then never constructed.
    pub anthropic_api_key: String,
    pub server_host: String,
    pub server_port: u16,
    pub db_pool_min_size: u32,
    pub db_pool_max_size: u32,
}

impl AppConfig {
    pub fn from_env() -> Self {
        Self {
            database_url: std::env::var("DATABASE_URL")
                .unwrap_or_else(|_| "postgresql://localhost:5432/quaestor".into()),
            anthropic_api_key: std::env::var("ANTHROPIC_API_KEY").unwrap_or_default(),
            server_host: std::env::var("SERVER_HOST").unwrap_or_else(|_| "0.0.0.0".into()),
            server_port: std::env::var("SERVER_PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(8080),
            db_pool_min_size: std::env::var("DB_POOL_MIN_SIZE")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(1),
            db_pool_max_size: std::env::var("DB_POOL_MAX_SIZE")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(10),
        }
    }
}
