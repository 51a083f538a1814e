use anyhow::{Context, Result};

use crate::random_user::DEFAULT_RANDOM_USER_URL;

/// Application configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    pub database_url: String,
    pub random_user_url: String,
    pub port: u16,
    pub rust_log: String,
    pub seed_demo_data: bool,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            database_url: require_env("DATABASE_URL")?,
            random_user_url: std::env::var("RANDOM_USER_URL")
                .unwrap_or_else(|_| DEFAULT_RANDOM_USER_URL.to_string()),
            port: std::env::var("PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
            seed_demo_data: std::env::var("SEED_DEMO_DATA")
                .map(|v| v == "true" || v == "1")
                .unwrap_or(false),
        })
    }
}

fn require_env(key: &str) -> Result<String> {
    std::env::var(key).with_context(|| format!("Required environment variable '{key}' is not set"))
}
