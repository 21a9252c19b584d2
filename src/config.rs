// src/config.rs

use std::env;

use dotenvy::dotenv;
use tracing::info;

#[derive(Debug, Clone)]
pub struct Config {
    pub database_url: String,
    pub port: u16,
    pub rust_log: String,

    /// Optional outbound sync target. Passed explicitly into the webhook
    /// delivery call; there is no other sync state.
    pub webhook_url: Option<String>,
}

impl Config {
    pub fn from_env() -> Self {
        dotenv().ok();

        let database_url = env::var("DATABASE_URL").unwrap_or_else(|_| {
            info!("DATABASE_URL not set, using sqlite:content.db");
            "sqlite:content.db".to_string()
        });

        let port = env::var("PORT")
            .ok()
            .and_then(|value| value.parse().ok())
            .unwrap_or(8787);

        let rust_log = env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string());

        let webhook_url = env::var("WEBHOOK_URL").ok();

        Self {
            database_url,
            port,
            rust_log,
            webhook_url,
        }
    }
}
