//! Server configuration from environment variables.

use std::env;

pub const DEFAULT_PORT: u16 = 5001;
pub const DEFAULT_MATCH_THRESHOLD: f64 = 0.6;

#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    /// Comma-separated allowed origins, or "*" for permissive CORS.
    pub cors_allow_origins: String,
    /// Minimum match ratio for a recipe to be recommended, in [0, 1].
    pub match_threshold: f64,
    pub google_api_key: Option<String>,
    pub google_cse_id: Option<String>,
}

impl Config {
    pub fn from_env() -> Self {
        let port = env::var("PORT")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(DEFAULT_PORT);

        let cors_allow_origins =
            env::var("CORS_ALLOW_ORIGINS").unwrap_or_else(|_| "*".to_string());

        let match_threshold = match env::var("MATCH_THRESHOLD") {
            Ok(raw) => match raw.parse::<f64>() {
                Ok(t) if (0.0..=1.0).contains(&t) => t,
                _ => {
                    tracing::warn!(%raw, "invalid MATCH_THRESHOLD, using default");
                    DEFAULT_MATCH_THRESHOLD
                }
            },
            Err(_) => DEFAULT_MATCH_THRESHOLD,
        };

        Self {
            port,
            cors_allow_origins,
            match_threshold,
            google_api_key: non_empty("GOOGLE_API_KEY"),
            google_cse_id: non_empty("GOOGLE_CSE_ID"),
        }
    }
}

fn non_empty(var: &str) -> Option<String> {
    env::var(var)
        .ok()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}
