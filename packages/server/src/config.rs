use anyhow::{Context, Result};
use dotenvy::dotenv;
use std::env;

/// Application configuration loaded from environment variables
#[derive(Debug, Clone)]
pub struct Config {
    pub anthropic_api_key: String,
    pub port: u16,
    pub cors_origins: Vec<String>,
    pub skill_data_dir: String,
    pub model: String,
    pub max_tokens: u32,
    pub temperature: f32,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        // Load .env file if present (development)
        let _ = dotenv();

        Ok(Self {
            anthropic_api_key: env::var("ANTHROPIC_API_KEY")
                .context("ANTHROPIC_API_KEY must be set")?,
            port: env::var("PORT")
                .unwrap_or_else(|_| "8000".to_string())
                .parse()
                .context("PORT must be a valid number")?,
            cors_origins: env::var("CORS_ORIGINS")
                .unwrap_or_else(|_| {
                    "http://localhost:5173,http://localhost:3000".to_string()
                })
                .split(',')
                .map(|origin| origin.trim().to_string())
                .filter(|origin| !origin.is_empty())
                .collect(),
            skill_data_dir: env::var("SKILL_DATA_DIR")
                .unwrap_or_else(|_| "skill-data".to_string()),
            model: env::var("GENERATION_MODEL")
                .unwrap_or_else(|_| "claude-sonnet-4-5-20250929".to_string()),
            max_tokens: env::var("GENERATION_MAX_TOKENS")
                .unwrap_or_else(|_| "8000".to_string())
                .parse()
                .context("GENERATION_MAX_TOKENS must be a valid number")?,
            temperature: env::var("GENERATION_TEMPERATURE")
                .unwrap_or_else(|_| "0.0".to_string())
                .parse()
                .context("GENERATION_TEMPERATURE must be a valid number")?,
        })
    }
}
