use crate::core::{AppError, Result};
use serde::Deserialize;
use std::env;

/// Main application configuration
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub app: AppConfig,
    pub rates: RatesConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    pub env: String,
    pub log_level: String,
}

/// Exchange-rate endpoint configuration
#[derive(Debug, Clone, Deserialize)]
pub struct RatesConfig {
    pub base_url: String,
    pub timeout_secs: u64,
    pub max_retries: u32,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        // Load .env file if present
        dotenvy::dotenv().ok();

        let config = Config {
            app: AppConfig {
                env: env::var("APP_ENV").unwrap_or_else(|_| "development".to_string()),
                log_level: env::var("LOG_LEVEL").unwrap_or_else(|_| "info".to_string()),
            },
            rates: RatesConfig::from_env()?,
        };

        Ok(config)
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<()> {
        self.rates.validate()
    }
}

impl RatesConfig {
    pub fn from_env() -> Result<Self> {
        Ok(Self {
            base_url: env::var("RATES_BASE_URL")
                .unwrap_or_else(|_| "http://localhost:8000".to_string()),
            timeout_secs: env::var("RATES_TIMEOUT_SECS")
                .unwrap_or_else(|_| "10".to_string())
                .parse()
                .map_err(|_| AppError::Configuration("Invalid RATES_TIMEOUT_SECS".to_string()))?,
            max_retries: env::var("RATES_MAX_RETRIES")
                .unwrap_or_else(|_| "2".to_string())
                .parse()
                .map_err(|_| AppError::Configuration("Invalid RATES_MAX_RETRIES".to_string()))?,
        })
    }

    pub fn validate(&self) -> Result<()> {
        if self.base_url.trim().is_empty() {
            return Err(AppError::Configuration(
                "Rates base URL must not be empty".to_string(),
            ));
        }

        if self.timeout_secs == 0 {
            return Err(AppError::Configuration(
                "Rate request timeout must be greater than 0".to_string(),
            ));
        }

        Ok(())
    }
}
