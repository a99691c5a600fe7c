//! Configuration management for the Halal Compliance Dashboard
//!
//! Supports hierarchical configuration loading:
//! 1. Default values in code
//! 2. Configuration files (development.toml, production.toml)
//! 3. Environment variable overrides with HCD_ prefix

use config::{ConfigError, Environment, File};
use serde::Deserialize;
use shared::{ExpiringWindow, Plan};

/// Main application configuration
#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    /// Current environment (development, production)
    pub environment: String,

    /// Server configuration
    pub server: ServerConfig,

    /// Seed dataset configuration
    pub seed: SeedConfig,

    /// Dashboard defaults for a fresh session
    pub dashboard: DashboardConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    /// Server port
    pub port: u16,

    /// Server host
    pub host: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct SeedConfig {
    /// Path to the JSON seed file
    pub path: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct DashboardConfig {
    /// Days ahead a certificate counts as expiring (7-90)
    pub expiring_window_days: u32,

    /// Plan shown when the session starts
    pub default_plan: Plan,
}

impl Config {
    /// Load configuration from files and environment variables
    pub fn load() -> Result<Self, ConfigError> {
        let environment = std::env::var("HCD_ENVIRONMENT").unwrap_or_else(|_| "development".into());

        let config = config::Config::builder()
            // Start with default values
            .set_default("environment", environment.clone())?
            .set_default("server.port", 3000)?
            .set_default("server.host", "0.0.0.0")?
            .set_default("seed.path", "data/demo_seed.json")?
            .set_default(
                "dashboard.expiring_window_days",
                i64::from(ExpiringWindow::DEFAULT_DAYS),
            )?
            .set_default("dashboard.default_plan", "core")?
            // Load environment-specific config file
            .add_source(File::with_name(&format!("config/{}", environment)).required(false))
            // Override with environment variables (HCD_ prefix)
            .add_source(
                Environment::with_prefix("HCD")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        let config: Config = config.try_deserialize()?;
        config.expiring_window()?;
        Ok(config)
    }

    /// The configured window, checked against the allowed range
    pub fn expiring_window(&self) -> Result<ExpiringWindow, ConfigError> {
        ExpiringWindow::new(self.dashboard.expiring_window_days)
            .map_err(|e| ConfigError::Message(e.to_string()))
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            port: 3000,
            host: "0.0.0.0".to_string(),
        }
    }
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            expiring_window_days: ExpiringWindow::DEFAULT_DAYS,
            default_plan: Plan::default(),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            environment: "development".to_string(),
            server: ServerConfig::default(),
            seed: SeedConfig {
                path: "data/demo_seed.json".to_string(),
            },
            dashboard: DashboardConfig::default(),
        }
    }
}
