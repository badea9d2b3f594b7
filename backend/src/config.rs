//! Server configuration.
//!
//! Values come from the process environment, with a `.env` file loaded
//! first when present.

use std::env;
use std::path::PathBuf;

use crate::error::{ConfigError, ConfigResult};

/// Default Sanity dataset.
pub const DEFAULT_DATASET: &str = "production";

/// Default Sanity API version (dated).
pub const DEFAULT_API_VERSION: &str = "2021-10-21";

/// Directory holding the built wasm bundle (`wasm-pack build --target web` output).
pub const DEFAULT_STATIC_DIR: &str = "frontend/pkg";

/// Default HTTP port.
pub const DEFAULT_PORT: u16 = 3000;

/// Connection settings for the Sanity project.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SanityConfig {
    pub project_id: String,
    pub dataset: String,
    pub api_version: String,
    /// Read token, needed only for private datasets
    pub token: Option<String>,
    /// Query the edge cache (`apicdn`) instead of the live API
    pub use_cdn: bool,
}

impl SanityConfig {
    pub fn new(project_id: impl Into<String>) -> Self {
        Self {
            project_id: project_id.into(),
            dataset: DEFAULT_DATASET.to_string(),
            api_version: DEFAULT_API_VERSION.to_string(),
            token: None,
            use_cdn: true,
        }
    }

    /// Load from `SANITY_*` environment variables.
    pub fn from_env() -> ConfigResult<Self> {
        let _ = dotenvy::dotenv();

        let project_id = env::var("SANITY_PROJECT_ID")
            .map_err(|_| ConfigError::MissingVar("SANITY_PROJECT_ID"))?;

        let mut config = Self::new(project_id);
        if let Ok(dataset) = env::var("SANITY_DATASET") {
            config.dataset = dataset;
        }
        if let Ok(version) = env::var("SANITY_API_VERSION") {
            config.api_version = version;
        }
        config.token = env::var("SANITY_TOKEN").ok().filter(|t| !t.is_empty());
        if let Ok(raw) = env::var("SANITY_USE_CDN") {
            config.use_cdn = parse_bool("SANITY_USE_CDN", &raw)?;
        }

        Ok(config)
    }

    /// Base URL of the query endpoint for this project and dataset.
    pub fn query_url(&self) -> String {
        let host = if self.use_cdn { "apicdn" } else { "api" };
        format!(
            "https://{}.{}.sanity.io/v{}/data/query/{}",
            self.project_id, host, self.api_version, self.dataset
        )
    }
}

/// Everything the HTTP server needs at startup.
#[derive(Debug, Clone)]
pub struct SiteConfig {
    pub port: u16,
    pub static_dir: PathBuf,
    /// Serve collections from this JSON file instead of Sanity
    pub fixtures: Option<PathBuf>,
}

impl SiteConfig {
    pub fn from_env(port: u16, fixtures: Option<PathBuf>) -> Self {
        let _ = dotenvy::dotenv();

        let static_dir = env::var("STATIC_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from(DEFAULT_STATIC_DIR));

        Self { port, static_dir, fixtures }
    }
}

fn parse_bool(name: &'static str, raw: &str) -> ConfigResult<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        _ => Err(ConfigError::InvalidValue { name, value: raw.to_string() }),
    }
}
