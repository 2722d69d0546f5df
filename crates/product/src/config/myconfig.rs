use crate::service::filter::{FilterMode, PaginationMode};
use anyhow::{Context, Result, anyhow};
use std::path::PathBuf;

#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub filter_mode: FilterMode,
    pub pagination_mode: PaginationMode,
    pub seed_file: Option<PathBuf>,
    pub is_dev: bool,
    pub enable_file_log: bool,
    pub otel_endpoint: Option<String>,
}

impl Config {
    pub fn init() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Reads the configuration through `lookup` instead of the process environment.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let non_empty = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let port = non_empty("PORT")
            .context("Missing environment variable: PORT")?
            .trim()
            .parse::<u16>()
            .context("PORT must be a valid u16 integer")?;

        let filter_mode = match non_empty("PRODUCT_FILTER_MODE") {
            Some(v) => v
                .parse::<FilterMode>()
                .context("Invalid PRODUCT_FILTER_MODE")?,
            None => FilterMode::default(),
        };

        let pagination_mode = match non_empty("PRODUCT_PAGINATION") {
            Some(v) => v
                .parse::<PaginationMode>()
                .context("Invalid PRODUCT_PAGINATION")?,
            None => PaginationMode::default(),
        };

        let is_dev = parse_flag("DEV_MODE", non_empty("DEV_MODE"))?;
        let enable_file_log = parse_flag("ENABLE_FILE_LOG", non_empty("ENABLE_FILE_LOG"))?;

        Ok(Self {
            port,
            filter_mode,
            pagination_mode,
            seed_file: non_empty("PRODUCT_SEED_FILE").map(PathBuf::from),
            is_dev,
            enable_file_log,
            otel_endpoint: non_empty("OTEL_ENDPOINT"),
        })
    }
}

fn parse_flag(key: &str, value: Option<String>) -> Result<bool> {
    match value.as_deref().map(str::trim) {
        None => Ok(false),
        Some("true" | "1") => Ok(true),
        Some("false" | "0") => Ok(false),
        Some(other) => Err(anyhow!("{key} must be 'true' or 'false', got '{other}'")),
    }
}
