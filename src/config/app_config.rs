use crate::domain::{PipelineSettings, PRICE_OUTLIER_THRESHOLD};
use std::net::{IpAddr, SocketAddr};
use std::time::Duration;
use thiserror::Error;

pub const DEFAULT_DATA_URL: &str =
    "https://raw.githubusercontent.com/mbalcerzak/warsaw_flats_api/raspberry-updates/json_dir/flats.json";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid value for {var}: {reason}")]
    InvalidEnvVar { var: String, reason: String },
}

#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    pub bind_addr: SocketAddr,
    pub data_url: String,
    pub log_level: String,
    pub fetch_timeout: Duration,
    /// Zero disables the snapshot cache.
    pub cache_ttl: Duration,
    pub max_workers: usize,
    pub pipeline: PipelineSettings,
    pub default_district: String,
    pub default_area: String,
}

/// Load configuration from the environment, reading `.env` first if present.
///
/// # Errors
///
/// Returns `ConfigError` if a variable is set to a value that does not parse.
pub fn load_app_config() -> Result<AppConfig, ConfigError> {
    dotenvy::dotenv().ok();
    build_app_config(|key| std::env::var(key))
}

/// Core parsing, decoupled from the process environment so tests can pass a map.
fn build_app_config<F>(lookup: F) -> Result<AppConfig, ConfigError>
where
    F: Fn(&str) -> Result<String, std::env::VarError>,
{
    let or_default = |var: &str, default: &str| -> String {
        lookup(var).unwrap_or_else(|_| default.to_string())
    };

    let invalid = |var: &str, reason: String| ConfigError::InvalidEnvVar {
        var: var.to_string(),
        reason,
    };

    let parse_u64 = |var: &str, default: &str| -> Result<u64, ConfigError> {
        or_default(var, default)
            .parse::<u64>()
            .map_err(|e| invalid(var, e.to_string()))
    };

    let host = or_default("WARSAW_FLATS_HOST", "127.0.0.1")
        .parse::<IpAddr>()
        .map_err(|e| invalid("WARSAW_FLATS_HOST", e.to_string()))?;
    let port = or_default("WARSAW_FLATS_PORT", "8050")
        .parse::<u16>()
        .map_err(|e| invalid("WARSAW_FLATS_PORT", e.to_string()))?;

    let data_url = or_default("WARSAW_FLATS_DATA_URL", DEFAULT_DATA_URL);
    url::Url::parse(&data_url).map_err(|e| invalid("WARSAW_FLATS_DATA_URL", e.to_string()))?;

    let log_level = or_default("WARSAW_FLATS_LOG_LEVEL", "info");
    let fetch_timeout = Duration::from_secs(parse_u64("WARSAW_FLATS_FETCH_TIMEOUT_SECS", "30")?);
    let cache_ttl = Duration::from_secs(parse_u64("WARSAW_FLATS_CACHE_TTL_SECS", "300")?);

    let max_workers = or_default("WARSAW_FLATS_MAX_WORKERS", "8")
        .parse::<usize>()
        .map_err(|e| invalid("WARSAW_FLATS_MAX_WORKERS", e.to_string()))?;
    if max_workers == 0 {
        return Err(invalid("WARSAW_FLATS_MAX_WORKERS", "must be at least 1".into()));
    }

    let price_outlier_threshold = or_default(
        "WARSAW_FLATS_PRICE_OUTLIER_THRESHOLD",
        &PRICE_OUTLIER_THRESHOLD.to_string(),
    )
    .parse::<f64>()
    .map_err(|e| invalid("WARSAW_FLATS_PRICE_OUTLIER_THRESHOLD", e.to_string()))?;
    if !price_outlier_threshold.is_finite() || price_outlier_threshold <= 0.0 {
        return Err(invalid(
            "WARSAW_FLATS_PRICE_OUTLIER_THRESHOLD",
            "must be a positive number".into(),
        ));
    }

    Ok(AppConfig {
        bind_addr: SocketAddr::new(host, port),
        data_url,
        log_level,
        fetch_timeout,
        cache_ttl,
        max_workers,
        pipeline: PipelineSettings {
            price_outlier_threshold,
        },
        default_district: or_default("WARSAW_FLATS_DEFAULT_DISTRICT", "Mokotów"),
        default_area: or_default("WARSAW_FLATS_DEFAULT_AREA", "40_50"),
    })
}
