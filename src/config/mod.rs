mod app_config;

pub use app_config::{load_app_config, AppConfig, ConfigError};
