mod app_config;
mod center;
mod config;
mod dataset;

pub use app_config::{AppConfig, Environment};
pub use center::{Category, CategoryTag, Center, Coordinate, WeeklySchedule};
pub use config::{load_app_config, load_app_config_from_env};
pub use dataset::SeedFile;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("missing required environment variable: {0}")]
    MissingEnvVar(String),
    #[error("invalid value for {var}: {reason}")]
    InvalidEnvVar { var: String, reason: String },
    #[error("failed to read {path}: {source}")]
    ReadFile {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse {path}: {source}")]
    ParseFile {
        path: String,
        #[source]
        source: serde_yaml::Error,
    },
}
