pub mod config;
pub mod paths;

pub use config::{Config, LoggingConfig, ServerConfig, StorageConfig};
pub use paths::PathManager;
