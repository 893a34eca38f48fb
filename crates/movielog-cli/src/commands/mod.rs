pub mod clear;
pub mod config;
pub mod list;
pub mod serve;
pub mod stats;

use movielog_config::{Config, PathManager};
use movielog_core::{JsonFileStore, MovieCatalog};
use std::path::PathBuf;
use std::sync::Arc;

/// Resolved locations and settings shared by every command
pub struct Workspace {
    pub paths: PathManager,
    pub config: Config,
    data_file: Option<PathBuf>,
}

impl Workspace {
    pub fn new(paths: PathManager, config: Config, data_file: Option<PathBuf>) -> Self {
        Self {
            paths,
            config,
            data_file,
        }
    }

    /// `--data-file` beats `[storage] data_file`, which beats the default location
    pub fn movies_file(&self) -> PathBuf {
        self.data_file
            .clone()
            .unwrap_or_else(|| self.config.movies_file(&self.paths))
    }

    pub fn file_store(&self) -> JsonFileStore {
        JsonFileStore::new(self.movies_file()).with_seeding(self.config.storage.seed_on_first_load)
    }

    pub fn catalog(&self) -> MovieCatalog {
        MovieCatalog::new(Arc::new(self.file_store()))
    }
}
