use anyhow::Result;
use std::path::{Path, PathBuf};

const BASE_PATH_ENV: &str = "MOVIELOG_BASE_PATH";

/// Root used inside the container image; `MOVIELOG_BASE_PATH` overrides `/app`
fn container_base_path() -> PathBuf {
    std::env::var_os(BASE_PATH_ENV)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("/app"))
}

/// On-disk layout: `config.toml` at the root, movie data under `data/`
#[derive(Debug, Clone)]
pub struct PathManager {
    root: PathBuf,
}

impl PathManager {
    /// Per-user layout, e.g. `~/.config/movielog` on Linux
    pub fn for_user() -> Result<Self> {
        let config_dir = dirs::config_dir()
            .ok_or_else(|| anyhow::anyhow!("Could not determine the user config directory"))?;
        Ok(Self::rooted_at(config_dir.join("movielog")))
    }

    pub fn rooted_at(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn data_dir(&self) -> PathBuf {
        self.root.join("data")
    }

    pub fn config_file(&self) -> PathBuf {
        self.root.join("config.toml")
    }

    pub fn movies_file(&self) -> PathBuf {
        self.data_dir().join("movies.json")
    }

    pub fn ensure_directories(&self) -> Result<()> {
        std::fs::create_dir_all(self.data_dir())?;
        Ok(())
    }
}

impl Default for PathManager {
    /// The container image ships its base directory, so finding it means we run there.
    /// Falls back to the container root when no user config directory exists.
    fn default() -> Self {
        let container = container_base_path();
        if container.is_dir() {
            return Self::rooted_at(container);
        }
        Self::for_user().unwrap_or_else(|_| Self::rooted_at(container))
    }
}
