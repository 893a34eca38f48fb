use movielog_models::Movie;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use tracing::{debug, info, warn};
use crate::error::StoreError;
use crate::seed::seed_movies;

/// Whole-collection persistence: every read loads everything, every write replaces everything
pub trait MovieStore: Send + Sync {
    fn load_all(&self) -> Result<Vec<Movie>, StoreError>;

    fn save_all(&self, movies: &[Movie]) -> Result<(), StoreError>;

    /// Whether backing content is present
    fn exists(&self) -> bool;

    fn find_by_id(&self, id: u64) -> Result<Option<Movie>, StoreError> {
        Ok(self.load_all()?.into_iter().find(|movie| movie.id == id))
    }
}

/// Stores the collection as a pretty-printed JSON array in one file
pub struct JsonFileStore {
    path: PathBuf,
    seed_on_first_load: bool,
}

impl JsonFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            seed_on_first_load: true,
        }
    }

    pub fn with_seeding(mut self, seed_on_first_load: bool) -> Self {
        self.seed_on_first_load = seed_on_first_load;
        self
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn initialize(&self) -> Result<Vec<Movie>, StoreError> {
        if !self.seed_on_first_load {
            debug!("Movie data file {:?} does not exist, starting empty", self.path);
            return Ok(Vec::new());
        }

        let movies = seed_movies()?;
        match self.save_all(&movies) {
            Ok(()) => info!(
                operation = "store_seeded",
                count = movies.len(),
                "Initialized {:?} with sample movies",
                self.path
            ),
            Err(e) => warn!("Failed to write sample movies to {:?}: {}", self.path, e),
        }
        Ok(movies)
    }

    fn backup_corrupt_file(&self) {
        let backup_path = self.path.with_extension("json.bak");
        match std::fs::copy(&self.path, &backup_path) {
            Ok(_) => info!("Backed up unreadable movie data to {:?}", backup_path),
            Err(e) => warn!("Failed to back up unreadable movie data: {}", e),
        }
    }
}

impl MovieStore for JsonFileStore {
    fn load_all(&self) -> Result<Vec<Movie>, StoreError> {
        let content = match std::fs::read(&self.path) {
            Ok(content) => content,
            Err(e) if e.kind() == ErrorKind::NotFound => return self.initialize(),
            Err(e) => {
                warn!("Failed to read movie data {:?}: {}. Treating as empty.", self.path, e);
                return Ok(Vec::new());
            }
        };

        // Bytes that are not valid UTF-8 fail here too and take the backup path
        match serde_json::from_slice::<Vec<Movie>>(&content) {
            Ok(movies) => {
                debug!("Loaded {} movies from {:?}", movies.len(), self.path);
                Ok(movies)
            }
            Err(e) => {
                warn!(
                    "Movie data {:?} is malformed: {}. Treating as empty.",
                    self.path, e
                );
                self.backup_corrupt_file();
                Ok(Vec::new())
            }
        }
    }

    fn save_all(&self, movies: &[Movie]) -> Result<(), StoreError> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }

        let json = serde_json::to_string_pretty(movies)?;

        // Atomic write: write to temp file, then rename
        let temp_path = self.path.with_extension("json.tmp");
        std::fs::write(&temp_path, json)?;
        std::fs::rename(&temp_path, &self.path)?;

        debug!("Saved {} movies to {:?}", movies.len(), self.path);
        Ok(())
    }

    fn exists(&self) -> bool {
        self.path.exists()
    }
}

/// Keeps the collection in memory; `None` means nothing has been stored yet
pub struct MemoryStore {
    movies: Mutex<Option<Vec<Movie>>>,
}

impl MemoryStore {
    pub fn empty() -> Self {
        Self {
            movies: Mutex::new(None),
        }
    }

    pub fn with_movies(movies: Vec<Movie>) -> Self {
        Self {
            movies: Mutex::new(Some(movies)),
        }
    }

    pub fn seeded() -> Result<Self, StoreError> {
        Ok(Self::with_movies(seed_movies()?))
    }
}

impl MovieStore for MemoryStore {
    fn load_all(&self) -> Result<Vec<Movie>, StoreError> {
        let guard = self.movies.lock().unwrap_or_else(|e| e.into_inner());
        Ok(guard.clone().unwrap_or_default())
    }

    fn save_all(&self, movies: &[Movie]) -> Result<(), StoreError> {
        let mut guard = self.movies.lock().unwrap_or_else(|e| e.into_inner());
        *guard = Some(movies.to_vec());
        Ok(())
    }

    fn exists(&self) -> bool {
        self.movies
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .is_some()
    }
}
