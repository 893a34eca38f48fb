use thiserror::Error;

/// Failures of the backing store
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Failed to access movie data: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to encode movie data: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// Failures of a catalog operation
#[derive(Debug, Error)]
pub enum CatalogError {
    /// One message per violated field rule
    #[error("Validation failed")]
    Validation(Vec<String>),

    #[error("Movie not found")]
    NotFound(u64),

    #[error("Data already exists")]
    AlreadyInitialized,

    /// The highest stored id leaves no room for another
    #[error("No movie ids left above {0}")]
    IdsExhausted(u64),

    #[error(transparent)]
    Store(#[from] StoreError),
}

pub type Result<T, E = CatalogError> = std::result::Result<T, E>;
