pub mod catalog;
pub mod error;
pub mod filter;
pub mod seed;
pub mod stats;
pub mod store;
pub mod validate;

pub use catalog::MovieCatalog;
pub use error::{CatalogError, StoreError};
pub use filter::{filter_movies, paginate, parse_page, ListQuery};
pub use seed::seed_movies;
pub use stats::{compute_stats, distinct_genres};
pub use store::{JsonFileStore, MemoryStore, MovieStore};
pub use validate::validate;
