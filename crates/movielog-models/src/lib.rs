pub mod input;
pub mod movie;
pub mod page;
pub mod stats;
pub mod status;

pub use input::{FieldValue, MovieInput};
pub use movie::Movie;
pub use page::{MoviePage, Pagination, PAGE_SIZE};
pub use stats::CollectionStats;
pub use status::WatchStatus;
