use movielog_models::{Movie, MoviePage, Pagination, PAGE_SIZE};

/// Listing parameters: a 1-based page plus optional exact-match filters
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListQuery {
    pub page: usize,
    pub genre: Option<String>,
    pub status: Option<String>,
}

impl Default for ListQuery {
    fn default() -> Self {
        Self {
            page: 1,
            genre: None,
            status: None,
        }
    }
}

impl ListQuery {
    /// Build from raw query-string values. Empty filters are ignored and a
    /// missing, non-numeric or zero page becomes page 1.
    pub fn from_params(page: Option<&str>, genre: Option<&str>, status: Option<&str>) -> Self {
        Self {
            page: parse_page(page),
            genre: non_empty(genre),
            status: non_empty(status),
        }
    }

    pub fn matches(&self, movie: &Movie) -> bool {
        let genre_ok = self.genre.as_deref().map_or(true, |g| movie.genre == g);
        let status_ok = self
            .status
            .as_deref()
            .map_or(true, |s| movie.watch_status.as_str() == s);
        genre_ok && status_ok
    }
}

pub fn parse_page(raw: Option<&str>) -> usize {
    raw.and_then(|p| p.trim().parse::<i64>().ok())
        .filter(|p| *p >= 1)
        .and_then(|p| usize::try_from(p).ok())
        .unwrap_or(1)
}

fn non_empty(value: Option<&str>) -> Option<String> {
    value.filter(|v| !v.is_empty()).map(str::to_string)
}

/// Keep the movies matching every filter in `query`, in collection order
pub fn filter_movies(movies: Vec<Movie>, query: &ListQuery) -> Vec<Movie> {
    movies.into_iter().filter(|m| query.matches(m)).collect()
}

/// Cut one page out of an already filtered listing
pub fn paginate(movies: Vec<Movie>, page: usize) -> MoviePage {
    let pagination = Pagination::new(page.max(1), movies.len(), PAGE_SIZE);
    let movies = movies
        .into_iter()
        .skip(pagination.offset())
        .take(PAGE_SIZE)
        .collect();
    MoviePage { movies, pagination }
}
