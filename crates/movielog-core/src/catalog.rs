use chrono::Utc;
use movielog_models::{CollectionStats, Movie, MovieInput, MoviePage};
use std::sync::Arc;
use tracing::{debug, info, warn};
use crate::error::{CatalogError, Result};
use crate::filter::{filter_movies, paginate, ListQuery};
use crate::stats::{compute_stats, distinct_genres};
use crate::store::MovieStore;
use crate::validate::validate;

/// The movie log operations. Every call performs a full load (and, for
/// mutations, a full save) against the store; nothing is cached in between.
#[derive(Clone)]
pub struct MovieCatalog {
    store: Arc<dyn MovieStore>,
}

impl MovieCatalog {
    pub fn new(store: Arc<dyn MovieStore>) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &Arc<dyn MovieStore> {
        &self.store
    }

    pub fn list(&self, query: &ListQuery) -> Result<MoviePage> {
        let movies = self.store.load_all()?;
        let filtered = filter_movies(movies, query);
        debug!(
            page = query.page,
            genre = query.genre.as_deref().unwrap_or(""),
            status = query.status.as_deref().unwrap_or(""),
            matched = filtered.len(),
            "Listing movies"
        );
        Ok(paginate(filtered, query.page))
    }

    pub fn get(&self, id: u64) -> Result<Movie> {
        self.store
            .find_by_id(id)?
            .ok_or(CatalogError::NotFound(id))
    }

    pub fn create(&self, input: &MovieInput) -> Result<Movie> {
        check(input)?;

        let mut movies = self.store.load_all()?;
        let highest = movies.iter().map(|m| m.id).max().unwrap_or(0);
        let id = highest
            .checked_add(1)
            .ok_or(CatalogError::IdsExhausted(highest))?;

        let mut movie = Movie {
            id,
            title: String::new(),
            director: String::new(),
            release_year: None,
            genre: String::new(),
            runtime: None,
            watch_status: Default::default(),
            personal_rating: None,
            review_notes: String::new(),
            date_added: Utc::now(),
        };
        apply_input(&mut movie, input);

        movies.push(movie.clone());
        self.store.save_all(&movies)?;

        info!(operation = "movie_created", movie_id = id, title = %movie.title, "Movie created");
        Ok(movie)
    }

    pub fn update(&self, id: u64, input: &MovieInput) -> Result<Movie> {
        check(input)?;

        let mut movies = self.store.load_all()?;
        let movie = movies
            .iter_mut()
            .find(|m| m.id == id)
            .ok_or(CatalogError::NotFound(id))?;
        apply_input(movie, input);
        let updated = movie.clone();

        self.store.save_all(&movies)?;

        info!(operation = "movie_updated", movie_id = id, "Movie updated");
        Ok(updated)
    }

    /// Remove a movie, returning the removed record
    pub fn delete(&self, id: u64) -> Result<Movie> {
        let mut movies = self.store.load_all()?;
        let index = movies
            .iter()
            .position(|m| m.id == id)
            .ok_or(CatalogError::NotFound(id))?;
        let removed = movies.remove(index);

        self.store.save_all(&movies)?;

        info!(operation = "movie_deleted", movie_id = id, "Movie deleted");
        Ok(removed)
    }

    pub fn stats(&self) -> Result<CollectionStats> {
        Ok(compute_stats(&self.store.load_all()?))
    }

    pub fn genres(&self) -> Result<Vec<String>> {
        Ok(distinct_genres(&self.store.load_all()?))
    }

    /// Replace an absent collection with `movies`. Refuses when data already exists.
    pub fn initialize(&self, movies: Vec<Movie>) -> Result<usize> {
        if self.store.exists() {
            warn!(operation = "init_rejected", "Refusing to initialize: data already exists");
            return Err(CatalogError::AlreadyInitialized);
        }
        self.store.save_all(&movies)?;
        info!(operation = "store_initialized", count = movies.len(), "Initialized movie data");
        Ok(movies.len())
    }
}

fn check(input: &MovieInput) -> Result<()> {
    let errors = validate(input);
    if errors.is_empty() {
        Ok(())
    } else {
        debug!(errors = ?errors, "Rejected movie payload");
        Err(CatalogError::Validation(errors))
    }
}

/// Copy every mutable field from a validated payload; `id` and `date_added` are untouched
fn apply_input(movie: &mut Movie, input: &MovieInput) {
    movie.title = input.trimmed_title().to_string();
    movie.director = trimmed(&input.director);
    movie.release_year = input
        .release_year
        .present()
        .and_then(|year| i32::try_from(year).ok());
    movie.genre = trimmed(&input.genre);
    movie.runtime = input
        .runtime
        .present()
        .and_then(|runtime| u64::try_from(runtime).ok());
    movie.watch_status = input.status_or_default();
    movie.personal_rating = input.personal_rating.present();
    movie.review_notes = trimmed(&input.review_notes);
}

fn trimmed(value: &Option<String>) -> String {
    value.as_deref().map(str::trim).unwrap_or("").to_string()
}
