use movielog_models::Movie;

const SEED_JSON: &str = include_str!("../data/seed_movies.json");

/// The sample collection written on first load (30 movies, ids 1..=30)
pub fn seed_movies() -> Result<Vec<Movie>, serde_json::Error> {
    serde_json::from_str(SEED_JSON)
}

#[cfg(test)]
mod tests {
    use super::*;
    use movielog_models::WatchStatus;

    #[test]
    fn test_seed_parses() {
        let movies = seed_movies().unwrap();
        assert_eq!(movies.len(), 30);
        assert_eq!(movies[0].title, "Dune: Part Two");
        assert_eq!(movies[29].id, 30);
    }

    #[test]
    fn test_seed_ids_are_sequential() {
        let movies = seed_movies().unwrap();
        for (index, movie) in movies.iter().enumerate() {
            assert_eq!(movie.id, index as u64 + 1);
        }
    }

    #[test]
    fn test_seed_has_unrated_wishlist_entries() {
        let movies = seed_movies().unwrap();
        let unrated: Vec<_> = movies.iter().filter(|m| m.personal_rating.is_none()).collect();
        assert_eq!(unrated.len(), 4);
        assert!(unrated.iter().all(|m| m.watch_status == WatchStatus::WantToWatch));
    }
}
