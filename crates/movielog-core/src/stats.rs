use movielog_models::{CollectionStats, Movie, WatchStatus};
use std::collections::{BTreeMap, BTreeSet};

pub fn compute_stats(movies: &[Movie]) -> CollectionStats {
    let count_status = |status: WatchStatus| movies.iter().filter(|m| m.watch_status == status).count();

    let ratings: Vec<f64> = movies
        .iter()
        .filter_map(|m| m.personal_rating)
        .filter(|r| *r > 0.0)
        .collect();
    let average_rating = if ratings.is_empty() {
        0.0
    } else {
        round_one_decimal(ratings.iter().sum::<f64>() / ratings.len() as f64)
    };

    let mut genre_breakdown = BTreeMap::new();
    let mut year_breakdown = BTreeMap::new();
    for movie in movies {
        if !movie.genre.is_empty() {
            *genre_breakdown.entry(movie.genre.clone()).or_insert(0) += 1;
        }
        if let Some(year) = movie.release_year {
            *year_breakdown.entry(year).or_insert(0) += 1;
        }
    }

    CollectionStats {
        total: movies.len(),
        completed: count_status(WatchStatus::Completed),
        watching: count_status(WatchStatus::Watching),
        want_to_watch: count_status(WatchStatus::WantToWatch),
        total_runtime: movies
            .iter()
            .filter_map(|m| m.runtime)
            .fold(0u64, |total, runtime| total.saturating_add(runtime)),
        average_rating,
        rating_count: ratings.len(),
        genre_breakdown,
        year_breakdown,
    }
}

/// Sorted, de-duplicated, non-empty genres
pub fn distinct_genres(movies: &[Movie]) -> Vec<String> {
    movies
        .iter()
        .filter(|m| !m.genre.is_empty())
        .map(|m| m.genre.clone())
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}

fn round_one_decimal(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}
