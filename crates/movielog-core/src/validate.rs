use movielog_models::{FieldValue, MovieInput};
use std::ops::RangeInclusive;

pub const RELEASE_YEARS: RangeInclusive<i64> = 1888..=2030;
pub const RATINGS: RangeInclusive<f64> = 0.0..=10.0;

/// Check a payload against the field rules.
///
/// Returns one message per violated rule; an empty list means the payload is
/// acceptable. Rules never short-circuit each other.
pub fn validate(input: &MovieInput) -> Vec<String> {
    let mut errors = Vec::new();

    if input.trimmed_title().is_empty() {
        errors.push("Title is required".to_string());
    }

    match input.release_year {
        FieldValue::Present(year) if !RELEASE_YEARS.contains(&year) => {
            errors.push("Release year must be between 1888 and 2030".to_string());
        }
        FieldValue::Invalid => errors.push("Release year must be a valid number".to_string()),
        _ => {}
    }

    match input.runtime {
        FieldValue::Present(runtime) if runtime <= 0 => {
            errors.push("Runtime must be a positive number".to_string());
        }
        FieldValue::Invalid => errors.push("Runtime must be a valid number".to_string()),
        _ => {}
    }

    match input.personal_rating {
        FieldValue::Present(rating) if !RATINGS.contains(&rating) => {
            errors.push("Rating must be between 0 and 10".to_string());
        }
        FieldValue::Invalid => errors.push("Rating must be a valid number".to_string()),
        _ => {}
    }

    errors
}
