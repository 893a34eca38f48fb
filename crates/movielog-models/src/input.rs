use serde_json::{Map, Value};
use crate::status::WatchStatus;

/// A numeric payload field after lenient parsing.
///
/// Browser forms send numbers as strings and blank inputs as `""`, so a field
/// can be missing, hold a usable number, or hold something that is not a
/// number at all.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum FieldValue<T> {
    #[default]
    Missing,
    Present(T),
    Invalid,
}

impl<T: Copy> FieldValue<T> {
    pub fn present(&self) -> Option<T> {
        match self {
            FieldValue::Present(value) => Some(*value),
            _ => None,
        }
    }

    pub fn is_invalid(&self) -> bool {
        matches!(self, FieldValue::Invalid)
    }
}

/// A create/update payload, before validation
///
/// `id` and `dateAdded` are never read from the payload; both are owned by
/// the server.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct MovieInput {
    pub title: Option<String>,
    pub director: Option<String>,
    pub release_year: FieldValue<i64>,
    pub genre: Option<String>,
    pub runtime: FieldValue<i64>,
    pub watch_status: Option<String>,
    pub personal_rating: FieldValue<f64>,
    pub review_notes: Option<String>,
}

impl MovieInput {
    /// Read a payload from a decoded JSON body. Returns `None` when the body
    /// is not a JSON object.
    pub fn from_json(value: &Value) -> Option<Self> {
        let object = value.as_object()?;
        Some(Self {
            title: text(object, "title"),
            director: text(object, "director"),
            release_year: integer(object.get("releaseYear")),
            genre: text(object, "genre"),
            runtime: integer(object.get("runtime")),
            watch_status: text(object, "watchStatus"),
            personal_rating: float(object.get("personalRating")),
            review_notes: text(object, "reviewNotes"),
        })
    }

    /// Builder-style constructor used by tests and the CLI
    pub fn titled(title: impl Into<String>) -> Self {
        Self {
            title: Some(title.into()),
            ..Self::default()
        }
    }

    /// Trimmed title, empty when missing
    pub fn trimmed_title(&self) -> &str {
        self.title.as_deref().map(str::trim).unwrap_or("")
    }

    /// The requested status, falling back to `Want to Watch` for unknown or missing values
    pub fn status_or_default(&self) -> WatchStatus {
        self.watch_status
            .as_deref()
            .and_then(|s| WatchStatus::parse(s.trim()))
            .unwrap_or_default()
    }
}

fn text(object: &Map<String, Value>, key: &str) -> Option<String> {
    object.get(key).and_then(Value::as_str).map(str::to_string)
}

fn integer(value: Option<&Value>) -> FieldValue<i64> {
    match value {
        None | Some(Value::Null) => FieldValue::Missing,
        Some(Value::Number(n)) => n
            .as_i64()
            .or_else(|| n.as_f64().filter(|f| f.is_finite()).map(|f| f.trunc() as i64))
            .map(FieldValue::Present)
            .unwrap_or(FieldValue::Invalid),
        Some(Value::String(s)) if s.trim().is_empty() => FieldValue::Missing,
        Some(Value::String(s)) => s
            .trim()
            .parse::<i64>()
            .map(FieldValue::Present)
            .unwrap_or(FieldValue::Invalid),
        Some(_) => FieldValue::Invalid,
    }
}

fn float(value: Option<&Value>) -> FieldValue<f64> {
    match value {
        None | Some(Value::Null) => FieldValue::Missing,
        Some(Value::Number(n)) => n
            .as_f64()
            .map(FieldValue::Present)
            .unwrap_or(FieldValue::Invalid),
        Some(Value::String(s)) if s.trim().is_empty() => FieldValue::Missing,
        Some(Value::String(s)) => match s.trim().parse::<f64>() {
            Ok(f) if f.is_finite() => FieldValue::Present(f),
            _ => FieldValue::Invalid,
        },
        Some(_) => FieldValue::Invalid,
    }
}
