use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use crate::status::WatchStatus;

/// One entry in the watch log, as persisted and as returned by the API
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Movie {
    pub id: u64,
    pub title: String,
    #[serde(default)]
    pub director: String,
    pub release_year: Option<i32>,
    #[serde(default)]
    pub genre: String,
    pub runtime: Option<u64>, // minutes
    #[serde(default)]
    pub watch_status: WatchStatus,
    pub personal_rating: Option<f64>, // 0-10
    #[serde(default)]
    pub review_notes: String,
    pub date_added: DateTime<Utc>,
}
