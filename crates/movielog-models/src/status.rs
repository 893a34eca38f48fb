use serde::{Deserialize, Serialize};
use std::fmt;

/// Where a movie sits in the watching lifecycle
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
pub enum WatchStatus {
    /// Finished watching
    Completed,
    /// Currently watching
    Watching,
    /// Not started yet (the default for new entries)
    #[default]
    #[serde(rename = "Want to Watch")]
    WantToWatch,
}

impl WatchStatus {
    pub const ALL: [WatchStatus; 3] = [
        WatchStatus::Completed,
        WatchStatus::Watching,
        WatchStatus::WantToWatch,
    ];

    /// The wire name used in JSON payloads and query strings
    pub fn as_str(&self) -> &'static str {
        match self {
            WatchStatus::Completed => "Completed",
            WatchStatus::Watching => "Watching",
            WatchStatus::WantToWatch => "Want to Watch",
        }
    }

    /// Parse an exact wire name. Anything else is `None`.
    pub fn parse(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|status| status.as_str() == value)
    }
}

impl fmt::Display for WatchStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
