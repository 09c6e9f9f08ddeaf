use chrono::{DateTime, Local};
use serde::Serialize;

use crate::model::stats::MonthlyStats;

/// Control label shown while tracking is paused.
pub const PAUSED_LABEL: &str = "开始记录";
/// Elapsed text shown while running before the app has published a value.
pub const LOADING_LABEL: &str = "--:--";
/// Elapsed text carried by the placeholder entry.
pub const PLACEHOLDER_ELAPSED: &str = "0:00";

/// One rendering snapshot. Built fresh on every refresh and never mutated.
#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct Entry {
    pub timestamp: DateTime<Local>,
    pub stats: MonthlyStats,
    pub is_running: bool,
    pub elapsed_text: String,
}

impl Entry {
    pub fn new(
        timestamp: DateTime<Local>,
        stats: MonthlyStats,
        is_running: bool,
        elapsed_text: String,
    ) -> Self {
        Self {
            timestamp,
            stats,
            is_running,
            elapsed_text,
        }
    }

    /// True when both entries show the same thing, regardless of when they were built.
    pub fn same_content(&self, other: &Entry) -> bool {
        self.stats == other.stats
            && self.is_running == other.is_running
            && self.elapsed_text == other.elapsed_text
    }
}

/// Fallback for a missing elapsed text, depending on the running flag.
pub fn default_elapsed_text(is_running: bool) -> &'static str {
    if is_running {
        LOADING_LABEL
    } else {
        PAUSED_LABEL
    }
}

/// When the scheduler should ask for the next timeline.
#[derive(Serialize, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReloadPolicy {
    /// Request a new timeline once the last entry has been shown.
    AtEnd,
}

#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct Timeline {
    pub entries: Vec<Entry>,
    pub policy: ReloadPolicy,
}
