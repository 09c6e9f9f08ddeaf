use chrono::{DateTime, Datelike, Local, TimeZone};
use log::debug;

use crate::model::entry::{Entry, ReloadPolicy, Timeline, PLACEHOLDER_ELAPSED};
use crate::model::stats::MonthlyStats;
use crate::repository::SharedStore;
use crate::service::decoder::decode_stats;
use crate::service::reader::SharedStateReader;

/// Builds entries for the external scheduler. Each call reads the store
/// afresh; nothing is cached between calls.
pub struct EntryProvider<S: SharedStore> {
    reader: SharedStateReader<S>,
    namespace: String,
}

impl<S: SharedStore> EntryProvider<S> {
    pub fn new(store: S, namespace: impl Into<String>) -> Self {
        Self {
            reader: SharedStateReader::new(store),
            namespace: namespace.into(),
        }
    }

    pub fn namespace(&self) -> &str {
        &self.namespace
    }

    /// Shown before any real data has been read.
    pub fn placeholder(&self) -> Entry {
        let timestamp = Local::now();
        Entry::new(
            timestamp,
            MonthlyStats::new(2024, 1),
            false,
            PLACEHOLDER_ELAPSED.to_string(),
        )
    }

    /// One entry for `now`. Missing data falls back to `now`'s month with
    /// zero activity and the paused state.
    pub fn snapshot<Tz: TimeZone>(&self, now: DateTime<Tz>) -> Entry {
        let now = now.with_timezone(&Local);
        let state = self.reader.read(&self.namespace);
        let stats = decode_stats(&state.stats_json, now.month(), now.year());

        debug!(
            "entry for {}: {}-{:02}, {} day(s) with activity, running={}",
            self.namespace,
            stats.year,
            stats.month,
            stats.counts.len(),
            state.is_running
        );

        Entry::new(now, stats, state.is_running, state.elapsed_text)
    }

    /// A single-entry timeline; the scheduler asks again once it is shown.
    pub fn timeline<Tz: TimeZone>(&self, now: DateTime<Tz>) -> Timeline {
        Timeline {
            entries: vec![self.snapshot(now)],
            policy: ReloadPolicy::AtEnd,
        }
    }

    pub fn current(&self) -> Entry {
        self.snapshot(Local::now())
    }
}
