use std::collections::BTreeMap;

use log::debug;
use serde_json::{Map, Value};

use crate::model::stats::MonthlyStats;

/// Decode the `monthly_stats` document published by the main app.
///
/// The document is `{"month": int, "year": int, "counts": {"<day>": int}}`
/// with every field optional. Nothing here fails: a field that is missing or
/// of the wrong shape takes the fallback, and a document that is not a JSON
/// object yields empty stats for the fallback month.
pub fn decode_stats(stats_json: &str, fallback_month: u32, fallback_year: i32) -> MonthlyStats {
    let mut stats = MonthlyStats::new(fallback_year, fallback_month);

    let document = match serde_json::from_str::<Value>(stats_json) {
        Ok(Value::Object(document)) => document,
        Ok(_) => {
            debug!("monthly stats is not an object, using empty stats");
            return stats;
        }
        Err(e) => {
            if !stats_json.is_empty() {
                debug!("monthly stats is not valid JSON: {}", e);
            }
            return stats;
        }
    };

    if let Some(month) = document.get("month").and_then(as_month) {
        stats.month = month;
    }
    if let Some(year) = document.get("year").and_then(as_year) {
        stats.year = year;
    }
    if let Some(counts) = document.get("counts").and_then(Value::as_object) {
        stats.counts = decode_counts(counts);
    }

    stats
}

/// Integers, and floats with no fractional part (`3.0`), as the app's
/// own JSON encoder may write either.
fn as_integer(value: &Value) -> Option<i64> {
    if let Some(n) = value.as_i64() {
        return Some(n);
    }
    let f = value.as_f64()?;
    if f.fract() == 0.0 && f >= i64::MIN as f64 && f < i64::MAX as f64 {
        Some(f as i64)
    } else {
        None
    }
}

fn as_month(value: &Value) -> Option<u32> {
    as_integer(value)
        .filter(|m| (1..=12).contains(m))
        .map(|m| m as u32)
}

fn as_year(value: &Value) -> Option<i32> {
    as_integer(value)
        .filter(|y| *y > 0)
        .and_then(|y| i32::try_from(y).ok())
}

/// All values must be integers or the mapping is ignored as a whole; keys
/// that are not integers are dropped one by one.
fn decode_counts(counts: &Map<String, Value>) -> BTreeMap<i64, i64> {
    let mut decoded = BTreeMap::new();
    for (key, value) in counts {
        let Some(count) = as_integer(value) else {
            debug!("counts[{:?}] is not an integer, ignoring counts", key);
            return BTreeMap::new();
        };
        match key.parse::<i64>() {
            Ok(day) => {
                decoded.insert(day, count);
            }
            Err(_) => debug!("dropping non-numeric day {:?}", key),
        }
    }
    decoded
}
