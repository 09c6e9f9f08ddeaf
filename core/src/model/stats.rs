use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Activity counts for one calendar month, keyed by day of month.
///
/// Keys are kept as decoded: zero or negative days survive here and are
/// filtered out by the heatmap projection instead.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct MonthlyStats {
    pub month: u32,
    pub year: i32,
    pub counts: BTreeMap<i64, i64>, // Key: day of month
}

impl MonthlyStats {
    pub fn new(year: i32, month: u32) -> Self {
        Self {
            month,
            year,
            counts: BTreeMap::new(),
        }
    }

    /// Count for `day`, 0 when the day has no entry.
    pub fn count(&self, day: i64) -> i64 {
        self.counts.get(&day).copied().unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_day_counts_as_zero() {
        let mut stats = MonthlyStats::new(2024, 1);
        stats.counts.insert(3, 7);

        assert_eq!(stats.count(3), 7);
        assert_eq!(stats.count(4), 0);
        assert!(!stats.is_empty());
    }

    #[test]
    fn test_serializes_to_source_shape() {
        let mut stats = MonthlyStats::new(2025, 3);
        stats.counts.insert(1, 2);
        stats.counts.insert(15, 10);

        let json = serde_json::to_value(&stats).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"month": 3, "year": 2025, "counts": {"1": 2, "15": 10}})
        );
    }
}
