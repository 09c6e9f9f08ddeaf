use serde::Serialize;

pub const GRID_ROWS: usize = 5;
pub const GRID_COLS: usize = 7;

/// Heatmap accent, `#10B981`.
pub const ACCENT_RGB: u32 = 0x10B981;

pub const MAX_TIER: u8 = 4;

/// Opacity per tier. Tier 0 is never drawn with it, see [`EMPTY_OPACITY`].
pub const OPACITY_LEVELS: [f64; 5] = [0.0, 0.3, 0.6, 0.85, 1.0];

/// In-month day with no activity: faint, but not transparent.
pub const EMPTY_OPACITY: f64 = 0.08;

/// Clamp an activity count into the 0..=4 tier range.
pub fn tier_for_count(count: i64) -> u8 {
    count.clamp(0, MAX_TIER as i64) as u8
}

#[derive(Serialize, Debug, Clone, Copy, PartialEq)]
pub struct GridCell {
    pub row: usize,
    pub col: usize,
    /// 1-based day of month, `None` outside the month.
    pub day: Option<u32>,
    pub count: i64,
    pub tier: u8,
}

impl GridCell {
    pub fn blank(row: usize, col: usize) -> Self {
        Self {
            row,
            col,
            day: None,
            count: 0,
            tier: 0,
        }
    }

    pub fn day(row: usize, col: usize, day: u32, count: i64) -> Self {
        Self {
            row,
            col,
            day: Some(day),
            count,
            tier: tier_for_count(count),
        }
    }

    pub fn is_blank(&self) -> bool {
        self.day.is_none()
    }

    /// Fill opacity of the accent color for this cell.
    pub fn opacity(&self) -> f64 {
        match self.day {
            None => 0.0,
            Some(_) if self.count <= 0 => EMPTY_OPACITY,
            Some(_) => OPACITY_LEVELS[self.tier as usize],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tier_mapping() {
        assert_eq!(tier_for_count(0), 0);
        assert_eq!(tier_for_count(1), 1);
        assert_eq!(tier_for_count(4), 4);
        assert_eq!(tier_for_count(99), 4);
        assert_eq!(tier_for_count(-3), 0);
    }

    #[test]
    fn test_opacity() {
        assert_eq!(GridCell::blank(0, 0).opacity(), 0.0);
        assert_eq!(GridCell::day(0, 1, 1, 0).opacity(), EMPTY_OPACITY);
        assert_eq!(GridCell::day(0, 1, 1, 1).opacity(), 0.3);
        assert_eq!(GridCell::day(0, 1, 1, 3).opacity(), 0.85);
        assert_eq!(GridCell::day(0, 1, 1, 42).opacity(), 1.0);
    }

    #[test]
    fn test_empty_day_is_not_transparent() {
        let cell = GridCell::day(2, 3, 10, 0);
        assert!(!cell.is_blank());
        assert!(cell.opacity() > 0.0);
    }
}
