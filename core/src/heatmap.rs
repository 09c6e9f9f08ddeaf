use log::warn;
use serde::Serialize;

use crate::calendar::MonthGeometry;
use crate::model::grid::{GridCell, GRID_COLS, GRID_ROWS};
use crate::model::stats::MonthlyStats;

/// The fixed 5x7 heatmap for one month, row-major.
#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct HeatmapGrid {
    pub cells: Vec<GridCell>,
    /// Days that fell past the last cell and are not shown.
    pub truncated: Vec<u32>,
}

impl HeatmapGrid {
    pub fn project(geometry: MonthGeometry, stats: &MonthlyStats) -> Self {
        let offset = geometry.first_weekday_offset as i64;
        let days = geometry.days_in_month as i64;

        let mut cells = Vec::with_capacity(GRID_ROWS * GRID_COLS);
        for row in 0..GRID_ROWS {
            for col in 0..GRID_COLS {
                let day = (row * GRID_COLS + col) as i64 - offset + 1;
                if day < 1 || day > days {
                    cells.push(GridCell::blank(row, col));
                } else {
                    cells.push(GridCell::day(row, col, day as u32, stats.count(day)));
                }
            }
        }

        // No sixth row: whatever does not fit is dropped.
        let capacity = (GRID_ROWS * GRID_COLS) as i64;
        let first_hidden = capacity - offset + 1;
        let truncated: Vec<u32> = (first_hidden.max(1)..=days).map(|d| d as u32).collect();
        if !truncated.is_empty() {
            warn!(
                "{}-{:02}: days {:?} do not fit the heatmap grid",
                stats.year, stats.month, truncated
            );
        }

        Self { cells, truncated }
    }

    pub fn cell(&self, row: usize, col: usize) -> Option<&GridCell> {
        if row >= GRID_ROWS || col >= GRID_COLS {
            return None;
        }
        self.cells.get(row * GRID_COLS + col)
    }

    pub fn rows(&self) -> impl Iterator<Item = &[GridCell]> {
        self.cells.chunks(GRID_COLS)
    }
}
