//! What the widget shows, independent of how it is drawn: the heatmap and
//! the start/stop control.

use anyhow::Result;
use chrono::Weekday;
use serde::Serialize;

use crate::calendar::MonthGeometry;
use crate::heatmap::HeatmapGrid;
use crate::model::entry::{Entry, PAUSED_LABEL};
use crate::model::grid::ACCENT_RGB;

/// Activating the control always opens this link in the main app.
pub const START_LINK: &str = "easy://start";
/// Stop icon tint while tracking.
pub const RUNNING_RGB: u32 = 0xFF3B30;

#[derive(Serialize, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ControlIcon {
    Play,
    Stop,
}

#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct ControlView {
    pub icon: ControlIcon,
    pub tint: u32,
    pub label: String,
    pub link: &'static str,
}

impl ControlView {
    pub fn from_entry(entry: &Entry) -> Self {
        if entry.is_running {
            Self {
                icon: ControlIcon::Stop,
                tint: RUNNING_RGB,
                label: entry.elapsed_text.clone(),
                link: START_LINK,
            }
        } else {
            Self {
                icon: ControlIcon::Play,
                tint: ACCENT_RGB,
                label: PAUSED_LABEL.to_string(),
                link: START_LINK,
            }
        }
    }
}

/// Receives the deep link when the control is activated. Fire-and-forget:
/// nothing comes back from the main app.
pub trait IntentSink {
    fn emit(&mut self, link: &str) -> Result<()>;
}

/// Everything one render pass needs.
#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct WidgetView {
    pub geometry: MonthGeometry,
    pub grid: HeatmapGrid,
    pub control: ControlView,
}

impl WidgetView {
    pub fn from_entry(entry: &Entry, first_weekday: Weekday) -> Self {
        let geometry = MonthGeometry::new(entry.stats.year, entry.stats.month, first_weekday);
        Self {
            geometry,
            grid: HeatmapGrid::project(geometry, &entry.stats),
            control: ControlView::from_entry(entry),
        }
    }

    pub fn activate<I: IntentSink>(&self, sink: &mut I) -> Result<()> {
        sink.emit(self.control.link)
    }
}
