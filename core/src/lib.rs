pub mod calendar;
pub mod config;
pub mod error;
pub mod heatmap;
pub mod model;
pub mod namespace;
pub mod repository;
pub mod service;
pub mod usecase;
pub mod view;

pub use calendar::{days_in_month, first_weekday_offset, MonthGeometry};
pub use config::{ConfigOverrides, WidgetConfig};
pub use error::StoreError;
pub use heatmap::HeatmapGrid;
pub use model::entry::{Entry, ReloadPolicy, Timeline, LOADING_LABEL, PAUSED_LABEL};
pub use model::grid::{tier_for_count, GridCell};
pub use model::stats::MonthlyStats;
pub use namespace::shared_namespace;
pub use repository::{FileSharedStore, MemorySharedStore, SharedStore};
pub use service::decoder::decode_stats;
pub use service::reader::{SharedState, SharedStateReader};
pub use usecase::entry_provider::EntryProvider;
pub use view::{ControlIcon, ControlView, IntentSink, WidgetView, START_LINK};
