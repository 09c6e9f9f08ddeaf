//! Widget configuration: where the shared store lives, which host we are and
//! how the week is laid out.

use std::env;
use std::path::PathBuf;

use chrono::Weekday;
use log::warn;

use crate::namespace::shared_namespace;

pub const ENV_STORE_DIR: &str = "EASY_WIDGET_STORE_DIR";
pub const ENV_BUNDLE_ID: &str = "EASY_WIDGET_BUNDLE_ID";
pub const ENV_FIRST_WEEKDAY: &str = "EASY_WIDGET_FIRST_WEEKDAY";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WidgetConfig {
    pub store_dir: PathBuf,
    pub bundle_id: Option<String>,
    pub first_weekday: Weekday,
}

/// Values given explicitly, e.g. on the command line. They win over the environment.
#[derive(Debug, Clone, Default)]
pub struct ConfigOverrides {
    pub store_dir: Option<PathBuf>,
    pub bundle_id: Option<String>,
    pub first_weekday: Option<String>,
}

impl WidgetConfig {
    /// Resolve with priority: overrides, then environment, then defaults.
    pub fn resolve(overrides: ConfigOverrides) -> Self {
        Self::resolve_with(overrides, |key| env::var(key).ok())
    }

    fn resolve_with<F>(overrides: ConfigOverrides, lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let store_dir = overrides
            .store_dir
            .or_else(|| lookup(ENV_STORE_DIR).map(PathBuf::from))
            .unwrap_or_else(default_store_dir);

        let bundle_id = overrides.bundle_id.or_else(|| lookup(ENV_BUNDLE_ID));

        let first_weekday = overrides
            .first_weekday
            .or_else(|| lookup(ENV_FIRST_WEEKDAY))
            .map(|s| parse_weekday(&s))
            .unwrap_or(Weekday::Sun);

        Self {
            store_dir,
            bundle_id,
            first_weekday,
        }
    }

    pub fn namespace(&self) -> String {
        shared_namespace(self.bundle_id.as_deref())
    }
}

/// `~/.easy/shared`, or a relative `.easy/shared` without a home directory.
pub fn default_store_dir() -> PathBuf {
    match dirs::home_dir() {
        Some(home) => home.join(".easy").join("shared"),
        None => PathBuf::from(".easy").join("shared"),
    }
}

/// Accepts chrono's weekday names ("mon", "Monday", ...). Unknown values mean Sunday.
pub fn parse_weekday(input: &str) -> Weekday {
    match input.trim().parse::<Weekday>() {
        Ok(day) => day,
        Err(_) => {
            warn!("unknown first weekday {:?}, using Sunday", input);
            Weekday::Sun
        }
    }
}
