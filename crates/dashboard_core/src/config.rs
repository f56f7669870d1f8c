use std::{fs, io::ErrorKind, path::Path, str::FromStr};

use serde::Deserialize;
use shared::domain::{MenuItemId, SortDirection, SortField, TimeRange};
use thiserror::Error;
use tracing::warn;

use crate::layout::{DEFAULT_DOUBLE_TAP_WINDOW_MS, DEFAULT_MOBILE_BREAKPOINT};

pub const DEFAULT_SETTINGS_FILE: &str = "dashboard.toml";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to parse settings: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("invalid value '{value}' for '{key}'")]
    Invalid { key: &'static str, value: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub mobile_breakpoint: u32,
    pub initial_width: u32,
    pub initial_height: u32,
    pub default_sort_field: SortField,
    pub default_sort_direction: SortDirection,
    pub default_menu_item: MenuItemId,
    pub default_time_range: TimeRange,
    pub double_tap_window_ms: u64,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            mobile_breakpoint: DEFAULT_MOBILE_BREAKPOINT,
            initial_width: 1024,
            initial_height: 768,
            default_sort_field: SortField::Name,
            default_sort_direction: SortDirection::Asc,
            default_menu_item: MenuItemId::Dashboard,
            default_time_range: TimeRange::SevenDays,
            double_tap_window_ms: DEFAULT_DOUBLE_TAP_WINDOW_MS,
        }
    }
}

/// File form of [`Settings`]. Every key is optional; values stay raw so they
/// go through the same parsing as environment overrides.
#[derive(Debug, Default, Deserialize)]
struct SettingsFile {
    mobile_breakpoint: Option<u32>,
    initial_width: Option<u32>,
    initial_height: Option<u32>,
    sort_field: Option<String>,
    sort_direction: Option<String>,
    menu_item: Option<String>,
    time_range: Option<String>,
    double_tap_window_ms: Option<u64>,
}

fn parse_value<T: FromStr>(key: &'static str, value: &str) -> Result<T, ConfigError> {
    value.trim().parse::<T>().map_err(|_| ConfigError::Invalid {
        key,
        value: value.to_string(),
    })
}

impl Settings {
    /// Defaults overlaid with the keys present in `raw`.
    pub fn from_toml_str(raw: &str) -> Result<Self, ConfigError> {
        let file: SettingsFile = toml::from_str(raw)?;
        let mut settings = Self::default();

        if let Some(v) = file.mobile_breakpoint {
            settings.mobile_breakpoint = v;
        }
        if let Some(v) = file.initial_width {
            settings.initial_width = v;
        }
        if let Some(v) = file.initial_height {
            settings.initial_height = v;
        }
        if let Some(v) = file.sort_field {
            settings.default_sort_field = parse_value("sort_field", &v)?;
        }
        if let Some(v) = file.sort_direction {
            settings.default_sort_direction = parse_value("sort_direction", &v)?;
        }
        if let Some(v) = file.menu_item {
            settings.default_menu_item = parse_value("menu_item", &v)?;
        }
        if let Some(v) = file.time_range {
            settings.default_time_range = parse_value("time_range", &v)?;
        }
        if let Some(v) = file.double_tap_window_ms {
            settings.double_tap_window_ms = v;
        }

        settings.validate()?;
        Ok(settings)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.mobile_breakpoint == 0 {
            return Err(ConfigError::Invalid {
                key: "mobile_breakpoint",
                value: "0".into(),
            });
        }
        Ok(())
    }

    /// Applies `APP__*` overrides read through `lookup`. Values that do not
    /// parse are skipped with a warning.
    pub fn apply_env_overrides(&mut self, lookup: impl Fn(&str) -> Option<String>) {
        fn set<T: FromStr>(slot: &mut T, key: &'static str, raw: Option<String>) {
            let Some(raw) = raw else {
                return;
            };
            match parse_value::<T>(key, &raw) {
                Ok(value) => *slot = value,
                Err(err) => warn!(error = %err, "ignoring settings override"),
            }
        }

        set(
            &mut self.mobile_breakpoint,
            "APP__MOBILE_BREAKPOINT",
            lookup("APP__MOBILE_BREAKPOINT"),
        );
        set(
            &mut self.initial_width,
            "APP__INITIAL_WIDTH",
            lookup("APP__INITIAL_WIDTH"),
        );
        set(
            &mut self.initial_height,
            "APP__INITIAL_HEIGHT",
            lookup("APP__INITIAL_HEIGHT"),
        );
        set(
            &mut self.default_sort_field,
            "APP__SORT_FIELD",
            lookup("APP__SORT_FIELD"),
        );
        set(
            &mut self.default_sort_direction,
            "APP__SORT_DIRECTION",
            lookup("APP__SORT_DIRECTION"),
        );
        set(
            &mut self.default_menu_item,
            "APP__MENU_ITEM",
            lookup("APP__MENU_ITEM"),
        );
        set(
            &mut self.default_time_range,
            "APP__TIME_RANGE",
            lookup("APP__TIME_RANGE"),
        );
        set(
            &mut self.double_tap_window_ms,
            "APP__DOUBLE_TAP_WINDOW_MS",
            lookup("APP__DOUBLE_TAP_WINDOW_MS"),
        );

        if self.mobile_breakpoint == 0 {
            warn!("APP__MOBILE_BREAKPOINT must be positive; using default");
            self.mobile_breakpoint = DEFAULT_MOBILE_BREAKPOINT;
        }
    }
}

/// Defaults, then `path` if it exists, then process environment.
pub fn load_settings_from(path: &Path) -> Settings {
    let mut settings = match fs::read_to_string(path) {
        Ok(raw) => match Settings::from_toml_str(&raw) {
            Ok(settings) => settings,
            Err(err) => {
                warn!(path = %path.display(), error = %err, "ignoring settings file");
                Settings::default()
            }
        },
        Err(err) if err.kind() == ErrorKind::NotFound => Settings::default(),
        Err(err) => {
            warn!(path = %path.display(), error = %err, "cannot read settings file");
            Settings::default()
        }
    };
    settings.apply_env_overrides(|key| std::env::var(key).ok());
    settings
}

pub fn load_settings() -> Settings {
    load_settings_from(Path::new(DEFAULT_SETTINGS_FILE))
}

#[cfg(test)]
#[path = "tests/config_tests.rs"]
mod tests;
