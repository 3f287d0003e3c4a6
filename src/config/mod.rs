use std::path::Path;

use chrono::Weekday;
use serde::{Deserialize, Serialize};

use crate::utils::error::{ReservaError, Result};
use crate::utils::validation::{validate_path, Validate};

/// Resolved application settings: defaults, overlaid with file values where
/// present; CLI flags are applied on top by the caller.
#[derive(Debug, Clone)]
pub struct Settings {
    pub storage_path: String,
    pub week_start: Weekday,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            storage_path: "./data".to_string(),
            week_start: Weekday::Mon,
        }
    }
}

impl Settings {
    pub fn from_file(file: FileConfig) -> Result<Self> {
        let mut settings = Settings::default();

        if let Some(storage) = file.storage {
            if let Some(path) = storage.path {
                settings.storage_path = path;
            }
        }

        if let Some(calendar) = file.calendar {
            if let Some(raw) = calendar.week_start {
                settings.week_start = parse_week_start(&raw)?;
            }
        }

        settings.validate()?;
        Ok(settings)
    }
}

impl Validate for Settings {
    fn validate(&self) -> Result<()> {
        validate_path("storage.path", &self.storage_path)
    }
}

/// On-disk configuration (`reservas.toml`), every knob optional.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FileConfig {
    pub storage: Option<StorageConfig>,
    pub calendar: Option<CalendarConfig>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct StorageConfig {
    pub path: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CalendarConfig {
    pub week_start: Option<String>,
}

impl FileConfig {
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let raw = std::fs::read_to_string(path.as_ref())?;
        toml::from_str(&raw).map_err(|e| ReservaError::ConfigError {
            message: format!("{}: {}", path.as_ref().display(), e),
        })
    }
}

pub fn parse_week_start(raw: &str) -> Result<Weekday> {
    match raw.to_lowercase().as_str() {
        "monday" => Ok(Weekday::Mon),
        "sunday" => Ok(Weekday::Sun),
        other => Err(ReservaError::ConfigError {
            message: format!("week_start must be \"monday\" or \"sunday\", got \"{}\"", other),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let settings = Settings::default();
        assert_eq!(settings.storage_path, "./data");
        assert_eq!(settings.week_start, Weekday::Mon);
    }

    #[test]
    fn test_from_file_overlays_defaults() {
        let file: FileConfig = toml::from_str(
            r#"
            [storage]
            path = "/var/lib/reservas"

            [calendar]
            week_start = "sunday"
            "#,
        )
        .unwrap();

        let settings = Settings::from_file(file).unwrap();
        assert_eq!(settings.storage_path, "/var/lib/reservas");
        assert_eq!(settings.week_start, Weekday::Sun);
    }

    #[test]
    fn test_partial_file_keeps_defaults() {
        let file: FileConfig = toml::from_str(
            r#"
            [calendar]
            week_start = "monday"
            "#,
        )
        .unwrap();

        let settings = Settings::from_file(file).unwrap();
        assert_eq!(settings.storage_path, "./data");
    }

    #[test]
    fn test_unknown_week_start_is_a_config_error() {
        let file: FileConfig = toml::from_str(
            r#"
            [calendar]
            week_start = "someday"
            "#,
        )
        .unwrap();

        assert!(matches!(
            Settings::from_file(file),
            Err(ReservaError::ConfigError { .. })
        ));
    }
}
