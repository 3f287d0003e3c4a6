use crate::utils::error::{ReservaError, Result};
use regex::Regex;
use std::sync::OnceLock;

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

static TIME_PATTERN: OnceLock<Regex> = OnceLock::new();

fn time_pattern() -> &'static Regex {
    TIME_PATTERN
        .get_or_init(|| Regex::new(r"^([01][0-9]|2[0-3]):[0-5][0-9]$").expect("time pattern"))
}

pub fn validate_non_empty_string(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(ReservaError::ValidationError {
            field: field_name.to_string(),
            reason: "value cannot be empty or whitespace-only".to_string(),
        });
    }
    Ok(())
}

/// Zero-padded 24-hour `HH:MM`. Any other shape is rejected so that string
/// equality and chronological equality stay interchangeable downstream.
pub fn validate_time(field_name: &str, value: &str) -> Result<()> {
    if !time_pattern().is_match(value) {
        return Err(ReservaError::ValidationError {
            field: field_name.to_string(),
            reason: format!("'{}' is not a zero-padded 24-hour HH:MM time", value),
        });
    }
    Ok(())
}

pub fn validate_path(field_name: &str, path: &str) -> Result<()> {
    if path.is_empty() {
        return Err(ReservaError::ConfigError {
            message: format!("{}: path cannot be empty", field_name),
        });
    }

    if path.contains('\0') {
        return Err(ReservaError::ConfigError {
            message: format!("{}: path contains null bytes", field_name),
        });
    }

    Ok(())
}
