use chrono::NaiveDate;
use thiserror::Error;

use crate::domain::model::SlotTime;

#[derive(Error, Debug)]
pub enum ReservaError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("CSV export error: {0}")]
    CsvError(#[from] csv::Error),

    #[error("Validation error: {field}: {reason}")]
    ValidationError { field: String, reason: String },

    #[error("Slot {date} {start_time} is already booked")]
    SlotConflict {
        date: NaiveDate,
        start_time: SlotTime,
    },

    #[error("Reservation not found: {id}")]
    NotFound { id: String },

    #[error("Configuration error: {message}")]
    ConfigError { message: String },
}

pub type Result<T> = std::result::Result<T, ReservaError>;
