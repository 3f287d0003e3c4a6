use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::utils::error::{ReservaError, Result};
use crate::utils::validation::{validate_non_empty_string, validate_time, Validate};

/// Kind of activity a slot is booked for. The set has grown release over
/// release, so unknown kinds round-trip through `Other` instead of failing
/// to parse.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SportType {
    Football,
    Basketball,
    Tennis,
    Volleyball,
    #[serde(untagged)]
    Other(String),
}

impl SportType {
    /// Human-readable label, the one free-text search matches against.
    pub fn label(&self) -> &str {
        match self {
            SportType::Football => "Football",
            SportType::Basketball => "Basketball",
            SportType::Tennis => "Tennis",
            SportType::Volleyball => "Volleyball",
            SportType::Other(name) => name,
        }
    }
}

impl FromStr for SportType {
    type Err = ReservaError;

    fn from_str(s: &str) -> Result<Self> {
        let trimmed = s.trim();
        validate_non_empty_string("sportType", trimmed)?;
        Ok(match trimmed.to_lowercase().as_str() {
            "football" => SportType::Football,
            "basketball" => SportType::Basketball,
            "tennis" => SportType::Tennis,
            "volleyball" => SportType::Volleyball,
            _ => SportType::Other(trimmed.to_string()),
        })
    }
}

impl fmt::Display for SportType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Wall-clock `HH:MM` time. Parsing only accepts the canonical zero-padded
/// form, so the derived ordering is chronological and equality matches the
/// stored string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct SlotTime {
    hour: u8,
    minute: u8,
}

impl SlotTime {
    pub fn hour(&self) -> u8 {
        self.hour
    }

    pub fn minute(&self) -> u8 {
        self.minute
    }
}

impl FromStr for SlotTime {
    type Err = ReservaError;

    fn from_str(s: &str) -> Result<Self> {
        validate_time("time", s)?;
        // the pattern pins the shape, so the numeric parts cannot fail
        let hour = s[..2].parse().unwrap_or(0);
        let minute = s[3..5].parse().unwrap_or(0);
        Ok(Self { hour, minute })
    }
}

impl fmt::Display for SlotTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}", self.hour, self.minute)
    }
}

impl Serialize for SlotTime {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for SlotTime {
    fn deserialize<D: serde::Deserializer<'de>>(
        deserializer: D,
    ) -> std::result::Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(serde::de::Error::custom)
    }
}

/// Serde helper for the `date` field: always writes `YYYY-MM-DD`, but accepts
/// an RFC 3339 instant left behind by older stores and keeps only its
/// calendar day (the day in the instant's own offset, not UTC).
mod calendar_date {
    use chrono::{DateTime, NaiveDate};
    use serde::{Deserialize, Deserializer, Serializer};

    const FORMAT: &str = "%Y-%m-%d";

    pub fn serialize<S: Serializer>(
        date: &NaiveDate,
        serializer: S,
    ) -> std::result::Result<S::Ok, S::Error> {
        serializer.collect_str(&date.format(FORMAT))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(
        deserializer: D,
    ) -> std::result::Result<NaiveDate, D::Error> {
        let raw = String::deserialize(deserializer)?;
        if let Ok(date) = NaiveDate::parse_from_str(&raw, FORMAT) {
            return Ok(date);
        }
        DateTime::parse_from_rfc3339(&raw)
            .map(|instant| instant.date_naive())
            .map_err(|_| {
                serde::de::Error::custom(format!(
                    "'{}' is neither a calendar date nor an RFC 3339 instant",
                    raw
                ))
            })
    }
}

/// A booked slot. Records are never mutated in place; an update is a delete
/// followed by a fresh create.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Reservation {
    pub id: String,
    pub name: String,
    pub phone: String,
    pub sport_type: SportType,
    #[serde(with = "calendar_date")]
    pub date: NaiveDate,
    pub start_time: SlotTime,
    pub end_time: SlotTime,
}

/// Input to a booking request: a reservation before an id exists.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReservationDraft {
    pub name: String,
    pub phone: String,
    pub sport_type: SportType,
    #[serde(with = "calendar_date")]
    pub date: NaiveDate,
    pub start_time: SlotTime,
    pub end_time: SlotTime,
}

impl ReservationDraft {
    pub(crate) fn into_reservation(self, id: String) -> Reservation {
        Reservation {
            id,
            name: self.name,
            phone: self.phone,
            sport_type: self.sport_type,
            date: self.date,
            start_time: self.start_time,
            end_time: self.end_time,
        }
    }
}

impl Validate for ReservationDraft {
    fn validate(&self) -> Result<()> {
        validate_non_empty_string("name", &self.name)?;
        validate_non_empty_string("phone", &self.phone)?;
        if self.start_time >= self.end_time {
            return Err(ReservaError::ValidationError {
                field: "endTime".to_string(),
                reason: format!(
                    "{} must be after start time {}",
                    self.end_time, self.start_time
                ),
            });
        }
        Ok(())
    }
}
