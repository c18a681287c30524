use chrono::{NaiveDate, NaiveTime, Timelike};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Bookings in these statuses never affect availability.
pub const EXCLUDED_BOOKING_STATUSES: [&str; 2] = ["Cancelled", "Closed"];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AvailabilityStatus {
    Available,
    NotAvailable,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DayAvailability {
    pub date: NaiveDate,
    pub status: AvailabilityStatus,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SlotAvailability {
    pub start_time: String,
    pub end_time: String,
    pub status: AvailabilityStatus,
}

// Projections of host records. Absent optional fields take per-field defaults.

#[derive(Debug, Clone, Deserialize)]
pub struct ScheduleTemplate {
    pub id: String,
    #[serde(default)]
    pub disabled: bool,
    #[serde(default)]
    pub time_slots: Vec<TimeSlotEntry>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct TimeSlotEntry {
    pub day: String,
    pub from_time: TimeValue,
    pub to_time: TimeValue,
}

#[derive(Debug, Clone, Deserialize)]
pub struct TemplateLinkRow {
    #[serde(default)]
    pub template: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct BookingRow {
    pub start_time: TimeValue,
    #[serde(default)]
    pub duration: i64,
}

/// A raw time-of-day as the host store hands it out: a duration offset in
/// seconds since midnight, a clock value, or `HH:MM` / `HH:MM:SS` text.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum TimeValue {
    Offset(i64),
    Clock(NaiveTime),
    Text(String),
}

impl TimeValue {
    /// Canonical minute-precision time of day; seconds are truncated.
    pub fn normalize(&self) -> Result<NaiveTime, SchedulingError> {
        match self {
            TimeValue::Offset(secs) => {
                if *secs < 0 {
                    return Err(SchedulingError::InvalidArgument(format!(
                        "Time offset out of range: {} seconds",
                        secs
                    )));
                }
                let hours = (secs / 3600) as u32;
                let minutes = ((secs % 3600) / 60) as u32;
                NaiveTime::from_hms_opt(hours, minutes, 0).ok_or_else(|| {
                    SchedulingError::InvalidArgument(format!(
                        "Time offset out of range: {} seconds",
                        secs
                    ))
                })
            }
            TimeValue::Clock(time) => Ok(truncate_to_minute(*time)),
            TimeValue::Text(text) => {
                let time = NaiveTime::parse_from_str(text, "%H:%M")
                    .or_else(|_| NaiveTime::parse_from_str(text, "%H:%M:%S"))
                    .map_err(|_| {
                        SchedulingError::InvalidArgument(format!(
                            "Invalid time value: {}. Expected HH:MM or HH:MM:SS",
                            text
                        ))
                    })?;
                Ok(truncate_to_minute(time))
            }
        }
    }
}

impl From<NaiveTime> for TimeValue {
    fn from(time: NaiveTime) -> Self {
        TimeValue::Clock(time)
    }
}

fn truncate_to_minute(time: NaiveTime) -> NaiveTime {
    time.with_second(0)
        .and_then(|t| t.with_nanosecond(0))
        .unwrap_or(time)
}

#[derive(Error, Debug)]
pub enum SchedulingError {
    #[error("{0}")]
    InvalidArgument(String),

    #[error("{0}")]
    NotFound(String),

    #[error("Record store error: {0}")]
    Store(#[from] anyhow::Error),

    #[error("Malformed record: {0}")]
    Malformed(#[from] serde_json::Error),
}
