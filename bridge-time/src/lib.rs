//! # Bridge Time
//!
//! Credential managers built on top of the bridge show users when a passkey was created or last
//! used. This crate holds the small collaborator that turns Unix timestamps into display strings
//! and back.
//!
//! ```
//! use bridge_time::{LocalTimeFormatter, TimeFormatter, TimestampStyle};
//! use chrono::Utc;
//!
//! let formatter = LocalTimeFormatter::new(Utc);
//! let created = formatter.timestamp_from_local_parts("2026-10-19", "14:05").unwrap();
//!
//! assert_eq!(formatter.format_timestamp(created, TimestampStyle::Short), "19 Oct, 14:05");
//! ```
use serde::{Deserialize, Serialize};
use typeshare::typeshare;

mod local;

pub use self::local::LocalTimeFormatter;


/// What is rendered in place of a timestamp that cannot be represented.
pub const INVALID_DATE: &str = "Invalid Date";

/// Formats Unix timestamps, in seconds, for display and parses user entered local times.
pub trait TimeFormatter {
    /// Render `secs` in the given style, or [`INVALID_DATE`] when it is out of range.
    fn format_timestamp(&self, secs: i64, style: TimestampStyle) -> String;

    /// The current time as a Unix timestamp in seconds.
    fn current_timestamp(&self) -> i64;

    /// Parse a local `YYYY-MM-DD` date and a `HH:MM` or `HH:MM:SS` time into a Unix timestamp.
    fn timestamp_from_local_parts(&self, date: &str, time: &str) -> Result<i64, TimeError>;
}

/// The layouts a timestamp can be rendered in. Examples are for Monday the 19th of October 2026
/// at 14:05.
#[typeshare]
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TimestampStyle {
    /// `19/10/2026, 14:05`
    #[default]
    DateTime,
    /// `19/10/2026`
    Date,
    /// `14:05`
    Time,
    /// `19 Oct, 14:05`
    Short,
    /// `Monday 19 October 2026 at 14:05`
    Full,
}

impl TimestampStyle {
    pub(crate) fn pattern(self) -> &'static str {
        match self {
            Self::DateTime => "%d/%m/%Y, %H:%M",
            Self::Date => "%d/%m/%Y",
            Self::Time => "%H:%M",
            Self::Short => "%d %b, %H:%M",
            Self::Full => "%A %-d %B %Y at %H:%M",
        }
    }
}

/// Errors produced when parsing local date and time parts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, thiserror::Error)]
#[serde(tag = "type", content = "content")]
pub enum TimeError {
    /// The date is not a valid `YYYY-MM-DD` calendar date.
    #[error("invalid date `{0}`, expected YYYY-MM-DD")]
    InvalidDate(String),
    /// The time is not a valid `HH:MM` or `HH:MM:SS` time of day.
    #[error("invalid time `{0}`, expected HH:MM or HH:MM:SS")]
    InvalidTime(String),
    /// The local time falls in a gap created by a daylight saving transition.
    #[error("{date} {time} does not exist in the local time zone")]
    NonexistentLocalTime {
        /// The date part as given.
        date: String,
        /// The time part as given.
        time: String,
    },
}
