use std::fmt::Display;

use chrono::{DateTime, Local, NaiveDate, NaiveTime, TimeZone, Utc};

use crate::{TimeError, TimeFormatter, TimestampStyle, INVALID_DATE};

/// A [`TimeFormatter`] rendering timestamps in a chrono time zone with British English layouts
/// and a 24 hour clock.
///
/// The [`Default`] formatter uses the system's local time zone.
#[derive(Debug, Clone)]
pub struct LocalTimeFormatter<Tz = Local> {
    tz: Tz,
}

impl<Tz: TimeZone> LocalTimeFormatter<Tz> {
    /// Create a formatter for the given time zone.
    pub fn new(tz: Tz) -> Self {
        Self { tz }
    }

    /// The time zone timestamps are rendered in.
    pub fn time_zone(&self) -> &Tz {
        &self.tz
    }
}

impl Default for LocalTimeFormatter<Local> {
    fn default() -> Self {
        Self::new(Local)
    }
}

impl<Tz> TimeFormatter for LocalTimeFormatter<Tz>
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    fn format_timestamp(&self, secs: i64, style: TimestampStyle) -> String {
        let Some(utc) = DateTime::from_timestamp(secs, 0) else {
            log::debug!("Timestamp {secs} is out of range");
            return INVALID_DATE.to_owned();
        };
        utc.with_timezone(&self.tz)
            .format(style.pattern())
            .to_string()
    }

    fn current_timestamp(&self) -> i64 {
        Utc::now().timestamp()
    }

    fn timestamp_from_local_parts(&self, date: &str, time: &str) -> Result<i64, TimeError> {
        let day = NaiveDate::parse_from_str(date, "%Y-%m-%d")
            .map_err(|_| TimeError::InvalidDate(date.to_owned()))?;
        let time_of_day = NaiveTime::parse_from_str(time, "%H:%M:%S")
            .or_else(|_| NaiveTime::parse_from_str(time, "%H:%M"))
            .map_err(|_| TimeError::InvalidTime(time.to_owned()))?;

        // Ambiguous local times, repeated when clocks go back, resolve to the earlier instant.
        self.tz
            .from_local_datetime(&day.and_time(time_of_day))
            .earliest()
            .map(|local| local.timestamp())
            .ok_or_else(|| TimeError::NonexistentLocalTime {
                date: date.to_owned(),
                time: time.to_owned(),
            })
    }
}
