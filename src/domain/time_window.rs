// SPDX-License-Identifier: MPL-2.0
//! End time parsing and the viewing window derived from it.
//!
//! All times are UTC. The form edits the end time as text in
//! [`END_TIME_FORMAT`]; the viewer receives both bounds in
//! [`VIEWER_TIME_FORMAT`].

use super::buffer::BufferLength;
use crate::error::{Error, Result};
use chrono::{DateTime, NaiveDateTime, TimeDelta, Utc};

/// Format of the end time field (`dd/MM/yyyy HH:mm:ss`).
pub const END_TIME_FORMAT: &str = "%d/%m/%Y %H:%M:%S";

/// Format of `--start-time` / `--end-time` values passed to the viewer.
pub const VIEWER_TIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Format of the clock label.
pub const CLOCK_FORMAT: &str = "%Y/%m/%d %H:%M:%S";

/// Parses the end time field.
pub fn parse_end_time(text: &str) -> Result<DateTime<Utc>> {
    NaiveDateTime::parse_from_str(text.trim(), END_TIME_FORMAT)
        .map(|naive| naive.and_utc())
        .map_err(|_| Error::InvalidEndTime(text.to_string()))
}

/// Renders a time the way the end time field expects it.
#[must_use]
pub fn format_end_time(time: DateTime<Utc>) -> String {
    time.format(END_TIME_FORMAT).to_string()
}

/// Renders a time for the clock label.
#[must_use]
pub fn format_clock(time: DateTime<Utc>) -> String {
    time.format(CLOCK_FORMAT).to_string()
}

/// Rejects end times later than `now`.
pub fn ensure_not_future(end: DateTime<Utc>, now: DateTime<Utc>) -> Result<()> {
    if end > now {
        return Err(Error::FutureEndTime(
            end.format(VIEWER_TIME_FORMAT).to_string(),
        ));
    }
    Ok(())
}

/// Viewing window handed to the viewer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimeWindow {
    start: DateTime<Utc>,
    end: DateTime<Utc>,
    buffer_seconds: i64,
}

impl TimeWindow {
    /// Builds the window that ends at `end` and looks back `buffer`.
    pub fn ending_at(end: DateTime<Utc>, buffer: BufferLength) -> Result<Self> {
        let buffer_seconds = buffer.seconds();
        let start = TimeDelta::try_seconds(buffer_seconds)
            .and_then(|delta| end.checked_sub_signed(delta))
            .ok_or_else(|| Error::InvalidBuffer(buffer.hours().to_string()))?;

        Ok(Self {
            start,
            end,
            buffer_seconds,
        })
    }

    #[must_use]
    pub fn start(&self) -> DateTime<Utc> {
        self.start
    }

    #[must_use]
    pub fn end(&self) -> DateTime<Utc> {
        self.end
    }

    #[must_use]
    pub fn buffer_seconds(&self) -> i64 {
        self.buffer_seconds
    }

    /// Start time in viewer format.
    #[must_use]
    pub fn start_text(&self) -> String {
        self.start.format(VIEWER_TIME_FORMAT).to_string()
    }

    /// End time in viewer format.
    #[must_use]
    pub fn end_text(&self) -> String {
        self.end.format(VIEWER_TIME_FORMAT).to_string()
    }
}
