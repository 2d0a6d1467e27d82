// SPDX-License-Identifier: MPL-2.0
//! Look-back window length.

use crate::error::{Error, Result};

/// Seconds per hour.
const SECONDS_PER_HOUR: f64 = 3600.0;

/// Buffer length in hours, guaranteed finite and non-negative.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BufferLength(f64);

impl BufferLength {
    /// Parses the buffer selector text.
    ///
    /// Empty text means a zero-length buffer. Anything else must be a finite,
    /// non-negative decimal number of hours.
    pub fn parse(text: &str) -> Result<Self> {
        let trimmed = text.trim();
        if trimmed.is_empty() {
            return Ok(Self(0.0));
        }

        match trimmed.parse::<f64>() {
            Ok(hours) if hours.is_finite() && hours >= 0.0 => Ok(Self(hours)),
            _ => Err(Error::InvalidBuffer(text.to_string())),
        }
    }

    #[must_use]
    pub fn hours(self) -> f64 {
        self.0
    }

    /// Buffer length in whole seconds, rounded to nearest.
    #[must_use]
    pub fn seconds(self) -> i64 {
        // Saturating cast; anything this large is rejected later by chrono.
        #[allow(clippy::cast_possible_truncation)]
        let seconds = (self.0 * SECONDS_PER_HOUR).round() as i64;
        seconds
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn whole_hours_convert_exactly() {
        assert_eq!(BufferLength::parse("1").unwrap().seconds(), 3600);
        assert_eq!(BufferLength::parse("48").unwrap().seconds(), 172_800);
    }

    #[test]
    fn fractional_hours_round_to_nearest_second() {
        assert_eq!(BufferLength::parse("0.1").unwrap().seconds(), 360);
        assert_eq!(BufferLength::parse("0.5").unwrap().seconds(), 1800);
        // 0.0001 h = 0.36 s
        assert_eq!(BufferLength::parse("0.0001").unwrap().seconds(), 0);
        // 0.0002 h = 0.72 s
        assert_eq!(BufferLength::parse("0.0002").unwrap().seconds(), 1);
    }

    #[test]
    fn empty_text_is_zero() {
        assert_eq!(BufferLength::parse("").unwrap().seconds(), 0);
        assert_eq!(BufferLength::parse("   ").unwrap().seconds(), 0);
    }

    #[test]
    fn surrounding_whitespace_is_ignored() {
        assert_eq!(BufferLength::parse(" 2 ").unwrap().hours(), 2.0);
    }

    #[test]
    fn negative_and_garbage_are_rejected() {
        assert!(matches!(
            BufferLength::parse("-1"),
            Err(Error::InvalidBuffer(_))
        ));
        assert!(matches!(
            BufferLength::parse("two"),
            Err(Error::InvalidBuffer(_))
        ));
        assert!(matches!(
            BufferLength::parse("NaN"),
            Err(Error::InvalidBuffer(_))
        ));
        assert!(matches!(
            BufferLength::parse("inf"),
            Err(Error::InvalidBuffer(_))
        ));
    }
}
