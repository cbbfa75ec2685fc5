//! SRT timestamps.

use std::fmt;
use std::sync::LazyLock;

use regex::Regex;

use super::ParseError;
use crate::constants::srt::TIMESTAMP_PATTERN;

#[allow(clippy::unwrap_used)]
static TIMESTAMP_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(TIMESTAMP_PATTERN).unwrap());

const MS_PER_SECOND: i64 = 1000;
const MS_PER_MINUTE: i64 = 60 * MS_PER_SECOND;
const MS_PER_HOUR: i64 = 60 * MS_PER_MINUTE;

/// Elapsed time from the start of the media, in whole milliseconds.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Timestamp(i64);

impl Timestamp {
    /// Create a timestamp from a millisecond count.
    #[must_use]
    pub const fn from_millis(millis: i64) -> Self {
        Self(millis)
    }

    /// Create a timestamp from its clock components.
    #[must_use]
    pub const fn from_hms_milli(hours: i64, minutes: i64, seconds: i64, millis: i64) -> Self {
        Self(hours * MS_PER_HOUR + minutes * MS_PER_MINUTE + seconds * MS_PER_SECOND + millis)
    }

    /// Total milliseconds.
    #[must_use]
    pub const fn as_millis(self) -> i64 {
        self.0
    }

    /// Signed distance `self - earlier` in seconds.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn seconds_since(self, earlier: Self) -> f64 {
        (self.0 - earlier.0) as f64 / 1000.0
    }

    /// Parse `HH:MM:SS,mmm` from the start of `s` (surrounding whitespace ignored).
    ///
    /// Anything after the matched timestamp is ignored, so SRT position
    /// hints such as `X1:100` do not cause a failure.
    pub fn parse(s: &str) -> Result<Self, ParseError> {
        let invalid = || ParseError::InvalidTimestamp {
            value: s.to_string(),
        };

        let caps = TIMESTAMP_RE.captures(s.trim()).ok_or_else(invalid)?;
        let field = |i: usize| -> Result<i64, ParseError> {
            caps.get(i)
                .and_then(|m| m.as_str().parse().ok())
                .ok_or_else(invalid)
        };

        Ok(Self::from_hms_milli(field(1)?, field(2)?, field(3)?, field(4)?))
    }
}

/// Renders `HH:MM:SS,mmm`; negative values clamp to zero and hours widen past 99.
impl fmt::Display for Timestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let total = self.0.max(0);
        let hours = total / MS_PER_HOUR;
        let minutes = (total % MS_PER_HOUR) / MS_PER_MINUTE;
        let seconds = (total % MS_PER_MINUTE) / MS_PER_SECOND;
        let millis = total % MS_PER_SECOND;
        write!(f, "{hours:02}:{minutes:02}:{seconds:02},{millis:03}")
    }
}
