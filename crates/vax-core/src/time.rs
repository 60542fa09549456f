//! Campaign calendar time.
//!
//! # Design
//!
//! A vaccination slot is identified by a calendar date plus a wall-clock
//! minute: [`SlotTime`].  The derived ordering is date-first, then
//! time-of-day, which is exactly the primary sort key of an appointment book.
//!
//! Day arithmetic delegates to `chrono` so month/year rollover and leap years
//! are always Gregorian-correct.  Dose-interval offsets operate on whole days
//! and never touch the time-of-day component: a series booked at 10:30 stays
//! at 10:30 for every dose.

use std::fmt;

use chrono::{Days, NaiveDate, NaiveTime};

use crate::error::{CoreError, CoreResult};

/// Wire format of the date component (`31/12/2022`).
pub const DATE_FMT: &str = "%d/%m/%Y";

/// Wire format of the time component (`18:45`).
pub const TIME_FMT: &str = "%H:%M";

// ── SlotTime ──────────────────────────────────────────────────────────────────

/// A calendar date plus wall-clock time, minute resolution.
///
/// Cheap to copy; the derived `Ord` compares `date` first, then `time`.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SlotTime {
    pub date: NaiveDate,
    pub time: NaiveTime,
}

impl SlotTime {
    pub fn new(date: NaiveDate, time: NaiveTime) -> Self {
        Self { date, time }
    }

    /// Build from numeric components.  `None` if any component is out of
    /// range (e.g. 30/02 or 25:00).
    pub fn from_ymd_hm(year: i32, month: u32, day: u32, hour: u32, minute: u32) -> Option<Self> {
        Some(Self {
            date: NaiveDate::from_ymd_opt(year, month, day)?,
            time: NaiveTime::from_hms_opt(hour, minute, 0)?,
        })
    }

    /// The slot `n` calendar days after `self`, same time-of-day.
    ///
    /// Rollover across month and year boundaries is handled by `chrono`.
    #[inline]
    pub fn add_days(self, n: u64) -> SlotTime {
        SlotTime {
            date: self.date + Days::new(n),
            time: self.time,
        }
    }

    /// Parse the two wire fields `31/12/2022` and `18:45`.
    pub fn parse(date: &str, time: &str) -> CoreResult<Self> {
        let date = NaiveDate::parse_from_str(date, DATE_FMT)
            .map_err(|e| CoreError::Parse(format!("invalid date {date:?}: {e}")))?;
        let time = NaiveTime::parse_from_str(time, TIME_FMT)
            .map_err(|e| CoreError::Parse(format!("invalid time {time:?}: {e}")))?;
        Ok(Self { date, time })
    }
}

impl fmt::Display for SlotTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.date.format(DATE_FMT), self.time.format(TIME_FMT))
    }
}
