//! Birth moment and place, plus optional validation.

use chrono::{Datelike, NaiveDate, NaiveDateTime, Timelike};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::calendar;

/// Date, local clock time and location of a birth.
///
/// Construction never validates. Call [`BirthData::validate`] (or use
/// `ChartGenerator::try_generate`) to reject impossible values up front.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BirthData {
    pub day: i32,
    pub month: i32,
    pub year: i32,
    pub hour: i32,
    pub min: i32,
    /// Degrees north
    pub lat: f64,
    /// Degrees east
    pub lon: f64,
    /// UTC offset in hours. Carried for callers, not applied to the Julian Day.
    pub tzone: f64,
}

/// Problems found in a [`BirthData`] value.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum BirthDataError {
    #[error("invalid calendar date {year:04}-{month:02}-{day:02}")]
    InvalidDate { year: i32, month: i32, day: i32 },
    #[error("invalid clock time {hour:02}:{minute:02}")]
    InvalidTime { hour: i32, minute: i32 },
    #[error("latitude must be between -90 and 90, got {0}")]
    LatitudeOutOfRange(f64),
    #[error("longitude must be between -180 and 180, got {0}")]
    LongitudeOutOfRange(f64),
    #[error("UTC offset must be between -12 and 14 hours, got {0}")]
    TimezoneOutOfRange(f64),
}

impl BirthData {
    pub fn from_naive(datetime: NaiveDateTime, lat: f64, lon: f64, tzone: f64) -> Self {
        Self {
            day: datetime.day() as i32,
            month: datetime.month() as i32,
            year: datetime.year(),
            hour: datetime.hour() as i32,
            min: datetime.minute() as i32,
            lat,
            lon,
            tzone,
        }
    }

    /// Julian Day of the birth moment (local clock time, `tzone` ignored).
    pub fn julian_day(&self) -> f64 {
        calendar::julian_day_number(self.year, self.month, self.day, self.hour, self.min)
    }

    pub fn day_of_year(&self) -> i64 {
        calendar::day_of_year(self.day, self.month, self.year)
    }

    /// Every problem with this value, in field order.
    pub fn problems(&self) -> Vec<BirthDataError> {
        let mut problems = Vec::new();

        let date_exists = u32::try_from(self.month)
            .ok()
            .zip(u32::try_from(self.day).ok())
            .and_then(|(month, day)| NaiveDate::from_ymd_opt(self.year, month, day))
            .is_some();
        if !date_exists {
            problems.push(BirthDataError::InvalidDate {
                year: self.year,
                month: self.month,
                day: self.day,
            });
        }

        if !(0..24).contains(&self.hour) || !(0..60).contains(&self.min) {
            problems.push(BirthDataError::InvalidTime { hour: self.hour, minute: self.min });
        }

        if !self.lat.is_finite() || !(-90.0..=90.0).contains(&self.lat) {
            problems.push(BirthDataError::LatitudeOutOfRange(self.lat));
        }
        if !self.lon.is_finite() || !(-180.0..=180.0).contains(&self.lon) {
            problems.push(BirthDataError::LongitudeOutOfRange(self.lon));
        }
        if !self.tzone.is_finite() || !(-12.0..=14.0).contains(&self.tzone) {
            problems.push(BirthDataError::TimezoneOutOfRange(self.tzone));
        }

        problems
    }

    /// First problem found, if any.
    pub fn validate(&self) -> Result<(), BirthDataError> {
        match self.problems().into_iter().next() {
            Some(problem) => Err(problem),
            None => Ok(()),
        }
    }
}
