//! Calendar to Julian Day conversion.
//!
//! Both functions are total: impossible dates (month 13, day 40) are not
//! rejected, they simply roll through the arithmetic.

/// Julian Day of J2000.0 (2000-01-01 12:00 TT).
pub const J2000: f64 = 2_451_545.0;

/// Julian Day for a proleptic Gregorian date and clock time.
///
/// Integer day number from the Fliegel-Van Flandern formula, plus the
/// fraction of the day elapsed since midnight.
pub fn julian_day_number(year: i32, month: i32, day: i32, hour: i32, minute: i32) -> f64 {
    let jdn = day_number(year as f64, month as f64, day as f64);
    jdn + (hour as f64 + minute as f64 / 60.0) / 24.0
}

/// Same as [`julian_day_number`] for a chrono date-time, seconds ignored.
pub fn julian_day_from_naive(dt: &chrono::NaiveDateTime) -> f64 {
    use chrono::{Datelike, Timelike};
    julian_day_number(
        dt.year(),
        dt.month() as i32,
        dt.day() as i32,
        dt.hour() as i32,
        dt.minute() as i32,
    )
}

/// Ordinal day within the year (Jan 1 = 1), measured against Jan 0 of the
/// same year.
pub fn day_of_year(day: i32, month: i32, year: i32) -> i64 {
    let (rolled_year, rolled_month) = roll_month(year as f64, month as f64);
    let date = day_number(rolled_year, rolled_month, day as f64);
    let jan_zero = day_number(year as f64, 1.0, 0.0);
    (date - jan_zero) as i64
}

fn day_number(year: f64, month: f64, day: f64) -> f64 {
    let a = ((14.0 - month) / 12.0).floor();
    let y = year + 4800.0 - a;
    let m = month + 12.0 * a - 3.0;

    let leap_days = (y / 4.0).floor() - (y / 100.0).floor() + (y / 400.0).floor();
    day + ((153.0 * m + 2.0) / 5.0).floor() + 365.0 * y + leap_days - 32045.0
}

// Month 13 of 1999 is January 2000, month 0 is December of the year before.
fn roll_month(year: f64, month: f64) -> (f64, f64) {
    let zero_based = month - 1.0;
    let carry = (zero_based / 12.0).floor();
    (year + carry, zero_based - carry * 12.0 + 1.0)
}
