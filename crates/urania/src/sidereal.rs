//! Sidereal time and the simplified chart angles derived from it.
//!
//! The ascendant and midheaven here are illustrative approximations. They do
//! not solve for oblique ascension and should not be read as astronomical
//! values.

use crate::calendar::J2000;
use crate::zodiac::{sign_for_day_of_year, SignPosition, ZodiacSign};

const DAYS_PER_CENTURY: f64 = 36_525.0;

/// Local sidereal time in degrees, [0, 360).
///
/// Greenwich mean sidereal time from the IAU polynomial in Julian centuries
/// since J2000, shifted by the observer's east longitude.
pub fn local_sidereal_time(jd: f64, longitude: f64) -> f64 {
    let d = jd - J2000;
    let t = d / DAYS_PER_CENTURY;
    let gmst = 280.460_618_37 + 360.985_647_366_29 * d + 0.000_387_933 * t * t
        - t * t * t / 38_710_000.0;
    let lst = (gmst + longitude) % 360.0;
    if lst < 0.0 {
        lst + 360.0
    } else {
        lst
    }
}

/// Rising sign from sidereal time, nudged by half the latitude and mapped
/// onto the day-of-year sign ranges.
pub fn ascendant(jd: f64, latitude: f64, longitude: f64) -> ZodiacSign {
    let lst = local_sidereal_time(jd, longitude);
    ascendant_from_lst(lst, latitude)
}

pub(crate) fn ascendant_from_lst(lst: f64, latitude: f64) -> ZodiacSign {
    let ascendant_degree = (lst + latitude * 0.5) % 360.0;
    let equivalent_day = (ascendant_degree / 360.0 * 365.0).floor() as i64;
    sign_for_day_of_year(equivalent_day)
}

/// Midheaven placed opposite the sidereal point.
pub fn midheaven(lst: f64) -> SignPosition {
    SignPosition::from_longitude((lst + 180.0) % 360.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lst_in_range() {
        for jd in [2_415_020.5, J2000, 2_448_087.77, 2_470_000.25] {
            for lon in [-180.0, -74.0, 0.0, 139.7, 180.0] {
                let lst = local_sidereal_time(jd, lon);
                assert!((0.0..360.0).contains(&lst), "lst {lst} for jd {jd} lon {lon}");
            }
        }
    }

    #[test]
    fn test_gmst_at_epoch() {
        let lst = local_sidereal_time(J2000, 0.0);
        assert!((lst - 280.46061837).abs() < 1e-6);
    }

    #[test]
    fn test_longitude_shifts_lst() {
        let base = local_sidereal_time(J2000, 0.0);
        let east = local_sidereal_time(J2000, 30.0);
        assert!((east - base - 30.0).abs() < 1e-6);
    }

    #[test]
    fn test_ascendant_uses_day_ranges() {
        // 0° maps to day 0, which falls in the Capricorn wrap
        assert_eq!(ascendant_from_lst(0.0, 0.0), ZodiacSign::Capricorn);
        // 100° -> day 101 -> Aries
        assert_eq!(ascendant_from_lst(100.0, 0.0), ZodiacSign::Aries);
        // latitude 40 adds 20°: 180° -> day 182 -> Cancer
        assert_eq!(ascendant_from_lst(160.0, 40.0), ZodiacSign::Cancer);
    }

    #[test]
    fn test_midheaven_opposes_lst() {
        let mc = midheaven(10.0);
        assert_eq!(mc.sign, ZodiacSign::Libra);
        assert!((mc.degree - 10.0).abs() < 1e-9);
    }
}
