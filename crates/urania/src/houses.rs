//! Equal 30° houses anchored on sidereal time.
//!
//! Not Placidus: every cusp is the previous one plus 30°, with the whole
//! wheel turned by a quarter of the latitude.

use serde::{Deserialize, Serialize};

use crate::birth::BirthData;
use crate::sidereal::local_sidereal_time;
use crate::zodiac::{degree_in_sign, normalize_degrees, ZodiacSign};

pub const HOUSE_COUNT: u8 = 12;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HouseInfo {
    pub house: u8,
    pub sign: ZodiacSign,
    pub degree: f64,
}

pub fn generate_house_system(birth: &BirthData) -> Vec<HouseInfo> {
    let lst = local_sidereal_time(birth.julian_day(), birth.lon);
    houses_from_lst(lst, birth.lat)
}

pub(crate) fn houses_from_lst(lst: f64, latitude: f64) -> Vec<HouseInfo> {
    (1..=HOUSE_COUNT)
        .map(|house| {
            let cusp = lst + f64::from(house - 1) * 30.0 + latitude * 0.25;
            // Non-finite latitude leaves nothing to place; pin the wheel at 0°
            let cusp = if cusp.is_finite() { normalize_degrees(cusp) } else { 0.0 };
            HouseInfo {
                house,
                sign: ZodiacSign::from_index((cusp / 30.0).floor() as usize),
                degree: degree_in_sign(cusp),
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_twelve_houses_in_order() {
        let houses = houses_from_lst(100.0, 40.0);
        assert_eq!(houses.len(), 12);
        for (i, house) in houses.iter().enumerate() {
            assert_eq!(house.house as usize, i + 1);
            assert!((0.0..30.0).contains(&house.degree));
        }
    }

    #[test]
    fn test_cusps_step_one_sign() {
        // 100 + 10 = 110°: Cancer 20°
        let houses = houses_from_lst(100.0, 40.0);
        assert_eq!(houses[0].sign, ZodiacSign::Cancer);
        assert!((houses[0].degree - 20.0).abs() < 1e-9);
        assert_eq!(houses[1].sign, ZodiacSign::Leo);
        assert_eq!(houses[11].sign, ZodiacSign::Gemini);
    }

    #[test]
    fn test_southern_latitude_wraps() {
        // 5 - 20 = -15° -> 345° Pisces
        let houses = houses_from_lst(5.0, -80.0);
        assert_eq!(houses[0].sign, ZodiacSign::Pisces);
        assert!((houses[0].degree - 15.0).abs() < 1e-9);
    }

    #[test]
    fn test_nan_latitude_does_not_panic() {
        let houses = houses_from_lst(5.0, f64::NAN);
        assert_eq!(houses.len(), 12);
        assert_eq!(houses[0].sign, ZodiacSign::Aries);
    }
}
