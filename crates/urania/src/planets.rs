//! Synthetic planet placements.
//!
//! This is not an ephemeris. Each body is advanced around the zodiac by its
//! orbital period from the J2000 epoch, offset by the day of year and its
//! table position. Output is stable for a given birth moment, except for the
//! retrograde flag which is drawn from the supplied random source.

use rand::Rng;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::birth::BirthData;
use crate::calendar::J2000;
use crate::vedic::nakshatra_for_longitude;
use crate::western::dignities::{dignity_of, Dignity};
use crate::zodiac::{degree_in_sign, normalize_degrees, ZodiacSign};

const DAYS_PER_YEAR: f64 = 365.25;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Planet {
    Sun,
    Moon,
    Mercury,
    Venus,
    Mars,
    Jupiter,
    Saturn,
    Uranus,
    Neptune,
    Pluto,
}

/// Bodies in table order with their orbital (synodic for the Moon) period in
/// years. The table index feeds the sign and house offsets.
pub const ORBITAL_PERIODS: [(Planet, f64); 10] = [
    (Planet::Sun, 1.0),
    (Planet::Moon, 0.0748),
    (Planet::Mercury, 0.241),
    (Planet::Venus, 0.615),
    (Planet::Mars, 1.881),
    (Planet::Jupiter, 11.86),
    (Planet::Saturn, 29.46),
    (Planet::Uranus, 84.01),
    (Planet::Neptune, 164.8),
    (Planet::Pluto, 248.1),
];

impl Planet {
    pub fn name(&self) -> &'static str {
        match self {
            Planet::Sun => "Sun",
            Planet::Moon => "Moon",
            Planet::Mercury => "Mercury",
            Planet::Venus => "Venus",
            Planet::Mars => "Mars",
            Planet::Jupiter => "Jupiter",
            Planet::Saturn => "Saturn",
            Planet::Uranus => "Uranus",
            Planet::Neptune => "Neptune",
            Planet::Pluto => "Pluto",
        }
    }

    pub fn orbital_period(&self) -> f64 {
        ORBITAL_PERIODS[*self as usize].1
    }

    /// Chance of being flagged retrograde in a chart.
    pub fn retrograde_probability(&self) -> f64 {
        match self {
            Planet::Mercury | Planet::Venus => 0.2,
            _ => 0.1,
        }
    }
}

impl fmt::Display for Planet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlanetPosition {
    pub name: Planet,
    pub sign: ZodiacSign,
    /// Degree within the sign, two decimals
    pub degree: f64,
    /// 1..=12
    pub house: u8,
    pub retrograde: bool,
    pub dignity: Dignity,
    pub nakshatra: String,
    pub nakshatra_lord: String,
}

impl PlanetPosition {
    /// Placement with its dignity and nakshatra filled in from sign and degree.
    pub fn new(name: Planet, sign: ZodiacSign, degree: f64, house: u8, retrograde: bool) -> Self {
        let mansion = nakshatra_for_longitude(sign.index() as f64 * 30.0 + degree);
        Self {
            name,
            sign,
            degree,
            house,
            retrograde,
            dignity: dignity_of(name, sign),
            nakshatra: mansion.name.to_string(),
            nakshatra_lord: mansion.lord.to_string(),
        }
    }

    /// Ecliptic longitude rebuilt from sign and degree.
    pub fn longitude(&self) -> f64 {
        self.sign.index() as f64 * 30.0 + self.degree
    }
}

/// Place all ten bodies for a birth moment, in table order.
pub fn generate_planet_positions<R: Rng + ?Sized>(
    birth: &BirthData,
    rng: &mut R,
) -> Vec<PlanetPosition> {
    let jd = birth.julian_day();
    let day_of_year = birth.day_of_year() as f64;
    let years_from_epoch = (jd - J2000) / DAYS_PER_YEAR;

    ORBITAL_PERIODS
        .iter()
        .enumerate()
        .map(|(i, &(planet, period))| {
            let orbital_position = years_from_epoch / period * 360.0;
            let adjusted = normalize_degrees(
                day_of_year * (360.0 / period) + orbital_position + i as f64 * 30.0,
            );
            let sign_index = (adjusted / 30.0).floor() as usize;
            let sign = ZodiacSign::from_index(sign_index);

            PlanetPosition::new(
                planet,
                sign,
                degree_in_sign(adjusted),
                ((sign_index + i * 2) % 12 + 1) as u8,
                rng.gen_bool(planet.retrograde_probability()),
            )
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha20Rng;

    fn birth(year: i32, month: i32, day: i32) -> BirthData {
        BirthData { day, month, year, hour: 12, min: 0, lat: 0.0, lon: 0.0, tzone: 0.0 }
    }

    #[test]
    fn test_ten_planets_in_table_order() {
        let mut rng = ChaCha20Rng::seed_from_u64(7);
        let planets = generate_planet_positions(&birth(1990, 7, 15), &mut rng);
        assert_eq!(planets.len(), 10);
        for (position, (planet, _)) in planets.iter().zip(ORBITAL_PERIODS.iter()) {
            assert_eq!(position.name, *planet);
        }
    }

    #[test]
    fn test_ranges_hold_before_epoch() {
        // Far before J2000 the raw sum goes negative for fast bodies
        let mut rng = ChaCha20Rng::seed_from_u64(1);
        for year in [1800, 1900, 1950, 2000, 2100] {
            for position in generate_planet_positions(&birth(year, 1, 1), &mut rng) {
                assert!((0.0..30.0).contains(&position.degree));
                assert!((1..=12).contains(&position.house));
            }
        }
    }

    #[test]
    fn test_sun_placement_at_epoch() {
        // 2000-01-01 12:00: day 1, half a day past the epoch
        let mut rng = ChaCha20Rng::seed_from_u64(3);
        let planets = generate_planet_positions(&birth(2000, 1, 1), &mut rng);
        let sun = &planets[0];
        let expected = 360.0 + (0.5 / DAYS_PER_YEAR) * 360.0;
        let expected = expected % 360.0;
        assert_eq!(sun.sign, ZodiacSign::Aries);
        assert!((sun.degree - (expected * 100.0).round() / 100.0).abs() < 1e-9);
        assert_eq!(sun.house, 1);
    }

    #[test]
    fn test_same_seed_same_retrogrades() {
        let data = birth(1984, 3, 9);
        let a = generate_planet_positions(&data, &mut ChaCha20Rng::seed_from_u64(99));
        let b = generate_planet_positions(&data, &mut ChaCha20Rng::seed_from_u64(99));
        assert_eq!(a, b);
    }

    #[test]
    fn test_nakshatra_follows_longitude() {
        let mut rng = ChaCha20Rng::seed_from_u64(5);
        for position in generate_planet_positions(&birth(1990, 7, 15), &mut rng) {
            let mansion = nakshatra_for_longitude(position.longitude());
            assert_eq!(position.nakshatra, mansion.name);
            assert_eq!(position.nakshatra_lord, mansion.lord);
        }

        let placed = PlanetPosition::new(Planet::Moon, ZodiacSign::Taurus, 13.5, 4, false);
        assert_eq!(placed.nakshatra, "Rohini");
        assert_eq!(placed.nakshatra_lord, "Moon");
        assert_eq!(placed.dignity, Dignity::Exalted);
    }

    #[test]
    fn test_retrograde_probabilities() {
        assert_eq!(Planet::Mercury.retrograde_probability(), 0.2);
        assert_eq!(Planet::Venus.retrograde_probability(), 0.2);
        assert_eq!(Planet::Pluto.retrograde_probability(), 0.1);
    }
}
