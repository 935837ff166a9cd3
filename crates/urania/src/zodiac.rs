//! Zodiac signs, day-of-year sign ranges and longitude to sign conversion.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::ParseError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ZodiacSign {
    Aries,
    Taurus,
    Gemini,
    Cancer,
    Leo,
    Virgo,
    Libra,
    Scorpio,
    Sagittarius,
    Capricorn,
    Aquarius,
    Pisces,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Element {
    Fire,
    Earth,
    Air,
    Water,
}

/// Signs in ecliptic order, starting at 0° Aries.
pub const SIGNS: [ZodiacSign; 12] = [
    ZodiacSign::Aries,
    ZodiacSign::Taurus,
    ZodiacSign::Gemini,
    ZodiacSign::Cancer,
    ZodiacSign::Leo,
    ZodiacSign::Virgo,
    ZodiacSign::Libra,
    ZodiacSign::Scorpio,
    ZodiacSign::Sagittarius,
    ZodiacSign::Capricorn,
    ZodiacSign::Aquarius,
    ZodiacSign::Pisces,
];

/// Inclusive day-of-year ranges for a common (non-leap) year.
/// Capricorn spans the year boundary and is matched separately.
const SUN_SIGN_DAYS: [(ZodiacSign, i64, i64); 11] = [
    (ZodiacSign::Aries, 80, 109),
    (ZodiacSign::Taurus, 110, 140),
    (ZodiacSign::Gemini, 141, 171),
    (ZodiacSign::Cancer, 172, 203),
    (ZodiacSign::Leo, 204, 234),
    (ZodiacSign::Virgo, 235, 265),
    (ZodiacSign::Libra, 266, 295),
    (ZodiacSign::Scorpio, 296, 325),
    (ZodiacSign::Sagittarius, 326, 355),
    (ZodiacSign::Aquarius, 20, 49),
    (ZodiacSign::Pisces, 50, 79),
];

const CAPRICORN_FROM: i64 = 356;
const CAPRICORN_TO: i64 = 19;

impl ZodiacSign {
    pub fn name(&self) -> &'static str {
        match self {
            ZodiacSign::Aries => "Aries",
            ZodiacSign::Taurus => "Taurus",
            ZodiacSign::Gemini => "Gemini",
            ZodiacSign::Cancer => "Cancer",
            ZodiacSign::Leo => "Leo",
            ZodiacSign::Virgo => "Virgo",
            ZodiacSign::Libra => "Libra",
            ZodiacSign::Scorpio => "Scorpio",
            ZodiacSign::Sagittarius => "Sagittarius",
            ZodiacSign::Capricorn => "Capricorn",
            ZodiacSign::Aquarius => "Aquarius",
            ZodiacSign::Pisces => "Pisces",
        }
    }

    /// Position in the sign table, Aries = 0.
    pub fn index(&self) -> usize {
        *self as usize
    }

    /// Sign at `index mod 12`.
    pub fn from_index(index: usize) -> Self {
        SIGNS[index % 12]
    }

    pub fn element(&self) -> Element {
        match self.index() % 4 {
            0 => Element::Fire,
            1 => Element::Earth,
            2 => Element::Air,
            _ => Element::Water,
        }
    }

    /// Two signs of the same element are treated as harmonious.
    pub fn is_compatible_with(&self, other: ZodiacSign) -> bool {
        self.element() == other.element()
    }
}

impl fmt::Display for ZodiacSign {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ZodiacSign {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        SIGNS
            .iter()
            .copied()
            .find(|sign| sign.name().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| ParseError::UnknownSign(s.to_string()))
    }
}

/// Sun sign for an ordinal day of the year.
///
/// Every integer is covered: anything up to day 19 or from day 356 on is
/// Capricorn, so the Aries fallback is never reached in practice.
pub fn sign_for_day_of_year(day_of_year: i64) -> ZodiacSign {
    if day_of_year >= CAPRICORN_FROM || day_of_year <= CAPRICORN_TO {
        return ZodiacSign::Capricorn;
    }
    SUN_SIGN_DAYS
        .iter()
        .find(|(_, start, end)| (*start..=*end).contains(&day_of_year))
        .map(|(sign, _, _)| *sign)
        .unwrap_or(ZodiacSign::Aries)
}

/// Round to two decimal places.
pub(crate) fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Wrap any longitude into [0, 360).
pub(crate) fn normalize_degrees(longitude: f64) -> f64 {
    let wrapped = longitude % 360.0;
    if wrapped < 0.0 {
        wrapped + 360.0
    } else {
        wrapped
    }
}

/// A sign plus the degree reached within it.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SignPosition {
    pub sign: ZodiacSign,
    /// Degree within the sign, two decimals, in [0, 30)
    pub degree: f64,
}

impl SignPosition {
    /// Sign and degree for an ecliptic longitude. Non-finite input maps to
    /// 0° Aries.
    pub fn from_longitude(longitude: f64) -> Self {
        if !longitude.is_finite() {
            return Self { sign: ZodiacSign::Aries, degree: 0.0 };
        }
        let lon = normalize_degrees(longitude);
        let sign_index = (lon / 30.0).floor() as usize;
        Self {
            sign: ZodiacSign::from_index(sign_index),
            degree: degree_in_sign(lon),
        }
    }

    /// Absolute ecliptic longitude, `index * 30 + degree`.
    pub fn longitude(&self) -> f64 {
        self.sign.index() as f64 * 30.0 + self.degree
    }
}

// Rounding can carry 29.996 up to 30.00, which belongs to the next sign;
// keep the degree strictly inside the current one.
pub(crate) fn degree_in_sign(longitude: f64) -> f64 {
    let degree = round2(longitude % 30.0);
    if degree >= 30.0 {
        29.99
    } else {
        degree
    }
}
