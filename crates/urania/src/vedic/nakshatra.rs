//! The 27 lunar mansions.
//!
//! Each nakshatra spans 13°20' of the zodiac. Bounds are kept at two
//! decimals, so a mansion covers `start <= lon < end` exactly as listed.

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Nakshatra {
    pub name: &'static str,
    /// Ruling graha; Rahu and Ketu are not among the charted planets.
    pub lord: &'static str,
    pub deity: &'static str,
    pub start: f64,
    pub end: f64,
}

const fn mansion(
    name: &'static str,
    lord: &'static str,
    deity: &'static str,
    start: f64,
    end: f64,
) -> Nakshatra {
    Nakshatra { name, lord, deity, start, end }
}

pub const NAKSHATRAS: [Nakshatra; 27] = [
    mansion("Ashwini", "Ketu", "Ashwini Kumaras", 0.0, 13.33),
    mansion("Bharani", "Venus", "Yama", 13.33, 26.67),
    mansion("Krittika", "Sun", "Agni", 26.67, 40.0),
    mansion("Rohini", "Moon", "Brahma", 40.0, 53.33),
    mansion("Mrigashira", "Mars", "Soma", 53.33, 66.67),
    mansion("Ardra", "Rahu", "Rudra", 66.67, 80.0),
    mansion("Punarvasu", "Jupiter", "Aditi", 80.0, 93.33),
    mansion("Pushya", "Saturn", "Brihaspati", 93.33, 106.67),
    mansion("Ashlesha", "Mercury", "Nagas", 106.67, 120.0),
    mansion("Magha", "Ketu", "Pitrs", 120.0, 133.33),
    mansion("Purva Phalguni", "Venus", "Bhaga", 133.33, 146.67),
    mansion("Uttara Phalguni", "Sun", "Aryaman", 146.67, 160.0),
    mansion("Hasta", "Moon", "Savitar", 160.0, 173.33),
    mansion("Chitra", "Mars", "Vishvakarma", 173.33, 186.67),
    mansion("Swati", "Rahu", "Vayu", 186.67, 200.0),
    mansion("Vishakha", "Jupiter", "Indra-Agni", 200.0, 213.33),
    mansion("Anuradha", "Saturn", "Mitra", 213.33, 226.67),
    mansion("Jyeshtha", "Mercury", "Indra", 226.67, 240.0),
    mansion("Mula", "Ketu", "Nirrti", 240.0, 253.33),
    mansion("Purva Ashadha", "Venus", "Apas", 253.33, 266.67),
    mansion("Uttara Ashadha", "Sun", "Vishve Devas", 266.67, 280.0),
    mansion("Shravana", "Moon", "Vishnu", 280.0, 293.33),
    mansion("Dhanishta", "Mars", "Vasus", 293.33, 306.67),
    mansion("Shatabhisha", "Rahu", "Varuna", 306.67, 320.0),
    mansion("Purva Bhadrapada", "Jupiter", "Aja Ekapada", 320.0, 333.33),
    mansion("Uttara Bhadrapada", "Saturn", "Ahir Budhnya", 333.33, 346.67),
    mansion("Revati", "Mercury", "Pushan", 346.67, 360.0),
];

/// Nakshatra containing `longitude`, taken modulo 360.
///
/// Anything the table does not cover (negative or non-finite longitudes)
/// resolves to Ashwini.
pub fn nakshatra_for_longitude(longitude: f64) -> &'static Nakshatra {
    let lon = longitude % 360.0;
    NAKSHATRAS
        .iter()
        .find(|n| lon >= n.start && lon < n.end)
        .unwrap_or(&NAKSHATRAS[0])
}
