//! Birth chart generation.
//!
//! A chart is built from a [`BirthData`] in one pass: calendar date to Julian
//! Day, then sidereal time, sun sign and rising sign, synthetic planet
//! placements with their nakshatras, equal houses, pairwise aspects, yogas
//! and finally the fixed interpretation text.
//!
//! ```no_run
//! use urania::{BirthData, ChartGenerator, ChartSettings};
//!
//! let birth = BirthData {
//!     day: 15,
//!     month: 7,
//!     year: 1990,
//!     hour: 6,
//!     min: 30,
//!     lat: 40.7,
//!     lon: -74.0,
//!     tzone: -5.0,
//! };
//! let chart = ChartGenerator::new(ChartSettings::seeded(7)).generate(&birth);
//! println!("{} sun, {} rising", chart.sun_sign, chart.rising_sign);
//! ```

pub mod aspects;
pub mod birth;
pub mod calendar;
pub mod chart;
pub mod error;
pub mod houses;
pub mod planets;
pub mod sidereal;
pub mod vedic;
pub mod western;
pub mod zodiac;

pub use aspects::{Aspect, AspectCalculator, AspectKind, AspectTable};
pub use birth::{BirthData, BirthDataError};
pub use calendar::{day_of_year, julian_day_number};
pub use chart::{generate_birth_chart, BirthChart, ChartError, ChartGenerator, ChartSettings};
pub use error::ParseError;
pub use houses::{generate_house_system, HouseInfo};
pub use planets::{generate_planet_positions, Planet, PlanetPosition};
pub use sidereal::{ascendant, local_sidereal_time, midheaven};
pub use vedic::{identify_yogas, nakshatra_for_longitude, Nakshatra, Yoga, YogaKind};
pub use western::{get_interpretations, CareerGuidance, Dignity, Interpretation};
pub use zodiac::{sign_for_day_of_year, Element, SignPosition, ZodiacSign};
