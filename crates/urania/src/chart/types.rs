use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::aspects::Aspect;
use crate::birth::BirthDataError;
use crate::houses::HouseInfo;
use crate::planets::PlanetPosition;
use crate::vedic::Yoga;
use crate::western::{CareerGuidance, Interpretation};
use crate::zodiac::{SignPosition, ZodiacSign};

/// Errors that can occur while building a chart
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ChartError {
    #[error("invalid birth data: {0}")]
    InvalidBirthData(#[from] BirthDataError),
}

/// A complete natal chart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BirthChart {
    pub sun_sign: ZodiacSign,
    pub moon_sign: ZodiacSign,
    pub rising_sign: ZodiacSign,
    /// Sun through Pluto, table order
    pub planets: Vec<PlanetPosition>,
    /// Houses 1..=12
    pub houses: Vec<HouseInfo>,
    /// Pairwise aspects, `i < j` over `planets`
    pub aspects: Vec<Aspect>,
    pub interpretation: Interpretation,
    pub midheaven: SignPosition,
    pub yogas: Vec<Yoga>,
    pub career_guidance: CareerGuidance,
}
