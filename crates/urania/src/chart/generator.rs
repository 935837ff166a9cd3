//! Chart assembly: runs each calculation in dependency order and collects
//! the results into a [`BirthChart`].

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha20Rng;

use crate::aspects::AspectCalculator;
use crate::birth::BirthData;
use crate::chart::settings::ChartSettings;
use crate::chart::types::{BirthChart, ChartError};
use crate::houses::houses_from_lst;
use crate::planets::{generate_planet_positions, Planet};
use crate::sidereal::{ascendant_from_lst, local_sidereal_time, midheaven};
use crate::vedic::identify_yogas;
use crate::western::{get_interpretations, CareerGuidance};
use crate::zodiac::sign_for_day_of_year;

#[derive(Debug, Clone, Default)]
pub struct ChartGenerator {
    settings: ChartSettings,
    aspects: AspectCalculator,
}

impl ChartGenerator {
    pub fn new(settings: ChartSettings) -> Self {
        let aspects = AspectCalculator::with_table(settings.aspect_table());
        Self { settings, aspects }
    }

    pub fn settings(&self) -> &ChartSettings {
        &self.settings
    }

    /// Build a chart. Never fails: impossible input produces a chart of
    /// meaningless but well-formed values.
    pub fn generate(&self, birth: &BirthData) -> BirthChart {
        let mut rng = match self.settings.retrograde_seed {
            Some(seed) => ChaCha20Rng::seed_from_u64(seed),
            None => ChaCha20Rng::from_entropy(),
        };
        self.generate_with_rng(birth, &mut rng)
    }

    /// Like [`generate`](Self::generate), but rejects invalid birth data when
    /// the settings ask for strict input.
    pub fn try_generate(&self, birth: &BirthData) -> Result<BirthChart, ChartError> {
        if self.settings.strict {
            birth.validate()?;
        }
        Ok(self.generate(birth))
    }

    /// Build a chart drawing retrograde flags from `rng`.
    pub fn generate_with_rng<R: Rng + ?Sized>(&self, birth: &BirthData, rng: &mut R) -> BirthChart {
        log::debug!("Generating birth chart for {:?}", birth);

        let jd = birth.julian_day();
        let day_of_year = birth.day_of_year();
        let lst = local_sidereal_time(jd, birth.lon);
        log::debug!("jd={:.5} day_of_year={} lst={:.4}", jd, day_of_year, lst);

        let sun_sign = sign_for_day_of_year(day_of_year);
        let rising_sign = ascendant_from_lst(lst, birth.lat);

        let planets = generate_planet_positions(birth, rng);
        let moon_sign = planets
            .iter()
            .find(|p| p.name == Planet::Moon)
            .map(|p| p.sign)
            .unwrap_or(sun_sign);

        let houses = houses_from_lst(lst, birth.lat);
        let aspects = self.aspects.generate_aspects(&planets);
        let mc = midheaven(lst);
        let yogas = identify_yogas(&planets);

        log::info!(
            "Chart resolved: sun {} moon {} rising {} ({} aspects, {} yogas)",
            sun_sign,
            moon_sign,
            rising_sign,
            aspects.len(),
            yogas.len()
        );

        BirthChart {
            sun_sign,
            moon_sign,
            rising_sign,
            interpretation: get_interpretations(
                sun_sign.name(),
                moon_sign.name(),
                rising_sign.name(),
            ),
            career_guidance: CareerGuidance::from_chart(&planets, mc.sign),
            midheaven: mc,
            yogas,
            planets,
            houses,
            aspects,
        }
    }
}

/// Chart with default settings (unseeded retrograde flags, no validation).
pub fn generate_birth_chart(birth: &BirthData) -> BirthChart {
    ChartGenerator::default().generate(birth)
}
