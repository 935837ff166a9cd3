use crate::aspects::types::{Aspect, AspectMatch, AspectTable};
use crate::planets::PlanetPosition;
use crate::zodiac::round2;

/// Aspect calculator
#[derive(Debug, Clone, Default)]
pub struct AspectCalculator {
    table: AspectTable,
}

impl AspectCalculator {
    /// Calculator with the canonical orbs
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_table(table: AspectTable) -> Self {
        Self { table }
    }

    pub fn table(&self) -> &AspectTable {
        &self.table
    }

    /// Aspects between every pair of planets, in `i < j` order.
    /// At most one aspect is reported per pair.
    pub fn generate_aspects(&self, planets: &[PlanetPosition]) -> Vec<Aspect> {
        let mut aspects = Vec::new();
        for i in 0..planets.len() {
            for j in (i + 1)..planets.len() {
                let p1 = &planets[i];
                let p2 = &planets[j];

                if let Some(found) = self.calculate_aspect(p1.longitude(), p2.longitude()) {
                    aspects.push(Aspect {
                        planet1: p1.name,
                        planet2: p2.name,
                        aspect: found.kind,
                        angle: found.angle,
                        orb: found.orb,
                    });
                }
            }
        }
        aspects
    }

    /// Calculate aspect between two longitudes
    pub fn calculate_aspect(&self, lon1: f64, lon2: f64) -> Option<AspectMatch> {
        // Calculate angle difference (normalized to 0-180)
        let raw_diff = (lon1 - lon2).abs();
        let angle_diff = if raw_diff > 180.0 {
            360.0 - raw_diff
        } else {
            raw_diff
        };

        // First rule in table order wins
        self.table.rules().iter().find_map(|rule| {
            let orb = (angle_diff - rule.angle).abs();
            (orb <= rule.orb).then(|| AspectMatch {
                kind: rule.kind,
                angle: round2(angle_diff),
                orb: round2(orb),
            })
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::aspects::types::AspectKind;

    #[test]
    fn test_exact_opposition() {
        let found = AspectCalculator::new().calculate_aspect(10.0, 190.0).unwrap();
        assert_eq!(found.kind, AspectKind::Opposition);
        assert_eq!(found.orb, 0.0);
        assert_eq!(found.angle, 180.0);
    }

    #[test]
    fn test_difference_wraps_past_180() {
        // 355 and 5 are 10 apart, outside the conjunction orb
        assert!(AspectCalculator::new().calculate_aspect(355.0, 5.0).is_none());
        let found = AspectCalculator::new().calculate_aspect(357.0, 3.0).unwrap();
        assert_eq!(found.kind, AspectKind::Conjunction);
        assert_eq!(found.angle, 6.0);
    }

    #[test]
    fn test_orb_edges() {
        let calc = AspectCalculator::new();
        assert_eq!(calc.calculate_aspect(0.0, 64.0).map(|a| a.kind), Some(AspectKind::Sextile));
        assert!(calc.calculate_aspect(0.0, 64.5).is_none());
        assert_eq!(calc.calculate_aspect(0.0, 96.0).map(|a| a.kind), Some(AspectKind::Square));
        assert!(calc.calculate_aspect(0.0, 45.0).is_none());
    }

    #[test]
    fn test_custom_orbs() {
        let table = AspectTable::default().with_orb(AspectKind::Sextile, 6.0);
        let calc = AspectCalculator::with_table(table);
        let found = calc.calculate_aspect(0.0, 65.5).unwrap();
        assert_eq!(found.kind, AspectKind::Sextile);
        assert_eq!(found.orb, 5.5);
    }
}
