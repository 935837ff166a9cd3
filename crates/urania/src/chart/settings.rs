use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::aspects::{AspectKind, AspectTable};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChartSettings {
    /// Seed for the retrograde flags. `None` draws from OS entropy, so two
    /// charts of the same birth may differ in those flags only.
    pub retrograde_seed: Option<u64>,

    /// Validate birth data before computing. Off keeps the pass-through
    /// behavior where impossible dates still produce a chart.
    pub strict: bool,

    /// Orb overrides keyed by aspect name ("trine", "Sextile", ...)
    pub orbs: HashMap<String, f64>,
}

impl ChartSettings {
    pub fn seeded(seed: u64) -> Self {
        Self { retrograde_seed: Some(seed), ..Self::default() }
    }

    /// Canonical aspect table with any orb overrides applied.
    pub fn aspect_table(&self) -> AspectTable {
        let mut overrides: Vec<(&String, &f64)> = self.orbs.iter().collect();
        overrides.sort_by(|a, b| a.0.cmp(b.0));

        overrides.into_iter().fold(AspectTable::default(), |table, (name, orb)| {
            match name.parse::<AspectKind>() {
                Ok(kind) if orb.is_finite() && *orb >= 0.0 => table.with_orb(kind, *orb),
                Ok(kind) => {
                    log::warn!("Ignoring orb {} for {}: must be a non-negative number", orb, kind);
                    table
                }
                Err(e) => {
                    log::warn!("Ignoring orb override: {}", e);
                    table
                }
            }
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_table_is_canonical() {
        assert_eq!(ChartSettings::default().aspect_table(), AspectTable::default());
    }

    #[test]
    fn test_orb_overrides() {
        let mut settings = ChartSettings::default();
        settings.orbs.insert("TRINE".to_string(), 7.5);
        settings.orbs.insert("quincunx".to_string(), 3.0);
        settings.orbs.insert("square".to_string(), -1.0);

        let table = settings.aspect_table();
        assert_eq!(table.orb_for(AspectKind::Trine), Some(7.5));
        assert_eq!(table.orb_for(AspectKind::Square), Some(6.0));
        assert_eq!(table.rules().len(), 5);
    }
}
