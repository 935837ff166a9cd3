use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::ParseError;
use crate::planets::Planet;

/// The five major aspects, in matching priority order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AspectKind {
    Conjunction,
    Opposition,
    Trine,
    Square,
    Sextile,
}

pub const ASPECT_KINDS: [AspectKind; 5] = [
    AspectKind::Conjunction,
    AspectKind::Opposition,
    AspectKind::Trine,
    AspectKind::Square,
    AspectKind::Sextile,
];

impl AspectKind {
    pub fn name(&self) -> &'static str {
        match self {
            AspectKind::Conjunction => "Conjunction",
            AspectKind::Opposition => "Opposition",
            AspectKind::Trine => "Trine",
            AspectKind::Square => "Square",
            AspectKind::Sextile => "Sextile",
        }
    }

    /// Exact separation in degrees.
    pub fn angle(&self) -> f64 {
        match self {
            AspectKind::Conjunction => 0.0,
            AspectKind::Opposition => 180.0,
            AspectKind::Trine => 120.0,
            AspectKind::Square => 90.0,
            AspectKind::Sextile => 60.0,
        }
    }

    /// Canonical orb allowance in degrees.
    pub fn default_orb(&self) -> f64 {
        match self {
            AspectKind::Conjunction | AspectKind::Opposition => 8.0,
            AspectKind::Trine | AspectKind::Square => 6.0,
            AspectKind::Sextile => 4.0,
        }
    }
}

impl fmt::Display for AspectKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for AspectKind {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ASPECT_KINDS
            .iter()
            .copied()
            .find(|kind| kind.name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| ParseError::UnknownAspect(s.to_string()))
    }
}

/// One row of the aspect table.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AspectRule {
    pub kind: AspectKind,
    pub angle: f64,
    pub orb: f64,
}

/// Ordered aspect rules; the first rule whose orb admits a separation wins.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AspectTable {
    rules: Vec<AspectRule>,
}

impl AspectTable {
    pub fn rules(&self) -> &[AspectRule] {
        &self.rules
    }

    /// Replace the orb of one aspect, keeping the table order.
    pub fn with_orb(mut self, kind: AspectKind, orb: f64) -> Self {
        if let Some(rule) = self.rules.iter_mut().find(|rule| rule.kind == kind) {
            rule.orb = orb;
        }
        self
    }

    pub fn orb_for(&self, kind: AspectKind) -> Option<f64> {
        self.rules.iter().find(|rule| rule.kind == kind).map(|rule| rule.orb)
    }
}

impl Default for AspectTable {
    fn default() -> Self {
        Self {
            rules: ASPECT_KINDS
                .iter()
                .map(|&kind| AspectRule { kind, angle: kind.angle(), orb: kind.default_orb() })
                .collect(),
        }
    }
}

/// A matched aspect before it is attached to a planet pair.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AspectMatch {
    pub kind: AspectKind,
    /// Actual separation, [0, 180]
    pub angle: f64,
    /// Distance from the exact angle
    pub orb: f64,
}

/// An aspect between two planets of a chart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Aspect {
    pub planet1: Planet,
    pub planet2: Planet,
    pub aspect: AspectKind,
    pub angle: f64,
    pub orb: f64,
}
