//! Yoga detection from house placements and dignities.

use serde::{Deserialize, Serialize};

use crate::planets::{Planet, PlanetPosition};
use crate::western::dignities::Dignity;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum YogaKind {
    Raja,
    Dhana,
    Spiritual,
    Malefic,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Yoga {
    pub name: String,
    #[serde(rename = "type")]
    pub kind: YogaKind,
    pub description: String,
    pub planets: Vec<Planet>,
}

const BENEFICS: [Planet; 3] = [Planet::Jupiter, Planet::Venus, Planet::Mercury];

/// Angular houses.
const KENDRAS: [u8; 4] = [1, 4, 7, 10];
/// Trinal houses.
const TRIKONAS: [u8; 3] = [1, 5, 9];

fn ordinal(n: u8) -> String {
    let suffix = match (n % 10, n % 100) {
        (_, 11..=13) => "th",
        (1, _) => "st",
        (2, _) => "nd",
        (3, _) => "rd",
        _ => "th",
    };
    format!("{n}{suffix}")
}

fn find(planets: &[PlanetPosition], planet: Planet) -> Option<&PlanetPosition> {
    planets.iter().find(|p| p.name == planet)
}

/// Raja yogas for benefics in kendras or trikonas, Gaja Kesari, then one
/// Neecha Bhanga per debilitated planet, in that order.
pub fn identify_yogas(planets: &[PlanetPosition]) -> Vec<Yoga> {
    let mut yogas = Vec::new();

    for benefic in BENEFICS {
        let Some(position) = find(planets, benefic) else {
            continue;
        };
        if KENDRAS.contains(&position.house) || TRIKONAS.contains(&position.house) {
            yogas.push(Yoga {
                name: "Raja Yoga".to_string(),
                kind: YogaKind::Raja,
                description: format!(
                    "{} in {} house creates leadership potential and prosperity",
                    benefic,
                    ordinal(position.house)
                ),
                planets: vec![benefic],
            });
        }
    }

    // Jupiter in a kendra counted from the Moon
    let jupiter = find(planets, Planet::Jupiter);
    if let (Some(jupiter), Some(moon)) = (jupiter, find(planets, Planet::Moon)) {
        let distance = (i16::from(jupiter.house) - i16::from(moon.house)).rem_euclid(12) as u8;
        if KENDRAS.contains(&(distance + 1)) {
            yogas.push(Yoga {
                name: "Gaja Kesari Yoga".to_string(),
                kind: YogaKind::Raja,
                description: "Jupiter and Moon create wisdom, intelligence, and prosperity"
                    .to_string(),
                planets: vec![Planet::Jupiter, Planet::Moon],
            });
        }
    }

    for position in planets.iter().filter(|p| p.dignity == Dignity::Debilitated) {
        yogas.push(Yoga {
            name: "Neecha Bhanga Raja Yoga".to_string(),
            kind: YogaKind::Raja,
            description: format!(
                "Debilitated {} with potential for cancellation and ultimate strength",
                position.name
            ),
            planets: vec![position.name],
        });
    }

    log::debug!("Identified {} yogas", yogas.len());
    yogas
}
