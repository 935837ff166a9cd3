//! Essential dignities for the seven traditional planets.
//!
//! A planet is exalted or debilitated in one sign each and at home in its
//! own signs. The modern outer planets carry no dignity here.

use serde::{Deserialize, Serialize};

use crate::planets::Planet;
use crate::zodiac::ZodiacSign::{self, *};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Dignity {
    Exalted,
    Debilitated,
    Own,
    Neutral,
}

#[derive(Debug, Clone, Copy)]
pub struct DignityRule {
    pub planet: Planet,
    pub exaltation: ZodiacSign,
    pub debilitation: ZodiacSign,
    pub own_signs: &'static [ZodiacSign],
}

pub const DIGNITY_RULES: [DignityRule; 7] = [
    DignityRule {
        planet: Planet::Sun,
        exaltation: Aries,
        debilitation: Libra,
        own_signs: &[Leo],
    },
    DignityRule {
        planet: Planet::Moon,
        exaltation: Taurus,
        debilitation: Scorpio,
        own_signs: &[Cancer],
    },
    DignityRule {
        planet: Planet::Mercury,
        exaltation: Virgo,
        debilitation: Pisces,
        own_signs: &[Gemini, Virgo],
    },
    DignityRule {
        planet: Planet::Venus,
        exaltation: Pisces,
        debilitation: Virgo,
        own_signs: &[Taurus, Libra],
    },
    DignityRule {
        planet: Planet::Mars,
        exaltation: Capricorn,
        debilitation: Cancer,
        own_signs: &[Aries, Scorpio],
    },
    DignityRule {
        planet: Planet::Jupiter,
        exaltation: Cancer,
        debilitation: Capricorn,
        own_signs: &[Sagittarius, Pisces],
    },
    DignityRule {
        planet: Planet::Saturn,
        exaltation: Libra,
        debilitation: Aries,
        own_signs: &[Capricorn, Aquarius],
    },
];

pub fn rule_for(planet: Planet) -> Option<&'static DignityRule> {
    DIGNITY_RULES.iter().find(|rule| rule.planet == planet)
}

/// Exaltation wins over own sign (Mercury in Virgo is exalted).
pub fn dignity_of(planet: Planet, sign: ZodiacSign) -> Dignity {
    let Some(rule) = rule_for(planet) else {
        return Dignity::Neutral;
    };
    if rule.exaltation == sign {
        Dignity::Exalted
    } else if rule.debilitation == sign {
        Dignity::Debilitated
    } else if rule.own_signs.contains(&sign) {
        Dignity::Own
    } else {
        Dignity::Neutral
    }
}
