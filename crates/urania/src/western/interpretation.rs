//! Fixed descriptive text for the sun, moon and rising signs.

use serde::{Deserialize, Serialize};

use crate::zodiac::ZodiacSign;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Interpretation {
    pub sun_sign_meaning: String,
    pub moon_sign_meaning: String,
    pub rising_sign_meaning: String,
}

const SUN_FALLBACK: &str = "Your sun sign describes your core identity and the way you shine.";
const MOON_FALLBACK: &str = "Your moon sign describes your emotional nature and inner needs.";
const RISING_FALLBACK: &str =
    "Your rising sign describes how you meet the world and how others first see you.";

// Indexed by `ZodiacSign::index`.
const SUN_MEANINGS: [&str; 12] = [
    "Bold and pioneering, you lead with courage and meet life head on.",
    "Grounded and patient, you build lasting comfort and value steady progress.",
    "Curious and quick, you thrive on ideas, conversation and variety.",
    "Protective and intuitive, you lead with feeling and care for those close to you.",
    "Warm and expressive, you shine through creativity and generous leadership.",
    "Thoughtful and precise, you find purpose in service and steady improvement.",
    "Gracious and fair, you seek harmony, beauty and balanced partnership.",
    "Intense and perceptive, you are drawn to depth, truth and transformation.",
    "Adventurous and open, you chase meaning, freedom and wider horizons.",
    "Disciplined and ambitious, you build structures that stand the test of time.",
    "Independent and inventive, you think ahead and work for the common good.",
    "Compassionate and imaginative, you move through life with empathy and vision.",
];

const MOON_MEANINGS: [&str; 12] = [
    "Your feelings ignite fast and pass quickly; you need room to act on them.",
    "You find emotional safety in routine, comfort and the physical world.",
    "You process feelings by talking them through and naming them.",
    "Your emotions run deep and you need a secure home base to recharge.",
    "You need to feel appreciated and to express your heart openly.",
    "You settle your feelings by being useful and bringing order to things.",
    "You feel best in peaceful relationships and balanced surroundings.",
    "Your emotions are private and powerful, and trust is earned slowly.",
    "You need freedom, optimism and a sense of adventure to feel at ease.",
    "You hold your feelings with restraint and find comfort in responsibility.",
    "You need emotional space and connect through shared ideals.",
    "You absorb the moods around you and need quiet time to recover.",
];

const RISING_MEANINGS: [&str; 12] = [
    "You come across as direct, energetic and ready to start something new.",
    "You come across as calm, dependable and quietly sensual.",
    "You come across as lively, witty and endlessly curious.",
    "You come across as gentle, caring and approachable.",
    "You come across as confident, radiant and hard to overlook.",
    "You come across as composed, observant and helpful.",
    "You come across as charming, poised and easy to be around.",
    "You come across as magnetic, reserved and quietly intense.",
    "You come across as friendly, open and full of enthusiasm.",
    "You come across as capable, serious and self-possessed.",
    "You come across as original, detached and a little unconventional.",
    "You come across as soft, dreamy and deeply receptive.",
];

fn lookup(table: &[&'static str; 12], sign: &str, fallback: &'static str) -> String {
    sign.parse::<ZodiacSign>()
        .map(|sign| table[sign.index()])
        .unwrap_or(fallback)
        .to_string()
}

/// Descriptions keyed by sign name (any case). Unknown names get a generic
/// sentence instead of an error.
pub fn get_interpretations(sun_sign: &str, moon_sign: &str, rising_sign: &str) -> Interpretation {
    Interpretation {
        sun_sign_meaning: lookup(&SUN_MEANINGS, sun_sign, SUN_FALLBACK),
        moon_sign_meaning: lookup(&MOON_MEANINGS, moon_sign, MOON_FALLBACK),
        rising_sign_meaning: lookup(&RISING_MEANINGS, rising_sign, RISING_FALLBACK),
    }
}
