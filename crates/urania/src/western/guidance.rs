//! Career guidance read from the sun, moon, personal planets and midheaven.

use serde::{Deserialize, Serialize};

use crate::planets::{Planet, PlanetPosition};
use crate::zodiac::ZodiacSign;

const BASE_VIBE_SCORE: u8 = 50;
const MAX_VIBE_SCORE: u8 = 100;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CareerGuidance {
    pub soul_purpose: String,
    pub ideal_careers: Vec<String>,
    pub work_style: String,
    pub leadership: String,
    pub challenges: Vec<String>,
    pub natural_talents: Vec<String>,
    /// 1..=100, how well the chart's drives line up
    pub vibe_match_score: u8,
    pub soul_sync_areas: Vec<String>,
}

// All tables below are indexed by `ZodiacSign::index`.

const SOUL_PURPOSE: [&str; 12] = [
    "Pioneer and innovator, meant to lead and start new ventures",
    "Builder of lasting value, creating stability and beauty in the world",
    "Communicator and bridge-builder, connecting ideas and people",
    "Nurturer and protector, caring for others and preserving traditions",
    "Creative leader and entertainer, inspiring others through self-expression",
    "Healer and improver, serving others through practical skills",
    "Peacemaker and aesthete, bringing harmony and beauty to relationships",
    "Transformer and researcher, uncovering hidden truths and facilitating change",
    "Teacher and explorer, sharing wisdom and expanding horizons",
    "Authority and architect, building lasting structures and systems",
    "Revolutionary and humanitarian, advancing society through innovation",
    "Visionary and healer, bringing compassion and spirituality to the world",
];

const CAREERS: [&[&str]; 12] = [
    &["Entrepreneur", "Military Leader", "Sports Coach", "Emergency Responder", "Startup Founder"],
    &["Banking/Finance", "Agriculture", "Art/Design", "Real Estate", "Food Industry"],
    &["Journalism", "Teaching", "Sales", "Technology", "Social Media", "Writing"],
    &[
        "Healthcare",
        "Education",
        "Social Work",
        "Hospitality",
        "Real Estate",
        "Family Business",
    ],
    &["Entertainment", "Leadership Roles", "Creative Arts", "Public Speaking", "Politics"],
    &["Healthcare", "Research", "Editing", "Analysis", "Administration", "Quality Control"],
    &["Law", "Diplomacy", "Design", "Counseling", "HR", "Beauty/Fashion"],
    &[
        "Psychology",
        "Investigation",
        "Research",
        "Surgery",
        "Finance",
        "Transformation Work",
    ],
    &["Education", "Publishing", "Travel", "Philosophy", "International Business"],
    &["Management", "Government", "Architecture", "Engineering", "Corporate Leadership"],
    &["Technology", "Science", "Social Activism", "Innovation", "Humanitarian Work"],
    &["Arts", "Healing", "Spirituality", "Psychology", "Film/Photography", "Charity Work"],
];

const WORK_STYLE: [&str; 12] = [
    "Fast-paced, competitive, independent leadership style",
    "Steady, methodical, prefers stability and routine",
    "Flexible, communicative, thrives on variety and mental stimulation",
    "Collaborative, nurturing, values emotional connections at work",
    "Creative, dramatic, needs recognition and opportunities to shine",
    "Detail-oriented, practical, excels at improvement and organization",
    "Diplomatic, fair, works best in harmonious team environments",
    "Intense, transformative, prefers depth over breadth",
    "Adventurous, philosophical, needs freedom and big-picture thinking",
    "Strategic, ambitious, natural executive and long-term planner",
    "Innovative, humanitarian, works best with cutting-edge ideas",
    "Intuitive, compassionate, thrives in creative or healing environments",
];

const CHALLENGES: [&[&str]; 12] = [
    &["Impatience with slow progress", "Need to develop follow-through"],
    &["Resistance to change", "May get stuck in comfort zones"],
    &["Difficulty with long-term focus", "May scatter energy too widely"],
    &["Taking work problems too personally", "Need for emotional security"],
    &["Need for constant recognition", "Pride may interfere with teamwork"],
    &["Perfectionism causing delays", "May get lost in details"],
    &["Difficulty making tough decisions", "Avoiding necessary conflicts"],
    &["Intensity may overwhelm others", "Trust issues in workplace"],
    &["Impatience with routine tasks", "May overcommit to projects"],
    &["Workaholic tendencies", "May neglect work-life balance"],
    &["Difficulty with traditional structures", "May seem aloof to colleagues"],
    &["Boundary issues at work", "May avoid practical business matters"],
];

const TALENTS: [&[&str]; 12] = [
    &["Leadership", "Innovation", "Quick decision-making"],
    &["Reliability", "Building lasting systems", "Financial management"],
    &["Communication", "Adaptability", "Information synthesis"],
    &["Intuition", "Team building", "Customer relations"],
    &["Creativity", "Public speaking", "Inspiring others"],
    &["Analysis", "Problem-solving", "Quality improvement"],
    &["Diplomacy", "Aesthetic sense", "Relationship building"],
    &["Research", "Transformation", "Crisis management"],
    &["Teaching", "Vision casting", "Cultural bridge-building"],
    &["Strategic planning", "Executive skills", "Long-term thinking"],
    &["Innovation", "Systems thinking", "Social awareness"],
    &["Intuition", "Compassion", "Creative vision"],
];

const SOUL_SYNC_AREAS: [&str; 4] = [
    "Emotional fulfillment through meaningful work",
    "Alignment with personal values and ethics",
    "Contributing to collective growth and wisdom",
    "Balancing material success with spiritual purpose",
];

const CAREER_MIDHEAVENS: [ZodiacSign; 3] =
    [ZodiacSign::Capricorn, ZodiacSign::Leo, ZodiacSign::Aries];

fn owned(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

fn sign_of(planets: &[PlanetPosition], planet: Planet) -> Option<ZodiacSign> {
    planets.iter().find(|p| p.name == planet).map(|p| p.sign)
}

fn in_harmony(a: Option<ZodiacSign>, b: Option<ZodiacSign>) -> bool {
    match (a, b) {
        (Some(a), Some(b)) => a == b || a.is_compatible_with(b),
        _ => false,
    }
}

impl CareerGuidance {
    pub fn from_chart(planets: &[PlanetPosition], midheaven: ZodiacSign) -> Self {
        let sun = sign_of(planets, Planet::Sun);
        let moon = sign_of(planets, Planet::Moon);
        let mars = sign_of(planets, Planet::Mars);

        let mut score = BASE_VIBE_SCORE;
        if in_harmony(sun, mars) {
            score += 15;
        }
        if in_harmony(moon, sign_of(planets, Planet::Venus)) {
            score += 15;
        }
        if in_harmony(sign_of(planets, Planet::Mercury), sign_of(planets, Planet::Jupiter)) {
            score += 10;
        }
        if CAREER_MIDHEAVENS.contains(&midheaven) {
            score += 10;
        }

        let leadership = match mars {
            Some(ZodiacSign::Aries | ZodiacSign::Leo | ZodiacSign::Capricorn) => {
                "Natural leader with strong executive abilities"
            }
            _ => "Collaborative leader who inspires through expertise",
        };

        let by_sun = sun.map(|s| s.index());
        Self {
            soul_purpose: by_sun
                .map(|i| SOUL_PURPOSE[i])
                .unwrap_or("Unique path of self-discovery and service")
                .to_string(),
            ideal_careers: by_sun
                .map(|i| owned(CAREERS[i]))
                .unwrap_or_else(|| owned(&["Creative fields", "Service professions"])),
            work_style: by_sun
                .map(|i| WORK_STYLE[i])
                .unwrap_or("Balanced approach to work and life")
                .to_string(),
            leadership: leadership.to_string(),
            challenges: by_sun.map(|i| owned(CHALLENGES[i])).unwrap_or_else(|| {
                owned(&["Learning to balance personal needs with professional demands"])
            }),
            natural_talents: by_sun.map(|i| owned(TALENTS[i])).unwrap_or_default(),
            vibe_match_score: score.min(MAX_VIBE_SCORE),
            soul_sync_areas: owned(&SOUL_SYNC_AREAS),
        }
    }
}
