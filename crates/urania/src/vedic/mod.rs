pub mod nakshatra;
pub mod yogas;

pub use nakshatra::{nakshatra_for_longitude, Nakshatra, NAKSHATRAS};
pub use yogas::{identify_yogas, Yoga, YogaKind};
