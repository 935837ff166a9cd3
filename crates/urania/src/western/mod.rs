pub mod dignities;
pub mod guidance;
pub mod interpretation;

pub use dignities::{dignity_of, Dignity, DignityRule, DIGNITY_RULES};
pub use guidance::CareerGuidance;
pub use interpretation::{get_interpretations, Interpretation};
