pub mod calculator;
pub mod types;

pub use calculator::AspectCalculator;
pub use types::{Aspect, AspectKind, AspectMatch, AspectRule, AspectTable, ASPECT_KINDS};
