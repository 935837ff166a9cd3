pub mod generator;
pub mod settings;
pub mod types;

pub use generator::{generate_birth_chart, ChartGenerator};
pub use settings::ChartSettings;
pub use types::{BirthChart, ChartError};
