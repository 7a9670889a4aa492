//! Analysis inputs and loading from JSON / portfolio CSV

mod data;
pub mod loader;

pub use data::{InputParameters, ProjectMetadata, Thresholds, FORECAST_YEARS};
pub use loader::{load_analysis, load_parts, load_parts_from_reader};
