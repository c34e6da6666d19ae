//! Map generation
//!
//! Populates a map from a configuration, then places the world boss and key.

mod config;
mod generator;
mod placement;

pub use config::{GeneratorConfig, NamePools};
pub use generator::{GenerationSummary, MAX_NAME_ATTEMPTS, MapGenerator};
pub use placement::Placement;
