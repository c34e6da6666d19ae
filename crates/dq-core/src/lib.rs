//! dq-core: the directory dungeon
//!
//! A synthetic Unix-like namespace that doubles as a dungeon. Directories and
//! files are nodes of a [`Map`]; files may carry one [`Element`] (monster,
//! treasure, event, save point, boss or key).
//!
//! All randomness is injected through [`RandomSource`], so a fixed source
//! reproduces the same tree and the same placements.
//!
//! ```
//! use dq_core::{ElementManager, GameRng, GeneratorConfig, Map, MapGenerator};
//!
//! let mut map = Map::new();
//! let mut generator = MapGenerator::new(GameRng::new(7));
//! generator.generate_file_system(&mut map, &GeneratorConfig::default())?;
//! let placement = generator.place_boss_and_key(&mut map, 1, &ElementManager::new())?;
//! assert_ne!(placement.boss_path, placement.key_path);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod element;
pub mod error;
pub mod generation;
pub mod location;
pub mod map;

mod rng;

pub use element::{Element, ElementKind, ElementManager, ElementProbabilities, ProbabilityTables};
pub use error::{ConfigError, NavigationError, PlacementError};
pub use generation::{GenerationSummary, GeneratorConfig, MapGenerator, NamePools, Placement};
pub use location::{Location, LocationInfo, LocationKind};
pub use map::{Map, MapStatistics};
pub use rng::{GameRng, RandomSource, ScriptedRng};
