//! Element probability tables and the weighted walk over them
//!
//! Percentages are a budget rather than a partition: whatever a tuple leaves
//! below 100 is the chance that no element spawns at all.

use hashbrown::HashMap;
use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::location::Location;

/// Spawn chances, in percent, for the four rollable element kinds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ElementProbabilities {
    pub monster: u32,
    pub treasure: u32,
    pub random_event: u32,
    pub save_point: u32,
}

impl ElementProbabilities {
    pub const fn new(monster: u32, treasure: u32, random_event: u32, save_point: u32) -> Self {
        Self {
            monster,
            treasure,
            random_event,
            save_point,
        }
    }

    /// Weights in walk order: monster, treasure, random event, save point
    pub const fn weights(&self) -> [u32; 4] {
        [self.monster, self.treasure, self.random_event, self.save_point]
    }

    pub const fn total(&self) -> u32 {
        self.monster + self.treasure + self.random_event + self.save_point
    }
}

const DIRECTORY: ElementProbabilities = ElementProbabilities::new(0, 0, 0, 0);
const HIDDEN: ElementProbabilities = ElementProbabilities::new(20, 50, 20, 10);
const DEFAULT: ElementProbabilities = ElementProbabilities::new(30, 20, 20, 10);

const BY_EXTENSION: &[(&str, ElementProbabilities)] = &[
    (".exe", ElementProbabilities::new(80, 5, 10, 5)),
    (".dll", ElementProbabilities::new(70, 10, 15, 5)),
    (".sh", ElementProbabilities::new(60, 10, 20, 5)),
    (".js", ElementProbabilities::new(50, 15, 20, 5)),
    (".ts", ElementProbabilities::new(45, 20, 20, 5)),
    (".py", ElementProbabilities::new(45, 20, 20, 5)),
    (".rs", ElementProbabilities::new(40, 25, 20, 5)),
    (".log", ElementProbabilities::new(20, 20, 40, 5)),
    (".json", ElementProbabilities::new(25, 35, 20, 5)),
    (".cfg", ElementProbabilities::new(20, 30, 25, 10)),
    (".txt", ElementProbabilities::new(15, 35, 25, 15)),
    (".md", ElementProbabilities::new(10, 30, 30, 20)),
];

/// Immutable lookup of spawn chances by location category
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProbabilityTables {
    pub directory: ElementProbabilities,
    pub hidden: ElementProbabilities,
    pub default: ElementProbabilities,
    pub by_extension: HashMap<String, ElementProbabilities>,
}

impl Default for ProbabilityTables {
    fn default() -> Self {
        Self::builtin()
    }
}

impl ProbabilityTables {
    /// The built-in table
    pub fn builtin() -> Self {
        Self {
            directory: DIRECTORY,
            hidden: HIDDEN,
            default: DEFAULT,
            by_extension: BY_EXTENSION
                .iter()
                .map(|(ext, probs)| (ext.to_string(), *probs))
                .collect(),
        }
    }

    /// Parse a table from JSON; omitted sections fall back to the built-in values.
    ///
    /// Extension keys are lower-cased and given a leading `.` if missing.
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let raw: ProbabilityTables = serde_json::from_str(json)?;
        let mut by_extension = HashMap::with_capacity(raw.by_extension.len());
        for (key, probs) in raw.by_extension {
            by_extension.insert(normalize_extension(&key)?, probs);
        }
        Ok(Self { by_extension, ..raw })
    }

    /// Tuple for a location: directory, then hidden file, then extension, then default
    pub fn lookup(&self, location: &Location) -> ElementProbabilities {
        if location.is_directory() {
            return self.directory;
        }
        if location.is_hidden() {
            return self.hidden;
        }
        location
            .file_extension()
            .and_then(|ext| self.by_extension.get(&ext.to_ascii_lowercase()))
            .copied()
            .unwrap_or(self.default)
    }
}

fn normalize_extension(key: &str) -> Result<String, ConfigError> {
    let trimmed = key.trim().trim_start_matches('.');
    if trimmed.is_empty() {
        return Err(ConfigError::InvalidFileType(key.to_string()));
    }
    Ok(format!(".{}", trimmed.to_ascii_lowercase()))
}

/// Walk `weights` in order, accumulating a running total; return the first
/// index whose cumulative upper bound exceeds `roll`.
///
/// Returns `None` when `roll` is at or beyond the sum of all weights.
pub fn roll_weighted(roll: f64, weights: &[u32]) -> Option<usize> {
    let mut cumulative = 0.0;
    for (index, weight) in weights.iter().enumerate() {
        cumulative += f64::from(*weight);
        if roll < cumulative {
            return Some(index);
        }
    }
    None
}
