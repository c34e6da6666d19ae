//! Recursive tree generation

use tracing::{debug, info, warn};

use super::config::{GeneratorConfig, NamePools};
use crate::error::ConfigError;
use crate::location::Location;
use crate::map::{Map, path};
use crate::rng::RandomSource;

/// Draws per name before falling back to a numbered synthetic name
pub const MAX_NAME_ATTEMPTS: usize = 10;

/// What a generation run produced
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct GenerationSummary {
    pub directories: usize,
    pub files: usize,
    pub hidden_files: usize,
    pub max_depth: u32,
}

/// Builds maps from a configuration and an injected random source
///
/// Given the same source sequence, pools and config, the generated tree is
/// identical.
#[derive(Debug, Clone)]
pub struct MapGenerator<R> {
    rng: R,
    pools: NamePools,
}

impl<R: RandomSource> MapGenerator<R> {
    pub fn new(rng: R) -> Self {
        Self::with_name_pools(rng, NamePools::default())
    }

    pub fn with_name_pools(rng: R, pools: NamePools) -> Self {
        Self { rng, pools }
    }

    pub fn name_pools(&self) -> &NamePools {
        &self.pools
    }

    /// The injected source, e.g. to roll elements from the same stream
    pub fn rng_mut(&mut self) -> &mut R {
        &mut self.rng
    }

    pub fn into_rng(self) -> R {
        self.rng
    }

    /// Validate `config` and populate `map` from the root.
    ///
    /// Nothing is written to `map` when validation fails.
    pub fn generate_file_system(
        &mut self,
        map: &mut Map,
        config: &GeneratorConfig,
    ) -> Result<GenerationSummary, ConfigError> {
        config.validate()?;
        self.pools.validate()?;

        let mut summary = GenerationSummary::default();
        self.populate(map, config, "/", 1, &mut summary);

        info!(
            directories = summary.directories,
            files = summary.files,
            hidden_files = summary.hidden_files,
            max_depth = summary.max_depth,
            "generated file system"
        );
        Ok(summary)
    }

    /// Fill one directory whose children sit at `depth`.
    fn populate(
        &mut self,
        map: &mut Map,
        config: &GeneratorConfig,
        dir: &str,
        depth: u32,
        summary: &mut GenerationSummary,
    ) {
        let mut num_directories = self.rng.count_up_to(config.max_directories_per_level);
        if depth < config.min_depth && config.max_directories_per_level > 0 {
            num_directories = num_directories.max(1);
        }

        for _ in 0..num_directories {
            let name = self.unique_directory_name(map, dir);
            let location = Location::directory(name.as_str(), dir);
            let child_path = location.path();
            map.add_location(location);
            summary.directories += 1;
            summary.max_depth = summary.max_depth.max(depth);
            debug!(path = %child_path, depth, "created directory");

            // directories at max_depth stay empty
            if depth < config.max_depth {
                self.populate(map, config, &child_path, depth + 1, summary);
            }
        }

        let mut num_files = self.rng.count_up_to(config.max_files_per_directory);
        if (depth == 1 || depth >= config.min_depth) && config.max_files_per_directory > 0 {
            num_files = num_files.max(1);
        }

        for _ in 0..num_files {
            let hidden = self.rng.unit() < config.hidden_file_ratio;
            let name = if hidden {
                self.unique_hidden_file_name(map, dir)
            } else {
                self.unique_file_name(map, dir, &config.file_types)
            };
            map.add_location(Location::file(name, dir));
            summary.files += 1;
            if hidden {
                summary.hidden_files += 1;
            }
            summary.max_depth = summary.max_depth.max(depth);
        }
    }

    fn unique_directory_name(&mut self, map: &Map, dir: &str) -> String {
        for _ in 0..MAX_NAME_ATTEMPTS {
            if let Some(name) = self.rng.choose(&self.pools.directories)
                && !name_taken(map, dir, name)
            {
                return name.clone();
            }
        }
        fallback_name(map, dir, |n| format!("dir{n}"))
    }

    fn unique_hidden_file_name(&mut self, map: &Map, dir: &str) -> String {
        for _ in 0..MAX_NAME_ATTEMPTS {
            if let Some(name) = self.rng.choose(&self.pools.hidden_files)
                && !name_taken(map, dir, name)
            {
                return name.clone();
            }
        }
        fallback_name(map, dir, |n| format!(".hidden{n}"))
    }

    fn unique_file_name(&mut self, map: &Map, dir: &str, file_types: &[String]) -> String {
        let mut extension = "";
        for _ in 0..MAX_NAME_ATTEMPTS {
            let base = self.rng.choose(&self.pools.files);
            extension = self
                .rng
                .choose(file_types)
                .map(String::as_str)
                .unwrap_or("");
            if let Some(base) = base {
                let name = format!("{base}{extension}");
                if !name_taken(map, dir, &name) {
                    return name;
                }
            }
        }
        fallback_name(map, dir, |n| format!("file{n}{extension}"))
    }
}

fn name_taken(map: &Map, dir: &str, name: &str) -> bool {
    map.get_locations(dir).iter().any(|loc| loc.name() == name)
}

/// First `make(n)` for n = 1, 2, ... that no sibling uses
fn fallback_name(map: &Map, dir: &str, make: impl Fn(usize) -> String) -> String {
    let siblings = map.get_locations(dir);
    let name = (1..=siblings.len() + 1)
        .map(&make)
        .find(|candidate| !siblings.iter().any(|loc| loc.name() == candidate))
        .unwrap_or_else(|| make(siblings.len() + 1));
    warn!(dir = %path::normalize(dir), name = %name, "name pool exhausted, using fallback");
    name
}
