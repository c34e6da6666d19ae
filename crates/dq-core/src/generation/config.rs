//! Generator configuration and name pools

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Bounds for the shape of a generated tree
///
/// Depth is counted in path segments: files directly under `/` are at depth 1.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneratorConfig {
    pub max_depth: u32,
    pub min_depth: u32,
    pub max_files_per_directory: u32,
    pub max_directories_per_level: u32,
    /// Extensions, each with a leading dot
    pub file_types: Vec<String>,
    /// Chance in `[0, 1]` that a generated file is a dotfile
    pub hidden_file_ratio: f64,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            max_depth: 4,
            min_depth: 2,
            max_files_per_directory: 4,
            max_directories_per_level: 3,
            file_types: [
                ".txt", ".md", ".json", ".log", ".sh", ".py", ".rs", ".ts", ".js", ".exe",
                ".dll", ".cfg",
            ]
            .iter()
            .map(|s| s.to_string())
            .collect(),
            hidden_file_ratio: 0.15,
        }
    }
}

impl GeneratorConfig {
    /// Parse and validate a JSON document; omitted fields take their defaults.
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let config: GeneratorConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.max_depth == 0 {
            return Err(ConfigError::InvalidMaxDepth);
        }
        if self.min_depth < 1 {
            return Err(ConfigError::InvalidMinDepth);
        }
        if self.min_depth > self.max_depth {
            return Err(ConfigError::MinDepthExceedsMax {
                min_depth: self.min_depth,
                max_depth: self.max_depth,
            });
        }
        if self.file_types.is_empty() {
            return Err(ConfigError::EmptyFileTypes);
        }
        if let Some(bad) = self
            .file_types
            .iter()
            .find(|ext| ext.len() < 2 || !ext.starts_with('.') || ext.contains('/'))
        {
            return Err(ConfigError::InvalidFileType(bad.clone()));
        }
        if !(0.0..=1.0).contains(&self.hidden_file_ratio) {
            return Err(ConfigError::InvalidHiddenFileRatio(self.hidden_file_ratio));
        }
        Ok(())
    }
}

/// Names the generator draws from
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct NamePools {
    pub directories: Vec<String>,
    /// File base names, combined with an extension from the config
    pub files: Vec<String>,
    /// Complete dotfile names, used as-is
    pub hidden_files: Vec<String>,
}

const DIRECTORY_NAMES: &[&str] = &[
    "bin", "etc", "home", "usr", "var", "tmp", "lib", "opt", "srv", "mnt", "src", "docs",
    "logs", "cache", "config", "data", "backup", "projects", "downloads", "secrets",
];

const FILE_NAMES: &[&str] = &[
    "main", "index", "config", "readme", "notes", "data", "script", "app", "utils", "server",
    "report", "backup", "todo", "install", "setup",
];

const HIDDEN_FILE_NAMES: &[&str] = &[
    ".bashrc", ".profile", ".gitignore", ".env", ".secret", ".history", ".vimrc", ".npmrc",
];

impl Default for NamePools {
    fn default() -> Self {
        Self {
            directories: owned(DIRECTORY_NAMES),
            files: owned(FILE_NAMES),
            hidden_files: owned(HIDDEN_FILE_NAMES),
        }
    }
}

impl NamePools {
    pub fn new(
        directories: impl IntoIterator<Item = impl Into<String>>,
        files: impl IntoIterator<Item = impl Into<String>>,
        hidden_files: impl IntoIterator<Item = impl Into<String>>,
    ) -> Self {
        Self {
            directories: directories.into_iter().map(Into::into).collect(),
            files: files.into_iter().map(Into::into).collect(),
            hidden_files: hidden_files.into_iter().map(Into::into).collect(),
        }
    }

    /// Every pool must be non-empty and hold only single path segments.
    pub fn validate(&self) -> Result<(), ConfigError> {
        for (pool, names) in [
            ("directories", &self.directories),
            ("files", &self.files),
            ("hidden_files", &self.hidden_files),
        ] {
            if names.is_empty() {
                return Err(ConfigError::EmptyNamePool(pool));
            }
            if let Some(bad) = names.iter().find(|name| !is_segment(name)) {
                return Err(ConfigError::InvalidPoolName {
                    pool,
                    name: bad.clone(),
                });
            }
        }
        Ok(())
    }
}

/// A name that normalizes to itself when joined under a directory
fn is_segment(name: &str) -> bool {
    !name.is_empty() && name != "." && name != ".." && !name.contains('/')
}

fn owned(names: &[&str]) -> Vec<String> {
    names.iter().map(|s| s.to_string()).collect()
}
