//! Error types for map construction, navigation and placement.

use thiserror::Error;

/// Rejected generator or probability-table configuration.
///
/// Raised before any mutation of the map, so the caller can retry with a
/// corrected configuration.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("max_depth must be at least 1")]
    InvalidMaxDepth,

    #[error("min_depth must be at least 1")]
    InvalidMinDepth,

    #[error("min_depth ({min_depth}) exceeds max_depth ({max_depth})")]
    MinDepthExceedsMax { min_depth: u32, max_depth: u32 },

    #[error("file type pool is empty")]
    EmptyFileTypes,

    #[error("invalid file type '{0}': expected an extension such as '.txt'")]
    InvalidFileType(String),

    #[error("hidden_file_ratio must be within [0, 1], got {0}")]
    InvalidHiddenFileRatio(f64),

    #[error("name pool '{0}' is empty")]
    EmptyNamePool(&'static str),

    #[error("invalid name '{name}' in pool '{pool}'")]
    InvalidPoolName { pool: &'static str, name: String },

    #[error("invalid configuration document: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Failed cursor movement or listing. The current path is left unchanged.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum NavigationError {
    #[error("no such file or directory: {path}")]
    NotFound { path: String },

    #[error("not a directory: {path}")]
    NotADirectory { path: String },

    #[error("already at root directory")]
    AlreadyAtRoot,
}

/// The map cannot hold a valid boss/key pair.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PlacementError {
    #[error("not enough file locations for boss and key: required {required}, found {found}")]
    InsufficientLocations { required: usize, found: usize },

    #[error("no file location left for the key after placing the boss")]
    NoLocationForKey,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_navigation_error_display() {
        let err = NavigationError::NotADirectory {
            path: "/etc/passwd".to_string(),
        };
        assert_eq!(err.to_string(), "not a directory: /etc/passwd");
        assert_eq!(
            NavigationError::AlreadyAtRoot.to_string(),
            "already at root directory"
        );
    }

    #[test]
    fn test_placement_error_reports_counts() {
        let err = PlacementError::InsufficientLocations {
            required: 2,
            found: 1,
        };
        assert!(err.to_string().contains("required 2, found 1"));
    }

    #[test]
    fn test_config_error_from_json() {
        let parse = serde_json::from_str::<u32>("-1").unwrap_err();
        let err = ConfigError::from(parse);
        assert!(matches!(err, ConfigError::Parse(_)));
    }
}
