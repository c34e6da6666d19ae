//! Cursor movement and directory listings

use tracing::debug;

use super::{Map, path};
use crate::error::NavigationError;
use crate::location::Location;

impl Map {
    pub fn get_current_path(&self) -> &str {
        &self.current_path
    }

    pub fn get_current_location(&self) -> Option<&Location> {
        self.find_location(&self.current_path)
    }

    /// Normalize `path` without reference to the cursor.
    pub fn normalize_path(&self, path: &str) -> String {
        path::normalize(path)
    }

    /// Resolve `path` against the current directory unless it is absolute.
    pub fn resolve_path(&self, path: &str) -> String {
        path::resolve(&self.current_path, path)
    }

    pub fn get_parent_path(&self, path: &str) -> String {
        path::parent(path)
    }

    /// Move the cursor to a directory and mark it explored.
    ///
    /// A bare `..` at the root is an error rather than a no-op. On failure
    /// the cursor does not move.
    pub fn navigate_to(&mut self, path: &str) -> Result<(), NavigationError> {
        let target = if path.trim() == ".." {
            if self.current_path == "/" {
                return Err(NavigationError::AlreadyAtRoot);
            }
            path::parent(&self.current_path)
        } else {
            self.resolve_path(path)
        };

        let location = self
            .find_location_mut(&target)
            .ok_or_else(|| NavigationError::NotFound {
                path: target.clone(),
            })?;
        if !location.is_directory() {
            return Err(NavigationError::NotADirectory { path: target });
        }
        location.mark_explored();

        debug!(from = %self.current_path, to = %target, "changed directory");
        self.current_path = target;
        Ok(())
    }

    /// Children of the current directory
    pub fn list_current_directory(
        &self,
        include_hidden: bool,
    ) -> Result<Vec<&Location>, NavigationError> {
        self.list_directory(&self.current_path, include_hidden)
    }

    /// Children of the directory at `path`, resolved against the cursor
    pub fn list_directory(
        &self,
        path: &str,
        include_hidden: bool,
    ) -> Result<Vec<&Location>, NavigationError> {
        let target = self.resolve_path(path);
        let location = self
            .find_location(&target)
            .ok_or_else(|| NavigationError::NotFound {
                path: target.clone(),
            })?;
        if !location.is_directory() {
            return Err(NavigationError::NotADirectory { path: target });
        }
        Ok(self
            .get_locations(&target)
            .iter()
            .filter(|loc| include_hidden || !loc.is_hidden())
            .collect())
    }
}
