//! Locations: the directory and file nodes of the map

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter};

use crate::element::Element;
use crate::map::path;

/// Directory or file. Fixed at construction.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumIter,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum LocationKind {
    Directory,
    File,
}

/// A node of the map
///
/// The path is derived from `parent_path` and `name`; the root is the only
/// location with an empty name.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Location {
    name: String,
    parent_path: String,
    kind: LocationKind,
    explored: bool,
    fully_inspected: bool,
    element: Option<Element>,
    metadata: BTreeMap<String, serde_json::Value>,
}

impl Location {
    /// Create a location named `name` inside `parent_path`.
    ///
    /// The parent path is normalized; the name is stored verbatim.
    pub fn new(name: impl Into<String>, parent_path: &str, kind: LocationKind) -> Self {
        Self {
            name: name.into(),
            parent_path: path::normalize(parent_path),
            kind,
            explored: false,
            fully_inspected: false,
            element: None,
            metadata: BTreeMap::new(),
        }
    }

    /// The root directory `/`
    pub fn root() -> Self {
        Self::new("", "/", LocationKind::Directory)
    }

    pub fn directory(name: impl Into<String>, parent_path: &str) -> Self {
        Self::new(name, parent_path, LocationKind::Directory)
    }

    pub fn file(name: impl Into<String>, parent_path: &str) -> Self {
        Self::new(name, parent_path, LocationKind::File)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn parent_path(&self) -> &str {
        &self.parent_path
    }

    /// Absolute path: `parent_path + "/" + name`, or `/` for the root
    pub fn path(&self) -> String {
        if self.is_root() {
            "/".to_string()
        } else if self.parent_path == "/" {
            format!("/{}", self.name)
        } else {
            format!("{}/{}", self.parent_path, self.name)
        }
    }

    pub fn kind(&self) -> LocationKind {
        self.kind
    }

    pub fn is_root(&self) -> bool {
        self.name.is_empty() && self.parent_path == "/"
    }

    pub fn is_directory(&self) -> bool {
        self.kind == LocationKind::Directory
    }

    pub fn is_file(&self) -> bool {
        self.kind == LocationKind::File
    }

    /// Extension including the leading dot, e.g. `.exe`
    ///
    /// Directories and names without a dot past the first character have none.
    pub fn file_extension(&self) -> Option<&str> {
        if !self.is_file() {
            return None;
        }
        match self.name.rfind('.') {
            Some(0) | None => None,
            Some(idx) if idx + 1 == self.name.len() => None,
            Some(idx) => Some(&self.name[idx..]),
        }
    }

    /// Dotfiles and dot-directories
    pub fn is_hidden(&self) -> bool {
        self.name.starts_with('.')
    }

    /// Number of path segments below the root; the root itself is 0.
    pub fn depth(&self) -> usize {
        if self.is_root() {
            0
        } else {
            path::depth(&self.parent_path) + 1
        }
    }

    pub fn has_element(&self) -> bool {
        self.element.is_some()
    }

    pub fn element(&self) -> Option<&Element> {
        self.element.as_ref()
    }

    pub fn element_mut(&mut self) -> Option<&mut Element> {
        self.element.as_mut()
    }

    /// Attach an element, returning the one it replaces.
    pub fn set_element(&mut self, element: Element) -> Option<Element> {
        self.element.replace(element)
    }

    pub fn clear_element(&mut self) -> Option<Element> {
        self.element.take()
    }

    pub fn is_explored(&self) -> bool {
        self.explored
    }

    pub fn mark_explored(&mut self) {
        self.explored = true;
    }

    pub fn is_fully_inspected(&self) -> bool {
        self.fully_inspected
    }

    /// Inspecting a location also explores it.
    pub fn mark_fully_inspected(&mut self) {
        self.explored = true;
        self.fully_inspected = true;
    }

    pub fn metadata(&self) -> &BTreeMap<String, serde_json::Value> {
        &self.metadata
    }

    pub fn set_metadata(
        &mut self,
        key: impl Into<String>,
        value: serde_json::Value,
    ) -> Option<serde_json::Value> {
        self.metadata.insert(key.into(), value)
    }

    /// Threat posed by the attached element; resolved or harmless elements score 0.
    pub fn danger_level(&self) -> u32 {
        match &self.element {
            Some(Element::Monster(m)) if !m.defeated => 1 + m.attack / 10,
            Some(Element::Boss(b)) if !b.defeated => {
                b.world_level.saturating_mul(2).saturating_add(5)
            }
            _ => 0,
        }
    }

    /// Snapshot for listings and for external save layers
    pub fn display_info(&self) -> LocationInfo {
        LocationInfo {
            name: self.name.clone(),
            path: self.path(),
            kind: self.kind,
            hidden: self.is_hidden(),
            explored: self.explored,
            fully_inspected: self.fully_inspected,
            danger_level: self.danger_level(),
            element: self.element.clone(),
        }
    }
}

/// Serializable view of a [`Location`]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LocationInfo {
    pub name: String,
    pub path: String,
    pub kind: LocationKind,
    pub hidden: bool,
    pub explored: bool,
    pub fully_inspected: bool,
    pub danger_level: u32,
    pub element: Option<Element>,
}
