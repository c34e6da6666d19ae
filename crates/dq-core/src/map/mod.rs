//! The map: a path-indexed tree of locations plus a navigation cursor
//!
//! Children are stored per normalized parent path rather than as linked
//! nodes, so every lookup is a path computation followed by a short scan of
//! one sibling list.

mod navigation;
pub mod path;

use std::collections::BTreeMap;

use hashbrown::{HashMap, HashSet};
use serde::Serialize;
use strum::IntoEnumIterator;

use crate::element::ElementKind;
use crate::location::{Location, LocationInfo, LocationKind};

/// Tree store and navigator
#[derive(Debug, Clone)]
pub struct Map {
    root: Location,
    children: HashMap<String, Vec<Location>>,
    current_path: String,
}

impl Default for Map {
    fn default() -> Self {
        Self::new()
    }
}

impl Map {
    /// An empty map holding only the root directory, with the cursor at `/`
    pub fn new() -> Self {
        let mut children = HashMap::new();
        children.insert("/".to_string(), Vec::new());
        Self {
            root: Location::root(),
            children,
            current_path: "/".to_string(),
        }
    }

    /// Insert `location` under its parent, replacing a sibling with the same name.
    ///
    /// Directories also get an (empty) child list of their own.
    pub fn add_location(&mut self, location: Location) {
        if location.is_root() {
            return;
        }
        if location.is_directory() {
            self.children.entry(location.path()).or_default();
        }
        let siblings = self
            .children
            .entry(location.parent_path().to_string())
            .or_default();
        match siblings.iter_mut().find(|s| s.name() == location.name()) {
            Some(existing) => *existing = location,
            None => siblings.push(location),
        }
    }

    /// Look up a location by path (normalized first)
    pub fn find_location(&self, path: &str) -> Option<&Location> {
        let normalized = path::normalize(path);
        if normalized == "/" {
            return Some(&self.root);
        }
        let name = path::base_name(&normalized);
        self.children
            .get(&path::parent(&normalized))?
            .iter()
            .find(|loc| loc.name() == name)
    }

    pub fn find_location_mut(&mut self, path: &str) -> Option<&mut Location> {
        let normalized = path::normalize(path);
        if normalized == "/" {
            return Some(&mut self.root);
        }
        let name = path::base_name(&normalized);
        self.children
            .get_mut(&path::parent(&normalized))?
            .iter_mut()
            .find(|loc| loc.name() == name)
    }

    pub fn location_exists(&self, path: &str) -> bool {
        self.find_location(path).is_some()
    }

    /// Children of the directory at `path`; empty if there is none.
    pub fn get_locations(&self, path: &str) -> &[Location] {
        self.children
            .get(&path::normalize(path))
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Every non-root location, depth-first from the root in insertion order.
    ///
    /// Child lists whose parent is not reachable from the root follow in
    /// sorted parent-path order.
    pub fn get_all_locations(&self) -> Vec<&Location> {
        let mut out = Vec::with_capacity(self.get_total_locations());
        let mut visited: HashSet<&str> = HashSet::with_capacity(self.children.len());
        self.collect_subtree("/", &mut out, &mut visited);

        let mut orphans: Vec<&String> = self
            .children
            .keys()
            .filter(|key| !visited.contains(&key.as_str()))
            .collect();
        orphans.sort();
        for key in orphans {
            if !visited.contains(&key.as_str()) {
                self.collect_subtree(key, &mut out, &mut visited);
            }
        }
        out
    }

    fn collect_subtree<'a>(
        &'a self,
        dir: &'a str,
        out: &mut Vec<&'a Location>,
        visited: &mut HashSet<&'a str>,
    ) {
        let Some((key, list)) = self.children.get_key_value(dir) else {
            return;
        };
        if !visited.insert(key.as_str()) {
            return;
        }
        for child in list {
            out.push(child);
            if child.is_directory() {
                let child_path = path::join_child(dir, child.name());
                if let Some((child_key, _)) = self.children.get_key_value(&child_path) {
                    self.collect_subtree(child_key, out, visited);
                }
            }
        }
    }

    /// Paths of all non-root locations matching `predicate`, in traversal order
    pub fn paths_where(&self, predicate: impl Fn(&Location) -> bool) -> Vec<String> {
        self.get_all_locations()
            .into_iter()
            .filter(|loc| predicate(loc))
            .map(Location::path)
            .collect()
    }

    /// Paths of locations carrying an element of `kind`
    pub fn locations_with_element(&self, kind: ElementKind) -> Vec<String> {
        self.paths_where(|loc| loc.element().is_some_and(|e| e.kind() == kind))
    }

    /// Number of locations, excluding the root
    pub fn get_total_locations(&self) -> usize {
        self.children.values().map(Vec::len).sum()
    }

    /// Deepest path depth of any location (0 for an empty map)
    pub fn get_max_depth(&self) -> usize {
        self.children
            .values()
            .flatten()
            .map(Location::depth)
            .max()
            .unwrap_or(0)
    }

    /// Rebuild a location from a snapshot taken with [`Location::display_info`].
    ///
    /// Uses only the public mutation API, so restored state is subject to the
    /// same replace-by-name rules as freshly generated state.
    pub fn restore_location(&mut self, info: &LocationInfo) {
        let normalized = path::normalize(&info.path);
        if normalized != "/" {
            let location = Location::new(
                path::base_name(&normalized),
                &path::parent(&normalized),
                info.kind,
            );
            self.add_location(location);
        }
        if let Some(location) = self.find_location_mut(&normalized) {
            match &info.element {
                Some(element) => {
                    location.set_element(element.clone());
                }
                None => {
                    location.clear_element();
                }
            }
            if info.explored {
                location.mark_explored();
            }
            if info.fully_inspected {
                location.mark_fully_inspected();
            }
        }
    }

    /// Summary counts over every non-root location
    pub fn get_statistics(&self) -> MapStatistics {
        let mut stats = MapStatistics {
            elements_by_kind: ElementKind::iter().map(|k| (k, 0)).collect(),
            ..MapStatistics::default()
        };
        for location in self.children.values().flatten() {
            stats.total_locations += 1;
            match location.kind() {
                LocationKind::Directory => stats.directories += 1,
                LocationKind::File => {
                    stats.files += 1;
                    if location.is_hidden() {
                        stats.hidden_files += 1;
                    }
                }
            }
            if location.is_explored() {
                stats.explored += 1;
            }
            if let Some(element) = location.element() {
                stats.with_elements += 1;
                *stats.elements_by_kind.entry(element.kind()).or_insert(0) += 1;
            }
            stats.max_depth = stats.max_depth.max(location.depth());
        }
        stats
    }
}

/// Counts returned by [`Map::get_statistics`]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct MapStatistics {
    pub total_locations: usize,
    pub directories: usize,
    pub files: usize,
    pub hidden_files: usize,
    pub explored: usize,
    pub with_elements: usize,
    pub elements_by_kind: BTreeMap<ElementKind, usize>,
    pub max_depth: usize,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::element::{Element, Key};

    fn sample() -> Map {
        let mut map = Map::new();
        map.add_location(Location::directory("home", "/"));
        map.add_location(Location::directory("user", "/home"));
        map.add_location(Location::file("notes.txt", "/home/user"));
        map.add_location(Location::file(".profile", "/home/user"));
        map.add_location(Location::directory("etc", "/"));
        map.add_location(Location::file("passwd", "/etc"));
        map
    }

    #[test]
    fn test_new_map_has_root() {
        let map = Map::new();
        let root = map.find_location("/").unwrap();
        assert!(root.is_root());
        assert!(root.is_directory());
        assert_eq!(map.get_total_locations(), 0);
        assert!(map.get_locations("/").is_empty());
        assert_eq!(map.get_max_depth(), 0);
    }

    #[test]
    fn test_find_location_normalizes() {
        let map = sample();
        assert_eq!(
            map.find_location("//home/./user/../user/notes.txt")
                .map(Location::path),
            Some("/home/user/notes.txt".to_string())
        );
        assert!(map.location_exists("/etc/passwd"));
        assert!(!map.location_exists("/etc/shadow"));
        assert!(!map.location_exists("/nowhere/passwd"));
    }

    #[test]
    fn test_directory_gets_child_list() {
        let mut map = Map::new();
        map.add_location(Location::directory("empty", "/"));
        assert!(map.children.contains_key("/empty"));
        assert!(map.get_locations("/empty").is_empty());
    }

    #[test]
    fn test_add_replaces_same_name() {
        let mut map = sample();
        let before = map.get_total_locations();

        let mut replacement = Location::file("passwd", "/etc");
        replacement.mark_explored();
        map.add_location(replacement);

        assert_eq!(map.get_total_locations(), before);
        assert!(map.find_location("/etc/passwd").unwrap().is_explored());
        assert_eq!(map.get_locations("/etc").len(), 1);
    }

    #[test]
    fn test_adding_root_is_ignored() {
        let mut map = sample();
        map.add_location(Location::root());
        assert_eq!(map.get_total_locations(), 6);
        assert!(map.get_locations("/").iter().all(|l| !l.is_root()));
    }

    #[test]
    fn test_all_locations_depth_first() {
        let map = sample();
        let paths: Vec<String> = map.get_all_locations().iter().map(|l| l.path()).collect();
        assert_eq!(
            paths,
            vec![
                "/home",
                "/home/user",
                "/home/user/notes.txt",
                "/home/user/.profile",
                "/etc",
                "/etc/passwd",
            ]
        );
    }

    #[test]
    fn test_all_locations_includes_orphans() {
        let mut map = sample();
        map.add_location(Location::file("lost.txt", "/mnt/floppy"));
        let paths: Vec<String> = map.get_all_locations().iter().map(|l| l.path()).collect();
        assert_eq!(paths.len(), 7);
        assert_eq!(paths.last().map(String::as_str), Some("/mnt/floppy/lost.txt"));
    }

    #[test]
    fn test_traversal_visits_each_location_once() {
        let mut map = Map::new();
        for i in 0..300 {
            let dir = format!("d{i}");
            map.add_location(Location::directory(dir.as_str(), "/"));
            map.add_location(Location::file("f.txt", &format!("/{dir}")));
        }
        // orphan list whose subtree also holds a directory with its own list
        map.add_location(Location::directory("floppy", "/mnt"));
        map.add_location(Location::file("lost.txt", "/mnt/floppy"));

        let paths: Vec<String> = map.get_all_locations().iter().map(|l| l.path()).collect();
        assert_eq!(paths.len(), 602);
        assert_eq!(paths.len(), map.get_total_locations());
        let unique: HashSet<&str> = paths.iter().map(String::as_str).collect();
        assert_eq!(unique.len(), paths.len());
        assert_eq!(
            &paths[600..],
            &["/mnt/floppy".to_string(), "/mnt/floppy/lost.txt".to_string()]
        );
    }

    #[test]
    fn test_max_depth_and_statistics() {
        let mut map = sample();
        map.find_location_mut("/etc/passwd").unwrap().set_element(Element::Key(Key {
            name: "Bronze Key".to_string(),
            world_level: 1,
            collected: false,
        }));
        map.find_location_mut("/home").unwrap().mark_explored();

        assert_eq!(map.get_max_depth(), 3);

        let stats = map.get_statistics();
        assert_eq!(stats.total_locations, 6);
        assert_eq!(stats.directories, 3);
        assert_eq!(stats.files, 3);
        assert_eq!(stats.hidden_files, 1);
        assert_eq!(stats.explored, 1);
        assert_eq!(stats.with_elements, 1);
        assert_eq!(stats.elements_by_kind[&ElementKind::Key], 1);
        assert_eq!(stats.elements_by_kind[&ElementKind::Boss], 0);
        assert_eq!(stats.max_depth, 3);
        assert_eq!(map.locations_with_element(ElementKind::Key), vec!["/etc/passwd"]);
    }

    #[test]
    fn test_restore_round_trip() {
        let mut original = sample();
        {
            let loc = original.find_location_mut("/home/user/notes.txt").unwrap();
            loc.mark_fully_inspected();
            loc.set_element(Element::Key(Key {
                name: "Silver Key".to_string(),
                world_level: 2,
                collected: false,
            }));
        }
        let snapshot: Vec<LocationInfo> = original
            .get_all_locations()
            .iter()
            .map(|l| l.display_info())
            .collect();
        let json = serde_json::to_string(&snapshot).unwrap();
        let decoded: Vec<LocationInfo> = serde_json::from_str(&json).unwrap();

        let mut restored = Map::new();
        for info in &decoded {
            restored.restore_location(info);
        }

        assert_eq!(restored.get_total_locations(), original.get_total_locations());
        let notes = restored.find_location("/home/user/notes.txt").unwrap();
        assert!(notes.is_fully_inspected());
        assert_eq!(notes.element().map(|e| e.name()), Some("Silver Key"));
        assert_eq!(
            restored.get_statistics(),
            original.get_statistics()
        );
    }
}
