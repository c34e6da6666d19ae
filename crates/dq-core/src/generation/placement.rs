//! Boss and key placement
//!
//! Runs after generation. Both targets are chosen before anything is
//! written, so a failed placement leaves the map as it was.

use tracing::{info, warn};

use super::generator::MapGenerator;
use crate::element::{Element, ElementKind, ElementManager};
use crate::error::PlacementError;
use crate::map::Map;
use crate::rng::RandomSource;

/// Where the boss and key ended up
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Placement {
    pub boss_path: String,
    pub key_path: String,
}

impl<R: RandomSource> MapGenerator<R> {
    /// Put the world boss on a deepest file and the key on another file.
    ///
    /// The boss goes to the first file, in traversal order, at the greatest
    /// depth. The key goes to a file drawn uniformly from the rest. Any Boss
    /// or Key left on other locations by an earlier placement is cleared.
    pub fn place_boss_and_key(
        &mut self,
        map: &mut Map,
        world_level: u32,
        element_manager: &ElementManager,
    ) -> Result<Placement, PlacementError> {
        let files: Vec<(String, usize)> = map
            .get_all_locations()
            .into_iter()
            .filter(|loc| loc.is_file())
            .map(|loc| (loc.path(), loc.depth()))
            .collect();

        if files.len() < 2 {
            warn!(found = files.len(), "not enough files for boss and key");
            return Err(PlacementError::InsufficientLocations {
                required: 2,
                found: files.len(),
            });
        }

        let mut boss = &files[0];
        for candidate in &files[1..] {
            if candidate.1 > boss.1 {
                boss = candidate;
            }
        }
        let boss_path = boss.0.clone();

        let key_candidates: Vec<&String> = files
            .iter()
            .map(|(path, _)| path)
            .filter(|path| **path != boss_path)
            .collect();
        if key_candidates.is_empty() {
            warn!(boss = %boss_path, "no file left for the key");
            return Err(PlacementError::NoLocationForKey);
        }
        let key_path = key_candidates[self.rng_mut().index(key_candidates.len())].clone();

        for kind in [ElementKind::Boss, ElementKind::Key] {
            for stale in map.locations_with_element(kind) {
                if let Some(location) = map.find_location_mut(&stale) {
                    location.clear_element();
                }
            }
        }

        attach(map, &boss_path, element_manager.generate_boss_for_world(world_level));
        attach(map, &key_path, element_manager.generate_key_for_world(world_level));

        info!(
            world_level,
            boss = %boss_path,
            key = %key_path,
            "placed boss and key"
        );
        Ok(Placement {
            boss_path,
            key_path,
        })
    }
}

fn attach(map: &mut Map, path: &str, element: Element) {
    if let Some(location) = map.find_location_mut(path) {
        location.set_element(element);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::element::{Rarity, Treasure};
    use crate::location::Location;
    use crate::rng::ScriptedRng;

    fn tree() -> Map {
        let mut map = Map::new();
        map.add_location(Location::directory("a", "/"));
        map.add_location(Location::directory("b", "/a"));
        map.add_location(Location::file("top.txt", "/"));
        map.add_location(Location::file("mid.js", "/a"));
        map.add_location(Location::file("deep1.exe", "/a/b"));
        map.add_location(Location::file("deep2.exe", "/a/b"));
        map
    }

    #[test]
    fn test_boss_on_first_deepest_file() {
        let mut map = tree();
        let em = ElementManager::new();
        let mut generator = MapGenerator::new(ScriptedRng::new(vec![0.0]));

        let placement = generator.place_boss_and_key(&mut map, 1, &em).unwrap();
        assert_eq!(placement.boss_path, "/a/b/deep1.exe");

        // remaining files in traversal order: deep2.exe, mid.js, top.txt
        assert_eq!(placement.key_path, "/a/b/deep2.exe");

        assert_eq!(map.locations_with_element(ElementKind::Boss), vec!["/a/b/deep1.exe"]);
        assert_eq!(map.locations_with_element(ElementKind::Key), vec!["/a/b/deep2.exe"]);
    }

    #[test]
    fn test_key_drawn_from_remaining_files() {
        let mut map = tree();
        let em = ElementManager::new();
        let mut generator = MapGenerator::new(ScriptedRng::new(vec![0.99]));
        let placement = generator.place_boss_and_key(&mut map, 2, &em).unwrap();
        assert_eq!(placement.key_path, "/top.txt");
        assert_ne!(placement.key_path, placement.boss_path);
    }

    #[test]
    fn test_directories_never_chosen() {
        let mut map = Map::new();
        map.add_location(Location::directory("x", "/"));
        map.add_location(Location::directory("y", "/x"));
        map.add_location(Location::directory("z", "/x/y"));
        map.add_location(Location::file("f1", "/"));
        map.add_location(Location::file("f2", "/"));

        let em = ElementManager::new();
        let mut generator = MapGenerator::new(|| 0.5);
        let placement = generator.place_boss_and_key(&mut map, 1, &em).unwrap();
        assert_eq!(placement.boss_path, "/f1");
        assert_eq!(placement.key_path, "/f2");
    }

    #[test]
    fn test_any_world_level_places() {
        let mut map = tree();
        let em = ElementManager::new();
        let mut generator = MapGenerator::new(|| 0.0);
        let placement = generator.place_boss_and_key(&mut map, u32::MAX, &em).unwrap();

        let Some(Element::Boss(boss)) = map.find_location(&placement.boss_path).unwrap().element()
        else {
            panic!("expected boss");
        };
        assert_eq!(boss.world_level, u32::MAX);
        assert_eq!(boss.health, u32::MAX);
    }

    #[test]
    fn test_insufficient_files() {
        let mut map = Map::new();
        map.add_location(Location::directory("only", "/"));
        map.add_location(Location::file("lonely.txt", "/only"));

        let em = ElementManager::new();
        let mut generator = MapGenerator::new(|| 0.5);
        assert_eq!(
            generator.place_boss_and_key(&mut map, 1, &em),
            Err(PlacementError::InsufficientLocations {
                required: 2,
                found: 1
            })
        );
        assert!(!map.find_location("/only/lonely.txt").unwrap().has_element());
    }

    #[test]
    fn test_unrelated_elements_preserved() {
        let mut map = tree();
        let treasure = Element::Treasure(Treasure {
            name: "Quantum Bit".to_string(),
            rarity: Rarity::Rare,
            value: 60,
            collected: false,
        });
        map.find_location_mut("/a/mid.js")
            .unwrap()
            .set_element(treasure.clone());

        let em = ElementManager::new();
        // key candidates: deep2.exe, mid.js, top.txt; 0.0 picks deep2.exe
        let mut generator = MapGenerator::new(|| 0.0);
        generator.place_boss_and_key(&mut map, 1, &em).unwrap();

        assert_eq!(map.find_location("/a/mid.js").unwrap().element(), Some(&treasure));
    }

    #[test]
    fn test_replacing_clears_stale_boss_and_key() {
        let mut map = tree();
        let em = ElementManager::new();

        let mut generator = MapGenerator::new(ScriptedRng::new(vec![0.0, 0.99]));
        let first = generator.place_boss_and_key(&mut map, 1, &em).unwrap();
        let second = generator.place_boss_and_key(&mut map, 2, &em).unwrap();
        assert_ne!(first.key_path, second.key_path);

        assert_eq!(map.locations_with_element(ElementKind::Boss).len(), 1);
        assert_eq!(map.locations_with_element(ElementKind::Key), vec![second.key_path]);
        assert!(!map.find_location(&first.key_path).unwrap().has_element());

        let boss = map.find_location(&second.boss_path).unwrap().element().unwrap();
        let Element::Boss(boss) = boss else {
            panic!("expected boss");
        };
        assert_eq!(boss.world_level, 2);
    }
}
