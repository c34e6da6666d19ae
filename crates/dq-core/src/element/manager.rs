//! Element rolling and factories

use tracing::debug;

use super::flavor::{self, EVENTS};
use super::probability::{ElementProbabilities, ProbabilityTables, roll_weighted};
use super::{
    Boss, Element, Key, Monster, MonsterStrength, RandomEvent, Rarity, SavePoint, Treasure,
};
use crate::location::Location;
use crate::rng::RandomSource;

/// Decides which element, if any, a location carries
///
/// Holds only immutable tables; all randomness comes from the source passed
/// to each call.
#[derive(Debug, Clone, Default)]
pub struct ElementManager {
    tables: ProbabilityTables,
}

impl ElementManager {
    /// Manager using the built-in probability tables
    pub fn new() -> Self {
        Self::with_tables(ProbabilityTables::builtin())
    }

    pub fn with_tables(tables: ProbabilityTables) -> Self {
        Self { tables }
    }

    pub fn tables(&self) -> &ProbabilityTables {
        &self.tables
    }

    pub fn get_element_probabilities(&self, location: &Location) -> ElementProbabilities {
        self.tables.lookup(location)
    }

    /// Roll an element for `location` without attaching it.
    ///
    /// Draws one percent roll and walks monster, treasure, random event and
    /// save point in that order; a roll past their sum yields `None`.
    pub fn roll_element<R: RandomSource>(
        &self,
        location: &Location,
        rng: &mut R,
    ) -> Option<Element> {
        let probabilities = self.get_element_probabilities(location);
        match roll_weighted(rng.percent_roll(), &probabilities.weights())? {
            0 => Some(self.create_monster_element(location, rng)),
            1 => Some(self.create_treasure_element(location, rng)),
            2 => Some(self.create_random_event_element(rng)),
            _ => Some(self.create_save_point_element(location, rng)),
        }
    }

    /// Roll and attach an element the first time a location is inspected.
    ///
    /// A location that already carries an element keeps it and nothing is
    /// drawn from `rng`.
    pub fn generate_element<'a, R: RandomSource>(
        &self,
        location: &'a mut Location,
        rng: &mut R,
    ) -> Option<&'a Element> {
        if !location.has_element()
            && let Some(element) = self.roll_element(location, rng)
        {
            debug!(
                path = %location.path(),
                kind = %element.kind(),
                name = element.name(),
                "element spawned"
            );
            location.set_element(element);
        }
        location.element()
    }

    /// Monster with stats scaled by the location's depth and a rolled strength tier
    pub fn create_monster_element<R: RandomSource>(
        &self,
        location: &Location,
        rng: &mut R,
    ) -> Element {
        let names = flavor::monsters_for_extension(location.file_extension());
        let name = rng.choose(names).copied().unwrap_or("Bug");

        let strength = roll_weighted(rng.percent_roll(), &MonsterStrength::WEIGHTS)
            .and_then(|i| MonsterStrength::ALL.get(i).copied())
            .unwrap_or_default();

        let depth = location.depth() as u32;
        let base_health = 30 + depth * 10;
        let base_attack = 10 + depth * 3;
        let health = scale(base_health, strength.multiplier());
        let attack = scale(base_attack, strength.multiplier());

        Element::Monster(Monster {
            name: name.to_string(),
            health,
            max_health: health,
            attack,
            strength,
            defeated: false,
        })
    }

    /// Treasure of a rolled rarity, worth more the deeper it lies
    pub fn create_treasure_element<R: RandomSource>(
        &self,
        location: &Location,
        rng: &mut R,
    ) -> Element {
        let rarity = roll_weighted(rng.percent_roll(), &Rarity::WEIGHTS)
            .and_then(|i| Rarity::ALL.get(i).copied())
            .unwrap_or_default();
        let name = rng
            .choose(flavor::treasure_names(rarity))
            .copied()
            .unwrap_or("Loose Byte");
        let depth = location.depth() as u32;

        Element::Treasure(Treasure {
            name: name.to_string(),
            rarity,
            value: rarity.base_value() * (1 + depth),
            collected: false,
        })
    }

    pub fn create_random_event_element<R: RandomSource>(&self, rng: &mut R) -> Element {
        let weights: Vec<u32> = EVENTS.iter().map(|e| e.weight).collect();
        let template = roll_weighted(rng.percent_roll(), &weights)
            .and_then(|i| EVENTS.get(i))
            .or_else(|| EVENTS.first());

        match template {
            Some(t) => Element::RandomEvent(RandomEvent {
                name: t.name.to_string(),
                description: t.description.to_string(),
                effect: t.effect,
                triggered: false,
            }),
            None => self.create_save_point_element_named("Checkpoint"),
        }
    }

    pub fn create_save_point_element<R: RandomSource>(
        &self,
        location: &Location,
        rng: &mut R,
    ) -> Element {
        let base = rng
            .choose(flavor::SAVE_POINT_NAMES)
            .copied()
            .unwrap_or("Checkpoint");
        let name = if location.is_hidden() {
            format!("Hidden {base}")
        } else {
            base.to_string()
        };
        self.create_save_point_element_named(&name)
    }

    fn create_save_point_element_named(&self, name: &str) -> Element {
        Element::SavePoint(SavePoint {
            name: name.to_string(),
            used: false,
        })
    }

    /// Boss for a world; stronger with every level.
    pub fn generate_boss_for_world(&self, world_level: u32) -> Element {
        let health = world_level.saturating_mul(100).saturating_add(150);
        Element::Boss(Boss {
            name: flavor::cycle(flavor::BOSSES, world_level).to_string(),
            health,
            max_health: health,
            attack: world_level.saturating_mul(8).saturating_add(20),
            world_level,
            defeated: false,
        })
    }

    pub fn generate_key_for_world(&self, world_level: u32) -> Element {
        Element::Key(Key {
            name: format!("{} Key", flavor::cycle(flavor::KEY_MATERIALS, world_level)),
            world_level,
            collected: false,
        })
    }
}

fn scale(base: u32, multiplier: f64) -> u32 {
    (f64::from(base) * multiplier).round().max(1.0) as u32
}
