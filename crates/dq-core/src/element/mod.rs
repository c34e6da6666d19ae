//! Elements: the single payload a location may carry
//!
//! Monsters, treasure, random events and save points are rolled from
//! per-extension probability tables; the boss and the key are placed once per
//! world by the generator.

mod flavor;
mod manager;
mod probability;

use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter};

pub use manager::ElementManager;
pub use probability::{ElementProbabilities, ProbabilityTables, roll_weighted};

/// Discriminant of [`Element`]
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, Display, EnumIter,
)]
pub enum ElementKind {
    Monster,
    Treasure,
    RandomEvent,
    SavePoint,
    Boss,
    Key,
}

/// Monster strength tier, rolled per spawn
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, Display, EnumIter,
)]
pub enum MonsterStrength {
    Weak,
    #[default]
    Normal,
    Strong,
    Elite,
}

impl MonsterStrength {
    /// Tiers in roll order; pairs with [`Self::WEIGHTS`].
    pub const ALL: [MonsterStrength; 4] = [
        MonsterStrength::Weak,
        MonsterStrength::Normal,
        MonsterStrength::Strong,
        MonsterStrength::Elite,
    ];

    /// Percent weights, summing to 100
    pub const WEIGHTS: [u32; 4] = [40, 35, 20, 5];

    /// Stat multiplier applied to depth-scaled base health and attack
    pub fn multiplier(self) -> f64 {
        match self {
            MonsterStrength::Weak => 0.8,
            MonsterStrength::Normal => 1.0,
            MonsterStrength::Strong => 1.3,
            MonsterStrength::Elite => 1.6,
        }
    }
}

/// Treasure rarity tier
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Default,
    Serialize,
    Deserialize,
    Display,
    EnumIter,
)]
pub enum Rarity {
    #[default]
    Common,
    Uncommon,
    Rare,
    Epic,
    Legendary,
}

impl Rarity {
    pub const ALL: [Rarity; 5] = [
        Rarity::Common,
        Rarity::Uncommon,
        Rarity::Rare,
        Rarity::Epic,
        Rarity::Legendary,
    ];

    /// Percent weights, summing to 100
    pub const WEIGHTS: [u32; 5] = [50, 30, 15, 4, 1];

    /// Gold value before depth scaling
    pub const fn base_value(self) -> u32 {
        match self {
            Rarity::Common => 10,
            Rarity::Uncommon => 25,
            Rarity::Rare => 60,
            Rarity::Epic => 150,
            Rarity::Legendary => 400,
        }
    }
}

/// What a random event does when triggered
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "amount")]
pub enum EventEffect {
    Heal(u32),
    Damage(u32),
    Gold(u32),
    Experience(u32),
    AttackBuff(u32),
    DefenseBuff(u32),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Monster {
    pub name: String,
    pub health: u32,
    pub max_health: u32,
    pub attack: u32,
    pub strength: MonsterStrength,
    pub defeated: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Treasure {
    pub name: String,
    pub rarity: Rarity,
    pub value: u32,
    pub collected: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RandomEvent {
    pub name: String,
    pub description: String,
    pub effect: EventEffect,
    pub triggered: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SavePoint {
    pub name: String,
    pub used: bool,
}

/// World boss, always on a deepest file
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Boss {
    pub name: String,
    pub health: u32,
    pub max_health: u32,
    pub attack: u32,
    pub world_level: u32,
    pub defeated: bool,
}

/// Key that unlocks the next world
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Key {
    pub name: String,
    pub world_level: u32,
    pub collected: bool,
}

/// Payload attached to a location
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "data")]
pub enum Element {
    Monster(Monster),
    Treasure(Treasure),
    RandomEvent(RandomEvent),
    SavePoint(SavePoint),
    Boss(Boss),
    Key(Key),
}

impl Element {
    pub const fn kind(&self) -> ElementKind {
        match self {
            Element::Monster(_) => ElementKind::Monster,
            Element::Treasure(_) => ElementKind::Treasure,
            Element::RandomEvent(_) => ElementKind::RandomEvent,
            Element::SavePoint(_) => ElementKind::SavePoint,
            Element::Boss(_) => ElementKind::Boss,
            Element::Key(_) => ElementKind::Key,
        }
    }

    pub fn name(&self) -> &str {
        match self {
            Element::Monster(m) => &m.name,
            Element::Treasure(t) => &t.name,
            Element::RandomEvent(e) => &e.name,
            Element::SavePoint(s) => &s.name,
            Element::Boss(b) => &b.name,
            Element::Key(k) => &k.name,
        }
    }

    /// Whether the element has been consumed (defeated, collected, triggered, used)
    pub const fn is_resolved(&self) -> bool {
        match self {
            Element::Monster(m) => m.defeated,
            Element::Treasure(t) => t.collected,
            Element::RandomEvent(e) => e.triggered,
            Element::SavePoint(s) => s.used,
            Element::Boss(b) => b.defeated,
            Element::Key(k) => k.collected,
        }
    }

    /// Whether the element fights back
    pub const fn is_hostile(&self) -> bool {
        matches!(self, Element::Monster(_) | Element::Boss(_))
    }
}
