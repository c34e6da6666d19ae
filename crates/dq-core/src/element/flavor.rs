//! Static flavor text for generated elements

use super::{EventEffect, Rarity};

/// Monsters keyed by file extension; anything else draws from [`GENERIC_MONSTERS`].
pub(crate) const MONSTERS_BY_EXTENSION: &[(&str, &[&str])] = &[
    (".exe", &["Trojan Horse", "Rootkit", "Worm", "Ransomware Golem"]),
    (".dll", &["Library Leech", "Dependency Hydra", "Linker Wraith"]),
    (".js", &["Callback Imp", "Undefined Specter", "Prototype Mimic"]),
    (".ts", &["Type Gremlin", "Any Phantom", "Generic Chimera"]),
    (".py", &["Indentation Serpent", "GIL Troll", "Import Cycle"]),
    (".rs", &["Borrow Checker", "Lifetime Lich", "Unsafe Crab"]),
    (".sh", &["Fork Bomb", "Glob Goblin", "Pipe Banshee"]),
    (".log", &["Log Flood", "Stack Tracer", "Verbose Wisp"]),
    (".json", &["Trailing Comma", "Nested Brace Beast"]),
    (".cfg", &["Misconfiguration", "Stale Setting"]),
];

pub(crate) const GENERIC_MONSTERS: &[&str] = &[
    "Bug",
    "Null Pointer",
    "Memory Leak",
    "Race Condition",
    "Segfault",
    "Off-by-One",
    "Zombie Process",
    "Deadlock",
];

pub(crate) fn treasure_names(rarity: Rarity) -> &'static [&'static str] {
    match rarity {
        Rarity::Common => &["Loose Byte", "Spare Cycle", "Cached Token"],
        Rarity::Uncommon => &["Compressed Archive", "Checksum Charm", "Swap Crystal"],
        Rarity::Rare => &["Root Certificate", "Kernel Module", "Quantum Bit"],
        Rarity::Epic => &["Admin Password", "Zero-Day Scroll"],
        Rarity::Legendary => &["Source Code of Everything"],
    }
}

pub(crate) struct EventTemplate {
    pub name: &'static str,
    pub description: &'static str,
    pub effect: EventEffect,
    pub weight: u32,
}

/// Random events; weights sum to 100.
pub(crate) const EVENTS: &[EventTemplate] = &[
    EventTemplate {
        name: "Garbage Collection",
        description: "Freed memory washes over you, restoring health.",
        effect: EventEffect::Heal(25),
        weight: 25,
    },
    EventTemplate {
        name: "Power Surge",
        description: "A voltage spike arcs through the file.",
        effect: EventEffect::Damage(15),
        weight: 20,
    },
    EventTemplate {
        name: "Orphaned Wallet",
        description: "Someone left their credentials lying around.",
        effect: EventEffect::Gold(40),
        weight: 20,
    },
    EventTemplate {
        name: "Man Page",
        description: "You finally read the manual.",
        effect: EventEffect::Experience(30),
        weight: 15,
    },
    EventTemplate {
        name: "Overclock",
        description: "Your processes run hot and fast.",
        effect: EventEffect::AttackBuff(5),
        weight: 10,
    },
    EventTemplate {
        name: "Firewall",
        description: "A protective ruleset settles around you.",
        effect: EventEffect::DefenseBuff(5),
        weight: 10,
    },
];

pub(crate) const SAVE_POINT_NAMES: &[&str] = &["Checkpoint", "Snapshot", "Restore Point", "Commit"];

/// Boss per world level, cycling past the end.
pub(crate) const BOSSES: &[&str] = &[
    "Kernel Panic",
    "Blue Screen Behemoth",
    "Daemon Overlord",
    "Infinite Loop",
    "The Root User",
];

pub(crate) const KEY_MATERIALS: &[&str] = &["Bronze", "Silver", "Gold", "Platinum", "Root"];

pub(crate) fn monsters_for_extension(extension: Option<&str>) -> &'static [&'static str] {
    extension
        .and_then(|ext| {
            MONSTERS_BY_EXTENSION
                .iter()
                .find(|(key, _)| key.eq_ignore_ascii_case(ext))
                .map(|(_, names)| *names)
        })
        .unwrap_or(GENERIC_MONSTERS)
}

/// Name for a per-world table, wrapping when the world level runs past the table.
pub(crate) fn cycle(table: &'static [&'static str], world_level: u32) -> &'static str {
    let index = (world_level.saturating_sub(1) as usize) % table.len().max(1);
    table.get(index).copied().unwrap_or("Unknown")
}
