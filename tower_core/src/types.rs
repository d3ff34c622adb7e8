//! Core identifier types shared across the crate

use serde::{Deserialize, Serialize};
use std::fmt;

/// A combat stat. The catalog is fixed: stats are declared here once and are
/// never created or destroyed at runtime. Declaration order is the order
/// stat sheets display in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Stat {
    Health,
    Damage,
    CriticalChance,
    CriticalDamage,
    AttackSpeed,
    Armour,
    ArmourPenetration,
}

impl Stat {
    /// All stats in catalog declaration order
    pub fn all() -> &'static [Stat] {
        &[
            Stat::Health,
            Stat::Damage,
            Stat::CriticalChance,
            Stat::CriticalDamage,
            Stat::AttackSpeed,
            Stat::Armour,
            Stat::ArmourPenetration,
        ]
    }

    /// Display name for stat sheets
    pub fn name(&self) -> &'static str {
        match self {
            Stat::Health => "Health",
            Stat::Damage => "Damage",
            Stat::CriticalChance => "Critical Chance",
            Stat::CriticalDamage => "Critical Damage",
            Stat::AttackSpeed => "Attack Speed",
            Stat::Armour => "Armour",
            Stat::ArmourPenetration => "Armour Penetration",
        }
    }
}

impl fmt::Display for Stat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Item rarity tier. Drives drop-table bucketing and display colour only,
/// never combat math.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Rarity {
    Common,
    Rare,
    Epic,
}

impl Rarity {
    /// Pickup tint for the UI layer
    pub fn colour(&self) -> &'static str {
        match self {
            Rarity::Common => "white",
            Rarity::Rare => "blue",
            Rarity::Epic => "magenta",
        }
    }
}

/// What kind of combatant an actor is. The embedding decides what death
/// means per kind: game over for the tower, despawn for the rest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ActorKind {
    Tower,
    Player,
    Enemy,
}

impl ActorKind {
    pub fn is_tower(&self) -> bool {
        *self == ActorKind::Tower
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_order_matches_declaration() {
        let all = Stat::all();
        assert_eq!(all[0], Stat::Health);
        assert_eq!(all[all.len() - 1], Stat::ArmourPenetration);
        assert_eq!(all.len(), 7);
    }

    #[test]
    fn test_stat_serde_names() {
        let json = serde_json::to_string(&Stat::CriticalChance).unwrap();
        assert_eq!(json, "\"critical_chance\"");
        let stat: Stat = serde_json::from_str("\"armour_penetration\"").unwrap();
        assert_eq!(stat, Stat::ArmourPenetration);
    }

    #[test]
    fn test_only_tower_is_tower() {
        assert!(ActorKind::Tower.is_tower());
        assert!(!ActorKind::Player.is_tower());
        assert!(!ActorKind::Enemy.is_tower());
    }
}
