//! tower_core - Engine-independent combat core for a tower defense game
//!
//! This library provides:
//! - StatTable: insertion-ordered stat -> value mapping per actor
//! - Item / EquipmentLedger: equipment applying additive stat modifiers
//! - resolve_attack: cooldown gate, critical roll, armour mitigation
//! - HealthTracker: current/max health and the Alive -> Dead transition
//! - Scheduler / WaveQueue: tick-driven spawn and delay timing
//! - GameData: TOML-authored actors, items, drop chances and waves

pub mod actor;
pub mod combat;
pub mod config;
pub mod drops;
pub mod health;
pub mod item;
pub mod ledger;
pub mod prelude;
pub mod schedule;
pub mod score;
pub mod stats;
pub mod types;
pub mod waves;

// Re-export core types for convenience
pub use actor::{Actor, ActorError};
pub use combat::{resolve_attack, CombatActor, DamageEvent};
pub use config::{load_toml, parse_toml, ConfigError, GameData};
pub use drops::DropTable;
pub use health::{HealthTracker, LifeState};
pub use item::Item;
pub use ledger::{EquipError, EquipmentLedger};
pub use schedule::Scheduler;
pub use score::{JsonScoreStore, ScoreBoard, ScoreError, ScoreStore};
pub use stats::{StatError, StatTable};
pub use types::{ActorKind, Rarity, Stat};
pub use waves::{SpawnEvent, Wave, WaveQueue};
