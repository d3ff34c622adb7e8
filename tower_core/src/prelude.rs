//! Prelude module for convenient imports
//!
//! ```rust
//! use tower_core::prelude::*;
//! ```

// Core types
pub use crate::stats::{StatError, StatTable};
pub use crate::types::{ActorKind, Rarity, Stat};

// Items and equipment
pub use crate::drops::DropTable;
pub use crate::item::Item;
pub use crate::ledger::{EquipError, EquipmentLedger};

// Combat
pub use crate::actor::{Actor, ActorError};
pub use crate::combat::{resolve_attack, CombatActor, DamageEvent};
pub use crate::health::{HealthTracker, LifeState};

// Scheduling and waves
pub use crate::schedule::Scheduler;
pub use crate::waves::{SpawnEvent, Wave, WaveQueue};

// Scoring
pub use crate::score::{JsonScoreStore, ScoreBoard, ScoreStore};

// Config
pub use crate::config::{load_toml, parse_toml, ConfigError, GameData};
