//! Attack resolution between two combatants

mod actor;
mod resolution;
mod result;

pub use actor::CombatActor;
pub use resolution::{critical_multiplier, effective_armour, resolve_attack};
pub use result::DamageEvent;
