//! Attack resolution - cooldown gate, critical roll, armour mitigation

use super::actor::CombatActor;
use super::result::DamageEvent;
use crate::health::HealthTracker;
use rand::Rng;
use tracing::debug;

/// Critical damage multiplier. Chance past 100% is never wasted: the excess
/// converts into extra multiplier.
pub fn critical_multiplier(critical_chance: f64, critical_damage_percent: f64) -> f64 {
    if critical_chance < 100.0 {
        critical_damage_percent / 100.0
    } else {
        (critical_damage_percent + (critical_chance - 100.0)) / 100.0
    }
}

/// Armour left after penetration; never negative
pub fn effective_armour(armour: f64, penetration: f64) -> f64 {
    (armour - penetration).max(0.0)
}

/// Resolve one attack attempt at time `now`.
///
/// Returns None while the attacker's cooldown is still running - a
/// non-attack, distinct from a zero-damage hit. On a performed attack the
/// final damage (raw minus effective armour, possibly negative) is applied
/// to `defender_health` and the attacker's cooldown restarts at `now`.
pub fn resolve_attack(
    attacker: &mut CombatActor,
    defender: &CombatActor,
    defender_health: &mut HealthTracker,
    now: f64,
    rng: &mut impl Rng,
) -> Option<DamageEvent> {
    if !attacker.can_attack(now) {
        return None;
    }

    let roll = rng.gen_range(0.0..100.0);
    let was_critical = roll <= attacker.critical_chance;

    let raw_damage = if was_critical {
        attacker.damage
            * critical_multiplier(attacker.critical_chance, attacker.critical_damage_percent)
    } else {
        attacker.damage
    };

    let damage_dealt =
        raw_damage - effective_armour(defender.armour, attacker.armour_penetration);
    let target_died = defender_health.take_damage(damage_dealt);
    attacker.last_attack_time = now;

    debug!(
        damage = damage_dealt,
        critical = was_critical,
        died = target_died,
        "attack resolved"
    );

    Some(DamageEvent {
        damage_dealt,
        was_critical,
        target_died,
    })
}
