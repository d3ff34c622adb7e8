//! CombatActor - the resolved numeric inputs one side brings to an attack

use crate::stats::{StatError, StatTable};
use crate::types::Stat;

/// Snapshot of a combatant's attack-relevant stats, plus the cooldown
/// bookkeeping for its attacker role. Purely numeric: stat changes only
/// reach combat through a fresh snapshot.
#[derive(Debug, Clone, PartialEq)]
pub struct CombatActor {
    pub damage: f64,
    /// Percent chance to critically hit; values past 100 compound into the
    /// damage multiplier
    pub critical_chance: f64,
    /// Critical damage as a percentage (150 = 1.5x)
    pub critical_damage_percent: f64,
    /// Attacks per second; zero or below means the actor never attacks
    pub attack_speed: f64,
    pub armour: f64,
    pub armour_penetration: f64,
    /// Time of the last performed attack; NEG_INFINITY when never attacked
    pub last_attack_time: f64,
}

impl CombatActor {
    /// Snapshot the combat stats out of a table. Armour reads as 0 when the
    /// actor declares none; any other missing stat is an error.
    pub fn from_table(stats: &StatTable) -> Result<Self, StatError> {
        Ok(CombatActor {
            damage: stats.get(Stat::Damage)?,
            critical_chance: stats.get(Stat::CriticalChance)?,
            critical_damage_percent: stats.get(Stat::CriticalDamage)?,
            attack_speed: stats.get(Stat::AttackSpeed)?,
            armour: stats.get(Stat::Armour)?,
            armour_penetration: stats.get(Stat::ArmourPenetration)?,
            last_attack_time: f64::NEG_INFINITY,
        })
    }

    /// Re-read stat values after an equipment change, keeping the cooldown
    pub fn refresh(&mut self, stats: &StatTable) -> Result<(), StatError> {
        let last_attack_time = self.last_attack_time;
        *self = CombatActor::from_table(stats)?;
        self.last_attack_time = last_attack_time;
        Ok(())
    }

    /// Cooldown check: one attack per `1 / attack_speed` seconds. A
    /// non-positive attack speed never divides and reads as "cannot attack".
    pub fn can_attack(&self, now: f64) -> bool {
        if self.attack_speed <= 0.0 {
            return false;
        }
        now - self.last_attack_time >= 1.0 / self.attack_speed
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn full_table() -> StatTable {
        StatTable::from_pairs([
            (Stat::Health, 100.0),
            (Stat::Damage, 10.0),
            (Stat::CriticalChance, 25.0),
            (Stat::CriticalDamage, 150.0),
            (Stat::AttackSpeed, 2.0),
            (Stat::Armour, 5.0),
            (Stat::ArmourPenetration, 1.0),
        ])
    }

    #[test]
    fn test_snapshot_reads_all_combat_stats() {
        let actor = CombatActor::from_table(&full_table()).unwrap();
        assert_eq!(actor.damage, 10.0);
        assert_eq!(actor.critical_chance, 25.0);
        assert_eq!(actor.critical_damage_percent, 150.0);
        assert_eq!(actor.attack_speed, 2.0);
        assert_eq!(actor.armour, 5.0);
        assert_eq!(actor.armour_penetration, 1.0);
    }

    #[test]
    fn test_snapshot_without_armour_defaults_to_zero() {
        let table = StatTable::from_pairs([
            (Stat::Damage, 10.0),
            (Stat::CriticalChance, 0.0),
            (Stat::CriticalDamage, 100.0),
            (Stat::AttackSpeed, 1.0),
            (Stat::ArmourPenetration, 0.0),
        ]);
        let actor = CombatActor::from_table(&table).unwrap();
        assert_eq!(actor.armour, 0.0);
    }

    #[test]
    fn test_snapshot_missing_damage_is_an_error() {
        let table = StatTable::from_pairs([(Stat::Health, 100.0)]);
        assert_eq!(
            CombatActor::from_table(&table),
            Err(StatError::UnknownStat(Stat::Damage))
        );
    }

    #[test]
    fn test_refresh_keeps_cooldown() {
        let mut table = full_table();
        let mut actor = CombatActor::from_table(&table).unwrap();
        actor.last_attack_time = 12.5;

        table.add(Stat::Damage, 5.0).unwrap();
        actor.refresh(&table).unwrap();
        assert_eq!(actor.damage, 15.0);
        assert_eq!(actor.last_attack_time, 12.5);
    }

    #[test]
    fn test_fresh_actor_can_attack_immediately() {
        let actor = CombatActor::from_table(&full_table()).unwrap();
        assert!(actor.can_attack(0.0));
    }

    #[test]
    fn test_cooldown_period_is_inverse_attack_speed() {
        let mut actor = CombatActor::from_table(&full_table()).unwrap();
        actor.last_attack_time = 10.0;
        // 2 attacks/s -> 0.5s period
        assert!(!actor.can_attack(10.4));
        assert!(actor.can_attack(10.5));
    }
}
