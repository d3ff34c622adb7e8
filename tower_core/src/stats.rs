//! StatTable - insertion-ordered stat -> value mapping
//!
//! Each actor owns exactly one table. Enumeration order is insertion order,
//! which display code relies on, so the entries live in a Vec rather than a
//! hash map. The catalog is seven stats; linear scans are cheaper than
//! hashing at that size anyway.

use crate::types::Stat;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Lookup on a stat the table does not declare
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatError {
    #[error("stat '{0}' is not declared on this table")]
    UnknownStat(Stat),
}

/// Mapping from stat to current value, one entry per declared stat
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StatTable {
    entries: Vec<(Stat, f64)>,
}

impl StatTable {
    pub fn new() -> Self {
        StatTable {
            entries: Vec::new(),
        }
    }

    /// Build a table from pairs, keeping first-seen insertion order
    pub fn from_pairs(pairs: impl IntoIterator<Item = (Stat, f64)>) -> Self {
        let mut table = StatTable::new();
        for (stat, value) in pairs {
            table.set(stat, value);
        }
        table
    }

    fn position(&self, stat: Stat) -> Option<usize> {
        self.entries.iter().position(|(s, _)| *s == stat)
    }

    pub fn contains(&self, stat: Stat) -> bool {
        self.position(stat).is_some()
    }

    /// Current value for a stat. Armour is optional and reads as 0 when
    /// absent; any other undeclared stat is an error.
    pub fn get(&self, stat: Stat) -> Result<f64, StatError> {
        match self.position(stat) {
            Some(i) => Ok(self.entries[i].1),
            None if stat == Stat::Armour => Ok(0.0),
            None => Err(StatError::UnknownStat(stat)),
        }
    }

    /// Overwrite a stat's value, appending the entry when it is new
    pub fn set(&mut self, stat: Stat, value: f64) {
        match self.position(stat) {
            Some(i) => self.entries[i].1 = value,
            None => self.entries.push((stat, value)),
        }
    }

    pub fn add(&mut self, stat: Stat, delta: f64) -> Result<(), StatError> {
        let current = self.get(stat)?;
        self.set(stat, current + delta);
        Ok(())
    }

    /// Subtract with a zero floor: a stat value never goes negative
    pub fn subtract(&mut self, stat: Stat, delta: f64) -> Result<(), StatError> {
        let current = self.get(stat)?;
        self.set(stat, (current - delta).max(0.0));
        Ok(())
    }

    /// Insertion-ordered enumeration; restartable without side effects
    pub fn iter(&self) -> impl Iterator<Item = (Stat, f64)> + '_ {
        self.entries.iter().copied()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_get_unknown_stat_is_an_error() {
        let table = StatTable::new();
        assert_eq!(
            table.get(Stat::Damage),
            Err(StatError::UnknownStat(Stat::Damage))
        );
    }

    #[test]
    fn test_armour_defaults_to_zero() {
        let table = StatTable::from_pairs([(Stat::Health, 100.0)]);
        assert_eq!(table.get(Stat::Armour), Ok(0.0));
    }

    #[test]
    fn test_set_then_get() {
        let mut table = StatTable::new();
        table.set(Stat::Damage, 12.5);
        assert_eq!(table.get(Stat::Damage), Ok(12.5));
        table.set(Stat::Damage, 3.0);
        assert_eq!(table.get(Stat::Damage), Ok(3.0));
        assert_eq!(table.len(), 1);
    }

    #[test]
    fn test_add_accumulates() {
        let mut table = StatTable::from_pairs([(Stat::Damage, 10.0)]);
        table.add(Stat::Damage, 5.0).unwrap();
        assert_eq!(table.get(Stat::Damage), Ok(15.0));
    }

    #[test]
    fn test_subtract_clamps_at_zero() {
        let mut table = StatTable::from_pairs([(Stat::Damage, 3.0)]);
        table.subtract(Stat::Damage, 10.0).unwrap();
        assert_eq!(table.get(Stat::Damage), Ok(0.0));
    }

    #[test]
    fn test_enumeration_matches_insertion_order() {
        let mut table = StatTable::new();
        table.set(Stat::AttackSpeed, 1.0);
        table.set(Stat::Health, 100.0);
        table.set(Stat::Damage, 10.0);

        let order: Vec<Stat> = table.iter().map(|(s, _)| s).collect();
        assert_eq!(order, vec![Stat::AttackSpeed, Stat::Health, Stat::Damage]);

        // Restartable and deterministic across calls
        let again: Vec<Stat> = table.iter().map(|(s, _)| s).collect();
        assert_eq!(order, again);
    }

    #[test]
    fn test_overwrite_keeps_original_position() {
        let mut table = StatTable::from_pairs([(Stat::Health, 1.0), (Stat::Damage, 2.0)]);
        table.set(Stat::Health, 50.0);
        let order: Vec<Stat> = table.iter().map(|(s, _)| s).collect();
        assert_eq!(order, vec![Stat::Health, Stat::Damage]);
    }

    proptest! {
        // Integer-valued floats add/subtract exactly, so the round trip is
        // bit-for-bit as long as the clamp never fires.
        #[test]
        fn prop_add_subtract_round_trip(base in 0u16..u16::MAX, delta in 0u16..u16::MAX) {
            let mut table = StatTable::from_pairs([(Stat::Damage, base as f64)]);
            table.add(Stat::Damage, delta as f64).unwrap();
            table.subtract(Stat::Damage, delta as f64).unwrap();
            prop_assert_eq!(table.get(Stat::Damage).unwrap(), base as f64);
        }

        #[test]
        fn prop_subtract_never_negative(base in 0.0f64..1e6, delta in 0.0f64..1e6) {
            let mut table = StatTable::from_pairs([(Stat::Health, base)]);
            table.subtract(Stat::Health, delta).unwrap();
            prop_assert!(table.get(Stat::Health).unwrap() >= 0.0);
        }
    }
}
