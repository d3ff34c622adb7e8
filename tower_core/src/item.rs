//! Item - immutable, leveled stat modifier definitions
//!
//! Items are authored as static data and loaded as read-only values; the
//! core never mutates one after construction.

use crate::types::{Rarity, Stat};
use serde::{Deserialize, Serialize};

/// A named set of signed stat deltas with a rarity tier.
///
/// The same item name may be authored at several levels, each with its own
/// modifier set and icon.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Item {
    name: String,
    rarity: Rarity,
    level: u32,
    description: String,
    /// Opaque icon reference for the display layer
    icon: String,
    /// Signed deltas in authored order; stats the item does not touch are absent
    modifiers: Vec<(Stat, f64)>,
}

impl Item {
    pub fn new(
        name: impl Into<String>,
        rarity: Rarity,
        level: u32,
        modifiers: Vec<(Stat, f64)>,
    ) -> Self {
        Item {
            name: name.into(),
            rarity,
            level,
            description: String::new(),
            icon: String::new(),
            modifiers,
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn with_icon(mut self, icon: impl Into<String>) -> Self {
        self.icon = icon.into();
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn rarity(&self) -> Rarity {
        self.rarity
    }

    pub fn level(&self) -> u32 {
        self.level
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn icon(&self) -> &str {
        &self.icon
    }

    /// Delta this item applies to a stat; 0 when the item does not list it
    pub fn modifier(&self, stat: Stat) -> f64 {
        self.modifiers
            .iter()
            .find(|(s, _)| *s == stat)
            .map(|(_, delta)| *delta)
            .unwrap_or(0.0)
    }

    /// Authored-order modifier enumeration
    pub fn modifiers(&self) -> impl Iterator<Item = (Stat, f64)> + '_ {
        self.modifiers.iter().copied()
    }
}
