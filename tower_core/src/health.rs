//! HealthTracker - current/max health and the death transition

use serde::{Deserialize, Serialize};
use tracing::debug;

/// Alive -> Dead, terminal at Dead
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LifeState {
    Alive,
    Dead,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HealthTracker {
    current: f64,
    max: f64,
    state: LifeState,
}

impl HealthTracker {
    /// Start alive at full health
    pub fn new(max: f64) -> Self {
        HealthTracker {
            current: max,
            max,
            state: LifeState::Alive,
        }
    }

    pub fn current(&self) -> f64 {
        self.current
    }

    pub fn max(&self) -> f64 {
        self.max
    }

    pub fn state(&self) -> LifeState {
        self.state
    }

    pub fn is_alive(&self) -> bool {
        self.state == LifeState::Alive
    }

    /// Update the maximum after a stat change. Current health is left
    /// untouched; it is not re-clamped in either direction.
    pub fn set_max(&mut self, max: f64) {
        self.max = max;
    }

    /// Apply damage and report whether this call was the killing blow.
    ///
    /// Negative amounts raise current health; no clamp to max is applied.
    /// Dead is terminal: damage to a dead tracker is ignored.
    pub fn take_damage(&mut self, amount: f64) -> bool {
        if self.state == LifeState::Dead {
            return false;
        }
        self.current -= amount;
        if self.current <= 0.0 {
            self.state = LifeState::Dead;
            debug!(current = self.current, "death transition");
            return true;
        }
        false
    }
}
