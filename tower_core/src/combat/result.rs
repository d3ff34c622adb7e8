//! DamageEvent - outcome of one resolved attack

/// What a single performed attack did to the target. Transient, returned by
/// value; the display layer consumes it for health-bar and log updates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DamageEvent {
    /// Damage applied to the target; negative values healed it
    pub damage_dealt: f64,
    pub was_critical: bool,
    pub target_died: bool,
}

impl DamageEvent {
    /// One-line log form
    pub fn summary(&self) -> String {
        let mut line = format!("{:.0} damage", self.damage_dealt);
        if self.was_critical {
            line.push_str(" CRIT");
        }
        if self.target_died {
            line.push_str(" FATAL");
        }
        line
    }
}
