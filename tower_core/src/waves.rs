//! Wave definitions and spawn scheduling

use crate::schedule::Scheduler;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// One wave of enemies, listed in spawn order by actor id
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Wave {
    pub enemies: Vec<String>,
    #[serde(default)]
    pub mini_boss: bool,
    #[serde(default)]
    pub boss: bool,
}

/// Emitted by the scheduler when an enemy is due to spawn
#[derive(Debug, Clone, PartialEq)]
pub struct SpawnEvent {
    pub enemy_id: String,
    pub wave_index: usize,
}

/// Walks the wave list, pushing spawn events onto a scheduler one wave at
/// a time
#[derive(Debug, Clone, Default)]
pub struct WaveQueue {
    waves: Vec<Wave>,
    next: usize,
}

impl WaveQueue {
    pub fn new(waves: Vec<Wave>) -> Self {
        WaveQueue { waves, next: 0 }
    }

    pub fn current_wave(&self) -> usize {
        self.next
    }

    pub fn remaining(&self) -> usize {
        self.waves.len().saturating_sub(self.next)
    }

    pub fn is_finished(&self) -> bool {
        self.next >= self.waves.len()
    }

    /// Schedule the next wave's spawns starting at `now`, spacing them
    /// `spawn_interval` apart. Returns false once every wave has started.
    pub fn start_next(
        &mut self,
        now: f64,
        spawn_interval: f64,
        scheduler: &mut Scheduler<SpawnEvent>,
    ) -> bool {
        let Some(wave) = self.waves.get(self.next) else {
            return false;
        };
        for (i, enemy_id) in wave.enemies.iter().enumerate() {
            scheduler.schedule_after(
                now,
                spawn_interval * i as f64,
                SpawnEvent {
                    enemy_id: enemy_id.clone(),
                    wave_index: self.next,
                },
            );
        }
        debug!(
            wave = self.next,
            enemies = wave.enemies.len(),
            boss = wave.boss,
            "wave started"
        );
        self.next += 1;
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn two_waves() -> Vec<Wave> {
        vec![
            Wave {
                enemies: vec!["slime".into(), "slime".into(), "wolf".into()],
                mini_boss: false,
                boss: false,
            },
            Wave {
                enemies: vec!["ogre".into()],
                mini_boss: false,
                boss: true,
            },
        ]
    }

    #[test]
    fn test_spawns_spaced_by_interval() {
        let mut queue = WaveQueue::new(two_waves());
        let mut sched = Scheduler::new();

        assert!(queue.start_next(10.0, 0.5, &mut sched));
        assert_eq!(sched.len(), 3);
        assert_eq!(sched.next_due(), Some(10.0));

        let first = sched.pop_due(10.0).unwrap();
        assert_eq!(first.enemy_id, "slime");
        assert_eq!(first.wave_index, 0);
        assert_eq!(sched.pop_due(10.0), None);
        assert_eq!(sched.next_due(), Some(10.5));

        let rest = sched.drain_due(11.0);
        assert_eq!(rest.len(), 2);
        assert_eq!(rest[1].enemy_id, "wolf");
    }

    #[test]
    fn test_queue_advances_and_finishes() {
        let mut queue = WaveQueue::new(two_waves());
        let mut sched = Scheduler::new();

        assert_eq!(queue.remaining(), 2);
        assert!(queue.start_next(0.0, 1.0, &mut sched));
        assert!(queue.start_next(30.0, 1.0, &mut sched));
        assert!(queue.is_finished());
        assert!(!queue.start_next(60.0, 1.0, &mut sched));

        let boss = sched.drain_due(31.0).pop().unwrap();
        assert_eq!(boss.enemy_id, "ogre");
        assert_eq!(boss.wave_index, 1);
    }
}
