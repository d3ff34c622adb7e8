//! Time-ordered event scheduler
//!
//! A min-heap keyed on due time. Events scheduled for the same instant pop
//! in the order they were scheduled.

use std::collections::BinaryHeap;

#[derive(Debug)]
struct Entry<T> {
    due: f64,
    seq: u64,
    event: T,
}

impl<T> PartialEq for Entry<T> {
    fn eq(&self, other: &Self) -> bool {
        self.due == other.due && self.seq == other.seq
    }
}

impl<T> Eq for Entry<T> {}

impl<T> PartialOrd for Entry<T> {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl<T> Ord for Entry<T> {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        // Reversed so the BinaryHeap behaves as a min-heap, with sequence
        // numbers breaking ties first-in-first-out
        other
            .due
            .total_cmp(&self.due)
            .then_with(|| other.seq.cmp(&self.seq))
    }
}

#[derive(Debug)]
pub struct Scheduler<T> {
    queue: BinaryHeap<Entry<T>>,
    next_seq: u64,
}

impl<T> Default for Scheduler<T> {
    fn default() -> Self {
        Scheduler {
            queue: BinaryHeap::new(),
            next_seq: 0,
        }
    }
}

impl<T> Scheduler<T> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn schedule_at(&mut self, due: f64, event: T) {
        let seq = self.next_seq;
        self.next_seq += 1;
        self.queue.push(Entry { due, seq, event });
    }

    pub fn schedule_after(&mut self, now: f64, delay: f64, event: T) {
        self.schedule_at(now + delay, event);
    }

    /// Pop the earliest event whose due time has arrived, if any
    pub fn pop_due(&mut self, now: f64) -> Option<T> {
        match self.queue.peek() {
            Some(entry) if entry.due <= now => self.queue.pop().map(|e| e.event),
            _ => None,
        }
    }

    /// Pop every event due at or before `now`, earliest first
    pub fn drain_due(&mut self, now: f64) -> Vec<T> {
        let mut due = Vec::new();
        while let Some(event) = self.pop_due(now) {
            due.push(event);
        }
        due
    }

    pub fn next_due(&self) -> Option<f64> {
        self.queue.peek().map(|e| e.due)
    }

    pub fn len(&self) -> usize {
        self.queue.len()
    }

    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }
}
