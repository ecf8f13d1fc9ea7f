//! Named integer counters.

use std::collections::HashMap;

/// Key -> integer table. A name is absent until first written.
///
/// Arithmetic wraps on overflow so every operation stays total.
#[derive(Debug, Default, Clone)]
pub struct CounterTable {
    values: HashMap<String, i64>,
}

impl CounterTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, name: &str) -> Option<i64> {
        self.values.get(name).copied()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.values.contains_key(name)
    }

    /// Overwrite or create the counter. Returns `true` when `name` was new.
    pub fn set(&mut self, name: &str, value: i64) -> bool {
        match self.values.get_mut(name) {
            Some(slot) => {
                *slot = value;
                false
            }
            None => {
                self.values.insert(name.to_string(), value);
                true
            }
        }
    }

    /// Add `delta` to the counter (absent counts as 0). Returns the new value.
    pub fn incr_by(&mut self, name: &str, delta: i64) -> i64 {
        let next = self.get(name).unwrap_or(0).wrapping_add(delta);
        self.set(name, next);
        next
    }

    /// Subtract `delta` from the counter (absent counts as 0). Returns the new value.
    pub fn decr_by(&mut self, name: &str, delta: i64) -> i64 {
        let next = self.get(name).unwrap_or(0).wrapping_sub(delta);
        self.set(name, next);
        next
    }

    pub fn incr(&mut self, name: &str) -> i64 {
        self.incr_by(name, 1)
    }

    pub fn decr(&mut self, name: &str) -> i64 {
        self.decr_by(name, 1)
    }

    /// Remove one counter; no-op when absent.
    pub fn remove(&mut self, name: &str) {
        self.values.remove(name);
    }

    pub fn clear(&mut self) {
        self.values.clear();
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Snapshot of every stored counter.
    pub fn all(&self) -> HashMap<String, i64> {
        self.values.clone()
    }
}
