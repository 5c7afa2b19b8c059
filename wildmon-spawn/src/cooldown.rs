use std::{
    hash::Hash,
    time::{
        Duration,
        SystemTime,
    },
};

use ahash::{
    HashMap,
    HashMapExt,
};

/// A keyed expiring window for burst suppression.
///
/// Each key passes at most once per window. The window is an injected value object rather than
/// process-wide state, so callers control its lifecycle and can share or shard it as they see
/// fit.
#[derive(Debug)]
pub struct CooldownWindow<K> {
    window: Duration,
    last_pass: HashMap<K, SystemTime>,
}

impl<K> CooldownWindow<K>
where
    K: Eq + Hash,
{
    pub fn new(window: Duration) -> Self {
        Self {
            window,
            last_pass: HashMap::new(),
        }
    }

    /// Records a pass for the key if its window has elapsed.
    ///
    /// Returns whether the event passed. A clock that moved backwards reads as still cooling
    /// down.
    pub fn try_pass(&mut self, key: K, now: SystemTime) -> bool {
        if let Some(last) = self.last_pass.get(&key) {
            match now.duration_since(*last) {
                Ok(elapsed) if elapsed >= self.window => (),
                _ => return false,
            }
        }
        self.last_pass.insert(key, now);
        true
    }

    /// Drops entries whose window has fully elapsed.
    pub fn purge(&mut self, now: SystemTime) {
        let window = self.window;
        self.last_pass.retain(|_, last| {
            now.duration_since(*last)
                .map(|elapsed| elapsed < window)
                .unwrap_or(true)
        });
    }

    /// The number of keys currently tracked.
    pub fn len(&self) -> usize {
        self.last_pass.len()
    }

    /// Whether no keys are tracked.
    pub fn is_empty(&self) -> bool {
        self.last_pass.is_empty()
    }
}
