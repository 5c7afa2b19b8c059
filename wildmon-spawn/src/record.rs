use std::time::{
    Duration,
    SystemTime,
};

use serde::{
    Deserialize,
    Serialize,
};

/// A wild creature spawned into a chat.
///
/// Expiry is a timestamp comparison performed on read; nothing schedules a callback. The
/// record keeps its own timestamps so any storage layer can persist and reload it unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpawnRecord {
    /// Chat the spawn appeared in.
    pub chat: i64,
    /// Dex number of the spawned species.
    pub species: u16,
    /// Whether the spawn is shiny.
    pub shiny: bool,
    /// The player that caught it, if anyone has.
    pub caught_by: Option<i64>,
    /// When the spawn was created.
    pub spawned_at: SystemTime,
    /// When the spawn stops being catchable.
    pub expires_at: SystemTime,
}

impl SpawnRecord {
    pub fn new(chat: i64, species: u16, shiny: bool, now: SystemTime, timeout: Duration) -> Self {
        Self {
            chat,
            species,
            shiny,
            caught_by: None,
            spawned_at: now,
            expires_at: now + timeout,
        }
    }

    /// Whether the spawn's catch window has closed.
    pub fn expired(&self, now: SystemTime) -> bool {
        now > self.expires_at
    }

    /// Whether the spawn is still catchable: uncaught and unexpired.
    pub fn active(&self, now: SystemTime) -> bool {
        self.caught_by.is_none() && !self.expired(now)
    }

    /// Marks the spawn as caught by the player. Returns whether the catch landed.
    pub fn catch(&mut self, player: i64, now: SystemTime) -> bool {
        if !self.active(now) {
            return false;
        }
        self.caught_by = Some(player);
        true
    }
}

#[cfg(test)]
mod spawn_record_test {
    use std::time::{
        Duration,
        SystemTime,
    };

    use crate::SpawnRecord;

    fn record(now: SystemTime) -> SpawnRecord {
        SpawnRecord::new(-1000, 25, false, now, Duration::from_secs(120))
    }

    #[test]
    fn active_until_expiry() {
        let now = SystemTime::UNIX_EPOCH + Duration::from_secs(5000);
        let record = record(now);
        assert!(record.active(now));
        assert!(record.active(now + Duration::from_secs(120)));
        assert!(!record.active(now + Duration::from_secs(121)));
        assert!(record.expired(now + Duration::from_secs(121)));
    }

    #[test]
    fn catching_ends_the_spawn() {
        let now = SystemTime::UNIX_EPOCH + Duration::from_secs(5000);
        let mut record = record(now);
        assert!(record.catch(42, now));
        assert_eq!(record.caught_by, Some(42));
        assert!(!record.active(now));
        // Only the first catch lands.
        assert!(!record.catch(43, now));
        assert_eq!(record.caught_by, Some(42));
    }

    #[test]
    fn expired_spawns_cannot_be_caught() {
        let now = SystemTime::UNIX_EPOCH + Duration::from_secs(5000);
        let mut record = record(now);
        assert!(!record.catch(42, now + Duration::from_secs(300)));
        assert_eq!(record.caught_by, None);
    }
}
