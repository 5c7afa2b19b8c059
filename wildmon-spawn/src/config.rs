use std::time::Duration;

use serde::{
    Deserialize,
    Serialize,
};

/// Tunable knobs for the spawn engine.
///
/// Defaults mirror the standard game balance: a spawn fires at 50 counted messages or
/// probabilistically after five idle minutes, stays catchable for two minutes, and shinies land
/// at 1 in 4096 before chain bonuses.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SpawnConfig {
    /// Counted messages at which a spawn fires unconditionally.
    pub message_threshold: u32,
    /// Counted messages that must have accumulated before idle-time spawns are considered.
    pub idle_message_minimum: u32,
    /// Idle time that must pass since the last spawn before probabilistic spawns start.
    pub min_idle: Duration,
    /// Idle time at which the per-check spawn chance reaches its cap.
    pub max_idle: Duration,
    /// Cap on the per-check idle spawn chance, in percent.
    pub idle_chance_percent: u32,
    /// How long a spawn stays catchable.
    pub spawn_timeout: Duration,
    /// Base shiny odds denominator.
    pub shiny_base_rate: u64,
    /// Burst suppression window per user within a chat.
    pub user_cooldown: Duration,
    /// Burst suppression window per chat.
    pub chat_cooldown: Duration,
}

impl Default for SpawnConfig {
    fn default() -> Self {
        Self {
            message_threshold: 50,
            idle_message_minimum: 5,
            min_idle: Duration::from_secs(5 * 60),
            max_idle: Duration::from_secs(15 * 60),
            idle_chance_percent: 30,
            spawn_timeout: Duration::from_secs(120),
            shiny_base_rate: 4096,
            user_cooldown: Duration::from_secs(3),
            chat_cooldown: Duration::from_secs(1),
        }
    }
}
