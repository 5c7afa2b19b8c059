use std::time::SystemTime;

use ahash::{
    HashMap,
    HashMapExt,
};
use serde::{
    Deserialize,
    Serialize,
};

use crate::{
    SpawnConfig,
    cooldown::CooldownWindow,
};

/// Per-chat activity state feeding trigger evaluation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatActivity {
    /// Whether spawns are enabled for the chat.
    pub enabled: bool,
    /// Counted messages since the last spawn.
    pub message_count: u32,
    /// When the last spawn was created, if any.
    pub last_spawn_at: Option<SystemTime>,
}

impl Default for ChatActivity {
    fn default() -> Self {
        Self {
            enabled: true,
            message_count: 0,
            last_spawn_at: None,
        }
    }
}

impl ChatActivity {
    pub fn new() -> Self {
        Self::default()
    }

    /// Resets the counter and stamps the spawn time after a spawn fires.
    pub fn note_spawn(&mut self, now: SystemTime) {
        self.message_count = 0;
        self.last_spawn_at = Some(now);
    }
}

/// Whether a message counts toward spawn activity.
///
/// Command-like messages, messages shorter than two characters, and messages that are mostly
/// non-alphanumeric never count.
pub fn countable(text: &str) -> bool {
    if text.starts_with('/') {
        return false;
    }
    let total = text.chars().count();
    if total < 2 {
        return false;
    }
    let alphanumeric = text.chars().filter(|c| c.is_alphanumeric()).count();
    alphanumeric * 2 >= total
}

/// In-memory tracker of chat activity with burst suppression.
///
/// This is the reference implementation of the state a storage layer holds in production:
/// per-chat counters plus per-user and per-chat cooldown windows that keep one burst of
/// messages from counting more than once.
#[derive(Debug)]
pub struct ActivityTracker {
    chats: HashMap<i64, ChatActivity>,
    chat_window: CooldownWindow<i64>,
    user_window: CooldownWindow<(i64, i64)>,
}

impl ActivityTracker {
    pub fn new(config: &SpawnConfig) -> Self {
        Self {
            chats: HashMap::new(),
            chat_window: CooldownWindow::new(config.chat_cooldown),
            user_window: CooldownWindow::new(config.user_cooldown),
        }
    }

    /// Records a message from a user in a chat. Returns whether it counted.
    pub fn record_message(&mut self, chat: i64, user: i64, text: &str, now: SystemTime) -> bool {
        if !countable(text) {
            return false;
        }
        if self.chats.get(&chat).is_some_and(|activity| !activity.enabled) {
            return false;
        }
        if !self.user_window.try_pass((chat, user), now) {
            return false;
        }
        if !self.chat_window.try_pass(chat, now) {
            return false;
        }
        self.chats.entry(chat).or_default().message_count += 1;
        true
    }

    /// The chat's activity state, if any messages have been tracked.
    pub fn activity(&self, chat: i64) -> Option<&ChatActivity> {
        self.chats.get(&chat)
    }

    /// Enables or disables spawn tracking for a chat.
    pub fn set_enabled(&mut self, chat: i64, enabled: bool) {
        self.chats.entry(chat).or_default().enabled = enabled;
    }

    /// Resets the chat's counter after a spawn fires.
    pub fn note_spawn(&mut self, chat: i64, now: SystemTime) {
        self.chats.entry(chat).or_default().note_spawn(now);
    }
}
