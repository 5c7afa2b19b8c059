mod activity;
mod config;
mod cooldown;
mod engine;
mod record;

pub use activity::{
    ActivityTracker,
    ChatActivity,
    countable,
};
pub use config::SpawnConfig;
pub use cooldown::CooldownWindow;
pub use engine::SpawnEngine;
pub use record::SpawnRecord;
