extern crate alloc;

mod battle;
mod error;
mod registry;
mod rewards;
mod turn_log;

pub use battle::{
    Battle,
    BattleStatus,
    TurnOutcome,
};
pub use error::BattleError;
pub use registry::BattleRegistry;
pub use rewards::{
    Reward,
    knockout_reward,
};
pub use turn_log::TurnLogEntry;
