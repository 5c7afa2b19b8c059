mod abilities;
mod damage;
mod moves;
mod state;
mod stats;

pub use damage::{
    DamageResult,
    resolve,
};
pub use moves::{
    MAX_MOVES,
    STRONG_MOVE_LEVEL,
    default_move,
    fallback_moves,
    resolve_moves,
    strong_move,
};
pub use state::Combatant;
pub use stats::{
    calculate_stats,
    hp_stat,
    stat,
};
