mod nature;
mod rarity;
mod species_data;
mod stat;
mod r#type;

pub use nature::{
    Nature,
    NatureEffect,
};
pub use rarity::Rarity;
pub use species_data::SpeciesData;
pub use stat::{
    MAX_EV,
    MAX_EV_TOTAL,
    MAX_IV,
    MAX_LEVEL,
    Stat,
    StatTable,
};
pub use r#type::{
    Type,
    TypeEffectiveness,
    effectiveness,
    matchup,
};
