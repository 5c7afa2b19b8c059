use serde_string_enum::{
    DeserializeLabeledStringEnum,
    SerializeLabeledStringEnum,
};

/// The elemental type of a species or move, which determines weaknesses and resistances.
#[derive(
    Debug,
    Default,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    SerializeLabeledStringEnum,
    DeserializeLabeledStringEnum,
)]
pub enum Type {
    #[string = "normal"]
    #[default]
    Normal,
    #[string = "fire"]
    Fire,
    #[string = "water"]
    Water,
    #[string = "electric"]
    Electric,
    #[string = "grass"]
    Grass,
    #[string = "ice"]
    Ice,
    #[string = "fighting"]
    Fighting,
    #[string = "poison"]
    Poison,
    #[string = "ground"]
    Ground,
    #[string = "flying"]
    Flying,
    #[string = "psychic"]
    Psychic,
    #[string = "bug"]
    Bug,
    #[string = "rock"]
    Rock,
    #[string = "ghost"]
    Ghost,
    #[string = "dragon"]
    Dragon,
    #[string = "dark"]
    Dark,
    #[string = "steel"]
    Steel,
    #[string = "fairy"]
    Fairy,
}

/// Effectiveness of a single attacking type against a single defending type.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum TypeEffectiveness {
    /// The attack does nothing at all.
    NoEffect,
    /// Not very effective.
    NotVery,
    /// Normal effectiveness.
    #[default]
    Neutral,
    /// Super effective.
    Super,
}

impl TypeEffectiveness {
    /// The damage multiplier for this effectiveness.
    pub fn multiplier(&self) -> f64 {
        match self {
            Self::NoEffect => 0.0,
            Self::NotVery => 0.5,
            Self::Neutral => 1.0,
            Self::Super => 2.0,
        }
    }
}

/// Looks up the effectiveness of one attacking type against one defending type.
///
/// Pairs not listed in the chart are neutral.
pub fn matchup(attacking: Type, defending: Type) -> TypeEffectiveness {
    use Type::*;
    use TypeEffectiveness::*;
    match (attacking, defending) {
        (Normal, Rock | Steel) => NotVery,
        (Normal, Ghost) => NoEffect,

        (Fire, Grass | Ice | Bug | Steel) => Super,
        (Fire, Fire | Water | Rock | Dragon) => NotVery,

        (Water, Fire | Ground | Rock) => Super,
        (Water, Water | Grass | Dragon) => NotVery,

        (Electric, Water | Flying) => Super,
        (Electric, Electric | Grass | Dragon) => NotVery,
        (Electric, Ground) => NoEffect,

        (Grass, Water | Ground | Rock) => Super,
        (Grass, Fire | Grass | Poison | Flying | Bug | Dragon | Steel) => NotVery,

        (Ice, Grass | Ground | Flying | Dragon) => Super,
        (Ice, Fire | Water | Ice | Steel) => NotVery,

        (Fighting, Normal | Ice | Rock | Dark | Steel) => Super,
        (Fighting, Poison | Flying | Psychic | Bug | Fairy) => NotVery,
        (Fighting, Ghost) => NoEffect,

        (Poison, Grass | Fairy) => Super,
        (Poison, Poison | Ground | Rock | Ghost) => NotVery,
        (Poison, Steel) => NoEffect,

        (Ground, Fire | Electric | Poison | Rock | Steel) => Super,
        (Ground, Grass | Bug) => NotVery,
        (Ground, Flying) => NoEffect,

        (Flying, Grass | Fighting | Bug) => Super,
        (Flying, Electric | Rock | Steel) => NotVery,

        (Psychic, Fighting | Poison) => Super,
        (Psychic, Psychic | Steel) => NotVery,
        (Psychic, Dark) => NoEffect,

        (Bug, Grass | Psychic | Dark) => Super,
        (Bug, Fire | Fighting | Poison | Flying | Ghost | Steel | Fairy) => NotVery,

        (Rock, Fire | Ice | Flying | Bug) => Super,
        (Rock, Fighting | Ground | Steel) => NotVery,

        (Ghost, Psychic | Ghost) => Super,
        (Ghost, Dark) => NotVery,
        (Ghost, Normal) => NoEffect,

        (Dragon, Dragon) => Super,
        (Dragon, Steel) => NotVery,
        (Dragon, Fairy) => NoEffect,

        (Dark, Psychic | Ghost) => Super,
        (Dark, Fighting | Dark | Fairy) => NotVery,

        (Steel, Ice | Rock | Fairy) => Super,
        (Steel, Fire | Water | Electric | Steel) => NotVery,

        (Fairy, Fighting | Dragon | Dark) => Super,
        (Fairy, Fire | Poison | Steel) => NotVery,

        _ => Neutral,
    }
}

/// Combined effectiveness of an attacking type against a full set of defending types.
///
/// The result is the product of the single-type multipliers, so it is one of
/// 0, 0.25, 0.5, 1, 2, or 4.
pub fn effectiveness(attacking: Type, defending: &[Type]) -> f64 {
    defending
        .iter()
        .map(|defending| matchup(attacking, *defending).multiplier())
        .product()
}
