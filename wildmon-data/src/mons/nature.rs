use serde_string_enum::{
    DeserializeLabeledStringEnum,
    SerializeLabeledStringEnum,
};

use crate::mons::Stat;

/// How a nature affects one particular stat.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum NatureEffect {
    /// Stat is boosted by 10%.
    Boost,
    /// Stat is reduced by 10%.
    Drop,
    /// Stat is unaffected.
    #[default]
    Neutral,
}

/// A creature's nature, which boosts one stat by 10% and drops another by 10%.
///
/// Five natures boost and drop the same stat, making them effectively neutral.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, SerializeLabeledStringEnum, DeserializeLabeledStringEnum,
)]
pub enum Nature {
    #[string = "hardy"]
    Hardy,
    #[string = "lonely"]
    Lonely,
    #[string = "adamant"]
    Adamant,
    #[string = "naughty"]
    Naughty,
    #[string = "brave"]
    Brave,
    #[string = "bold"]
    Bold,
    #[string = "docile"]
    Docile,
    #[string = "impish"]
    Impish,
    #[string = "lax"]
    Lax,
    #[string = "relaxed"]
    Relaxed,
    #[string = "modest"]
    Modest,
    #[string = "mild"]
    Mild,
    #[string = "bashful"]
    Bashful,
    #[string = "rash"]
    Rash,
    #[string = "quiet"]
    Quiet,
    #[string = "calm"]
    Calm,
    #[string = "gentle"]
    Gentle,
    #[string = "careful"]
    Careful,
    #[string = "quirky"]
    Quirky,
    #[string = "sassy"]
    Sassy,
    #[string = "timid"]
    Timid,
    #[string = "hasty"]
    Hasty,
    #[string = "jolly"]
    Jolly,
    #[string = "naive"]
    Naive,
    #[string = "serious"]
    Serious,
}

impl Nature {
    /// All 25 natures.
    pub const ALL: [Nature; 25] = [
        Nature::Hardy,
        Nature::Lonely,
        Nature::Adamant,
        Nature::Naughty,
        Nature::Brave,
        Nature::Bold,
        Nature::Docile,
        Nature::Impish,
        Nature::Lax,
        Nature::Relaxed,
        Nature::Modest,
        Nature::Mild,
        Nature::Bashful,
        Nature::Rash,
        Nature::Quiet,
        Nature::Calm,
        Nature::Gentle,
        Nature::Careful,
        Nature::Quirky,
        Nature::Sassy,
        Nature::Timid,
        Nature::Hasty,
        Nature::Jolly,
        Nature::Naive,
        Nature::Serious,
    ];

    /// The stat boosted by this nature.
    pub fn boosts(&self) -> Stat {
        match self {
            Self::Hardy | Self::Lonely | Self::Adamant | Self::Naughty | Self::Brave => {
                Stat::Attack
            }
            Self::Bold | Self::Docile | Self::Impish | Self::Lax | Self::Relaxed => Stat::Defense,
            Self::Modest | Self::Mild | Self::Bashful | Self::Rash | Self::Quiet => Stat::SpAttack,
            Self::Calm | Self::Gentle | Self::Careful | Self::Quirky | Self::Sassy => {
                Stat::SpDefense
            }
            Self::Timid | Self::Hasty | Self::Jolly | Self::Naive | Self::Serious => Stat::Speed,
        }
    }

    /// The stat dropped by this nature.
    pub fn drops(&self) -> Stat {
        match self {
            Self::Hardy | Self::Bold | Self::Modest | Self::Calm | Self::Timid => Stat::Attack,
            Self::Lonely | Self::Docile | Self::Mild | Self::Gentle | Self::Hasty => Stat::Defense,
            Self::Adamant | Self::Impish | Self::Bashful | Self::Careful | Self::Jolly => {
                Stat::SpAttack
            }
            Self::Naughty | Self::Lax | Self::Rash | Self::Quirky | Self::Naive => Stat::SpDefense,
            Self::Brave | Self::Relaxed | Self::Quiet | Self::Sassy | Self::Serious => Stat::Speed,
        }
    }

    /// The effect this nature has on the given stat.
    ///
    /// Natures never touch HP, and a nature that boosts and drops the same stat is neutral
    /// everywhere.
    pub fn effect(&self, stat: Stat) -> NatureEffect {
        if stat == Stat::HP || self.boosts() == self.drops() {
            return NatureEffect::Neutral;
        }
        if self.boosts() == stat {
            NatureEffect::Boost
        } else if self.drops() == stat {
            NatureEffect::Drop
        } else {
            NatureEffect::Neutral
        }
    }
}

#[cfg(test)]
mod nature_test {
    use crate::{
        Nature,
        NatureEffect,
        Stat,
        test_util::{
            test_string_deserialization,
            test_string_serialization,
        },
    };

    #[test]
    fn serializes_to_string() {
        test_string_serialization(Nature::Hardy, "hardy");
        test_string_serialization(Nature::Adamant, "adamant");
        test_string_serialization(Nature::Serious, "serious");
    }

    #[test]
    fn deserializes_capitalized() {
        test_string_deserialization("Naughty", Nature::Naughty);
        test_string_deserialization("TIMID", Nature::Timid);
        test_string_deserialization("bold", Nature::Bold);
    }

    #[test]
    fn adamant_boosts_attack_and_drops_sp_attack() {
        assert_eq!(Nature::Adamant.effect(Stat::Attack), NatureEffect::Boost);
        assert_eq!(Nature::Adamant.effect(Stat::SpAttack), NatureEffect::Drop);
        assert_eq!(Nature::Adamant.effect(Stat::Speed), NatureEffect::Neutral);
    }

    #[test]
    fn natures_never_affect_hp() {
        for nature in Nature::ALL {
            assert_eq!(nature.effect(Stat::HP), NatureEffect::Neutral);
        }
    }

    #[test]
    fn five_natures_are_neutral() {
        let neutral = Nature::ALL
            .into_iter()
            .filter(|nature| nature.boosts() == nature.drops())
            .count();
        assert_eq!(neutral, 5);
    }
}
