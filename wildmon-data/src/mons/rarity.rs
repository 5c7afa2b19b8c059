use serde_string_enum::{
    DeserializeLabeledStringEnum,
    SerializeLabeledStringEnum,
};

use crate::SpeciesData;

/// The spawn rarity bucket of a species.
///
/// Rarity is derived from the species' catch rate and legendary/mythical flags; it is not
/// stored in the catalog itself.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, SerializeLabeledStringEnum, DeserializeLabeledStringEnum,
)]
pub enum Rarity {
    #[string = "common"]
    Common,
    #[string = "uncommon"]
    Uncommon,
    #[string = "rare"]
    Rare,
    #[string = "ultra_rare"]
    UltraRare,
    #[string = "legendary"]
    Legendary,
    #[string = "mythical"]
    Mythical,
}

impl Rarity {
    /// All rarities, in spawn-roll order.
    pub const ALL: [Rarity; 6] = [
        Rarity::Common,
        Rarity::Uncommon,
        Rarity::Rare,
        Rarity::UltraRare,
        Rarity::Legendary,
        Rarity::Mythical,
    ];

    /// Spawn weight of this rarity, in tenths of a percent.
    ///
    /// Weights across all rarities sum to 1000 (100%).
    pub fn weight(&self) -> u64 {
        match self {
            Self::Common => 600,
            Self::Uncommon => 250,
            Self::Rare => 100,
            Self::UltraRare => 40,
            Self::Legendary => 9,
            Self::Mythical => 1,
        }
    }

    /// Classifies a species into its rarity bucket.
    pub fn of(species: &SpeciesData) -> Rarity {
        if species.mythical {
            Self::Mythical
        } else if species.legendary {
            Self::Legendary
        } else if species.catch_rate <= 3 {
            Self::UltraRare
        } else if species.catch_rate <= 45 {
            Self::Rare
        } else if species.catch_rate <= 120 {
            Self::Uncommon
        } else {
            Self::Common
        }
    }
}

#[cfg(test)]
mod rarity_test {
    use crate::{
        Rarity,
        SpeciesData,
        StatTable,
        Type,
    };

    fn species(catch_rate: u8, legendary: bool, mythical: bool) -> SpeciesData {
        SpeciesData {
            number: 1,
            name: "Test".to_owned(),
            primary_type: Type::Normal,
            secondary_type: None,
            base_stats: StatTable::default(),
            abilities: Vec::new(),
            catch_rate,
            legendary,
            mythical,
        }
    }

    #[test]
    fn classifies_by_catch_rate() {
        assert_eq!(Rarity::of(&species(255, false, false)), Rarity::Common);
        assert_eq!(Rarity::of(&species(121, false, false)), Rarity::Common);
        assert_eq!(Rarity::of(&species(120, false, false)), Rarity::Uncommon);
        assert_eq!(Rarity::of(&species(46, false, false)), Rarity::Uncommon);
        assert_eq!(Rarity::of(&species(45, false, false)), Rarity::Rare);
        assert_eq!(Rarity::of(&species(4, false, false)), Rarity::Rare);
        assert_eq!(Rarity::of(&species(3, false, false)), Rarity::UltraRare);
    }

    #[test]
    fn flags_override_catch_rate() {
        assert_eq!(Rarity::of(&species(255, true, false)), Rarity::Legendary);
        assert_eq!(Rarity::of(&species(3, true, true)), Rarity::Mythical);
    }

    #[test]
    fn weights_sum_to_one_hundred_percent() {
        assert_eq!(Rarity::ALL.iter().map(|r| r.weight()).sum::<u64>(), 1000);
    }
}
