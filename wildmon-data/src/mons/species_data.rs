use serde::{
    Deserialize,
    Serialize,
};

use crate::{
    Rarity,
    StatTable,
    Type,
};

/// Data about a particular species.
///
/// Species data is common to all creatures of a given species. Data about a specific owned
/// creature (such as its nature, individual values, or battle state) does not belong here.
/// The engine treats this as a read-only catalog entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SpeciesData {
    /// National dex number, unique across the catalog.
    pub number: u16,
    /// Display name.
    pub name: String,
    /// The primary type of the species.
    pub primary_type: Type,
    /// The secondary type of the species, if it exists.
    #[serde(default)]
    pub secondary_type: Option<Type>,
    /// Base stats.
    pub base_stats: StatTable,
    /// Abilities the species can carry.
    #[serde(default)]
    pub abilities: Vec<String>,
    /// Catch rate, a byte where higher values are easier to catch.
    pub catch_rate: u8,
    /// Is the species legendary?
    #[serde(default)]
    pub legendary: bool,
    /// Is the species mythical?
    #[serde(default)]
    pub mythical: bool,
}

impl SpeciesData {
    /// The species' types, for effectiveness lookups.
    pub fn types(&self) -> Vec<Type> {
        match self.secondary_type {
            Some(secondary) => Vec::from_iter([self.primary_type, secondary]),
            None => Vec::from_iter([self.primary_type]),
        }
    }

    /// Whether the species has the given type.
    pub fn has_type(&self, typ: Type) -> bool {
        self.primary_type == typ || self.secondary_type == Some(typ)
    }

    /// The rarity bucket the species spawns in.
    pub fn rarity(&self) -> Rarity {
        Rarity::of(self)
    }
}
