use serde::{
    Deserialize,
    Serialize,
};
use serde_string_enum::{
    DeserializeLabeledStringEnum,
    SerializeLabeledStringEnum,
};

/// Highest individual value for a single stat.
pub const MAX_IV: u16 = 31;
/// Highest effort value for a single stat.
pub const MAX_EV: u16 = 252;
/// Highest total effort value across all stats.
pub const MAX_EV_TOTAL: u16 = 510;
/// Highest level.
pub const MAX_LEVEL: u8 = 100;

/// A single stat value.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    SerializeLabeledStringEnum,
    DeserializeLabeledStringEnum,
)]
pub enum Stat {
    #[string = "hp"]
    HP,
    #[string = "attack"]
    #[alias = "atk"]
    Attack,
    #[string = "defense"]
    #[alias = "def"]
    Defense,
    #[string = "sp_attack"]
    #[alias = "spa"]
    #[alias = "spatk"]
    SpAttack,
    #[string = "sp_defense"]
    #[alias = "spd"]
    #[alias = "spdef"]
    SpDefense,
    #[string = "speed"]
    #[alias = "spe"]
    Speed,
}

impl Stat {
    /// All stats, in canonical order.
    pub const ALL: [Stat; 6] = [
        Stat::HP,
        Stat::Attack,
        Stat::Defense,
        Stat::SpAttack,
        Stat::SpDefense,
        Stat::Speed,
    ];
}

/// A table with one value for each stat.
///
/// Used for base stats, individual values, effort values, and computed stats alike.
#[derive(Debug, Default, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct StatTable {
    #[serde(default)]
    pub hp: u16,
    #[serde(default)]
    pub attack: u16,
    #[serde(default)]
    pub defense: u16,
    #[serde(default)]
    pub sp_attack: u16,
    #[serde(default)]
    pub sp_defense: u16,
    #[serde(default)]
    pub speed: u16,
}

impl StatTable {
    /// Creates a table holding the same value for every stat.
    pub fn uniform(value: u16) -> Self {
        Self {
            hp: value,
            attack: value,
            defense: value,
            sp_attack: value,
            sp_defense: value,
            speed: value,
        }
    }

    /// Returns the value for the given stat.
    pub fn get(&self, stat: Stat) -> u16 {
        match stat {
            Stat::HP => self.hp,
            Stat::Attack => self.attack,
            Stat::Defense => self.defense,
            Stat::SpAttack => self.sp_attack,
            Stat::SpDefense => self.sp_defense,
            Stat::Speed => self.speed,
        }
    }

    /// Sets the value for the given stat.
    pub fn set(&mut self, stat: Stat, value: u16) {
        let slot = match stat {
            Stat::HP => &mut self.hp,
            Stat::Attack => &mut self.attack,
            Stat::Defense => &mut self.defense,
            Stat::SpAttack => &mut self.sp_attack,
            Stat::SpDefense => &mut self.sp_defense,
            Stat::Speed => &mut self.speed,
        };
        *slot = value;
    }

    /// Iterates over all entries in canonical order.
    pub fn entries(&self) -> impl Iterator<Item = (Stat, u16)> + '_ {
        Stat::ALL.into_iter().map(|stat| (stat, self.get(stat)))
    }

    /// Sums up all values in the table.
    pub fn sum(&self) -> u32 {
        self.entries().map(|(_, value)| value as u32).sum()
    }
}

impl FromIterator<(Stat, u16)> for StatTable {
    fn from_iter<T: IntoIterator<Item = (Stat, u16)>>(iter: T) -> Self {
        let mut out = StatTable::default();
        for (stat, value) in iter {
            out.set(stat, value);
        }
        out
    }
}
