use serde::{
    Deserialize,
    Serialize,
};
use wildmon_data::{
    MoveData,
    Nature,
    SpeciesData,
    Stat,
    StatTable,
    Type,
};

use crate::{
    moves,
    stats,
};

/// A creature projected into battle context.
///
/// A combatant is built once from the persisted owned-creature record (or straight from species
/// data for wild encounters) and carries everything the damage calculator needs. The current HP
/// pool is the only value that mutates during a battle; the engine never reaches back into
/// storage.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Combatant {
    /// The owning player, if any. Wild combatants have no owner.
    #[serde(default)]
    pub owner: Option<i64>,
    /// The species catalog entry, fully resolved.
    pub species: SpeciesData,
    /// Level, 1 to 100.
    pub level: u8,
    /// Individual values, fixed at creation of the owned instance.
    pub ivs: StatTable,
    /// Trained effort values.
    pub evs: StatTable,
    /// Nature.
    pub nature: Nature,
    /// Ability carried into battle.
    #[serde(default)]
    pub ability: String,
    /// Resolved battle move list, at most four moves.
    pub moves: Vec<MoveData>,
    /// Current hit points, always within `[0, max_hp]`.
    pub current_hp: u16,
    /// Hit point ceiling, equal to the computed HP stat.
    pub max_hp: u16,
}

impl Combatant {
    /// Builds a combatant from an owned creature's persisted attributes.
    ///
    /// `explicit_moves` is the creature's stored move list; if it yields nothing usable, the
    /// deterministic type-based fallback set is assigned.
    pub fn new(
        owner: i64,
        species: SpeciesData,
        level: u8,
        ivs: StatTable,
        evs: StatTable,
        nature: Nature,
        ability: impl Into<String>,
        explicit_moves: &[MoveData],
    ) -> Self {
        let moves = moves::resolve_moves(
            explicit_moves,
            species.primary_type,
            species.secondary_type,
            level,
        );
        let max_hp = stats::hp_stat(species.base_stats.hp, ivs.hp, evs.hp, level);
        Self {
            owner: Some(owner),
            species,
            level,
            ivs,
            evs,
            nature,
            ability: ability.into(),
            moves,
            current_hp: max_hp,
            max_hp,
        }
    }

    /// Builds a wild combatant from species data alone, with a flat IV spread and no EVs.
    pub fn wild(species: SpeciesData, level: u8, iv: u16) -> Self {
        let ability = species.abilities.first().cloned().unwrap_or_default();
        let moves = moves::fallback_moves(species.primary_type, species.secondary_type, level);
        let ivs = StatTable::uniform(iv);
        let max_hp = stats::hp_stat(species.base_stats.hp, iv, 0, level);
        Self {
            owner: None,
            species,
            level,
            ivs,
            evs: StatTable::default(),
            nature: Nature::Hardy,
            ability,
            moves,
            current_hp: max_hp,
            max_hp,
        }
    }

    /// The combatant's computed value for the given stat.
    ///
    /// HP returns the hit point ceiling, not the current pool.
    pub fn stat(&self, stat: Stat) -> u16 {
        if stat == Stat::HP {
            return self.max_hp;
        }
        stats::stat(
            self.species.base_stats.get(stat),
            self.ivs.get(stat),
            self.evs.get(stat),
            self.level,
            self.nature.effect(stat),
        )
    }

    /// The combatant's speed stat, used for turn order.
    pub fn speed(&self) -> u16 {
        self.stat(Stat::Speed)
    }

    /// The combatant's types.
    pub fn types(&self) -> Vec<Type> {
        self.species.types()
    }

    /// Whether the combatant has fainted.
    pub fn fainted(&self) -> bool {
        self.current_hp == 0
    }

    /// Applies damage to the current HP pool, flooring at zero.
    pub fn apply_damage(&mut self, damage: u16) {
        self.current_hp = self.current_hp.saturating_sub(damage);
    }
}
