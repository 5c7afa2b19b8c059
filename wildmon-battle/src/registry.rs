use ahash::HashMap;
use uuid::Uuid;
use wildmon_calc::Combatant;
use wildmon_prng::RandomSource;

use crate::{
    battle::{
        Battle,
        TurnOutcome,
    },
    error::BattleError,
};

/// In-memory store of battles, enforcing the one-battle-per-player rule.
///
/// Terminal battles stay in the registry for inspection until removed, but no longer count
/// against their participants.
#[derive(Debug, Default)]
pub struct BattleRegistry {
    battles: HashMap<Uuid, Battle>,
}

impl BattleRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a pending battle from a challenge and returns its identifier.
    ///
    /// Fails if either participant already has a pending or active battle.
    pub fn challenge(
        &mut self,
        chat: i64,
        challenger: i64,
        opponent: i64,
        challenger_mon: Combatant,
    ) -> Result<Uuid, BattleError> {
        for player in [challenger, opponent] {
            if self.active_battle_for(player).is_some() {
                return Err(BattleError::AlreadyInBattle(player));
            }
        }
        let battle = Battle::challenge(chat, challenger, opponent, challenger_mon);
        let id = battle.id;
        log::info!("battle {id} created: player {challenger} challenged player {opponent}");
        self.battles.insert(id, battle);
        Ok(id)
    }

    /// Looks up a battle by identifier.
    pub fn battle(&self, id: Uuid) -> Result<&Battle, BattleError> {
        self.battles.get(&id).ok_or(BattleError::NotFound)
    }

    /// The player's pending or active battle, if they have one.
    pub fn active_battle_for(&self, player: i64) -> Option<&Battle> {
        self.battles
            .values()
            .find(|battle| !battle.status.terminal() && battle.participant(player))
    }

    /// Accepts a pending challenge. See [`Battle::accept`].
    pub fn accept(
        &mut self,
        id: Uuid,
        player: i64,
        opponent_mon: Combatant,
        prng: &mut dyn RandomSource,
    ) -> Result<(), BattleError> {
        self.battle_mut(id)?.accept(player, opponent_mon, prng)
    }

    /// Executes one move. See [`Battle::execute_move`].
    pub fn execute_move(
        &mut self,
        id: Uuid,
        player: i64,
        move_index: usize,
        prng: &mut dyn RandomSource,
    ) -> Result<TurnOutcome, BattleError> {
        self.battle_mut(id)?.execute_move(player, move_index, prng)
    }

    /// Forfeits a battle. See [`Battle::forfeit`].
    pub fn forfeit(&mut self, id: Uuid, player: i64) -> Result<i64, BattleError> {
        self.battle_mut(id)?.forfeit(player)
    }

    /// Cancels a pending challenge. See [`Battle::cancel`].
    pub fn cancel(&mut self, id: Uuid, player: i64) -> Result<(), BattleError> {
        self.battle_mut(id)?.cancel(player)
    }

    /// Removes a battle from the registry, returning it if it existed.
    pub fn remove(&mut self, id: Uuid) -> Option<Battle> {
        self.battles.remove(&id)
    }

    fn battle_mut(&mut self, id: Uuid) -> Result<&mut Battle, BattleError> {
        self.battles.get_mut(&id).ok_or(BattleError::NotFound)
    }
}
