use serde::{
    Deserialize,
    Serialize,
};
use serde_string_enum::{
    DeserializeLabeledStringEnum,
    SerializeLabeledStringEnum,
};
use uuid::Uuid;
use wildmon_calc::{
    Combatant,
    DamageResult,
    resolve,
};
use wildmon_prng::{
    RandomSource,
    rand_util,
};

use crate::{
    error::BattleError,
    rewards::{
        Reward,
        knockout_reward,
    },
    turn_log::TurnLogEntry,
};

/// Lifecycle status of a battle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, SerializeLabeledStringEnum, DeserializeLabeledStringEnum)]
pub enum BattleStatus {
    /// Created by a challenge, waiting for the challenged player to accept.
    #[string = "pending"]
    Pending,
    /// Both sides are locked in and turns are being taken.
    #[string = "active"]
    Active,
    /// Ended naturally with a knockout.
    #[string = "completed"]
    Completed,
    /// Withdrawn before it ever started.
    #[string = "cancelled"]
    Cancelled,
    /// A participant gave up after the battle was underway or pending.
    #[string = "forfeited"]
    Forfeited,
}

impl BattleStatus {
    /// Whether the status is terminal. Terminal battles accept no further transitions.
    pub fn terminal(&self) -> bool {
        match self {
            Self::Pending | Self::Active => false,
            Self::Completed | Self::Cancelled | Self::Forfeited => true,
        }
    }
}

/// The result of one executed move, reported back to the caller.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TurnOutcome {
    /// The damage calculation for the move.
    pub result: DamageResult,
    /// The defender's HP pool after the hit.
    pub defender_hp: u16,
    /// The defender's HP ceiling, for rendering health bars.
    pub defender_max_hp: u16,
    /// Whether this move ended the battle.
    pub ended: bool,
    /// The winner, set only when the battle ended.
    pub winner: Option<i64>,
    /// Rewards for the winner, set only on a knockout.
    pub reward: Option<Reward>,
}

/// A player-versus-player battle.
///
/// The battle is a strict state machine: `Pending` on challenge, `Active` once accepted, and
/// exactly one of the terminal statuses afterwards. Every transition validates the acting player
/// and the current status and returns a [`BattleError`] on any mismatch.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Battle {
    /// Unique identifier for the battle.
    pub id: Uuid,
    /// Chat the battle takes place in.
    pub chat: i64,
    /// Player that issued the challenge.
    pub challenger: i64,
    /// Player that was challenged.
    pub opponent: i64,
    /// Current lifecycle status.
    pub status: BattleStatus,
    /// The player whose turn it is, set only while the battle is active.
    pub whose_turn: Option<i64>,
    /// Turn counter, starting at 1 when the battle activates.
    pub current_turn: u32,
    /// The challenger's creature, fixed at challenge time.
    pub challenger_mon: Combatant,
    /// The opponent's creature, fixed at acceptance.
    pub opponent_mon: Option<Combatant>,
    /// Append-only record of every executed move.
    pub log: Vec<TurnLogEntry>,
    /// The winner, set when the battle reaches `Completed` or `Forfeited`.
    pub winner: Option<i64>,
    /// Rewards granted to the winner, set only on a knockout.
    pub reward: Option<Reward>,
}

impl Battle {
    /// Creates a pending battle from a challenge.
    ///
    /// The challenger commits their creature up front. No turns can be taken until the
    /// challenged player accepts.
    pub fn challenge(chat: i64, challenger: i64, opponent: i64, challenger_mon: Combatant) -> Self {
        Self {
            id: Uuid::new_v4(),
            chat,
            challenger,
            opponent,
            status: BattleStatus::Pending,
            whose_turn: None,
            current_turn: 0,
            challenger_mon,
            opponent_mon: None,
            log: Vec::new(),
            winner: None,
            reward: None,
        }
    }

    /// Whether the player is one of the two participants.
    pub fn participant(&self, player: i64) -> bool {
        player == self.challenger || player == self.opponent
    }

    fn other(&self, player: i64) -> Result<i64, BattleError> {
        if player == self.challenger {
            Ok(self.opponent)
        } else if player == self.opponent {
            Ok(self.challenger)
        } else {
            Err(BattleError::NotAParticipant(player))
        }
    }

    fn require_active(&self) -> Result<(), BattleError> {
        match self.status {
            BattleStatus::Active => Ok(()),
            BattleStatus::Pending => Err(BattleError::NotActive),
            _ => Err(BattleError::AlreadyEnded),
        }
    }

    /// Accepts a pending challenge and activates the battle.
    ///
    /// Only the challenged player may accept, committing their creature in the process. The
    /// first turn goes to the faster creature; speed ties are broken by a fair coin flip.
    pub fn accept(
        &mut self,
        player: i64,
        opponent_mon: Combatant,
        prng: &mut dyn RandomSource,
    ) -> Result<(), BattleError> {
        match self.status {
            BattleStatus::Pending => (),
            BattleStatus::Active => return Err(BattleError::NotPending),
            _ => return Err(BattleError::AlreadyEnded),
        }
        if !self.participant(player) {
            return Err(BattleError::NotAParticipant(player));
        }
        if player != self.opponent {
            return Err(BattleError::NotChallenged(player));
        }

        let challenger_speed = self.challenger_mon.speed();
        let opponent_speed = opponent_mon.speed();
        let first = if challenger_speed > opponent_speed {
            self.challenger
        } else if opponent_speed > challenger_speed {
            self.opponent
        } else if rand_util::chance(prng, 1, 2) {
            self.challenger
        } else {
            self.opponent
        };

        self.opponent_mon = Some(opponent_mon);
        self.status = BattleStatus::Active;
        self.whose_turn = Some(first);
        self.current_turn = 1;
        log::info!("battle {} accepted; player {first} moves first", self.id);
        Ok(())
    }

    /// Executes one move for the acting player.
    ///
    /// Validates that the battle is active, that the player is a participant, that it is their
    /// turn, and that `move_index` names one of their creature's moves. On a knockout the battle
    /// completes and the winner's rewards are computed; otherwise the turn passes to the other
    /// player and the turn counter advances.
    pub fn execute_move(
        &mut self,
        player: i64,
        move_index: usize,
        prng: &mut dyn RandomSource,
    ) -> Result<TurnOutcome, BattleError> {
        self.require_active()?;
        let other = self.other(player)?;
        if self.whose_turn != Some(player) {
            return Err(BattleError::OutOfTurn(player));
        }
        let Some(opponent_mon) = self.opponent_mon.as_mut() else {
            return Err(BattleError::NotActive);
        };

        let (attacker, defender) = if player == self.challenger {
            (&mut self.challenger_mon, opponent_mon)
        } else {
            (opponent_mon, &mut self.challenger_mon)
        };
        let mov = attacker
            .moves
            .get(move_index)
            .cloned()
            .ok_or(BattleError::UnknownMove(move_index))?;

        let result = resolve(attacker, defender, &mov, prng);
        defender.apply_damage(result.damage);

        let attacker_level = attacker.level;
        let defender_level = defender.level;
        let defender_hp = defender.current_hp;
        let defender_max_hp = defender.max_hp;
        let knocked_out = defender.fainted();

        self.log.push(TurnLogEntry {
            turn: self.current_turn,
            actor: player,
            mov: mov.name.clone(),
            damage: result.damage,
            effectiveness: result.effectiveness,
            critical: result.critical,
            hit: result.hit,
        });

        if knocked_out {
            let reward = knockout_reward(attacker_level, defender_level);
            self.status = BattleStatus::Completed;
            self.whose_turn = None;
            self.winner = Some(player);
            self.reward = Some(reward);
            log::info!("battle {} completed; player {player} wins", self.id);
            return Ok(TurnOutcome {
                result,
                defender_hp,
                defender_max_hp,
                ended: true,
                winner: Some(player),
                reward: Some(reward),
            });
        }

        self.whose_turn = Some(other);
        self.current_turn += 1;
        Ok(TurnOutcome {
            result,
            defender_hp,
            defender_max_hp,
            ended: false,
            winner: None,
            reward: None,
        })
    }

    /// Forfeits the battle on behalf of a participant.
    ///
    /// Allowed while the battle is pending or active. The other participant wins, but no
    /// rewards are granted. Returns the winner.
    pub fn forfeit(&mut self, player: i64) -> Result<i64, BattleError> {
        if self.status.terminal() {
            return Err(BattleError::AlreadyEnded);
        }
        let winner = self.other(player)?;
        self.status = BattleStatus::Forfeited;
        self.whose_turn = None;
        self.winner = Some(winner);
        log::info!("battle {} forfeited by player {player}", self.id);
        Ok(winner)
    }

    /// Cancels a pending challenge. Active battles cannot be cancelled, only forfeited.
    pub fn cancel(&mut self, player: i64) -> Result<(), BattleError> {
        match self.status {
            BattleStatus::Pending => (),
            BattleStatus::Active => return Err(BattleError::NotPending),
            _ => return Err(BattleError::AlreadyEnded),
        }
        if !self.participant(player) {
            return Err(BattleError::NotAParticipant(player));
        }
        self.status = BattleStatus::Cancelled;
        self.whose_turn = None;
        log::info!("battle {} cancelled by player {player}", self.id);
        Ok(())
    }
}

#[cfg(test)]
mod battle_status_test {
    use crate::BattleStatus;

    #[test]
    fn terminal_statuses() {
        assert!(!BattleStatus::Pending.terminal());
        assert!(!BattleStatus::Active.terminal());
        assert!(BattleStatus::Completed.terminal());
        assert!(BattleStatus::Cancelled.terminal());
        assert!(BattleStatus::Forfeited.terminal());
    }

    #[test]
    fn serializes_as_lowercase_strings() {
        assert_eq!(
            serde_json::to_string(&BattleStatus::Pending).unwrap(),
            "\"pending\""
        );
        assert_eq!(
            serde_json::from_str::<BattleStatus>("\"forfeited\"").unwrap(),
            BattleStatus::Forfeited
        );
    }
}
