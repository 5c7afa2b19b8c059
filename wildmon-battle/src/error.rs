use thiserror::Error;

/// Errors raised by battle state transitions.
///
/// Transitions are rejected explicitly; the engine never silently ignores an invalid action.
/// The presentation layer is expected to turn these into user-visible messages.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BattleError {
    /// The transition requires a battle that is still awaiting acceptance.
    #[error("battle is not awaiting acceptance")]
    NotPending,
    /// The transition requires an active battle.
    #[error("battle is not active")]
    NotActive,
    /// The battle already reached a terminal status.
    #[error("battle has already ended")]
    AlreadyEnded,
    /// The player is not one of the two participants.
    #[error("player {0} is not part of this battle")]
    NotAParticipant(i64),
    /// Only the challenged player may accept.
    #[error("player {0} was not challenged to this battle")]
    NotChallenged(i64),
    /// The player acted out of turn.
    #[error("it is not player {0}'s turn")]
    OutOfTurn(i64),
    /// The move index does not point at a known move.
    #[error("no move with index {0}")]
    UnknownMove(usize),
    /// The player already has a pending or active battle.
    #[error("player {0} already has a battle in progress")]
    AlreadyInBattle(i64),
    /// No battle with the given identifier.
    #[error("battle does not exist")]
    NotFound,
}
