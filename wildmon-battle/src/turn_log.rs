use serde::{
    Deserialize,
    Serialize,
};

/// A single completed action in a battle's history.
///
/// The log is append-only and ordered by turn number, so it doubles as a replayable record of
/// the battle for the presentation layer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TurnLogEntry {
    /// Turn on which the action happened, starting at 1.
    pub turn: u32,
    /// Player that acted.
    pub actor: i64,
    /// Name of the move used.
    pub mov: String,
    /// Damage dealt to the defender.
    pub damage: u16,
    /// Combined type effectiveness of the hit.
    pub effectiveness: f64,
    /// Whether the hit was critical.
    pub critical: bool,
    /// Whether the attack connected at all.
    pub hit: bool,
}
