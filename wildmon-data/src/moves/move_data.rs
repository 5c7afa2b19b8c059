use serde::{
    Deserialize,
    Serialize,
};

use crate::{
    Accuracy,
    MoveCategory,
    Type,
};

/// Data about a move.
///
/// This is the shape persisted inside a battle's state blob, so the engine never has to reach
/// back into the move catalog mid-battle.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveData {
    /// Display name.
    pub name: String,
    /// The elemental type of the move.
    #[serde(rename = "type")]
    pub typ: Type,
    /// Base power. Zero for moves that deal no direct damage.
    #[serde(default)]
    pub power: u16,
    /// Base accuracy.
    #[serde(default)]
    pub accuracy: Accuracy,
    /// The category of the move.
    pub category: MoveCategory,
}

impl MoveData {
    /// Creates a new move.
    pub fn new(
        name: impl Into<String>,
        typ: Type,
        power: u16,
        accuracy: Accuracy,
        category: MoveCategory,
    ) -> Self {
        Self {
            name: name.into(),
            typ,
            power,
            accuracy,
            category,
        }
    }
}
