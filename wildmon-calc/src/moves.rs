use wildmon_data::{
    Accuracy,
    MoveCategory,
    MoveData,
    Type,
};

/// Most moves a combatant can bring into battle.
pub const MAX_MOVES: usize = 4;

/// Level at which the high-tier move of the primary type becomes available.
pub const STRONG_MOVE_LEVEL: u8 = 30;

/// The low-tier move for a type, taught to every combatant of that type.
pub fn default_move(typ: Type) -> MoveData {
    use MoveCategory::*;
    use Type::*;
    let (name, power, accuracy, category) = match typ {
        Normal => ("Tackle", 40, 100, Physical),
        Fire => ("Ember", 40, 100, Special),
        Water => ("Water Gun", 40, 100, Special),
        Electric => ("Thunder Shock", 40, 100, Special),
        Grass => ("Vine Whip", 45, 100, Physical),
        Ice => ("Powder Snow", 40, 100, Special),
        Fighting => ("Karate Chop", 50, 100, Physical),
        Poison => ("Poison Sting", 15, 100, Physical),
        Ground => ("Mud-Slap", 20, 100, Special),
        Flying => ("Gust", 40, 100, Special),
        Psychic => ("Confusion", 50, 100, Special),
        Bug => ("Bug Bite", 60, 100, Physical),
        Rock => ("Rock Throw", 50, 90, Physical),
        Ghost => ("Lick", 30, 100, Physical),
        Dragon => ("Dragon Rage", 40, 100, Special),
        Dark => ("Bite", 60, 100, Physical),
        Steel => ("Metal Claw", 50, 95, Physical),
        Fairy => ("Fairy Wind", 40, 100, Special),
    };
    MoveData::new(name, typ, power, Accuracy::Chance(accuracy), category)
}

/// The high-tier move for a type, learned at [`STRONG_MOVE_LEVEL`].
pub fn strong_move(typ: Type) -> MoveData {
    use MoveCategory::*;
    use Type::*;
    let (name, power, accuracy, category) = match typ {
        Normal => ("Body Slam", 85, 100, Physical),
        Fire => ("Flamethrower", 90, 100, Special),
        Water => ("Surf", 90, 100, Special),
        Electric => ("Thunderbolt", 90, 100, Special),
        Grass => ("Solar Beam", 120, 100, Special),
        Ice => ("Ice Beam", 90, 100, Special),
        Fighting => ("Close Combat", 120, 100, Physical),
        Poison => ("Sludge Bomb", 90, 100, Special),
        Ground => ("Earthquake", 100, 100, Physical),
        Flying => ("Aerial Ace", 60, 100, Physical),
        Psychic => ("Psychic", 90, 100, Special),
        Bug => ("X-Scissor", 80, 100, Physical),
        Rock => ("Rock Slide", 75, 90, Physical),
        Ghost => ("Shadow Ball", 80, 100, Special),
        Dragon => ("Dragon Claw", 80, 100, Physical),
        Dark => ("Crunch", 80, 100, Physical),
        Steel => ("Iron Head", 80, 100, Physical),
        Fairy => ("Moonblast", 95, 100, Special),
    };
    MoveData::new(name, typ, power, Accuracy::Chance(accuracy), category)
}

/// Builds the deterministic fallback move set for a combatant with no explicit moves.
///
/// Always includes the primary type's low-tier move, the secondary type's low-tier move if one
/// exists, and a normal-type move for coverage. From [`STRONG_MOVE_LEVEL`] upward, the primary
/// type's high-tier move is added. The list is capped at [`MAX_MOVES`] by truncation.
pub fn fallback_moves(primary: Type, secondary: Option<Type>, level: u8) -> Vec<MoveData> {
    let mut moves = Vec::with_capacity(MAX_MOVES);
    moves.push(default_move(primary));
    if let Some(secondary) = secondary {
        moves.push(default_move(secondary));
    }
    if primary != Type::Normal {
        moves.push(default_move(Type::Normal));
    }
    if level >= STRONG_MOVE_LEVEL {
        moves.push(strong_move(primary));
    }
    moves.truncate(MAX_MOVES);
    moves
}

/// Resolves the battle move list for a combatant.
///
/// Explicit moves take priority: pure status moves with no power are dropped, damaging moves
/// tagged as status are treated as special, and the list is capped at [`MAX_MOVES`]. If nothing
/// usable remains, the type-based fallback set is used.
pub fn resolve_moves(
    explicit: &[MoveData],
    primary: Type,
    secondary: Option<Type>,
    level: u8,
) -> Vec<MoveData> {
    let usable = explicit
        .iter()
        .filter(|mov| !(mov.category == MoveCategory::Status && mov.power == 0))
        .map(|mov| {
            let mut mov = mov.clone();
            if mov.category == MoveCategory::Status {
                mov.category = MoveCategory::Special;
            }
            mov
        })
        .take(MAX_MOVES)
        .collect::<Vec<_>>();
    if usable.is_empty() {
        fallback_moves(primary, secondary, level)
    } else {
        usable
    }
}
