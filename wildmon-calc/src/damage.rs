use serde::{
    Deserialize,
    Serialize,
};
use wildmon_data::{
    MoveCategory,
    MoveData,
    Stat,
    effectiveness,
};
use wildmon_prng::{
    RandomSource,
    rand_util,
};

use crate::{
    abilities,
    state::Combatant,
};

/// Result of resolving one attack.
///
/// A miss or a zero-effectiveness hit is a normal result with `damage == 0`, not an error.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DamageResult {
    /// Damage dealt to the defender.
    pub damage: u16,
    /// Combined type effectiveness of the attack.
    pub effectiveness: f64,
    /// Did the attack score a critical hit?
    pub critical: bool,
    /// Did the attack land at all?
    pub hit: bool,
    /// Narration for the presentation layer, newline-joined.
    pub message: String,
}

fn effectiveness_message(multiplier: f64) -> Option<&'static str> {
    if multiplier == 0.0 {
        Some("It had no effect...")
    } else if multiplier < 1.0 {
        Some("It's not very effective...")
    } else if multiplier > 1.0 {
        Some("It's super effective!")
    } else {
        None
    }
}

/// Resolves an attack from `attacker` against `defender`.
///
/// Rolls, in order: accuracy, critical hit (1/16), then damage variance (85-100%). The damage
/// formula follows the reference game: truncation happens only once, at the end.
pub fn resolve(
    attacker: &Combatant,
    defender: &Combatant,
    mov: &MoveData,
    prng: &mut dyn RandomSource,
) -> DamageResult {
    if let Some(accuracy) = mov.accuracy.percentage() {
        let roll = rand_util::range(prng, 1, 101);
        if roll > accuracy as u64 {
            return DamageResult {
                damage: 0,
                effectiveness: 1.0,
                critical: false,
                hit: false,
                message: format!("{}'s attack missed!", attacker.species.name),
            };
        }
    }

    let (offense_stat, defense_stat) = match mov.category {
        MoveCategory::Physical => (Stat::Attack, Stat::Defense),
        MoveCategory::Special | MoveCategory::Status => (Stat::SpAttack, Stat::SpDefense),
    };
    let offense = attacker.stat(offense_stat) as u32;
    let defense = defender.stat(defense_stat) as u32;

    let type_multiplier = effectiveness(mov.typ, &defender.types());
    let modifiers = abilities::apply_damage_modifiers(
        &attacker.ability,
        &defender.ability,
        mov,
        type_multiplier,
        offense,
    );
    let type_multiplier = modifiers.effectiveness;
    let offense = modifiers.offense;
    let mut ability_messages = modifiers.messages;

    let base = (2.0 * attacker.level as f64 / 5.0 + 2.0) * mov.power as f64 * offense as f64
        / defense as f64
        / 50.0
        + 2.0;

    let stab = if attacker.species.has_type(mov.typ) {
        abilities::stab_multiplier(&attacker.ability)
    } else {
        1.0
    };

    let critical = rand_util::chance(prng, 1, 16);
    let crit_multiplier = if critical { 1.5 } else { 1.0 };

    let variance = rand_util::range(prng, 85, 101) as f64 / 100.0;

    let mut damage = (base * stab * type_multiplier * crit_multiplier * variance) as u16;
    damage = damage.max(1);
    if type_multiplier == 0.0 {
        damage = 0;
    }

    if damage > 0 {
        let (clamped, sturdy_message) = abilities::sturdy_clamp(
            &defender.ability,
            defender.current_hp,
            defender.max_hp,
            damage,
        );
        damage = clamped;
        if let Some(message) = sturdy_message {
            ability_messages.push(message);
        }
    }

    let mut lines = Vec::from_iter([format!(
        "{} used {}!",
        attacker.species.name, mov.name
    )]);
    if let Some(message) = effectiveness_message(type_multiplier) {
        lines.push(message.to_owned());
    }
    if critical {
        lines.push("A critical hit!".to_owned());
    }
    lines.extend(ability_messages);

    DamageResult {
        damage,
        effectiveness: type_multiplier,
        critical,
        hit: true,
        message: lines.join("\n"),
    }
}
