use wildmon_data::{
    MoveCategory,
    MoveData,
    Type,
};

/// Ability-driven adjustments to a damage calculation.
pub(crate) struct AbilityModifiers {
    /// Effectiveness after immunity abilities, overriding the type chart result.
    pub effectiveness: f64,
    /// Offense stat after boost/reduction abilities.
    pub offense: u32,
    /// Narration lines for every modifier that triggered.
    pub messages: Vec<String>,
}

fn normalize(ability: &str) -> String {
    ability.to_lowercase().replace(['-', '_'], " ")
}

/// Applies attacker and defender ability effects to the damage inputs.
pub(crate) fn apply_damage_modifiers(
    attacker_ability: &str,
    defender_ability: &str,
    mov: &MoveData,
    effectiveness: f64,
    offense: u32,
) -> AbilityModifiers {
    let mut messages = Vec::new();
    let attacker_ability = normalize(attacker_ability);
    let defender_ability = normalize(defender_ability);

    // Defender immunities end the calculation outright.
    let immunity = match (defender_ability.as_str(), mov.typ) {
        ("levitate", Type::Ground) => Some("Levitate makes it immune to ground moves!"),
        ("flash fire", Type::Fire) => Some("Flash Fire absorbed the fire attack!"),
        ("water absorb", Type::Water) => Some("Water Absorb nullified the attack!"),
        ("volt absorb", Type::Electric) => Some("Volt Absorb nullified the attack!"),
        _ => None,
    };
    if let Some(message) = immunity {
        return AbilityModifiers {
            effectiveness: 0.0,
            offense,
            messages: Vec::from_iter([message.to_owned()]),
        };
    }

    let mut offense = offense;
    if defender_ability == "thick fat" && matches!(mov.typ, Type::Fire | Type::Ice) {
        offense /= 2;
        messages.push("Thick Fat reduced the damage!".to_owned());
    }

    if matches!(attacker_ability.as_str(), "huge power" | "pure power")
        && mov.category == MoveCategory::Physical
    {
        messages.push(match attacker_ability.as_str() {
            "huge power" => "Huge Power boosted the attack!".to_owned(),
            _ => "Pure Power boosted the attack!".to_owned(),
        });
        offense *= 2;
    }

    AbilityModifiers {
        effectiveness,
        offense,
        messages,
    }
}

/// The same-type attack bonus multiplier, boosted by Adaptability.
pub(crate) fn stab_multiplier(attacker_ability: &str) -> f64 {
    if normalize(attacker_ability) == "adaptability" {
        2.0
    } else {
        1.5
    }
}

/// Sturdy lets a defender at full HP survive a would-be knockout with 1 HP.
///
/// Returns the adjusted damage and a narration line if the ability triggered.
pub(crate) fn sturdy_clamp(
    defender_ability: &str,
    current_hp: u16,
    max_hp: u16,
    damage: u16,
) -> (u16, Option<String>) {
    if normalize(defender_ability) == "sturdy" && current_hp == max_hp && damage >= current_hp {
        (
            current_hp - 1,
            Some("Sturdy let it hang on with 1 HP!".to_owned()),
        )
    } else {
        (damage, None)
    }
}
