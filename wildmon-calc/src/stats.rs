use wildmon_data::{
    Nature,
    NatureEffect,
    Stat,
    StatTable,
};

fn core(base: u16, iv: u16, ev: u16, level: u8) -> u32 {
    // All divisions truncate, matching the reference stat formula exactly.
    (2 * base as u32 + iv as u32 + ev as u32 / 4) * level as u32 / 100
}

/// Calculates the HP stat.
///
/// `floor((2 * base + iv + floor(ev / 4)) * level / 100) + level + 10`
pub fn hp_stat(base: u16, iv: u16, ev: u16, level: u8) -> u16 {
    (core(base, iv, ev, level) + level as u32 + 10) as u16
}

/// Calculates a non-HP stat.
///
/// `floor((floor((2 * base + iv + floor(ev / 4)) * level / 100) + 5) * nature)`, where the
/// nature multiplier is 1.1, 0.9, or 1.0. The multiplication is done in integers to keep the
/// truncation exact.
pub fn stat(base: u16, iv: u16, ev: u16, level: u8, nature: NatureEffect) -> u16 {
    let value = core(base, iv, ev, level) + 5;
    let value = match nature {
        NatureEffect::Boost => value * 11 / 10,
        NatureEffect::Drop => value * 9 / 10,
        NatureEffect::Neutral => value,
    };
    value as u16
}

/// Calculates the full stat table for a creature.
pub fn calculate_stats(
    base_stats: &StatTable,
    ivs: &StatTable,
    evs: &StatTable,
    level: u8,
    nature: Nature,
) -> StatTable {
    StatTable::from_iter(Stat::ALL.into_iter().map(|entry| {
        let value = if entry == Stat::HP {
            hp_stat(base_stats.hp, ivs.hp, evs.hp, level)
        } else {
            stat(
                base_stats.get(entry),
                ivs.get(entry),
                evs.get(entry),
                level,
                nature.effect(entry),
            )
        };
        (entry, value)
    }))
}
