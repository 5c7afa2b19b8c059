use serde::{
    Deserialize,
    Serialize,
};

/// Rewards paid to the winner of a completed battle.
///
/// Forfeits and cancellations pay nothing; only a natural knockout grants rewards.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Reward {
    pub xp: u32,
    pub coins: u32,
}

/// Computes the winner's reward for knocking out a defender.
///
/// Base rewards scale with the defender's level. Defeating a higher-level defender adds 10% per
/// level of gap; integer truncation happens once, at the end.
pub fn knockout_reward(attacker_level: u8, defender_level: u8) -> Reward {
    let mut xp = 50 + 5 * defender_level as u32;
    let mut coins = 100 + 10 * defender_level as u32;
    if attacker_level < defender_level {
        let gap = (defender_level - attacker_level) as u32;
        xp = xp * (10 + gap) / 10;
        coins = coins * (10 + gap) / 10;
    }
    Reward { xp, coins }
}

#[cfg(test)]
mod rewards_test {
    use crate::rewards::{
        Reward,
        knockout_reward,
    };

    #[test]
    fn scales_with_defender_level() {
        assert_eq!(knockout_reward(50, 50), Reward { xp: 300, coins: 600 });
        assert_eq!(knockout_reward(50, 10), Reward { xp: 100, coins: 200 });
    }

    #[test]
    fn underdog_bonus_adds_ten_percent_per_level() {
        // Level 40 beats level 50: 10-level gap doubles the base.
        assert_eq!(knockout_reward(40, 50), Reward { xp: 600, coins: 1200 });
        // One level of gap: 10% bonus.
        assert_eq!(knockout_reward(49, 50), Reward { xp: 330, coins: 660 });
    }

    #[test]
    fn no_bonus_for_beating_lower_levels() {
        assert_eq!(knockout_reward(100, 10), knockout_reward(10, 10));
    }
}
