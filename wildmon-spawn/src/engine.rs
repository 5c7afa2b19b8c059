use std::time::SystemTime;

use anyhow::Result;
use wildmon_data::{
    Rarity,
    SpeciesData,
    SpeciesStore,
};
use wildmon_prng::{
    RandomSource,
    rand_util,
};

use crate::{
    SpawnConfig,
    activity::ChatActivity,
    record::SpawnRecord,
};

/// The spawn engine: rarity-weighted species rolls, chain-scaled shiny rolls, and trigger
/// evaluation.
///
/// The engine is pure over its inputs. Catalog access and randomness are injected, and the
/// activity state it evaluates belongs to the caller, so every decision can be replayed under a
/// seeded source.
#[derive(Debug, Clone)]
pub struct SpawnEngine {
    config: SpawnConfig,
}

impl SpawnEngine {
    pub fn new(config: SpawnConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &SpawnConfig {
        &self.config
    }

    /// Rolls a rarity bucket from the fixed weight table.
    pub fn roll_rarity(&self, prng: &mut dyn RandomSource) -> Rarity {
        // Weights are in tenths of a percent and sum to 1000, covering the whole roll range.
        let roll = rand_util::range(prng, 0, 1000);
        let mut cumulative = 0;
        for rarity in Rarity::ALL {
            cumulative += rarity.weight();
            if roll < cumulative {
                return rarity;
            }
        }
        Rarity::Mythical
    }

    /// Rolls a species to spawn.
    ///
    /// A rarity bucket is rolled first, then a species is drawn uniformly from the bucket's
    /// members. An empty bucket falls back to a uniform draw over the whole catalog; `None`
    /// means the catalog itself is empty.
    pub fn roll_species(
        &self,
        store: &dyn SpeciesStore,
        prng: &mut dyn RandomSource,
    ) -> Result<Option<SpeciesData>> {
        let rarity = self.roll_rarity(prng);
        let mut numbers = store.all_species(&|species| Rarity::of(species) == rarity)?;
        if numbers.is_empty() {
            numbers = store.all_species(&|_| true)?;
        }
        let Some(number) = rand_util::sample_slice(prng, &numbers).copied() else {
            return Ok(None);
        };
        store.species(number)
    }

    /// The shiny odds denominator for a catch chain.
    ///
    /// Base odds halve at chains above 50, quarter above 100, and eighth above 200.
    pub fn shiny_rate(&self, chain: u32) -> u64 {
        let base = self.config.shiny_base_rate;
        if chain > 200 {
            base / 8
        } else if chain > 100 {
            base / 4
        } else if chain > 50 {
            base / 2
        } else {
            base
        }
    }

    /// Rolls shininess for a spawn, with odds of 1 in [`Self::shiny_rate`].
    pub fn roll_shiny(&self, chain: u32, prng: &mut dyn RandomSource) -> bool {
        let rate = self.shiny_rate(chain).max(1);
        rand_util::range(prng, 1, rate + 1) == 1
    }

    /// Evaluates whether a spawn should fire for a chat.
    ///
    /// Disabled chats never spawn, and neither does a chat with a still-catchable spawn.
    /// Reaching the message threshold fires unconditionally. Otherwise, once the minimum idle
    /// time has passed and some activity has accumulated, the spawn fires probabilistically,
    /// with the chance growing linearly toward the configured cap as idle time approaches the
    /// maximum.
    pub fn should_trigger(
        &self,
        activity: &ChatActivity,
        active_spawn: Option<&SpawnRecord>,
        now: SystemTime,
        prng: &mut dyn RandomSource,
    ) -> bool {
        if !activity.enabled {
            return false;
        }
        if active_spawn.is_some_and(|spawn| spawn.active(now)) {
            return false;
        }
        if activity.message_count >= self.config.message_threshold {
            return true;
        }
        if activity.message_count <= self.config.idle_message_minimum {
            return false;
        }
        let Some(last_spawn_at) = activity.last_spawn_at else {
            return false;
        };
        let Ok(elapsed) = now.duration_since(last_spawn_at) else {
            return false;
        };
        if elapsed <= self.config.min_idle {
            return false;
        }
        let progress = (elapsed.as_secs_f64() / self.config.max_idle.as_secs_f64()).min(1.0);
        // The chance is evaluated in basis points so the roll stays on the integer source.
        let basis_points = (progress * self.config.idle_chance_percent as f64 * 100.0) as u64;
        rand_util::range(prng, 0, 10_000) < basis_points
    }

    /// Creates a spawn record for a chat, rolling species and shininess.
    ///
    /// Returns `None` when the catalog has no species to draw from.
    pub fn create_spawn(
        &self,
        store: &dyn SpeciesStore,
        chat: i64,
        chain: u32,
        force_shiny: bool,
        now: SystemTime,
        prng: &mut dyn RandomSource,
    ) -> Result<Option<SpawnRecord>> {
        let Some(species) = self.roll_species(store, prng)? else {
            log::warn!("no species available to spawn in chat {chat}");
            return Ok(None);
        };
        let shiny = force_shiny || self.roll_shiny(chain, prng);
        let record = SpawnRecord::new(chat, species.number, shiny, now, self.config.spawn_timeout);
        log::info!(
            "spawned {} (number {}, shiny {shiny}) in chat {chat}",
            species.name,
            species.number,
        );
        Ok(Some(record))
    }
}

impl Default for SpawnEngine {
    fn default() -> Self {
        Self::new(SpawnConfig::default())
    }
}
