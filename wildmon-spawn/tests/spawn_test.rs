use std::time::{
    Duration,
    SystemTime,
};

use assert_matches::assert_matches;
use wildmon_data::{
    LocalCatalog,
    Rarity,
    SpeciesData,
    StatTable,
    Type,
};
use wildmon_prng::{
    ControlledRandomSource,
    SeededRandomSource,
};
use wildmon_spawn::{
    ActivityTracker,
    ChatActivity,
    SpawnConfig,
    SpawnEngine,
    SpawnRecord,
};

const CHAT: i64 = -1000;

fn species(number: u16, name: &str, catch_rate: u8, legendary: bool, mythical: bool) -> SpeciesData {
    SpeciesData {
        number,
        name: name.to_owned(),
        primary_type: Type::Normal,
        secondary_type: None,
        base_stats: StatTable::uniform(50),
        abilities: Vec::new(),
        catch_rate,
        legendary,
        mythical,
    }
}

fn catalog_with_all_buckets() -> LocalCatalog {
    LocalCatalog::new([
        species(1, "Common", 255, false, false),
        species(2, "Uncommon", 120, false, false),
        species(3, "Rare", 45, false, false),
        species(4, "UltraRare", 3, false, false),
        species(5, "Legendary", 3, true, false),
        species(6, "Mythical", 3, false, true),
    ])
    .unwrap()
}

fn activity(message_count: u32, last_spawn_at: Option<SystemTime>) -> ChatActivity {
    ChatActivity {
        enabled: true,
        message_count,
        last_spawn_at,
    }
}

fn now() -> SystemTime {
    SystemTime::UNIX_EPOCH + Duration::from_secs(1_000_000)
}

#[test]
fn rarity_distribution_matches_weights() {
    let engine = SpawnEngine::default();
    let mut prng = SeededRandomSource::new(Some(20260829));
    let mut commons = 0;
    let mut mythicals = 0;
    for _ in 0..100_000 {
        match engine.roll_rarity(&mut prng) {
            Rarity::Common => commons += 1,
            Rarity::Mythical => mythicals += 1,
            _ => (),
        }
    }
    // 60% common within a tight band; 0.1% mythical within a loose one.
    assert!((58_500..=61_500).contains(&commons), "got {commons}");
    assert!((40..=200).contains(&mythicals), "got {mythicals}");
}

#[test]
fn species_roll_draws_from_the_rolled_bucket() {
    let engine = SpawnEngine::default();
    let catalog = catalog_with_all_buckets();
    let mut prng = ControlledRandomSource::new(Some(1));
    // Rarity roll 0 lands in the common bucket, which has a single member.
    prng.insert_fake_value(1, 0);
    assert_matches!(
        engine.roll_species(&catalog, &mut prng),
        Ok(Some(found)) => assert_eq!(found.name, "Common")
    );
}

#[test]
fn empty_bucket_falls_back_to_the_whole_catalog() {
    let engine = SpawnEngine::default();
    let catalog = LocalCatalog::new([species(1, "Common", 255, false, false)]).unwrap();
    let mut prng = ControlledRandomSource::new(Some(1));
    // Rarity roll 999 lands in the mythical bucket, which has no members here.
    prng.insert_fake_value(1, 999);
    assert_matches!(
        engine.roll_species(&catalog, &mut prng),
        Ok(Some(found)) => assert_eq!(found.number, 1)
    );
}

#[test]
fn empty_catalog_yields_no_species() {
    let engine = SpawnEngine::default();
    let catalog = LocalCatalog::new([]).unwrap();
    let mut prng = SeededRandomSource::new(Some(1));
    assert_matches!(engine.roll_species(&catalog, &mut prng), Ok(None));
}

#[test]
fn shiny_rate_scales_with_the_chain() {
    let engine = SpawnEngine::default();
    assert_eq!(engine.shiny_rate(0), 4096);
    assert_eq!(engine.shiny_rate(50), 4096);
    assert_eq!(engine.shiny_rate(51), 2048);
    assert_eq!(engine.shiny_rate(60), 2048);
    assert_eq!(engine.shiny_rate(100), 2048);
    assert_eq!(engine.shiny_rate(101), 1024);
    assert_eq!(engine.shiny_rate(200), 1024);
    assert_eq!(engine.shiny_rate(201), 512);
}

#[test]
fn shiny_odds_match_the_rate() {
    // A small base rate keeps the sample size reasonable.
    let engine = SpawnEngine::new(SpawnConfig {
        shiny_base_rate: 16,
        ..Default::default()
    });
    let mut prng = SeededRandomSource::new(Some(777));
    let shinies = (0..20_000)
        .filter(|_| engine.roll_shiny(0, &mut prng))
        .count();
    // 1/16 of 20,000 draws, with slack for variance.
    assert!((1_000..=1_500).contains(&shinies), "got {shinies}");
}

#[test]
fn threshold_fires_without_a_roll() {
    let engine = SpawnEngine::default();
    let mut prng = ControlledRandomSource::new(Some(1));
    assert!(engine.should_trigger(&activity(50, None), None, now(), &mut prng));
    assert!(engine.should_trigger(&activity(80, None), None, now(), &mut prng));
    assert_eq!(prng.sequence_count(), 0);
}

#[test]
fn disabled_chats_never_trigger() {
    let engine = SpawnEngine::default();
    let mut prng = SeededRandomSource::new(Some(1));
    let activity = ChatActivity {
        enabled: false,
        message_count: 100,
        last_spawn_at: None,
    };
    assert!(!engine.should_trigger(&activity, None, now(), &mut prng));
}

#[test]
fn an_active_spawn_blocks_new_ones() {
    let engine = SpawnEngine::default();
    let mut prng = SeededRandomSource::new(Some(1));
    let now = now();
    let mut spawn = SpawnRecord::new(CHAT, 1, false, now, Duration::from_secs(120));

    assert!(!engine.should_trigger(&activity(100, None), Some(&spawn), now, &mut prng));

    // An expired spawn no longer blocks.
    let later = now + Duration::from_secs(300);
    assert!(engine.should_trigger(&activity(100, None), Some(&spawn), later, &mut prng));

    // Neither does a caught one.
    spawn.catch(42, now);
    assert!(engine.should_trigger(&activity(100, None), Some(&spawn), now, &mut prng));
}

#[test]
fn idle_chance_scales_linearly_up_to_the_cap() {
    let engine = SpawnEngine::default();
    let now = now();

    // At the max idle time the chance caps at 30%: rolls below 3000 basis points fire.
    let last = now - Duration::from_secs(900);
    for (roll, fires) in [(2999, true), (3000, false)] {
        let mut prng = ControlledRandomSource::new(Some(1));
        prng.insert_fake_value(1, roll);
        assert_eq!(
            engine.should_trigger(&activity(10, Some(last)), None, now, &mut prng),
            fires,
        );
    }

    // Halfway to the max idle time the chance is 15%.
    let last = now - Duration::from_secs(450);
    for (roll, fires) in [(1499, true), (1500, false)] {
        let mut prng = ControlledRandomSource::new(Some(1));
        prng.insert_fake_value(1, roll);
        assert_eq!(
            engine.should_trigger(&activity(10, Some(last)), None, now, &mut prng),
            fires,
        );
    }
}

#[test]
fn idle_path_requires_idle_time_and_activity() {
    let engine = SpawnEngine::default();
    let mut prng = ControlledRandomSource::new(Some(1));
    let now = now();

    // No previous spawn: the idle path never fires.
    assert!(!engine.should_trigger(&activity(10, None), None, now, &mut prng));
    // Not enough accumulated activity.
    let last = now - Duration::from_secs(900);
    assert!(!engine.should_trigger(&activity(5, Some(last)), None, now, &mut prng));
    // Minimum idle time not yet exceeded.
    let last = now - Duration::from_secs(300);
    assert!(!engine.should_trigger(&activity(10, Some(last)), None, now, &mut prng));
    // None of the rejections consumed a roll.
    assert_eq!(prng.sequence_count(), 0);
}

#[test]
fn create_spawn_stamps_expiry_from_config() {
    let engine = SpawnEngine::default();
    let catalog = LocalCatalog::new([species(1, "Common", 255, false, false)]).unwrap();
    let mut prng = SeededRandomSource::new(Some(5));
    let now = now();

    let record = engine
        .create_spawn(&catalog, CHAT, 0, true, now, &mut prng)
        .unwrap()
        .unwrap();
    assert_eq!(record.chat, CHAT);
    assert_eq!(record.species, 1);
    assert!(record.shiny);
    assert_eq!(record.spawned_at, now);
    assert_eq!(record.expires_at, now + Duration::from_secs(120));
    assert!(record.active(now));
}

#[test]
fn create_spawn_rolls_shininess() {
    let engine = SpawnEngine::default();
    let catalog = LocalCatalog::new([species(1, "Common", 255, false, false)]).unwrap();
    let now = now();

    // Draw 1 is the rarity roll; the single-entry bucket needs no sample draw; draw 2 is the
    // shiny roll, which fires only when it lands on the first face of the die.
    for (shiny_roll, shiny) in [(0, true), (1, false)] {
        let mut prng = ControlledRandomSource::new(Some(9));
        prng.insert_fake_value(1, 0);
        prng.insert_fake_value(2, shiny_roll);
        let record = engine
            .create_spawn(&catalog, CHAT, 0, false, now, &mut prng)
            .unwrap()
            .unwrap();
        assert_eq!(record.shiny, shiny);
    }
}

#[test]
fn tracked_activity_drives_the_trigger() {
    let config = SpawnConfig {
        message_threshold: 3,
        user_cooldown: Duration::ZERO,
        chat_cooldown: Duration::ZERO,
        ..Default::default()
    };
    let engine = SpawnEngine::new(config.clone());
    let mut tracker = ActivityTracker::new(&config);
    let catalog = catalog_with_all_buckets();
    let mut prng = SeededRandomSource::new(Some(31415));
    let now = now();

    for (user, text) in [(1, "hello there"), (2, "any spawns today?"), (1, "soon surely")] {
        assert!(tracker.record_message(CHAT, user, text, now));
    }
    assert!(engine.should_trigger(tracker.activity(CHAT).unwrap(), None, now, &mut prng));

    let record = engine
        .create_spawn(&catalog, CHAT, 0, false, now, &mut prng)
        .unwrap()
        .unwrap();
    tracker.note_spawn(CHAT, now);

    // The fresh spawn and the reset counter both block an immediate follow-up.
    assert!(!engine.should_trigger(tracker.activity(CHAT).unwrap(), Some(&record), now, &mut prng));
    assert_eq!(tracker.activity(CHAT).unwrap().message_count, 0);
}
