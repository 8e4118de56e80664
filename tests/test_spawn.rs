use glam::Vec2;
use proptest::prelude::*;
use rand::rngs::StdRng;
use rand::SeedableRng;

use space_shooter::actor::IdGen;
use space_shooter::enemy::{Enemy, EnemyKind};
use space_shooter::spawn::{alive_of_kind, choose_kind, SpawnDirector};
use space_shooter::Config;

fn seeded_rng() -> StdRng {
    StdRng::seed_from_u64(42)
}

#[test]
fn table_favours_gunships() {
    let cfg = Config::default();
    let mut rng = seeded_rng();
    let draws = 20_000;
    let mut counts = [0usize; 3];
    for _ in 0..draws {
        match choose_kind(&mut rng, 0, &cfg) {
            Some(EnemyKind::GunShip) => counts[0] += 1,
            Some(EnemyKind::ChaserShip) => counts[1] += 1,
            Some(EnemyKind::CarrierShip) => counts[2] += 1,
            None => panic!("nothing spawned below the cap"),
        }
    }
    let share = |n: usize| n as f64 / draws as f64;
    // 8/11, 3/11 * 6/11 and 3/11 * 5/11.
    assert!((share(counts[0]) - 0.727).abs() < 0.02);
    assert!((share(counts[1]) - 0.149).abs() < 0.02);
    assert!((share(counts[2]) - 0.124).abs() < 0.02);
}

#[test]
fn capped_chaser_slot_spawns_nothing() {
    let cfg = Config::default();
    let mut rng = seeded_rng();
    let mut skipped = 0;
    for _ in 0..5_000 {
        match choose_kind(&mut rng, cfg.chaser_cap, &cfg) {
            Some(EnemyKind::ChaserShip) => panic!("spawned a chaser at the cap"),
            None => skipped += 1,
            Some(_) => {}
        }
    }
    assert!(skipped > 0);
}

#[test]
fn population_counts_only_live_ships() {
    let cfg = Config::default();
    let mut enemies: Vec<Enemy> = (0..4)
        .map(|id| Enemy::new(EnemyKind::ChaserShip, id, Vec2::ZERO, &cfg))
        .collect();
    enemies.push(Enemy::new(EnemyKind::GunShip, 9, Vec2::ZERO, &cfg));
    enemies[0].explode(true, &cfg);
    assert_eq!(alive_of_kind(&enemies, EnemyKind::ChaserShip), 3);
    assert_eq!(alive_of_kind(&enemies, EnemyKind::GunShip), 1);
    assert_eq!(alive_of_kind(&enemies, EnemyKind::CarrierShip), 0);
}

#[test]
fn director_spawns_on_the_top_edge_once_per_period() {
    let cfg = Config::default();
    let mut director = SpawnDirector::new(&cfg);
    let mut rng = seeded_rng();
    let mut ids = IdGen::default();
    let period = cfg.ticks_for(cfg.spawn_period_ms);
    assert_eq!(director.ticks_until_spawn(), period);

    for _ in 1..period {
        assert!(director.update(&mut rng, &[], &cfg, &mut ids).is_none());
    }
    let enemy = director
        .update(&mut rng, &[], &cfg, &mut ids)
        .expect("no cap in play, the slot always spawns");
    assert_eq!(enemy.actor.pos.y, 0.0);
    assert!((0.0..=cfg.width).contains(&enemy.actor.pos.x));
    assert!((50.0..=100.0).contains(&enemy.actor.vel.y));
    assert_eq!(director.ticks_until_spawn(), period);
}

proptest! {
    #[test]
    fn never_a_sixth_live_chaser(seed in any::<u64>(), periods in 1usize..300) {
        let cfg = Config { spawn_period_ms: 1, ..Config::default() };
        let mut director = SpawnDirector::new(&cfg);
        let mut rng = StdRng::seed_from_u64(seed);
        let mut ids = IdGen::default();
        let mut enemies: Vec<Enemy> = Vec::new();
        for _ in 0..periods {
            if let Some(enemy) = director.update(&mut rng, &enemies, &cfg, &mut ids) {
                enemies.push(enemy);
            }
            prop_assert!(alive_of_kind(&enemies, EnemyKind::ChaserShip) <= cfg.chaser_cap);
        }
    }
}
