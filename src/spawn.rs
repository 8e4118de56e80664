//! Periodic enemy creation.
//!
//! Once per spawn period the director draws from the fixed spawn table:
//!
//! | first draw (0..=10) | second draw (0..=10) | result |
//! |---|---|---|
//! | >= 3 | - | GunShip |
//! | < 3 | >= 5 | ChaserShip, unless the cap is reached |
//! | < 3 | < 5 | CarrierShip |
//!
//! A capped ChaserShip slot produces nothing; the period is simply lost.

use glam::Vec2;
use log::{debug, trace};
use rand::Rng;

use crate::actor::IdGen;
use crate::config::Config;
use crate::enemy::{Enemy, EnemyKind};
use crate::timer::Timer;

/// Pick the kind for one spawn slot.  `chaser_population` is the number of
/// live ChaserShips right now.
pub fn choose_kind(
    rng: &mut impl Rng,
    chaser_population: usize,
    config: &Config,
) -> Option<EnemyKind> {
    if rng.gen_range(0..=config.spawn_draw_max) >= config.gun_ship_threshold {
        return Some(EnemyKind::GunShip);
    }
    if rng.gen_range(0..=config.spawn_draw_max) >= config.chaser_threshold {
        return (chaser_population < config.chaser_cap).then_some(EnemyKind::ChaserShip);
    }
    Some(EnemyKind::CarrierShip)
}

/// Live (not yet exploded) enemies of one kind.
pub fn alive_of_kind(enemies: &[Enemy], kind: EnemyKind) -> usize {
    enemies
        .iter()
        .filter(|e| e.kind() == kind && !e.is_dead())
        .count()
}

#[derive(Clone, Debug)]
pub struct SpawnDirector {
    period: Timer,
}

impl SpawnDirector {
    pub fn new(config: &Config) -> Self {
        Self {
            period: Timer::repeating(config.ticks_for(config.spawn_period_ms)),
        }
    }

    pub fn ticks_until_spawn(&self) -> u32 {
        self.period.remaining()
    }

    /// Advance the spawn period and, when it elapses, maybe produce an enemy
    /// at a random x along the top edge.
    pub fn update(
        &mut self,
        rng: &mut impl Rng,
        enemies: &[Enemy],
        config: &Config,
        ids: &mut IdGen,
    ) -> Option<Enemy> {
        if !self.period.tick() {
            return None;
        }
        let chasers = alive_of_kind(enemies, EnemyKind::ChaserShip);
        let Some(kind) = choose_kind(rng, chasers, config) else {
            trace!("spawn slot skipped, {chasers} chasers alive");
            return None;
        };
        let x = rng.gen_range(0.0..=config.width);
        let enemy = Enemy::spawn(kind, ids.next_id(), Vec2::new(x, 0.0), config, rng);
        debug!(
            "spawned {:?} {} at x={:.1} scale={:.1}",
            kind, enemy.actor.id, x, enemy.actor.scale
        );
        Some(enemy)
    }
}
