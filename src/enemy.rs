//! Enemy ships.
//!
//! All three kinds share one [`Enemy`] shape: an [`Actor`] plus a tagged
//! [`EnemyBehavior`] carrying the per-kind state.
//!
//! * `GunShip` drifts and fires an enemy laser every fire period.
//! * `ChaserShip` drifts until the player comes within the proximity
//!   threshold, then homes in on the player for the rest of its life.
//! * `CarrierShip` only drifts.

use glam::Vec2;
use log::{debug, trace};
use rand::Rng;

use crate::actor::{Actor, ActorId, ActorKind, IdGen};
use crate::config::Config;
use crate::events::GameEvent;
use crate::player::PlayerView;
use crate::projectile::Projectile;
use crate::timer::Timer;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum EnemyKind {
    GunShip,
    ChaserShip,
    CarrierShip,
}

impl From<EnemyKind> for ActorKind {
    fn from(kind: EnemyKind) -> Self {
        match kind {
            EnemyKind::GunShip => ActorKind::GunShip,
            EnemyKind::ChaserShip => ActorKind::ChaserShip,
            EnemyKind::CarrierShip => ActorKind::CarrierShip,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ChaserMode {
    Drifting,
    /// Terminal: a chaser never goes back to drifting.
    Chasing,
}

#[derive(Clone, Debug, PartialEq)]
pub enum EnemyBehavior {
    GunShip { fire: Timer },
    ChaserShip { mode: ChaserMode },
    CarrierShip,
}

/// What an enemy may see and touch during its update.
pub struct EnemyContext<'a> {
    pub player: Option<PlayerView>,
    pub config: &'a Config,
    pub ids: &'a mut IdGen,
    /// Lasers fired this tick; the world adds them after the enemy pass.
    pub fired: &'a mut Vec<Projectile>,
    pub events: &'a mut Vec<GameEvent>,
}

#[derive(Clone, Debug)]
pub struct Enemy {
    pub actor: Actor,
    pub behavior: EnemyBehavior,
}

impl Enemy {
    /// Build an enemy at rest with unit scale.
    pub fn new(kind: EnemyKind, id: ActorId, pos: Vec2, config: &Config) -> Self {
        let behavior = match kind {
            EnemyKind::GunShip => EnemyBehavior::GunShip {
                fire: Timer::repeating(config.ticks_for(config.gun_ship_fire_ms)),
            },
            EnemyKind::ChaserShip => EnemyBehavior::ChaserShip {
                mode: ChaserMode::Drifting,
            },
            EnemyKind::CarrierShip => EnemyBehavior::CarrierShip,
        };
        let kind = ActorKind::from(kind);
        Self {
            actor: Actor::new(id, kind, pos, config.size_of(kind)),
            behavior,
        }
    }

    /// Build an enemy with a random downward drift and display scale.
    pub fn spawn(
        kind: EnemyKind,
        id: ActorId,
        pos: Vec2,
        config: &Config,
        rng: &mut impl Rng,
    ) -> Self {
        let mut enemy = Self::new(kind, id, pos, config);
        enemy.actor.vel.y = rng.gen_range(config.enemy_drift_min..=config.enemy_drift_max) as f32;
        let tenths = rng.gen_range(config.enemy_scale_tenths_min..=config.enemy_scale_tenths_max);
        enemy.actor.scale = tenths as f32 * 0.1;
        enemy
    }

    pub fn kind(&self) -> EnemyKind {
        match self.behavior {
            EnemyBehavior::GunShip { .. } => EnemyKind::GunShip,
            EnemyBehavior::ChaserShip { .. } => EnemyKind::ChaserShip,
            EnemyBehavior::CarrierShip => EnemyKind::CarrierShip,
        }
    }

    pub fn is_dead(&self) -> bool {
        self.actor.is_dead()
    }

    pub fn mode(&self) -> Option<ChaserMode> {
        match self.behavior {
            EnemyBehavior::ChaserShip { mode } => Some(mode),
            _ => None,
        }
    }

    pub fn fire_timer(&self) -> Option<&Timer> {
        match &self.behavior {
            EnemyBehavior::GunShip { fire } => Some(fire),
            _ => None,
        }
    }

    pub fn update(&mut self, ctx: &mut EnemyContext<'_>) {
        let Self { actor, behavior } = self;
        if actor.is_dead() {
            return;
        }
        match behavior {
            EnemyBehavior::GunShip { fire } => {
                if !fire.tick() {
                    return;
                }
                let laser =
                    Projectile::enemy_laser(ctx.ids.next_id(), actor.pos, actor.scale, ctx.config);
                trace!("gunship {} fired laser {}", actor.id, laser.actor.id);
                ctx.events.push(GameEvent::Spawned {
                    id: laser.actor.id,
                    kind: laser.actor.kind,
                    pos: laser.actor.pos,
                });
                ctx.fired.push(laser);
            }
            EnemyBehavior::ChaserShip { mode } => {
                let Some(player) = ctx.player else {
                    return;
                };
                if *mode == ChaserMode::Drifting
                    && actor.distance_to(player.pos) < ctx.config.proximity_threshold
                {
                    *mode = ChaserMode::Chasing;
                    debug!("chaser {} locked on", actor.id);
                    ctx.events.push(GameEvent::StateChanged {
                        id: actor.id,
                        mode: *mode,
                    });
                }
                if *mode == ChaserMode::Chasing {
                    chase(actor, player.pos, ctx.config);
                }
            }
            EnemyBehavior::CarrierShip => {}
        }
    }

    /// Cancel owned timers.  Runs before removal so nothing fires from a
    /// ship that is gone.
    pub fn on_destroy(&mut self) {
        if let EnemyBehavior::GunShip { fire } = &mut self.behavior {
            fire.cancel();
        }
    }

    pub fn explode(&mut self, can_destroy: bool, config: &Config) -> bool {
        if !self.actor.explode(can_destroy, config.ticks_for(config.explosion_ms)) {
            return false;
        }
        self.on_destroy();
        true
    }
}

/// Spin toward the player's side and head straight at its current position.
fn chase(actor: &mut Actor, target: Vec2, config: &Config) {
    if actor.pos.x < target.x {
        actor.angle -= config.rotation_step;
    } else {
        actor.angle += config.rotation_step;
    }
    let delta = target - actor.pos;
    let heading = delta.y.atan2(delta.x);
    actor.vel = Vec2::new(heading.cos(), heading.sin()) * config.chase_speed;
}
