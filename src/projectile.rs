//! Lasers.  A projectile is an actor with a fixed vertical velocity and no
//! behaviour of its own; the integrator moves it and culling or a hit ends it.

use glam::Vec2;

use crate::actor::{Actor, ActorId, ActorKind};
use crate::config::Config;

#[derive(Clone, Debug)]
pub struct Projectile {
    pub actor: Actor,
}

impl Projectile {
    /// Travels up the screen.
    pub fn player_laser(id: ActorId, pos: Vec2, config: &Config) -> Self {
        let size = config.size_of(ActorKind::PlayerLaser);
        let mut actor = Actor::new(id, ActorKind::PlayerLaser, pos, size);
        actor.vel = Vec2::new(0.0, -config.laser_speed);
        Self { actor }
    }

    /// Travels down the screen, scaled like the ship that fired it.
    pub fn enemy_laser(id: ActorId, pos: Vec2, scale: f32, config: &Config) -> Self {
        let size = config.size_of(ActorKind::EnemyLaser);
        let mut actor = Actor::new(id, ActorKind::EnemyLaser, pos, size);
        actor.vel = Vec2::new(0.0, config.laser_speed);
        actor.scale = scale;
        Self { actor }
    }
}
