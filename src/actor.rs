//! The shared shape of every simulated object.
//!
//! Behaviour lives in the owners (`Player`, `Enemy`, `Projectile`); this
//! module only knows about identity, motion, bounds and the one-way trip
//! from alive to exploded to removed or hidden.

use glam::Vec2;

pub type ActorId = u64;

/// Hands out unique actor ids for one world.
#[derive(Clone, Debug, Default)]
pub struct IdGen {
    last: ActorId,
}

impl IdGen {
    pub fn next_id(&mut self) -> ActorId {
        self.last += 1;
        self.last
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ActorKind {
    Player,
    GunShip,
    ChaserShip,
    CarrierShip,
    EnemyLaser,
    PlayerLaser,
}

impl ActorKind {
    pub fn is_enemy(self) -> bool {
        matches!(self, Self::GunShip | Self::ChaserShip | Self::CarrierShip)
    }

    pub fn is_projectile(self) -> bool {
        matches!(self, Self::EnemyLaser | Self::PlayerLaser)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Lifecycle {
    Active,
    /// Explosion playing; when `remaining` runs out the actor is removed
    /// (`can_destroy`) or hidden.
    Exploding { remaining: u32, can_destroy: bool },
    Hidden,
    /// Marked for the end-of-tick sweep.
    Removed,
}

#[derive(Clone, Debug)]
pub struct Actor {
    pub id: ActorId,
    pub kind: ActorKind,
    pub pos: Vec2,
    pub vel: Vec2,
    /// Unscaled bounding box.
    pub size: Vec2,
    pub scale: f32,
    /// Degrees, presentation only.
    pub angle: f32,
    is_dead: bool,
    lifecycle: Lifecycle,
}

impl Actor {
    pub fn new(id: ActorId, kind: ActorKind, pos: Vec2, size: [f32; 2]) -> Self {
        Self {
            id,
            kind,
            pos,
            vel: Vec2::ZERO,
            size: Vec2::from(size),
            scale: 1.0,
            angle: 0.0,
            is_dead: false,
            lifecycle: Lifecycle::Active,
        }
    }

    pub fn is_dead(&self) -> bool {
        self.is_dead
    }

    pub fn lifecycle(&self) -> Lifecycle {
        self.lifecycle
    }

    pub fn is_removed(&self) -> bool {
        self.lifecycle == Lifecycle::Removed
    }

    pub fn is_visible(&self) -> bool {
        matches!(
            self.lifecycle,
            Lifecycle::Active | Lifecycle::Exploding { .. }
        )
    }

    /// Bounding box after scaling.
    pub fn display_size(&self) -> Vec2 {
        self.size * self.scale
    }

    /// Latch the actor as dead and start its explosion.
    ///
    /// Returns `false` without touching anything when the actor is already
    /// dead, so overlapping hits in one tick explode it once.  Owned timers
    /// are the owner's to cancel.
    pub fn explode(&mut self, can_destroy: bool, sequence_ticks: u32) -> bool {
        if self.is_dead {
            return false;
        }
        self.is_dead = true;
        self.vel = Vec2::ZERO;
        self.angle = 0.0;
        if self.lifecycle == Lifecycle::Active {
            self.lifecycle = Lifecycle::Exploding {
                remaining: sequence_ticks,
                can_destroy,
            };
        }
        true
    }

    /// Step the explosion by one tick.  Returns the new lifecycle on the
    /// tick the sequence completes.
    pub fn advance_destruction(&mut self) -> Option<Lifecycle> {
        let Lifecycle::Exploding {
            remaining,
            can_destroy,
        } = self.lifecycle
        else {
            return None;
        };
        if remaining > 1 {
            self.lifecycle = Lifecycle::Exploding {
                remaining: remaining - 1,
                can_destroy,
            };
            return None;
        }
        self.lifecycle = if can_destroy {
            Lifecycle::Removed
        } else {
            Lifecycle::Hidden
        };
        Some(self.lifecycle)
    }

    /// Remove without an explosion (spent lasers, culled actors).
    pub fn destroy(&mut self) {
        self.lifecycle = Lifecycle::Removed;
    }

    pub fn distance_to(&self, point: Vec2) -> f32 {
        self.pos.distance(point)
    }

    /// True once the actor has left the visible area by more than its own
    /// size.  The top edge tolerates four heights so freshly spawned ships
    /// are never culled on their way in.
    pub fn is_outside(&self, width: f32, height: f32) -> bool {
        let size = self.display_size();
        self.pos.x < -size.x
            || self.pos.x > width + size.x
            || self.pos.y < -size.y * 4.0
            || self.pos.y > height + size.y
    }
}
