//! The player ship: input-driven movement, the held-fire cooldown and the
//! delay between death and game over.

use glam::Vec2;
use log::{debug, info};

use crate::actor::{Actor, ActorKind, IdGen};
use crate::config::Config;
use crate::projectile::Projectile;
use crate::timer::Timer;

/// Input sample for one tick.  Up wins over down and left wins over right
/// when both of a pair are held.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct TickInput {
    pub up: bool,
    pub down: bool,
    pub left: bool,
    pub right: bool,
    pub fire: bool,
}

/// Read-only snapshot of the player handed to enemy logic.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PlayerView {
    pub pos: Vec2,
}

#[derive(Clone, Debug)]
pub struct Player {
    pub actor: Actor,
    pub speed: f32,
    /// Fire held during the last update; not carried between ticks.
    pub is_shooting: bool,
    /// Held-fire ticks counted toward the next shot.
    shoot_tick: u32,
    shoot_delay: u32,
    game_over: Option<Timer>,
}

impl Player {
    pub fn new(actor: Actor, config: &Config) -> Self {
        debug_assert_eq!(actor.kind, ActorKind::Player);
        let shoot_delay = config.weapon_cooldown_ticks;
        Self {
            actor,
            speed: config.player_speed,
            is_shooting: false,
            shoot_tick: shoot_delay.saturating_sub(1),
            shoot_delay,
            game_over: None,
        }
    }

    pub fn is_alive(&self) -> bool {
        !self.actor.is_dead()
    }

    /// `None` once the player is dead, which makes chasers fall back to drifting.
    pub fn view(&self) -> Option<PlayerView> {
        self.is_alive().then_some(PlayerView {
            pos: self.actor.pos,
        })
    }

    pub fn shoot_tick(&self) -> u32 {
        self.shoot_tick
    }

    /// Apply one tick of input.  Returns the laser fired this tick, if any.
    pub fn update(
        &mut self,
        input: &TickInput,
        config: &Config,
        ids: &mut IdGen,
    ) -> Option<Projectile> {
        if !self.is_alive() {
            return None;
        }

        let mut vel = Vec2::ZERO;
        if input.up {
            vel.y = -self.speed;
        } else if input.down {
            vel.y = self.speed;
        }
        if input.left {
            vel.x = -self.speed;
        } else if input.right {
            vel.x = self.speed;
        }
        self.actor.vel = vel;
        self.actor.pos = self
            .actor
            .pos
            .clamp(Vec2::ZERO, Vec2::new(config.width, config.height));

        if !input.fire {
            // Releasing fire leaves the counter one tick short of the delay.
            self.shoot_tick = self.shoot_delay.saturating_sub(1);
            self.is_shooting = false;
            return None;
        }

        self.is_shooting = true;
        // Count up first; the shot goes out on the held tick after the
        // counter reaches the delay.
        if self.shoot_tick < self.shoot_delay {
            self.shoot_tick += 1;
            return None;
        }
        self.shoot_tick = 0;
        let laser = Projectile::player_laser(ids.next_id(), self.actor.pos, config);
        debug!("player fired laser {} at {}", laser.actor.id, self.actor.pos);
        Some(laser)
    }

    /// Explode without removal and arm the game-over delay.  Returns `false`
    /// when the player was already dead.
    pub fn die(&mut self, config: &Config) -> bool {
        if !self.actor.explode(false, config.ticks_for(config.explosion_ms)) {
            return false;
        }
        self.is_shooting = false;
        self.on_destroy(config);
        true
    }

    pub fn on_destroy(&mut self, config: &Config) {
        if self.game_over.is_none() {
            info!("player {} destroyed, game over pending", self.actor.id);
            self.game_over = Some(Timer::once(config.ticks_for(config.game_over_delay_ms)));
        }
    }

    pub fn game_over_pending(&self) -> bool {
        self.game_over.as_ref().is_some_and(Timer::is_running)
    }

    /// Advance the game-over delay.  `true` exactly once, on the tick it elapses.
    pub fn poll_game_over(&mut self) -> bool {
        self.game_over.as_mut().is_some_and(Timer::tick)
    }
}
