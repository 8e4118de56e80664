//! The simulation loop.
//!
//! [`World`] owns every actor and advances them in a fixed order:
//!
//! 1. step running explosions
//! 2. integrate positions of live actors
//! 3. player update (movement, clamping, fire)
//! 4. enemy updates; lasers they fire join the world after the pass
//! 5. background scroll
//! 6. collision resolution on the current positions
//! 7. spawn director
//! 8. cull actors that left the visible area
//! 9. sweep everything marked removed
//! 10. game-over delay, counted from the tick after the player died
//!
//! Removal is always mark-then-sweep, so no collection changes while it is
//! being walked.

use glam::Vec2;
use log::{debug, info, trace};
use rand::SeedableRng;
use rand_pcg::Pcg32;

use crate::actor::{Actor, ActorId, ActorKind, IdGen, Lifecycle};
use crate::collision::{self, CollisionReport};
use crate::config::{Config, ConfigError};
use crate::enemy::{Enemy, EnemyContext, EnemyKind};
use crate::events::GameEvent;
use crate::parallax::Background;
use crate::physics::{ArcadePhysics, Physics};
use crate::player::{Player, TickInput};
use crate::projectile::Projectile;
use crate::spawn::SpawnDirector;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    Playing,
    GameOver,
}

pub struct World<P: Physics = ArcadePhysics> {
    pub config: Config,
    pub physics: P,
    pub rng: Pcg32,
    pub ids: IdGen,
    pub tick_count: u64,
    pub phase: Phase,
    pub player: Player,
    pub enemies: Vec<Enemy>,
    pub enemy_lasers: Vec<Projectile>,
    pub player_lasers: Vec<Projectile>,
    pub background: Background,
    pub spawner: SpawnDirector,
    events: Vec<GameEvent>,
}

impl World<ArcadePhysics> {
    pub fn new(config: Config) -> Result<Self, ConfigError> {
        Self::with_physics(config, ArcadePhysics)
    }
}

impl<P: Physics> World<P> {
    /// Build a world with the player centred on screen.  Fails when the
    /// config would make spawning or scrolling meaningless.
    pub fn with_physics(config: Config, physics: P) -> Result<Self, ConfigError> {
        config.validate()?;
        let mut rng = match config.seed {
            Some(seed) => Pcg32::seed_from_u64(seed),
            None => Pcg32::from_entropy(),
        };
        let mut ids = IdGen::default();
        let centre = Vec2::new(config.width * 0.5, config.height * 0.5);
        let actor = Actor::new(
            ids.next_id(),
            ActorKind::Player,
            centre,
            config.size_of(ActorKind::Player),
        );
        let player = Player::new(actor, &config);
        let background = Background::new(
            config.background_layers,
            config.background_scroll_step,
            config.background_height,
            &mut rng,
        );
        let spawner = SpawnDirector::new(&config);
        info!(
            "world {}x{} at {} Hz, seed {:?}",
            config.width, config.height, config.tick_rate_hz, config.seed
        );

        Ok(Self {
            config,
            physics,
            rng,
            ids,
            tick_count: 0,
            phase: Phase::Playing,
            player,
            enemies: Vec::new(),
            enemy_lasers: Vec::new(),
            player_lasers: Vec::new(),
            background,
            spawner,
            events: Vec::new(),
        })
    }

    pub fn is_game_over(&self) -> bool {
        self.phase == Phase::GameOver
    }

    /// Take every event buffered since the last drain.
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }

    pub fn enemies_of_kind(&self, kind: EnemyKind) -> impl Iterator<Item = &Enemy> + '_ {
        self.enemies.iter().filter(move |e| e.kind() == kind)
    }

    pub fn enemy(&self, id: ActorId) -> Option<&Enemy> {
        self.enemies.iter().find(|e| e.actor.id == id)
    }

    pub fn add_enemy(&mut self, enemy: Enemy) {
        push_spawned(&mut self.events, &enemy.actor);
        self.enemies.push(enemy);
    }

    /// Place an enemy at rest with unit scale.  Used for scripted waves.
    pub fn place_enemy(&mut self, kind: EnemyKind, pos: Vec2) -> ActorId {
        let enemy = Enemy::new(kind, self.ids.next_id(), pos, &self.config);
        let id = enemy.actor.id;
        self.add_enemy(enemy);
        id
    }

    pub fn fire_enemy_laser(&mut self, pos: Vec2, scale: f32) -> ActorId {
        let laser = Projectile::enemy_laser(self.ids.next_id(), pos, scale, &self.config);
        let id = laser.actor.id;
        push_spawned(&mut self.events, &laser.actor);
        self.enemy_lasers.push(laser);
        id
    }

    /// Advance the simulation by one tick.  Does nothing after game over.
    pub fn tick(&mut self, input: &TickInput) -> CollisionReport {
        if self.phase == Phase::GameOver {
            return CollisionReport::default();
        }
        self.tick_count += 1;
        let dt = self.config.dt();
        // A delay armed by this tick's collisions starts counting next tick.
        let game_over_armed = self.player.game_over_pending();

        self.advance_destruction();
        self.integrate(dt);

        if let Some(laser) = self.player.update(input, &self.config, &mut self.ids) {
            push_spawned(&mut self.events, &laser.actor);
            self.events.push(GameEvent::Fired {
                id: laser.actor.id,
                kind: laser.actor.kind,
            });
            self.player_lasers.push(laser);
        }

        let mut fired = Vec::new();
        let mut ctx = EnemyContext {
            player: self.player.view(),
            config: &self.config,
            ids: &mut self.ids,
            fired: &mut fired,
            events: &mut self.events,
        };
        for enemy in &mut self.enemies {
            enemy.update(&mut ctx);
        }
        self.enemy_lasers.append(&mut fired);

        self.background.update(dt);

        let report = collision::resolve(
            &self.physics,
            &mut self.player,
            &mut self.enemies,
            &mut self.enemy_lasers,
            &mut self.player_lasers,
            &self.config,
            &mut self.events,
        );

        if let Some(enemy) =
            self.spawner
                .update(&mut self.rng, &self.enemies, &self.config, &mut self.ids)
        {
            self.add_enemy(enemy);
        }

        self.cull();
        self.sweep();

        if game_over_armed && self.player.poll_game_over() {
            info!("game over after {} ticks", self.tick_count);
            self.phase = Phase::GameOver;
            self.events.push(GameEvent::GameOver);
        }

        trace!(
            "tick {}: {} enemies, {} enemy lasers, {} player lasers",
            self.tick_count,
            self.enemies.len(),
            self.enemy_lasers.len(),
            self.player_lasers.len()
        );
        report
    }

    fn advance_destruction(&mut self) {
        let actors = std::iter::once(&mut self.player.actor)
            .chain(self.enemies.iter_mut().map(|e| &mut e.actor))
            .chain(self.enemy_lasers.iter_mut().map(|l| &mut l.actor))
            .chain(self.player_lasers.iter_mut().map(|l| &mut l.actor));
        for actor in actors {
            if actor.advance_destruction() == Some(Lifecycle::Hidden) {
                self.events.push(GameEvent::Hidden { id: actor.id });
            }
        }
    }

    fn integrate(&mut self, dt: f32) {
        let actors = std::iter::once(&mut self.player.actor)
            .chain(self.enemies.iter_mut().map(|e| &mut e.actor))
            .chain(self.enemy_lasers.iter_mut().map(|l| &mut l.actor))
            .chain(self.player_lasers.iter_mut().map(|l| &mut l.actor));
        for actor in actors {
            if !actor.is_dead() && !actor.is_removed() {
                self.physics.integrate(actor, dt);
            }
        }
    }

    /// Mark everything that drifted out of view.  The player is clamped
    /// instead and never culled.
    fn cull(&mut self) {
        let (width, height) = (self.config.width, self.config.height);
        for enemy in &mut self.enemies {
            if !enemy.actor.is_removed() && enemy.actor.is_outside(width, height) {
                enemy.on_destroy();
                enemy.actor.destroy();
                trace!("culled {:?} {}", enemy.kind(), enemy.actor.id);
            }
        }
        let lasers = self
            .enemy_lasers
            .iter_mut()
            .chain(self.player_lasers.iter_mut());
        for laser in lasers {
            if !laser.actor.is_removed() && laser.actor.is_outside(width, height) {
                laser.actor.destroy();
            }
        }
    }

    fn sweep(&mut self) {
        let events = &mut self.events;
        self.enemies.retain(|e| keep(&e.actor, events));
        self.enemy_lasers.retain(|l| keep(&l.actor, events));
        self.player_lasers.retain(|l| keep(&l.actor, events));
    }
}

fn keep(actor: &Actor, events: &mut Vec<GameEvent>) -> bool {
    if !actor.is_removed() {
        return true;
    }
    if actor.kind.is_enemy() {
        debug!("removed {:?} {}", actor.kind, actor.id);
    }
    events.push(GameEvent::Destroyed {
        id: actor.id,
        kind: actor.kind,
    });
    false
}

fn push_spawned(events: &mut Vec<GameEvent>, actor: &Actor) {
    events.push(GameEvent::Spawned {
        id: actor.id,
        kind: actor.kind,
        pos: actor.pos,
    });
}
