//! Simulation core of a top-down arcade shooter.
//!
//! The crate advances the player, enemies, lasers and background one fixed
//! tick at a time, resolves collisions between actor groups, spawns enemies
//! and tracks every actor from creation to removal.  Drawing, sound and raw
//! input stay outside: the core reads a [`player::TickInput`] per tick, asks a
//! [`physics::Physics`] implementation about motion and overlap, and reports
//! what happened as [`events::GameEvent`]s.

pub mod actor;
pub mod collision;
pub mod config;
pub mod enemy;
pub mod events;
pub mod parallax;
pub mod physics;
pub mod player;
pub mod projectile;
pub mod spawn;
pub mod timer;
pub mod world;

pub use actor::{Actor, ActorId, ActorKind, Lifecycle};
pub use config::{Config, ConfigError};
pub use enemy::{ChaserMode, Enemy, EnemyKind};
pub use events::GameEvent;
pub use physics::{ArcadePhysics, Physics};
pub use player::{Player, TickInput};
pub use world::{Phase, World};
