//! Fire-and-forget notifications for presentation collaborators (audio,
//! animation, scene switching).  The world buffers them during a tick and
//! the caller drains them afterwards.

use glam::Vec2;

use crate::actor::{ActorId, ActorKind};
use crate::enemy::ChaserMode;

#[derive(Clone, Debug, PartialEq)]
pub enum GameEvent {
    Spawned { id: ActorId, kind: ActorKind, pos: Vec2 },
    /// A laser left its owner; the front-end plays the shot cue.
    Fired { id: ActorId, kind: ActorKind },
    Exploded { id: ActorId, kind: ActorKind, pos: Vec2 },
    /// The actor left the world for good.
    Destroyed { id: ActorId, kind: ActorKind },
    /// The player's explosion finished; it stays in the world, invisible.
    Hidden { id: ActorId },
    StateChanged { id: ActorId, mode: ChaserMode },
    GameOver,
}
