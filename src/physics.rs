//! Seam to the physics collaborator.
//!
//! The simulation never decides on its own whether two shapes touch or how
//! far something moves in a tick; it asks a [`Physics`] implementation.
//! [`ArcadePhysics`] is the stock one: centred axis-aligned boxes and plain
//! `pos += vel * dt` integration.

use crate::actor::Actor;

pub trait Physics {
    /// Overlap oracle.
    fn overlaps(&self, a: &Actor, b: &Actor) -> bool;

    /// Position integrator.
    fn integrate(&self, actor: &mut Actor, dt: f32) {
        actor.pos += actor.vel * dt;
    }
}

#[derive(Clone, Copy, Debug, Default)]
pub struct ArcadePhysics;

impl Physics for ArcadePhysics {
    fn overlaps(&self, a: &Actor, b: &Actor) -> bool {
        let half_a = a.display_size() * 0.5;
        let half_b = b.display_size() * 0.5;
        let gap = (a.pos - b.pos).abs();
        gap.x < half_a.x + half_b.x && gap.y < half_a.y + half_b.y
    }
}
