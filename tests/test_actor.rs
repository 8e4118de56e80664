use glam::Vec2;
use proptest::prelude::*;

use space_shooter::actor::{Actor, ActorKind, IdGen, Lifecycle};
use space_shooter::physics::{ArcadePhysics, Physics};

fn ship(pos: Vec2) -> Actor {
    Actor::new(1, ActorKind::GunShip, pos, [16.0, 16.0])
}

// ── explode ───────────────────────────────────────────────────────────────────

#[test]
fn explode_latches_dead_and_stops_motion() {
    let mut a = ship(Vec2::new(10.0, 20.0));
    a.vel = Vec2::new(3.0, 70.0);
    a.angle = 45.0;

    assert!(a.explode(true, 5));
    assert!(a.is_dead());
    assert_eq!(a.vel, Vec2::ZERO);
    assert_eq!(a.angle, 0.0);
    assert_eq!(a.pos, Vec2::new(10.0, 20.0));
    assert_eq!(
        a.lifecycle(),
        Lifecycle::Exploding { remaining: 5, can_destroy: true }
    );
}

#[test]
fn second_explode_is_a_no_op() {
    let mut a = ship(Vec2::ZERO);
    assert!(a.explode(true, 5));
    a.advance_destruction();
    let before = a.lifecycle();

    assert!(!a.explode(false, 99));
    assert_eq!(a.lifecycle(), before);
    assert!(a.is_dead());
}

#[test]
fn destroyable_actor_is_removed_when_sequence_ends() {
    let mut a = ship(Vec2::ZERO);
    a.explode(true, 3);
    assert_eq!(a.advance_destruction(), None);
    assert_eq!(a.advance_destruction(), None);
    assert_eq!(a.advance_destruction(), Some(Lifecycle::Removed));
    assert!(a.is_removed());
    assert!(!a.is_visible());
}

#[test]
fn non_destroyable_actor_ends_hidden() {
    let mut a = Actor::new(1, ActorKind::Player, Vec2::ZERO, [16.0, 16.0]);
    a.explode(false, 2);
    assert!(a.is_visible());
    a.advance_destruction();
    assert_eq!(a.advance_destruction(), Some(Lifecycle::Hidden));
    assert!(!a.is_removed());
    assert!(!a.is_visible());
    assert_eq!(a.advance_destruction(), None);
}

#[test]
fn alive_actor_has_no_destruction_to_advance() {
    let mut a = ship(Vec2::ZERO);
    assert_eq!(a.advance_destruction(), None);
    assert_eq!(a.lifecycle(), Lifecycle::Active);
}

#[test]
fn destroy_removes_without_dying() {
    let mut a = Actor::new(4, ActorKind::PlayerLaser, Vec2::ZERO, [6.0, 12.0]);
    a.destroy();
    assert!(a.is_removed());
    assert!(!a.is_dead());
}

proptest! {
    #[test]
    fn explode_outcome_is_fixed_by_first_call(
        flags in proptest::collection::vec(any::<bool>(), 1..20),
        ticks in 1u32..30,
    ) {
        let mut a = ship(Vec2::ZERO);
        let first = flags[0];
        prop_assert!(a.explode(first, ticks));
        for &flag in &flags[1..] {
            prop_assert!(!a.explode(flag, ticks));
        }
        prop_assert_eq!(
            a.lifecycle(),
            Lifecycle::Exploding { remaining: ticks, can_destroy: first }
        );
    }
}

// ── ids and bounds ────────────────────────────────────────────────────────────

#[test]
fn id_gen_hands_out_unique_ids() {
    let mut ids = IdGen::default();
    let a = ids.next_id();
    let b = ids.next_id();
    let c = ids.next_id();
    assert!(a < b && b < c);
}

#[test]
fn display_size_follows_scale() {
    let mut a = ship(Vec2::ZERO);
    a.scale = 1.5;
    assert_eq!(a.display_size(), Vec2::new(24.0, 24.0));
}

#[test]
fn outside_uses_own_size_as_margin() {
    let (w, h) = (480.0, 640.0);
    assert!(!ship(Vec2::new(-15.0, 100.0)).is_outside(w, h));
    assert!(ship(Vec2::new(-17.0, 100.0)).is_outside(w, h));
    assert!(!ship(Vec2::new(495.0, 100.0)).is_outside(w, h));
    assert!(ship(Vec2::new(497.0, 100.0)).is_outside(w, h));
    assert!(!ship(Vec2::new(100.0, 655.0)).is_outside(w, h));
    assert!(ship(Vec2::new(100.0, 657.0)).is_outside(w, h));
}

#[test]
fn top_edge_tolerates_four_heights() {
    let (w, h) = (480.0, 640.0);
    assert!(!ship(Vec2::new(100.0, -63.0)).is_outside(w, h));
    assert!(ship(Vec2::new(100.0, -65.0)).is_outside(w, h));
}

// ── arcade physics ────────────────────────────────────────────────────────────

#[test]
fn boxes_overlap_when_centres_are_close() {
    let physics = ArcadePhysics;
    let a = ship(Vec2::new(100.0, 100.0));
    let b = ship(Vec2::new(110.0, 108.0));
    let c = ship(Vec2::new(120.0, 100.0));
    assert!(physics.overlaps(&a, &b));
    assert!(!physics.overlaps(&a, &c));
}

#[test]
fn scale_grows_the_hit_box() {
    let physics = ArcadePhysics;
    let a = ship(Vec2::new(100.0, 100.0));
    let mut b = ship(Vec2::new(120.0, 100.0));
    assert!(!physics.overlaps(&a, &b));
    b.scale = 2.0;
    assert!(physics.overlaps(&a, &b));
}

#[test]
fn integrate_moves_by_velocity_times_dt() {
    let physics = ArcadePhysics;
    let mut a = ship(Vec2::new(10.0, 10.0));
    a.vel = Vec2::new(60.0, -120.0);
    physics.integrate(&mut a, 0.5);
    assert_eq!(a.pos, Vec2::new(40.0, -50.0));
}
