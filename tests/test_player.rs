use glam::Vec2;
use proptest::prelude::*;

use space_shooter::actor::{Actor, ActorKind, IdGen};
use space_shooter::player::{Player, TickInput};
use space_shooter::Config;

fn make_player(config: &Config) -> Player {
    let actor = Actor::new(1, ActorKind::Player, Vec2::new(240.0, 320.0), [16.0, 16.0]);
    Player::new(actor, config)
}

fn fire() -> TickInput {
    TickInput { fire: true, ..TickInput::default() }
}

// ── movement ──────────────────────────────────────────────────────────────────

#[test]
fn no_input_means_no_velocity() {
    let cfg = Config::default();
    let mut p = make_player(&cfg);
    p.actor.vel = Vec2::new(50.0, 50.0);
    p.update(&TickInput::default(), &cfg, &mut IdGen::default());
    assert_eq!(p.actor.vel, Vec2::ZERO);
}

#[test]
fn both_axes_can_be_set_in_one_tick() {
    let cfg = Config::default();
    let mut p = make_player(&cfg);
    let input = TickInput { up: true, left: true, ..TickInput::default() };
    p.update(&input, &cfg, &mut IdGen::default());
    assert_eq!(p.actor.vel, Vec2::new(-200.0, -200.0));
}

#[test]
fn up_wins_over_down_and_left_over_right() {
    let cfg = Config::default();
    let mut p = make_player(&cfg);
    let input = TickInput {
        up: true,
        down: true,
        left: true,
        right: true,
        fire: false,
    };
    p.update(&input, &cfg, &mut IdGen::default());
    assert_eq!(p.actor.vel, Vec2::new(-200.0, -200.0));

    let input = TickInput { down: true, right: true, ..TickInput::default() };
    p.update(&input, &cfg, &mut IdGen::default());
    assert_eq!(p.actor.vel, Vec2::new(200.0, 200.0));
}

#[test]
fn position_is_clamped_to_the_screen() {
    let cfg = Config::default();
    let mut p = make_player(&cfg);
    p.actor.pos = Vec2::new(-30.0, 700.0);
    p.update(&TickInput::default(), &cfg, &mut IdGen::default());
    assert_eq!(p.actor.pos, Vec2::new(0.0, 640.0));

    p.actor.pos = Vec2::new(999.0, -1.0);
    p.update(&TickInput::default(), &cfg, &mut IdGen::default());
    assert_eq!(p.actor.pos, Vec2::new(480.0, 0.0));
}

// ── weapon ────────────────────────────────────────────────────────────────────

#[test]
fn first_held_tick_counts_up_then_second_fires() {
    let cfg = Config::default();
    let mut p = make_player(&cfg);
    let mut ids = IdGen::default();
    assert!(p.update(&fire(), &cfg, &mut ids).is_none());
    assert_eq!(p.shoot_tick(), 10);
    assert!(p.is_shooting);

    let laser = p.update(&fire(), &cfg, &mut ids).expect("laser");
    assert_eq!(laser.actor.kind, ActorKind::PlayerLaser);
    assert_eq!(laser.actor.pos, p.actor.pos);
    assert_eq!(laser.actor.vel, Vec2::new(0.0, -200.0));
    assert_eq!(p.shoot_tick(), 0);
}

#[test]
fn held_fire_shoots_every_eleven_ticks() {
    let cfg = Config::default();
    let mut p = make_player(&cfg);
    let mut ids = IdGen::default();
    // 1-based held ticks on which a laser leaves the ship.
    let shots: Vec<usize> = (1..=25)
        .filter(|_| p.update(&fire(), &cfg, &mut ids).is_some())
        .collect();
    assert_eq!(shots, [2, 13, 24]);
}

#[test]
fn release_parks_the_counter_one_short() {
    let cfg = Config::default();
    let mut p = make_player(&cfg);
    let mut ids = IdGen::default();
    p.update(&fire(), &cfg, &mut ids);
    p.update(&fire(), &cfg, &mut ids);
    p.update(&fire(), &cfg, &mut ids);
    assert_eq!(p.shoot_tick(), 1);

    assert!(p.update(&TickInput::default(), &cfg, &mut ids).is_none());
    assert_eq!(p.shoot_tick(), 9);
    assert!(!p.is_shooting);

    assert!(p.update(&fire(), &cfg, &mut ids).is_none());
    assert!(p.update(&fire(), &cfg, &mut ids).is_some());
}

proptest! {
    #[test]
    fn shots_follow_one_count_up_tick_then_every_eleven(
        runs in proptest::collection::vec((any::<bool>(), 1usize..40), 1..12),
    ) {
        let cfg = Config::default();
        let mut p = make_player(&cfg);
        let mut ids = IdGen::default();
        // Ticks since fire was last pressed; adjacent held runs join up.
        let mut held_for = 0usize;
        for (held, len) in runs {
            let input = TickInput { fire: held, ..TickInput::default() };
            for _ in 0..len {
                let shot = p.update(&input, &cfg, &mut ids).is_some();
                let due = held_for >= 1 && (held_for - 1) % 11 == 0;
                prop_assert_eq!(shot, held && due);
                held_for = if held { held_for + 1 } else { 0 };
            }
        }
    }
}

// ── death ─────────────────────────────────────────────────────────────────────

#[test]
fn dead_player_ignores_input() {
    let cfg = Config::default();
    let mut p = make_player(&cfg);
    assert!(p.die(&cfg));
    let input = TickInput { up: true, fire: true, ..TickInput::default() };
    assert!(p.update(&input, &cfg, &mut IdGen::default()).is_none());
    assert_eq!(p.actor.vel, Vec2::ZERO);
    assert!(p.view().is_none());
}

#[test]
fn game_over_fires_once_after_the_delay() {
    let cfg = Config::default();
    let mut p = make_player(&cfg);
    assert!(!p.poll_game_over());
    assert!(p.die(&cfg));
    assert!(!p.die(&cfg));
    assert!(p.game_over_pending());

    let delay = cfg.ticks_for(cfg.game_over_delay_ms) as usize;
    let fired: Vec<usize> = (1..=delay * 3).filter(|_| p.poll_game_over()).collect();
    assert_eq!(fired, [delay]);
    assert!(!p.game_over_pending());
}
