use space_shooter::timer::{Timer, TimerState};

#[test]
fn repeating_timer_fires_every_period() {
    let mut t = Timer::repeating(4);
    let fired: Vec<bool> = (0..12).map(|_| t.tick()).collect();
    assert_eq!(
        fired,
        [false, false, false, true, false, false, false, true, false, false, false, true]
    );
    assert!(t.is_running());
}

#[test]
fn one_shot_fires_once_then_finishes() {
    let mut t = Timer::once(3);
    assert!(!t.tick());
    assert!(!t.tick());
    assert!(t.tick());
    assert_eq!(t.state(), TimerState::Finished);
    assert!((0..100).all(|_| !t.tick()));
}

#[test]
fn cancelled_timer_never_fires() {
    let mut t = Timer::repeating(2);
    assert!(!t.tick());
    t.cancel();
    assert_eq!(t.state(), TimerState::Stopped);
    assert!((0..10).all(|_| !t.tick()));
}

#[test]
fn remaining_counts_down_to_the_next_firing() {
    let mut t = Timer::repeating(3);
    assert_eq!(t.remaining(), 3);
    t.tick();
    assert_eq!(t.remaining(), 2);
    t.tick();
    assert_eq!(t.remaining(), 1);
    assert!(t.tick());
    assert_eq!(t.remaining(), 3);
}

#[test]
fn zero_period_is_treated_as_one_tick() {
    let mut t = Timer::repeating(0);
    assert_eq!(t.remaining(), 1);
    assert!(t.tick());
    assert!(t.tick());
}
