//! Tick-counting timer used for GunShip fire, the spawn period and the
//! player's game-over delay.
//!
//! A timer never runs on its own: the owner calls [`Timer::tick`] once per
//! simulation tick and acts on the returned flag.  Cancelling only flips the
//! timer to `Stopped`, after which `tick` always reports `false`.

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TimerMode {
    Once,
    Repeat,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TimerState {
    Running,
    /// A one-shot timer that already fired.
    Finished,
    Stopped,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Timer {
    period: u32,
    elapsed: u32,
    mode: TimerMode,
    state: TimerState,
}

impl Timer {
    pub fn once(period: u32) -> Self {
        Self::new(period, TimerMode::Once)
    }

    pub fn repeating(period: u32) -> Self {
        Self::new(period, TimerMode::Repeat)
    }

    fn new(period: u32, mode: TimerMode) -> Self {
        Self {
            period: period.max(1),
            elapsed: 0,
            mode,
            state: TimerState::Running,
        }
    }

    /// Advance by one tick.  Returns `true` on the tick the period elapses.
    pub fn tick(&mut self) -> bool {
        if self.state != TimerState::Running {
            return false;
        }
        self.elapsed += 1;
        if self.elapsed < self.period {
            return false;
        }
        self.elapsed = 0;
        if self.mode == TimerMode::Once {
            self.state = TimerState::Finished;
        }
        true
    }

    /// Stop the timer for good; it will never fire again.
    pub fn cancel(&mut self) {
        self.state = TimerState::Stopped;
    }

    pub fn is_running(&self) -> bool {
        self.state == TimerState::Running
    }

    pub fn state(&self) -> TimerState {
        self.state
    }

    /// Ticks left until the next firing.
    pub fn remaining(&self) -> u32 {
        self.period - self.elapsed
    }
}
