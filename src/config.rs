//! Simulation constants and their loading.
//!
//! Every tunable number lives in [`Config`].  Durations that the game thinks
//! of in wall-clock time are stored in milliseconds and converted to ticks
//! once, through [`Config::ticks_for`], so the tick rate can change without
//! touching gameplay code.

use std::fmt;
use std::path::Path;

use serde::Deserialize;

use crate::actor::ActorKind;

// ── Errors ───────────────────────────────────────────────────────────────────

#[derive(Debug)]
pub enum ConfigError {
    Io(std::io::Error),
    Parse(serde_json::Error),
    Invalid(&'static str),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(err) => write!(f, "failed to read config: {err}"),
            Self::Parse(err) => write!(f, "failed to parse config: {err}"),
            Self::Invalid(reason) => write!(f, "invalid config: {reason}"),
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(err) => Some(err),
            Self::Parse(err) => Some(err),
            Self::Invalid(_) => None,
        }
    }
}

impl From<std::io::Error> for ConfigError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err)
    }
}

impl From<serde_json::Error> for ConfigError {
    fn from(err: serde_json::Error) -> Self {
        Self::Parse(err)
    }
}

// ── Sizes ────────────────────────────────────────────────────────────────────

/// Unscaled bounding box of each actor kind, in world units.
#[derive(Clone, Copy, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct ActorSizes {
    pub player: [f32; 2],
    pub gun_ship: [f32; 2],
    pub chaser_ship: [f32; 2],
    pub carrier_ship: [f32; 2],
    pub enemy_laser: [f32; 2],
    pub player_laser: [f32; 2],
}

impl Default for ActorSizes {
    fn default() -> Self {
        Self {
            player: [16.0, 16.0],
            gun_ship: [16.0, 16.0],
            chaser_ship: [16.0, 16.0],
            carrier_ship: [24.0, 16.0],
            enemy_laser: [6.0, 12.0],
            player_laser: [6.0, 12.0],
        }
    }
}

impl ActorSizes {
    pub fn of(&self, kind: ActorKind) -> [f32; 2] {
        match kind {
            ActorKind::Player => self.player,
            ActorKind::GunShip => self.gun_ship,
            ActorKind::ChaserShip => self.chaser_ship,
            ActorKind::CarrierShip => self.carrier_ship,
            ActorKind::EnemyLaser => self.enemy_laser,
            ActorKind::PlayerLaser => self.player_laser,
        }
    }
}

// ── Config ───────────────────────────────────────────────────────────────────

#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Visible area, world units.
    pub width: f32,
    pub height: f32,
    pub tick_rate_hz: u32,
    /// Seed for the world RNG; `None` draws one from the OS.
    pub seed: Option<u64>,

    pub player_speed: f32,
    pub laser_speed: f32,
    /// Held-fire ticks between two player shots.
    pub weapon_cooldown_ticks: u32,
    pub game_over_delay_ms: u32,
    /// Length of the explosion sequence before the actor is removed or hidden.
    pub explosion_ms: u32,

    pub gun_ship_fire_ms: u32,
    pub proximity_threshold: f32,
    pub chase_speed: f32,
    /// Degrees per tick while chasing.
    pub rotation_step: f32,
    pub enemy_drift_min: u32,
    pub enemy_drift_max: u32,
    /// Enemy scale is drawn in tenths: 10..=20 gives 1.0..=2.0.
    pub enemy_scale_tenths_min: u32,
    pub enemy_scale_tenths_max: u32,

    pub spawn_period_ms: u32,
    pub chaser_cap: usize,
    pub spawn_draw_max: u32,
    pub gun_ship_threshold: u32,
    pub chaser_threshold: u32,

    pub background_layers: usize,
    pub background_height: f32,
    pub background_scroll_step: f32,

    pub sizes: ActorSizes,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            width: 480.0,
            height: 640.0,
            tick_rate_hz: 60,
            seed: None,

            player_speed: 200.0,
            laser_speed: 200.0,
            weapon_cooldown_ticks: 10,
            game_over_delay_ms: 1000,
            explosion_ms: 250,

            gun_ship_fire_ms: 1000,
            proximity_threshold: 320.0,
            chase_speed: 100.0,
            rotation_step: 5.0,
            enemy_drift_min: 50,
            enemy_drift_max: 100,
            enemy_scale_tenths_min: 10,
            enemy_scale_tenths_max: 20,

            spawn_period_ms: 1000,
            chaser_cap: 5,
            spawn_draw_max: 10,
            gun_ship_threshold: 3,
            chaser_threshold: 5,

            background_layers: 5,
            background_height: 640.0,
            background_scroll_step: 10.0,

            sizes: ActorSizes::default(),
        }
    }
}

impl Config {
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let config: Config = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path)?;
        Self::from_json_str(&text)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.tick_rate_hz == 0 {
            return Err(ConfigError::Invalid("tick_rate_hz must be positive"));
        }
        if self.width <= 0.0 || self.height <= 0.0 {
            return Err(ConfigError::Invalid("visible area must be positive"));
        }
        if self.background_height <= 0.0 {
            return Err(ConfigError::Invalid("background_height must be positive"));
        }
        if self.weapon_cooldown_ticks == 0 {
            return Err(ConfigError::Invalid("weapon_cooldown_ticks must be positive"));
        }
        if self.enemy_drift_min > self.enemy_drift_max {
            return Err(ConfigError::Invalid("enemy drift range is inverted"));
        }
        if self.enemy_scale_tenths_min > self.enemy_scale_tenths_max {
            return Err(ConfigError::Invalid("enemy scale range is inverted"));
        }
        Ok(())
    }

    /// Seconds per tick.
    pub fn dt(&self) -> f32 {
        1.0 / self.tick_rate_hz as f32
    }

    /// Converts a millisecond duration to whole ticks, never less than one.
    pub fn ticks_for(&self, ms: u32) -> u32 {
        let ticks = (ms as f64 * self.tick_rate_hz as f64 / 1000.0).round() as u32;
        ticks.max(1)
    }

    pub fn size_of(&self, kind: ActorKind) -> [f32; 2] {
        self.sizes.of(kind)
    }
}
