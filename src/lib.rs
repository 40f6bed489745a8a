//! Fruit Slash - an arcade fruit-slashing reflex game
//!
//! Core modules:
//! - `sim`: Deterministic simulation (spawning, physics, slashing, game state)
//! - `scene`: Renderer-facing frame snapshot (the crate does not draw)
//! - `audio`: Fire-and-forget sound cues and the music toggle
//! - `settings`: Audio/HUD preferences

pub mod audio;
pub mod scene;
pub mod settings;
pub mod sim;

pub use audio::{AudioManager, SoundEffect};
pub use settings::Settings;

/// Game configuration constants
pub mod consts {
    /// Fixed simulation timestep (60 Hz, matching the original cadence)
    pub const SIM_DT: f32 = 1.0 / 60.0;
    /// Maximum substeps per frame to prevent spiral of death
    pub const MAX_SUBSTEPS: u32 = 8;

    /// Playfield dimensions
    pub const SCREEN_WIDTH: f32 = 960.0;
    pub const SCREEN_HEIGHT: f32 = 540.0;

    /// Fixed pool capacities
    pub const FRUIT_POOL_SIZE: usize = 48;
    pub const PARTICLE_POOL_SIZE: usize = 16;

    /// Slash hit circle radius, shared by every fruit kind regardless of
    /// sprite size
    pub const FRUIT_RADIUS: f32 = 32.0;
    /// Pointer cursor radius (render hint only)
    pub const POINTER_RADIUS: f32 = 8.0;

    /// Scores per slashed kind (each rarer kind worth triple the last)
    pub const APPLE_SCORE: u32 = 1;
    pub const BANANA_SCORE: u32 = APPLE_SCORE * 3;
    pub const CHERRY_SCORE: u32 = BANANA_SCORE * 3;

    /// Cumulative spawn-roll ceilings over a uniform 1..=100 draw
    pub const APPLE_SPAWN_CEILING: u32 = 50;
    pub const BANANA_SPAWN_CEILING: u32 = 75;
    pub const CHERRY_SPAWN_CEILING: u32 = 85;
    pub const BOMB_SPAWN_CEILING: u32 = 100;

    /// Launch velocity ranges (per-tick units; y grows downward)
    pub const MIN_LAUNCH_STRAFE: f32 = -5.0;
    pub const MAX_LAUNCH_STRAFE: f32 = 5.0;
    pub const MIN_LAUNCH_THRUST: f32 = 5.0;
    pub const MAX_LAUNCH_THRUST: f32 = 20.0;

    /// Spawn interval ramp: starts at 1 s, tightens linearly over 30 s of
    /// play down to a 0.1 s floor
    pub const START_SPAWN_INTERVAL: f32 = 1.0;
    pub const FLOOR_SPAWN_INTERVAL: f32 = 0.1;
    pub const SPAWN_RAMP_SECS: f32 = 30.0;

    /// Downward acceleration applied to fruit velocity each tick
    pub const GRAVITY_PER_TICK: f32 = 10.0 / 60.0;

    /// Trail particle lifetime in seconds
    pub const PARTICLE_LIFETIME: f32 = 0.1;
}
