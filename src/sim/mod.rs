//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Fixed timestep only
//! - Seeded RNG only
//! - Fixed-size pools with wrapping write cursors
//! - No rendering, audio, or platform dependencies

pub mod collision;
pub mod spawn;
pub mod state;
pub mod tick;

pub use collision::{point_in_circle, slash_hit};
pub use spawn::{kind_for_roll, spawn_fruit, spawn_interval};
pub use state::{Fruit, FruitKind, GameEvent, GameState, Particle, Phase};
pub use tick::{TickInput, tick};
