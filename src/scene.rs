//! Renderer-facing frame snapshot
//!
//! The sim never draws. Once per frame, after update, the host shell builds
//! a `Scene` from the game state and hands it to whatever renderer it owns.

use glam::Vec2;
use serde::Serialize;

use crate::consts::POINTER_RADIUS;
use crate::settings::Settings;
use crate::sim::{FruitKind, GameState, Phase};

/// An enabled fruit, ready to draw at its sprite anchor
#[derive(Debug, Clone, Copy, Serialize)]
pub struct FruitSprite {
    pub kind: FruitKind,
    pub pos: Vec2,
}

/// One dot of the slash trail
#[derive(Debug, Clone, Copy, Serialize)]
pub struct TrailDot {
    pub pos: Vec2,
    pub radius: f32,
}

/// HUD values for the current phase's overlay text
#[derive(Debug, Clone, Copy, Serialize)]
pub struct Hud {
    pub phase: Phase,
    pub score: u32,
    pub fruits_slashed: u32,
    /// Draw the cursor in its "slashing" colour
    pub slashing: bool,
    pub pointer: Vec2,
    /// Overlay an FPS counter (preference, not sim state)
    pub show_fps: bool,
}

/// Everything a draw pass needs for one frame
#[derive(Debug, Clone, Serialize)]
pub struct Scene {
    pub fruits: Vec<FruitSprite>,
    pub trail: Vec<TrailDot>,
    pub hud: Hud,
}

/// Snapshot the enabled pool entries and HUD state
pub fn build_scene(state: &GameState, pointer: Vec2, settings: &Settings) -> Scene {
    Scene {
        fruits: state
            .enabled_fruits()
            .map(|f| FruitSprite {
                kind: f.kind,
                pos: f.pos,
            })
            .collect(),
        trail: state
            .enabled_particles()
            .map(|p| TrailDot {
                pos: p.pos,
                radius: POINTER_RADIUS,
            })
            .collect(),
        hud: Hud {
            phase: state.phase,
            score: state.score,
            fruits_slashed: state.fruits_slashed,
            slashing: state.slashing,
            pointer,
            show_fps: settings.show_fps,
        },
    }
}
