//! Game state and core simulation types
//!
//! Both object pools are fixed-size arrays with wrapping write cursors:
//! allocation overwrites the slot under the cursor and advances it, so if
//! more than capacity objects are logically alive the oldest silently
//! disappears. That is the intended recycling policy, not a leak.

use glam::Vec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::Serialize;

use crate::consts::*;

/// Current phase of gameplay
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Phase {
    /// Title screen, waiting for a press to begin
    Start,
    /// Active play
    Playing,
    /// Round over (a bomb was slashed); score still on display
    Lost,
}

/// Fruit kinds, ordered by rarity
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum FruitKind {
    Apple,
    Banana,
    Cherry,
    /// Slashing this ends the round
    Bomb,
}

impl FruitKind {
    /// Points awarded for slashing this kind (bombs score nothing)
    pub fn score(self) -> u32 {
        match self {
            FruitKind::Apple => APPLE_SCORE,
            FruitKind::Banana => BANANA_SCORE,
            FruitKind::Cherry => CHERRY_SCORE,
            FruitKind::Bomb => 0,
        }
    }

    pub fn is_bomb(self) -> bool {
        self == FruitKind::Bomb
    }
}

/// A fruit pool slot. Contents of a disabled slot are garbage until the
/// spawner re-arms it.
#[derive(Debug, Clone, Copy)]
pub struct Fruit {
    pub kind: FruitKind,
    /// Sprite anchor (top-left); the hit circle is centred at
    /// `pos + FRUIT_RADIUS` on both axes
    pub pos: Vec2,
    /// Per-tick velocity (y grows downward)
    pub vel: Vec2,
    pub enabled: bool,
}

impl Default for Fruit {
    fn default() -> Self {
        Self {
            kind: FruitKind::Apple,
            pos: Vec2::ZERO,
            vel: Vec2::ZERO,
            enabled: false,
        }
    }
}

/// A slash-trail particle pool slot
#[derive(Debug, Clone, Copy, Default)]
pub struct Particle {
    pub pos: Vec2,
    /// Seconds since this particle was written
    pub elapsed: f32,
    pub enabled: bool,
}

/// One-shot simulation events, drained by the host shell each frame and
/// forwarded to the audio layer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameEvent {
    FruitSpawned { kind: FruitKind },
    FruitSlashed { kind: FruitKind, points: u32 },
    BombSlashed,
}

/// Complete game state (deterministic per seed)
#[derive(Debug, Clone)]
pub struct GameState {
    /// Run seed for reproducibility
    pub seed: u64,
    /// Seeded RNG; all spawn randomness flows through here
    pub rng: Pcg32,
    pub phase: Phase,
    pub fruits: [Fruit; FRUIT_POOL_SIZE],
    pub particles: [Particle; PARTICLE_POOL_SIZE],
    /// Next fruit pool slot to overwrite (wraps)
    pub next_fruit: usize,
    /// Next particle pool slot to overwrite (wraps)
    pub next_particle: usize,
    pub score: u32,
    pub fruits_slashed: u32,
    /// Seconds since the last spawn
    pub spawn_elapsed: f32,
    /// Seconds since the round began
    pub total_elapsed: f32,
    /// Primary button currently held
    pub slashing: bool,
    /// Pending one-shot events (drained by the shell)
    pub events: Vec<GameEvent>,
}

impl GameState {
    /// Create a new game state with the given seed
    pub fn new(seed: u64) -> Self {
        Self {
            seed,
            rng: Pcg32::seed_from_u64(seed),
            phase: Phase::Start,
            fruits: [Fruit::default(); FRUIT_POOL_SIZE],
            particles: [Particle::default(); PARTICLE_POOL_SIZE],
            next_fruit: 0,
            next_particle: 0,
            score: 0,
            fruits_slashed: 0,
            spawn_elapsed: 0.0,
            total_elapsed: 0.0,
            slashing: false,
            events: Vec::new(),
        }
    }

    /// Enter active play from the title screen. Nothing is reset here;
    /// the lose transition already cleared the round state.
    pub fn begin_round(&mut self) {
        self.phase = Phase::Playing;
    }

    /// End the round (bomb slashed): disable every pool slot and clear
    /// round timers. Score and slash count stay for the lose screen.
    pub fn end_round(&mut self) {
        self.phase = Phase::Lost;
        for fruit in &mut self.fruits {
            fruit.enabled = false;
        }
        for particle in &mut self.particles {
            particle.enabled = false;
        }
        self.spawn_elapsed = 0.0;
        self.total_elapsed = 0.0;
        self.slashing = false;
    }

    /// Return to the title screen, zeroing the displayed tallies
    pub fn return_to_start(&mut self) {
        self.phase = Phase::Start;
        self.score = 0;
        self.fruits_slashed = 0;
    }

    /// Take all pending events, leaving the queue empty
    pub fn take_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }

    pub fn enabled_fruits(&self) -> impl Iterator<Item = &Fruit> {
        self.fruits.iter().filter(|f| f.enabled)
    }

    pub fn enabled_particles(&self) -> impl Iterator<Item = &Particle> {
        self.particles.iter().filter(|p| p.enabled)
    }
}
