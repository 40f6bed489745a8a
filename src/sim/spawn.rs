//! Fruit spawner
//!
//! Spawns are paced by an interval that tightens linearly with round time,
//! and kinds are picked by cumulative weight thresholds over a uniform roll.

use glam::Vec2;
use rand::Rng;

use super::state::{FruitKind, GameEvent, GameState};
use crate::consts::*;

/// Seconds that must accumulate before the next spawn. Starts at
/// `START_SPAWN_INTERVAL` and shrinks linearly over `SPAWN_RAMP_SECS` of
/// play, floored at `FLOOR_SPAWN_INTERVAL`.
pub fn spawn_interval(total_elapsed: f32) -> f32 {
    (START_SPAWN_INTERVAL - total_elapsed / SPAWN_RAMP_SECS).max(FLOOR_SPAWN_INTERVAL)
}

/// Map a uniform 1..=100 roll to a kind via the cumulative ceilings
/// (50% apple, 25% banana, 10% cherry, 15% bomb)
pub fn kind_for_roll(roll: u32) -> FruitKind {
    if roll <= APPLE_SPAWN_CEILING {
        FruitKind::Apple
    } else if roll <= BANANA_SPAWN_CEILING {
        FruitKind::Banana
    } else if roll <= CHERRY_SPAWN_CEILING {
        FruitKind::Cherry
    } else {
        FruitKind::Bomb
    }
}

/// Arm the fruit slot under the write cursor and advance the cursor.
///
/// Fruits launch from the bottom edge, somewhere in the middle half of the
/// screen, with an upward thrust and a little sideways drift.
pub fn spawn_fruit(state: &mut GameState) {
    let roll = state.rng.random_range(1..=100);
    let kind = kind_for_roll(roll);

    let x = state
        .rng
        .random_range(SCREEN_WIDTH * 0.25..=SCREEN_WIDTH * 0.75);
    let strafe = state.rng.random_range(MIN_LAUNCH_STRAFE..=MAX_LAUNCH_STRAFE);
    let thrust = state.rng.random_range(MIN_LAUNCH_THRUST..=MAX_LAUNCH_THRUST);

    let slot = &mut state.fruits[state.next_fruit];
    slot.kind = kind;
    slot.pos = Vec2::new(x, SCREEN_HEIGHT);
    slot.vel = Vec2::new(strafe, -thrust);
    slot.enabled = true;
    state.next_fruit = (state.next_fruit + 1) % FRUIT_POOL_SIZE;

    state.events.push(GameEvent::FruitSpawned { kind });
    log::trace!("spawned {kind:?} at x={x:.1}");
}
