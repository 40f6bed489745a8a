//! Fixed timestep simulation tick
//!
//! One entry point, `tick`, dispatches on the current phase. Only the
//! Playing phase mutates the pools; the title and lose screens just wait
//! for a press.

use glam::Vec2;

use super::collision::slash_hit;
use super::spawn::{spawn_fruit, spawn_interval};
use super::state::{GameEvent, GameState, Phase};
use crate::consts::*;

/// Input signals for a single tick, sampled by the host shell
#[derive(Debug, Clone, Default)]
pub struct TickInput {
    /// Pointer position in playfield coordinates
    pub pointer: Vec2,
    /// Primary button went down this tick
    pub pressed: bool,
    /// Primary button went up this tick
    pub released: bool,
}

/// Advance the game state by one fixed timestep
pub fn tick(state: &mut GameState, input: &TickInput, dt: f32) {
    match state.phase {
        Phase::Start => {
            if input.pressed {
                state.begin_round();
            }
        }
        Phase::Playing => update_playing(state, input, dt),
        Phase::Lost => {
            if input.pressed {
                state.return_to_start();
            }
        }
    }
}

/// One tick of active play: timers, slash state, trail, spawning, then
/// the fruit pass (cull, slash, or integrate - in that priority order)
fn update_playing(state: &mut GameState, input: &TickInput, dt: f32) {
    state.total_elapsed += dt;
    state.spawn_elapsed += dt;

    if input.pressed {
        state.slashing = true;
    } else if input.released {
        state.slashing = false;
    }

    // While slashing, lay down one trail particle per tick
    if state.slashing {
        let slot = &mut state.particles[state.next_particle];
        slot.pos = input.pointer;
        slot.elapsed = 0.0;
        slot.enabled = true;
        state.next_particle = (state.next_particle + 1) % PARTICLE_POOL_SIZE;
    }

    for particle in &mut state.particles {
        if particle.enabled {
            particle.elapsed += dt;
            if particle.elapsed > PARTICLE_LIFETIME {
                particle.enabled = false;
            }
        }
    }

    if state.spawn_elapsed > spawn_interval(state.total_elapsed) {
        state.spawn_elapsed = 0.0;
        spawn_fruit(state);
    }

    for i in 0..FRUIT_POOL_SIZE {
        if !state.fruits[i].enabled {
            continue;
        }
        if state.fruits[i].pos.y > SCREEN_HEIGHT {
            // Fell off the bottom: missed, no penalty
            state.fruits[i].enabled = false;
        } else if state.slashing && slash_hit(input.pointer, state.fruits[i].pos) {
            // A slashed fruit skips motion this tick; a bomb slash
            // disables the rest of the pool so the loop runs dry
            slash_fruit(state, i);
        } else {
            let fruit = &mut state.fruits[i];
            fruit.pos += fruit.vel;
            fruit.vel.y += GRAVITY_PER_TICK;
        }
    }
}

/// Resolve a slash hit on the fruit at `index`
fn slash_fruit(state: &mut GameState, index: usize) {
    let kind = state.fruits[index].kind;
    state.fruits[index].enabled = false;
    if kind.is_bomb() {
        log::debug!("bomb slashed, round over at score {}", state.score);
        state.events.push(GameEvent::BombSlashed);
        state.end_round();
    } else {
        let points = kind.score();
        state.score += points;
        state.fruits_slashed += 1;
        state.events.push(GameEvent::FruitSlashed { kind, points });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::state::FruitKind;
    use proptest::prelude::*;

    /// Arm a fruit slot directly, bypassing the spawner
    fn plant(state: &mut GameState, kind: FruitKind, pos: Vec2, vel: Vec2) -> usize {
        let slot = state.next_fruit;
        state.fruits[slot].kind = kind;
        state.fruits[slot].pos = pos;
        state.fruits[slot].vel = vel;
        state.fruits[slot].enabled = true;
        state.next_fruit = (state.next_fruit + 1) % FRUIT_POOL_SIZE;
        slot
    }

    /// Input that slashes through the hit circle of a fruit at `pos`
    fn slash_at(pos: Vec2) -> TickInput {
        TickInput {
            pointer: pos + Vec2::splat(FRUIT_RADIUS),
            pressed: true,
            released: false,
        }
    }

    fn playing_state(seed: u64) -> GameState {
        let mut state = GameState::new(seed);
        state.begin_round();
        state
    }

    #[test]
    fn test_press_starts_round() {
        let mut state = GameState::new(1);
        tick(&mut state, &TickInput::default(), SIM_DT);
        assert_eq!(state.phase, Phase::Start);

        let press = TickInput {
            pressed: true,
            ..Default::default()
        };
        tick(&mut state, &press, SIM_DT);
        assert_eq!(state.phase, Phase::Playing);
    }

    #[test]
    fn test_scoring_per_kind() {
        for (kind, points) in [
            (FruitKind::Apple, 1),
            (FruitKind::Banana, 3),
            (FruitKind::Cherry, 9),
        ] {
            let mut state = playing_state(1);
            let pos = Vec2::new(400.0, 200.0);
            plant(&mut state, kind, pos, Vec2::ZERO);

            tick(&mut state, &slash_at(pos), SIM_DT);

            assert_eq!(state.score, points, "{kind:?} score");
            assert_eq!(state.fruits_slashed, 1, "{kind:?} slash count");
            assert_eq!(state.phase, Phase::Playing);
            assert!(state.events.contains(&GameEvent::FruitSlashed { kind, points }));
        }
    }

    #[test]
    fn test_bomb_slash_ends_round() {
        let mut state = playing_state(1);
        state.score = 13;
        state.fruits_slashed = 5;
        let pos = Vec2::new(400.0, 200.0);
        plant(&mut state, FruitKind::Bomb, pos, Vec2::ZERO);
        // A second fruit in flight must also be cleared by the transition
        plant(&mut state, FruitKind::Apple, Vec2::new(100.0, 100.0), Vec2::ZERO);

        tick(&mut state, &slash_at(pos), SIM_DT);

        assert_eq!(state.phase, Phase::Lost);
        assert_eq!(state.enabled_fruits().count(), 0);
        assert_eq!(state.enabled_particles().count(), 0);
        // Bomb scores nothing; run totals stay for the lose screen
        assert_eq!(state.score, 13);
        assert_eq!(state.fruits_slashed, 5);
        assert!(state.events.contains(&GameEvent::BombSlashed));
    }

    #[test]
    fn test_missed_fruit_disabled_without_score() {
        let mut state = playing_state(1);
        let slot = plant(
            &mut state,
            FruitKind::Apple,
            Vec2::new(400.0, SCREEN_HEIGHT + 1.0),
            Vec2::new(0.0, 2.0),
        );

        tick(&mut state, &TickInput::default(), SIM_DT);
        assert!(!state.fruits[slot].enabled);
        assert_eq!(state.score, 0);

        // Disabled slots never collide again
        let pos = state.fruits[slot].pos;
        tick(&mut state, &slash_at(pos), SIM_DT);
        assert_eq!(state.score, 0);
        assert_eq!(state.fruits_slashed, 0);
    }

    #[test]
    fn test_gravity_pulls_fruit_back_down() {
        let mut state = playing_state(1);
        let slot = plant(
            &mut state,
            FruitKind::Apple,
            Vec2::new(480.0, SCREEN_HEIGHT),
            Vec2::new(0.0, -5.0),
        );

        let mut peak = SCREEN_HEIGHT;
        let mut ticks = 0;
        while state.fruits[slot].enabled {
            tick(&mut state, &TickInput::default(), SIM_DT);
            peak = peak.min(state.fruits[slot].pos.y);
            ticks += 1;
            assert!(ticks < 600, "fruit never fell off screen");
        }
        // It rose above the launch edge, then fell past it
        assert!(peak < SCREEN_HEIGHT - 50.0);
        assert_eq!(state.score, 0);
    }

    #[test]
    fn test_trail_appends_while_held_and_expires() {
        let mut state = playing_state(1);
        let press = TickInput {
            pointer: Vec2::new(300.0, 300.0),
            pressed: true,
            ..Default::default()
        };
        tick(&mut state, &press, SIM_DT);
        assert!(state.slashing);
        assert_eq!(state.enabled_particles().count(), 1);

        // Hold for a while: pool stays bounded, old particles expire
        let hold = TickInput {
            pointer: Vec2::new(300.0, 300.0),
            ..Default::default()
        };
        for _ in 0..40 {
            tick(&mut state, &hold, SIM_DT);
            assert!(state.enabled_particles().count() <= PARTICLE_POOL_SIZE);
        }

        // Release, then wait past the lifetime: trail fully gone
        let release = TickInput {
            released: true,
            ..Default::default()
        };
        tick(&mut state, &release, SIM_DT);
        assert!(!state.slashing);
        for _ in 0..10 {
            tick(&mut state, &TickInput::default(), SIM_DT);
        }
        assert_eq!(state.enabled_particles().count(), 0);
    }

    #[test]
    fn test_spawner_fires_on_interval() {
        let mut state = playing_state(5);
        // Force the threshold to be crossed on the next tick
        state.spawn_elapsed = 10.0;
        tick(&mut state, &TickInput::default(), SIM_DT);
        assert_eq!(state.enabled_fruits().count(), 1);
        assert_eq!(state.spawn_elapsed, 0.0);
        assert!(
            state
                .events
                .iter()
                .any(|e| matches!(e, GameEvent::FruitSpawned { .. }))
        );
    }

    #[test]
    fn test_full_session_scenario() {
        let mut state = GameState::new(42);
        let press = TickInput {
            pressed: true,
            ..Default::default()
        };

        tick(&mut state, &press, SIM_DT);
        assert_eq!(state.phase, Phase::Playing);

        // An apple arcs up and falls off screen unslashed
        let slot = plant(
            &mut state,
            FruitKind::Apple,
            Vec2::new(480.0, SCREEN_HEIGHT),
            Vec2::new(1.0, -8.0),
        );
        for _ in 0..600 {
            tick(&mut state, &TickInput::default(), SIM_DT);
            if !state.fruits[slot].enabled {
                break;
            }
        }
        assert!(!state.fruits[slot].enabled);
        assert_eq!(state.score, 0);

        // A bomb is slashed the moment it appears
        let pos = Vec2::new(250.0, 250.0);
        plant(&mut state, FruitKind::Bomb, pos, Vec2::ZERO);
        tick(&mut state, &slash_at(pos), SIM_DT);
        assert_eq!(state.phase, Phase::Lost);
        assert_eq!(state.enabled_fruits().count(), 0);

        // Press on the lose screen: back to the title, tallies zeroed
        tick(&mut state, &press, SIM_DT);
        assert_eq!(state.phase, Phase::Start);
        assert_eq!(state.score, 0);
        assert_eq!(state.fruits_slashed, 0);
    }

    #[test]
    fn test_determinism_per_seed() {
        let mut a = playing_state(777);
        let mut b = playing_state(777);
        let input = TickInput {
            pointer: Vec2::new(480.0, 270.0),
            ..Default::default()
        };
        // Long enough to ramp the spawner and wrap the fruit cursor
        for _ in 0..4000 {
            tick(&mut a, &input, SIM_DT);
            tick(&mut b, &input, SIM_DT);
        }
        assert_eq!(a.next_fruit, b.next_fruit);
        assert_eq!(a.score, b.score);
        for (fa, fb) in a.fruits.iter().zip(b.fruits.iter()) {
            assert_eq!(fa.enabled, fb.enabled);
            if fa.enabled {
                assert_eq!(fa.kind, fb.kind);
                assert_eq!(fa.pos, fb.pos);
            }
        }
    }

    proptest! {
        /// Pool occupancy never exceeds capacity, whatever the player does
        #[test]
        fn prop_pools_stay_bounded(
            seed in 0u64..1000,
            inputs in prop::collection::vec(
                (0.0f32..960.0, 0.0f32..540.0, any::<bool>(), any::<bool>()),
                1..400,
            ),
        ) {
            let mut state = playing_state(seed);
            for (x, y, pressed, released) in inputs {
                let input = TickInput {
                    pointer: Vec2::new(x, y),
                    pressed,
                    released,
                };
                tick(&mut state, &input, SIM_DT);
                state.take_events();
                prop_assert!(state.enabled_fruits().count() <= FRUIT_POOL_SIZE);
                prop_assert!(state.enabled_particles().count() <= PARTICLE_POOL_SIZE);
                prop_assert!(state.next_fruit < FRUIT_POOL_SIZE);
                prop_assert!(state.next_particle < PARTICLE_POOL_SIZE);
            }
        }
    }
}
