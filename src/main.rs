//! Fruit Slash entry point
//!
//! A windowing shell feeds pointer input in and draws the `Scene` out. On
//! wasm32 the shell is a web page embedding the exported `WebGame`; the
//! native binary runs a short headless demo session so the loop can be
//! exercised from a terminal.

use glam::Vec2;

use fruit_slash::audio::AudioManager;
use fruit_slash::consts::*;
use fruit_slash::scene::{Scene, build_scene};
use fruit_slash::settings::Settings;
use fruit_slash::sim::{GameState, TickInput, tick};

/// Game instance holding sim state plus the frame shell around it
struct Game {
    state: GameState,
    input: TickInput,
    audio: AudioManager,
    settings: Settings,
    accumulator: f32,
}

impl Game {
    fn new(seed: u64, settings: Settings) -> Self {
        let mut audio = AudioManager::new();
        audio.apply_settings(&settings);
        if settings.music_on_start {
            audio.toggle_music();
        }
        Self {
            state: GameState::new(seed),
            input: TickInput::default(),
            audio,
            settings,
            accumulator: 0.0,
        }
    }

    fn state(&self) -> &GameState {
        &self.state
    }

    fn set_pointer(&mut self, pos: Vec2) {
        self.input.pointer = pos;
    }

    fn press(&mut self) {
        self.input.pressed = true;
    }

    fn release(&mut self) {
        self.input.released = true;
    }

    fn toggle_music(&mut self) {
        self.audio.toggle_music();
    }

    /// Run simulation ticks for one frame's worth of wall time
    fn update(&mut self, dt: f32) {
        let dt = dt.min(0.1);
        self.accumulator += dt;

        let mut substeps = 0;
        while self.accumulator >= SIM_DT && substeps < MAX_SUBSTEPS {
            tick(&mut self.state, &self.input, SIM_DT);
            self.accumulator -= SIM_DT;
            substeps += 1;

            // Clear one-shot inputs after processing
            self.input.pressed = false;
            self.input.released = false;

            let events = self.state.take_events();
            self.audio.handle_events(&events);
        }
    }

    /// Snapshot the current frame for the draw pass
    fn scene(&self) -> Scene {
        build_scene(&self.state, self.input.pointer, &self.settings)
    }
}

#[cfg(not(target_arch = "wasm32"))]
mod demo {
    use super::*;
    use fruit_slash::sim::Phase;

    /// Scripted session: start the round, sweep the pointer back and forth
    /// while slashing, and report what happened
    pub fn run() {
        let settings = Settings::load();
        let seed = 0xF00D;
        let mut game = Game::new(seed, settings);
        log::info!("Fruit Slash headless demo, seed {seed:#x}");

        game.press();
        game.update(SIM_DT);
        assert_eq!(game.state().phase, Phase::Playing);

        // ~30 seconds of play, slashing in one-second sweeps
        game.press();
        for frame in 0..(30 * 60) {
            let t = frame as f32 / 60.0;
            let sweep = (t * std::f32::consts::TAU).sin() * 0.5 + 0.5;
            game.set_pointer(Vec2::new(
                SCREEN_WIDTH * (0.25 + 0.5 * sweep),
                SCREEN_HEIGHT * 0.6,
            ));
            game.update(SIM_DT);
            if game.state().phase == Phase::Lost {
                log::info!("slashed a bomb at t={t:.1}s");
                break;
            }
        }
        game.release();
        game.update(SIM_DT);

        let scene = game.scene();
        log::info!(
            "session over: phase {:?}, score {}, fruits slashed {}, {} fruits and {} trail dots on screen",
            scene.hud.phase,
            scene.hud.score,
            scene.hud.fruits_slashed,
            scene.fruits.len(),
            scene.trail.len(),
        );

        if game.state().phase == Phase::Lost {
            game.press();
            game.update(SIM_DT);
            assert_eq!(game.state().phase, Phase::Start);
            log::info!("returned to title screen");
        }

        // Quiet down and persist preferences on the way out
        if game.audio.music_playing() {
            game.toggle_music();
        }
        game.settings.save();
    }
}

#[cfg(target_arch = "wasm32")]
mod web {
    use super::*;
    use wasm_bindgen::prelude::*;

    /// Game handle exported to the embedding page. The page forwards
    /// pointer events, calls `frame` from requestAnimationFrame, and draws
    /// from the scene snapshot.
    #[wasm_bindgen]
    pub struct WebGame {
        game: Game,
        last_time_ms: f64,
    }

    #[wasm_bindgen]
    impl WebGame {
        #[wasm_bindgen(constructor)]
        pub fn new() -> WebGame {
            let seed = js_sys::Date::now() as u64;
            log::info!("Fruit Slash starting, seed {seed}");
            WebGame {
                game: Game::new(seed, Settings::load()),
                last_time_ms: js_sys::Date::now(),
            }
        }

        pub fn pointer_moved(&mut self, x: f32, y: f32) {
            self.game.set_pointer(Vec2::new(x, y));
        }

        pub fn pointer_pressed(&mut self) {
            self.game.press();
        }

        pub fn pointer_released(&mut self) {
            self.game.release();
        }

        /// The original's M key
        pub fn toggle_music(&mut self) {
            self.game.toggle_music();
        }

        /// Advance the sim to `now_ms` (a DOMHighResTimeStamp)
        pub fn frame(&mut self, now_ms: f64) {
            let dt = ((now_ms - self.last_time_ms) / 1000.0) as f32;
            self.last_time_ms = now_ms;
            self.game.update(dt);
        }

        /// Current frame snapshot as JSON for the page's draw pass
        pub fn scene_json(&self) -> String {
            serde_json::to_string(&self.game.scene()).unwrap_or_default()
        }

        pub fn score(&self) -> u32 {
            self.game.state().score
        }

        pub fn fruits_slashed(&self) -> u32 {
            self.game.state().fruits_slashed
        }
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn wasm_main() {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).expect("Failed to init logger");
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    env_logger::init();
    demo::run();
}


#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}
