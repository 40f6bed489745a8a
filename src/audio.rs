//! Audio system using Web Audio API
//!
//! Procedurally generated sound cues - no external files needed. Cues are
//! fire-and-forget: the sim emits events, the shell forwards them here, and
//! nothing ever waits on playback. On native builds this is a logging stub.

#[cfg(target_arch = "wasm32")]
use web_sys::{AudioContext, GainNode, OscillatorNode, OscillatorType};

use crate::settings::Settings;
use crate::sim::GameEvent;

/// Sound effect types
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SoundEffect {
    /// A fruit was launched from the bottom edge
    FruitSpawn,
    /// A scoring fruit was slashed
    FruitSlash,
    /// A bomb was slashed - round over
    BombSlash,
}

impl SoundEffect {
    /// Cue for a simulation event, if the event is audible
    pub fn for_event(event: &GameEvent) -> Option<Self> {
        match event {
            GameEvent::FruitSpawned { .. } => Some(SoundEffect::FruitSpawn),
            GameEvent::FruitSlashed { .. } => Some(SoundEffect::FruitSlash),
            GameEvent::BombSlashed => Some(SoundEffect::BombSlash),
        }
    }
}

/// Audio manager for the game
pub struct AudioManager {
    #[cfg(target_arch = "wasm32")]
    ctx: Option<AudioContext>,
    /// Background music voice, held while playing
    #[cfg(target_arch = "wasm32")]
    music: Option<(OscillatorNode, GainNode)>,
    master_volume: f32,
    sfx_volume: f32,
    music_volume: f32,
    muted: bool,
    music_playing: bool,
}

impl Default for AudioManager {
    fn default() -> Self {
        Self::new()
    }
}

impl AudioManager {
    pub fn new() -> Self {
        #[cfg(target_arch = "wasm32")]
        let ctx = {
            let ctx = AudioContext::new().ok();
            if ctx.is_none() {
                log::warn!("Failed to create AudioContext - audio disabled");
            }
            ctx
        };
        Self {
            #[cfg(target_arch = "wasm32")]
            ctx,
            #[cfg(target_arch = "wasm32")]
            music: None,
            master_volume: 0.8,
            sfx_volume: 1.0,
            music_volume: 0.7,
            muted: false,
            music_playing: false,
        }
    }

    /// Apply volume preferences
    pub fn apply_settings(&mut self, settings: &Settings) {
        self.master_volume = settings.master_volume.clamp(0.0, 1.0);
        self.sfx_volume = settings.sfx_volume.clamp(0.0, 1.0);
        self.music_volume = settings.music_volume.clamp(0.0, 1.0);
    }

    /// Mute/unmute all audio
    pub fn set_muted(&mut self, muted: bool) {
        self.muted = muted;
    }

    pub fn music_playing(&self) -> bool {
        self.music_playing
    }

    /// Pause/resume the background music stream (the original's M key)
    pub fn toggle_music(&mut self) {
        if self.music_playing {
            self.stop_music();
        } else {
            self.start_music();
        }
    }

    /// Play cues for every audible event in a frame's drained batch
    pub fn handle_events(&self, events: &[GameEvent]) {
        for event in events {
            if let Some(effect) = SoundEffect::for_event(event) {
                self.play(effect);
            }
        }
    }

    /// Get effective cue volume
    fn effective_volume(&self) -> f32 {
        if self.muted {
            0.0
        } else {
            self.master_volume * self.sfx_volume
        }
    }

    /// Play a sound effect
    #[cfg(target_arch = "wasm32")]
    pub fn play(&self, effect: SoundEffect) {
        let vol = self.effective_volume();
        if vol <= 0.0 {
            return;
        }

        let Some(ctx) = &self.ctx else { return };

        // Resume context if suspended (browsers require user gesture)
        if ctx.state() == web_sys::AudioContextState::Suspended {
            let _ = ctx.resume();
        }

        match effect {
            SoundEffect::FruitSpawn => self.play_spawn(ctx, vol),
            SoundEffect::FruitSlash => self.play_slash(ctx, vol),
            SoundEffect::BombSlash => self.play_bomb(ctx, vol),
        }
    }

    #[cfg(not(target_arch = "wasm32"))]
    pub fn play(&self, effect: SoundEffect) {
        if self.effective_volume() > 0.0 {
            log::trace!("audio cue: {effect:?}");
        }
    }

    #[cfg(target_arch = "wasm32")]
    fn start_music(&mut self) {
        self.music_playing = true;
        let vol = if self.muted {
            0.0
        } else {
            self.master_volume * self.music_volume
        };
        let Some(ctx) = &self.ctx else { return };
        if let Some((osc, gain)) = self.create_osc(ctx, 110.0, OscillatorType::Triangle) {
            gain.gain().set_value(vol * 0.1);
            osc.start().ok();
            self.music = Some((osc, gain));
        }
    }

    #[cfg(target_arch = "wasm32")]
    fn stop_music(&mut self) {
        self.music_playing = false;
        if let Some((osc, _gain)) = self.music.take() {
            osc.stop().ok();
        }
    }

    #[cfg(not(target_arch = "wasm32"))]
    fn start_music(&mut self) {
        self.music_playing = true;
        log::trace!(
            "music resumed at volume {:.2}",
            self.master_volume * self.music_volume
        );
    }

    #[cfg(not(target_arch = "wasm32"))]
    fn stop_music(&mut self) {
        self.music_playing = false;
        log::trace!("music paused");
    }

    // === Sound generators ===

    /// Create an oscillator with gain envelope
    #[cfg(target_arch = "wasm32")]
    fn create_osc(
        &self,
        ctx: &AudioContext,
        freq: f32,
        osc_type: OscillatorType,
    ) -> Option<(OscillatorNode, GainNode)> {
        let osc = ctx.create_oscillator().ok()?;
        let gain = ctx.create_gain().ok()?;

        osc.set_type(osc_type);
        osc.frequency().set_value(freq);
        osc.connect_with_audio_node(&gain).ok()?;
        gain.connect_with_audio_node(&ctx.destination()).ok()?;

        Some((osc, gain))
    }

    /// Spawn - short rising chirp
    #[cfg(target_arch = "wasm32")]
    fn play_spawn(&self, ctx: &AudioContext, vol: f32) {
        let Some((osc, gain)) = self.create_osc(ctx, 300.0, OscillatorType::Sine) else {
            return;
        };
        let t = ctx.current_time();

        gain.gain().set_value_at_time(vol * 0.25, t).ok();
        gain.gain()
            .exponential_ramp_to_value_at_time(0.01, t + 0.12)
            .ok();
        osc.frequency().set_value_at_time(300.0, t).ok();
        osc.frequency()
            .exponential_ramp_to_value_at_time(900.0, t + 0.12)
            .ok();

        osc.start().ok();
        osc.stop_with_when(t + 0.15).ok();
    }

    /// Slash - quick descending swish
    #[cfg(target_arch = "wasm32")]
    fn play_slash(&self, ctx: &AudioContext, vol: f32) {
        let Some((osc, gain)) = self.create_osc(ctx, 1800.0, OscillatorType::Square) else {
            return;
        };
        let t = ctx.current_time();

        gain.gain().set_value_at_time(vol * 0.3, t).ok();
        gain.gain()
            .exponential_ramp_to_value_at_time(0.01, t + 0.1)
            .ok();
        osc.frequency().set_value_at_time(1800.0, t).ok();
        osc.frequency()
            .exponential_ramp_to_value_at_time(500.0, t + 0.1)
            .ok();

        osc.start().ok();
        osc.stop_with_when(t + 0.12).ok();
    }

    /// Bomb slash - low sawtooth drop with a bass thump
    #[cfg(target_arch = "wasm32")]
    fn play_bomb(&self, ctx: &AudioContext, vol: f32) {
        let t = ctx.current_time();

        if let Some((osc, gain)) = self.create_osc(ctx, 200.0, OscillatorType::Sawtooth) {
            gain.gain().set_value_at_time(vol * 0.5, t).ok();
            gain.gain()
                .exponential_ramp_to_value_at_time(0.01, t + 0.4)
                .ok();
            osc.frequency().set_value_at_time(200.0, t).ok();
            osc.frequency()
                .exponential_ramp_to_value_at_time(40.0, t + 0.35)
                .ok();
            osc.start().ok();
            osc.stop_with_when(t + 0.45).ok();
        }

        if let Some((osc, gain)) = self.create_osc(ctx, 55.0, OscillatorType::Sine) {
            gain.gain().set_value_at_time(vol * 0.4, t).ok();
            gain.gain()
                .exponential_ramp_to_value_at_time(0.01, t + 0.3)
                .ok();
            osc.start().ok();
            osc.stop_with_when(t + 0.35).ok();
        }
    }
}
