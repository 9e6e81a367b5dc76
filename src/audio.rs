//! Audio system using Web Audio API
//!
//! Procedurally generated chimes - no external files needed!

use web_sys::{AudioContext, GainNode, OscillatorNode, OscillatorType};

use crate::sim::GameEvent;

/// Sound effect types
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SoundEffect {
    /// Crystal picked up
    Grab,
    /// Crystal locked into place
    CrystalUnlock,
    /// Every crystal in the chamber solved
    ChamberOpen,
    /// Entering the next level
    LevelUp,
}

impl SoundEffect {
    /// Cue for a game event, if it has one
    pub fn for_event(event: &GameEvent) -> Option<Self> {
        match event {
            GameEvent::InteractionStarted { .. } => Some(SoundEffect::Grab),
            GameEvent::PuzzleSolved { .. } => Some(SoundEffect::CrystalUnlock),
            GameEvent::ChamberUnlocked { .. } => Some(SoundEffect::ChamberOpen),
            GameEvent::LevelAdvanced { .. } => Some(SoundEffect::LevelUp),
            _ => None,
        }
    }
}

/// Audio manager for the game
pub struct AudioManager {
    ctx: Option<AudioContext>,
    volume: f32,
    muted: bool,
}

impl Default for AudioManager {
    fn default() -> Self {
        Self::new()
    }
}

impl AudioManager {
    pub fn new() -> Self {
        // Try to create audio context (may fail if not in secure context)
        let ctx = AudioContext::new().ok();
        if ctx.is_none() {
            log::warn!("Failed to create AudioContext - audio disabled");
        }
        Self {
            ctx,
            volume: 0.8,
            muted: false,
        }
    }

    /// Mirrors the session's sound toggle
    pub fn set_muted(&mut self, muted: bool) {
        self.muted = muted;
    }

    /// Play the cues for a batch of events
    pub fn play_events(&self, events: &[GameEvent]) {
        for effect in events.iter().filter_map(SoundEffect::for_event) {
            self.play(effect);
        }
    }

    /// Play a sound effect
    pub fn play(&self, effect: SoundEffect) {
        if self.muted || self.volume <= 0.0 {
            return;
        }

        let Some(ctx) = &self.ctx else { return };

        // Resume context if suspended (browsers require user gesture)
        if ctx.state() == web_sys::AudioContextState::Suspended {
            let _ = ctx.resume();
        }

        match effect {
            SoundEffect::Grab => self.play_grab(ctx, self.volume),
            SoundEffect::CrystalUnlock => self.play_unlock(ctx, self.volume),
            SoundEffect::ChamberOpen => self.play_chamber_open(ctx, self.volume),
            SoundEffect::LevelUp => self.play_level_up(ctx, self.volume),
        }
    }

    // === Sound generators ===

    /// Create an oscillator with gain envelope
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

    /// Grab - short glassy tick
    fn play_grab(&self, ctx: &AudioContext, vol: f32) {
        let Some((osc, gain)) = self.create_osc(ctx, 880.0, OscillatorType::Sine) else {
            return;
        };
        let t = ctx.current_time();

        gain.gain().set_value_at_time(vol * 0.2, t).ok();
        gain.gain()
            .exponential_ramp_to_value_at_time(0.01, t + 0.06)
            .ok();

        osc.start().ok();
        osc.stop_with_when(t + 0.08).ok();
    }

    /// Unlock - bright rising chime
    fn play_unlock(&self, ctx: &AudioContext, vol: f32) {
        for (i, freq) in [660.0, 990.0].iter().enumerate() {
            let delay = i as f64 * 0.07;
            if let Some((osc, gain)) = self.create_osc(ctx, *freq, OscillatorType::Sine) {
                let t = ctx.current_time() + delay;
                gain.gain().set_value_at_time(vol * 0.35, t).ok();
                gain.gain()
                    .exponential_ramp_to_value_at_time(0.01, t + 0.5)
                    .ok();
                osc.start_with_when(t).ok();
                osc.stop_with_when(t + 0.6).ok();
            }
        }
    }

    /// Chamber open - triumphant fanfare
    fn play_chamber_open(&self, ctx: &AudioContext, vol: f32) {
        for (i, freq) in [523.0, 659.0, 784.0, 1047.0].iter().enumerate() {
            let delay = i as f64 * 0.12;
            if let Some((osc, gain)) = self.create_osc(ctx, *freq, OscillatorType::Triangle) {
                let t = ctx.current_time() + delay;
                gain.gain().set_value_at_time(vol * 0.3, t).ok();
                gain.gain()
                    .exponential_ramp_to_value_at_time(0.01, t + 0.5)
                    .ok();
                osc.start_with_when(t).ok();
                osc.stop_with_when(t + 0.6).ok();
            }
        }
    }

    /// Level up - whoosh up
    fn play_level_up(&self, ctx: &AudioContext, vol: f32) {
        let Some((osc, gain)) = self.create_osc(ctx, 200.0, OscillatorType::Triangle) else {
            return;
        };
        let t = ctx.current_time();

        gain.gain().set_value_at_time(vol * 0.3, t).ok();
        gain.gain()
            .exponential_ramp_to_value_at_time(0.01, t + 0.3)
            .ok();
        osc.frequency().set_value_at_time(200.0, t).ok();
        osc.frequency()
            .exponential_ramp_to_value_at_time(800.0, t + 0.25)
            .ok();

        osc.start().ok();
        osc.stop_with_when(t + 0.35).ok();
    }
}
