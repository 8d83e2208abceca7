//! Presentation effects fired around a spin: sounds and confetti.
//!
//! Effects are best-effort. A failing or panicking sink is logged and
//! ignored; the draw itself never depends on them.

use std::panic::{AssertUnwindSafe, catch_unwind};

use raffle_lib::klog_warn;

use crate::config::EffectFlags;
use crate::error::EffectResult;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SoundCue {
    Spin,
    Win,
}

/// Host side of the effects: audio output and the particle layer.
pub trait EffectSink: Send {
    fn play_sound(&mut self, cue: SoundCue) -> EffectResult;
    fn confetti(&mut self) -> EffectResult;
}

/// Sink for hosts without audio or particles.
#[derive(Clone, Copy, Debug, Default)]
pub struct NullEffects;

impl EffectSink for NullEffects {
    fn play_sound(&mut self, _cue: SoundCue) -> EffectResult {
        Ok(())
    }

    fn confetti(&mut self) -> EffectResult {
        Ok(())
    }
}

pub struct Effects {
    flags: EffectFlags,
    sink: Box<dyn EffectSink>,
}

fn fire(what: &str, effect: impl FnOnce() -> EffectResult) {
    match catch_unwind(AssertUnwindSafe(effect)) {
        Ok(Ok(())) => {}
        Ok(Err(err)) => klog_warn!("effects: {} skipped: {}", what, err),
        Err(_) => klog_warn!("effects: {} panicked, skipped", what),
    }
}

impl Effects {
    pub fn new(flags: EffectFlags, sink: Box<dyn EffectSink>) -> Self {
        Self { flags, sink }
    }

    pub fn set_flags(&mut self, flags: EffectFlags) {
        self.flags = flags;
    }

    pub fn replace_sink(&mut self, sink: Box<dyn EffectSink>) {
        self.sink = sink;
    }

    pub fn spin_started(&mut self) {
        if self.flags.contains(EffectFlags::SPIN_SOUND) {
            let sink = &mut self.sink;
            fire("spin sound", || sink.play_sound(SoundCue::Spin));
        }
    }

    pub fn spin_settled(&mut self) {
        if self.flags.contains(EffectFlags::WIN_SOUND) {
            let sink = &mut self.sink;
            fire("win sound", || sink.play_sound(SoundCue::Win));
        }
        if self.flags.contains(EffectFlags::CONFETTI) {
            let sink = &mut self.sink;
            fire("confetti", || sink.confetti());
        }
    }
}
