//! Sound effects as short oscillator tones

use game_core::SoundKind;

/// Frequency envelope for one effect
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tone {
    pub start_hz: f32,
    /// Target frequency and ramp duration in seconds
    pub ramp: Option<(f32, f64)>,
}

pub fn tone_for(kind: SoundKind) -> Tone {
    match kind {
        SoundKind::PaddleHit => Tone {
            start_hz: 440.0,
            ramp: Some((880.0, 0.1)),
        },
        SoundKind::WallHit => Tone {
            start_hz: 220.0,
            ramp: None,
        },
        SoundKind::Score => Tone {
            start_hz: 660.0,
            ramp: Some((440.0, 0.3)),
        },
    }
}

#[cfg(target_arch = "wasm32")]
pub use web::WebAudio;

#[cfg(target_arch = "wasm32")]
mod web {
    use super::*;
    use wasm_bindgen::JsValue;
    use web_sys::{AudioContext, AudioScheduledSourceNode};

    const GAIN_START: f32 = 0.1;
    const GAIN_END: f32 = 0.01;
    const TONE_LENGTH: f64 = 0.2;

    /// Plays tones through a lazily created AudioContext.
    ///
    /// Browsers refuse to start audio before a user gesture, so the context
    /// is only created on the first sound.
    #[derive(Default)]
    pub struct WebAudio {
        ctx: Option<AudioContext>,
    }

    impl WebAudio {
        pub fn new() -> Self {
            Self::default()
        }

        fn context(&mut self) -> Result<&AudioContext, JsValue> {
            if self.ctx.is_none() {
                self.ctx = Some(AudioContext::new()?);
            }
            self.ctx
                .as_ref()
                .ok_or_else(|| JsValue::from_str("audio context unavailable"))
        }

        pub fn play(&mut self, kind: SoundKind) -> Result<(), JsValue> {
            let tone = tone_for(kind);
            let ctx = self.context()?;
            let now = ctx.current_time();

            let oscillator = ctx.create_oscillator()?;
            let gain = ctx.create_gain()?;
            oscillator.connect_with_audio_node(&gain)?;
            gain.connect_with_audio_node(&ctx.destination())?;

            let frequency = oscillator.frequency();
            frequency.set_value_at_time(tone.start_hz, now)?;
            if let Some((target_hz, duration)) = tone.ramp {
                frequency.exponential_ramp_to_value_at_time(target_hz, now + duration)?;
            }

            let volume = gain.gain();
            volume.set_value_at_time(GAIN_START, now)?;
            volume.exponential_ramp_to_value_at_time(GAIN_END, now + TONE_LENGTH)?;

            let source: &AudioScheduledSourceNode = &oscillator;
            source.start_with_when(now)?;
            source.stop_with_when(now + TONE_LENGTH)?;
            Ok(())
        }
    }
}
