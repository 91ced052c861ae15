use crate::constants::*;
use crate::core::{midi_to_hz, NoteId, SinkError, SoundSink};
use wasm_bindgen::JsValue;
use wasm_bindgen_futures::JsFuture;
use web_sys as web;

fn rejected(label: &str, e: JsValue) -> SinkError {
    SinkError::Rejected(format!("{} error: {:?}", label, e))
}

fn create_gain(
    audio_ctx: &web::AudioContext,
    value: f32,
    label: &str,
) -> Result<web::GainNode, SinkError> {
    let g = web::GainNode::new(audio_ctx).map_err(|e| rejected(label, e))?;
    g.gain().set_value(value);
    Ok(g)
}

/// Create an AudioContext and wait for it to leave the suspended state.
/// Must run from a user gesture or the browser keeps it suspended.
pub async fn open_context() -> anyhow::Result<web::AudioContext> {
    let audio_ctx = web::AudioContext::new().map_err(|e| anyhow::anyhow!("{:?}", e))?;
    let resume = audio_ctx
        .resume()
        .map_err(|e| anyhow::anyhow!("resume: {:?}", e))?;
    JsFuture::from(resume)
        .await
        .map_err(|e| anyhow::anyhow!("resume rejected: {:?}", e))?;
    Ok(audio_ctx)
}

struct Engine {
    ctx: web::AudioContext,
    master: web::GainNode,
    noise: web::AudioBuffer,
}

impl Engine {
    fn new(ctx: web::AudioContext) -> Result<Self, SinkError> {
        let master = create_gain(&ctx, MASTER_GAIN, "Master")?;
        _ = master.connect_with_audio_node(&ctx.destination());
        let noise = white_noise(&ctx)?;
        Ok(Self { ctx, master, noise })
    }

    fn start_time(&self) -> f64 {
        if self.ctx.state() == web::AudioContextState::Suspended {
            _ = self.ctx.resume();
        }
        self.ctx.current_time() + 0.005
    }

    fn envelope(&self, t0: f64, peak: f32, decay_sec: f64) -> Result<web::GainNode, SinkError> {
        let g = create_gain(&self.ctx, 0.0, "Envelope")?;
        let p = g.gain();
        _ = p.set_value_at_time(0.0, t0);
        _ = p.linear_ramp_to_value_at_time(peak, t0 + BAR_ATTACK_SEC);
        _ = p.exponential_ramp_to_value_at_time(0.0001, t0 + decay_sec);
        _ = g.connect_with_audio_node(&self.master);
        Ok(g)
    }

    fn tone(
        &self,
        t0: f64,
        wave: web::OscillatorType,
        hz: f32,
        detune_cents: f32,
        peak: f32,
        decay_sec: f64,
    ) -> Result<web::OscillatorNode, SinkError> {
        let src = web::OscillatorNode::new(&self.ctx).map_err(|e| rejected("Oscillator", e))?;
        src.set_type(wave);
        src.frequency().set_value(hz);
        src.detune().set_value(detune_cents);
        let env = self.envelope(t0, peak, decay_sec)?;
        _ = src.connect_with_audio_node(&env);
        _ = src.start_with_when(t0);
        _ = src.stop_with_when(t0 + decay_sec + 0.05);
        Ok(src)
    }

    fn strike_bar(&self, midi: u8, velocity: f32, detune_cents: f32) -> Result<(), SinkError> {
        let t0 = self.start_time();
        let hz = midi_to_hz(midi as f32);
        let peak = BAR_PEAK_GAIN * velocity;
        self.tone(
            t0,
            web::OscillatorType::Triangle,
            hz,
            detune_cents,
            peak,
            BAR_DECAY_SEC,
        )?;
        self.tone(
            t0,
            web::OscillatorType::Sine,
            hz * BAR_OVERTONE_RATIO,
            detune_cents,
            BAR_OVERTONE_GAIN * velocity,
            BAR_DECAY_SEC * 0.25,
        )?;
        Ok(())
    }

    fn noise_hit(
        &self,
        t0: f64,
        filter: web::BiquadFilterType,
        tone_hz: f32,
        peak: f32,
        decay_sec: f64,
    ) -> Result<(), SinkError> {
        let src =
            web::AudioBufferSourceNode::new(&self.ctx).map_err(|e| rejected("BufferSource", e))?;
        src.set_buffer(Some(&self.noise));
        let tone = web::BiquadFilterNode::new(&self.ctx).map_err(|e| rejected("Biquad", e))?;
        tone.set_type(filter);
        tone.frequency().set_value(tone_hz);
        let env = self.envelope(t0, peak, decay_sec)?;
        _ = src.connect_with_audio_node(&tone);
        _ = tone.connect_with_audio_node(&env);
        _ = src.start_with_when(t0);
        _ = src.stop_with_when(t0 + decay_sec + 0.05);
        Ok(())
    }

    fn drum(&self, name: &str, velocity: f32) -> Result<(), SinkError> {
        let t0 = self.start_time();
        match name {
            "kick" => {
                let osc = self.tone(
                    t0,
                    web::OscillatorType::Sine,
                    KICK_START_HZ,
                    0.0,
                    velocity,
                    KICK_SEC,
                )?;
                _ = osc
                    .frequency()
                    .exponential_ramp_to_value_at_time(KICK_END_HZ, t0 + KICK_SEC);
            }
            "snare" => {
                self.noise_hit(
                    t0,
                    web::BiquadFilterType::Highpass,
                    SNARE_TONE_HZ,
                    0.6 * velocity,
                    SNARE_SEC,
                )?;
                self.tone(
                    t0,
                    web::OscillatorType::Triangle,
                    180.0,
                    0.0,
                    0.3 * velocity,
                    SNARE_SEC * 0.5,
                )?;
            }
            "hihat" => self.noise_hit(
                t0,
                web::BiquadFilterType::Highpass,
                HAT_TONE_HZ,
                0.3 * velocity,
                HAT_SEC,
            )?,
            "openhat" => self.noise_hit(
                t0,
                web::BiquadFilterType::Highpass,
                HAT_TONE_HZ,
                0.25 * velocity,
                OPEN_HAT_SEC,
            )?,
            "clap" => {
                // three quick bursts read as a clap
                for i in 0..3 {
                    self.noise_hit(
                        t0 + i as f64 * 0.012,
                        web::BiquadFilterType::Bandpass,
                        CLAP_TONE_HZ,
                        0.5 * velocity,
                        CLAP_SEC,
                    )?;
                }
            }
            other => {
                return Err(SinkError::Rejected(format!("unknown drum sample {}", other)));
            }
        }
        Ok(())
    }
}

// One second of deterministic white noise (xorshift32) shared by the drum voices
fn white_noise(audio_ctx: &web::AudioContext) -> Result<web::AudioBuffer, SinkError> {
    let sr = audio_ctx.sample_rate();
    let len = (sr * NOISE_SECONDS) as u32;
    let buffer = audio_ctx
        .create_buffer(1, len, sr)
        .map_err(|e| rejected("AudioBuffer", e))?;
    let mut seed: u32 = 0x1234ABCD;
    let mut samples: Vec<f32> = Vec::with_capacity(len as usize);
    for _ in 0..len {
        seed ^= seed << 13;
        seed ^= seed >> 17;
        seed ^= seed << 5;
        samples.push((seed as f32 / u32::MAX as f32) * 2.0 - 1.0);
    }
    buffer
        .copy_to_channel(&mut samples, 0)
        .map_err(|e| rejected("copy_to_channel", e))?;
    Ok(buffer)
}

/// WebAudio-backed sound sink. Triggers before `attach` are silent no-ops.
#[derive(Default)]
pub struct WebAudioSink {
    engine: Option<Engine>,
}

impl WebAudioSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn attach(&mut self, audio_ctx: web::AudioContext) -> Result<(), SinkError> {
        let engine = Engine::new(audio_ctx)?;
        self.engine = Some(engine);
        Ok(())
    }

    /// Short confirmation tone once the context is running.
    pub fn beep(&self) {
        if let Some(engine) = &self.engine {
            let t0 = engine.start_time();
            if let Err(e) = engine.tone(
                t0,
                web::OscillatorType::Sine,
                BEEP_HZ,
                0.0,
                BEEP_GAIN,
                BEEP_SEC,
            ) {
                log::warn!("[audio] warm-up beep failed: {}", e);
            }
        }
    }

    pub fn close(&mut self) {
        if let Some(engine) = self.engine.take() {
            _ = engine.ctx.close();
            log::info!("[audio] context closed");
        }
    }
}

impl SoundSink for WebAudioSink {
    fn trigger(&mut self, note: NoteId, velocity: f32, detune_cents: f32) -> Result<(), SinkError> {
        let Some(engine) = &self.engine else {
            return Ok(());
        };
        match note {
            NoteId::Midi(m) => engine.strike_bar(m, velocity, detune_cents),
            NoteId::Sample(name) => engine.drum(name, velocity),
        }
    }
}
