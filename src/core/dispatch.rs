use super::bindings::KeyBindings;
use super::catalog::{drum_pad, NoteCategory, NoteId};
use super::constants::*;
use super::layout::{KeyboardLayout, LayoutError};
use super::readiness::{LoadTicket, Readiness, ReadinessState};
use glam::Vec3;
use rand::prelude::*;
use std::time::Duration;
use thiserror::Error;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Source {
    Pointer,
    Keyboard,
    Drum,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LaunchShape {
    Cube,
    Sphere,
}

/// One normalized trigger, handed once to each sink.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PlayEvent {
    pub note: NoteId,
    pub position: Vec3,
    pub color: &'static str,
    pub category: NoteCategory,
    pub source: Source,
    pub shape: LaunchShape,
    pub velocity: f32,
    pub detune_cents: f32,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum SinkError {
    #[error("{0} is not available")]
    Unavailable(&'static str),
    #[error("sink rejected call: {0}")]
    Rejected(String),
}

/// Sample playback engine.
pub trait SoundSink {
    fn trigger(&mut self, note: NoteId, velocity: f32, detune_cents: f32) -> Result<(), SinkError>;
}

/// Visual feedback: launched objects and camera shake. Called at input rate.
pub trait SceneFeedbackSink {
    fn spawn(&mut self, event: &PlayEvent) -> Result<(), SinkError>;
    fn shake(&mut self, duration: Duration) -> Result<(), SinkError>;
}

#[derive(Clone, Debug)]
pub struct DispatcherConfig {
    pub pointer_velocity: f32,
    pub keyboard_velocity: f32,
    pub drum_velocity: f32,
    pub detune_jitter_cents: f32,
    pub shake_duration: Duration,
    pub seed: u64,
}

impl Default for DispatcherConfig {
    fn default() -> Self {
        Self {
            pointer_velocity: POINTER_VELOCITY,
            keyboard_velocity: KEYBOARD_VELOCITY,
            drum_velocity: DRUM_VELOCITY,
            detune_jitter_cents: DETUNE_JITTER_CENTS,
            shake_duration: SHAKE_DURATION,
            seed: DEFAULT_SEED,
        }
    }
}

/// Turns raw pointer/key input into `PlayEvent`s and forwards them to the
/// sound and scene sinks. Sinks are owned for the lifetime of the session.
pub struct InputDispatcher<S, V> {
    layout: KeyboardLayout,
    bindings: KeyBindings,
    readiness: Readiness,
    config: DispatcherConfig,
    sound: S,
    scene: V,
    rng: StdRng,
}

impl<S: SoundSink, V: SceneFeedbackSink> InputDispatcher<S, V> {
    pub fn new(
        layout: KeyboardLayout,
        bindings: KeyBindings,
        config: DispatcherConfig,
        sound: S,
        scene: V,
    ) -> Self {
        let rng = StdRng::seed_from_u64(config.seed);
        Self {
            layout,
            bindings,
            readiness: Readiness::new(),
            config,
            sound,
            scene,
            rng,
        }
    }

    pub fn layout(&self) -> &KeyboardLayout {
        &self.layout
    }

    pub fn bindings(&self) -> &KeyBindings {
        &self.bindings
    }

    pub fn config(&self) -> &DispatcherConfig {
        &self.config
    }

    pub fn sound(&self) -> &S {
        &self.sound
    }

    pub fn sound_mut(&mut self) -> &mut S {
        &mut self.sound
    }

    pub fn scene(&self) -> &V {
        &self.scene
    }

    #[cfg(test)]
    pub fn scene_mut(&mut self) -> &mut V {
        &mut self.scene
    }

    pub fn relayout(&mut self, width: f32) -> Result<(), LayoutError> {
        self.layout.relayout(width)
    }

    // ---------------- Readiness ----------------

    #[inline]
    pub fn readiness(&self) -> ReadinessState {
        self.readiness.state()
    }

    pub fn begin_load(&mut self) -> Option<LoadTicket> {
        let ticket = self.readiness.begin_load();
        if ticket.is_some() {
            log::info!("[load] sound engine warm-up started");
        }
        ticket
    }

    #[inline]
    pub fn is_current_load(&self, ticket: LoadTicket) -> bool {
        self.readiness.is_current(ticket)
    }

    pub fn on_load_complete(&mut self, ticket: LoadTicket) -> bool {
        let applied = self.readiness.on_load_complete(ticket);
        if applied {
            log::info!("[load] sound engine ready");
        } else {
            log::debug!("[load] ignoring stale load completion");
        }
        applied
    }

    pub fn on_load_failed(&mut self, ticket: LoadTicket) -> bool {
        self.readiness.on_load_failed(ticket)
    }

    pub fn teardown(&mut self) {
        log::info!("[load] session torn down");
        self.readiness.teardown();
    }

    // ---------------- Triggers ----------------

    /// Pointer press on a rendered key.
    pub fn on_pointer_trigger(&mut self, midi: u8) -> Option<PlayEvent> {
        if !self.readiness.is_ready() {
            log::debug!("[pointer] midi {} dropped: engine not ready", midi);
            return None;
        }
        let velocity = self.config.pointer_velocity;
        self.melodic(midi, Source::Pointer, velocity)
    }

    /// Pointer press on a drum pad.
    pub fn on_pad_trigger(&mut self, name: &str) -> Option<PlayEvent> {
        if !self.readiness.is_ready() {
            log::debug!("[pointer] pad {} dropped: engine not ready", name);
            return None;
        }
        self.percussion(name)
    }

    /// Physical key-down, identified by its platform key code (e.g. "KeyA").
    pub fn on_key_trigger(&mut self, code: &str) -> Option<PlayEvent> {
        if !self.readiness.is_ready() {
            log::debug!("[keys] {} dropped: engine not ready", code);
            return None;
        }
        if let Some(note) = self.bindings.percussion.resolve(code) {
            return match note {
                NoteId::Sample(name) => self.percussion(name),
                NoteId::Midi(m) => {
                    let velocity = self.config.drum_velocity;
                    self.melodic(m, Source::Drum, velocity)
                }
            };
        }
        match self.bindings.melodic.resolve(code) {
            Some(NoteId::Midi(m)) => {
                let velocity = self.config.keyboard_velocity;
                self.melodic(m, Source::Keyboard, velocity)
            }
            Some(NoteId::Sample(name)) => self.percussion(name),
            None => {
                log::debug!("[keys] {} is not bound", code);
                None
            }
        }
    }

    fn melodic(&mut self, midi: u8, source: Source, velocity: f32) -> Option<PlayEvent> {
        let Some(slot) = self.layout.slot(midi).copied() else {
            log::debug!("[keys] midi {} has no key slot", midi);
            return None;
        };
        let jitter = self.config.detune_jitter_cents;
        let detune_cents = if jitter > 0.0 {
            self.rng.gen_range(-jitter..=jitter)
        } else {
            0.0
        };
        let event = PlayEvent {
            note: NoteId::Midi(midi),
            position: slot.spawn,
            color: slot.color,
            category: slot.note.category,
            source,
            shape: self.pick_shape(),
            velocity,
            detune_cents,
        };
        self.emit(&event);
        Some(event)
    }

    fn percussion(&mut self, name: &str) -> Option<PlayEvent> {
        let Some(pad) = drum_pad(name) else {
            log::warn!("[keys] no drum pad named {}", name);
            return None;
        };
        let event = PlayEvent {
            note: NoteId::Sample(pad.name),
            position: Vec3::from_array(pad.spawn),
            color: pad.color,
            category: NoteCategory::Percussion,
            source: Source::Drum,
            shape: self.pick_shape(),
            velocity: self.config.drum_velocity,
            detune_cents: 0.0,
        };
        self.emit(&event);
        // the shake is the impact signal; the scene clears it after `shake_duration`
        if let Err(e) = self.scene.shake(self.config.shake_duration) {
            log::warn!("[scene] shake failed: {}", e);
        }
        Some(event)
    }

    fn pick_shape(&mut self) -> LaunchShape {
        if self.rng.gen_bool(0.5) {
            LaunchShape::Cube
        } else {
            LaunchShape::Sphere
        }
    }

    // Sound and scene are independent: a failure in one never skips the other.
    fn emit(&mut self, event: &PlayEvent) {
        log::debug!("[dispatch] {} from {:?}", event.note, event.source);
        if let Err(e) = self
            .sound
            .trigger(event.note, event.velocity, event.detune_cents)
        {
            log::warn!("[audio] trigger {} failed: {}", event.note, e);
        }
        if let Err(e) = self.scene.spawn(event) {
            log::warn!("[scene] spawn {} failed: {}", event.note, e);
        }
    }
}
