/// Browser-side constants: DOM hooks and synth voicing.
///
/// Layout and feedback tuning shared with the core lives in
/// `core::constants`; everything here only matters to the web front-end.
// DOM element ids
pub const STAGE_ID: &str = "stage";
pub const KEYBOARD_ID: &str = "xylophone";
pub const DRUM_PADS_ID: &str = "drum-pads";
pub const OVERLAY_ID: &str = "start-overlay";
pub const OVERLAY_BUTTON_ID: &str = "overlay-start";
pub const OVERLAY_MESSAGE_ID: &str = "overlay-message";

// CSS classes
pub const SHAKE_CLASS: &str = "shake";
pub const HIDDEN_CLASS: &str = "hidden";

// Event the scene renderer listens for
pub const SPAWN_EVENT: &str = "xylophone:spawn";

// Master bus
pub const MASTER_GAIN: f32 = 0.5;

// Bar voice: fast attack, ringing exponential-ish decay
pub const BAR_ATTACK_SEC: f64 = 0.005;
pub const BAR_DECAY_SEC: f64 = 1.2;
pub const BAR_PEAK_GAIN: f32 = 0.35;
pub const BAR_OVERTONE_RATIO: f32 = 4.0; // bright partial typical of struck bars
pub const BAR_OVERTONE_GAIN: f32 = 0.08;

// Warm-up confirmation beep (440 Hz for 200 ms)
pub const BEEP_HZ: f32 = 440.0;
pub const BEEP_SEC: f64 = 0.2;
pub const BEEP_GAIN: f32 = 0.1;

// Drum voices
pub const NOISE_SECONDS: f32 = 1.0;
pub const KICK_START_HZ: f32 = 150.0;
pub const KICK_END_HZ: f32 = 45.0;
pub const KICK_SEC: f64 = 0.35;
pub const SNARE_SEC: f64 = 0.2;
pub const SNARE_TONE_HZ: f32 = 1800.0;
pub const HAT_SEC: f64 = 0.06;
pub const OPEN_HAT_SEC: f64 = 0.4;
pub const HAT_TONE_HZ: f32 = 7000.0;
pub const CLAP_SEC: f64 = 0.18;
pub const CLAP_TONE_HZ: f32 = 1200.0;
