use std::time::Duration;

// Shared layout/feedback constants for the instrument core.

// Layout
pub const CONTAINER_WIDTH: f32 = 100.0; // normalized container width (percent units)

// Key geometry, in percent of the container
pub const NATURAL_KEY_WIDTH: f32 = 6.0;
pub const NATURAL_KEY_HEIGHT: f32 = 30.0;
pub const NATURAL_KEY_BOTTOM: f32 = 1.0;
pub const ACCIDENTAL_KEY_WIDTH: f32 = 4.0;
pub const ACCIDENTAL_KEY_HEIGHT: f32 = 15.0;
pub const ACCIDENTAL_KEY_BOTTOM: f32 = 16.0;

// Spawn placement: the container maps onto SPAWN_X_SPAN world units centred on x = 0
pub const SPAWN_X_SPAN: f32 = 10.0;
pub const SPAWN_HEIGHT: f32 = -2.0; // launched objects start just above the keys
pub const NATURAL_SPAWN_DEPTH: f32 = 0.0;
pub const ACCIDENTAL_SPAWN_DEPTH: f32 = -1.0; // black keys sit one row behind

// Palette cycled across natural keys
pub const PALETTE: [&str; 7] = [
    "#00FFFF", // cyan
    "#0000FF", // blue
    "#FF1493", // dark pink
    "#FF0000", // red
    "#FFA500", // orange
    "#FFFF00", // yellow
    "#00FF00", // green
];
pub const ACCIDENTAL_COLOR: &str = "#333333";

// Label contrast threshold on perceived brightness (0..255)
pub const LABEL_BRIGHTNESS_THRESHOLD: f32 = 128.0;

// Feedback
pub const SHAKE_DURATION: Duration = Duration::from_millis(150);

// Trigger dynamics
pub const POINTER_VELOCITY: f32 = 0.8;
pub const KEYBOARD_VELOCITY: f32 = 0.8;
pub const DRUM_VELOCITY: f32 = 1.0;
pub const DETUNE_JITTER_CENTS: f32 = 6.0; // +/- humanization applied to melodic notes
pub const DEFAULT_SEED: u64 = 42;
