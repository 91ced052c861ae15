// Host-side tests for constants and their relationships.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod constants {
    include!("../src/constants.rs");
}
mod core_constants {
    include!("../src/core/constants.rs");
}

use constants::*;
use core_constants::*;
use std::time::Duration;

fn is_hex_color(s: &str) -> bool {
    s.len() == 7 && s.starts_with('#') && s[1..].chars().all(|c| c.is_ascii_hexdigit())
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn key_geometry_fits_the_container() {
    assert!(CONTAINER_WIDTH > 0.0);
    assert!(NATURAL_KEY_WIDTH > ACCIDENTAL_KEY_WIDTH);
    assert!(NATURAL_KEY_HEIGHT > ACCIDENTAL_KEY_HEIGHT);
    // accidentals sit on top of the naturals, not beside them
    assert!(ACCIDENTAL_KEY_BOTTOM > NATURAL_KEY_BOTTOM);
    assert!(ACCIDENTAL_KEY_BOTTOM + ACCIDENTAL_KEY_HEIGHT <= NATURAL_KEY_BOTTOM + NATURAL_KEY_HEIGHT);
    // 15 naturals at the default width do not overlap
    assert!(NATURAL_KEY_WIDTH < CONTAINER_WIDTH / 15.0);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn spawn_rows_are_distinct() {
    assert!(SPAWN_X_SPAN > 0.0);
    assert!(ACCIDENTAL_SPAWN_DEPTH < NATURAL_SPAWN_DEPTH);
}

#[test]
fn palette_entries_are_hex_colors() {
    for c in PALETTE {
        assert!(is_hex_color(c), "{c}");
    }
    assert!(is_hex_color(ACCIDENTAL_COLOR));
    assert!(!PALETTE.contains(&ACCIDENTAL_COLOR));
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn feedback_is_short() {
    assert!(SHAKE_DURATION > Duration::ZERO);
    assert!(SHAKE_DURATION <= Duration::from_millis(500));
    assert!(LABEL_BRIGHTNESS_THRESHOLD > 0.0 && LABEL_BRIGHTNESS_THRESHOLD < 255.0);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn velocities_are_normalized() {
    for v in [POINTER_VELOCITY, KEYBOARD_VELOCITY, DRUM_VELOCITY] {
        assert!(v > 0.0 && v <= 1.0);
    }
    assert!(DETUNE_JITTER_CENTS >= 0.0 && DETUNE_JITTER_CENTS < 50.0);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn synth_voicing_is_sane() {
    assert!(MASTER_GAIN > 0.0 && MASTER_GAIN <= 1.0);
    assert!(BAR_ATTACK_SEC < BAR_DECAY_SEC);
    assert!(BAR_PEAK_GAIN + BAR_OVERTONE_GAIN <= 1.0);
    assert!(KICK_END_HZ < KICK_START_HZ);
    assert!(HAT_SEC < OPEN_HAT_SEC);
    assert!(BEEP_SEC > 0.0 && BEEP_GAIN > 0.0);
    assert!(NOISE_SECONDS as f64 >= OPEN_HAT_SEC);
}
