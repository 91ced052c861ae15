// Host-side tests for the note catalog.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod instrument {
    pub mod catalog {
        include!("../src/core/catalog.rs");
    }
}

use crate::instrument::catalog::*;

#[test]
fn standard_catalog_is_valid() {
    assert_eq!(validate(natural_notes(), accidental_notes()), Ok(()));
}

#[test]
fn naturals_span_g3_to_g5() {
    let naturals = natural_notes();
    assert_eq!(naturals.len(), 15);
    assert_eq!(naturals[0].midi(), Some(55));
    assert_eq!(naturals[14].midi(), Some(79));
    assert_eq!(naturals[3], Note::natural(60, "C"));
    for n in naturals {
        assert_eq!(n.category, NoteCategory::Natural);
    }
}

#[test]
fn accidental_gaps_fall_on_b_c_and_e_f() {
    let accidentals = accidental_notes();
    assert_eq!(accidentals.len(), natural_notes().len() - 1);
    let absent: Vec<usize> = accidentals
        .iter()
        .enumerate()
        .filter(|(_, a)| a.is_none())
        .map(|(i, _)| i)
        .collect();
    assert_eq!(absent, vec![2, 5, 9, 12]);
    for a in accidentals.iter().flatten() {
        assert_eq!(a.category, NoteCategory::Accidental);
        assert!(a.label.ends_with('#'), "{} should be a sharp", a.label);
    }
}

#[test]
fn melodic_range_is_contiguous() {
    let mut pitches: Vec<u8> = natural_notes()
        .iter()
        .chain(accidental_notes().iter().flatten())
        .filter_map(|n| n.midi())
        .collect();
    pitches.sort_unstable();
    let expected: Vec<u8> = (55..=79).collect();
    assert_eq!(pitches, expected);
}

fn melodic_note(midi: u8) -> Option<Note> {
    natural_notes()
        .iter()
        .copied()
        .chain(accidental_notes().iter().flatten().copied())
        .find(|n| n.midi() == Some(midi))
}

#[test]
fn melodic_note_lookup() {
    assert_eq!(melodic_note(60), Some(Note::natural(60, "C")));
    assert_eq!(melodic_note(61), Some(Note::accidental(61, "C#")));
    assert_eq!(melodic_note(54), None);
    assert_eq!(melodic_note(80), None);
}

#[test]
fn validate_rejects_empty() {
    assert_eq!(validate(&[], &[]), Err(CatalogError::Empty));
}

#[test]
fn validate_rejects_non_monotonic_naturals() {
    let naturals = [Note::natural(60, "C"), Note::natural(59, "B")];
    assert_eq!(
        validate(&naturals, &[None]),
        Err(CatalogError::NotMonotonic { index: 1 })
    );
}

#[test]
fn validate_rejects_non_natural_entries() {
    let naturals = [Note::natural(60, "C"), Note::accidental(61, "C#")];
    assert_eq!(
        validate(&naturals, &[None]),
        Err(CatalogError::NotNatural { index: 1 })
    );
    let pads = [DRUM_PADS[0].note()];
    assert_eq!(validate(&pads, &[]), Err(CatalogError::NotNatural { index: 0 }));
}

#[test]
fn validate_rejects_length_mismatch() {
    let naturals = [Note::natural(60, "C"), Note::natural(62, "D")];
    assert_eq!(
        validate(&naturals, &[]),
        Err(CatalogError::LengthMismatch {
            expected: 1,
            found: 0
        })
    );
}

#[test]
fn validate_checks_gap_markers() {
    let naturals = [
        Note::natural(62, "D"),
        Note::natural(64, "E"),
        Note::natural(65, "F"),
    ];
    // whole tone without a sharp
    assert_eq!(
        validate(&naturals, &[None, None]),
        Err(CatalogError::MissingAccidental { gap: 0 })
    );
    // semitone carrying a sharp
    assert_eq!(
        validate(
            &naturals,
            &[
                Some(Note::accidental(63, "D#")),
                Some(Note::accidental(64, "E#"))
            ]
        ),
        Err(CatalogError::UnexpectedAccidental { gap: 1 })
    );
    // sharp with the wrong pitch
    assert_eq!(
        validate(&naturals, &[Some(Note::accidental(61, "C#")), None]),
        Err(CatalogError::MisplacedAccidental {
            gap: 0,
            expected: 63,
            found: Some(61)
        })
    );
    assert_eq!(
        validate(&naturals, &[Some(Note::accidental(63, "D#")), None]),
        Ok(())
    );
}

#[test]
fn validate_rejects_wide_gaps() {
    let naturals = [Note::natural(60, "C"), Note::natural(64, "E")];
    assert_eq!(
        validate(&naturals, &[Some(Note::accidental(61, "C#"))]),
        Err(CatalogError::GapTooWide { gap: 0 })
    );
}

#[test]
fn drum_pads_are_unique_and_percussive() {
    let pads = drum_pads();
    assert_eq!(pads.len(), 5);
    for (i, a) in pads.iter().enumerate() {
        assert_eq!(a.note().category, NoteCategory::Percussion);
        assert_eq!(a.note().id, NoteId::Sample(a.name));
        for b in &pads[i + 1..] {
            assert_ne!(a.name, b.name);
        }
    }
    assert_eq!(drum_pad("kick").map(|p| p.label), Some("Kick"));
    assert!(drum_pad("cowbell").is_none());
}

#[test]
fn note_id_display() {
    assert_eq!(NoteId::Midi(60).to_string(), "midi:60");
    assert_eq!(NoteId::Sample("kick").to_string(), "sample:kick");
}

#[test]
fn midi_to_hz_matches_a4_and_middle_c() {
    assert!((midi_to_hz(69.0) - 440.0).abs() < 1e-4);
    assert!((midi_to_hz(60.0) - 261.6256).abs() < 1e-2);
    assert!((midi_to_hz(81.0) / midi_to_hz(69.0) - 2.0).abs() < 1e-4);
}

#[test]
fn midi_to_hz_is_monotonic_over_instrument_range() {
    let mut prev = midi_to_hz(55.0);
    for m in 56..=79 {
        let f = midi_to_hz(m as f32);
        assert!(f > prev, "frequency not increasing at midi {m}");
        prev = f;
    }
}
