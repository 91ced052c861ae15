use std::fmt;
use thiserror::Error;

/// Stable identity of a playable sound: a MIDI pitch or a percussion sample name.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum NoteId {
    Midi(u8),
    Sample(&'static str),
}

impl fmt::Display for NoteId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NoteId::Midi(m) => write!(f, "midi:{m}"),
            NoteId::Sample(name) => write!(f, "sample:{name}"),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum NoteCategory {
    Natural,
    Accidental,
    Percussion,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Note {
    pub id: NoteId,
    pub label: &'static str,
    pub category: NoteCategory,
}

impl Note {
    pub const fn natural(midi: u8, label: &'static str) -> Self {
        Self {
            id: NoteId::Midi(midi),
            label,
            category: NoteCategory::Natural,
        }
    }

    pub const fn accidental(midi: u8, label: &'static str) -> Self {
        Self {
            id: NoteId::Midi(midi),
            label,
            category: NoteCategory::Accidental,
        }
    }

    pub fn midi(&self) -> Option<u8> {
        match self.id {
            NoteId::Midi(m) => Some(m),
            NoteId::Sample(_) => None,
        }
    }
}

// G3..G5, two octaves plus a fifth
pub const NATURAL_NOTES: [Note; 15] = [
    Note::natural(55, "G"),
    Note::natural(57, "A"),
    Note::natural(59, "B"),
    Note::natural(60, "C"),
    Note::natural(62, "D"),
    Note::natural(64, "E"),
    Note::natural(65, "F"),
    Note::natural(67, "G"),
    Note::natural(69, "A"),
    Note::natural(71, "B"),
    Note::natural(72, "C"),
    Note::natural(74, "D"),
    Note::natural(76, "E"),
    Note::natural(77, "F"),
    Note::natural(79, "G"),
];

// One slot per gap between neighbouring naturals; None at B-C and E-F
pub const ACCIDENTAL_NOTES: [Option<Note>; 14] = [
    Some(Note::accidental(56, "G#")),
    Some(Note::accidental(58, "A#")),
    None,
    Some(Note::accidental(61, "C#")),
    Some(Note::accidental(63, "D#")),
    None,
    Some(Note::accidental(66, "F#")),
    Some(Note::accidental(68, "G#")),
    Some(Note::accidental(70, "A#")),
    None,
    Some(Note::accidental(73, "C#")),
    Some(Note::accidental(75, "D#")),
    None,
    Some(Note::accidental(78, "F#")),
];

/// A percussion pad: sample name plus the fixed spot its flourish launches from.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DrumPad {
    pub name: &'static str,
    pub label: &'static str,
    pub color: &'static str,
    pub spawn: [f32; 3],
}

impl DrumPad {
    pub const fn note(&self) -> Note {
        Note {
            id: NoteId::Sample(self.name),
            label: self.label,
            category: NoteCategory::Percussion,
        }
    }
}

pub const DRUM_PADS: [DrumPad; 5] = [
    DrumPad {
        name: "kick",
        label: "Kick",
        color: "#FF4500",
        spawn: [-4.0, -2.5, 1.0],
    },
    DrumPad {
        name: "snare",
        label: "Snare",
        color: "#F5F5F5",
        spawn: [-2.0, -2.5, 1.0],
    },
    DrumPad {
        name: "hihat",
        label: "Hi-hat",
        color: "#FFD700",
        spawn: [0.0, -2.5, 1.0],
    },
    DrumPad {
        name: "openhat",
        label: "Open hat",
        color: "#ADFF2F",
        spawn: [2.0, -2.5, 1.0],
    },
    DrumPad {
        name: "clap",
        label: "Clap",
        color: "#DA70D6",
        spawn: [4.0, -2.5, 1.0],
    },
];

#[inline]
pub fn natural_notes() -> &'static [Note] {
    &NATURAL_NOTES
}

#[inline]
pub fn accidental_notes() -> &'static [Option<Note>] {
    &ACCIDENTAL_NOTES
}

#[inline]
pub fn drum_pads() -> &'static [DrumPad] {
    &DRUM_PADS
}

pub fn drum_pad(name: &str) -> Option<&'static DrumPad> {
    DRUM_PADS.iter().find(|p| p.name == name)
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CatalogError {
    #[error("catalog has no natural notes")]
    Empty,
    #[error("natural note at index {index} is not a melodic natural")]
    NotNatural { index: usize },
    #[error("natural notes not strictly increasing at index {index}")]
    NotMonotonic { index: usize },
    #[error("expected {expected} accidental slots, found {found}")]
    LengthMismatch { expected: usize, found: usize },
    #[error("gap {gap} spans more than a whole tone")]
    GapTooWide { gap: usize },
    #[error("gap {gap} is a whole tone but has no accidental")]
    MissingAccidental { gap: usize },
    #[error("gap {gap} is a semitone but carries an accidental")]
    UnexpectedAccidental { gap: usize },
    #[error("accidental at gap {gap} should be midi {expected}, found {found:?}")]
    MisplacedAccidental {
        gap: usize,
        expected: u8,
        found: Option<u8>,
    },
}

/// Check the catalog shape: strictly increasing naturals, one accidental slot
/// per gap, and absent markers exactly at the semitone gaps.
pub fn validate(naturals: &[Note], accidentals: &[Option<Note>]) -> Result<(), CatalogError> {
    if naturals.is_empty() {
        return Err(CatalogError::Empty);
    }
    let mut pitches = Vec::with_capacity(naturals.len());
    for (index, n) in naturals.iter().enumerate() {
        match (n.category, n.midi()) {
            (NoteCategory::Natural, Some(m)) => pitches.push(m),
            _ => return Err(CatalogError::NotNatural { index }),
        }
    }
    for index in 1..pitches.len() {
        if pitches[index] <= pitches[index - 1] {
            return Err(CatalogError::NotMonotonic { index });
        }
    }
    let expected = naturals.len() - 1;
    if accidentals.len() != expected {
        return Err(CatalogError::LengthMismatch {
            expected,
            found: accidentals.len(),
        });
    }
    for (gap, slot) in accidentals.iter().enumerate() {
        let lo = pitches[gap];
        match (pitches[gap + 1] - lo, slot) {
            (1, None) => {}
            (1, Some(_)) => return Err(CatalogError::UnexpectedAccidental { gap }),
            (2, None) => return Err(CatalogError::MissingAccidental { gap }),
            (2, Some(a)) => {
                let found = a.midi();
                if a.category != NoteCategory::Accidental || found != Some(lo + 1) {
                    return Err(CatalogError::MisplacedAccidental {
                        gap,
                        expected: lo + 1,
                        found,
                    });
                }
            }
            _ => return Err(CatalogError::GapTooWide { gap }),
        }
    }
    Ok(())
}

pub fn midi_to_hz(midi: f32) -> f32 {
    440.0 * (2.0_f32).powf((midi - 69.0) / 12.0)
}
