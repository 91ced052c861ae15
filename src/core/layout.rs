use super::catalog::{Note, NoteCategory};
use super::constants::*;
use fnv::FnvHashMap;
use glam::Vec3;
use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum LayoutError {
    #[error("layout needs at least one natural note")]
    NoNaturals,
    #[error("container width must be positive and finite, got {0}")]
    BadWidth(f32),
    #[error("expected {expected} accidental slots, found {found}")]
    AccidentalCount { expected: usize, found: usize },
    #[error("note {label} has no midi pitch and cannot be placed on the keyboard")]
    NotMelodic { label: &'static str },
}

#[inline]
pub fn spacing(count: usize, width: f32) -> f32 {
    width / count as f32
}

/// Center of natural key `index`.
#[inline]
pub fn natural_offset(index: usize, spacing: f32) -> f32 {
    spacing * index as f32 + spacing / 2.0
}

/// Center of the accidental in gap `gap`, i.e. on the boundary between
/// naturals `gap` and `gap + 1`.
#[inline]
pub fn accidental_offset(gap: usize, spacing: f32) -> f32 {
    spacing * gap as f32 + spacing
}

/// World-space launch point for a key centered at `offset` in a container of `width`.
///
/// The offset is normalized by `width`, so the spawn row keeps the same world
/// extent whatever units the container is measured in.
pub fn spawn_position(offset: f32, width: f32, category: NoteCategory) -> Vec3 {
    let depth = match category {
        NoteCategory::Accidental => ACCIDENTAL_SPAWN_DEPTH,
        _ => NATURAL_SPAWN_DEPTH,
    };
    Vec3::new((offset / width - 0.5) * SPAWN_X_SPAN, SPAWN_HEIGHT, depth)
}

fn parse_hex_rgb(hex: &str) -> Option<[u8; 3]> {
    let digits = hex.strip_prefix('#')?;
    if digits.len() != 6 || !digits.is_ascii() {
        return None;
    }
    let channel = |i: usize| u8::from_str_radix(&digits[i..i + 2], 16).ok();
    Some([channel(0)?, channel(2)?, channel(4)?])
}

/// Pick a readable label colour for text drawn on `hex`.
pub fn label_color(hex: &str) -> &'static str {
    match parse_hex_rgb(hex) {
        Some([r, g, b]) => {
            let brightness = (r as f32 * 299.0 + g as f32 * 587.0 + b as f32 * 114.0) / 1000.0;
            if brightness > LABEL_BRIGHTNESS_THRESHOLD {
                "black"
            } else {
                "white"
            }
        }
        None => "white",
    }
}

/// A positioned key. Geometry is in percent of the container.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct KeySlot {
    pub midi: u8,
    pub note: Note,
    pub offset: f32,
    pub width: f32,
    pub height: f32,
    pub bottom: f32,
    pub color: &'static str,
    pub label_color: &'static str,
    pub spawn: Vec3,
}

impl KeySlot {
    #[inline]
    pub fn is_accidental(&self) -> bool {
        self.note.category == NoteCategory::Accidental
    }
}

/// Key slots derived from the catalog for one container width.
#[derive(Clone, Debug)]
pub struct KeyboardLayout {
    naturals: Vec<Note>,
    accidentals: Vec<Option<Note>>,
    width: f32,
    spacing: f32,
    slots: Vec<KeySlot>,
    by_midi: FnvHashMap<u8, usize>,
}

impl KeyboardLayout {
    pub fn resolve(
        naturals: &[Note],
        accidentals: &[Option<Note>],
        width: f32,
    ) -> Result<Self, LayoutError> {
        let mut layout = Self {
            naturals: naturals.to_vec(),
            accidentals: accidentals.to_vec(),
            width,
            spacing: 0.0,
            slots: Vec::new(),
            by_midi: FnvHashMap::default(),
        };
        layout.rebuild()?;
        Ok(layout)
    }

    /// Recompute slots for a new container width. No-op when unchanged.
    pub fn relayout(&mut self, width: f32) -> Result<(), LayoutError> {
        if width == self.width && !self.slots.is_empty() {
            return Ok(());
        }
        let previous = self.width;
        self.width = width;
        if let Err(e) = self.rebuild() {
            self.width = previous;
            return Err(e);
        }
        Ok(())
    }

    fn rebuild(&mut self) -> Result<(), LayoutError> {
        let count = self.naturals.len();
        if count == 0 {
            return Err(LayoutError::NoNaturals);
        }
        if !self.width.is_finite() || self.width <= 0.0 {
            return Err(LayoutError::BadWidth(self.width));
        }
        if self.accidentals.len() != count - 1 {
            return Err(LayoutError::AccidentalCount {
                expected: count - 1,
                found: self.accidentals.len(),
            });
        }

        let spacing = spacing(count, self.width);
        let mut slots = Vec::with_capacity(count * 2);
        for (i, note) in self.naturals.iter().enumerate() {
            let offset = natural_offset(i, spacing);
            let color = PALETTE[i % PALETTE.len()];
            slots.push(KeySlot {
                midi: note.midi().ok_or(LayoutError::NotMelodic { label: note.label })?,
                note: *note,
                offset,
                width: NATURAL_KEY_WIDTH,
                height: NATURAL_KEY_HEIGHT,
                bottom: NATURAL_KEY_BOTTOM,
                color,
                label_color: label_color(color),
                spawn: spawn_position(offset, self.width, NoteCategory::Natural),
            });
        }
        // absent slots mark the semitone gaps and produce no key
        for (gap, note) in self.accidentals.iter().enumerate() {
            let Some(note) = note else { continue };
            let offset = accidental_offset(gap, spacing);
            slots.push(KeySlot {
                midi: note.midi().ok_or(LayoutError::NotMelodic { label: note.label })?,
                note: *note,
                offset,
                width: ACCIDENTAL_KEY_WIDTH,
                height: ACCIDENTAL_KEY_HEIGHT,
                bottom: ACCIDENTAL_KEY_BOTTOM,
                color: ACCIDENTAL_COLOR,
                label_color: "white",
                spawn: spawn_position(offset, self.width, NoteCategory::Accidental),
            });
        }

        self.by_midi = slots
            .iter()
            .enumerate()
            .map(|(i, s)| (s.midi, i))
            .collect();
        self.slots = slots;
        self.spacing = spacing;
        Ok(())
    }

    #[inline]
    pub fn width(&self) -> f32 {
        self.width
    }

    #[inline]
    pub fn spacing(&self) -> f32 {
        self.spacing
    }

    /// Naturals first (left to right), then accidentals.
    #[inline]
    pub fn slots(&self) -> &[KeySlot] {
        &self.slots
    }

    pub fn slot(&self, midi: u8) -> Option<&KeySlot> {
        self.by_midi.get(&midi).map(|&i| &self.slots[i])
    }

    pub fn naturals(&self) -> impl Iterator<Item = &KeySlot> {
        self.slots.iter().filter(|s| !s.is_accidental())
    }

    pub fn accidentals(&self) -> impl Iterator<Item = &KeySlot> {
        self.slots.iter().filter(|s| s.is_accidental())
    }
}
