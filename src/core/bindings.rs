use super::catalog::NoteId;
use fnv::FnvHashMap;
use thiserror::Error;

/// One physical key code bound to a note, with the glyph shown as a hint.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Binding {
    pub code: &'static str,
    pub note: NoteId,
    pub symbol: &'static str,
}

const fn midi(code: &'static str, note: u8, symbol: &'static str) -> Binding {
    Binding {
        code,
        note: NoteId::Midi(note),
        symbol,
    }
}

const fn pad(code: &'static str, sample: &'static str, symbol: &'static str) -> Binding {
    Binding {
        code,
        note: NoteId::Sample(sample),
        symbol,
    }
}

// Lower register on the Z/A rows, upper register on the Q/digit rows
pub const MELODIC_BINDINGS: [Binding; 25] = [
    midi("KeyZ", 55, "Z"),
    midi("KeyS", 56, "S"),
    midi("KeyX", 57, "X"),
    midi("KeyD", 58, "D"),
    midi("KeyC", 59, "C"),
    midi("KeyV", 60, "V"),
    midi("KeyG", 61, "G"),
    midi("KeyB", 62, "B"),
    midi("KeyH", 63, "H"),
    midi("KeyN", 64, "N"),
    midi("KeyM", 65, "M"),
    midi("KeyK", 66, "K"),
    midi("Comma", 67, ","),
    midi("KeyL", 68, "L"),
    midi("Period", 69, "."),
    midi("Semicolon", 70, ";"),
    midi("Slash", 71, "/"),
    midi("KeyQ", 72, "Q"),
    midi("Digit2", 73, "2"),
    midi("KeyW", 74, "W"),
    midi("Digit3", 75, "3"),
    midi("KeyE", 76, "E"),
    midi("KeyR", 77, "R"),
    midi("Digit5", 78, "5"),
    midi("KeyT", 79, "T"),
];

pub const PERCUSSION_BINDINGS: [Binding; 5] = [
    pad("KeyY", "kick", "Y"),
    pad("KeyU", "snare", "U"),
    pad("KeyI", "hihat", "I"),
    pad("KeyO", "openhat", "O"),
    pad("KeyP", "clap", "P"),
];

#[derive(Debug, Error, PartialEq, Eq)]
pub enum BindingError {
    #[error("binding for {note} has an empty code")]
    EmptyCode { note: NoteId },
    #[error("code {code} has an empty display symbol")]
    EmptySymbol { code: &'static str },
    #[error("code {code} is bound more than once")]
    DuplicateCode { code: &'static str },
    #[error("code {code} is bound in both the melodic and percussion tables")]
    SharedCode { code: &'static str },
}

/// Code -> note and code -> symbol lookups, plus the canonical code for each
/// note. All three maps are built together from the same binding list.
#[derive(Clone, Debug, Default)]
pub struct KeyBindingTable {
    notes: FnvHashMap<&'static str, NoteId>,
    symbols: FnvHashMap<&'static str, &'static str>,
    codes: FnvHashMap<NoteId, &'static str>,
}

impl KeyBindingTable {
    pub fn new(bindings: &[Binding]) -> Result<Self, BindingError> {
        let mut table = Self::default();
        for b in bindings {
            if b.code.is_empty() {
                return Err(BindingError::EmptyCode { note: b.note });
            }
            if b.symbol.is_empty() {
                return Err(BindingError::EmptySymbol { code: b.code });
            }
            if table.notes.insert(b.code, b.note).is_some() {
                return Err(BindingError::DuplicateCode { code: b.code });
            }
            table.symbols.insert(b.code, b.symbol);
            // first code bound to a note is the one shown as its hint
            table.codes.entry(b.note).or_insert(b.code);
        }
        Ok(table)
    }

    #[inline]
    pub fn resolve(&self, code: &str) -> Option<NoteId> {
        self.notes.get(code).copied()
    }

    #[inline]
    pub fn symbol_for(&self, code: &str) -> Option<&'static str> {
        self.symbols.get(code).copied()
    }

    #[inline]
    pub fn code_for(&self, note: NoteId) -> Option<&'static str> {
        self.codes.get(&note).copied()
    }

    /// Hint glyph for a note, via its canonical code.
    pub fn symbol_for_note(&self, note: NoteId) -> Option<&'static str> {
        self.code_for(note).and_then(|c| self.symbol_for(c))
    }

    #[inline]
    pub fn contains(&self, code: &str) -> bool {
        self.notes.contains_key(code)
    }

    pub fn codes(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.notes.keys().copied()
    }

    #[cfg(test)]
    pub fn symbol_codes(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.symbols.keys().copied()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.notes.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.notes.is_empty()
    }
}

/// The melodic and percussion tables, checked to share no code.
#[derive(Clone, Debug)]
pub struct KeyBindings {
    pub melodic: KeyBindingTable,
    pub percussion: KeyBindingTable,
}

impl KeyBindings {
    pub fn new(melodic: &[Binding], percussion: &[Binding]) -> Result<Self, BindingError> {
        let melodic = KeyBindingTable::new(melodic)?;
        let percussion = KeyBindingTable::new(percussion)?;
        if let Some(code) = percussion.codes().find(|c| melodic.contains(c)) {
            return Err(BindingError::SharedCode { code });
        }
        Ok(Self {
            melodic,
            percussion,
        })
    }

    pub fn standard() -> Result<Self, BindingError> {
        Self::new(&MELODIC_BINDINGS, &PERCUSSION_BINDINGS)
    }

    /// Hint glyph for any bound code, melodic or percussion.
    pub fn symbol_for(&self, code: &str) -> Option<&'static str> {
        self.percussion
            .symbol_for(code)
            .or_else(|| self.melodic.symbol_for(code))
    }
}
