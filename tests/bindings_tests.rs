// Host-side tests for physical key bindings.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod instrument {
    pub mod bindings {
        include!("../src/core/bindings.rs");
    }
    pub mod catalog {
        include!("../src/core/catalog.rs");
    }
}

use crate::instrument::bindings::*;
use crate::instrument::catalog::*;
use std::collections::HashSet;

fn standard() -> KeyBindings {
    KeyBindings::standard().expect("standard bindings")
}

#[test]
fn melodic_table_covers_full_chromatic_run() {
    let b = standard();
    assert_eq!(b.melodic.len(), 25);
    for m in 55..=79u8 {
        let code = b
            .melodic
            .code_for(NoteId::Midi(m))
            .unwrap_or_else(|| panic!("no code for midi {m}"));
        assert_eq!(b.melodic.resolve(code), Some(NoteId::Midi(m)));
    }
}

#[test]
fn known_codes_resolve() {
    let b = standard();
    assert_eq!(b.melodic.resolve("KeyZ"), Some(NoteId::Midi(55)));
    assert_eq!(b.melodic.resolve("KeyV"), Some(NoteId::Midi(60)));
    assert_eq!(b.melodic.resolve("KeyG"), Some(NoteId::Midi(61)));
    assert_eq!(b.melodic.resolve("KeyE"), Some(NoteId::Midi(76)));
    assert_eq!(b.melodic.resolve("KeyT"), Some(NoteId::Midi(79)));
    assert_eq!(b.percussion.resolve("KeyY"), Some(NoteId::Sample("kick")));
    assert_eq!(b.percussion.resolve("KeyP"), Some(NoteId::Sample("clap")));
}

#[test]
fn unbound_codes_resolve_to_nothing() {
    let b = standard();
    for code in ["KeyA", "KeyF", "KeyJ", "Enter", "Space", "Digit1", "", "keyz"] {
        assert_eq!(b.melodic.resolve(code), None, "{code}");
        assert_eq!(b.percussion.resolve(code), None, "{code}");
        assert_eq!(b.symbol_for(code), None, "{code}");
    }
}

#[test]
fn resolve_is_pure() {
    let b = standard();
    for code in ["KeyV", "KeyY", "KeyA"] {
        let first = (b.melodic.resolve(code), b.percussion.resolve(code));
        for _ in 0..10 {
            assert_eq!((b.melodic.resolve(code), b.percussion.resolve(code)), first);
        }
    }
}

#[test]
fn melodic_and_percussion_tables_are_disjoint() {
    let b = standard();
    let melodic: HashSet<&str> = b.melodic.codes().collect();
    let percussion: HashSet<&str> = b.percussion.codes().collect();
    assert!(melodic.is_disjoint(&percussion));
}

#[test]
fn every_binding_has_a_symbol_and_every_symbol_a_binding() {
    let b = standard();
    for table in [&b.melodic, &b.percussion] {
        let codes: HashSet<&str> = table.codes().collect();
        let symbols: HashSet<&str> = table.symbol_codes().collect();
        assert_eq!(codes, symbols);
        for code in codes {
            assert!(table.resolve(code).is_some());
            assert!(!table.symbol_for(code).unwrap().is_empty());
        }
    }
}

#[test]
fn symbols_match_printed_keys() {
    let b = standard();
    assert_eq!(b.melodic.symbol_for("KeyV"), Some("V"));
    assert_eq!(b.melodic.symbol_for("Comma"), Some(","));
    assert_eq!(b.melodic.symbol_for("Digit2"), Some("2"));
    assert_eq!(b.symbol_for("KeyU"), Some("U"));
    assert_eq!(b.melodic.symbol_for_note(NoteId::Midi(60)), Some("V"));
    assert_eq!(
        b.percussion.symbol_for_note(NoteId::Sample("snare")),
        Some("U")
    );
}

#[test]
fn percussion_bindings_name_catalog_pads() {
    let b = standard();
    for code in b.percussion.codes() {
        match b.percussion.resolve(code) {
            Some(NoteId::Sample(name)) => assert!(drum_pad(name).is_some(), "{name}"),
            other => panic!("{code} resolved to {other:?}"),
        }
    }
    assert_eq!(b.percussion.len(), drum_pads().len());
}

#[test]
fn duplicate_code_is_rejected() {
    let bindings = [
        Binding {
            code: "KeyA",
            note: NoteId::Midi(60),
            symbol: "A",
        },
        Binding {
            code: "KeyA",
            note: NoteId::Midi(62),
            symbol: "A",
        },
    ];
    assert_eq!(
        KeyBindingTable::new(&bindings).unwrap_err(),
        BindingError::DuplicateCode { code: "KeyA" }
    );
}

#[test]
fn shared_code_across_tables_is_rejected() {
    let melodic = [Binding {
        code: "KeyA",
        note: NoteId::Midi(60),
        symbol: "A",
    }];
    let percussion = [Binding {
        code: "KeyA",
        note: NoteId::Sample("kick"),
        symbol: "A",
    }];
    assert_eq!(
        KeyBindings::new(&melodic, &percussion).unwrap_err(),
        BindingError::SharedCode { code: "KeyA" }
    );
}

#[test]
fn empty_code_or_symbol_is_rejected() {
    let no_code = [Binding {
        code: "",
        note: NoteId::Midi(60),
        symbol: "A",
    }];
    assert_eq!(
        KeyBindingTable::new(&no_code).unwrap_err(),
        BindingError::EmptyCode {
            note: NoteId::Midi(60)
        }
    );
    let no_symbol = [Binding {
        code: "KeyA",
        note: NoteId::Midi(60),
        symbol: "",
    }];
    assert_eq!(
        KeyBindingTable::new(&no_symbol).unwrap_err(),
        BindingError::EmptySymbol { code: "KeyA" }
    );
}

#[test]
fn first_code_for_a_note_is_canonical() {
    let bindings = [
        Binding {
            code: "KeyA",
            note: NoteId::Midi(60),
            symbol: "A",
        },
        Binding {
            code: "Numpad1",
            note: NoteId::Midi(60),
            symbol: "1",
        },
    ];
    let table = KeyBindingTable::new(&bindings).unwrap();
    assert_eq!(table.code_for(NoteId::Midi(60)), Some("KeyA"));
    assert_eq!(table.resolve("Numpad1"), Some(NoteId::Midi(60)));
    assert_eq!(table.symbol_for_note(NoteId::Midi(60)), Some("A"));
    assert_eq!(table.code_for(NoteId::Midi(61)), None);
}

#[test]
fn empty_table() {
    let table = KeyBindingTable::new(&[]).unwrap();
    assert!(table.is_empty());
    assert_eq!(table.resolve("KeyA"), None);
}
