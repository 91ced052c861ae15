pub mod keyboard;
pub mod pointer;

pub use keyboard::wire_global_keydown;
pub use pointer::{wire_key_pointerdown, wire_pad_pointerdown};
