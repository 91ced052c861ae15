pub mod bindings;
pub mod catalog;
pub mod constants;
pub mod dispatch;
pub mod layout;
pub mod readiness;

pub use bindings::*;
pub use catalog::*;
pub use constants::*;
pub use dispatch::*;
pub use layout::*;
pub use readiness::*;
