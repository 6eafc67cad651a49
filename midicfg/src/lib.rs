// midicfg-rs/midicfg/src/lib.rs

//! midicfg
//!
//! Configuration channel for composite USB MIDI controllers: finds the
//! vendor interface next to the class-owned MIDI function and pushes
//! settings to it, committing them to flash last.
#![warn(missing_docs)]

pub mod constants;
pub mod device;
pub mod error;
pub mod prelude;
pub mod protocol;
pub mod test_support;
pub mod transport;
pub mod types;
pub mod utils;

// Re-export common types at crate root so `crate::Error`, `crate::Result`,
// and the newtypes in `types` are available for consumers and for
// convenient `prelude` re-exports.
pub use crate::error::*;
pub use crate::types::*;

pub use prelude::*;
