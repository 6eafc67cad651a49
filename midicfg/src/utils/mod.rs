//! Small helpers: hex dumps for packet logging and byte parsing.

pub mod hex;

pub use hex::*;
