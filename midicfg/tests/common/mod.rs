#![allow(dead_code)]

pub mod fixtures;

pub use midicfg::test_support::*;
