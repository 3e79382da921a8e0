//! Instrument definitions for European FX and equity options.

pub mod option;

pub use option::{OptionKind, OptionSpec};
