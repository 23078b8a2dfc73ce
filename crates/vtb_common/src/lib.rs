//! Shared foundational types used across the vtb testbench generator.
//!
//! Currently this is the VHDL physical time literal used for clock periods
//! and settle windows in generated harnesses.

#![warn(missing_docs)]

pub mod time;

pub use time::{ParseTimeError, TimeUnit, TimeValue};
