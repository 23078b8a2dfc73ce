//! Conformance test helpers for the vtb testbench generator.
//!
//! Provides pipeline functions that run VHDL source text through extraction
//! and emission with a frozen clock, so integration tests can compare output
//! byte for byte.

#![warn(missing_docs)]

use chrono::{NaiveDate, NaiveDateTime};
use vtb_config::VtbConfig;
use vtb_emit::{FixedClock, HarnessEmitter, HarnessOptions};
use vtb_interface::InterfaceDescription;

/// The timestamp every conformance harness is stamped with, as rendered.
pub const FIXED_TIMESTAMP: &str = "2024-01-01 12:00:00";

/// Result of running the extract → emit pipeline.
pub struct PipelineResult {
    /// The extracted interface.
    pub interface: InterfaceDescription,
    /// The rendered testbench.
    pub harness: String,
}

/// Returns the instant matching [`FIXED_TIMESTAMP`].
pub fn fixed_instant() -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2024, 1, 1)
        .and_then(|d| d.and_hms_opt(12, 0, 0))
        .expect("fixed conformance instant is a valid date")
}

/// Creates an emitter with default options and a frozen clock.
pub fn fixed_emitter() -> HarnessEmitter<FixedClock> {
    fixed_emitter_with(HarnessOptions::default())
}

/// Creates an emitter with the given options and a frozen clock.
pub fn fixed_emitter_with(options: HarnessOptions) -> HarnessEmitter<FixedClock> {
    HarnessEmitter::with_clock(FixedClock(fixed_instant()), options)
}

/// Runs `source` through extraction and emission with default options.
pub fn generate_fixed(source: &str) -> PipelineResult {
    run_pipeline(source, &fixed_emitter())
}

/// Runs `source` through extraction and emission using options from a
/// `vtb.toml` document.
pub fn generate_with_config(source: &str, config_toml: &str) -> PipelineResult {
    let config: VtbConfig = vtb_config::load_config_from_str(config_toml)
        .unwrap_or_else(|e| panic!("invalid test configuration: {e}"));
    run_pipeline(source, &fixed_emitter_with(config.harness_options()))
}

fn run_pipeline(source: &str, emitter: &HarnessEmitter<FixedClock>) -> PipelineResult {
    let interface = vtb_extract::extract(source);
    let harness = emitter.emit(&interface);
    PipelineResult { interface, harness }
}

/// Returns the lines of `harness` that lie between `start` (inclusive) and the
/// next line equal to `end` (inclusive).
pub fn section<'a>(harness: &'a str, start: &str, end: &str) -> Vec<&'a str> {
    harness
        .lines()
        .skip_while(|l| l.trim() != start)
        .scan(false, |done, l| {
            if *done {
                return None;
            }
            *done = l.trim() == end;
            Some(l)
        })
        .collect()
}
