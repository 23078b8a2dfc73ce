//! Configuration types deserialized from `vtb.toml`.

use serde::Deserialize;
use vtb_common::TimeValue;
use vtb_emit::HarnessOptions;

/// The top-level configuration parsed from `vtb.toml`.
#[derive(Debug, Default, Deserialize)]
pub struct VtbConfig {
    /// Timing values written into generated harnesses.
    #[serde(default)]
    pub harness: HarnessConfig,
    /// Naming of the generated files.
    #[serde(default)]
    pub output: OutputConfig,
}

impl VtbConfig {
    /// Returns the emitter options described by the `[harness]` table.
    pub fn harness_options(&self) -> HarnessOptions {
        HarnessOptions {
            clock_period: self.harness.clock_period,
            settle_time: self.harness.settle_time,
        }
    }
}

/// The `[harness]` table.
#[derive(Debug, Deserialize)]
pub struct HarnessConfig {
    /// Value of the `clk_period` constant (e.g. `"10 ns"`).
    #[serde(default = "default_clock_period")]
    pub clock_period: TimeValue,
    /// Settle window before the stimulus region (e.g. `"100 ns"`).
    #[serde(default = "default_settle_time")]
    pub settle_time: TimeValue,
}

impl Default for HarnessConfig {
    fn default() -> Self {
        Self {
            clock_period: default_clock_period(),
            settle_time: default_settle_time(),
        }
    }
}

fn default_clock_period() -> TimeValue {
    HarnessOptions::DEFAULT_CLOCK_PERIOD
}

fn default_settle_time() -> TimeValue {
    HarnessOptions::DEFAULT_SETTLE_TIME
}

/// The `[output]` table.
#[derive(Debug, Deserialize)]
pub struct OutputConfig {
    /// Inserted between the input file stem and the extension.
    #[serde(default = "default_suffix")]
    pub suffix: String,
    /// Extension of generated files, without the dot.
    ///
    /// When unset, the input file's own extension is reused.
    #[serde(default)]
    pub extension: Option<String>,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            suffix: default_suffix(),
            extension: None,
        }
    }
}

fn default_suffix() -> String {
    "_tb".to_string()
}
