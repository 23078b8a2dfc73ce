//! Tunable constants of the generated harness.

use vtb_common::TimeValue;

/// Timing values written into the harness.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HarnessOptions {
    /// Value of the `clk_period` constant.
    pub clock_period: TimeValue,
    /// How long the stimulus process waits before the stimulus region.
    pub settle_time: TimeValue,
}

impl HarnessOptions {
    /// Default clock period, `10 ns`.
    pub const DEFAULT_CLOCK_PERIOD: TimeValue = TimeValue::ns(10);
    /// Default settle window, `100 ns`.
    pub const DEFAULT_SETTLE_TIME: TimeValue = TimeValue::ns(100);
}

impl Default for HarnessOptions {
    fn default() -> Self {
        Self {
            clock_period: Self::DEFAULT_CLOCK_PERIOD,
            settle_time: Self::DEFAULT_SETTLE_TIME,
        }
    }
}
