//! Renders a VHDL testbench skeleton from an [`InterfaceDescription`].
//!
//! The generated harness declares a `<entity>_tb` entity, a component and
//! signals mirroring the interface, a `UUT` instance wired to those signals,
//! a free-running clock process when a clock port is present, and an empty
//! stimulus process to be filled in by hand.
//!
//! Output is deterministic apart from the generation timestamp in the header.
//! Use [`HarnessEmitter::with_clock`] and a [`FixedClock`] to pin it.
//!
//! [`InterfaceDescription`]: vtb_interface::InterfaceDescription

#![warn(missing_docs)]

pub mod clock;
pub mod harness;
pub mod options;

pub use clock::{Clock, FixedClock, SystemClock, TIMESTAMP_FORMAT};
pub use harness::HarnessEmitter;
pub use options::HarnessOptions;

use vtb_interface::InterfaceDescription;

/// Renders a testbench for `desc` with default options and the system clock.
pub fn emit(desc: &InterfaceDescription) -> String {
    HarnessEmitter::new(HarnessOptions::default()).emit(desc)
}
