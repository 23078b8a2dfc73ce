//! The structural interface of a VHDL entity.
//!
//! An [`InterfaceDescription`] is the value passed from the extractor to the
//! harness emitter: the entity name, its generic parameters and its ports, each
//! in source order. Nothing here knows how the description was produced.

#![warn(missing_docs)]

pub mod description;
pub mod generic;
pub mod port;

pub use description::InterfaceDescription;
pub use generic::GenericParam;
pub use port::{ParseDirectionError, Port, PortDirection};
