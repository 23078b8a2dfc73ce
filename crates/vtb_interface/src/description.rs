//! The interface description passed from the extractor to the emitter.

use serde::{Deserialize, Serialize};

use crate::generic::GenericParam;
use crate::port::Port;

/// Suffix appended to the entity name to form the harness entity name.
pub const HARNESS_SUFFIX: &str = "_tb";

/// The declared interface of a single entity.
///
/// Two descriptions with the same fields are interchangeable. An empty entity
/// name means no entity declaration was found; it is still a valid value and
/// produces a harness named `_tb`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct InterfaceDescription {
    /// The entity identifier, or empty if none was found.
    pub entity_name: String,
    /// Generic parameters in order of appearance.
    pub generics: Vec<GenericParam>,
    /// Ports in order of appearance.
    pub ports: Vec<Port>,
}

impl InterfaceDescription {
    /// Creates an empty description for the named entity.
    pub fn new(entity_name: impl Into<String>) -> Self {
        Self {
            entity_name: entity_name.into(),
            generics: Vec::new(),
            ports: Vec::new(),
        }
    }

    /// Appends a generic parameter, returning `self` for chaining.
    pub fn with_generic(mut self, generic: GenericParam) -> Self {
        self.generics.push(generic);
        self
    }

    /// Appends a port, returning `self` for chaining.
    pub fn with_port(mut self, port: Port) -> Self {
        self.ports.push(port);
        self
    }

    /// Returns the name of the generated harness entity (`<entity>_tb`).
    pub fn harness_name(&self) -> String {
        format!("{}{HARNESS_SUFFIX}", self.entity_name)
    }

    /// Returns `true` if no entity declaration was recovered.
    pub fn is_anonymous(&self) -> bool {
        self.entity_name.is_empty()
    }

    /// Returns the first port whose name marks it as a clock.
    pub fn clock_port(&self) -> Option<&Port> {
        self.ports.iter().find(|p| p.is_clock())
    }

    /// Returns `true` if any port is a clock.
    pub fn has_clock(&self) -> bool {
        self.clock_port().is_some()
    }

    /// Returns `true` if any port is a reset.
    pub fn has_reset(&self) -> bool {
        self.ports.iter().any(|p| p.is_reset())
    }
}
