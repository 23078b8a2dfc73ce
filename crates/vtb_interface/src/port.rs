//! Port definitions for entity interfaces.
//!
//! A [`Port`] is one signal in an entity's external interface, with a
//! direction and the type text exactly as it appeared in the source.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Name prefixes (lowercase) that mark a port as a clock.
const CLOCK_PREFIXES: [&str; 2] = ["clk", "clock"];

/// Name prefixes (lowercase) that mark a port as a reset.
const RESET_PREFIXES: [&str; 2] = ["rst", "reset"];

/// The direction of a port on an entity boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PortDirection {
    /// `in`: data flows into the entity.
    In,
    /// `out`: data flows out of the entity.
    Out,
    /// `inout`: data flows both ways.
    InOut,
}

impl PortDirection {
    /// Returns the VHDL mode keyword for this direction.
    pub fn as_str(&self) -> &'static str {
        match self {
            PortDirection::In => "in",
            PortDirection::Out => "out",
            PortDirection::InOut => "inout",
        }
    }
}

impl fmt::Display for PortDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when a string is not a recognized port mode keyword.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseDirectionError {
    /// The rejected input.
    pub input: String,
}

impl fmt::Display for ParseDirectionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid port direction: '{}'", self.input)
    }
}

impl std::error::Error for ParseDirectionError {}

impl FromStr for PortDirection {
    type Err = ParseDirectionError;

    /// Parses `in`, `out` or `inout`, ignoring case.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "in" => Ok(PortDirection::In),
            "out" => Ok(PortDirection::Out),
            "inout" => Ok(PortDirection::InOut),
            _ => Err(ParseDirectionError {
                input: s.to_string(),
            }),
        }
    }
}

/// A port in an entity's external interface.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Port {
    /// The port name, with its source casing.
    pub name: String,
    /// The port mode.
    pub direction: PortDirection,
    /// The subtype indication, verbatim (e.g. `std_logic_vector(7 downto 0)`).
    #[serde(rename = "type")]
    pub ty: String,
}

impl Port {
    /// Creates a port.
    pub fn new(name: impl Into<String>, direction: PortDirection, ty: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            direction,
            ty: ty.into(),
        }
    }

    /// Returns `true` if the name, lowercased, starts with `clk` or `clock`.
    ///
    /// Direction and type are not considered.
    pub fn is_clock(&self) -> bool {
        has_prefix(&self.name, &CLOCK_PREFIXES)
    }

    /// Returns `true` if the name, lowercased, starts with `rst` or `reset`.
    pub fn is_reset(&self) -> bool {
        has_prefix(&self.name, &RESET_PREFIXES)
    }
}

fn has_prefix(name: &str, prefixes: &[&str]) -> bool {
    let lower = name.to_lowercase();
    prefixes.iter().any(|p| lower.starts_with(p))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn direction_parse_case_insensitive() {
        assert_eq!("in".parse::<PortDirection>().unwrap(), PortDirection::In);
        assert_eq!("OUT".parse::<PortDirection>().unwrap(), PortDirection::Out);
        assert_eq!(
            "InOut".parse::<PortDirection>().unwrap(),
            PortDirection::InOut
        );
    }

    #[test]
    fn direction_parse_rejects_buffer() {
        let err = "buffer".parse::<PortDirection>().unwrap_err();
        assert_eq!(format!("{err}"), "invalid port direction: 'buffer'");
    }

    #[test]
    fn direction_display_is_keyword() {
        assert_eq!(PortDirection::In.to_string(), "in");
        assert_eq!(PortDirection::Out.to_string(), "out");
        assert_eq!(PortDirection::InOut.to_string(), "inout");
    }

    #[test]
    fn clock_detection_by_prefix() {
        assert!(Port::new("clk", PortDirection::In, "std_logic").is_clock());
        assert!(Port::new("CLK_50", PortDirection::In, "std_logic").is_clock());
        assert!(Port::new("Clock_sys", PortDirection::In, "std_logic").is_clock());
        assert!(!Port::new("sys_clk", PortDirection::In, "std_logic").is_clock());
    }

    #[test]
    fn clock_detection_ignores_direction_and_type() {
        let p = Port::new("clk_out", PortDirection::Out, "std_logic_vector(3 downto 0)");
        assert!(p.is_clock());
    }

    #[test]
    fn reset_detection_by_prefix() {
        assert!(Port::new("rst", PortDirection::In, "std_logic").is_reset());
        assert!(Port::new("RESET_N", PortDirection::In, "std_logic").is_reset());
        assert!(Port::new("rstn", PortDirection::In, "std_logic").is_reset());
        assert!(!Port::new("arst", PortDirection::In, "std_logic").is_reset());
    }

    #[test]
    fn port_serde_uses_type_key() {
        let p = Port::new("data", PortDirection::InOut, "std_logic");
        let json = serde_json::to_string(&p).unwrap();
        assert_eq!(
            json,
            r#"{"name":"data","direction":"inout","type":"std_logic"}"#
        );
        let restored: Port = serde_json::from_str(&json).unwrap();
        assert_eq!(restored, p);
    }
}
