//! Recovers the declared interface of a VHDL entity from raw source text.
//!
//! The main entry point is [`extract`], which scans the text for the first
//! `entity ... is` header and its `generic (...)` and `port (...)` clauses and
//! returns an [`InterfaceDescription`].
//!
//! Extraction never fails. Missing pieces are left empty: no entity header
//! yields an empty name, and no generic or port clause yields an empty list.
//! Only the first entity in the text is considered.
//!
//! Keywords (`entity`, `is`, `generic`, `port`, the port modes and `downto`)
//! match case-insensitively. Names, types and default values keep the casing
//! they have in the source.

#![warn(missing_docs)]

mod patterns;

use tracing::debug;
use vtb_interface::{GenericParam, InterfaceDescription, Port, PortDirection};

use crate::patterns::{ENTITY, GENERIC_CLAUSE, GENERIC_ITEM, PORT_CLAUSE, PORT_ITEM};

/// Extracts the interface of the first entity declared in `source`.
pub fn extract(source: &str) -> InterfaceDescription {
    let desc = InterfaceDescription {
        entity_name: extract_entity_name(source).unwrap_or_default(),
        generics: extract_generics(source),
        ports: extract_ports(source),
    };

    if desc.is_anonymous() {
        debug!("no entity declaration found");
    }
    debug!(
        entity = %desc.entity_name,
        generics = desc.generics.len(),
        ports = desc.ports.len(),
        "extracted interface"
    );
    desc
}

/// Returns the identifier of the first `entity <name> is` header.
pub fn extract_entity_name(source: &str) -> Option<String> {
    ENTITY.captures(source).map(|caps| caps[1].to_string())
}

/// Returns the generics declared in the first `generic (...);` clause.
///
/// Only `name : type := value` entries are recognized. A generic without an
/// initializer is skipped; a blank initializer is kept as an empty default.
pub fn extract_generics(source: &str) -> Vec<GenericParam> {
    let Some(body) = clause_body(&GENERIC_CLAUSE, source) else {
        debug!("no generic clause");
        return Vec::new();
    };

    GENERIC_ITEM
        .captures_iter(body)
        .map(|caps| GenericParam::new(&caps[1], &caps[2], caps[3].trim()))
        .collect()
}

/// Returns the ports declared in the first `port (...);` clause.
///
/// Entries without an `in`, `out` or `inout` mode are skipped.
pub fn extract_ports(source: &str) -> Vec<Port> {
    let Some(body) = clause_body(&PORT_CLAUSE, source) else {
        debug!("no port clause");
        return Vec::new();
    };

    PORT_ITEM
        .captures_iter(body)
        .filter_map(|caps| {
            let direction: PortDirection = caps[2].parse().ok()?;
            Some(Port::new(&caps[1], direction, &caps[3]))
        })
        .collect()
}

/// Returns the parenthesized body of the first match of `clause`.
fn clause_body<'a>(clause: &regex::Regex, source: &'a str) -> Option<&'a str> {
    clause
        .captures(source)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str())
}
