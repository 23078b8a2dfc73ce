//! Compiled patterns for the entity header constructs the extractor recognizes.
//!
//! These approximate the VHDL grammar rather than parse it. Clause bodies are
//! matched lazily up to the first `);`, so a body that itself contains `);`
//! is cut short.

use once_cell::sync::Lazy;
use regex::Regex;

/// `entity <name> is`, first occurrence wins.
pub(crate) static ENTITY: Lazy<Regex> = Lazy::new(|| compile(r"(?i)entity\s+(\w+)\s+is"));

/// `generic ( <body> );`, capturing the body.
pub(crate) static GENERIC_CLAUSE: Lazy<Regex> =
    Lazy::new(|| compile(r"(?is)generic\s*\((.*?)\);"));

/// `port ( <body> );`, capturing the body.
pub(crate) static PORT_CLAUSE: Lazy<Regex> = Lazy::new(|| compile(r"(?is)port\s*\((.*?)\);"));

/// `<name> : <type> := <value>` inside a generic clause body.
pub(crate) static GENERIC_ITEM: Lazy<Regex> =
    Lazy::new(|| compile(r"(\w+)\s*:\s*(\w+)\s*:=\s*([^;,]+)"));

/// `<name> : <mode> <type>` inside a port clause body.
///
/// `inout` is listed before `in` so the longer keyword wins, and the mode must
/// be followed by whitespace so `integer` is never read as `in teger`.
pub(crate) static PORT_ITEM: Lazy<Regex> = Lazy::new(|| {
    compile(
        r"(?i)(\w+)\s*:\s*(inout|in|out)\s+(\w+(?:\s*\(\s*[\w\s\-]+\s+downto\s+[\w\s\-]+\s*\))?)",
    )
});

fn compile(pattern: &str) -> Regex {
    match Regex::new(pattern) {
        Ok(re) => re,
        Err(e) => panic!("invalid built-in pattern {pattern:?}: {e}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_patterns_compile() {
        for re in [&ENTITY, &GENERIC_CLAUSE, &PORT_CLAUSE, &GENERIC_ITEM, &PORT_ITEM] {
            assert!(!re.as_str().is_empty());
        }
    }

    #[test]
    fn port_clause_does_not_match_port_map() {
        assert!(PORT_CLAUSE.captures("u0: foo port map (a => b);").is_none());
    }

    #[test]
    fn generic_clause_spans_lines() {
        let caps = GENERIC_CLAUSE
            .captures("generic (\n  N : natural := 4\n);")
            .unwrap();
        assert_eq!(&caps[1], "\n  N : natural := 4\n");
    }

    #[test]
    fn port_item_prefers_inout() {
        let caps = PORT_ITEM.captures("bus : inout std_logic").unwrap();
        assert_eq!(&caps[2], "inout");
        assert_eq!(&caps[3], "std_logic");
    }

    #[test]
    fn port_item_requires_mode_keyword() {
        assert!(PORT_ITEM.captures("count : integer").is_none());
        assert!(PORT_ITEM.captures("q : buffer std_logic").is_none());
    }
}
