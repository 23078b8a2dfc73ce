//! VHDL physical time literals with unit parsing and display.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A unit of the VHDL `time` physical type.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum TimeUnit {
    /// Femtoseconds.
    Fs,
    /// Picoseconds.
    Ps,
    /// Nanoseconds.
    Ns,
    /// Microseconds.
    Us,
    /// Milliseconds.
    Ms,
    /// Seconds.
    Sec,
}

impl TimeUnit {
    /// Returns the VHDL spelling of this unit.
    pub fn as_str(&self) -> &'static str {
        match self {
            TimeUnit::Fs => "fs",
            TimeUnit::Ps => "ps",
            TimeUnit::Ns => "ns",
            TimeUnit::Us => "us",
            TimeUnit::Ms => "ms",
            TimeUnit::Sec => "sec",
        }
    }

    /// Looks up a unit by name, case-insensitively.
    ///
    /// Accepts `s` as an alias for `sec`.
    pub fn from_name(name: &str) -> Option<Self> {
        match name.to_ascii_lowercase().as_str() {
            "fs" => Some(TimeUnit::Fs),
            "ps" => Some(TimeUnit::Ps),
            "ns" => Some(TimeUnit::Ns),
            "us" => Some(TimeUnit::Us),
            "ms" => Some(TimeUnit::Ms),
            "s" | "sec" => Some(TimeUnit::Sec),
            _ => None,
        }
    }
}

impl fmt::Display for TimeUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// An integer time literal such as `10 ns`.
///
/// Parses from strings like `"10 ns"`, `"100ns"` or `"1 US"`, and displays in
/// the form VHDL expects (`10 ns`), so it can be pasted straight into a
/// `constant` or `wait for` statement.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct TimeValue {
    value: u64,
    unit: TimeUnit,
}

impl TimeValue {
    /// Creates a time literal from a magnitude and unit.
    pub const fn new(value: u64, unit: TimeUnit) -> Self {
        Self { value, unit }
    }

    /// Creates a time literal in nanoseconds.
    pub const fn ns(value: u64) -> Self {
        Self::new(value, TimeUnit::Ns)
    }

    /// Returns the magnitude.
    pub fn value(&self) -> u64 {
        self.value
    }

    /// Returns the unit.
    pub fn unit(&self) -> TimeUnit {
        self.unit
    }

    /// Returns `true` if the magnitude is zero.
    pub fn is_zero(&self) -> bool {
        self.value == 0
    }
}

impl fmt::Display for TimeValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.value, self.unit)
    }
}

/// Error type for parsing time literals.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseTimeError {
    /// The input string that failed to parse.
    pub input: String,
}

impl fmt::Display for ParseTimeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid time literal: '{}'", self.input)
    }
}

impl std::error::Error for ParseTimeError {}

impl FromStr for TimeValue {
    type Err = ParseTimeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let err = || ParseTimeError {
            input: s.to_string(),
        };

        let digit_end = s.find(|c: char| !c.is_ascii_digit()).unwrap_or(s.len());
        if digit_end == 0 {
            return Err(err());
        }

        let value: u64 = s[..digit_end].parse().map_err(|_| err())?;
        let unit = TimeUnit::from_name(s[digit_end..].trim()).ok_or_else(err)?;
        Ok(TimeValue { value, unit })
    }
}

impl TryFrom<String> for TimeValue {
    type Error = ParseTimeError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

impl From<TimeValue> for String {
    fn from(t: TimeValue) -> Self {
        t.to_string()
    }
}
