//! Time sources for the generation timestamp.

use chrono::{Local, NaiveDateTime};

/// `strftime` format of the `-- Generated on:` header line.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Supplies the wall-clock time stamped into generated harnesses.
pub trait Clock {
    /// Returns the current local time.
    fn now(&self) -> NaiveDateTime;

    /// Returns the current time formatted for the header.
    fn timestamp(&self) -> String {
        self.now().format(TIMESTAMP_FORMAT).to_string()
    }
}

/// The local system clock.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> NaiveDateTime {
        Local::now().naive_local()
    }
}

/// A clock frozen at one instant, for reproducible output.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedClock(pub NaiveDateTime);

impl Clock for FixedClock {
    fn now(&self) -> NaiveDateTime {
        self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn instant() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 3, 9)
            .unwrap()
            .and_hms_opt(7, 5, 2)
            .unwrap()
    }

    #[test]
    fn fixed_clock_timestamp_format() {
        let clock = FixedClock(instant());
        assert_eq!(clock.timestamp(), "2024-03-09 07:05:02");
    }

    #[test]
    fn fixed_clock_is_stable() {
        let clock = FixedClock(instant());
        assert_eq!(clock.now(), clock.now());
    }

    #[test]
    fn system_clock_timestamp_shape() {
        let stamp = SystemClock.timestamp();
        assert_eq!(stamp.len(), 19);
        assert_eq!(&stamp[4..5], "-");
        assert_eq!(&stamp[10..11], " ");
        assert_eq!(&stamp[13..14], ":");
    }
}
