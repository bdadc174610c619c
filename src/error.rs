// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Error types for prayertime.

use qtty::Degrees;
use thiserror::Error;

use crate::schedule::Prayer;

/// Result type for prayertime operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors surfaced by the public API.
///
/// Geometric degeneracy (polar day/night) is *not* an error for the
/// schedule computation itself; it shows up as NaN times. Only the checked
/// accessors turn it into [`Error::Unreachable`].
#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    /// The year/month/day triple is not a calendar date.
    #[error("invalid date: {year:04}-{month:02}-{day:02}")]
    InvalidDate { year: i32, month: u32, day: u32 },

    /// A formatted time was requested before `calculate()`.
    #[error("prayer times have not been calculated yet")]
    NotCalculated,

    /// The sun never reaches the altitude that defines this prayer.
    #[error("{prayer} is undefined: the sun does not reach {altitude} on this day")]
    Unreachable { prayer: Prayer, altitude: Degrees },

    /// A clock string could not be parsed.
    #[error("invalid clock time: {0}")]
    ClockParse(#[from] chrono::ParseError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_date_message_is_zero_padded() {
        let err = Error::InvalidDate {
            year: 2010,
            month: 13,
            day: 1,
        };
        assert_eq!(err.to_string(), "invalid date: 2010-13-01");
    }

    #[test]
    fn unreachable_names_the_prayer() {
        let err = Error::Unreachable {
            prayer: Prayer::Isha,
            altitude: Degrees::new(-17.5),
        };
        assert!(err.to_string().starts_with("Isha is undefined"));
    }
}
