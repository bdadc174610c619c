// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! 12-hour clock rendering of fractional hours.

use chrono::{NaiveTime, Timelike};
use qtty::Hours;

use crate::error::Result;

/// Format accepted by [`ClockTime::parse`] (`4:39:50 AM`).
pub const CLOCK_FORMAT: &str = "%I:%M:%S %p";

#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Meridiem {
    Am,
    Pm,
}

impl std::fmt::Display for Meridiem {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            Meridiem::Am => "AM",
            Meridiem::Pm => "PM",
        })
    }
}

/// Wall-clock time of day with whole-second resolution.
///
/// Displays as `H:MM:SS AM|PM`.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ClockTime {
    hour: u32,
    minute: u32,
    second: u32,
}

impl ClockTime {
    /// Split fractional hours into h/m/s, truncating each component.
    ///
    /// The value is first wrapped into `[0, 24)`, so 25.5 reads as 1:30 AM.
    /// Returns `None` for NaN or infinite input.
    pub fn from_hours(hours: Hours) -> Option<Self> {
        let value = hours.value();
        if !value.is_finite() {
            return None;
        }
        let mut rest = hour_of_day(value);
        let hour = rest.trunc();
        rest = (rest - hour) * 60.0;
        let minute = rest.trunc();
        rest = (rest - minute) * 60.0;
        let second = rest.trunc();

        Some(Self {
            hour: hour as u32,
            minute: minute as u32,
            second: second as u32,
        })
    }

    /// Parse a `H:MM:SS AM|PM` string.
    pub fn parse(text: &str) -> Result<Self> {
        Ok(NaiveTime::parse_from_str(text.trim(), CLOCK_FORMAT)?.into())
    }

    /// Hour on the 24-hour clock (`0..24`).
    pub const fn hour(&self) -> u32 {
        self.hour
    }

    pub const fn minute(&self) -> u32 {
        self.minute
    }

    pub const fn second(&self) -> u32 {
        self.second
    }

    /// Hour on the 12-hour clock (`1..=12`).
    pub const fn hour12(&self) -> u32 {
        match self.hour % 12 {
            0 => 12,
            h => h,
        }
    }

    pub const fn meridiem(&self) -> Meridiem {
        if self.hour < 12 {
            Meridiem::Am
        } else {
            Meridiem::Pm
        }
    }

    /// Fractional hours since midnight.
    pub fn as_hours(&self) -> Hours {
        Hours::new(
            f64::from(self.hour) + f64::from(self.minute) / 60.0 + f64::from(self.second) / 3600.0,
        )
    }

    pub fn to_naive_time(&self) -> NaiveTime {
        // Components are range-checked on construction.
        NaiveTime::from_hms_opt(self.hour, self.minute, self.second).unwrap_or(NaiveTime::MIN)
    }
}

impl From<NaiveTime> for ClockTime {
    fn from(time: NaiveTime) -> Self {
        Self {
            hour: time.hour(),
            minute: time.minute(),
            second: time.second(),
        }
    }
}

impl std::fmt::Display for ClockTime {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}:{:02}:{:02} {}",
            self.hour12(),
            self.minute,
            self.second,
            self.meridiem()
        )
    }
}

/// `hours` folded into `[0, 24)`.
///
/// `rem_euclid` can round a tiny negative value up to exactly 24; that is
/// folded back to 0 so the result agrees with `(hours - result) / 24`
/// being a whole number of days.
pub(crate) fn hour_of_day(hours: f64) -> f64 {
    let wrapped = hours.rem_euclid(24.0);
    if wrapped >= 24.0 {
        0.0
    } else {
        wrapped
    }
}

/// Render fractional hours as a clock string, or `"NaN"` when undefined.
pub fn format_hours(hours: Hours) -> String {
    match ClockTime::from_hours(hours) {
        Some(clock) => clock.to_string(),
        None => "NaN".to_string(),
    }
}
