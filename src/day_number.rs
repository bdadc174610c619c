// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Calendar date → J2000 day count (`Time<J2000>`) extensions.

use chrono::{Datelike, NaiveDate};

use super::instant::Time;
use super::scales::J2000;

impl Time<J2000> {
    /// Day count at 0h of a proleptic Gregorian date.
    ///
    /// Uses the compact integer formula
    ///
    /// ```text
    /// d = 367·Y − ⌊(Y + ⌊(M + 9)/12⌋)·7/4⌋ + ⌊275·M/9⌋ + D − 730531.5
    /// ```
    ///
    /// which ignores the Gregorian century rule and is therefore exact only
    /// between 1901-03-01 and 2100-02-28.  Outside that window it drifts by
    /// whole days, which the prayer-time model tolerates.
    ///
    /// ```
    /// use chrono::NaiveDate;
    /// use prayertime::{J2000, Time};
    ///
    /// let date = NaiveDate::from_ymd_opt(2000, 1, 1).unwrap();
    /// assert_eq!(Time::<J2000>::from_calendar_date(date).value(), -0.5);
    /// ```
    pub fn from_calendar_date(date: NaiveDate) -> Self {
        let y = i64::from(date.year());
        let m = i64::from(date.month());
        let d = i64::from(date.day());

        // Integer division truncates; all operands are positive for AD years.
        let whole = 367 * y - ((y + (m + 9) / 12) * 7) / 4 + (275 * m) / 9 + d;
        Self::new(whole as f64 - 730_531.5)
    }
}
