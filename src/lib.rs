// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Prayer Times
//!
//! Islamic daily prayer times and the Qibla direction from a closed-form,
//! low-precision solar model.
//!
//! # Core types
//!
//! - [`GeoCoordinate`]: longitude, latitude and fixed UTC offset.
//! - [`CalculationRequest`]: location, date and method choices.
//! - [`SolarState`]: solar geometry (declination, transit, …) for one date.
//! - [`PrayerSchedule`]: the six times as fractional local hours.
//! - [`Qibla`]: bearing and distance to the Kaaba.
//! - [`Prayertime`]: stateful wrapper with formatted accessors.
//!
//! # Methods
//!
//! | Enum | Variants |
//! |------|----------|
//! | [`Convention`] | Umm Al-Qura, Egyptian Survey, Karachi, ISNA, Muslim World League |
//! | [`LegalSchool`] | Standard, Hanafi |
//! | [`Season`] | Winter, Summer (+1 h) |
//!
//! # Undefined times
//!
//! Near the poles the sun may never reach a twilight altitude.  The affected
//! times are NaN and render as `"NaN"`; [`try_compute_schedule`] turns the
//! same condition into [`Error::Unreachable`].
//!
//! ```
//! use prayertime::{compute_schedule, CalculationRequest, GeoCoordinate};
//!
//! let cairo = GeoCoordinate::from_degrees(31.2599, 30.0599, 2.0);
//! let request = CalculationRequest::from_ymd(cairo, 2010, 8, 6).unwrap();
//! let schedule = compute_schedule(&request);
//! assert!(schedule.fajr < schedule.zuhr && schedule.zuhr < schedule.isha);
//! ```

mod calculator;
pub mod clock;
mod coordinate;
mod day_number;
mod error;
pub(crate) mod instant;
mod method;
pub mod qibla;
mod request;
pub(crate) mod scales;
mod schedule;
mod solar;

// ── Re-exports ────────────────────────────────────────────────────────────

pub use calculator::Prayertime;
pub use clock::{format_hours, ClockTime, Meridiem};
pub use coordinate::GeoCoordinate;
pub use error::{Error, Result};
pub use instant::{Time, TimeScale};
pub use method::{Convention, IshaRule, LegalSchool, Season};
pub use qibla::{CompassPoint, Qibla};
pub use request::CalculationRequest;
pub use scales::{J2000, JD};
pub use schedule::{
    asr_altitude, compute_schedule, try_compute_schedule, Prayer, PrayerSchedule,
    HORIZON_ALTITUDE,
};
pub use solar::SolarState;

/// Julian Date: absolute day count.
pub type JulianDate = Time<JD>;

/// Day count since J2000.0, the argument of the solar model.
pub type J2000Day = Time<J2000>;
