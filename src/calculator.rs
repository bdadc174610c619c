// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Stateful convenience wrapper: build once, `calculate()`, read strings.

use qtty::{Degrees, Kilometers};

use crate::clock::format_hours;
use crate::error::{Error, Result};
use crate::qibla::Qibla;
use crate::request::CalculationRequest;
use crate::schedule::{compute_schedule, Prayer, PrayerSchedule};

/// A calculation request together with its most recent result.
///
/// ```
/// use prayertime::{CalculationRequest, Convention, GeoCoordinate, Prayertime, Season};
///
/// let cairo = GeoCoordinate::from_degrees(31.2599, 30.0599, 2.0);
/// let request = CalculationRequest::from_ymd(cairo, 2010, 8, 6)?
///     .with_convention(Convention::EgyptianSurvey)
///     .with_season(Season::Summer);
///
/// let mut pt = Prayertime::new(request);
/// assert!(pt.fajr_time().is_err());
/// pt.calculate();
/// assert_eq!(pt.fajr_time()?, "4:39:50 AM");
/// assert_eq!(pt.isha_time()?, "9:10:57 PM");
/// # Ok::<(), prayertime::Error>(())
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Prayertime {
    request: CalculationRequest,
    schedule: Option<PrayerSchedule>,
}

impl Prayertime {
    pub fn new(request: CalculationRequest) -> Self {
        Self {
            request,
            schedule: None,
        }
    }

    pub fn request(&self) -> &CalculationRequest {
        &self.request
    }

    /// Compute all six times, replacing any previous result.
    pub fn calculate(&mut self) -> &PrayerSchedule {
        self.schedule.insert(compute_schedule(&self.request))
    }

    /// Result of the last [`calculate`](Self::calculate), if any.
    pub fn schedule(&self) -> Option<&PrayerSchedule> {
        self.schedule.as_ref()
    }

    /// Formatted time of one prayer (`"NaN"` when undefined on this day).
    pub fn time_of(&self, prayer: Prayer) -> Result<String> {
        let schedule = self.schedule.as_ref().ok_or(Error::NotCalculated)?;
        Ok(format_hours(schedule.get(prayer)))
    }

    pub fn fajr_time(&self) -> Result<String> {
        self.time_of(Prayer::Fajr)
    }

    pub fn shrouk_time(&self) -> Result<String> {
        self.time_of(Prayer::Shrouk)
    }

    pub fn zuhr_time(&self) -> Result<String> {
        self.time_of(Prayer::Zuhr)
    }

    pub fn asr_time(&self) -> Result<String> {
        self.time_of(Prayer::Asr)
    }

    pub fn maghrib_time(&self) -> Result<String> {
        self.time_of(Prayer::Maghrib)
    }

    pub fn isha_time(&self) -> Result<String> {
        self.time_of(Prayer::Isha)
    }

    /// Qibla for the request's location; does not require `calculate()`.
    pub fn qibla(&self) -> Qibla {
        Qibla::from_location(&self.request.location)
    }

    pub fn qibla_bearing(&self) -> Degrees {
        self.qibla().bearing
    }

    pub fn qibla_distance(&self) -> Kilometers {
        self.qibla().distance
    }

    /// The six formatted times, one per line, in chronological order.
    pub fn report(&self) -> Result<String> {
        let lines = Prayer::ALL
            .iter()
            .map(|&p| self.time_of(p))
            .collect::<Result<Vec<_>>>()?;
        Ok(lines.join("\n"))
    }
}
