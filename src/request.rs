// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Inputs of one prayer-time calculation.

use chrono::NaiveDate;

use crate::coordinate::GeoCoordinate;
use crate::error::{Error, Result};
use crate::instant::Time;
use crate::method::{Convention, LegalSchool, Season};
use crate::scales::J2000;
use crate::solar::SolarState;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Everything needed to compute one day's schedule.
///
/// Method choices default to Umm Al-Qura, the standard Asr shadow and no
/// daylight-saving shift; override them with the `with_*` builders.
///
/// ```
/// use prayertime::{CalculationRequest, Convention, GeoCoordinate, Season};
///
/// let cairo = GeoCoordinate::from_degrees(31.2599, 30.0599, 2.0);
/// let request = CalculationRequest::from_ymd(cairo, 2010, 8, 6)
///     .unwrap()
///     .with_convention(Convention::EgyptianSurvey)
///     .with_season(Season::Summer);
/// assert_eq!(request.convention, Convention::EgyptianSurvey);
/// ```
#[derive(Debug, Copy, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct CalculationRequest {
    pub location: GeoCoordinate,
    pub date: NaiveDate,
    #[cfg_attr(feature = "serde", serde(default))]
    pub convention: Convention,
    #[cfg_attr(feature = "serde", serde(default))]
    pub school: LegalSchool,
    #[cfg_attr(feature = "serde", serde(default))]
    pub season: Season,
}

impl CalculationRequest {
    /// Request for `date` with default method choices.
    pub fn new(location: GeoCoordinate, date: NaiveDate) -> Self {
        Self {
            location,
            date,
            convention: Convention::default(),
            school: LegalSchool::default(),
            season: Season::default(),
        }
    }

    /// Request from raw calendar components.
    ///
    /// Fails with [`Error::InvalidDate`] when the triple is not a real date.
    pub fn from_ymd(location: GeoCoordinate, year: i32, month: u32, day: u32) -> Result<Self> {
        let date = NaiveDate::from_ymd_opt(year, month, day)
            .ok_or(Error::InvalidDate { year, month, day })?;
        Ok(Self::new(location, date))
    }

    pub fn with_convention(mut self, convention: Convention) -> Self {
        self.convention = convention;
        self
    }

    pub fn with_school(mut self, school: LegalSchool) -> Self {
        self.school = school;
        self
    }

    pub fn with_season(mut self, season: Season) -> Self {
        self.season = season;
        self
    }

    /// J2000 day count at 0h of the requested date.
    pub fn day_number(&self) -> Time<J2000> {
        Time::<J2000>::from_calendar_date(self.date)
    }

    /// Solar geometry for the requested date.
    pub fn solar_state(&self) -> SolarState {
        SolarState::at(self.day_number())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cairo() -> GeoCoordinate {
        GeoCoordinate::from_degrees(31.2599, 30.0599, 2.0)
    }

    #[test]
    fn invalid_month_fails_fast() {
        let err = CalculationRequest::from_ymd(cairo(), 2010, 13, 1).unwrap_err();
        assert_eq!(
            err,
            Error::InvalidDate {
                year: 2010,
                month: 13,
                day: 1
            }
        );
    }

    #[test]
    fn non_leap_february_29_is_rejected() {
        assert!(CalculationRequest::from_ymd(cairo(), 2023, 2, 29).is_err());
        assert!(CalculationRequest::from_ymd(cairo(), 2024, 2, 29).is_ok());
    }

    #[test]
    fn builders_override_defaults() {
        let req = CalculationRequest::from_ymd(cairo(), 2010, 8, 6)
            .unwrap()
            .with_convention(Convention::Isna)
            .with_school(LegalSchool::Hanafi)
            .with_season(Season::Summer);
        assert_eq!(req.convention, Convention::Isna);
        assert_eq!(req.school, LegalSchool::Hanafi);
        assert_eq!(req.season, Season::Summer);
    }

    #[test]
    fn day_number_follows_date() {
        let req = CalculationRequest::from_ymd(cairo(), 2010, 8, 6).unwrap();
        assert_eq!(req.day_number().value(), 3_869.5);
        assert_eq!(req.solar_state().day_number, req.day_number());
    }
}
