// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! The six daily prayer times.
//!
//! [`compute_schedule`] turns a [`CalculationRequest`] into a
//! [`PrayerSchedule`] in one pass:
//!
//! | Prayer | Time |
//! |--------|------|
//! | Fajr | `noon − H(fajr angle)/15` |
//! | Shrouk | `noon − H(−0.8333°)/15` |
//! | Zuhr | `noon` |
//! | Asr | `noon + H(asr altitude)/15` |
//! | Maghrib | `noon + H(−0.8333°)/15` |
//! | Isha | `noon + H(isha angle)/15`, or Maghrib + 1.5 h for Umm Al-Qura |
//!
//! where `H` is [`SolarState::hour_angle`] and the Asr altitude is
//! `90° − atan(shadow factor + tan|φ − δ|)`.  The season offset is added to
//! all six values last.

use std::convert::Infallible;

use chrono::{Duration, NaiveDate, NaiveDateTime};
use log::{debug, trace, warn};
use qtty::{Degrees, Hours};

use crate::clock::{hour_of_day, ClockTime};
use crate::error::{Error, Result};
use crate::method::{IshaRule, LegalSchool};
use crate::request::CalculationRequest;
use crate::solar::{atan_deg, SolarState};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Sun's centre at the apparent horizon: 16' semidiameter + 34' refraction.
pub const HORIZON_ALTITUDE: Degrees = Degrees::new(-0.8333);

/// One of the six daily times.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Prayer {
    Fajr,
    Shrouk,
    Zuhr,
    Asr,
    Maghrib,
    Isha,
}

impl Prayer {
    /// All prayers in chronological order.
    pub const ALL: [Prayer; 6] = [
        Prayer::Fajr,
        Prayer::Shrouk,
        Prayer::Zuhr,
        Prayer::Asr,
        Prayer::Maghrib,
        Prayer::Isha,
    ];

    pub const fn name(self) -> &'static str {
        match self {
            Prayer::Fajr => "Fajr",
            Prayer::Shrouk => "Shrouk",
            Prayer::Zuhr => "Zuhr",
            Prayer::Asr => "Asr",
            Prayer::Maghrib => "Maghrib",
            Prayer::Isha => "Isha",
        }
    }
}

impl std::fmt::Display for Prayer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Local civil times of one day, as fractional hours since local midnight.
///
/// Values may fall outside `[0, 24)` (they are not wrapped) and are NaN
/// when the sun never reaches the defining altitude.
#[derive(Debug, Copy, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct PrayerSchedule {
    pub fajr: Hours,
    pub shrouk: Hours,
    pub zuhr: Hours,
    pub asr: Hours,
    pub maghrib: Hours,
    pub isha: Hours,
}

impl PrayerSchedule {
    pub fn get(&self, prayer: Prayer) -> Hours {
        match prayer {
            Prayer::Fajr => self.fajr,
            Prayer::Shrouk => self.shrouk,
            Prayer::Zuhr => self.zuhr,
            Prayer::Asr => self.asr,
            Prayer::Maghrib => self.maghrib,
            Prayer::Isha => self.isha,
        }
    }

    /// `(prayer, time)` pairs in chronological order.
    pub fn iter(&self) -> impl Iterator<Item = (Prayer, Hours)> + '_ {
        Prayer::ALL.into_iter().map(move |p| (p, self.get(p)))
    }

    /// The same schedule moved by `offset`.
    pub fn shifted(&self, offset: Hours) -> Self {
        Self {
            fajr: self.fajr + offset,
            shrouk: self.shrouk + offset,
            zuhr: self.zuhr + offset,
            asr: self.asr + offset,
            maghrib: self.maghrib + offset,
            isha: self.isha + offset,
        }
    }

    /// Prayers whose time is NaN or infinite.
    pub fn undefined(&self) -> Vec<Prayer> {
        self.iter()
            .filter(|(_, h)| !h.value().is_finite())
            .map(|(p, _)| p)
            .collect()
    }

    /// `true` when every time is finite.
    pub fn is_complete(&self) -> bool {
        self.iter().all(|(_, h)| h.value().is_finite())
    }

    /// Anchor each time on `date`.
    ///
    /// Times past midnight roll into the next day (and negative ones into
    /// the previous day); seconds are truncated like the clock rendering.
    /// Undefined times map to `None`.
    pub fn to_local_datetimes(&self, date: NaiveDate) -> Vec<(Prayer, Option<NaiveDateTime>)> {
        self.iter()
            .map(|(p, h)| (p, local_datetime(date, h)))
            .collect()
    }
}

fn local_datetime(date: NaiveDate, hours: Hours) -> Option<NaiveDateTime> {
    let clock = ClockTime::from_hours(hours)?;
    let value = hours.value();
    let day_shift = ((value - hour_of_day(value)) / 24.0).round() as i64;
    let day = date.checked_add_signed(Duration::try_days(day_shift)?)?;
    Some(day.and_time(clock.to_naive_time()))
}

/// Altitude of the sun when an object's shadow equals
/// `shadow_factor` lengths plus its noon shadow.
pub fn asr_altitude(declination: Degrees, latitude: Degrees, school: LegalSchool) -> Degrees {
    let noon_zenith = (latitude - declination).abs();
    Degrees::new(90.0) - atan_deg(school.shadow_factor() + noon_zenith.tan())
}

/// Compute the full schedule.
///
/// Dates and latitudes where the sun never reaches a twilight or Asr
/// altitude yield NaN for the affected prayers; the other values are
/// still produced.
pub fn compute_schedule(request: &CalculationRequest) -> PrayerSchedule {
    let solar = request.solar_state();
    let latitude = request.location.latitude;
    let schedule = match derive_schedule(request, &solar, |prayer, altitude| {
        let h = solar.hour_angle(altitude, latitude);
        trace!("{prayer}: altitude {altitude} → hour angle {h}");
        Ok::<_, Infallible>(h)
    }) {
        Ok(schedule) => schedule,
        Err(never) => match never {},
    };

    if !schedule.is_complete() {
        warn!(
            "{} on {}: sun does not reach the altitude for {:?}",
            request.location,
            request.date,
            schedule.undefined()
        );
    }
    schedule
}

/// Compute the schedule, failing on the first prayer whose altitude is
/// never reached.
pub fn try_compute_schedule(request: &CalculationRequest) -> Result<PrayerSchedule> {
    let solar = request.solar_state();
    let latitude = request.location.latitude;
    derive_schedule(request, &solar, |prayer, altitude| {
        solar
            .checked_hour_angle(altitude, latitude)
            .ok_or(Error::Unreachable { prayer, altitude })
    })
}

fn derive_schedule<E, F>(
    request: &CalculationRequest,
    solar: &SolarState,
    mut hour_angle: F,
) -> std::result::Result<PrayerSchedule, E>
where
    F: FnMut(Prayer, Degrees) -> std::result::Result<Degrees, E>,
{
    let span = |h: Degrees| Hours::new(h.value() / 15.0);
    let convention = request.convention;

    let noon = solar.local_noon(&request.location);
    debug!(
        "{} on {} ({}): δ = {}, λ = {}, local noon = {}",
        request.location,
        request.date,
        solar.julian_day(),
        solar.declination,
        solar.ecliptic_longitude,
        noon
    );

    let zuhr = noon;
    let maghrib = noon + span(hour_angle(Prayer::Maghrib, HORIZON_ALTITUDE)?);
    let shrouk = noon - span(hour_angle(Prayer::Shrouk, HORIZON_ALTITUDE)?);
    let fajr = noon - span(hour_angle(Prayer::Fajr, convention.fajr_angle())?);

    let isha = match convention.isha_rule() {
        IshaRule::Angle(altitude) => noon + span(hour_angle(Prayer::Isha, altitude)?),
        IshaRule::AfterMaghrib(delay) => maghrib + delay,
    };

    let asr_alt = asr_altitude(solar.declination, request.location.latitude, request.school);
    let asr = noon + span(hour_angle(Prayer::Asr, asr_alt)?);

    let schedule = PrayerSchedule {
        fajr,
        shrouk,
        zuhr,
        asr,
        maghrib,
        isha,
    }
    .shifted(request.season.offset());

    debug!("{convention}: {schedule:?}");
    Ok(schedule)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::coordinate::GeoCoordinate;
    use crate::method::{Convention, Season};

    fn cairo_request() -> CalculationRequest {
        CalculationRequest::from_ymd(GeoCoordinate::from_degrees(31.2599, 30.0599, 2.0), 2010, 8, 6)
            .unwrap()
    }

    fn close(a: Hours, b: f64) -> bool {
        (a.value() - b).abs() < 1e-9
    }

    #[test]
    fn cairo_umm_al_qura_standard_winter() {
        let s = compute_schedule(&cairo_request());
        assert!(close(s.fajr, 3.710_427_008_416_976_6));
        assert!(close(s.shrouk, 5.276_911_792_967_621_5));
        assert!(close(s.zuhr, 12.015_322_167_946_373));
        assert!(close(s.asr, 15.630_704_427_567_391));
        assert!(close(s.maghrib, 18.753_732_542_925_125));
        assert!(close(s.isha, 20.253_732_542_925_125));
    }

    #[test]
    fn cairo_isha_per_convention() {
        let expected = [
            (Convention::EgyptianSurvey, 3.664_109_176_028_688_4, 20.182_705_118_302_3),
            (Convention::KarachiUniv, 3.802_333_124_611_698, 20.228_311_211_281_046),
            (Convention::Isna, 4.072_817_019_198_838, 19.957_827_316_693_91),
            (Convention::MuslimWorldLeague, 3.802_333_124_611_698, 20.137_319_228_945_85),
        ];
        for (convention, fajr, isha) in expected {
            let s = compute_schedule(&cairo_request().with_convention(convention));
            assert!(close(s.fajr, fajr), "{convention}: fajr {}", s.fajr);
            assert!(close(s.isha, isha), "{convention}: isha {}", s.isha);
        }
    }

    #[test]
    fn hanafi_asr_matches_reference() {
        let s = compute_schedule(&cairo_request().with_school(LegalSchool::Hanafi));
        assert!(close(s.asr, 16.778_622_509_702_707));
    }

    #[test]
    fn umm_al_qura_isha_is_ninety_minutes_after_maghrib() {
        let s = compute_schedule(&cairo_request());
        assert_eq!(s.isha - s.maghrib, Hours::new(1.5));
    }

    #[test]
    fn summer_shifts_every_value_by_one_hour() {
        let winter = compute_schedule(&cairo_request());
        let summer = compute_schedule(&cairo_request().with_season(Season::Summer));
        for p in Prayer::ALL {
            assert_eq!(summer.get(p), winter.get(p) + Hours::new(1.0), "{p}");
        }
    }

    #[test]
    fn polar_night_leaves_nan_and_checked_api_reports_it() {
        let tromso = GeoCoordinate::from_degrees(18.95, 69.65, 1.0);
        let req = CalculationRequest::from_ymd(tromso, 2024, 12, 21)
            .unwrap()
            .with_convention(Convention::MuslimWorldLeague);
        let s = compute_schedule(&req);
        assert!(!s.is_complete());
        assert!(s.undefined().contains(&Prayer::Shrouk));
        assert!(s.zuhr.value().is_finite());

        match try_compute_schedule(&req) {
            Err(Error::Unreachable { prayer, .. }) => assert_eq!(prayer, Prayer::Maghrib),
            other => panic!("expected unreachable, got {other:?}"),
        }
    }

    #[test]
    fn checked_api_agrees_in_temperate_latitudes() {
        let req = cairo_request().with_convention(Convention::Isna);
        assert_eq!(try_compute_schedule(&req).unwrap(), compute_schedule(&req));
    }

    #[test]
    fn asr_altitude_with_sun_overhead() {
        // tan 0 = 0, so the altitude is 90° − atan(1) = 45° for the standard school.
        let alt = asr_altitude(Degrees::new(10.0), Degrees::new(10.0), LegalSchool::Standard);
        assert!((alt.value() - 45.0).abs() < 1e-9);
        let hanafi = asr_altitude(Degrees::new(10.0), Degrees::new(10.0), LegalSchool::Hanafi);
        assert!(hanafi < alt);
    }

    #[test]
    fn local_datetimes_roll_over_midnight() {
        let date = NaiveDate::from_ymd_opt(2024, 12, 21).unwrap();
        let s = PrayerSchedule {
            fajr: Hours::new(-0.5),
            shrouk: Hours::new(6.25),
            zuhr: Hours::new(12.0),
            asr: Hours::new(f64::NAN),
            maghrib: Hours::new(18.0),
            isha: Hours::new(24.5),
        };
        let out = s.to_local_datetimes(date);
        let fajr = out[0].1.unwrap();
        assert_eq!(fajr.to_string(), "2024-12-20 23:30:00");
        assert_eq!(out[1].1.unwrap().to_string(), "2024-12-21 06:15:00");
        assert_eq!(out[3], (Prayer::Asr, None));
        assert_eq!(out[5].1.unwrap().to_string(), "2024-12-22 00:30:00");
    }

    #[test]
    fn local_datetime_agrees_with_clock_just_below_midnight() {
        let date = NaiveDate::from_ymd_opt(2024, 6, 1).unwrap();
        let tiny = Hours::new(-1e-17);
        assert_eq!(crate::clock::format_hours(tiny), "12:00:00 AM");
        assert_eq!(
            local_datetime(date, tiny).map(|dt| dt.to_string()),
            Some("2024-06-01 00:00:00".to_string())
        );
    }
}
