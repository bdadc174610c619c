// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Direction and distance to the Kaaba.
//!
//! Both quantities are spherical-trigonometry closed forms over the
//! observer's coordinate; no date or solar input is involved.
//!
//! ```
//! use prayertime::{qibla, GeoCoordinate};
//!
//! let cairo = GeoCoordinate::from_degrees(31.2599, 30.0599, 2.0);
//! let q = qibla::Qibla::from_location(&cairo);
//! assert!((q.bearing.value() - 136.2831).abs() < 1e-4);
//! assert_eq!(q.compass_point().to_string(), "SE");
//! ```

use qtty::{Degree, Degrees, Kilometers, Radians};

use crate::coordinate::GeoCoordinate;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Latitude of the Kaaba.
pub const KAABA_LATITUDE: Degrees = Degrees::new(21.423_333);
/// Longitude of the Kaaba.
pub const KAABA_LONGITUDE: Degrees = Degrees::new(39.823_333);

/// Sphere radius used for the distance; slightly above the IUGG mean
/// radius, kept for compatibility with published tables.
pub const EARTH_RADIUS: Kilometers = Kilometers::new(6_378.7);

/// Initial great-circle bearing from `location` towards the Kaaba.
///
/// Measured from true north, positive eastwards, in `(-180°, 180°]` as
/// returned by `atan2`.  Undefined at the Kaaba itself, where both
/// arguments vanish and `atan2(0, 0)` gives 0°.
pub fn bearing(location: &GeoCoordinate) -> Degrees {
    let delta_lon = KAABA_LONGITUDE - location.longitude;
    let numerator = delta_lon.sin();
    let denominator = location.latitude.cos() * KAABA_LATITUDE.tan()
        - location.latitude.sin() * delta_lon.cos();
    Radians::new(numerator.atan2(denominator)).to::<Degree>()
}

/// Great-circle distance to the Kaaba (spherical law of cosines).
pub fn distance(location: &GeoCoordinate) -> Kilometers {
    let cos_angle = KAABA_LATITUDE.sin() * location.latitude.sin()
        + KAABA_LATITUDE.cos()
            * location.latitude.cos()
            * (location.longitude - KAABA_LONGITUDE).cos();
    // Rounding can nudge coincident points just past 1.
    EARTH_RADIUS * cos_angle.clamp(-1.0, 1.0).acos()
}

/// Bearing and distance for one location.
#[derive(Debug, Copy, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Qibla {
    /// Raw `atan2` bearing, see [`bearing`].
    pub bearing: Degrees,
    pub distance: Kilometers,
}

impl Qibla {
    pub fn from_location(location: &GeoCoordinate) -> Self {
        Self {
            bearing: bearing(location),
            distance: distance(location),
        }
    }

    /// Bearing as a compass heading in `[0°, 360°)`.
    pub fn compass_bearing(&self) -> Degrees {
        self.bearing.wrap_pos()
    }

    /// Nearest of the sixteen compass points.
    pub fn compass_point(&self) -> CompassPoint {
        CompassPoint::from_heading(self.compass_bearing())
    }
}

/// Sixteen-wind compass rose.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum CompassPoint {
    N,
    NNE,
    NE,
    ENE,
    E,
    ESE,
    SE,
    SSE,
    S,
    SSW,
    SW,
    WSW,
    W,
    WNW,
    NW,
    NNW,
}

impl CompassPoint {
    const ROSE: [CompassPoint; 16] = [
        CompassPoint::N,
        CompassPoint::NNE,
        CompassPoint::NE,
        CompassPoint::ENE,
        CompassPoint::E,
        CompassPoint::ESE,
        CompassPoint::SE,
        CompassPoint::SSE,
        CompassPoint::S,
        CompassPoint::SSW,
        CompassPoint::SW,
        CompassPoint::WSW,
        CompassPoint::W,
        CompassPoint::WNW,
        CompassPoint::NW,
        CompassPoint::NNW,
    ];

    /// Sector containing `heading`; each sector spans 22.5° centred on its point.
    /// Non-finite headings map to north.
    pub fn from_heading(heading: Degrees) -> Self {
        let h = heading.wrap_pos().value();
        if !h.is_finite() {
            return CompassPoint::N;
        }
        let sector = ((h + 11.25) / 22.5) as usize % 16;
        Self::ROSE[sector]
    }
}

impl std::fmt::Display for CompassPoint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        std::fmt::Debug::fmt(self, f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: f64, b: f64, tol: f64) -> bool {
        (a - b).abs() < tol
    }

    #[test]
    fn reference_locations() {
        let cases = [
            ((31.2599, 30.0599), 136.283_123_823_924_5, 1_288.141_684_117_359_5),
            ((-74.006, 40.7128), 58.483_045_534_333_584, 10_318.489_603_328_63),
            ((-0.1278, 51.5074), 118.989_674_422_289_26, 4_799.319_907_333_771),
            ((106.8456, -6.2088), -64.848_135_052_246_5, 7_930.010_080_911_028),
        ];
        for ((lon, lat), b, d) in cases {
            let loc = GeoCoordinate::from_degrees(lon, lat, 0.0);
            assert!(close(bearing(&loc).value(), b, 1e-9), "bearing at {loc}");
            assert!(close(distance(&loc).value(), d, 1e-6), "distance at {loc}");
        }
    }

    #[test]
    fn bearing_is_not_normalised() {
        let jakarta = GeoCoordinate::from_degrees(106.8456, -6.2088, 7.0);
        let q = Qibla::from_location(&jakarta);
        assert!(q.bearing.value() < 0.0);
        assert!(close(q.compass_bearing().value(), 295.151_864_947_753_5, 1e-9));
        assert_eq!(q.compass_point(), CompassPoint::WNW);
    }

    #[test]
    fn at_the_kaaba_distance_vanishes() {
        let kaaba = GeoCoordinate::new(KAABA_LONGITUDE, KAABA_LATITUDE, qtty::Hours::new(3.0));
        let q = Qibla::from_location(&kaaba);
        assert!(q.distance.value().abs() < 1e-3);
        assert!(!q.distance.value().is_nan());
    }

    #[test]
    fn at_the_kaaba_bearing_is_zero() {
        let kaaba = GeoCoordinate::new(KAABA_LONGITUDE, KAABA_LATITUDE, qtty::Hours::new(3.0));
        let b = bearing(&kaaba);
        assert!(b.value().is_finite());
        assert_eq!(b.value(), 0.0);
        assert_eq!(CompassPoint::from_heading(b), CompassPoint::N);
    }

    #[test]
    fn independent_of_utc_offset() {
        let a = GeoCoordinate::from_degrees(31.2599, 30.0599, 2.0);
        let b = GeoCoordinate::from_degrees(31.2599, 30.0599, -7.0);
        assert_eq!(Qibla::from_location(&a), Qibla::from_location(&b));
    }

    #[test]
    fn compass_sectors() {
        assert_eq!(CompassPoint::from_heading(Degrees::new(0.0)), CompassPoint::N);
        assert_eq!(CompassPoint::from_heading(Degrees::new(359.0)), CompassPoint::N);
        assert_eq!(CompassPoint::from_heading(Degrees::new(-90.0)), CompassPoint::W);
        assert_eq!(CompassPoint::from_heading(Degrees::new(136.28)), CompassPoint::SE);
        assert_eq!(CompassPoint::from_heading(Degrees::new(58.48)), CompassPoint::ENE);
        assert_eq!(CompassPoint::from_heading(Degrees::new(f64::NAN)), CompassPoint::N);
    }
}
