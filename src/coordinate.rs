// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Observer location and civil time zone.

use qtty::{Degrees, Hours};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Geographic position plus the fixed UTC offset of the local civil clock.
///
/// Values are not range-checked: latitudes beyond ±90° or absurd offsets
/// flow through the trigonometry and surface as NaN or shifted times.
#[derive(Debug, Copy, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct GeoCoordinate {
    /// Longitude, east positive.
    pub longitude: Degrees,
    /// Latitude, north positive.
    pub latitude: Degrees,
    /// Offset of local civil time from UTC.
    pub utc_offset: Hours,
}

impl GeoCoordinate {
    /// Build from typed quantities.
    pub const fn new(longitude: Degrees, latitude: Degrees, utc_offset: Hours) -> Self {
        Self {
            longitude,
            latitude,
            utc_offset,
        }
    }

    /// Build from raw degrees and hours.
    pub const fn from_degrees(longitude: f64, latitude: f64, utc_offset: f64) -> Self {
        Self::new(
            Degrees::new(longitude),
            Degrees::new(latitude),
            Hours::new(utc_offset),
        )
    }
}

impl std::fmt::Display for GeoCoordinate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "lon {:.4}°, lat {:.4}°, UTC{:+}",
            self.longitude.value(),
            self.latitude.value(),
            self.utc_offset.value()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_degrees_keeps_values() {
        let c = GeoCoordinate::from_degrees(31.2599, 30.0599, 2.0);
        assert_eq!(c.longitude.value(), 31.2599);
        assert_eq!(c.latitude.value(), 30.0599);
        assert_eq!(c.utc_offset.value(), 2.0);
    }

    #[test]
    fn display_shows_signed_offset() {
        let c = GeoCoordinate::from_degrees(-74.006, 40.7128, -5.0);
        assert_eq!(c.to_string(), "lon -74.0060°, lat 40.7128°, UTC-5");
        let c = GeoCoordinate::from_degrees(72.8777, 19.076, 5.5);
        assert!(c.to_string().ends_with("UTC+5.5"));
    }
}
