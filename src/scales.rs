// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Time-scale marker types.
//!
//! | Marker | Description | Epoch (JD) |
//! |--------|-------------|------------|
//! | [`JD`] | Julian Date | 0.0 |
//! | [`J2000`] | Days since J2000.0 | 2 451 545.0 |

use super::instant::{Time, TimeScale};
use qtty::Days;

/// Julian Date: the identity scale.
#[derive(Debug, Copy, Clone, PartialEq, PartialOrd)]
pub struct JD;

impl TimeScale for JD {
    const LABEL: &'static str = "Julian Day:";

    #[inline(always)]
    fn to_jd(value: Days) -> Days {
        value
    }

    #[inline(always)]
    fn from_jd(jd: Days) -> Days {
        jd
    }
}

/// Day count relative to the J2000.0 epoch (2000-01-01T12:00).
///
/// Midnight of a civil date lands on a half-integer, e.g. 2000-01-01T00:00
/// is `-0.5`. This is the argument of every mean-element polynomial in the
/// solar model.
#[derive(Debug, Copy, Clone, PartialEq, PartialOrd)]
pub struct J2000;

/// The constant offset between JD and the J2000 day count.
const J2000_EPOCH: Days = Days::new(2_451_545.0);

impl TimeScale for J2000 {
    const LABEL: &'static str = "J2000 day";

    #[inline(always)]
    fn to_jd(value: Days) -> Days {
        value + J2000_EPOCH
    }

    #[inline(always)]
    fn from_jd(jd: Days) -> Days {
        jd - J2000_EPOCH
    }
}

impl From<Time<JD>> for Time<J2000> {
    #[inline]
    fn from(t: Time<JD>) -> Self {
        t.to::<J2000>()
    }
}

impl From<Time<J2000>> for Time<JD> {
    #[inline]
    fn from(t: Time<J2000>) -> Self {
        t.to::<JD>()
    }
}
