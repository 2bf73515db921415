// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Altitude, azimuth and airmass of catalog targets as seen from a site on
//! the ground.
//!
//! No atmospheric refraction is applied, and the site's height is not used;
//! for stars, diurnal parallax and aberration are far below the precision that
//! matters here.

mod error;

pub use error::ObserveError;

use std::fmt;

use hifitime::Epoch;
use marlu::{erfa::aliases::eraAnp, AzEl, LatLngHeight, RADec};

use crate::{
    catalog::EquatorialCoordinate,
    precession::{apparent_place, gast},
    time::{tt_mjd, ut1_mjd},
};

/// Secant of the zenith angle, only meaningful while a target is above the
/// horizon.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Airmass {
    Secant(f64),
    BelowHorizon,
}

impl Airmass {
    /// An altitude of exactly 0 is below the horizon.
    pub fn from_altitude(altitude_rad: f64) -> Airmass {
        if altitude_rad > 0.0 {
            Airmass::Secant(1.0 / altitude_rad.sin())
        } else {
            Airmass::BelowHorizon
        }
    }

    pub fn value(&self) -> Option<f64> {
        match self {
            Airmass::Secant(x) => Some(*x),
            Airmass::BelowHorizon => None,
        }
    }
}

impl fmt::Display for Airmass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Airmass::Secant(x) => write!(f, "{x:.4}"),
            Airmass::BelowHorizon => write!(f, "Below Horizon"),
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub struct HorizontalObservation {
    pub epoch: Epoch,

    /// Azimuth (north through east, [0, 2π)) and elevation \[radians\].
    pub azel: AzEl,

    pub airmass: Airmass,

    /// Where the target is with respect to the true equator and equinox of
    /// date \[radians\].
    pub apparent: RADec,

    /// Local apparent sidereal time \[radians\].
    pub last: f64,
}

impl HorizontalObservation {
    pub fn altitude_deg(&self) -> f64 {
        self.azel.el.to_degrees()
    }

    pub fn azimuth_deg(&self) -> f64 {
        self.azel.az.to_degrees()
    }

    pub fn is_above_horizon(&self) -> bool {
        matches!(self.airmass, Airmass::Secant(_))
    }
}

/// Where a catalog target appears on the sky at `epoch`, seen from `site`.
/// `dut1` is UT1 - UTC \[seconds\].
///
/// This function is pure; the same inputs always give the same output.
pub fn observe(
    coord: &EquatorialCoordinate,
    epoch: Epoch,
    site: &LatLngHeight,
    dut1: f64,
) -> Result<HorizontalObservation, ObserveError> {
    check_finite("right ascension", coord.radec.ra)?;
    check_finite("declination", coord.radec.dec)?;
    check_finite("site longitude", site.longitude_rad)?;
    check_finite("site latitude", site.latitude_rad)?;
    check_finite("UT1 - UTC", dut1)?;
    let tt = tt_mjd(epoch);
    check_finite("time", tt)?;

    let apparent = apparent_place(coord.radec, tt);
    let last = local_apparent_sidereal_time(epoch, site.longitude_rad, dut1);
    let azel = horizon(apparent, last, site.latitude_rad);

    Ok(HorizontalObservation {
        epoch,
        azel,
        airmass: Airmass::from_altitude(azel.el),
        apparent,
        last,
    })
}

/// Local apparent sidereal time \[radians\] at `longitude_rad` (east
/// positive).
pub(crate) fn local_apparent_sidereal_time(epoch: Epoch, longitude_rad: f64, dut1: f64) -> f64 {
    eraAnp(gast(ut1_mjd(epoch, dut1), tt_mjd(epoch)) + longitude_rad)
}

/// An apparent place of date seen at `latitude_rad` when the local apparent
/// sidereal time is `last`.
pub(crate) fn horizon(apparent: RADec, last: f64, latitude_rad: f64) -> AzEl {
    let azel = apparent.to_hadec(last).to_azel(latitude_rad);
    AzEl::from_radians(eraAnp(azel.az), azel.el)
}

fn check_finite(what: &'static str, value: f64) -> Result<(), ObserveError> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(ObserveError::InvalidInput { what, value })
    }
}
