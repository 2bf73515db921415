// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Code to turn mean J2000 positions into apparent positions of date, and to
//! get the matching sidereal time.
//!
//! Everything here is a thin layer over ERFA (IAU 2006 precession, IAU 2000A
//! nutation). Annual aberration uses Earth's barycentric velocity from
//! `eraEpv00`; light deflection by the Sun is neglected.

use log::trace;
use marlu::{
    erfa::{
        aliases::{eraAnp, eraC2s, eraEpv00, eraGst06a, eraPn, eraPnm06a, eraRxp, eraS2c},
        constants::{ERFA_DC, ERFA_DJM0},
    },
    RADec,
};

/// Move a mean J2000 (ICRS) position to the apparent position with respect to
/// the true equator and equinox at the modified Julian date `tt_mjd` (TT).
pub fn apparent_place(radec_j2000: RADec, tt_mjd: f64) -> RADec {
    // TT stands in for TDB.
    let (warning, _, pvb) = eraEpv00(ERFA_DJM0, tt_mjd);
    if warning {
        trace!("Earth's velocity at MJD {tt_mjd} is outside 1900-2100 AD");
    }
    let velocity = pvb[1].map(|v| v / ERFA_DC);

    let p = eraS2c(radec_j2000.ra, radec_j2000.dec);
    let (_, p) = eraPn([p[0] + velocity[0], p[1] + velocity[1], p[2] + velocity[2]]);
    let p = eraRxp(eraPnm06a(ERFA_DJM0, tt_mjd), p);

    let (ra, dec) = eraC2s(p);
    RADec::from_radians(eraAnp(ra), dec)
}

/// Greenwich apparent sidereal time \[radians\], given modified Julian dates
/// in UT1 and TT.
pub fn gast(ut1_mjd: f64, tt_mjd: f64) -> f64 {
    eraGst06a(ERFA_DJM0, ut1_mjd, ERFA_DJM0, tt_mjd)
}
