// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

/*!
Useful constants.

Angles are in the units named by each constant; internally, radians are used
everywhere.
 */

use std::time::Duration;

use marlu::LatLngHeight;

/// Geodetic latitude of the observing site (Maunakea) \[degrees\].
pub const SITE_LATITUDE_DEG: f64 = 19.825556;

/// Geodetic longitude of the observing site, east positive \[degrees\].
pub const SITE_LONGITUDE_DEG: f64 = -155.476111;

/// Height of the observing site above the ellipsoid \[metres\].
pub const SITE_HEIGHT_M: f64 = 4139.0;

/// The catalog read when none is specified.
pub const DEFAULT_OPE_FILE: &str = "2025-11-12.ope";

/// How far ahead the "future" observation is made when no offset is given.
/// This is text, because that's what users supply.
pub const DEFAULT_OFFSET_MINUTES: &str = "20";

/// Time between refreshes of the displayed observations.
pub const REFRESH_INTERVAL: Duration = Duration::from_secs(1);

/// The fixed observing site.
pub fn default_site() -> LatLngHeight {
    LatLngHeight {
        longitude_rad: SITE_LONGITUDE_DEG.to_radians(),
        latitude_rad: SITE_LATITUDE_DEG.to_radians(),
        height_metres: SITE_HEIGHT_M,
    }
}
