// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

/*!
Live altitude, azimuth and airmass of the targets listed in an
observation-planning (".ope") file, as seen from a fixed observing site.
 */

pub mod catalog;
mod cli;
pub mod constants;
pub mod observe;
mod params;
pub mod precession;
pub mod sexagesimal;
pub mod time;

// Re-exports.
pub use catalog::{read_catalog_file, Catalog, CatalogError, EquatorialCoordinate};
pub use cli::{AirmassCli, AirmassError};
pub use observe::{observe, Airmass, HorizontalObservation, ObserveError};
