// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Targets read from observation-planning (".ope") files.

mod error;
mod read;

pub use error::CatalogError;
pub use read::{ope_dec_to_sexagesimal, ope_ra_to_sexagesimal, parse_catalog, read_catalog_file};

use std::ops::{Deref, DerefMut};

use indexmap::IndexMap;
use marlu::RADec;

/// The reference frame of catalog coordinates. Only J2000 is supported; a
/// file's EQUINOX field does not change this.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, strum_macros::Display)]
pub enum Equinox {
    #[default]
    J2000,
}

/// A mean-of-J2000 position of a catalog target.
#[derive(Debug, Clone, Copy)]
pub struct EquatorialCoordinate {
    /// \[radians\]
    pub radec: RADec,
    pub equinox: Equinox,
}

impl EquatorialCoordinate {
    pub fn from_degrees(ra: f64, dec: f64) -> Self {
        Self {
            radec: RADec::from_degrees(ra, dec),
            equinox: Equinox::J2000,
        }
    }
}

/// An [`IndexMap`] of catalog keys (the token before "=OBJECT") for keys and
/// their coordinates for values.
#[derive(Debug, Clone, Default)]
pub struct Catalog(IndexMap<String, EquatorialCoordinate>);

impl Catalog {
    /// Create an empty [`Catalog`].
    pub fn new() -> Self {
        Self::default()
    }

    /// All keys, sorted lexically. This is the order in which targets are
    /// presented.
    pub fn sorted_keys(&self) -> Vec<&str> {
        let mut keys: Vec<&str> = self.keys().map(|k| k.as_str()).collect();
        keys.sort_unstable();
        keys
    }
}

impl From<IndexMap<String, EquatorialCoordinate>> for Catalog {
    fn from(c: IndexMap<String, EquatorialCoordinate>) -> Self {
        Self(c)
    }
}

impl Deref for Catalog {
    type Target = IndexMap<String, EquatorialCoordinate>;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl DerefMut for Catalog {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.0
    }
}

impl FromIterator<(String, EquatorialCoordinate)> for Catalog {
    fn from_iter<I: IntoIterator<Item = (String, EquatorialCoordinate)>>(iter: I) -> Self {
        let mut c = Self::new();
        for (key, coord) in iter {
            c.insert(key, coord);
        }
        c
    }
}

impl IntoIterator for Catalog {
    type Item = (String, EquatorialCoordinate);
    type IntoIter = indexmap::map::IntoIter<String, EquatorialCoordinate>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}
