// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Error type for all airmass-related errors. This should be the *only* error
//! enum that is publicly visible from the binary.

use thiserror::Error;

use super::observe::ObserveArgsError;
use crate::{catalog::CatalogError, observe::ObserveError};

/// The *only* publicly visible error from the `airmass` binary. Each message
/// is meant for a human.
#[derive(Error, Debug)]
pub enum AirmassError {
    /// An error related to reading the catalog (.ope) file.
    #[error("{0}\n\nCatalog lines must look like: KEY=OBJECT=\"NAME\" RA=HHMMSS.S DEC=+DDMMSS.S EQUINOX=2000.0")]
    Catalog(String),

    /// An error related to the arguments of an observation.
    #[error("{0}")]
    Observe(String),

    /// An error related to argument files.
    #[error("{0}\n\nArgument files are TOML or JSON, with options in an [observe] table")]
    ArgFile(String),

    /// A generic error that can't be clarified further, e.g. IO errors.
    #[error("{0}")]
    Generic(String),
}

impl From<CatalogError> for AirmassError {
    fn from(e: CatalogError) -> Self {
        let s = e.to_string();
        match e {
            CatalogError::Io { .. } | CatalogError::Read(_) => Self::Generic(s),
            CatalogError::Empty(_)
            | CatalogError::BadCoordinate { .. }
            | CatalogError::InvalidDec { .. } => Self::Catalog(s),
        }
    }
}

impl From<ObserveArgsError> for AirmassError {
    fn from(e: ObserveArgsError) -> Self {
        Self::Observe(e.to_string())
    }
}

impl From<ObserveError> for AirmassError {
    fn from(e: ObserveError) -> Self {
        Self::Observe(e.to_string())
    }
}

impl From<std::io::Error> for AirmassError {
    fn from(e: std::io::Error) -> Self {
        Self::Generic(e.to_string())
    }
}
