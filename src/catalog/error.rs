// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

use std::path::PathBuf;

use thiserror::Error;

use crate::sexagesimal::SexagesimalError;

/// Errors associated with reading a catalog. Lines that don't look like
/// catalog entries are never errors; they are skipped.
#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("Could not read catalog file '{}': {source}", path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("No celestial objects were parsed from '{}'", .0.display())]
    Empty(PathBuf),

    #[error("Catalog line {line_num}: Could not interpret {field} '{value}': {source}")]
    BadCoordinate {
        line_num: u32,
        field: &'static str,
        value: String,
        source: SexagesimalError,
    },

    #[error("Catalog line {line_num}: Dec {dec}° is out of range (-90° <= Dec <= 90°)")]
    InvalidDec { line_num: u32, dec: f64 },

    #[error("Error while reading a catalog: {0}")]
    Read(#[from] std::io::Error),
}
