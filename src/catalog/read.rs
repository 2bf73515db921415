// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Parsing of observation-planning (".ope") files.
//!
//! Only lines shaped like
//!
//! ```text
//! TARGET1=OBJECT="M42" RA=053517.3 DEC=-052700 EQUINOX=2000.0
//! ```
//!
//! are read; everything else in the file (telescope directives, comments,
//! blank lines) is skipped. RA and Dec are fixed-width sexagesimal without
//! delimiters: two characters of hours (degrees), two of minutes, and the
//! remainder is seconds.

use std::{fs::File, io::BufReader, path::Path};

use lazy_static::lazy_static;
use log::{debug, trace};
use regex::Regex;

use super::{Catalog, CatalogError, EquatorialCoordinate};
use crate::{
    cli::Warn,
    sexagesimal::{sexagesimal_dms_string_to_degrees, sexagesimal_hms_string_to_degrees},
};

lazy_static! {
    static ref OPE_ENTRY: Regex = Regex::new(
        r#"^(?P<key>\w+)=OBJECT="(?P<name>\w+)" RA=(?P<ra>[0-9.+\-]+) DEC=(?P<dec>[0-9.+\-]+) EQUINOX=(?P<equinox>.*)"#
    )
    .unwrap();
}

/// Given the path to a ".ope" file, return a [`Catalog`] of all of its
/// entries. It is an error for the file to be unreadable or to contain no
/// entries.
pub fn read_catalog_file<P: AsRef<Path>>(path: P) -> Result<Catalog, CatalogError> {
    fn inner(path: &Path) -> Result<Catalog, CatalogError> {
        debug!("Attempting to read catalog {}", path.display());
        let io_err = |source| CatalogError::Io {
            path: path.to_path_buf(),
            source,
        };

        let mut buf = BufReader::new(File::open(path).map_err(io_err)?);
        let catalog = match parse_catalog(&mut buf) {
            Ok(c) => c,
            Err(CatalogError::Read(e)) => return Err(io_err(e)),
            Err(e) => return Err(e),
        };
        if catalog.is_empty() {
            return Err(CatalogError::Empty(path.to_path_buf()));
        }
        debug!("Read {} catalog entries", catalog.len());
        Ok(catalog)
    }
    inner(path.as_ref())
}

/// Parse a buffer containing ".ope" text into a [`Catalog`]. If two entries
/// share a key, the later one wins.
pub fn parse_catalog<T: std::io::BufRead>(buf: &mut T) -> Result<Catalog, CatalogError> {
    let mut line = String::new();
    let mut line_num: u32 = 0;
    let mut catalog = Catalog::new();

    loop {
        line.clear();
        if buf.read_line(&mut line)? == 0 {
            break;
        }
        line_num += 1;

        let caps = match OPE_ENTRY.captures(line.trim()) {
            Some(caps) => caps,
            None => {
                trace!("Skipping line {line_num}");
                continue;
            }
        };
        let key = &caps["key"];
        let ra_field = &caps["ra"];
        let dec_field = &caps["dec"];

        let ra_string = ope_ra_to_sexagesimal(ra_field);
        let ra = sexagesimal_hms_string_to_degrees(&ra_string).map_err(|source| {
            CatalogError::BadCoordinate {
                line_num,
                field: "RA",
                value: ra_field.to_string(),
                source,
            }
        })?;
        let dec_string = ope_dec_to_sexagesimal(dec_field);
        let dec = sexagesimal_dms_string_to_degrees(&dec_string).map_err(|source| {
            CatalogError::BadCoordinate {
                line_num,
                field: "DEC",
                value: dec_field.to_string(),
                source,
            }
        })?;
        if !(-90.0..=90.0).contains(&dec) {
            return Err(CatalogError::InvalidDec { line_num, dec });
        }
        // RA is a longitude; e.g. "243000" is 24h30m, i.e. 7.5°.
        let ra = ra.rem_euclid(360.0);

        let equinox = caps["equinox"].trim();
        if equinox.parse::<f64>().ok() != Some(2000.0) {
            format!(
                "Catalog line {line_num} ({key}) has EQUINOX={equinox}; coordinates are treated as J2000 regardless"
            )
            .warn();
        }

        debug!(
            "{key} ({}): RA {ra_string} ({ra}°), DEC {dec_string} ({dec}°)",
            &caps["name"]
        );
        if catalog
            .insert(key.to_string(), EquatorialCoordinate::from_degrees(ra, dec))
            .is_some()
        {
            debug!("{key} was already in the catalog; replacing it");
        }
    }

    Ok(catalog)
}

/// Turn an ".ope" RA field into a letter-delimited sexagesimal string, e.g.
/// "053517.3" into "05h35m17.3s". Fields shorter than 4 characters produce
/// empty minutes or seconds, which fail to parse later.
pub fn ope_ra_to_sexagesimal(field: &str) -> String {
    format!(
        "{}h{}m{}s",
        clamped(field, 0, 2),
        clamped(field, 2, 4),
        clamped(field, 4, usize::MAX)
    )
}

/// Turn an ".ope" DEC field into a letter-delimited sexagesimal string, e.g.
/// "-052700" into "-05d27m00s". A missing sign means positive.
pub fn ope_dec_to_sexagesimal(field: &str) -> String {
    let (sign, magnitude) = match field.chars().next() {
        Some(c @ ('+' | '-')) => (c, &field[1..]),
        _ => ('+', field),
    };
    format!(
        "{sign}{}d{}m{}s",
        clamped(magnitude, 0, 2),
        clamped(magnitude, 2, 4),
        clamped(magnitude, 4, usize::MAX)
    )
}

/// Slice `s[start..end]`, clamping both ends to the string's length. The
/// regex only admits ASCII, so byte offsets are character offsets.
fn clamped(s: &str, start: usize, end: usize) -> &str {
    let len = s.len();
    &s[start.min(len)..end.min(len)]
}
