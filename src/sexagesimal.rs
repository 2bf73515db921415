// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

/*!
Code for handling conversion to and from sexagesimal.

Strings are expected in the "letter-delimited" style, e.g. `05h35m17.3s` for
right ascensions and `-05d27m00s` for declinations. The sign is read from the
string itself rather than from the parsed leading field, so that `-00d30m00s`
is correctly negative.
 */

use thiserror::Error;

/// Convert sexagesimal "degrees minutes seconds" to a float \[degrees\]. All
/// fields are treated as magnitudes; `negative` supplies the sign.
pub fn sexagesimal_dms_to_degrees(negative: bool, d: f64, m: f64, s: f64) -> f64 {
    let num = d.abs() + m / 60.0 + s / 3600.0;
    if negative {
        -num
    } else {
        num
    }
}

/// Convert sexagesimal "hours minutes seconds" to a float \[degrees\].
pub fn sexagesimal_hms_to_degrees(negative: bool, h: f64, m: f64, s: f64) -> f64 {
    15.0 * sexagesimal_dms_to_degrees(negative, h, m, s)
}

/// Convert a sexagesimal-formatted string in "degrees minutes seconds" to a
/// float \[degrees\].
///
/// # Examples
///
/// ```
/// # use airmass::sexagesimal::*;
/// # use approx::*;
/// # fn main() -> Result<(), SexagesimalError> {
/// let f = sexagesimal_dms_string_to_degrees("-11d49m01.062s")?;
/// assert_abs_diff_eq!(f, -11.81696167, epsilon = 1e-6);
/// # Ok(())
/// # }
/// ```
pub fn sexagesimal_dms_string_to_degrees(dms: &str) -> Result<f64, SexagesimalError> {
    let (negative, d, m, s) = split_fields(dms, 'd')?;
    Ok(sexagesimal_dms_to_degrees(negative, d, m, s))
}

/// Convert a sexagesimal-formatted string in "hours minutes seconds" to a
/// float \[degrees\].
///
/// # Examples
///
/// ```
/// # use airmass::sexagesimal::*;
/// # use approx::*;
/// # fn main() -> Result<(), SexagesimalError> {
/// let f = sexagesimal_hms_string_to_degrees("05h35m17.3s")?;
/// assert_abs_diff_eq!(f, 83.82208333, epsilon = 1e-6);
/// # Ok(())
/// # }
/// ```
pub fn sexagesimal_hms_string_to_degrees(hms: &str) -> Result<f64, SexagesimalError> {
    let (negative, h, m, s) = split_fields(hms, 'h')?;
    Ok(sexagesimal_hms_to_degrees(negative, h, m, s))
}

/// Split something like "-05d27m00s" into its sign and three fields. `first`
/// is the delimiter after the leading field ('h' or 'd').
fn split_fields(string: &str, first: char) -> Result<(bool, f64, f64, f64), SexagesimalError> {
    let missing_first = || match first {
        'h' => SexagesimalError::MissingH(string.to_string()),
        _ => SexagesimalError::MissingD(string.to_string()),
    };
    let parse = |field: &str| -> Result<f64, SexagesimalError> {
        field
            .parse()
            .map_err(|source| SexagesimalError::ParseFloat {
                string: string.to_string(),
                field: field.to_string(),
                source,
            })
    };

    let (lead, rest) = string.split_once(first).ok_or_else(missing_first)?;
    let (minutes, rest) = rest
        .split_once('m')
        .ok_or_else(|| SexagesimalError::MissingM(string.to_string()))?;
    let seconds = match rest.split_once('s') {
        Some((s, _)) => s,
        None => return Err(SexagesimalError::MissingS(string.to_string())),
    };

    let negative = lead.trim_start().starts_with('-');
    let (lead, minutes, seconds) = (parse(lead)?, parse(minutes)?, parse(seconds)?);

    let out_of_range = |field, value| SexagesimalError::OutOfRange {
        string: string.to_string(),
        field,
        value,
    };
    // Hours may reach 24 (e.g. "24h30m00s"); callers wrap RAs into range.
    if first == 'h' && lead.abs() > 24.0 {
        return Err(out_of_range("hours", lead));
    }
    if !(0.0..60.0).contains(&minutes) {
        return Err(out_of_range("minutes", minutes));
    }
    if !(0.0..60.0).contains(&seconds) {
        return Err(out_of_range("seconds", seconds));
    }
    Ok((negative, lead, minutes, seconds))
}

/// Convert a number in degrees to a sexagesimal-formatted string in "hours
/// minutes seconds", with `precision` decimal places on the seconds. Rounding
/// carries into the minutes and hours, so 59.999s never prints as "60.00s".
///
/// # Examples
///
/// ```
/// # use airmass::sexagesimal::*;
/// let hms = degrees_to_sexagesimal_hms(83.822083333, 2);
/// assert_eq!(hms, "05h35m17.30s");
/// ```
pub fn degrees_to_sexagesimal_hms(f: f64, precision: usize) -> String {
    format_fields(f / 15.0, 'h', precision)
}

/// Convert a number in degrees to a sexagesimal-formatted string in "degrees
/// minutes seconds", with `precision` decimal places on the seconds.
///
/// # Examples
///
/// ```
/// # use airmass::sexagesimal::*;
/// let dms = degrees_to_sexagesimal_dms(-5.45, 2);
/// assert_eq!(dms, "-05d27m00.00s");
/// ```
pub fn degrees_to_sexagesimal_dms(f: f64, precision: usize) -> String {
    format_fields(f, 'd', precision)
}

fn format_fields(value: f64, first: char, precision: usize) -> String {
    let negative = value < 0.0;
    let scale = 10u64.pow(precision as u32);
    // Work in integer units of the last printed digit.
    let ticks = (value.abs() * 3600.0 * scale as f64).round() as u64;
    let frac = ticks % scale;
    let whole_seconds = ticks / scale;
    let lead = whole_seconds / 3600;
    let minutes = (whole_seconds % 3600) / 60;
    let seconds = whole_seconds % 60;

    let sign = if negative && ticks > 0 { "-" } else { "" };
    if precision == 0 {
        format!("{sign}{lead:02}{first}{minutes:02}m{seconds:02}s")
    } else {
        format!("{sign}{lead:02}{first}{minutes:02}m{seconds:02}.{frac:0precision$}s")
    }
}

#[derive(Error, Debug)]
pub enum SexagesimalError {
    #[error("Did not find 'h' when attempting to read sexagesimal string: '{0}'")]
    MissingH(String),

    #[error("Did not find 'd' when attempting to read sexagesimal string: '{0}'")]
    MissingD(String),

    #[error("Did not find 'm' when attempting to read sexagesimal string: '{0}'")]
    MissingM(String),

    #[error("Did not find 's' when attempting to read sexagesimal string: '{0}'")]
    MissingS(String),

    #[error("Couldn't parse '{field}' as a number in sexagesimal string '{string}': {source}")]
    ParseFloat {
        string: String,
        field: String,
        source: std::num::ParseFloatError,
    },

    #[error("The {field} in sexagesimal string '{string}' ({value}) are out of range")]
    OutOfRange {
        string: String,
        field: &'static str,
        value: f64,
    },
}
