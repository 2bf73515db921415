// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Helper functions around time.

use hifitime::{Duration, Epoch};
use marlu::erfa::constants::ERFA_DAYSEC;
use thiserror::Error;

/// Future epochs must fall within these (Gregorian, UTC) years.
const YEAR_RANGE: std::ops::RangeInclusive<i32> = 1..=9999;

/// Modified Julian date in Terrestrial Time.
pub fn tt_mjd(epoch: Epoch) -> f64 {
    epoch.to_mjd_tt_days()
}

/// Modified Julian date in UT1, given UT1 - UTC (`dut1`) \[seconds\].
pub fn ut1_mjd(epoch: Epoch, dut1: f64) -> f64 {
    epoch.to_mjd_utc_days() + dut1 / ERFA_DAYSEC
}

/// Parse free-form text as a number of minutes. Anything that isn't a finite
/// number is rejected; negative offsets are fine.
pub fn parse_offset_minutes(text: &str) -> Result<f64, OffsetError> {
    let minutes: f64 = text
        .trim()
        .parse()
        .map_err(|_| OffsetError::NotANumber(text.to_string()))?;
    if !minutes.is_finite() {
        return Err(OffsetError::NotFinite(text.to_string()));
    }
    Ok(minutes)
}

/// `current` moved by the number of minutes in `offset_text`.
pub fn future_epoch(current: Epoch, offset_text: &str) -> Result<Epoch, OffsetError> {
    let minutes = parse_offset_minutes(offset_text)?;
    // hifitime saturates rather than overflows, so check the result too.
    let seconds = minutes * 60.0;
    if seconds.abs() > Duration::MAX.to_seconds() {
        return Err(OffsetError::OutOfRange(offset_text.to_string()));
    }
    let future = current + Duration::from_seconds(seconds);
    let (year, ..) = future.to_gregorian_utc();
    if !YEAR_RANGE.contains(&year) {
        return Err(OffsetError::OutOfRange(offset_text.to_string()));
    }
    Ok(future)
}

/// Format as "YYYY-MM-DD HH:MM:SS" in UTC. Fractions of a second are dropped,
/// not rounded.
pub fn format_utc(epoch: Epoch) -> String {
    let (y, mo, d, h, mi, s, _) = epoch.to_gregorian_utc();
    format!("{y:04}-{mo:02}-{d:02} {h:02}:{mi:02}:{s:02}")
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum OffsetError {
    #[error("Could not interpret '{0}' as a number of minutes")]
    NotANumber(String),

    #[error("The offset '{0}' is not a finite number of minutes")]
    NotFinite(String),

    #[error("The offset '{0}' minutes is too far from the current time")]
    OutOfRange(String),
}
