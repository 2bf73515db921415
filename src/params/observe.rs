// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Parameters for repeatedly observing catalog targets, and the reports made
//! each refresh.

use std::{num::NonZeroUsize, thread};

use hifitime::Epoch;
use log::{debug, trace};
use marlu::LatLngHeight;

use crate::{
    catalog::{EquatorialCoordinate, Equinox},
    cli::InfoPrinter,
    observe::{observe, HorizontalObservation, ObserveError},
    sexagesimal::{degrees_to_sexagesimal_dms, degrees_to_sexagesimal_hms},
    time::{format_utc, future_epoch, OffsetError},
};

const INVALID_OFFSET: &str = "Invalid Offset";

pub(crate) struct ObserveParams {
    /// Catalog keys and coordinates, in display order.
    pub(crate) targets: Vec<(String, EquatorialCoordinate)>,

    pub(crate) site: LatLngHeight,

    /// UT1 - UTC \[seconds\].
    pub(crate) dut1: f64,

    /// The user's offset for the "future" observation \[minutes\]. This is
    /// kept as text; if it isn't a number, future observations are reported
    /// as invalid, but current ones are unaffected.
    pub(crate) offset_text: String,

    /// Stop after this many refreshes. If `None`, run until killed.
    pub(crate) num_refreshes: Option<NonZeroUsize>,

    pub(crate) refresh_interval: std::time::Duration,
}

impl ObserveParams {
    /// Report on every target once per refresh interval.
    pub(crate) fn run(&self) -> Result<(), ObserveError> {
        let mut num_done = 0;
        loop {
            // One clock reading per refresh, shared by all targets.
            let current = Epoch::now().map_err(|e| ObserveError::Clock(e.to_string()))?;
            trace!("Refresh {num_done} at {current}");
            for (key, coord) in &self.targets {
                self.report(key, coord, current)?.into_printer().display();
            }

            num_done += 1;
            if let Some(n) = self.num_refreshes {
                if num_done >= n.get() {
                    debug!("Finished {num_done} refreshes");
                    break;
                }
            }
            thread::sleep(self.refresh_interval);
        }

        Ok(())
    }

    /// Observe one target at `current`, and at `current` plus the offset.
    pub(crate) fn report(
        &self,
        key: &str,
        coord: &EquatorialCoordinate,
        current: Epoch,
    ) -> Result<TargetReport, ObserveError> {
        let current_obs = observe(coord, current, &self.site, self.dut1)?;
        let future = match future_epoch(current, &self.offset_text) {
            Ok(future) => Ok(Column::new(&observe(coord, future, &self.site, self.dut1)?)),
            Err(e) => Err(e),
        };

        Ok(TargetReport {
            key: key.to_string(),
            equinox: coord.equinox,
            ra: degrees_to_sexagesimal_hms(coord.radec.ra.to_degrees(), 2),
            dec: degrees_to_sexagesimal_dms(coord.radec.dec.to_degrees(), 2),
            current: Column::new(&current_obs),
            future,
        })
    }
}

/// Everything shown for a target in one refresh.
pub(crate) struct TargetReport {
    pub(crate) key: String,
    pub(crate) equinox: Equinox,
    pub(crate) ra: String,
    pub(crate) dec: String,
    pub(crate) current: Column,
    pub(crate) future: Result<Column, OffsetError>,
}

/// The text of one observation.
pub(crate) struct Column {
    pub(crate) time: String,
    pub(crate) altitude: String,
    pub(crate) azimuth: String,
    pub(crate) airmass: String,
}

impl Column {
    fn new(obs: &HorizontalObservation) -> Column {
        Column {
            time: format_utc(obs.epoch),
            altitude: format!("{:.4}°", obs.altitude_deg()),
            azimuth: format!("{:.4}°", obs.azimuth_deg()),
            airmass: obs.airmass.to_string(),
        }
    }

    fn cells(&self) -> [&str; 4] {
        [&self.time, &self.altitude, &self.azimuth, &self.airmass]
    }
}

impl TargetReport {
    pub(crate) fn into_printer(self) -> InfoPrinter {
        let mut printer = InfoPrinter::new("Observation Details".into());
        printer.push_block(vec![
            format!("Object Name: {}", self.key).into(),
            format!("RA ({}):  {}", self.equinox, self.ra).into(),
            format!("DEC ({}): {}", self.equinox, self.dec).into(),
        ]);

        let future = match &self.future {
            Ok(c) => c.cells(),
            Err(_) => [INVALID_OFFSET; 4],
        };
        let mut table = vec![format!("{:<12} {:<21} {}", "", "Current", "Future").into()];
        for ((label, current), future) in ["Time (UTC)", "Altitude", "Azimuth", "Airmass"]
            .into_iter()
            .zip(self.current.cells())
            .zip(future)
        {
            table.push(format!("{label:<12} {current:<21} {future}").into());
        }
        printer.push_block(table);
        printer
    }
}
