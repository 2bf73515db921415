// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Watch the altitude, azimuth and airmass of catalog targets, now and a
//! little while from now.

#[cfg(test)]
mod tests;

use std::{num::NonZeroUsize, path::PathBuf};

use clap::Parser;
use hifitime::Epoch;
use itertools::Itertools;
use log::{debug, info, trace};
use marlu::LatLngHeight;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::common::{
    display_warnings, InfoPrinter, Warn, ARG_FILE_HELP, OFFSET_HELP, OPE_HELP, SITE_HELP,
};
use crate::{
    catalog::read_catalog_file,
    constants::{default_site, DEFAULT_OFFSET_MINUTES, DEFAULT_OPE_FILE, REFRESH_INTERVAL},
    params::ObserveParams,
    time::future_epoch,
    AirmassError,
};

#[derive(Parser, Debug, Clone, Default, Serialize, Deserialize)]
pub(super) struct ObserveCliArgs {
    #[clap(long, help = OPE_HELP.as_str(), help_heading = "INPUT FILES")]
    pub(super) ope: Option<PathBuf>,

    #[clap(
        long,
        allow_hyphen_values = true,
        help = OFFSET_HELP.as_str(),
        help_heading = "OBSERVATION PARAMETERS"
    )]
    pub(super) offset: Option<String>,

    /// Only show these catalog keys. The default is to show every target in
    /// the catalog, sorted by key.
    #[clap(long, multiple_values(true), help_heading = "OBSERVATION PARAMETERS")]
    pub(super) object: Option<Vec<String>>,

    #[clap(
        long, help = SITE_HELP.as_str(), help_heading = "OBSERVATION PARAMETERS",
        number_of_values = 3,
        allow_hyphen_values = true,
        value_names = &["LONG_DEG", "LAT_DEG", "HEIGHT_M"]
    )]
    pub(super) site: Option<Vec<f64>>,

    /// Use this value as the DUT1 (UT1 - UTC) [seconds]. Default: 0
    #[clap(long, allow_hyphen_values = true, help_heading = "OBSERVATION PARAMETERS")]
    #[serde(default)]
    pub(super) dut1: Option<f64>,

    /// Stop after this many refreshes. The default is to keep refreshing
    /// until killed.
    #[clap(long, help_heading = "OUTPUT")]
    pub(super) num_refreshes: Option<usize>,
}

impl ObserveCliArgs {
    fn merge(self, other: Self) -> Self {
        Self {
            ope: self.ope.or(other.ope),
            offset: self.offset.or(other.offset),
            object: self.object.or(other.object),
            site: self.site.or(other.site),
            dut1: self.dut1.or(other.dut1),
            num_refreshes: self.num_refreshes.or(other.num_refreshes),
        }
    }
}

#[derive(Parser, Debug, Clone, Default, Serialize, Deserialize)]
pub(super) struct ObserveArgs {
    #[clap(name = "ARGUMENTS_FILE", help = ARG_FILE_HELP.as_str(), parse(from_os_str))]
    pub(super) args_file: Option<PathBuf>,

    #[clap(flatten)]
    #[serde(rename = "observe")]
    #[serde(default)]
    pub(super) observe_args: ObserveCliArgs,
}

impl ObserveArgs {
    /// Both command-line and file arguments overlap in terms of what is
    /// available; this function consolidates everything that was specified
    /// into a single struct. Where applicable, it will prefer CLI parameters
    /// over those in the file.
    pub(super) fn merge(self) -> Result<ObserveArgs, AirmassError> {
        debug!("Merging command-line arguments with the argument file");

        let cli_args = self;

        if let Some(arg_file) = cli_args.args_file {
            // Read in the file arguments. Ensure all of the file args are
            // accounted for by pattern matching.
            let ObserveArgs {
                args_file: _,
                observe_args,
            } = unpack_arg_file!(arg_file);

            // Merge all the arguments, preferring the CLI args when available.
            Ok(ObserveArgs {
                args_file: None,
                observe_args: cli_args.observe_args.merge(observe_args),
            })
        } else {
            Ok(cli_args)
        }
    }

    fn parse(self) -> Result<ObserveParams, AirmassError> {
        debug!("{:#?}", self);

        let Self {
            args_file: _,
            observe_args:
                ObserveCliArgs {
                    ope,
                    offset,
                    object,
                    site,
                    dut1,
                    num_refreshes,
                },
        } = self;

        let ope = ope.unwrap_or_else(|| PathBuf::from(DEFAULT_OPE_FILE));
        let catalog = read_catalog_file(&ope)?;

        let keys: Vec<String> = match object {
            Some(objects) => {
                if objects.is_empty() {
                    return Err(ObserveArgsError::NoObjects.into());
                }
                for key in &objects {
                    if !catalog.contains_key(key) {
                        return Err(ObserveArgsError::UnknownObject {
                            key: key.clone(),
                            available: catalog.sorted_keys().join(", "),
                        }
                        .into());
                    }
                }
                objects.into_iter().unique().collect()
            }
            None => catalog
                .sorted_keys()
                .into_iter()
                .map(|k| k.to_string())
                .collect(),
        };

        let mut catalog_printer = InfoPrinter::new("Catalog".into());
        catalog_printer.push_line(format!("Read from: {}", ope.display()).into());
        catalog_printer.push_block(vec![
            format!("{} celestial objects", catalog.len()).into(),
            format!("Showing: {}", keys.join(", ")).into(),
        ]);
        catalog_printer.display();

        let site = match site {
            Some(v) => {
                if v.len() != 3 || v.iter().any(|f| !f.is_finite()) {
                    return Err(ObserveArgsError::BadSite { pos: v }.into());
                }
                if !(-90.0..=90.0).contains(&v[1]) {
                    return Err(ObserveArgsError::LatitudeInvalid(v[1]).into());
                }
                LatLngHeight {
                    longitude_rad: v[0].to_radians(),
                    latitude_rad: v[1].to_radians(),
                    height_metres: v[2],
                }
            }
            None => default_site(),
        };
        let mut site_printer = InfoPrinter::new("Site".into());
        site_printer.push_line(
            format!(
                "Longitude: {:.6}°, latitude: {:.6}°, height: {}m",
                site.longitude_rad.to_degrees(),
                site.latitude_rad.to_degrees(),
                site.height_metres
            )
            .into(),
        );
        site_printer.display();

        let dut1 = dut1.unwrap_or(0.0);
        if !dut1.is_finite() {
            return Err(ObserveArgsError::Dut1NotFinite(dut1).into());
        }

        let num_refreshes = match num_refreshes {
            Some(n) => Some(NonZeroUsize::new(n).ok_or(ObserveArgsError::ZeroRefreshes)?),
            None => None,
        };

        let offset_text = offset.unwrap_or_else(|| DEFAULT_OFFSET_MINUTES.to_string());
        // An unusable offset is still allowed; only the "future" column is
        // affected.
        if let Ok(current) = Epoch::now() {
            if let Err(e) = future_epoch(current, &offset_text) {
                format!("{e}; future observations will be reported as invalid").warn();
            }
        }

        let mut time_printer = InfoPrinter::new("Time".into());
        time_printer.push_block(vec![
            format!("DUT1: {dut1} s").into(),
            format!("Future offset: {offset_text} minutes").into(),
        ]);
        time_printer.push_line(
            match num_refreshes {
                Some(n) => format!("Refreshing every {REFRESH_INTERVAL:?}, {n} times"),
                None => format!("Refreshing every {REFRESH_INTERVAL:?}"),
            }
            .into(),
        );
        time_printer.display();

        display_warnings();

        let targets = keys
            .into_iter()
            .filter_map(|k| catalog.get(&k).copied().map(|c| (k, c)))
            .collect();

        Ok(ObserveParams {
            targets,
            site,
            dut1,
            offset_text,
            num_refreshes,
            refresh_interval: REFRESH_INTERVAL,
        })
    }

    pub(super) fn run(self, dry_run: bool) -> Result<(), AirmassError> {
        debug!("Converting arguments into parameters");
        trace!("{:#?}", self);
        let params = self.parse()?;

        if dry_run {
            info!("Dry run -- exiting now.");
            return Ok(());
        }

        params.run()?;
        Ok(())
    }
}

#[derive(Error, Debug)]
pub(super) enum ObserveArgsError {
    #[error("No objects were selected")]
    NoObjects,

    #[error("Object '{key}' isn't in the catalog; available objects: {available}")]
    UnknownObject { key: String, available: String },

    #[error("Site specified as {pos:?}, not [<Longitude>, <Latitude>, <Height>]")]
    BadSite { pos: Vec<f64> },

    #[error("Site latitude {0}° was not within -90 to 90!")]
    LatitudeInvalid(f64),

    #[error("DUT1 {0} is not a finite number of seconds")]
    Dut1NotFinite(f64),

    #[error("Number of refreshes cannot be 0!")]
    ZeroRefreshes,
}
