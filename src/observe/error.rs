// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ObserveError {
    #[error("Cannot observe with a {what} of {value}; it must be a finite number")]
    InvalidInput { what: &'static str, value: f64 },

    #[error("Could not read the system clock: {0}")]
    Clock(String),
}
