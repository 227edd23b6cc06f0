/*
    Nyx, blazing fast astrodynamics
    Copyright (C) 2018-onwards Christopher Rabotin <christopher.rabotin@gmail.com>

    This program is free software: you can redistribute it and/or modify
    it under the terms of the GNU Affero General Public License as published
    by the Free Software Foundation, either version 3 of the License, or
    (at your option) any later version.

    This program is distributed in the hope that it will be useful,
    but WITHOUT ANY WARRANTY; without even the implied warranty of
    MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
    GNU Affero General Public License for more details.

    You should have received a copy of the GNU Affero General Public License
    along with this program.  If not, see <https://www.gnu.org/licenses/>.
*/

use std::fmt;

use super::{InvalidStepSnafu, PropagationError};
use snafu::ensure;
use typed_builder::TypedBuilder;

/// PropOpts stores the integrator options.
///
/// Only fixed steps are supported: the step is given in normalized time and stays constant for
/// the whole propagation.
#[derive(Clone, Copy, Debug, PartialEq, TypedBuilder)]
#[builder(doc)]
pub struct PropOpts {
    #[builder(default = 1e-3)]
    pub step: f64,
    /// Propagations of at least this many steps are reported at the info level
    #[builder(default = 10_000)]
    pub log_threshold: usize,
}

impl PropOpts {
    /// `with_fixed_step` initializes a `PropOpts` with the provided normalized step.
    pub fn with_fixed_step(step: f64) -> Self {
        Self::builder().step(step).build()
    }

    /// Ensures that the step is usable by a fixed step integrator.
    pub fn validate(&self) -> Result<(), PropagationError> {
        ensure!(
            self.step.is_finite() && self.step > 0.0,
            InvalidStepSnafu { step: self.step }
        );
        Ok(())
    }
}

impl Default for PropOpts {
    fn default() -> Self {
        Self::builder().build()
    }
}

impl fmt::Display for PropOpts {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "fixed step: {:e}", self.step)
    }
}
