/*
    Nyx, blazing fast astrodynamics
    Copyright (C) 2023 Christopher Rabotin <christopher.rabotin@gmail.com>

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

use snafu::prelude::*;

// Re-Export
mod instance;
pub use instance::*;
mod propagator;
pub use propagator::*;
mod rk_methods;
pub use rk_methods::*;
mod options;
pub use options::*;

use crate::dynamics::DynamicsError;

/// Stores the details of the latest integration step of a given propagator instance.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct IntegrationDetails {
    /// number of steps taken since the instance was created
    pub steps: usize,
}

/// Upper bound on the number of fixed steps of a single propagation.
pub const MAX_STEPS: usize = 100_000_000;

#[derive(Debug, PartialEq, Snafu)]
#[snafu(visibility(pub(crate)))]
pub enum PropagationError {
    #[snafu(display("numerical breakdown at step {step}: {source}"))]
    Dynamics { step: usize, source: DynamicsError },
    #[snafu(display("step size must be positive and finite, got {step}"))]
    InvalidStep { step: f64 },
    #[snafu(display("propagation duration must be positive and finite, got {duration}"))]
    InvalidDuration { duration: f64 },
    #[snafu(display(
        "propagating for {duration} with a step of {step:e} exceeds {MAX_STEPS} steps"
    ))]
    TooManySteps { duration: f64, step: f64 },
}

/// Returns the number of fixed steps of size `step` which fit in `duration`, i.e. `floor(duration/step)`.
///
/// A duration shorter than the step is valid and leads to zero steps. More than [`MAX_STEPS`]
/// steps is an error.
pub fn step_count(duration: f64, step: f64) -> Result<usize, PropagationError> {
    ensure!(step.is_finite() && step > 0.0, InvalidStepSnafu { step });
    ensure!(
        duration.is_finite() && duration > 0.0,
        InvalidDurationSnafu { duration }
    );
    // Also catches an infinite quotient
    let steps = (duration / step).floor();
    ensure!(
        steps <= MAX_STEPS as f64,
        TooManyStepsSnafu { duration, step }
    );
    Ok(steps as usize)
}
