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

use crate::cosmic::{Cr3bpState, MassRatio};
use crate::dynamics::Cr3bpDynamics;
use crate::errors::HaloError;
use crate::propagators::{step_count, PropagationError, Propagator};
use std::error::Error;
use std::fmt;
use std::path::{Path, PathBuf};

/// Store the planar positions of a propagation in the rotating frame.
///
/// Sample `i` is the position at the start of step `i`, i.e. at normalized time `i * step`.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Traj {
    pub xs: Vec<f64>,
    pub ys: Vec<f64>,
    /// Fixed step between two samples
    pub step: f64,
}

impl Traj {
    /// Initializes an empty trajectory with room for exactly `samples` positions.
    pub fn with_capacity(samples: usize, step: f64) -> Self {
        Self {
            xs: Vec::with_capacity(samples),
            ys: Vec::with_capacity(samples),
            step,
        }
    }

    /// Propagates the initial state with the provided propagator for `floor(duration/step)` steps.
    pub fn propagate(
        prop: &Propagator<Cr3bpDynamics>,
        initial_state: Cr3bpState,
        duration: f64,
    ) -> Result<Self, PropagationError> {
        let steps = step_count(duration, prop.opts.step)?;
        let mut traj = Self::with_capacity(steps, prop.opts.step);

        prop.with(initial_state).for_steps_with(steps, |_, state| {
            traj.xs.push(state.x);
            traj.ys.push(state.y);
        })?;

        Ok(traj)
    }

    pub fn len(&self) -> usize {
        self.xs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.xs.is_empty()
    }

    /// Iterates over the `(x, y)` positions
    pub fn iter(&self) -> impl Iterator<Item = (f64, f64)> + '_ {
        self.xs.iter().copied().zip(self.ys.iter().copied())
    }

    /// Normalized time of each sample
    pub fn times(&self) -> Vec<f64> {
        (0..self.len()).map(|i| i as f64 * self.step).collect()
    }

    /// Largest absolute value of `y` along the trajectory, zero if empty.
    pub fn max_y_excursion(&self) -> f64 {
        self.ys.iter().fold(0.0, |max, y| y.abs().max(max))
    }

    /// Splits this trajectory into its abscissas and ordinates.
    pub fn into_xy(self) -> (Vec<f64>, Vec<f64>) {
        (self.xs, self.ys)
    }

    /// Exports the trajectory as `t,x,y` rows and returns the path written to.
    pub fn to_csv<P: AsRef<Path>>(&self, path: P) -> Result<PathBuf, Box<dyn Error>> {
        let path_buf = path.as_ref().to_path_buf();
        let mut wtr = csv::Writer::from_path(&path_buf)?;
        wtr.write_record(["t", "x", "y"])?;
        for (t, (x, y)) in self.times().into_iter().zip(self.iter()) {
            wtr.serialize((t, x, y))?;
        }
        wtr.flush()?;
        info!("Trajectory of {} samples written to {}", self.len(), path_buf.display());
        Ok(path_buf)
    }
}

impl fmt::Display for Traj {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            write!(f, "Empty Trajectory!")
        } else {
            write!(
                f,
                "Trajectory of {} samples every {:e} over {:e}, max |y| = {:e}",
                self.len(),
                self.step,
                self.len() as f64 * self.step,
                self.max_y_excursion()
            )
        }
    }
}

/// Integrates the CR3BP from `initial_state = [x, y, vx, vy]` with an RK4 of fixed step `dt` for
/// `floor(duration/dt)` steps, and returns the abscissas and ordinates sampled at the start of
/// each step.
pub fn integrate_trajectory(
    mass_ratio: f64,
    initial_state: [f64; 4],
    duration: f64,
    dt: f64,
) -> Result<(Vec<f64>, Vec<f64>), HaloError> {
    let mu = MassRatio::new(mass_ratio)?;
    let prop = Propagator::rk4(Cr3bpDynamics::new(mu), dt);
    let traj = Traj::propagate(&prop, Cr3bpState::from(initial_state), duration)?;
    Ok(traj.into_xy())
}
