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

use super::Traj;
use crate::cosmic::{Cr3bpState, MassRatio};
use crate::dynamics::Cr3bpDynamics;
use crate::propagators::{PropagationError, Propagator};
use rayon::prelude::*;
#[cfg(not(target_arch = "wasm32"))]
use std::time::Instant;

/// Propagates each initial state independently, in parallel, with an RK4 of fixed `step`.
///
/// Each run owns its own propagator instance. The results are in the same order as the initial
/// states, and a failed run does not stop the others.
pub fn sweep(
    mass_ratio: MassRatio,
    initial_states: &[Cr3bpState],
    duration: f64,
    step: f64,
) -> Vec<Result<Traj, PropagationError>> {
    let prop = Propagator::rk4(Cr3bpDynamics::new(mass_ratio), step);
    debug!(
        "Sweeping {} states with {}",
        initial_states.len(),
        prop.dynamics
    );

    #[cfg(not(target_arch = "wasm32"))]
    let start = Instant::now();
    let results = initial_states
        .par_iter()
        .map(|state| Traj::propagate(&prop, *state, duration))
        .collect::<Vec<_>>();

    for (index, result) in results.iter().enumerate() {
        if let Err(e) = result {
            warn!("run #{index} failed: {e}");
        }
    }

    #[cfg(not(target_arch = "wasm32"))]
    {
        info!(
            "Propagated {} states in {:?}",
            initial_states.len(),
            start.elapsed()
        );
    }

    results
}
