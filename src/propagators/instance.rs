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

use super::{step_count, DynamicsSnafu, IntegrationDetails, PropagationError, Propagator};
use crate::dynamics::{Dynamics, DynamicsError};
use crate::linalg::allocator::Allocator;
use crate::linalg::{DefaultAllocator, OVector};
use crate::State;
use snafu::ResultExt;
#[cfg(not(target_arch = "wasm32"))]
use std::time::Instant;

/// A PropInstance holds the state being propagated by a given Propagator.
/// It includes the details of the previous step and the pre-allocated stages of the integrator.
#[derive(Debug)]
pub struct PropInstance<'a, D: Dynamics>
where
    DefaultAllocator: Allocator<<D::StateType as State>::Size>,
{
    /// The state of this propagator instance
    pub state: D::StateType,
    /// The propagator setup (kind, stages, etc.)
    pub prop: &'a Propagator<D>,
    /// Stores the details of the previous integration step
    pub details: IntegrationDetails,
    // Allows us to do pre-allocation of the ki vectors
    pub(crate) k: Vec<OVector<f64, <D::StateType as State>::Size>>,
}

impl<D: Dynamics> PropInstance<'_, D>
where
    DefaultAllocator: Allocator<<D::StateType as State>::Size>,
{
    /// Propagates for `steps` fixed steps and returns the end state.
    ///
    /// The `record` closure is called with the index of each step and the state at the _start_ of
    /// that step, so the state returned by this function is never recorded.
    pub fn for_steps_with<F>(
        &mut self,
        steps: usize,
        mut record: F,
    ) -> Result<D::StateType, PropagationError>
    where
        F: FnMut(usize, &D::StateType),
    {
        self.prop.opts.validate()?;

        #[cfg(not(target_arch = "wasm32"))]
        let tick = Instant::now();
        let log_progress = steps >= self.prop.opts.log_threshold;

        debug!(
            "Propagating for {} steps ({}) from {}",
            steps, self.prop.opts, self.state
        );
        for i in 0..steps {
            record(i, &self.state);
            self.single_step()?;
        }

        #[cfg(not(target_arch = "wasm32"))]
        {
            if log_progress {
                info!("Done {} steps in {:?}", steps, tick.elapsed());
            }
        }

        Ok(self.state)
    }

    /// Propagates for `floor(duration/step)` steps and returns the end state.
    pub fn for_duration(&mut self, duration: f64) -> Result<D::StateType, PropagationError> {
        let steps = step_count(duration, self.prop.opts.step)?;
        self.for_steps_with(steps, |_, _| {})
    }

    /// Propagates for the provided duration and returns the state at the start of every step.
    pub fn for_duration_with_states(
        &mut self,
        duration: f64,
    ) -> Result<Vec<D::StateType>, PropagationError> {
        let steps = step_count(duration, self.prop.opts.step)?;
        let mut states = Vec::with_capacity(steps);
        self.for_steps_with(steps, |_, state| states.push(*state))?;
        Ok(states)
    }

    /// Take a single propagator step
    pub fn single_step(&mut self) -> Result<(), PropagationError> {
        let step = self.details.steps;
        let state_vec = self.derive().context(DynamicsSnafu { step })?;
        self.state = self.state.ctor_from(self.prop.opts.step, &state_vec);
        self.details.steps += 1;

        Ok(())
    }

    /// This method integrates the dynamics of the propagator over a single fixed step.
    ///
    /// This function returns the new state vector y_{n+1} = y_n + h \sum_i b_i k_i.
    fn derive(&mut self) -> Result<OVector<f64, <D::StateType as State>::Size>, DynamicsError> {
        let state_vec = &self.state.to_vector();
        let state_ctx = &self.state;
        let step_size = self.prop.opts.step;

        let ki = self.prop.dynamics.eom(0.0, state_vec, state_ctx)?;
        self.k[0] = ki;
        let mut a_idx: usize = 0;
        for i in 0..(self.prop.stages - 1) {
            // Let's compute the c_i by summing the relevant items from the list of coefficients.
            // \sum_{j=1}^{i-1} a_ij  ∀ i ∈ [2, s]
            let mut ci: f64 = 0.0;
            // The wi stores the a_{s1} * k_1 + a_{s2} * k_2 + ... + a_{s, s-1} * k_{s-1} +
            let mut wi = OVector::<f64, <D::StateType as State>::Size>::from_element(0.0);
            for kj in &self.k[0..i + 1] {
                let a_ij = self.prop.a_coeffs[a_idx];
                ci += a_ij;
                wi += a_ij * kj;
                a_idx += 1;
            }

            let ki = self.prop.dynamics.eom(
                ci * step_size,
                &(state_vec + step_size * wi),
                state_ctx,
            )?;
            self.k[i + 1] = ki;
        }

        let mut next_state = state_vec.clone();
        for (i, ki) in self.k.iter().enumerate() {
            let b_i = self.prop.b_coeffs[i];
            next_state += step_size * b_i * ki;
        }

        Ok(next_state)
    }

    /// Copy the details of the latest integration step.
    pub fn latest_details(&self) -> IntegrationDetails {
        self.details
    }
}
