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

use super::{IntegrationDetails, PropInstance, PropOpts, RK, RK4Fixed};
use crate::dynamics::Dynamics;
use crate::linalg::allocator::Allocator;
use crate::linalg::{DefaultAllocator, OVector};
use crate::State;

/// A Propagator allows propagating a set of dynamics forward in time with a fixed step.
/// It includes the options and the set of coefficients used for the monomorphic instance.
#[derive(Clone, Debug)]
pub struct Propagator<D: Dynamics>
where
    DefaultAllocator: Allocator<<D::StateType as State>::Size>,
{
    pub dynamics: D,          // Stores the dynamics used. *Must* use this to get the latest values
    pub opts: PropOpts,       // Stores the integration options (step, logging)
    pub(crate) stages: usize, // Number of stages, i.e. how many times the derivatives will be called
    pub(crate) a_coeffs: &'static [f64],
    pub(crate) b_coeffs: &'static [f64],
}

impl<D: Dynamics> Propagator<D>
where
    DefaultAllocator: Allocator<<D::StateType as State>::Size>,
{
    /// Each propagator must be initialized with `new` which stores propagator information.
    pub fn new<T: RK>(dynamics: D, opts: PropOpts) -> Self {
        Self {
            dynamics,
            opts,
            stages: T::STAGES,
            a_coeffs: T::A_COEFFS,
            b_coeffs: T::B_COEFFS,
        }
    }

    /// An RK4 propagator with a fixed normalized step.
    pub fn rk4(dynamics: D, step: f64) -> Self {
        Self::new::<RK4Fixed>(dynamics, PropOpts::with_fixed_step(step))
    }

    pub fn with(&self, state: D::StateType) -> PropInstance<'_, D> {
        // Pre-allocate the k used in the propagator
        let mut k = Vec::with_capacity(self.stages);
        for _ in 0..self.stages {
            k.push(OVector::<f64, <D::StateType as State>::Size>::zeros());
        }
        PropInstance {
            state,
            prop: self,
            details: IntegrationDetails::default(),
            k,
        }
    }
}
