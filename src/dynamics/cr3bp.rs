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

use super::{Dynamics, DynamicsError};
use crate::cosmic::{Cr3bpState, MassRatio};
use crate::linalg::Vector4;
use std::fmt;

/// `Cr3bpDynamics` provides the planar equations of motion of the circular restricted three-body
/// problem, in the frame rotating with the primaries.
///
/// Nothing is done to stabilize the motion: trajectories near the collinear points diverge along
/// their unstable manifold.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Cr3bpDynamics {
    mu: f64,
}

impl Cr3bpDynamics {
    pub fn new(mass_ratio: MassRatio) -> Self {
        Self {
            mu: mass_ratio.value(),
        }
    }

    /// Gradient `(Ωx, Ωy)` of the effective potential, gravity of both primaries and centrifugal term.
    pub fn potential_gradient(&self, x: f64, y: f64) -> (f64, f64) {
        let mu = self.mu;
        let r1_cubed = ((x + mu).powi(2) + y.powi(2)).sqrt().powi(3);
        let r2_cubed = ((x - 1.0 + mu).powi(2) + y.powi(2)).sqrt().powi(3);

        let omega_x = x - (1.0 - mu) * (x + mu) / r1_cubed - mu * (x - 1.0 + mu) / r2_cubed;
        let omega_y = y - (1.0 - mu) * y / r1_cubed - mu * y / r2_cubed;
        (omega_x, omega_y)
    }
}

impl fmt::Display for Cr3bpDynamics {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "CR3BP dynamics with μ = {:.6e}", self.mu)
    }
}

impl Dynamics for Cr3bpDynamics {
    type StateType = Cr3bpState;

    fn eom(
        &self,
        delta_t: f64,
        state_vec: &Vector4<f64>,
        state_ctx: &Cr3bpState,
    ) -> Result<Vector4<f64>, DynamicsError> {
        let (x, y, vx, vy) = (state_vec[0], state_vec[1], state_vec[2], state_vec[3]);
        let (omega_x, omega_y) = self.potential_gradient(x, y);

        let d_x = Vector4::new(vx, vy, 2.0 * vy + omega_x, -2.0 * vx + omega_y);

        if d_x.iter().any(|v| !v.is_finite()) {
            let (r1, r2) = Cr3bpState::new(x, y, vx, vy).distances(self.mu);
            return Err(DynamicsError::NonFiniteDerivative {
                elapsed: state_ctx.elapsed + delta_t,
                r1,
                r2,
            });
        }

        Ok(d_x)
    }
}
