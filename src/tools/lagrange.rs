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

use crate::cosmic::{AstroError, MassRatio};
use snafu::prelude::*;
use std::fmt;
use typed_builder::TypedBuilder;

/// Absolute tolerance on the residual of the L2 quintic
pub const L2_TOLERANCE: f64 = 1e-12;
/// Maximum number of Newton-Raphson iterations allowed in the L2 solver.
pub const MAX_ITERATIONS: usize = 100;

#[derive(Debug, PartialEq, Snafu)]
#[snafu(visibility(pub(crate)))]
pub enum LagrangeError {
    #[snafu(display("cannot search for L2: {source}"))]
    InvalidMassRatio { source: AstroError },
    /// Maximum iterations reached, the last iterate is kept but is not certified.
    #[snafu(display(
        "L2 solver did not converge after {iterations} iterations: last iterate {last_iterate} has a residual of {residual:e}"
    ))]
    MaxIterReached {
        iterations: usize,
        last_iterate: f64,
        residual: f64,
    },
    #[snafu(display("L2 solver diverged at iteration {iteration} for μ = {mu:e}"))]
    NonFiniteIterate { iteration: usize, mu: f64 },
}

/// Residual of the quintic whose positive root is the distance γ from the smaller primary to L2:
///
/// f(γ) = γ⁵ + (3−μ)γ⁴ + (3−2μ)γ³ − μγ² − 2μγ − μ
pub fn l2_residual(mu: f64, gamma: f64) -> f64 {
    gamma.powi(5) + (3.0 - mu) * gamma.powi(4) + (3.0 - 2.0 * mu) * gamma.powi(3)
        - mu * gamma.powi(2)
        - 2.0 * mu * gamma
        - mu
}

/// Derivative of [`l2_residual`] with respect to γ.
fn l2_residual_derivative(mu: f64, gamma: f64) -> f64 {
    5.0 * gamma.powi(4) + 4.0 * (3.0 - mu) * gamma.powi(3) + 3.0 * (3.0 - 2.0 * mu) * gamma.powi(2)
        - 2.0 * mu * gamma
        - 2.0 * mu
}

/// Location of the L2 point found by the [`L2Solver`].
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct EquilibriumSolution {
    /// Normalized distance between the smaller primary and L2
    pub distance: f64,
    /// Number of Newton-Raphson updates performed
    pub iterations: usize,
    /// Residual of the quintic at `distance`
    pub residual: f64,
}

impl EquilibriumSolution {
    /// Abscissa of L2 in the rotating frame, i.e. `1 − μ + γ`
    pub fn position(&self, mu: MassRatio) -> f64 {
        1.0 - mu.value() + self.distance
    }
}

impl fmt::Display for EquilibriumSolution {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "L2 at {:.12} from the secondary (residual {:.3e} after {} iterations)",
            self.distance, self.residual, self.iterations
        )
    }
}

/// Newton-Raphson solver of the L2 quintic.
///
/// The initial guess is the Hill sphere radius (μ/3)^(1/3), without which Newton-Raphson may
/// diverge or converge onto the root of L1 or L3.
#[derive(Copy, Clone, Debug, PartialEq, TypedBuilder)]
#[builder(doc)]
pub struct L2Solver {
    #[builder(default = L2_TOLERANCE)]
    pub tolerance: f64,
    #[builder(default = MAX_ITERATIONS)]
    pub max_iterations: usize,
}

impl Default for L2Solver {
    fn default() -> Self {
        Self::builder().build()
    }
}

impl L2Solver {
    pub fn solve(&self, mass_ratio: MassRatio) -> Result<EquilibriumSolution, LagrangeError> {
        let mu = mass_ratio.value();
        let mut gamma = (mu / 3.0).powf(1.0 / 3.0);

        for iteration in 0..self.max_iterations {
            let residual = l2_residual(mu, gamma);
            trace!("L2 iteration #{iteration}: γ = {gamma:.15} f(γ) = {residual:e}");
            if residual.abs() < self.tolerance {
                let sol = EquilibriumSolution {
                    distance: gamma,
                    iterations: iteration,
                    residual,
                };
                debug!("{sol} for μ = {mu:e}");
                return Ok(sol);
            }

            gamma -= residual / l2_residual_derivative(mu, gamma);
            ensure!(gamma.is_finite(), NonFiniteIterateSnafu { iteration, mu });
        }

        let residual = l2_residual(mu, gamma);
        if residual.abs() < self.tolerance {
            return Ok(EquilibriumSolution {
                distance: gamma,
                iterations: self.max_iterations,
                residual,
            });
        }

        warn!(
            "L2 solver stopped after {} iterations with a residual of {residual:e}",
            self.max_iterations
        );
        Err(LagrangeError::MaxIterReached {
            iterations: self.max_iterations,
            last_iterate: gamma,
            residual,
        })
    }
}

/// Returns the normalized distance from the smaller primary to L2 using the default solver settings.
pub fn solve_equilibrium(mass_ratio: f64) -> Result<f64, LagrangeError> {
    let mu = MassRatio::new(mass_ratio).context(InvalidMassRatioSnafu)?;
    L2Solver::default().solve(mu).map(|sol| sol.distance)
}
