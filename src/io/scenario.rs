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

use super::{ConfigError, ConfigRepr, InvalidConfigSnafu};
use crate::cosmic::{Cr3bpState, MassRatio, Primaries};
use crate::dynamics::Cr3bpDynamics;
use crate::errors::HaloError;
use crate::md::Traj;
use crate::propagators::Propagator;
use crate::tools::{EquilibriumSolution, L2Solver};
use serde_derive::{Deserialize, Serialize};
use snafu::ensure;
use std::fmt;
use typed_builder::TypedBuilder;

/// Offset of the initial state with respect to the L2 point at rest, in normalized units.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StateOffset {
    pub dx: f64,
    pub dy: f64,
    pub vx: f64,
    pub vy: f64,
}

impl Default for StateOffset {
    /// Slightly inside of L2 with a small transverse velocity, which traces a halo-like loop
    /// over about half a revolution of the primaries.
    fn default() -> Self {
        Self {
            dx: -0.002,
            dy: 0.0,
            vx: 0.0,
            vy: 0.012,
        }
    }
}

/// A halo mission scenario, typically loaded from YAML.
///
/// ```yaml
/// primaries:
///   primary_mass_kg: 1.989e30
///   secondary_mass_kg: 5.972e24
/// offset:
///   dx: -0.002
///   vy: 0.012
/// duration: 3.2
/// step: 0.015
/// ```
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize, TypedBuilder)]
#[builder(doc)]
pub struct HaloScenario {
    #[serde(default)]
    #[builder(default)]
    pub primaries: Primaries,
    #[serde(default)]
    #[builder(default)]
    pub offset: StateOffset,
    /// Normalized propagation duration
    #[serde(default = "default_duration")]
    #[builder(default = default_duration())]
    pub duration: f64,
    /// Normalized fixed step of the RK4
    #[serde(default = "default_step")]
    #[builder(default = default_step())]
    pub step: f64,
}

fn default_duration() -> f64 {
    3.2
}

fn default_step() -> f64 {
    0.015
}

impl Default for HaloScenario {
    fn default() -> Self {
        Self::builder().build()
    }
}

impl ConfigRepr for HaloScenario {}

/// Outcome of a [`HaloScenario`].
#[derive(Clone, Debug, PartialEq)]
pub struct HaloRun {
    pub mass_ratio: MassRatio,
    pub equilibrium: EquilibriumSolution,
    pub initial_state: Cr3bpState,
    pub traj: Traj,
}

impl HaloRun {
    /// Abscissa of L2 in the rotating frame
    pub fn l2_position(&self) -> f64 {
        self.equilibrium.position(self.mass_ratio)
    }
}

impl fmt::Display for HaloRun {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "{}\n{}\nstart: {}\n{}",
            self.mass_ratio, self.equilibrium, self.initial_state, self.traj
        )
    }
}

impl HaloScenario {
    /// Ensures that the propagation settings can be used.
    pub fn validate(&self) -> Result<(), ConfigError> {
        ensure!(
            self.step.is_finite() && self.step > 0.0,
            InvalidConfigSnafu {
                msg: format!("step must be positive, got {}", self.step)
            }
        );
        ensure!(
            self.duration.is_finite() && self.duration > 0.0,
            InvalidConfigSnafu {
                msg: format!("duration must be positive, got {}", self.duration)
            }
        );
        Ok(())
    }

    /// Solves for L2, offsets the initial state from it, and propagates.
    pub fn run(&self) -> Result<HaloRun, HaloError> {
        self.validate()?;

        let mass_ratio = self.primaries.mass_ratio()?;
        let equilibrium = L2Solver::default().solve(mass_ratio)?;
        info!("{} -- {mass_ratio} -- {equilibrium}", self.primaries);

        let initial_state = Cr3bpState::new(
            equilibrium.position(mass_ratio) + self.offset.dx,
            self.offset.dy,
            self.offset.vx,
            self.offset.vy,
        );

        let prop = Propagator::rk4(Cr3bpDynamics::new(mass_ratio), self.step);
        let traj = Traj::propagate(&prop, initial_state, self.duration)?;

        Ok(HaloRun {
            mass_ratio,
            equilibrium,
            initial_state,
            traj,
        })
    }
}
