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

/*! # nyx-halo

Circular restricted three-body problem (CR3BP) toolkit: locate the L2 equilibrium point of a
two-primary system and propagate a spacecraft around it in the rotating, normalized frame.

Everything here works in normalized units: the primaries are separated by a unit distance and
rotate at a unit angular rate. Conversion to physical units is left to the caller, see
[`cosmic::Primaries`].

```
use nyx_halo::md::integrate_trajectory;
use nyx_halo::tools::solve_equilibrium;

let mu = 3.003e-6;
let gamma = solve_equilibrium(mu).unwrap();
let x_l2 = 1.0 - mu + gamma;
let (xs, ys) = integrate_trajectory(mu, [x_l2 - 0.002, 0.0, 0.0, 0.012], 1.0, 0.01).unwrap();
assert_eq!(xs.len(), 100);
assert_eq!(ys.len(), xs.len());
```
*/

/// Provides the fixed step Runge Kutta integrators used to propagate the dynamics.
pub mod propagators;

/// Provides the equations of motion of the circular restricted three-body problem.
pub mod dynamics;

/// Provides the primaries, the mass ratio and the rotating frame state.
pub mod cosmic;

/// Mission design: trajectories and sweeps of independent propagations.
pub mod md;

/// Simple tools (e.g. the L2 equilibrium solver)
pub mod tools;

/// Scenario configuration, loaded from YAML.
pub mod io;

mod errors;
/// Functions which may fail return an error, this is the union of all of them.
pub use self::errors::HaloError;

#[macro_use]
extern crate log;
extern crate nalgebra as na;

/// Re-export nalgebra
pub mod linalg {
    pub use na::base::*;
}

/// Re-export some useful things
pub use self::cosmic::{Cr3bpState, MassRatio, Primaries, State};
