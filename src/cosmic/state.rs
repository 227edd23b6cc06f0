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

use super::State;
use crate::linalg::{Vector4, U4};
use std::fmt;

/// Planar state of the spacecraft in the rotating frame of the primaries, in normalized units.
///
/// The larger primary sits at `(−μ, 0)` and the smaller one at `(1−μ, 0)`.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct Cr3bpState {
    pub x: f64,
    pub y: f64,
    pub vx: f64,
    pub vy: f64,
    /// Normalized time since the start of the propagation
    pub elapsed: f64,
}

impl Cr3bpState {
    pub fn new(x: f64, y: f64, vx: f64, vy: f64) -> Self {
        Self {
            x,
            y,
            vx,
            vy,
            elapsed: 0.0,
        }
    }

    /// Distances `(r1, r2)` to the larger and to the smaller primary.
    pub fn distances(&self, mu: f64) -> (f64, f64) {
        let r1 = ((self.x + mu).powi(2) + self.y.powi(2)).sqrt();
        let r2 = ((self.x - 1.0 + mu).powi(2) + self.y.powi(2)).sqrt();
        (r1, r2)
    }

    /// Jacobi integral, `C = x² + y² + 2(1−μ)/r1 + 2μ/r2 − v²`, conserved by the CR3BP dynamics.
    pub fn jacobi_constant(&self, mu: f64) -> f64 {
        let (r1, r2) = self.distances(mu);
        self.x.powi(2) + self.y.powi(2) + 2.0 * (1.0 - mu) / r1 + 2.0 * mu / r2
            - (self.vx.powi(2) + self.vy.powi(2))
    }

    pub fn position(&self) -> (f64, f64) {
        (self.x, self.y)
    }
}

impl From<[f64; 4]> for Cr3bpState {
    fn from(vals: [f64; 4]) -> Self {
        Self::new(vals[0], vals[1], vals[2], vals[3])
    }
}

impl State for Cr3bpState {
    type Size = U4;

    fn to_vector(&self) -> Vector4<f64> {
        Vector4::new(self.x, self.y, self.vx, self.vy)
    }

    fn set(&mut self, elapsed: f64, vector: &Vector4<f64>) {
        self.x = vector[0];
        self.y = vector[1];
        self.vx = vector[2];
        self.vy = vector[3];
        self.elapsed = elapsed;
    }

    fn elapsed(&self) -> f64 {
        self.elapsed
    }
}

impl fmt::Display for Cr3bpState {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let decimals = f.precision().unwrap_or(6);
        write!(
            f,
            "[t = {:.*}] position = [{:.*}, {:.*}] velocity = [{:.*}, {:.*}]",
            decimals,
            self.elapsed,
            decimals,
            self.x,
            decimals,
            self.y,
            decimals,
            self.vx,
            decimals,
            self.vy
        )
    }
}

impl fmt::LowerExp for Cr3bpState {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let decimals = f.precision().unwrap_or(6);
        write!(
            f,
            "[t = {:.*e}] position = [{:.*e}, {:.*e}] velocity = [{:.*e}, {:.*e}]",
            decimals,
            self.elapsed,
            decimals,
            self.x,
            decimals,
            self.y,
            decimals,
            self.vx,
            decimals,
            self.vy
        )
    }
}
