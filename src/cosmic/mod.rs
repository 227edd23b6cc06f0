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

use crate::linalg::allocator::Allocator;
use crate::linalg::{DefaultAllocator, DimName, OVector};
use snafu::Snafu;
use std::fmt;

mod bodies;
pub use self::bodies::*;

mod state;
pub use self::state::*;

/// A trait for states which can be propagated.
///
/// Time is normalized: `elapsed` is the time since the start of the propagation, in units of
/// the inverse of the mean motion of the primaries.
pub trait State: Default + Copy + PartialEq + fmt::Display + fmt::LowerExp + Send + Sync
where
    Self: Sized,
    DefaultAllocator: Allocator<Self::Size>,
{
    /// Size of the propagated vector
    type Size: DimName;

    /// Return this state as a vector for the propagation
    fn to_vector(&self) -> OVector<f64, Self::Size>;

    /// Set this state from the normalized elapsed time and the propagated vector
    fn set(&mut self, elapsed: f64, vector: &OVector<f64, Self::Size>);

    /// Normalized time elapsed since the start of the propagation
    fn elapsed(&self) -> f64;

    /// Reconstruct a new State from the provided delta time compared to the current state
    /// and with the provided vector.
    fn ctor_from(self, delta_t: f64, vector: &OVector<f64, Self::Size>) -> Self {
        let mut me = self;
        me.set(me.elapsed() + delta_t, vector);
        me
    }
}

#[derive(Debug, PartialEq, Snafu)]
#[snafu(visibility(pub(crate)))]
pub enum AstroError {
    #[snafu(display("mass ratio must be in (0, 1) but got {mu}"))]
    InvalidMassRatio { mu: f64 },
    #[snafu(display(
        "primaries masses must be positive and finite, got {primary_mass_kg} kg and {secondary_mass_kg} kg"
    ))]
    InvalidMasses {
        primary_mass_kg: f64,
        secondary_mass_kg: f64,
    },
}
