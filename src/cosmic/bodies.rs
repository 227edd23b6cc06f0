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

use super::{AstroError, InvalidMassRatioSnafu, InvalidMassesSnafu};
use serde_derive::{Deserialize, Serialize};
use snafu::ensure;
use std::fmt;

pub const SUN_MASS_KG: f64 = 1.989e30;
pub const EARTH_MASS_KG: f64 = 5.972e24;
pub const MOON_MASS_KG: f64 = 7.342e22;
/// Astronomical unit, in kilometers
pub const AU_KM: f64 = 149_597_870.7;
/// Mean Earth-Moon distance, in kilometers
pub const EARTH_MOON_KM: f64 = 384_400.0;

/// The mass ratio μ of the smaller primary over the total mass of the two primaries.
///
/// Guaranteed to be finite and strictly between zero and one.
#[derive(Copy, Clone, Debug, PartialEq, PartialOrd)]
pub struct MassRatio(f64);

impl MassRatio {
    pub fn new(mu: f64) -> Result<Self, AstroError> {
        ensure!(
            mu.is_finite() && mu > 0.0 && mu < 1.0,
            InvalidMassRatioSnafu { mu }
        );
        Ok(Self(mu))
    }

    /// Returns the raw value of μ
    pub fn value(self) -> f64 {
        self.0
    }

    /// Position of the larger primary in the rotating frame, `(−μ, 0)`
    pub fn primary_position(self) -> (f64, f64) {
        (-self.0, 0.0)
    }

    /// Position of the smaller primary in the rotating frame, `(1−μ, 0)`
    pub fn secondary_position(self) -> (f64, f64) {
        (1.0 - self.0, 0.0)
    }
}

impl fmt::Display for MassRatio {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "μ = {:.6e}", self.0)
    }
}

/// The two massive bodies of the restricted three-body problem, in circular orbit around their
/// barycenter.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Primaries {
    /// Mass of the larger body
    pub primary_mass_kg: f64,
    /// Mass of the smaller body
    pub secondary_mass_kg: f64,
    /// Distance between both primaries, used to convert normalized distances
    #[serde(default = "default_distance_km")]
    pub distance_km: f64,
}

fn default_distance_km() -> f64 {
    AU_KM
}

impl Primaries {
    pub fn sun_earth() -> Self {
        Self {
            primary_mass_kg: SUN_MASS_KG,
            secondary_mass_kg: EARTH_MASS_KG,
            distance_km: AU_KM,
        }
    }

    pub fn earth_moon() -> Self {
        Self {
            primary_mass_kg: EARTH_MASS_KG,
            secondary_mass_kg: MOON_MASS_KG,
            distance_km: EARTH_MOON_KM,
        }
    }

    /// Computes μ = m₂ / (m₁ + m₂)
    pub fn mass_ratio(&self) -> Result<MassRatio, AstroError> {
        ensure!(
            self.primary_mass_kg.is_finite()
                && self.secondary_mass_kg.is_finite()
                && self.primary_mass_kg > 0.0
                && self.secondary_mass_kg > 0.0,
            InvalidMassesSnafu {
                primary_mass_kg: self.primary_mass_kg,
                secondary_mass_kg: self.secondary_mass_kg
            }
        );
        MassRatio::new(self.secondary_mass_kg / (self.primary_mass_kg + self.secondary_mass_kg))
    }

    /// Converts a normalized distance into kilometers
    pub fn to_km(&self, normalized: f64) -> f64 {
        normalized * self.distance_km
    }
}

impl Default for Primaries {
    fn default() -> Self {
        Self::sun_earth()
    }
}

impl fmt::Display for Primaries {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "primaries of {:e} kg and {:e} kg separated by {} km",
            self.primary_mass_kg, self.secondary_mass_kg, self.distance_km
        )
    }
}
