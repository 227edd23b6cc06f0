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

use crate::cosmic::AstroError;
use crate::io::ConfigError;
use crate::propagators::PropagationError;
use crate::tools::LagrangeError;
use snafu::prelude::*;

#[derive(Debug, PartialEq, Snafu)]
#[snafu(visibility(pub(crate)))]
pub enum HaloError {
    #[snafu(display("invalid input: {source}"))]
    Astro { source: AstroError },
    #[snafu(display("equilibrium search failed: {source}"))]
    Lagrange { source: LagrangeError },
    #[snafu(display("propagation failed: {source}"))]
    Propagation { source: PropagationError },
    #[snafu(display("scenario configuration: {source}"))]
    Config { source: ConfigError },
}

impl From<AstroError> for HaloError {
    fn from(source: AstroError) -> Self {
        Self::Astro { source }
    }
}

impl From<LagrangeError> for HaloError {
    fn from(source: LagrangeError) -> Self {
        Self::Lagrange { source }
    }
}

impl From<PropagationError> for HaloError {
    fn from(source: PropagationError) -> Self {
        Self::Propagation { source }
    }
}

impl From<ConfigError> for HaloError {
    fn from(source: ConfigError) -> Self {
        Self::Config { source }
    }
}
