// SPDX-License-Identifier: Apache-2.0
// Copyright 2026 Joe Pearson
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use welt2000::fields::Surface;

#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum RunwaySurface {
    Asphalt,
    Concrete,
    Loam,
    Sand,
    Clay,
    Grass,
    Gravel,
    Dirt,
    Meadow,
}

impl From<Surface> for RunwaySurface {
    fn from(surface: Surface) -> Self {
        match surface {
            Surface::Asphalt => Self::Asphalt,
            Surface::Concrete => Self::Concrete,
            Surface::Loam => Self::Loam,
            Surface::Sand => Self::Sand,
            Surface::Clay => Self::Clay,
            Surface::Grass => Self::Grass,
            Surface::Gravel => Self::Gravel,
            Surface::Dirt => Self::Dirt,
            Surface::Meadow => Self::Meadow,
        }
    }
}

/// A runway of a landing site.
///
/// Every value is optional since many sites are only partially surveyed.
/// The directions are the true headings in degrees of both ends of the
/// runway, or of one end only if the other is unknown.
#[derive(Clone, Default, PartialEq, Eq, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Runway {
    pub(crate) surface: Option<RunwaySurface>,
    pub(crate) length: Option<u32>,
    pub(crate) directions: Option<Vec<u16>>,
}

impl Runway {
    pub fn surface(&self) -> Option<RunwaySurface> {
        self.surface
    }

    /// The length in meters.
    pub fn length(&self) -> Option<u32> {
        self.length
    }

    pub fn directions(&self) -> Option<&[u16]> {
        self.directions.as_deref()
    }
}
