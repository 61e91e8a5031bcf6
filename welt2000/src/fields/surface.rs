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

/// The runway surface, coded in column 28.
#[derive(Clone, Copy, Eq, PartialEq, Ord, PartialOrd, Hash, Debug)]
pub enum Surface {
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

impl Surface {
    /// Looks up the surface of a code.
    ///
    /// Returns `None` for unknown codes.
    pub fn from_code(code: u8) -> Option<Self> {
        match code {
            b'A' => Some(Self::Asphalt),
            b'C' => Some(Self::Concrete),
            b'L' => Some(Self::Loam),
            b'S' => Some(Self::Sand),
            b'Y' => Some(Self::Clay),
            b'G' => Some(Self::Grass),
            b'V' => Some(Self::Gravel),
            b'D' => Some(Self::Dirt),
            b'W' => Some(Self::Meadow),
            _ => None,
        }
    }

    /// Returns the lowercase name of the surface.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Asphalt => "asphalt",
            Self::Concrete => "concrete",
            Self::Loam => "loam",
            Self::Sand => "sand",
            Self::Clay => "clay",
            Self::Grass => "grass",
            Self::Gravel => "gravel",
            Self::Dirt => "dirt",
            Self::Meadow => "meadow",
        }
    }
}
