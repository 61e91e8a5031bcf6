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

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A VHF radio frequency in MHz, written as `DDD.DD`.
#[derive(Clone, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Frequency {
    pub(crate) frequency: String,
}

impl Frequency {
    pub fn as_str(&self) -> &str {
        &self.frequency
    }

    /// Returns the frequency in kHz.
    ///
    /// # Examples
    ///
    /// ```
    /// # use navdata::Waypoint;
    /// # fn main() -> Result<(), navdata::Error> {
    /// let line = "AACHE1 AACHEN MERZBRUCK#EDKAA0530826123220189N504923E0061111DEP0";
    /// let wp = Waypoint::try_from_welt2000(line)?.expect("line should be a waypoint");
    /// let frequency = &wp.landing_site().expect("should be landable").frequencies()[0];
    ///
    /// assert_eq!(frequency.as_str(), "123.25");
    /// assert_eq!(frequency.khz(), Some(123_250));
    /// # Ok(())
    /// # }
    /// ```
    pub fn khz(&self) -> Option<u32> {
        let (mhz, fraction) = self.frequency.split_once('.')?;
        let mhz: u32 = mhz.parse().ok()?;
        let fraction: u32 = fraction.parse().ok()?;
        Some(mhz * 1000 + fraction * 10)
    }
}

impl fmt::Display for Frequency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.frequency)
    }
}
