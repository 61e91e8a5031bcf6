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

use crate::Numeric;

/// The runway length in tens of meters.
pub type RunwayLength<'a> = Numeric<'a, 3>;

impl<'a> RunwayLength<'a> {
    /// Returns the runway length in meters.
    pub fn meters(&self) -> Option<u32> {
        self.as_u32().map(|length| length * 10)
    }
}

/// The runway direction in tens of degrees.
pub type RunwayDirection<'a> = Numeric<'a, 2>;

impl<'a> RunwayDirection<'a> {
    /// Returns the runway direction in degrees.
    ///
    /// The direction is not normalized, e.g. `36` is 360°.
    pub fn degrees(&self) -> Option<u16> {
        self.as_u32().map(|direction| direction as u16 * 10)
    }
}

#[cfg(test)]
mod tests {
    use crate::FixedField;

    use super::*;

    #[test]
    fn runway_length() {
        let length = |b: &[u8]| RunwayLength::from_bytes(b).and_then(|l| l.meters());

        assert_eq!(length(b"100"), Some(1000));
        assert_eq!(length(b" 80"), Some(800));
        assert_eq!(length(b"000"), Some(0));
        assert_eq!(length(b"   "), None);
        assert_eq!(length(b"1-0"), None);
    }

    #[test]
    fn runway_direction() {
        let direction = |b: &[u8]| RunwayDirection::from_bytes(b).and_then(|d| d.degrees());

        assert_eq!(direction(b"09"), Some(90));
        assert_eq!(direction(b"27"), Some(270));
        assert_eq!(direction(b"36"), Some(360));
        assert_eq!(direction(b" 5"), Some(50));
        assert_eq!(direction(b"  "), None);
    }
}
