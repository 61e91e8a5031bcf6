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

use crate::field::{parse_digits, take};
use crate::FixedField;

/// The elevation in meters, optionally with leading spaces and a minus sign.
#[derive(Clone, Copy, Eq, PartialEq, Ord, PartialOrd, Hash, Debug)]
pub struct Elevation<'a>(&'a [u8; 4]);

impl<'a> Elevation<'a> {
    /// Returns the elevation in meters.
    ///
    /// Anything following the digits is ignored. Returns `None` if there are
    /// no digits after the leading spaces and sign.
    pub fn meters(&self) -> Option<i32> {
        let start = self.0.iter().position(|b| !b.is_ascii_whitespace())?;
        let (negative, digits) = match &self.0[start..] {
            [b'-', rest @ ..] => (true, rest),
            rest => (false, rest),
        };

        let len = digits.iter().take_while(|b| b.is_ascii_digit()).count();
        let meters = parse_digits(&digits[..len])? as i32;

        Some(if negative { -meters } else { meters })
    }

    /// Whether the elevation was proved, which is marked by a leading `0`.
    pub fn is_proved(&self) -> bool {
        self.0[0] == b'0'
    }
}

impl<'a> FixedField<'a> for Elevation<'a> {
    const LENGTH: usize = 4;

    fn from_bytes(bytes: &'a [u8]) -> Option<Self> {
        take(bytes).map(Self)
    }
}
