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

use crate::field::take;
use crate::FixedField;

/// The VHF frequency stored as five digits without decimal point.
///
/// The database stores only the first two decimals of a frequency, and the
/// second one is rounded to the 50 kHz channel below. The canonical frequency
/// restores the 25 kHz channels ending with a `5`.
#[derive(Clone, Copy, Eq, PartialEq, Ord, PartialOrd, Hash, Debug)]
pub struct Frequency<'a>(&'a [u8; 5]);

impl<'a> Frequency<'a> {
    /// Returns the frequency in MHz as `DDD.DD`.
    ///
    /// Returns `None` unless the field has five digits starting with `1`.
    pub fn as_canonical(&self) -> Option<String> {
        if self.0[0] != b'1' || !self.0.iter().all(u8::is_ascii_digit) {
            return None;
        }

        let [a, b, c, d, e] = *self.0;
        let last = match e {
            b'2' | b'5' | b'7' => '5',
            _ => '0',
        };

        Some(format!(
            "{}{}{}.{}{last}",
            a as char, b as char, c as char, d as char
        ))
    }
}

impl<'a> FixedField<'a> for Frequency<'a> {
    const LENGTH: usize = 5;

    fn from_bytes(bytes: &'a [u8]) -> Option<Self> {
        take(bytes).map(Self)
    }
}
