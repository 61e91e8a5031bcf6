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

/// The marker in column 23 that starts the metadata of a landable site.
///
/// Without a marker, the description extends over the metadata columns and
/// runway or frequency are not given.
#[derive(Clone, Copy, Eq, PartialEq, Ord, PartialOrd, Hash, Debug)]
pub enum Marker {
    /// `#` is followed by the ICAO code or a site marker.
    Hash,
    /// `*` is followed by a site marker or the field number.
    Star,
    /// `?` marks metadata that isn't verified.
    Unverified,
}

impl Marker {
    pub fn from_byte(byte: u8) -> Option<Self> {
        match byte {
            b'#' => Some(Self::Hash),
            b'*' => Some(Self::Star),
            b'?' => Some(Self::Unverified),
            _ => None,
        }
    }
}

/// The catalogue number of a landable field, written as `*FL` and two digits.
#[derive(Clone, Copy, Eq, PartialEq, Ord, PartialOrd, Hash, Debug)]
pub struct FieldNumber<'a>(&'a [u8; 5]);

impl<'a> FieldNumber<'a> {
    pub fn as_u32(&self) -> Option<u32> {
        match self.0 {
            [b'*', b'F', b'L', digits @ ..] => parse_digits(digits),
            _ => None,
        }
    }
}

impl<'a> FixedField<'a> for FieldNumber<'a> {
    const LENGTH: usize = 5;

    fn from_bytes(bytes: &'a [u8]) -> Option<Self> {
        take(bytes).map(Self)
    }
}
