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

use crate::field::parse_digits;
use crate::{Alphanumeric, Error};

/// Converts a sexagesimal coordinate into decimal degrees.
///
/// The bytes are the hemisphere followed by degrees of `deg_len` digits,
/// minutes and seconds with two digits each.
fn sexagesimal(
    field: &'static str,
    bytes: &[u8],
    hemispheres: [u8; 2],
    deg_len: usize,
    max: f64,
) -> Result<f64, Error> {
    let format_error = || Error::CoordinateFormat {
        field,
        text: String::from_utf8_lossy(bytes).into_owned(),
    };

    let hem = bytes[0];
    if !hemispheres.contains(&hem) {
        return Err(format_error());
    }

    let digits = &bytes[1..];
    let deg = parse_digits(&digits[..deg_len]).ok_or_else(format_error)? as f64;
    let min = parse_digits(&digits[deg_len..deg_len + 2]).ok_or_else(format_error)? as f64;
    let sec = parse_digits(&digits[deg_len + 2..deg_len + 4]).ok_or_else(format_error)? as f64;

    let decimal = deg + min / 60.0 + sec / 3600.0;

    if !(0.0..=max).contains(&decimal) {
        return Err(Error::CoordinateOutOfBounds {
            field,
            value: decimal,
        });
    }

    if hem == hemispheres[1] {
        Ok(-decimal)
    } else {
        Ok(decimal)
    }
}

/// The latitude as `N` or `S` followed by degrees, minutes and seconds
/// (`N473000`).
pub type Latitude<'a> = Alphanumeric<'a, 7>;

impl<'a> Latitude<'a> {
    /// Returns the latitude as decimal in the range -90.0 (south) to 90.0 (north).
    ///
    /// # Errors
    ///
    /// Returns an error if the hemisphere is neither `N` nor `S`, if the
    /// degrees, minutes or seconds are not numbers or if the latitude exceeds
    /// 90°.
    pub fn as_decimal(&self) -> Result<f64, Error> {
        sexagesimal("latitude", self.0, [b'N', b'S'], 2, 90.0)
    }
}

/// The longitude as `E` or `W` followed by degrees, minutes and seconds
/// (`E0080230`).
pub type Longitude<'a> = Alphanumeric<'a, 8>;

impl<'a> Longitude<'a> {
    /// Returns the longitude as decimal in the range -180.0 (west) to 180.0 (east).
    ///
    /// # Errors
    ///
    /// Returns an error if the hemisphere is neither `E` nor `W`, if the
    /// degrees, minutes or seconds are not numbers or if the longitude exceeds
    /// 180°.
    pub fn as_decimal(&self) -> Result<f64, Error> {
        sexagesimal("longitude", self.0, [b'E', b'W'], 3, 180.0)
    }
}
