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

use std::error;
use std::fmt;

use crate::record::RECORD_LENGTH;

/// Errors that abort the decoding of a single WELT2000 line.
///
/// Any other anomaly of a record, like a missing runway length or an unknown
/// surface code, is decoded as an absent value instead.
#[derive(Clone, PartialEq, PartialOrd, Debug)]
pub enum Error {
    /// The line is not exactly 64 characters long after trimming.
    InvalidLineLength { actual: usize },
    /// The latitude or longitude doesn't match the hemisphere, degree, minute
    /// and second layout.
    CoordinateFormat { field: &'static str, text: String },
    /// The decimal degrees exceed 90° latitude or 180° longitude.
    CoordinateOutOfBounds { field: &'static str, value: f64 },
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidLineLength { actual } => {
                write!(
                    f,
                    "line should be {RECORD_LENGTH} characters long but is {actual}"
                )
            }
            Self::CoordinateFormat { field, text } => {
                write!(f, "reading {field} from \"{text}\" failed")
            }
            Self::CoordinateOutOfBounds { field, value } => {
                write!(f, "{field} {value} is out of bounds")
            }
        }
    }
}

impl error::Error for Error {}
