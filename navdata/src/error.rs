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

#[derive(Clone, PartialEq, Debug)]
pub enum Error {
    /// A line of a WELT2000 file couldn't be decoded.
    ///
    /// The line number starts at 1 and is 0 if unknown.
    InvalidWelt2000 {
        line: usize,
        error: welt2000::Error,
    },
    /// The pattern of a classifier rule is not a valid regular expression.
    InvalidPattern { pattern: String, error: String },
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidWelt2000 { line: 0, error } => {
                write!(f, "invalid WELT2000 record: {error}")
            }
            Self::InvalidWelt2000 { line, error } => {
                write!(f, "invalid WELT2000 record in line {line}: {error}")
            }
            Self::InvalidPattern { pattern, error } => {
                write!(f, "invalid classifier pattern {pattern:?}: {error}")
            }
        }
    }
}

impl error::Error for Error {
    fn source(&self) -> Option<&(dyn error::Error + 'static)> {
        match self {
            Self::InvalidWelt2000 { error, .. } => Some(error),
            Self::InvalidPattern { .. } => None,
        }
    }
}

impl From<welt2000::Error> for Error {
    fn from(error: welt2000::Error) -> Self {
        Self::InvalidWelt2000 { line: 0, error }
    }
}
