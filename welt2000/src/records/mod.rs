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

//! WELT2000 records and the reader of a waypoint file.

use log::debug;

use crate::record::validate;
use crate::Error;

mod waypoint;

pub use waypoint::{Line, RawWaypoint};

/// Decodes a single line of a WELT2000 file.
///
/// Returns `Ok(None)` for comments and blank lines.
///
/// # Errors
///
/// Returns an error if the line is not 64 characters long or the coordinates are
/// invalid.
///
/// # Examples
///
/// ```
/// use welt2000::records::decode_line;
///
/// # fn main() -> Result<(), welt2000::Error> {
/// let line = "EDXX 1 AIRFIELD EDXX   #EDXXA100092712325 189N473000W0080230DEP0";
/// let wp = decode_line(line)?.expect("line should be a waypoint");
///
/// assert_eq!(wp.text, "AIRFIELD EDXX");
/// assert_eq!(wp.latitude, 47.5);
/// assert_eq!(wp.frequency.as_deref(), Some("123.25"));
///
/// assert_eq!(decode_line("$ comment")?, None);
/// # Ok(())
/// # }
/// ```
pub fn decode_line(line: &str) -> Result<Option<RawWaypoint>, Error> {
    match validate(line)? {
        Some(record) => RawWaypoint::try_from(record).map(Some),
        None => Ok(None),
    }
}

/// A lazy reader of WELT2000 waypoints.
///
/// Each call to `next` pulls lines from the source until one is a record and
/// decodes it. Lines that fail to decode are returned as error and the reader
/// continues with the next line when polled again.
pub struct Reader<I> {
    lines: I,
    line_number: usize,
}

impl<I> Reader<I> {
    /// Creates a new reader over any source of lines.
    ///
    /// # Examples
    ///
    /// Reading the waypoints of a file and skipping those that are invalid:
    ///
    /// ```no_run
    /// # use std::fs::File;
    /// # use std::io::{BufRead, BufReader};
    /// # use welt2000::records::Reader;
    /// let file = File::open("WELT2000.TXT").expect("file should be readable");
    /// let lines = BufReader::new(file).lines().map_while(Result::ok);
    ///
    /// for wp in Reader::new(lines).filter_map(Result::ok) {
    ///     println!("{} ({})", wp.text, wp.country);
    /// }
    /// ```
    pub fn new(lines: I) -> Self {
        Self {
            lines,
            line_number: 0,
        }
    }

    /// Returns the number of the last line that was read, starting at 1.
    pub fn line_number(&self) -> usize {
        self.line_number
    }
}

impl<'a> From<&'a str> for Reader<std::str::Lines<'a>> {
    fn from(data: &'a str) -> Self {
        Self::new(data.lines())
    }
}

impl<I, L> Iterator for Reader<I>
where
    I: Iterator<Item = L>,
    L: AsRef<str>,
{
    type Item = Result<RawWaypoint, Error>;

    fn next(&mut self) -> Option<Self::Item> {
        for line in self.lines.by_ref() {
            self.line_number += 1;

            match decode_line(line.as_ref()) {
                Ok(Some(wp)) => return Some(Ok(wp)),
                Ok(None) => continue,
                Err(e) => {
                    debug!("line {}: {e}", self.line_number);
                    return Some(Err(e));
                }
            }
        }

        None
    }
}
