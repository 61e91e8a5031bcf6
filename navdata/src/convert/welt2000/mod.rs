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

//! Conversion of WELT2000 files.

use log::warn;
use welt2000::records::Reader;

use crate::classify::Classifier;
use crate::error::Error;
use crate::waypoint::Waypoint;

mod fields;
mod records;

pub use fields::{convert_frequencies, convert_icao, convert_runways};

/// A lazy converter of WELT2000 lines into classified waypoints.
///
/// Comments and blank lines are skipped. A line that fails to decode is
/// returned as [`Error::InvalidWelt2000`] with its line number and the
/// converter continues with the next line when polled again.
///
/// # Examples
///
/// ```
/// use navdata::{Converter, Tag};
///
/// let data = "\
/// $ WELT2000
/// AACHE1 AACHEN MERZBRUCK#EDKAA0530826123220189N504923E0061111DEP0
/// MROSA  MONTE ROSA GIPFEL                 4634N455613E0075201CHP0
/// ";
///
/// let waypoints: Vec<_> = Converter::from(data)
///     .collect::<Result<_, _>>()
///     .expect("file should be valid");
///
/// assert_eq!(waypoints.len(), 2);
/// assert!(waypoints[0].has(Tag::Airfield));
/// assert!(waypoints[1].has(Tag::Mountain));
/// ```
pub struct Converter<I> {
    reader: Reader<I>,
    classifier: Classifier,
}

impl<I> Converter<I> {
    /// Creates a converter that uses the default classifier.
    pub fn new(lines: I) -> Self {
        Self::with_classifier(lines, Classifier::default())
    }

    pub fn with_classifier(lines: I, classifier: Classifier) -> Self {
        Self {
            reader: Reader::new(lines),
            classifier,
        }
    }

    /// Returns the number of the last line that was read, starting at 1.
    pub fn line_number(&self) -> usize {
        self.reader.line_number()
    }
}

impl<'a> From<&'a str> for Converter<std::str::Lines<'a>> {
    fn from(data: &'a str) -> Self {
        Self::new(data.lines())
    }
}

impl<I, L> Iterator for Converter<I>
where
    I: Iterator<Item = L>,
    L: AsRef<str>,
{
    type Item = Result<Waypoint, Error>;

    fn next(&mut self) -> Option<Self::Item> {
        let raw = match self.reader.next()? {
            Ok(raw) => raw,
            Err(error) => {
                let line = self.reader.line_number();
                warn!("skipping line {line}: {error}");
                return Some(Err(Error::InvalidWelt2000 { line, error }));
            }
        };

        Some(Ok(Waypoint::from_welt2000(raw, &self.classifier)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::classify::{Rule, Tag};

    const DATA: &str = "\
$ WELT2000 waypoints
AACHE1 AACHEN MERZBRUCK#EDKAA0530826123220189N504923E0061111DEP0

TOO SHORT
MROSA  MONTE ROSA GIPFEL                 4634N455613E0075201CHP0
";

    #[test]
    fn converts_lines_in_order() {
        let mut converter = Converter::from(DATA);

        let aachen = converter
            .next()
            .expect("should have a first item")
            .expect("should be a waypoint");
        assert_eq!(aachen.name(), "AACHEN MERZBRUCK");
        assert_eq!(converter.line_number(), 2);

        assert_eq!(
            converter.next(),
            Some(Err(Error::InvalidWelt2000 {
                line: 4,
                error: welt2000::Error::InvalidLineLength { actual: 9 }
            }))
        );

        let monte_rosa = converter
            .next()
            .expect("should have a third item")
            .expect("should be a waypoint");
        assert_eq!(monte_rosa.short_name(), "MROSA ");
        assert_eq!(monte_rosa.elevation(), Some(4634));

        assert_eq!(converter.next(), None);
        assert_eq!(converter.line_number(), 5);
    }

    #[test]
    fn converts_owned_lines() {
        let lines = DATA.lines().map(String::from).collect::<Vec<_>>();
        let waypoints: Vec<Waypoint> = Converter::new(lines.into_iter())
            .filter_map(Result::ok)
            .collect();

        assert_eq!(waypoints.len(), 2);
    }

    #[test]
    fn uses_custom_classifier() {
        let classifier = Classifier::new(vec![
            Rule::new(r"\bMERZBRUCK\b", &[Tag::Glidersite]).expect("pattern should compile")
        ]);

        let tags: Vec<Vec<Tag>> = Converter::with_classifier(DATA.lines(), classifier)
            .filter_map(Result::ok)
            .map(|wp| wp.classifiers().iter().copied().collect())
            .collect();

        assert_eq!(
            tags,
            vec![
                vec![Tag::Landable, Tag::Airfield, Tag::Glidersite],
                Vec::new()
            ]
        );
    }
}
