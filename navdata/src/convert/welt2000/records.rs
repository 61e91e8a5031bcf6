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

use std::collections::BTreeSet;

use geo::Point;
use log::trace;
use welt2000::records::{decode_line, RawWaypoint};

use super::fields::{convert_frequencies, convert_icao, convert_runways};
use crate::classify::{Classifier, Tag};
use crate::error::Error;
use crate::waypoint::{LandingSite, Waypoint};

impl Waypoint {
    /// Creates a waypoint from a decoded WELT2000 record.
    ///
    /// Airfields and outlanding fields are landable and get a landing site
    /// with the ICAO code, runways, frequencies and field number of the
    /// record. Independent of that, the description is tagged by the
    /// classifier.
    pub fn from_welt2000(raw: RawWaypoint, classifier: &Classifier) -> Self {
        let mut classifiers = BTreeSet::new();

        if raw.is_glidersite {
            classifiers.insert(Tag::Glidersite);
        }

        if raw.is_ulm {
            classifiers.insert(Tag::Ulm);
        }

        if raw.is_airfield {
            classifiers.insert(Tag::Landable);
            classifiers.insert(Tag::Airfield);
        }

        if raw.is_outlanding {
            classifiers.insert(Tag::Landable);
        }

        let landing_site = if classifiers.contains(&Tag::Landable) {
            if raw.field_number.is_some() {
                classifiers.insert(Tag::Catalogued);
            }

            Some(LandingSite {
                icao: convert_icao(raw.icao),
                runways: convert_runways(
                    raw.runway_surface,
                    raw.runway_directions.as_deref(),
                    raw.runway_length,
                ),
                frequencies: convert_frequencies(raw.frequency),
                field_number: raw.field_number,
            })
        } else {
            None
        };

        classifier.classify_into(&raw.text, &mut classifiers);
        trace!("classified {:?} as {classifiers:?}", raw.text);

        Self {
            name: raw.text,
            short_name: raw.shortform,
            country: raw.country,
            description: None,
            coordinate: Point::new(raw.longitude, raw.latitude),
            elevation: raw.elevation,
            classifiers,
            landing_site,
        }
    }

    /// Decodes and classifies a single line of a WELT2000 file.
    ///
    /// Returns `Ok(None)` for comments and blank lines.
    ///
    /// # Examples
    ///
    /// ```
    /// use navdata::{Tag, Waypoint};
    ///
    /// # fn main() -> Result<(), navdata::Error> {
    /// let line = "EDXX 1 AIRFIELD EDXX   #EDXXA100092712325 189N473000W0080230DEP0";
    /// let wp = Waypoint::try_from_welt2000(line)?.expect("line should be a waypoint");
    ///
    /// assert!(wp.has(Tag::Airfield));
    /// assert!(wp.is_landable());
    ///
    /// let runway = &wp.landing_site().expect("airfield should be landable").runways()[0];
    /// assert_eq!(runway.length(), Some(1000));
    /// assert_eq!(runway.directions(), Some(&[90, 270][..]));
    /// # Ok(())
    /// # }
    /// ```
    pub fn try_from_welt2000(line: &str) -> Result<Option<Self>, Error> {
        Ok(decode_line(line)?.map(Self::from))
    }
}

impl From<RawWaypoint> for Waypoint {
    /// Converts the record with the default classifier.
    fn from(raw: RawWaypoint) -> Self {
        Self::from_welt2000(raw, &Classifier::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::runway::{Runway, RunwaySurface};

    fn convert(line: &str) -> Waypoint {
        Waypoint::try_from_welt2000(line)
            .expect("line should decode")
            .expect("line should be a waypoint")
    }

    fn tags(wp: &Waypoint) -> Vec<&'static str> {
        wp.classifiers().iter().map(Tag::as_str).collect()
    }

    #[test]
    fn converts_airfield() {
        let wp = convert("EDXX 1 AIRFIELD EDXX   #EDXXA100092712325 189N473000W0080230DEP0");

        assert_eq!(wp.name(), "AIRFIELD EDXX");
        assert_eq!(wp.short_name(), "EDXX 1");
        assert_eq!(wp.country(), "DE");
        assert_eq!(wp.description(), None);
        assert_eq!(wp.latitude(), 47.5);
        assert!((wp.longitude() + 8.041_666_666).abs() < 1e-6);
        assert_eq!(wp.elevation(), Some(189));
        assert_eq!(tags(&wp), vec!["landable", "airfield"]);

        let site = wp.landing_site().expect("airfield should be landable");
        assert_eq!(site.icao(), Some("EDXX"));
        assert_eq!(site.field_number(), None);
        assert_eq!(
            site.runways(),
            &[Runway {
                surface: Some(RunwaySurface::Asphalt),
                length: Some(1000),
                directions: Some(vec![90, 270]),
            }]
        );
        assert_eq!(site.frequencies().len(), 1);
        assert_eq!(site.frequencies()[0].as_str(), "123.25");
    }

    #[test]
    fn classifies_glidersite_on_mountain() {
        let wp = convert("WASSER KUPPE BERG   GLD#    G 800523      950N504923E0061111DEP0");

        assert_eq!(tags(&wp), vec!["glidersite", "mountain-top"]);
        assert!(!wp.is_landable());
        assert_eq!(wp.landing_site(), None);
    }

    #[test]
    fn catalogues_outlanding_field() {
        let wp = convert("HOHEN2 HOHENSTEIN      *FL12G 350436      412N504923E0061111ATL2");

        assert_eq!(tags(&wp), vec!["landable", "catalogued"]);

        let site = wp.landing_site().expect("outlanding should be landable");
        assert_eq!(site.icao(), None);
        assert_eq!(site.field_number(), Some(12));
        assert_eq!(site.runways().len(), 2);
        assert_eq!(site.runways()[0].surface(), Some(RunwaySurface::Grass));
        assert_eq!(site.runways()[0].length(), Some(350));
        assert_eq!(site.runways()[0].directions(), Some(&[40, 220][..]));
        assert_eq!(site.runways()[1].surface(), None);
        assert_eq!(site.runways()[1].directions(), Some(&[0, 180][..]));
        assert!(site.frequencies().is_empty());
    }

    #[test]
    fn classifies_points_that_are_not_landable() {
        let wp = convert("A7BRUE A7 AB12 BRUECKE BR SX               -5S334512W0702230CLP0");

        assert_eq!(tags(&wp), vec!["highway-exit", "road-interchange", "bridge"]);
        assert_eq!(wp.landing_site(), None);
        assert!((wp.latitude() + 33.753_333).abs() < 1e-6);
        assert_eq!(wp.longitude(), -70.375);
        assert_eq!(wp.elevation(), Some(-5));
    }

    #[test]
    fn drops_ulm_as_icao_code() {
        let wp = convert("ULMPL1XULM PLATZ       #ULM G 251634122501020N504923E0061111DEP0");

        assert_eq!(tags(&wp), vec!["landable", "airfield", "ulm"]);

        let site = wp.landing_site().expect("airfield should be landable");
        assert_eq!(site.icao(), None);
        assert_eq!(site.runways().len(), 1);
        assert_eq!(site.runways()[0].directions(), Some(&[160, 340][..]));
        assert_eq!(site.frequencies()[0].as_str(), "122.50");
    }

    #[test]
    fn converts_unclear_outlanding() {
        let wp = convert("UNCL22-STAUSEE DAMM?   ?    S 40180012397 300N504923E0061111DEP0");

        assert_eq!(tags(&wp), vec!["landable", "dam", "lake"]);

        let site = wp.landing_site().expect("outlanding should be landable");
        assert_eq!(
            site.runways(),
            &[Runway {
                surface: Some(RunwaySurface::Sand),
                length: Some(400),
                directions: Some(vec![180, 0]),
            }]
        );
        assert_eq!(site.frequencies()[0].as_str(), "123.95");
    }

    #[test]
    fn uses_custom_classifier() {
        let raw = decode_line("MROSA  MONTE ROSA GIPFEL                 4634N455613E0075201CHP0")
            .expect("line should decode")
            .expect("line should be a waypoint");

        let wp = Waypoint::from_welt2000(raw.clone(), &Classifier::default());
        assert_eq!(tags(&wp), vec!["mountain-top", "mountain"]);

        let wp = Waypoint::from_welt2000(raw, &Classifier::new(Vec::new()));
        assert!(wp.classifiers().is_empty());
    }

    #[test]
    fn skips_comments() {
        assert_eq!(Waypoint::try_from_welt2000("$ comment"), Ok(None));
        assert_eq!(Waypoint::try_from_welt2000("   "), Ok(None));
    }

    #[test]
    fn fails_on_invalid_line() {
        assert_eq!(
            Waypoint::try_from_welt2000("TOO SHORT"),
            Err(Error::InvalidWelt2000 {
                line: 0,
                error: welt2000::Error::InvalidLineLength { actual: 9 }
            })
        );
    }

    #[test]
    fn is_idempotent() {
        let line = "AACHE1 AACHEN MERZBRUCK#EDKAA0530826123220189N504923E0061111DEP0";
        assert_eq!(convert(line), convert(line));
    }
}
