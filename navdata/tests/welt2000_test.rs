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

use navdata::{Converter, Error, RunwaySurface, Tag, Waypoint};

const WELT2000_DATA: &str = "\
$ WELT2000 test data
$
AACHE1 AACHEN MERZBRUCK#EDKAA0530826123220189N504923E0061111DEP0
EDXX 1 AIRFIELD EDXX   #EDXXA100092712325 189N473000W0080230DEP0
WASSER KUPPE BERG   GLD#    G 800523      950N504923E0061111DEP0
HOHEN2 HOHENSTEIN      *FL12G 350436      412N504923E0061111ATL2

A7BRUE A7 AB12 BRUECKE BR SX               -5S334512W0702230CLP0
ULMPL1XULM PLATZ       #ULM G 251634122501020N504923E0061111DEP0
UNCL22-STAUSEE DAMM?   ?    S 40180012397 300N504923E0061111DEP0
AACHE1 AACHEN MERZBRUCK#EDKAA0530826123220189N954923E0061111DEP0
MROSA  MONTE ROSA GIPFEL                 4634N455613E0075201CHP0
SINGL1 SINGLE          *    G 40  27      189N504923E0061111DEP0
NOMETA NO METADATA      EDXXA100092712325 189N504923E0061111DEP0
";

fn tags(wp: &Waypoint) -> Vec<Tag> {
    wp.classifiers().iter().copied().collect()
}

#[test]
fn convert_welt2000_file() {
    let (waypoints, errors): (Vec<_>, Vec<_>) =
        Converter::from(WELT2000_DATA).partition(Result::is_ok);
    let waypoints: Vec<Waypoint> = waypoints.into_iter().filter_map(Result::ok).collect();
    let errors: Vec<Error> = errors.into_iter().filter_map(Result::err).collect();

    assert_eq!(waypoints.len(), 10);
    assert_eq!(errors.len(), 1, "should have one error: {errors:?}");

    // Out of bounds latitude in line 11
    assert!(matches!(
        errors[0],
        Error::InvalidWelt2000 {
            line: 11,
            error: welt2000::Error::CoordinateOutOfBounds {
                field: "latitude",
                ..
            }
        }
    ));

    let names: Vec<&str> = waypoints.iter().map(Waypoint::name).collect();
    assert_eq!(
        names,
        vec![
            "AACHEN MERZBRUCK",
            "AIRFIELD EDXX",
            "KUPPE BERG",
            "HOHENSTEIN",
            "A7 AB12 BRUECKE BR SX",
            "ULM PLATZ",
            "STAUSEE DAMM",
            "MONTE ROSA GIPFEL",
            "SINGLE",
            "NO METADATA      EDXXA100092712325",
        ]
    );

    // Airfield: Aachen-Merzbrück
    let aachen = &waypoints[0];
    assert_eq!(aachen.short_name(), "AACHE1");
    assert_eq!(aachen.country(), "DE");
    assert_eq!(tags(aachen), vec![Tag::Landable, Tag::Airfield]);
    assert!((aachen.latitude() - 50.823_055).abs() < 1e-6);
    assert!((aachen.longitude() - 6.186_388).abs() < 1e-6);

    let site = aachen.landing_site().expect("EDKA should be landable");
    assert_eq!(site.icao(), Some("EDKA"));
    assert_eq!(site.runways().len(), 1);
    assert_eq!(site.runways()[0].surface(), Some(RunwaySurface::Asphalt));
    assert_eq!(site.runways()[0].length(), Some(530));
    assert_eq!(site.runways()[0].directions(), Some(&[80, 260][..]));
    assert_eq!(site.frequencies()[0].as_str(), "123.25");

    // Glidersite on a mountain top is not landable
    let wasserkuppe = &waypoints[2];
    assert_eq!(tags(wasserkuppe), vec![Tag::Glidersite, Tag::MountainTop]);
    assert!(wasserkuppe.landing_site().is_none());

    // Catalogued outlanding field with crossing runways
    let hohenstein = &waypoints[3];
    assert_eq!(tags(hohenstein), vec![Tag::Landable, Tag::Catalogued]);
    let site = hohenstein.landing_site().expect("field should be landable");
    assert_eq!(site.field_number(), Some(12));
    let directions: Vec<_> = site.runways().iter().map(|rwy| rwy.directions()).collect();
    assert_eq!(directions, vec![Some(&[40, 220][..]), Some(&[0, 180][..])]);

    // Bridge in the southern and western hemisphere
    let bridge = &waypoints[4];
    assert_eq!(
        tags(bridge),
        vec![Tag::HighwayExit, Tag::RoadInterchange, Tag::Bridge]
    );
    assert!(bridge.latitude() < 0.0);
    assert_eq!(bridge.longitude(), -70.375);
    assert_eq!(bridge.elevation(), Some(-5));

    // ULM is no ICAO code
    let ulm = &waypoints[5];
    assert_eq!(tags(ulm), vec![Tag::Landable, Tag::Airfield, Tag::Ulm]);
    assert_eq!(ulm.landing_site().and_then(|site| site.icao()), None);

    // Single runway direction
    let single = &waypoints[8];
    let site = single.landing_site().expect("airfield should be landable");
    assert_eq!(site.runways()[0].length(), Some(400));
    assert_eq!(site.runways()[0].directions(), Some(&[270][..]));
    assert!(site.frequencies().is_empty());

    // Without metadata the columns are part of the description
    let no_metadata = &waypoints[9];
    assert!(tags(no_metadata).is_empty());
    assert!(no_metadata.landing_site().is_none());
}

#[test]
fn landing_site_iff_landable() {
    for wp in Converter::from(WELT2000_DATA).filter_map(Result::ok) {
        assert_eq!(wp.is_landable(), wp.landing_site().is_some(), "{}", wp.name());

        if wp.has(Tag::Airfield) {
            assert!(wp.is_landable(), "{}", wp.name());
        }
    }
}

#[test]
fn convert_is_idempotent() {
    let first: Vec<_> = Converter::from(WELT2000_DATA).collect();
    let second: Vec<_> = Converter::from(WELT2000_DATA).collect();

    assert_eq!(first, second);
}

#[test]
fn skip_comments_and_blank_lines() {
    let data = "$ only comments\n\n   \n$ and blank lines\n";

    assert_eq!(Converter::from(data).count(), 0);
}

#[test]
fn reject_lines_of_wrong_length() {
    let data = "\
AACHE1 AACHEN MERZBRUCK#EDKAA0530826123220189N504923E0061111DEP
AACHE1 AACHEN MERZBRUCK#EDKAA0530826123220189N504923E0061111DEP00
";

    let errors: Vec<_> = Converter::from(data).filter_map(Result::err).collect();

    assert_eq!(
        errors,
        vec![
            Error::InvalidWelt2000 {
                line: 1,
                error: welt2000::Error::InvalidLineLength { actual: 63 }
            },
            Error::InvalidWelt2000 {
                line: 2,
                error: welt2000::Error::InvalidLineLength { actual: 65 }
            },
        ]
    );
}

#[test]
fn count_columns_in_characters() {
    let data = "\
MUNCH1 MÜNCHEN         #EDMOA1000927      189N504923E0061111DEP0
MUNCH2 MÜNCHEN        #EDMOA1000927      189N504923E0061111DEP0
";

    let results: Vec<_> = Converter::from(data).collect();
    assert_eq!(results.len(), 2);

    let munich = results[0].as_ref().expect("64 characters should decode");
    assert_eq!(munich.name(), "MÜNCHEN");
    assert_eq!(
        munich.landing_site().and_then(|site| site.icao()),
        Some("EDMO")
    );
    assert!((munich.latitude() - 50.823_055).abs() < 1e-6);

    assert_eq!(
        results[1],
        Err(Error::InvalidWelt2000 {
            line: 2,
            error: welt2000::Error::InvalidLineLength { actual: 63 }
        })
    );
}
