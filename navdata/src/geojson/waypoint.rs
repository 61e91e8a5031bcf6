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

use geo::{BoundingRect, MultiPoint};
use geojson::{Feature, FeatureCollection, GeoJson, Geometry, JsonObject, JsonValue, Value};

use super::rect_to_bbox;
use crate::classify::Tag;
use crate::waypoint::Waypoint;

impl Waypoint {
    /// Returns the waypoint as GeoJSON feature with a point geometry.
    ///
    /// The name, short name, country, elevation and classifiers are added as
    /// properties, as well as the ICAO code of landing sites.
    #[cfg_attr(docsrs, doc(cfg(feature = "geojson")))]
    pub fn to_geojson(&self) -> GeoJson {
        GeoJson::Feature(self.to_feature())
    }

    fn to_feature(&self) -> Feature {
        let mut properties = JsonObject::new();
        properties.insert("name".to_string(), JsonValue::from(self.name()));
        properties.insert(
            "short_name".to_string(),
            JsonValue::from(self.short_name()),
        );
        properties.insert("country".to_string(), JsonValue::from(self.country()));

        if let Some(elevation) = self.elevation() {
            properties.insert("elevation".to_string(), JsonValue::from(elevation));
        }

        properties.insert(
            "classifiers".to_string(),
            JsonValue::from(
                self.classifiers()
                    .iter()
                    .map(Tag::as_str)
                    .collect::<Vec<_>>(),
            ),
        );

        if let Some(icao) = self.landing_site().and_then(|site| site.icao()) {
            properties.insert("icao".to_string(), JsonValue::from(icao));
        }

        Feature {
            bbox: None,
            geometry: Some(Geometry::new(Value::from(&self.point()))),
            id: None,
            properties: Some(properties),
            foreign_members: None,
        }
    }
}

/// Returns the waypoints as GeoJSON feature collection.
#[cfg_attr(docsrs, doc(cfg(feature = "geojson")))]
pub fn to_feature_collection(waypoints: &[Waypoint]) -> GeoJson {
    let points: MultiPoint<f64> = waypoints.iter().map(Waypoint::point).collect();

    GeoJson::FeatureCollection(FeatureCollection {
        bbox: points.bounding_rect().map(rect_to_bbox),
        features: waypoints.iter().map(Waypoint::to_feature).collect(),
        foreign_members: None,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    const AACHEN: &str = "AACHE1 AACHEN MERZBRUCK#EDKAA0530826123220189N504923E0061111DEP0";
    const BRIDGE: &str = "A7BRUE A7 AB12 BRUECKE BR SX               -5S334512W0702230CLP0";

    fn waypoint(line: &str) -> Waypoint {
        Waypoint::try_from_welt2000(line)
            .expect("line should decode")
            .expect("line should be a waypoint")
    }

    #[test]
    fn exports_point_feature() {
        let GeoJson::Feature(feature) = waypoint(AACHEN).to_geojson() else {
            panic!("should be a feature");
        };

        let Some(Geometry {
            value: Value::Point(coords),
            ..
        }) = feature.geometry
        else {
            panic!("should be a point geometry");
        };
        assert!((coords[0] - 6.186_388).abs() < 1e-6);
        assert!((coords[1] - 50.823_055).abs() < 1e-6);

        let properties = feature.properties.expect("should have properties");
        assert_eq!(properties["name"], "AACHEN MERZBRUCK");
        assert_eq!(properties["icao"], "EDKA");
        assert_eq!(properties["elevation"], 189);
        assert_eq!(
            properties["classifiers"],
            JsonValue::from(vec!["landable", "airfield"])
        );
    }

    #[test]
    fn omits_icao_of_points() {
        let GeoJson::Feature(feature) = waypoint(BRIDGE).to_geojson() else {
            panic!("should be a feature");
        };

        let properties = feature.properties.expect("should have properties");
        assert!(!properties.contains_key("icao"));
        assert_eq!(properties["country"], "CL");
    }

    #[test]
    fn exports_feature_collection() {
        let waypoints = vec![waypoint(AACHEN), waypoint(BRIDGE)];

        let GeoJson::FeatureCollection(collection) = to_feature_collection(&waypoints) else {
            panic!("should be a feature collection");
        };

        assert_eq!(collection.features.len(), 2);
        let bbox = collection.bbox.expect("should have a bbox");
        assert_eq!(bbox[0], -70.375);
        assert!((bbox[3] - 50.823_055).abs() < 1e-6);
    }

    #[test]
    fn has_no_bbox_without_waypoints() {
        let GeoJson::FeatureCollection(collection) = to_feature_collection(&[]) else {
            panic!("should be a feature collection");
        };

        assert!(collection.features.is_empty());
        assert_eq!(collection.bbox, None);
    }
}
