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
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::classify::Tag;
use crate::frequency::Frequency;
use crate::runway::Runway;

/// A waypoint with its classification.
#[derive(Clone, PartialEq, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Waypoint {
    pub(crate) name: String,
    pub(crate) short_name: String,
    pub(crate) country: String,
    pub(crate) description: Option<String>,
    pub(crate) coordinate: Point<f64>,
    pub(crate) elevation: Option<i32>,
    pub(crate) classifiers: BTreeSet<Tag>,
    pub(crate) landing_site: Option<LandingSite>,
}

/// What is known about a site where one can land.
#[derive(Clone, Default, PartialEq, Eq, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct LandingSite {
    pub(crate) icao: Option<String>,
    pub(crate) runways: Vec<Runway>,
    pub(crate) frequencies: Vec<Frequency>,
    pub(crate) field_number: Option<u32>,
}

impl Waypoint {
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn short_name(&self) -> &str {
        &self.short_name
    }

    pub fn country(&self) -> &str {
        &self.country
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    /// The latitude in decimal degrees, negative south of the equator.
    pub fn latitude(&self) -> f64 {
        self.coordinate.y()
    }

    /// The longitude in decimal degrees, negative west of Greenwich.
    pub fn longitude(&self) -> f64 {
        self.coordinate.x()
    }

    /// The waypoint as point with the longitude as x and latitude as y.
    pub fn point(&self) -> Point<f64> {
        self.coordinate
    }

    /// The elevation in meters above mean sea level.
    pub fn elevation(&self) -> Option<i32> {
        self.elevation
    }

    pub fn classifiers(&self) -> &BTreeSet<Tag> {
        &self.classifiers
    }

    pub fn has(&self, tag: Tag) -> bool {
        self.classifiers.contains(&tag)
    }

    pub fn is_landable(&self) -> bool {
        self.has(Tag::Landable)
    }

    /// The landing site if the waypoint is landable.
    pub fn landing_site(&self) -> Option<&LandingSite> {
        self.landing_site.as_ref()
    }
}

impl LandingSite {
    pub fn icao(&self) -> Option<&str> {
        self.icao.as_deref()
    }

    pub fn runways(&self) -> &[Runway] {
        &self.runways
    }

    pub fn frequencies(&self) -> &[Frequency] {
        &self.frequencies
    }

    /// The number of the field in the catalogue of outlanding fields.
    pub fn field_number(&self) -> Option<u32> {
        self.field_number
    }
}
