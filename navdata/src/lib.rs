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

//! Classified waypoints for flight planning.
//!
//! This crate converts the records of a WELT2000 file into [`Waypoint`]s. A
//! waypoint is tagged by what it is, e.g. an airfield or a mountain top. The
//! tags are derived from the flags of a record and from its description by a
//! [`Classifier`]. Airfields and outlanding fields are landable and have a
//! [`LandingSite`] with their runways and radio frequencies.
//!
//! # Examples
//!
//! ```
//! use navdata::{Converter, Tag};
//!
//! let data = "\
//! $ WELT2000
//! AACHE1 AACHEN MERZBRUCK#EDKAA0530826123220189N504923E0061111DEP0
//! A7BRUE A7 AB12 BRUECKE BR SX               -5S334512W0702230CLP0
//! ";
//!
//! for wp in Converter::from(data) {
//!     match wp {
//!         Ok(wp) => {
//!             let tags: Vec<String> = wp.classifiers().iter().map(Tag::to_string).collect();
//!             println!("{}: {}", wp.name(), tags.join(", "));
//!         }
//!         Err(e) => eprintln!("{e}"),
//!     }
//! }
//! ```
//!
//! # Features
//!
//! - `serde` to serialize and deserialize the waypoints.
//! - `geojson` to export waypoints as GeoJSON features.

#![cfg_attr(docsrs, feature(doc_cfg))]

mod classify;
pub mod convert;
mod error;
mod frequency;
#[cfg(feature = "geojson")]
pub mod geojson;
mod runway;
mod waypoint;

pub use classify::{Classifier, Rule, Tag};
pub use convert::welt2000::Converter;
pub use error::Error;
pub use frequency::Frequency;
pub use runway::{Runway, RunwaySurface};
pub use waypoint::{LandingSite, Waypoint};
