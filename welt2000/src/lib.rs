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

//! WELT2000 waypoint file parser.
//!
//! WELT2000 is a worldwide database of waypoints for gliding. Each waypoint is
//! a line of 64 characters with fields at fixed columns. This crate provides
//! the [fields] of a line and decodes the [records] into a [`RawWaypoint`]
//! with all values as they are written in the line. A line is [encoded] with
//! one byte per character, so the fields reference the bytes of the line and
//! the waypoint copies only what it keeps.
//!
//! # Examples
//!
//! Decoding Aachen-Merzbrück airfield:
//!
//! ```
//! use welt2000::records::RawWaypoint;
//!
//! # fn main() -> Result<(), welt2000::Error> {
//! let line = "AACHE1 AACHEN MERZBRUCK#EDKAA0530826123220189N504923E0061111DEP0";
//! let wp = RawWaypoint::try_from(line)?;
//!
//! assert_eq!(wp.text, "AACHEN MERZBRUCK");
//! assert_eq!(wp.icao.as_deref(), Some("EDKA"));
//! assert_eq!(wp.runway_length, Some(530));
//! assert_eq!(wp.runway_directions, Some(vec![80, 260]));
//! println!("{:.4}, {:.4}", wp.latitude, wp.longitude); // => "50.8231, 6.1864"
//! #     Ok(())
//! # }
//! ```
//!
//! An entire file is read with the lazy [`Reader`], which skips comments and
//! blank lines:
//!
//! ```
//! use welt2000::records::Reader;
//!
//! let data = "\
//! $ WELT2000 comment
//! AACHE1 AACHEN MERZBRUCK#EDKAA0530826123220189N504923E0061111DEP0
//! MROSA  MONTE ROSA GIPFEL                 4634N455613E0075201CHP0
//! ";
//!
//! for wp in Reader::from(data) {
//!     match wp {
//!         Ok(wp) => println!("{} ({})", wp.text, wp.country),
//!         Err(e) => eprintln!("skipping invalid line: {e}"),
//!     }
//! }
//! ```
//!
//! [fields]: crate::fields
//! [records]: crate::records
//! [`RawWaypoint`]: crate::records::RawWaypoint
//! [`Reader`]: crate::records::Reader
//! [encoded]: crate::encode

mod error;
mod field;
mod record;

pub use field::{Alphanumeric, FixedField, Numeric};
pub use record::{encode, validate, RECORD_LENGTH, SUBSTITUTE};
// Lets the records derive their layout with `#[derive(Record)]`
pub(crate) use welt2000_derive::Record;

pub mod fields;
pub mod records;
pub use error::Error;
