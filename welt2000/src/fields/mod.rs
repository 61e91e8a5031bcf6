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

//! The fields of a WELT2000 record.
//!
//! All fields reference the bytes of a line. Fields that are blank or
//! malformed decode to `None`, since many records of the database are
//! incomplete. Only the [coordinates](Latitude) fail with an error.

use crate::Alphanumeric;

mod coordinate;
mod elevation;
mod frequency;
mod marker;
mod runway;
mod surface;

pub use coordinate::{Latitude, Longitude};
pub use elevation::Elevation;
pub use frequency::Frequency;
pub use marker::{FieldNumber, Marker};
pub use runway::{RunwayDirection, RunwayLength};
pub use surface::Surface;

pub type Country<'a> = Alphanumeric<'a, 2>;
pub type Flag<'a> = Alphanumeric<'a, 1>;
pub type IcaoCode<'a> = Alphanumeric<'a, 4>;
pub type Metadata<'a> = Alphanumeric<'a, 5>;
pub type Shortform<'a> = Alphanumeric<'a, 6>;
pub type ShortformZander<'a> = Alphanumeric<'a, 12>;
pub type Text<'a> = Alphanumeric<'a, 34>;
