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

use log::trace;

use crate::fields::*;
use crate::field::decode;
use crate::{encode, Alphanumeric, Error, Record};

/// The column layout of a WELT2000 line.
///
/// Several columns are part of more than one field. Which field applies
/// depends on the [metadata marker](Line::marker) and is decided when the line
/// is decoded into a [`RawWaypoint`].
#[derive(Record, Clone, Copy, Debug)]
pub struct Line<'a> {
    #[welt2000(column = 0)]
    pub shortform: Shortform<'a>,
    /// A `2` marks a waypoint whose data is unclear.
    #[welt2000(column = 4)]
    pub unclear: Flag<'a>,
    /// A `1` marks an airfield and `2` an outlanding field.
    #[welt2000(column = 5)]
    pub kind: Flag<'a>,
    /// Either a space, a `-` if better coordinates are available, or a
    /// character that is appended to the Zander shortform.
    #[welt2000(column = 6)]
    pub suffix: Flag<'a>,
    #[welt2000(column = 7)]
    pub shortform_zander: ShortformZander<'a>,
    #[welt2000(column = 7)]
    pub text: Text<'a>,
    #[welt2000(column = 19)]
    gld_19: Alphanumeric<'a, 5>,
    #[welt2000(column = 20)]
    gld_20: Alphanumeric<'a, 4>,
    #[welt2000(column = 23)]
    pub metadata: Metadata<'a>,
    #[welt2000(column = 23)]
    pub field_number: FieldNumber<'a>,
    #[welt2000(column = 24)]
    pub icao_code: IcaoCode<'a>,
    #[welt2000(column = 28)]
    pub surface: Flag<'a>,
    #[welt2000(column = 29)]
    pub runway_length: RunwayLength<'a>,
    #[welt2000(column = 32)]
    pub runway_direction_1: RunwayDirection<'a>,
    #[welt2000(column = 34)]
    pub runway_direction_2: RunwayDirection<'a>,
    #[welt2000(column = 36)]
    pub frequency: Frequency<'a>,
    #[welt2000(column = 41)]
    pub elevation: Elevation<'a>,
    #[welt2000(column = 45)]
    pub latitude: Latitude<'a>,
    #[welt2000(column = 52)]
    pub longitude: Longitude<'a>,
    #[welt2000(column = 60)]
    pub country: Country<'a>,
    #[welt2000(column = 62)]
    pub year_code: Flag<'a>,
    #[welt2000(column = 63)]
    pub source_code: Flag<'a>,
    #[welt2000(raw)]
    pub bytes: &'a [u8],
}

impl<'a> Line<'a> {
    /// Returns the marker that starts the metadata of landable sites.
    pub fn marker(&self) -> Option<Marker> {
        Marker::from_byte(self.metadata.first())
    }

    /// Returns the description of the waypoint.
    ///
    /// The description is followed by the metadata if the line has some, which
    /// in turn may be preceded by the glidersite marker `GLD`.
    fn description(&self, has_metadata: bool) -> String {
        let text = self.text.as_bytes();
        let end = if !has_metadata {
            text.len()
        } else if &text[13..16] == b"GLD" {
            13
        } else {
            16
        };

        decode(&text[..end])
            .trim_end_matches(['?', '!', ' '])
            .to_string()
    }

    fn zander(&self) -> String {
        match self.suffix.first() {
            b' ' | b'-' => self.shortform_zander.as_str().into_owned(),
            _ => format!(
                "{}{}",
                self.shortform_zander.as_raw_str(),
                self.suffix.as_raw_str()
            ),
        }
    }

    fn icao(&self) -> Option<String> {
        let icao = self.icao_code.as_bytes();

        let is_icao = self.marker() == Some(Marker::Hash)
            && icao[0] != b' '
            && !matches!(icao[3], b'?' | b'!');

        is_icao.then(|| self.icao_code.as_str().into_owned())
    }

    fn is_ulm(&self) -> bool {
        let metadata = &self.metadata.as_bytes()[..4];
        metadata == b"*ULM" || metadata == b"#ULM" || self.metadata == "# ULM"
    }

    fn is_glidersite(&self) -> bool {
        let metadata = &self.metadata.as_bytes()[..4];
        self.metadata == "# GLD"
            || metadata == b"#GLD"
            || metadata == b"*GLD"
            || self.gld_19 == "GLD #"
            || self.gld_20 == "GLD#"
            || self.gld_20 == "GLD*"
    }

    fn runway_directions(&self) -> Option<Vec<u16>> {
        let mut directions = Vec::with_capacity(2);

        if let Some(direction) = self.runway_direction_1.degrees() {
            directions.push(direction);
        }

        if let Some(direction) = self.runway_direction_2.degrees() {
            if !directions.contains(&direction) {
                directions.push(direction);
            }
        }

        (!directions.is_empty()).then_some(directions)
    }
}

/// A waypoint as decoded from a single WELT2000 line.
#[derive(Clone, PartialEq, Debug)]
pub struct RawWaypoint {
    /// The six character shortform as written in the line.
    pub shortform: String,
    pub shortform_zander: String,
    pub text: String,
    pub icao: Option<String>,
    pub is_airfield: bool,
    pub is_outlanding: bool,
    pub is_unclear: bool,
    pub is_ulm: bool,
    pub is_glidersite: bool,
    pub field_number: Option<u32>,
    pub runway_surface: Option<Surface>,
    /// Runway length in meters.
    pub runway_length: Option<u32>,
    /// Up to two distinct runway directions in degrees.
    pub runway_directions: Option<Vec<u16>>,
    /// VHF frequency as `DDD.DD`.
    pub frequency: Option<String>,
    /// Elevation in meters.
    pub elevation: Option<i32>,
    pub elevation_proved: bool,
    pub latitude: f64,
    pub longitude: f64,
    pub ground_check_necessary: bool,
    pub better_coordinates: bool,
    pub country: String,
    pub year_code: String,
    pub source_code: String,
}

impl<'a> TryFrom<Line<'a>> for RawWaypoint {
    type Error = Error;

    fn try_from(line: Line<'a>) -> Result<Self, Self::Error> {
        let latitude = line.latitude.as_decimal()?;
        let longitude = line.longitude.as_decimal()?;

        let has_metadata = line.marker().is_some();

        let wp = RawWaypoint {
            shortform: line.shortform.as_raw_str().into_owned(),
            shortform_zander: line.zander(),
            text: line.description(has_metadata),
            icao: line.icao(),
            is_airfield: line.kind.first() == b'1',
            is_outlanding: line.kind.first() == b'2',
            is_unclear: line.unclear.first() == b'2',
            is_ulm: line.is_ulm(),
            is_glidersite: line.is_glidersite(),
            field_number: line.field_number.as_u32(),
            runway_surface: has_metadata
                .then(|| Surface::from_code(line.surface.first()))
                .flatten(),
            runway_length: has_metadata
                .then(|| line.runway_length.meters())
                .flatten(),
            runway_directions: has_metadata
                .then(|| line.runway_directions())
                .flatten(),
            frequency: has_metadata
                .then(|| line.frequency.as_canonical())
                .flatten(),
            elevation: line.elevation.meters(),
            elevation_proved: line.elevation.is_proved(),
            latitude,
            longitude,
            ground_check_necessary: line.bytes.contains(&b'?'),
            better_coordinates: line.suffix.first() == b'-',
            country: line.country.as_raw_str().trim().to_string(),
            year_code: line.year_code.as_raw_str().trim().to_string(),
            source_code: line.source_code.as_raw_str().trim().to_string(),
        };

        trace!("decoded {wp:?}");

        Ok(wp)
    }
}

impl<'a> TryFrom<&'a str> for RawWaypoint {
    type Error = Error;

    /// Decodes a line that is known to be a record.
    ///
    /// Use [`decode_line`](super::decode_line) to skip comments and blank
    /// lines.
    fn try_from(line: &'a str) -> Result<Self, Self::Error> {
        let bytes = encode(line);
        Line::try_from(&*bytes)?.try_into()
    }
}
