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

use log::debug;
use welt2000::fields::Surface;

use crate::frequency::Frequency;
use crate::runway::Runway;

/// Returns the code if it is a four letter ICAO location indicator.
pub fn convert_icao(icao: Option<String>) -> Option<String> {
    icao.filter(|code| {
        let is_icao = code.len() == 4 && code.bytes().all(|b| b.is_ascii_alphanumeric());
        if !is_icao {
            debug!("dropping {code:?} which is not an ICAO code");
        }
        is_icao
    })
}

/// Returns the runways of a landing site.
///
/// The first direction is the heading of the runway and its reciprocal is
/// derived from it. If the second direction is not the reciprocal of the
/// first, it is another runway which is added with its own reciprocal.
pub fn convert_runways(
    surface: Option<Surface>,
    directions: Option<&[u16]>,
    length: Option<u32>,
) -> Vec<Runway> {
    let directions = directions.filter(|directions| !directions.is_empty());
    let mut runways = Vec::new();

    if surface.is_some() || length.is_some() || directions.is_some() {
        runways.push(Runway {
            surface: surface.map(Into::into),
            length,
            directions: directions.map(|directions| match directions {
                [h] => vec![h % 360],
                [h, ..] => vec![h % 360, reciprocal(*h)],
                [] => Vec::new(),
            }),
        });
    }

    if let Some(&[h0, h1]) = directions {
        if reciprocal(h0) != h1 {
            runways.push(Runway {
                surface: None,
                length: None,
                directions: Some(vec![h1 % 360, reciprocal(h1)]),
            });
        }
    }

    runways
}

/// Returns the frequencies of a landing site.
pub fn convert_frequencies(frequency: Option<String>) -> Vec<Frequency> {
    frequency
        .map(|frequency| Frequency { frequency })
        .into_iter()
        .collect()
}

fn reciprocal(heading: u16) -> u16 {
    (heading % 360 + 180) % 360
}
