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

//! Classification of waypoints by their description.
//!
//! A [`Classifier`] is an ordered table of rules, each a regular expression
//! and the tags it adds. The description of a waypoint is matched against
//! every rule and the tags of all matching rules are merged. A description
//! like `A7 AB12 BRUECKE BR SX` is thus tagged as highway exit, bridge and
//! road interchange at once.

use std::borrow::Cow;
use std::collections::BTreeSet;
use std::fmt;
use std::sync::OnceLock;

use log::trace;
use regex::Regex;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::Error;

/// A tag that classifies a waypoint.
///
/// The tags render in kebab-case, e.g. `mountain-top` or `y-interchange`.
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "kebab-case"))]
pub enum Tag {
    Landable,
    Airfield,
    Glidersite,
    Ulm,
    Catalogued,
    HighwayExit,
    HighwayInterchange,
    YInterchange,
    Road,
    RoadInterchange,
    RailwayInterchange,
    GasStation,
    RailwayStation,
    Bridge,
    Tower,
    Church,
    Hangar,
    Castle,
    Village,
    MountainTop,
    Mountain,
    MountainPass,
    PowerPlant,
    Dam,
    Silo,
    Volcano,
    Lake,
    Sender,
    Vor,
    Ndb,
    Tunnel,
    ReportingPoint,
}

impl Tag {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Landable => "landable",
            Self::Airfield => "airfield",
            Self::Glidersite => "glidersite",
            Self::Ulm => "ulm",
            Self::Catalogued => "catalogued",
            Self::HighwayExit => "highway-exit",
            Self::HighwayInterchange => "highway-interchange",
            Self::YInterchange => "y-interchange",
            Self::Road => "road",
            Self::RoadInterchange => "road-interchange",
            Self::RailwayInterchange => "railway-interchange",
            Self::GasStation => "gas-station",
            Self::RailwayStation => "railway-station",
            Self::Bridge => "bridge",
            Self::Tower => "tower",
            Self::Church => "church",
            Self::Hangar => "hangar",
            Self::Castle => "castle",
            Self::Village => "village",
            Self::MountainTop => "mountain-top",
            Self::Mountain => "mountain",
            Self::MountainPass => "mountain-pass",
            Self::PowerPlant => "power-plant",
            Self::Dam => "dam",
            Self::Silo => "silo",
            Self::Volcano => "volcano",
            Self::Lake => "lake",
            Self::Sender => "sender",
            Self::Vor => "vor",
            Self::Ndb => "ndb",
            Self::Tunnel => "tunnel",
            Self::ReportingPoint => "reporting-point",
        }
    }
}

impl fmt::Display for Tag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A rule that adds its tags to every description its pattern matches.
///
/// Patterns are case-sensitive and search the whole description unless they
/// are anchored themselves.
#[derive(Clone, Debug)]
pub struct Rule {
    pattern: Regex,
    tags: Vec<Tag>,
}

impl Rule {
    /// Creates a rule from a regular expression and the tags to add.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidPattern`] if the pattern doesn't compile.
    pub fn new(pattern: &str, tags: &[Tag]) -> Result<Self, Error> {
        let pattern = Regex::new(pattern).map_err(|e| Error::InvalidPattern {
            pattern: pattern.to_string(),
            error: e.to_string(),
        })?;

        Ok(Self {
            pattern,
            tags: tags.to_vec(),
        })
    }

    pub fn tags(&self) -> &[Tag] {
        &self.tags
    }

    pub fn is_match(&self, text: &str) -> bool {
        self.pattern.is_match(text)
    }
}

const DEFAULT_RULES: &[(&str, &[Tag])] = &[
    (r"\bA[\d]+ B?AB[\d]*[abc]?\b", &[Tag::HighwayExit]),
    (r"\bA[\d]+XA[\d]+\b", &[Tag::HighwayInterchange]),
    (
        r"\bA[\d]+YA[\d]+\b",
        &[Tag::HighwayInterchange, Tag::YInterchange],
    ),
    (r"\bSTR\b", &[Tag::Road]),
    (r"\bSX\b", &[Tag::RoadInterchange]),
    (r"\bSY\b", &[Tag::RoadInterchange, Tag::YInterchange]),
    (r"\bEX\b", &[Tag::RailwayInterchange]),
    (r"\bEY\b", &[Tag::RailwayInterchange, Tag::YInterchange]),
    (r"\bTR\b", &[Tag::GasStation]),
    (
        r"\b(BF|RS|RAIL(WAY)? STATION|GARE)\b",
        &[Tag::RailwayStation],
    ),
    (r"\b(BR|BRIDGE|VIADUCT|PONT)\b", &[Tag::Bridge]),
    (r"\b(TV|TURM|TWR|TOWER|SCHORNSTEIN)\b", &[Tag::Tower]),
    (
        r"\b(CHURCH|KIRCHE|KERK|KIRKE|EGLISE|TEMPLE|TEMPLOM|DOM|KLOSTER)\b",
        &[Tag::Church],
    ),
    (r"\b(HANGAR|HALLE)\b", &[Tag::Hangar]),
    (
        r"\b(CASTLE|BURG|SCHLOSS|KOSTEL|KOSTOL|FESTUNG)\b",
        &[Tag::Castle],
    ),
    (r"\bVILLAGE\b", &[Tag::Village]),
    (
        r"\b(TOP|PEAK|BERG|GIPFEL|MOUNTAIN|SPITZE|SUMMIT)\b",
        &[Tag::MountainTop],
    ),
    (r"^(MT|MOUNT|MONT|MONTE)\b", &[Tag::Mountain]),
    (r"\b(COL|PASS)\b", &[Tag::MountainPass]),
    (
        r"\b(KW|KKW|POWER (PLANT|ST|STA|STN|STATION))\b",
        &[Tag::PowerPlant],
    ),
    (r"\b(DAM|(STAU)?DAMM|STAUMAUER)\b", &[Tag::Dam]),
    (r"\b(SILO)\b", &[Tag::Silo]),
    (r"\b(VULCAN|VULKAN|VOLCANO)\b", &[Tag::Volcano]),
    (r"\b(LAKE|LAC|(STAU)?SEE|TEICH)\b", &[Tag::Lake]),
    (r"\b(SENDER)\b", &[Tag::Sender]),
    (r"\b(VOR)\b", &[Tag::Vor]),
    (r"\b(NDB)\b", &[Tag::Ndb]),
    (r"\b(TUNNEL)\b", &[Tag::Tunnel]),
    (r"\b(PFLICHTMELDEPUNKT)\b", &[Tag::ReportingPoint]),
];

fn default_rules() -> &'static [Rule] {
    static RULES: OnceLock<Vec<Rule>> = OnceLock::new();
    RULES.get_or_init(|| {
        DEFAULT_RULES
            .iter()
            .map(|(pattern, tags)| {
                Rule::new(pattern, tags).expect("built-in pattern should compile")
            })
            .collect()
    })
}

/// Tags descriptions by an ordered table of rules.
///
/// The default classifier uses the built-in rules for WELT2000 descriptions,
/// which are compiled once per process and shared by all classifiers.
///
/// # Examples
///
/// ```
/// use navdata::{Classifier, Tag};
///
/// let tags = Classifier::default().classify("WASSER KUPPE BERG");
/// assert!(tags.contains(&Tag::MountainTop));
/// ```
///
/// A custom table replaces the built-in rules:
///
/// ```
/// use navdata::{Classifier, Rule, Tag};
///
/// # fn main() -> Result<(), navdata::Error> {
/// let classifier = Classifier::new(vec![Rule::new(r"\bFLUGPLATZ\b", &[Tag::Airfield])?]);
/// assert!(classifier.classify("FLUGPLATZ NORD").contains(&Tag::Airfield));
/// assert!(classifier.classify("WASSER KUPPE BERG").is_empty());
/// # Ok(())
/// # }
/// ```
#[derive(Clone, Debug)]
pub struct Classifier {
    rules: Cow<'static, [Rule]>,
}

impl Classifier {
    pub fn new(rules: Vec<Rule>) -> Self {
        Self {
            rules: Cow::Owned(rules),
        }
    }

    pub fn rules(&self) -> &[Rule] {
        &self.rules
    }

    /// Returns the union of the tags of all rules that match the text.
    pub fn classify(&self, text: &str) -> BTreeSet<Tag> {
        let mut tags = BTreeSet::new();
        self.classify_into(text, &mut tags);
        tags
    }

    /// Adds the tags of all rules that match the text to `tags`.
    pub fn classify_into(&self, text: &str, tags: &mut BTreeSet<Tag>) {
        for rule in self.rules.iter().filter(|rule| rule.is_match(text)) {
            trace!("{text:?} matches {}", rule.pattern);
            tags.extend(rule.tags.iter().copied());
        }
    }
}

impl Default for Classifier {
    fn default() -> Self {
        Self {
            rules: Cow::Borrowed(default_rules()),
        }
    }
}
