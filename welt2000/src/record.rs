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

use std::borrow::Cow;

use log::trace;

use crate::{Error, FixedField};

/// The fixed length of a WELT2000 record in characters.
pub const RECORD_LENGTH: usize = 64;

/// Stands in for characters that don't fit into one byte.
pub const SUBSTITUTE: u8 = 0x1A;

/// Marks a comment line.
pub const COMMENT: char = '$';

/// A WELT2000 record type.
pub trait Record<'a>: Sized {
    /// Parse this record type from the fields of a line.
    ///
    /// # Errors
    ///
    /// Returns an error if a field lies beyond the end of the line.
    fn parse(fields: Fields<'a>) -> Result<Self, Error>;

    /// Parse this record type from the bytes of an [encoded](encode) line.
    ///
    /// # Errors
    ///
    /// Returns an error if there are not 64 bytes or any error returned by
    /// [`parse`][Record::parse].
    fn from_bytes(bytes: &'a [u8]) -> Result<Self, Error> {
        if bytes.len() == RECORD_LENGTH {
            Self::parse(Fields::new(bytes))
        } else {
            Err(Error::InvalidLineLength {
                actual: bytes.len(),
            })
        }
    }
}

/// Checks a raw line before its fields are decoded.
///
/// Surrounding whitespace, including the line terminator, is removed. Returns
/// `Ok(None)` for blank lines and comments, which start with `$`.
///
/// # Errors
///
/// Returns [`Error::InvalidLineLength`] if the remaining line is not 64
/// characters long.
///
/// # Examples
///
/// ```
/// use welt2000::{validate, Error};
///
/// assert_eq!(validate("$ WELT2000 comment"), Ok(None));
/// assert_eq!(validate("  \r\n"), Ok(None));
/// assert_eq!(validate("TOO SHORT"), Err(Error::InvalidLineLength { actual: 9 }));
///
/// // characters are counted, not bytes
/// let line = "MUNCH1 MÜNCHEN         #EDMOA1000927      189N504923E0061111DEP0";
/// assert_eq!(validate(line), Ok(Some(line)));
/// ```
pub fn validate(line: &str) -> Result<Option<&str>, Error> {
    let line = line.trim();

    if line.is_empty() {
        trace!("skipping blank line");
        return Ok(None);
    }

    if line.starts_with(COMMENT) {
        trace!("skipping comment {line:?}");
        return Ok(None);
    }

    match line.chars().count() {
        RECORD_LENGTH => Ok(Some(line)),
        actual => Err(Error::InvalidLineLength { actual }),
    }
}

/// Encodes a line with one byte per character so that columns can be
/// addressed by byte.
///
/// ASCII lines are borrowed. Any other character is written as its Latin-1
/// byte, or as [`SUBSTITUTE`] if it has none.
///
/// # Examples
///
/// ```
/// use welt2000::encode;
///
/// assert_eq!(encode("MUNCH1").as_ref(), b"MUNCH1");
/// assert_eq!(encode("MÜ€").as_ref(), &[b'M', 0xDC, 0x1A]);
/// ```
pub fn encode(line: &str) -> Cow<'_, [u8]> {
    if line.is_ascii() {
        Cow::Borrowed(line.as_bytes())
    } else {
        Cow::Owned(
            line.chars()
                .map(|c| u8::try_from(c).unwrap_or(SUBSTITUTE))
                .collect(),
        )
    }
}

/// The bytes of a record from which fields are read at absolute columns.
pub struct Fields<'a> {
    bytes: &'a [u8],
}

impl<'a> Fields<'a> {
    pub fn new(bytes: &'a [u8]) -> Self {
        Self { bytes }
    }

    /// Reads the field starting at the zero-based column.
    ///
    /// # Errors
    ///
    /// Returns an error if the field exceeds the record.
    #[inline]
    pub fn at<F>(&self, column: usize) -> Result<F, Error>
    where
        F: FixedField<'a>,
    {
        self.bytes
            .get(column..)
            .and_then(F::from_bytes)
            .ok_or(Error::InvalidLineLength {
                actual: self.bytes.len(),
            })
    }

    /// Returns all bytes of the record.
    #[inline]
    pub fn raw(&self) -> &'a [u8] {
        self.bytes
    }
}
