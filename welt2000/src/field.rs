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
use std::fmt;

use crate::record::SUBSTITUTE;

/// A fixed-length field type.
///
/// This trait is implemented by all WELT2000 fields. Each field is created
/// [`from_bytes`](FixedField::from_bytes) and stores a reference to those
/// bytes.
pub trait FixedField<'a>: Sized {
    /// The fixed length of this field in bytes.
    const LENGTH: usize;

    /// Parse this field from the start of a byte slice.
    ///
    /// Returns `None` if the slice is shorter than [`LENGTH`][Self::LENGTH].
    fn from_bytes(bytes: &'a [u8]) -> Option<Self>;
}

/// Returns the first `N` bytes as array reference.
#[inline]
pub(crate) fn take<const N: usize>(bytes: &[u8]) -> Option<&[u8; N]> {
    bytes.get(..N).and_then(|b| b.try_into().ok())
}

/// Decodes the bytes of an [encoded](crate::encode) line.
///
/// ASCII is borrowed. Other bytes are Latin-1 and the substitute byte becomes
/// U+FFFD.
#[inline]
pub(crate) fn decode(bytes: &[u8]) -> Cow<'_, str> {
    if bytes.is_ascii() && !bytes.contains(&SUBSTITUTE) {
        // ASCII is valid UTF-8
        Cow::Borrowed(std::str::from_utf8(bytes).unwrap_or_default())
    } else {
        Cow::Owned(
            bytes
                .iter()
                .map(|&b| match b {
                    SUBSTITUTE => char::REPLACEMENT_CHARACTER,
                    b => char::from(b),
                })
                .collect(),
        )
    }
}

#[inline]
fn trim_end_spaces(bytes: &[u8]) -> &[u8] {
    let len = bytes.iter().rposition(|&b| b != b' ').map_or(0, |i| i + 1);
    &bytes[..len]
}

/// Parses a non-empty run of ASCII digits.
///
/// Returns `None` if any byte is not a digit or the value overflows.
#[inline]
pub(crate) fn parse_digits(bytes: &[u8]) -> Option<u32> {
    if bytes.is_empty() {
        return None;
    }

    bytes.iter().try_fold(0u32, |acc, &b| {
        if b.is_ascii_digit() {
            acc.checked_mul(10)?.checked_add((b - b'0') as u32)
        } else {
            None
        }
    })
}

/////////////////////////////////////////////////////////////////////////////
// Alphanumeric Field
/////////////////////////////////////////////////////////////////////////////

/// A alpha/numeric field (left-justified, space-padded).
#[derive(Clone, Copy, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct Alphanumeric<'a, const N: usize>(pub(crate) &'a [u8; N]);

impl<'a, const N: usize> Alphanumeric<'a, N> {
    /// Returns the field as bytes.
    #[inline]
    pub fn as_bytes(&self) -> &'a [u8] {
        self.0
    }

    /// Returns the field as string without any trimming.
    ///
    /// The string is borrowed unless the field contains non-ASCII characters.
    #[inline]
    pub fn as_raw_str(&self) -> Cow<'a, str> {
        decode(self.0)
    }

    /// Returns the field as string with trailing spaces removed.
    #[inline]
    pub fn as_str(&self) -> Cow<'a, str> {
        decode(trim_end_spaces(self.0))
    }

    /// Returns the first byte of the field.
    #[inline]
    pub fn first(&self) -> u8 {
        self.0[0]
    }
}

impl<'a, const N: usize> FixedField<'a> for Alphanumeric<'a, N> {
    const LENGTH: usize = N;

    fn from_bytes(bytes: &'a [u8]) -> Option<Self> {
        take(bytes).map(Self)
    }
}

impl<const N: usize> PartialEq<&str> for Alphanumeric<'_, N> {
    fn eq(&self, other: &&str) -> bool {
        self.0.as_slice() == other.as_bytes()
    }
}

impl<const N: usize> fmt::Debug for Alphanumeric<'_, N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "\"{}\"", self.as_raw_str())
    }
}

impl<const N: usize> fmt::Display for Alphanumeric<'_, N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl<const N: usize> From<Alphanumeric<'_, N>> for String {
    fn from(a: Alphanumeric<'_, N>) -> Self {
        a.as_str().into_owned()
    }
}

/////////////////////////////////////////////////////////////////////////////
// Numeric Field
/////////////////////////////////////////////////////////////////////////////

/// A numeric field that may be padded with spaces on either side.
#[derive(Clone, Copy, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct Numeric<'a, const N: usize>(&'a [u8; N]);

impl<'a, const N: usize> Numeric<'a, N> {
    /// Returns the digits as number.
    ///
    /// Returns `None` if the field is blank or contains anything but digits
    /// surrounded by spaces.
    #[inline]
    pub fn as_u32(&self) -> Option<u32> {
        let start = self.0.iter().position(|&b| b != b' ')?;
        let end = self.0.iter().rposition(|&b| b != b' ')?;
        parse_digits(&self.0[start..=end])
    }
}

impl<'a, const N: usize> FixedField<'a> for Numeric<'a, N> {
    const LENGTH: usize = N;

    fn from_bytes(bytes: &'a [u8]) -> Option<Self> {
        take(bytes).map(Self)
    }
}

impl<const N: usize> fmt::Debug for Numeric<'_, N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = String::from_utf8_lossy(self.0);
        write!(f, "{s}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn alphanumeric_trims_trailing_spaces() {
        let field = Alphanumeric::<6>::from_bytes(b"EDXX  ").expect("field should fit");
        assert_eq!(field.as_str(), "EDXX");
        assert_eq!(field.as_raw_str(), "EDXX  ");
        assert!(matches!(field.as_str(), Cow::Borrowed(_)));
    }

    #[test]
    fn alphanumeric_is_too_short() {
        assert!(Alphanumeric::<4>::from_bytes(b"ED").is_none());
    }

    #[test]
    fn alphanumeric_decodes_latin1() {
        let field = Alphanumeric::<4>::from_bytes(&[b'M', 0xDC, b'N', b' ']).expect("field should fit");
        assert_eq!(field.as_str(), "MÜN");
        assert_eq!(field.as_raw_str(), "MÜN ");
        assert_eq!(String::from(field), "MÜN");
    }

    #[test]
    fn alphanumeric_decodes_substitute() {
        let field = Alphanumeric::<2>::from_bytes(&[SUBSTITUTE, b'X']).expect("field should fit");
        assert_eq!(field.as_str(), "\u{FFFD}X");
    }

    #[test]
    fn alphanumeric_of_spaces_is_empty() {
        let field = Alphanumeric::<3>::from_bytes(b"   ").expect("field should fit");
        assert_eq!(field.as_str(), "");
    }

    #[test]
    fn numeric_with_padding() {
        let field = Numeric::<3>::from_bytes(b" 80").expect("field should fit");
        assert_eq!(field.as_u32(), Some(80));

        let field = Numeric::<3>::from_bytes(b"8  ").expect("field should fit");
        assert_eq!(field.as_u32(), Some(8));
    }

    #[test]
    fn numeric_with_garbage() {
        for bytes in [b"   ", b"8 0", b"1A0", b"-10"] {
            let field = Numeric::<3>::from_bytes(bytes).expect("field should fit");
            assert_eq!(field.as_u32(), None, "{bytes:?} should not be a number");
        }
    }
}
