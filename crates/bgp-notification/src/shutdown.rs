// Copyright (C) 2022-present The NetGauze Authors.
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//    http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or
// implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! BGP Administrative Shutdown Communication as defined by
//! [draft-ietf-idr-shutdown](https://datatracker.ietf.org/doc/html/draft-ietf-idr-shutdown)
//!
//! ```text
//! 0                   1                   2                   3
//! 0 1 2 3 4 5 6 7 8 9 0 1 2 3 4 5 6 7 8 9 0 1 2 3 4 5 6 7 8 9 0 1
//! +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
//! | Error code 6  |  Subcode 2    |    Length     |     ...       \
//! +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+               /
//! \                                                               \
//! /                 ... Shutdown Communication ...                /
//! \                                                               \
//! +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
//! ```

use crate::text::hex_string;
use std::fmt;

/// Maximum length of the UTF-8 encoded Shutdown Communication
pub const MAX_SHUTDOWN_COMMUNICATION_LENGTH: u8 = 128;

/// Decoded view of the data field of a Cease/Administrative Shutdown
/// notification. Every byte sequence maps to one of the variants, the
/// [`fmt::Display`] implementation is the rendered notification data.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShutdownCommunication<'a> {
    /// The declared length is zero
    Empty { trailing: &'a [u8] },

    /// A valid UTF-8 communication, with CR and LF replaced by spaces
    Text {
        length: u8,
        text: String,
        trailing: &'a [u8],
    },

    /// The declared length exceeds [`MAX_SHUTDOWN_COMMUNICATION_LENGTH`]
    TooLong { length: u8, payload: &'a [u8] },

    /// The communication is not valid UTF-8. `trailing` starts at the first
    /// octet of the communication, so the invalid text is part of the dump.
    InvalidUtf8 { length: u8, trailing: &'a [u8] },
}

impl<'a> ShutdownCommunication<'a> {
    /// Parse the data following the error code and sub-code octets.
    ///
    /// Returns `None` for an empty payload, i.e. the peer didn't send a
    /// communication at all.
    pub fn from_payload(payload: &'a [u8]) -> Option<Self> {
        let (&length, rest) = payload.split_first()?;
        if length == 0 {
            return Some(Self::Empty { trailing: rest });
        }
        if length > MAX_SHUTDOWN_COMMUNICATION_LENGTH {
            log::warn!("Shutdown Communication length {length} exceeds {MAX_SHUTDOWN_COMMUNICATION_LENGTH} octets");
            return Some(Self::TooLong { length, payload });
        }
        let declared = usize::from(length);
        let (raw, trailing) = rest.split_at(declared.min(rest.len()));
        if raw.len() < declared {
            log::warn!(
                "Shutdown Communication is truncated, declared {declared} octets but only {} are present",
                raw.len()
            );
        }
        match std::str::from_utf8(raw) {
            Ok(text) => Some(Self::Text {
                length,
                text: text.replace(['\r', '\n'], " "),
                trailing,
            }),
            Err(err) => {
                log::warn!("Shutdown Communication is not valid UTF-8: {err}");
                Some(Self::InvalidUtf8 {
                    length,
                    trailing: rest,
                })
            }
        }
    }

    /// Declared length of the communication
    pub const fn length(&self) -> u8 {
        match self {
            Self::Empty { .. } => 0,
            Self::Text { length, .. }
            | Self::TooLong { length, .. }
            | Self::InvalidUtf8 { length, .. } => *length,
        }
    }

    /// Bytes left undecoded after the communication. A too long
    /// communication isn't decoded at all, so that's the whole payload
    /// including the length octet.
    pub const fn trailing(&self) -> &'a [u8] {
        match self {
            Self::Empty { trailing }
            | Self::Text { trailing, .. }
            | Self::InvalidUtf8 { trailing, .. } => *trailing,
            Self::TooLong { payload, .. } => *payload,
        }
    }
}

impl fmt::Display for ShutdownCommunication<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty { .. } => write!(f, "The peer sent an empty Shutdown Communication.")?,
            Self::Text { text, .. } => write!(f, "Shutdown Communication: \"{text}\"")?,
            Self::TooLong { length, payload } => write!(
                f,
                "The peer sent too long Shutdown Communication: {length} octets: {}",
                hex_string(payload)
            )?,
            Self::InvalidUtf8 { .. } => write!(
                f,
                "The peer sent a invalid Shutdown Communication (invalid UTF-8)"
            )?,
        }
        let trailing = self.trailing();
        if !trailing.is_empty() {
            write!(f, ", trailing data: {}", hex_string(trailing))?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_payload() {
        assert_eq!(ShutdownCommunication::from_payload(&[]), None);
    }

    #[test]
    fn test_text() {
        let wire = [5, b'B', b'y', b'e', b'!', b'!'];
        let parsed = ShutdownCommunication::from_payload(&wire);
        assert_eq!(
            parsed,
            Some(ShutdownCommunication::Text {
                length: 5,
                text: "Bye!!".to_string(),
                trailing: &[],
            })
        );
        assert_eq!(
            parsed.map(|x| x.to_string()),
            Some("Shutdown Communication: \"Bye!!\"".to_string())
        );
    }

    #[test]
    fn test_text_replaces_cr_lf() {
        let wire = [5, b'H', b'i', b'\r', b'\n', b'X'];
        let parsed = ShutdownCommunication::from_payload(&wire).map(|x| x.to_string());
        assert_eq!(
            parsed,
            Some("Shutdown Communication: \"Hi  X\"".to_string())
        );
    }

    #[test]
    fn test_text_with_multibyte_utf8() {
        let text = "Wartung \u{1F6A7}";
        let mut wire = vec![text.len() as u8];
        wire.extend_from_slice(text.as_bytes());
        let parsed = ShutdownCommunication::from_payload(&wire).map(|x| x.to_string());
        assert_eq!(
            parsed,
            Some(format!("Shutdown Communication: \"{text}\""))
        );
    }

    #[test]
    fn test_text_with_trailing_data() {
        let wire = [2, b'o', b'k', 0x01, 0xab];
        let parsed = ShutdownCommunication::from_payload(&wire);
        assert_eq!(parsed.as_ref().map(|x| x.trailing()), Some(&wire[3..]));
        assert_eq!(
            parsed.map(|x| x.to_string()),
            Some("Shutdown Communication: \"ok\", trailing data: 0x01AB".to_string())
        );
    }

    #[test]
    fn test_truncated_text() {
        let wire = [10, b'a', b'b', b'c'];
        let parsed = ShutdownCommunication::from_payload(&wire);
        assert_eq!(
            parsed,
            Some(ShutdownCommunication::Text {
                length: 10,
                text: "abc".to_string(),
                trailing: &[],
            })
        );
    }

    #[test]
    fn test_empty_communication() {
        let parsed = ShutdownCommunication::from_payload(&[0]);
        assert_eq!(parsed, Some(ShutdownCommunication::Empty { trailing: &[] }));
        assert_eq!(
            parsed.map(|x| x.to_string()),
            Some("The peer sent an empty Shutdown Communication.".to_string())
        );

        let parsed = ShutdownCommunication::from_payload(&[0, 0x41, 0x42]).map(|x| x.to_string());
        assert_eq!(
            parsed,
            Some(
                "The peer sent an empty Shutdown Communication., trailing data: 0x4142".to_string()
            )
        );
    }

    #[test]
    fn test_max_length_is_accepted() {
        let mut wire = vec![MAX_SHUTDOWN_COMMUNICATION_LENGTH];
        wire.extend(std::iter::repeat(b'x').take(128));
        let parsed = ShutdownCommunication::from_payload(&wire);
        assert_eq!(
            parsed.map(|x| x.to_string()),
            Some(format!("Shutdown Communication: \"{}\"", "x".repeat(128)))
        );
    }

    #[test]
    fn test_too_long() {
        let wire = [129, b'a', b'b'];
        let parsed = ShutdownCommunication::from_payload(&wire);
        assert_eq!(
            parsed,
            Some(ShutdownCommunication::TooLong {
                length: 129,
                payload: &wire,
            })
        );
        assert_eq!(parsed.as_ref().map(|x| x.length()), Some(129));
        assert_eq!(
            parsed.map(|x| x.to_string()),
            Some(
                "The peer sent too long Shutdown Communication: 129 octets: 0x816162, trailing data: 0x816162"
                    .to_string()
            )
        );
    }

    #[test]
    fn test_too_long_length_only() {
        let parsed = ShutdownCommunication::from_payload(&[255]);
        assert_eq!(parsed.as_ref().map(|x| x.trailing()), Some(&[255u8][..]));
        assert_eq!(
            parsed.map(|x| x.to_string()),
            Some(
                "The peer sent too long Shutdown Communication: 255 octets: 0xFF, trailing data: 0xFF"
                    .to_string()
            )
        );
    }

    #[test]
    fn test_invalid_utf8_single_octet() {
        let wire = [1, 0xff];
        let parsed = ShutdownCommunication::from_payload(&wire);
        assert_eq!(
            parsed,
            Some(ShutdownCommunication::InvalidUtf8 {
                length: 1,
                trailing: &wire[1..],
            })
        );
        assert_eq!(
            parsed.map(|x| x.to_string()),
            Some(
                "The peer sent a invalid Shutdown Communication (invalid UTF-8), trailing data: 0xFF"
                    .to_string()
            )
        );
    }

    #[test]
    fn test_invalid_utf8() {
        let wire = [3, b'a', 0xc3, 0x28, 0x07];
        let parsed = ShutdownCommunication::from_payload(&wire);
        assert_eq!(
            parsed,
            Some(ShutdownCommunication::InvalidUtf8 {
                length: 3,
                trailing: &wire[1..],
            })
        );
        assert_eq!(
            parsed.map(|x| x.to_string()),
            Some(
                "The peer sent a invalid Shutdown Communication (invalid UTF-8), trailing data: 0x61C32807"
                    .to_string()
            )
        );
    }
}
