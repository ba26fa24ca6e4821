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

//! Serialize/Deserialize the BGP NOTIFICATION wire format.
//!
//! The message type, marker and length header are handled by the transport
//! framing; the functions here work on the message body only.

pub mod deserializer;
pub mod serializer;

use crate::{
    notification::NotificationMessage,
    wire::{
        deserializer::LocatedNotificationMessageParsingError,
        serializer::NotificationMessageWritingError,
    },
};
use nom::Offset;
use serde::{Deserialize, Serialize};
use std::fmt::Debug;

pub type Span<'a> = &'a [u8];

/// One octet error code and one octet error sub-code
pub const NOTIFICATION_MIN_LENGTH: usize = 2;

/// Generic trait for Readable Protocol Data Unit that doesn't need any external
/// input while parsing the packet.
pub trait ReadablePdu<'a, Error: Debug> {
    fn from_wire(buf: Span<'a>) -> nom::IResult<Span<'a>, Self, Error>
    where
        Self: Sized;
}

/// Generic trait for Writable Protocol Data Unit that doesn't need any external
/// input while writing the packet.
#[allow(clippy::len_without_is_empty)]
pub trait WritablePdu<ErrorType> {
    const BASE_LENGTH: usize;

    /// The total length of the written buffer
    fn len(&self) -> usize;

    fn write<T: std::io::Write>(&self, _writer: &mut T) -> Result<(), ErrorType>
    where
        Self: Sized;
}

/// Error returned to the caller of [`decode`]
#[derive(thiserror::Error, Copy, Clone, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub enum WireFormatError {
    /// Not enough octets for the error code and sub-code
    #[error("BGP notification needs at least {expected} octets, got {available}")]
    Underflow { expected: usize, available: usize },
}

/// Decode the body of a NOTIFICATION message.
///
/// Only a body shorter than [`NOTIFICATION_MIN_LENGTH`] fails; any content of
/// the data field is absorbed into the rendered [`NotificationMessage::data`].
pub fn decode(buf: &[u8]) -> Result<NotificationMessage, WireFormatError> {
    if log::log_enabled!(log::Level::Debug) {
        log::debug!("Decoding notification message: {buf:?}");
    }
    let parsed =
        <NotificationMessage as ReadablePdu<LocatedNotificationMessageParsingError<'_>>>::from_wire(
            buf,
        );
    match parsed {
        Ok((_, msg)) => Ok(msg),
        Err(nom::Err::Error(err)) | Err(nom::Err::Failure(err)) => {
            log::debug!(
                "Failed decoding notification message at offset {}: {:?}",
                buf.offset(err.span()),
                err.error()
            );
            Err(WireFormatError::Underflow {
                expected: NOTIFICATION_MIN_LENGTH,
                available: buf.len(),
            })
        }
        Err(nom::Err::Incomplete(_)) => Err(WireFormatError::Underflow {
            expected: NOTIFICATION_MIN_LENGTH,
            available: buf.len(),
        }),
    }
}

/// Encode a NOTIFICATION message body: code, sub-code then the data bytes as
/// they are.
pub fn encode(msg: &NotificationMessage) -> Result<Vec<u8>, NotificationMessageWritingError> {
    if log::log_enabled!(log::Level::Debug) {
        log::debug!("Encoding notification message: {msg:?}");
    }
    let mut buf = Vec::with_capacity(msg.len());
    msg.write(&mut buf)?;
    Ok(buf)
}

#[cfg(test)]
mod tests;
