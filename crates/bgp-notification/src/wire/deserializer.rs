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

//! Deserializer for BGP Notification message

use crate::{
    description::subcode_description,
    notification::NotificationMessage,
    text::render_data,
    wire::{ReadablePdu, Span},
};
use nom::{
    error::{ErrorKind, ParseError},
    number::complete::be_u8,
    IResult,
};
use serde::{Deserialize, Serialize};

/// Serde shim for the foreign [`nom::error::ErrorKind`]
#[derive(Debug, Serialize, Deserialize)]
#[serde(remote = "nom::error::ErrorKind")]
pub enum ErrorKindSerdeDeref {
    Tag,
    MapRes,
    MapOpt,
    Alt,
    IsNot,
    IsA,
    SeparatedList,
    SeparatedNonEmptyList,
    Many0,
    Many1,
    ManyTill,
    Count,
    TakeUntil,
    LengthValue,
    TagClosure,
    Alpha,
    Digit,
    HexDigit,
    OctDigit,
    AlphaNumeric,
    Space,
    MultiSpace,
    LengthValueFn,
    Eof,
    Switch,
    TagBits,
    OneOf,
    NoneOf,
    Char,
    CrLf,
    RegexpMatch,
    RegexpMatches,
    RegexpFind,
    RegexpCapture,
    RegexpCaptures,
    TakeWhile1,
    Complete,
    Fix,
    Escaped,
    EscapedTransform,
    NonEmpty,
    ManyMN,
    Not,
    Permutation,
    Verify,
    TakeTill1,
    TakeWhileMN,
    TooLarge,
    Many0Count,
    Many1Count,
    Float,
    Satisfy,
    Fail,
}

/// BGP Notification Message Parsing errors
#[derive(Eq, PartialEq, Clone, Debug, Serialize, Deserialize)]
pub enum NotificationMessageParsingError {
    /// Errors triggered by the nom parser, see [nom::error::ErrorKind] for
    /// additional information.
    #[serde(with = "ErrorKindSerdeDeref")]
    NomError(ErrorKind),
}

/// [`NotificationMessageParsingError`] along with the remaining input at the
/// point the error occurred
#[derive(Eq, PartialEq, Clone, Debug, Serialize, Deserialize)]
pub struct LocatedNotificationMessageParsingError<'a> {
    #[serde(borrow)]
    span: Span<'a>,
    error: NotificationMessageParsingError,
}

impl<'a> LocatedNotificationMessageParsingError<'a> {
    pub const fn new(span: Span<'a>, error: NotificationMessageParsingError) -> Self {
        Self { span, error }
    }

    pub const fn span(&self) -> Span<'a> {
        self.span
    }

    pub const fn error(&self) -> &NotificationMessageParsingError {
        &self.error
    }
}

impl<'a> ParseError<Span<'a>> for LocatedNotificationMessageParsingError<'a> {
    fn from_error_kind(input: Span<'a>, kind: ErrorKind) -> Self {
        Self::new(input, NotificationMessageParsingError::NomError(kind))
    }

    fn append(_input: Span<'a>, _kind: ErrorKind, other: Self) -> Self {
        other
    }
}

impl<'a> ReadablePdu<'a, LocatedNotificationMessageParsingError<'a>> for NotificationMessage {
    fn from_wire(
        buf: Span<'a>,
    ) -> IResult<Span<'a>, Self, LocatedNotificationMessageParsingError<'a>> {
        let (buf, code) = be_u8(buf)?;
        let (buf, subcode) = be_u8(buf)?;
        let (buf, data) = nom::combinator::rest(buf)?;
        if subcode_description(code, subcode).is_none() {
            log::warn!("Received notification with unregistered error code {code} and sub-code {subcode}");
        }
        Ok((
            buf,
            NotificationMessage::new(code, subcode, render_data(code, subcode, data)),
        ))
    }
}
