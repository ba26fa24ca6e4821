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

use crate::{
    notification::NotificationMessage,
    wire::{
        decode,
        deserializer::{LocatedNotificationMessageParsingError, NotificationMessageParsingError},
        encode,
        serializer::NotificationMessageWritingError,
        tests::{combine, test_parse_error, test_parsed_completely, test_write},
        WireFormatError, NOTIFICATION_MIN_LENGTH,
    },
};
use nom::error::ErrorKind;

#[test]
fn test_hold_timer_expired() -> Result<(), NotificationMessageWritingError> {
    let good_wire = [0x04, 0x00];
    let good = NotificationMessage::new(4, 0, String::new());

    let parsed = test_parsed_completely(&good_wire[..], &good);
    assert_eq!(parsed.description(), "Hold timer expired / Unspecific");
    test_write(&good, &good_wire)?;
    Ok(())
}

#[test]
fn test_administrative_shutdown() {
    let good_wire = combine(vec![&[0x06, 0x02, 0x05], b"Bye!!"]);
    let good = NotificationMessage::new(6, 2, "Shutdown Communication: \"Bye!!\"".to_string());

    let parsed = test_parsed_completely(&good_wire[..], &good);
    assert_eq!(
        parsed.description(),
        "Cease / Administrative Shutdown / Shutdown Communication: \"Bye!!\""
    );
}

#[test]
fn test_administrative_shutdown_cr_lf() {
    let good_wire = [0x06, 0x02, 0x05, b'H', b'i', 0x0d, 0x0a, b'X'];
    let good = NotificationMessage::new(6, 2, "Shutdown Communication: \"Hi  X\"".to_string());

    test_parsed_completely(&good_wire[..], &good);
}

#[test]
fn test_administrative_shutdown_empty_data() {
    let good_wire = [0x06, 0x02];
    let good = NotificationMessage::new(6, 2, String::new());

    test_parsed_completely(&good_wire[..], &good);
    assert_eq!(
        decode(&good_wire).map(|x| x.description()),
        Ok("Cease / Administrative Shutdown".to_string())
    );
}

#[test]
fn test_administrative_shutdown_too_long() {
    let good_wire = [0x06, 0x02, 0xc8, 0x41, 0x42];
    let good = NotificationMessage::new(
        6,
        2,
        "The peer sent too long Shutdown Communication: 200 octets: 0xC84142, trailing data: 0xC84142"
            .to_string(),
    );

    test_parsed_completely(&good_wire[..], &good);
}

#[test]
fn test_administrative_shutdown_invalid_utf8() {
    let good_wire = [0x06, 0x02, 0x02, 0xc3, 0x28, 0x41];
    let good = NotificationMessage::new(
        6,
        2,
        "The peer sent a invalid Shutdown Communication (invalid UTF-8), trailing data: 0xC32841"
            .to_string(),
    );

    let parsed = test_parsed_completely(&good_wire[..], &good);
    assert_eq!(
        parsed.description(),
        "Cease / Administrative Shutdown / The peer sent a invalid Shutdown Communication (invalid UTF-8), trailing data: 0xC32841"
    );
}

#[test]
fn test_unknown_code_and_subcode() {
    let good_wire = [0x09, 0x09, b'A', b'B'];
    let good = NotificationMessage::new(9, 9, "AB".to_string());

    let parsed = test_parsed_completely(&good_wire[..], &good);
    assert_eq!(
        parsed.description(),
        "unknown error / unknown reason / AB"
    );
}

#[test]
fn test_unprintable_data() {
    let good_wire = [0x03, 0x06, 0xff];
    let good = NotificationMessage::new(3, 6, "0xFF".to_string());

    let parsed = test_parsed_completely(&good_wire[..], &good);
    assert_eq!(
        parsed.description(),
        "UPDATE message error / Invalid ORIGIN Attribute / 0xFF"
    );
}

#[test]
fn test_partially_printable_data_is_hex_dumped() {
    let good_wire = [0x02, 0x02, b'A', b'S', 0x00];
    let good = NotificationMessage::new(2, 2, "0x415300".to_string());

    test_parsed_completely(&good_wire[..], &good);
}

#[test]
fn test_parse_underflow() {
    let empty_wire: [u8; 0] = [];
    let empty_err = LocatedNotificationMessageParsingError::new(
        &empty_wire,
        NotificationMessageParsingError::NomError(ErrorKind::Eof),
    );
    test_parse_error::<NotificationMessage, LocatedNotificationMessageParsingError<'_>>(
        &empty_wire,
        &empty_err,
    );

    let code_only_wire = [0x06];
    let code_only_err = LocatedNotificationMessageParsingError::new(
        &code_only_wire[1..],
        NotificationMessageParsingError::NomError(ErrorKind::Eof),
    );
    test_parse_error::<NotificationMessage, LocatedNotificationMessageParsingError<'_>>(
        &code_only_wire,
        &code_only_err,
    );
}

#[test]
fn test_decode_underflow() {
    assert_eq!(
        decode(&[]),
        Err(WireFormatError::Underflow {
            expected: NOTIFICATION_MIN_LENGTH,
            available: 0,
        })
    );
    assert_eq!(
        decode(&[0x06]),
        Err(WireFormatError::Underflow {
            expected: NOTIFICATION_MIN_LENGTH,
            available: 1,
        })
    );
    assert_eq!(
        decode(&[0x06])
            .map_err(|err| err.to_string())
            .err(),
        Some("BGP notification needs at least 2 octets, got 1".to_string())
    );
}

#[test]
fn test_encode_outgoing_shutdown() -> Result<(), NotificationMessageWritingError> {
    let good = NotificationMessage::build(6, 2, None);
    let good_wire = combine(vec![&[0x06, 0x02], b"Administrative Shutdown"]);

    test_write(&good, &good_wire)?;
    assert_eq!(encode(&good)?, good_wire);
    Ok(())
}

#[test]
fn test_encode_explicit_data() -> Result<(), NotificationMessageWritingError> {
    let good = NotificationMessage::build(6, 4, Some("maintenance window"));
    let good_wire = combine(vec![&[0x06, 0x04], b"maintenance window"]);

    test_write(&good, &good_wire)?;
    assert_eq!(encode(&good)?, good_wire);
    Ok(())
}

#[test]
fn test_printable_data_round_trip() -> Result<(), NotificationMessageWritingError> {
    let wire = combine(vec![&[0x02, 0x02], b"peer AS 65001 expected"]);
    let decoded = decode(&wire);
    assert_eq!(decoded.as_ref().map(|x| x.data()), Ok("peer AS 65001 expected"));
    if let Ok(msg) = decoded {
        assert_eq!(encode(&msg)?, wire);
    }
    Ok(())
}

#[test]
fn test_parsing_error_serde() -> Result<(), serde_json::Error> {
    let error = NotificationMessageParsingError::NomError(ErrorKind::Eof);
    let json = serde_json::to_string(&error)?;
    assert_eq!(json, r#"{"NomError":"Eof"}"#);
    let parsed: NotificationMessageParsingError = serde_json::from_str(&json)?;
    assert_eq!(parsed, error);

    let code_only_wire = [0x06];
    let located = LocatedNotificationMessageParsingError::new(&code_only_wire[1..], error);
    assert_eq!(
        serde_json::to_string(&located)?,
        r#"{"span":[],"error":{"NomError":"Eof"}}"#
    );
    Ok(())
}
