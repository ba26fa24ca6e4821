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

//! Rendering of the NOTIFICATION data field into a loggable string

use crate::{
    iana::{BgpErrorNotificationCode, CeaseErrorSubCode},
    shutdown::ShutdownCommunication,
};

/// Check that every byte is printable ASCII: letters, digits, punctuation,
/// space and the whitespace controls `\t`, `\n`, `\x0b`, `\x0c`, `\r`.
pub fn is_printable(buf: &[u8]) -> bool {
    buf.iter()
        .all(|&b| b.is_ascii_graphic() || matches!(b, b' ' | b'\t'..=b'\r'))
}

/// Render bytes as `0x` followed by two upper case hex digits per byte
pub fn hex_string(buf: &[u8]) -> String {
    format!("0x{}", hex::encode_upper(buf))
}

/// Render the data field of a notification.
///
/// Administrative Shutdown (6, 2) carries a Shutdown Communication and is
/// rendered by [`ShutdownCommunication`]. Any other payload is returned as
/// text when it is entirely printable, otherwise the whole payload is hex
/// dumped.
pub fn render_data(code: u8, subcode: u8, data: &[u8]) -> String {
    if code == u8::from(BgpErrorNotificationCode::Cease)
        && subcode == u8::from(CeaseErrorSubCode::AdministrativeShutdown)
    {
        return match ShutdownCommunication::from_payload(data) {
            Some(communication) => communication.to_string(),
            None => String::new(),
        };
    }
    if is_printable(data) {
        // printable bytes are a subset of ASCII, hence always valid UTF-8
        data.iter().map(|b| char::from(*b)).collect()
    } else {
        hex_string(data)
    }
}
