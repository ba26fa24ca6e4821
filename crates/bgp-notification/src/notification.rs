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
    description::{
        code_description, subcode_description, UNKNOWN_ERROR, UNKNOWN_NOTIFICATION_TYPE,
        UNKNOWN_REASON,
    },
    iana::{BgpErrorNotificationCode, BgpMessageType, UndefinedBgpErrorNotificationCode},
};
use serde::{Deserialize, Serialize};
use std::fmt;

/// BGP Notification message
///
///```text
/// 0                   1                   2                   3
///  0 1 2 3 4 5 6 7 8 9 0 1 2 3 4 5 6 7 8 9 0 1 2 3 4 5 6 7 8 9 0 1
///  +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
///  | Error code    | Error subcode |   Data (variable)             |
///  +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
/// ```
///
/// The code and sub-code are kept as raw octets, so unregistered values are
/// carried as is. For received messages `data` is the rendered data field
/// (see [`crate::text::render_data`]), for outgoing messages it's the exact
/// text to put on the wire.
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "fuzz", derive(arbitrary::Arbitrary))]
pub struct NotificationMessage {
    code: u8,
    subcode: u8,
    data: String,
}

impl NotificationMessage {
    /// Type under which the NOTIFICATION message is dispatched
    pub const MESSAGE_TYPE: BgpMessageType = BgpMessageType::Notification;

    pub const fn new(code: u8, subcode: u8, data: String) -> Self {
        Self {
            code,
            subcode,
            data,
        }
    }

    /// Build a notification to be sent to a peer. When no `data` is given, the
    /// description of the (code, sub-code) pair is used, or
    /// [`UNKNOWN_NOTIFICATION_TYPE`] for unregistered pairs.
    pub fn build(code: u8, subcode: u8, data: Option<&str>) -> Self {
        let data = match data {
            Some(data) => data,
            None => subcode_description(code, subcode).unwrap_or(UNKNOWN_NOTIFICATION_TYPE),
        };
        Self::new(code, subcode, data.to_string())
    }

    pub const fn code(&self) -> u8 {
        self.code
    }

    pub const fn subcode(&self) -> u8 {
        self.subcode
    }

    pub fn data(&self) -> &str {
        &self.data
    }

    /// Registered error code, if any
    pub fn error_code(&self) -> Result<BgpErrorNotificationCode, UndefinedBgpErrorNotificationCode> {
        BgpErrorNotificationCode::try_from(self.code)
    }

    /// Human readable line: `<code> / <reason>[ / <data>]`
    pub fn description(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for NotificationMessage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} / {}",
            code_description(self.code).unwrap_or(UNKNOWN_ERROR),
            subcode_description(self.code, self.subcode).unwrap_or(UNKNOWN_REASON)
        )?;
        if !self.data.is_empty() {
            write!(f, " / {}", self.data)?;
        }
        Ok(())
    }
}
