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

//! Human readable text for BGP NOTIFICATION error codes and sub-codes.
//!
//! The texts are looked up through the [`crate::iana`] registries and are
//! reproduced verbatim, since peers and operators match on them in logs.

use crate::iana::{
    BgpErrorNotificationCode, CeaseErrorSubCode, FiniteStateMachineErrorSubCode,
    HoldTimerExpiredErrorSubCode, MessageHeaderErrorSubCode, OpenMessageErrorSubCode,
    RouteRefreshMessageErrorSubCode, UpdateMessageErrorSubCode,
};

/// Text used when the error code has no description
pub const UNKNOWN_ERROR: &str = "unknown error";

/// Text used when the (code, sub-code) pair has no description
pub const UNKNOWN_REASON: &str = "unknown reason";

/// Default data of an outgoing notification with an unregistered
/// (code, sub-code) pair
pub const UNKNOWN_NOTIFICATION_TYPE: &str = "unknown notification type";

/// Description of a BGP error code, `None` when the code has no text.
///
/// [`BgpErrorNotificationCode::RouteRefreshMessageError`] is registered but
/// has no code text, so it yields `None` like any unregistered code.
pub fn code_description(code: u8) -> Option<&'static str> {
    let code = BgpErrorNotificationCode::try_from(code).ok()?;
    match code {
        BgpErrorNotificationCode::MessageHeaderError => Some("Message header error"),
        BgpErrorNotificationCode::OpenMessageError => Some("OPEN message error"),
        BgpErrorNotificationCode::UpdateMessageError => Some("UPDATE message error"),
        BgpErrorNotificationCode::HoldTimerExpired => Some("Hold timer expired"),
        BgpErrorNotificationCode::FiniteStateMachineError => Some("State machine error"),
        BgpErrorNotificationCode::Cease => Some("Cease"),
        BgpErrorNotificationCode::RouteRefreshMessageError => None,
    }
}

/// Description of a (code, sub-code) pair, `None` when the pair has no text.
pub fn subcode_description(code: u8, subcode: u8) -> Option<&'static str> {
    let code = BgpErrorNotificationCode::try_from(code).ok()?;
    let text: &'static str = match code {
        BgpErrorNotificationCode::MessageHeaderError => {
            MessageHeaderErrorSubCode::try_from(subcode).ok()?.into()
        }
        BgpErrorNotificationCode::OpenMessageError => {
            OpenMessageErrorSubCode::try_from(subcode).ok()?.into()
        }
        BgpErrorNotificationCode::UpdateMessageError => {
            UpdateMessageErrorSubCode::try_from(subcode).ok()?.into()
        }
        BgpErrorNotificationCode::HoldTimerExpired => {
            HoldTimerExpiredErrorSubCode::try_from(subcode).ok()?.into()
        }
        BgpErrorNotificationCode::FiniteStateMachineError => {
            FiniteStateMachineErrorSubCode::try_from(subcode).ok()?.into()
        }
        BgpErrorNotificationCode::Cease => CeaseErrorSubCode::try_from(subcode).ok()?.into(),
        BgpErrorNotificationCode::RouteRefreshMessageError => {
            RouteRefreshMessageErrorSubCode::try_from(subcode).ok()?.into()
        }
    };
    Some(text)
}
