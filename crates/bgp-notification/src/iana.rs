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

//! Contains the BGP NOTIFICATION codes that are registered at IANA [BGP Parameters](https://www.iana.org/assignments/bgp-parameters/bgp-parameters.xhtml)
//!
//! The string representation of every sub-code is the human readable reason
//! used when describing a notification (see [`crate::description`]).

use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumIter, FromRepr, IntoStaticStr};

/// BGP Message types as registered in IANA [BGP Message Types](https://www.iana.org/assignments/bgp-parameters/bgp-parameters.xhtml#bgp-parameters-1)
#[repr(u8)]
#[derive(Display, FromRepr, Copy, Clone, PartialEq, Eq, Debug, Serialize, Deserialize)]
#[cfg_attr(feature = "fuzz", derive(arbitrary::Arbitrary))]
pub enum BgpMessageType {
    Open = 1,
    Update = 2,
    Notification = 3,
    KeepAlive = 4,
    /// Route Refresh message is registered in [RFC2918](https://datatracker.ietf.org/doc/html/rfc2918)
    RouteRefresh = 5,
}

/// BGP Message type is not one of [`BgpMessageType`], the carried value is the
/// undefined code.
#[derive(Copy, Clone, PartialEq, Eq, Debug, Serialize, Deserialize)]
#[cfg_attr(feature = "fuzz", derive(arbitrary::Arbitrary))]
pub struct UndefinedBgpMessageType(pub u8);

impl From<BgpMessageType> for u8 {
    fn from(value: BgpMessageType) -> Self {
        value as u8
    }
}

impl TryFrom<u8> for BgpMessageType {
    type Error = UndefinedBgpMessageType;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match Self::from_repr(value) {
            Some(val) => Ok(val),
            None => Err(UndefinedBgpMessageType(value)),
        }
    }
}

/// BGP Error (Notification) Codes as defined by IANA [BGP Error (Notification) Codes](https://www.iana.org/assignments/bgp-parameters/bgp-parameters.xhtml#bgp-parameters-3)
#[repr(u8)]
#[derive(
    Display, FromRepr, EnumIter, Copy, Clone, PartialEq, Eq, Debug, Serialize, Deserialize,
)]
#[cfg_attr(feature = "fuzz", derive(arbitrary::Arbitrary))]
pub enum BgpErrorNotificationCode {
    /// [RFC4271](https://datatracker.ietf.org/doc/html/rfc4271)
    MessageHeaderError = 1,

    /// [RFC4271](https://datatracker.ietf.org/doc/html/rfc4271)
    OpenMessageError = 2,

    /// [RFC4271](https://datatracker.ietf.org/doc/html/rfc4271)
    UpdateMessageError = 3,

    /// [RFC4271](https://datatracker.ietf.org/doc/html/rfc4271)
    HoldTimerExpired = 4,

    /// [RFC4271](https://datatracker.ietf.org/doc/html/rfc4271)
    FiniteStateMachineError = 5,

    /// [RFC4271](https://datatracker.ietf.org/doc/html/rfc4271)
    Cease = 6,

    /// [draft-keyur-bgp-enhanced-route-refresh](https://datatracker.ietf.org/doc/html/draft-keyur-bgp-enhanced-route-refresh-00)
    RouteRefreshMessageError = 7,
}

impl From<BgpErrorNotificationCode> for u8 {
    fn from(value: BgpErrorNotificationCode) -> Self {
        value as u8
    }
}

#[derive(Copy, Clone, PartialEq, Eq, Debug, Serialize, Deserialize)]
#[cfg_attr(feature = "fuzz", derive(arbitrary::Arbitrary))]
pub struct UndefinedBgpErrorNotificationCode(pub u8);

impl TryFrom<u8> for BgpErrorNotificationCode {
    type Error = UndefinedBgpErrorNotificationCode;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match Self::from_repr(value) {
            Some(val) => Ok(val),
            None => Err(UndefinedBgpErrorNotificationCode(value)),
        }
    }
}

/// Message Header Error sub-codes for [`BgpErrorNotificationCode::MessageHeaderError`] as defined by IANA [Message Header Error subcodes](https://www.iana.org/assignments/bgp-parameters/bgp-parameters.xhtml#bgp-parameters-5)
#[repr(u8)]
#[derive(
    Display,
    FromRepr,
    IntoStaticStr,
    EnumIter,
    Copy,
    Clone,
    PartialEq,
    Eq,
    Debug,
    Serialize,
    Deserialize,
)]
#[cfg_attr(feature = "fuzz", derive(arbitrary::Arbitrary))]
pub enum MessageHeaderErrorSubCode {
    #[strum(serialize = "Unspecific")]
    Unspecific = 0,

    #[strum(serialize = "Connection Not Synchronized")]
    ConnectionNotSynchronized = 1,

    #[strum(serialize = "Bad Message Length")]
    BadMessageLength = 2,

    #[strum(serialize = "Bad Message Type")]
    BadMessageType = 3,
}

impl From<MessageHeaderErrorSubCode> for u8 {
    fn from(value: MessageHeaderErrorSubCode) -> Self {
        value as u8
    }
}

#[derive(Copy, Clone, PartialEq, Eq, Debug, Serialize, Deserialize)]
#[cfg_attr(feature = "fuzz", derive(arbitrary::Arbitrary))]
pub struct UndefinedMessageHeaderErrorSubCode(pub u8);

impl TryFrom<u8> for MessageHeaderErrorSubCode {
    type Error = UndefinedMessageHeaderErrorSubCode;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match Self::from_repr(value) {
            Some(val) => Ok(val),
            None => Err(UndefinedMessageHeaderErrorSubCode(value)),
        }
    }
}

/// OPEN Message Error sub-codes for [`BgpErrorNotificationCode::OpenMessageError`] as defined by IANA [OPEN Message Error subcodes](https://www.iana.org/assignments/bgp-parameters/bgp-parameters.xhtml#bgp-parameters-6)
#[repr(u8)]
#[derive(
    Display,
    FromRepr,
    IntoStaticStr,
    EnumIter,
    Copy,
    Clone,
    PartialEq,
    Eq,
    Debug,
    Serialize,
    Deserialize,
)]
#[cfg_attr(feature = "fuzz", derive(arbitrary::Arbitrary))]
pub enum OpenMessageErrorSubCode {
    #[strum(serialize = "Unspecific")]
    Unspecific = 0,

    /// [RFC4271](https://datatracker.ietf.org/doc/html/rfc4271)
    #[strum(serialize = "Unsupported Version Number")]
    UnsupportedVersionNumber = 1,

    /// [RFC4271](https://datatracker.ietf.org/doc/html/rfc4271)
    #[strum(serialize = "Bad Peer AS")]
    BadPeerAs = 2,

    /// [RFC4271](https://datatracker.ietf.org/doc/html/rfc4271)
    #[strum(serialize = "Bad BGP Identifier")]
    BadBgpIdentifier = 3,

    /// [RFC4271](https://datatracker.ietf.org/doc/html/rfc4271)
    #[strum(serialize = "Unsupported Optional Parameter")]
    UnsupportedOptionalParameter = 4,

    /// Deprecated by [RFC4271](https://datatracker.ietf.org/doc/html/rfc4271)
    #[strum(serialize = "Authentication Notification (Deprecated)")]
    AuthenticationNotification = 5,

    /// [RFC4271](https://datatracker.ietf.org/doc/html/rfc4271)
    #[strum(serialize = "Unacceptable Hold Time")]
    UnacceptableHoldTime = 6,

    /// [RFC5492](https://datatracker.ietf.org/doc/html/rfc5492)
    #[strum(serialize = "Unsupported Capability")]
    UnsupportedCapability = 7,

    /// [draft-ietf-idr-bgp-multisession-06](https://datatracker.ietf.org/doc/html/draft-ietf-idr-bgp-multisession-06)
    #[strum(serialize = "Grouping Conflict")]
    GroupingConflict = 8,

    /// [draft-ietf-idr-bgp-multisession-06](https://datatracker.ietf.org/doc/html/draft-ietf-idr-bgp-multisession-06)
    #[strum(serialize = "Grouping Required")]
    GroupingRequired = 9,

    /// [draft-ietf-idr-bgp-multisession-06](https://datatracker.ietf.org/doc/html/draft-ietf-idr-bgp-multisession-06)
    #[strum(serialize = "Capability Value Mismatch")]
    CapabilityValueMismatch = 10,
}

impl From<OpenMessageErrorSubCode> for u8 {
    fn from(value: OpenMessageErrorSubCode) -> Self {
        value as u8
    }
}

#[derive(Copy, Clone, PartialEq, Eq, Debug, Serialize, Deserialize)]
#[cfg_attr(feature = "fuzz", derive(arbitrary::Arbitrary))]
pub struct UndefinedOpenMessageErrorSubCode(pub u8);

impl TryFrom<u8> for OpenMessageErrorSubCode {
    type Error = UndefinedOpenMessageErrorSubCode;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match Self::from_repr(value) {
            Some(val) => Ok(val),
            None => Err(UndefinedOpenMessageErrorSubCode(value)),
        }
    }
}

/// UPDATE Message Error sub-codes for [`BgpErrorNotificationCode::UpdateMessageError`] as defined by IANA [UPDATE Message Error subcodes](https://www.iana.org/assignments/bgp-parameters/bgp-parameters.xhtml#bgp-parameters-7)
#[repr(u8)]
#[derive(
    Display,
    FromRepr,
    IntoStaticStr,
    EnumIter,
    Copy,
    Clone,
    PartialEq,
    Eq,
    Debug,
    Serialize,
    Deserialize,
)]
#[cfg_attr(feature = "fuzz", derive(arbitrary::Arbitrary))]
pub enum UpdateMessageErrorSubCode {
    #[strum(serialize = "Unspecific")]
    Unspecific = 0,

    #[strum(serialize = "Malformed Attribute List")]
    MalformedAttributeList = 1,

    #[strum(serialize = "Unrecognized Well-known Attribute")]
    UnrecognizedWellKnownAttribute = 2,

    #[strum(serialize = "Missing Well-known Attribute")]
    MissingWellKnownAttribute = 3,

    #[strum(serialize = "Attribute Flags Error")]
    AttributeFlagsError = 4,

    #[strum(serialize = "Attribute Length Error")]
    AttributeLengthError = 5,

    #[strum(serialize = "Invalid ORIGIN Attribute")]
    InvalidOriginAttribute = 6,

    /// Deprecated by [RFC4271](https://datatracker.ietf.org/doc/html/rfc4271)
    #[strum(serialize = "AS Routing Loop")]
    AsRoutingLoop = 7,

    #[strum(serialize = "Invalid NEXT_HOP Attribute")]
    InvalidNextHopAttribute = 8,

    #[strum(serialize = "Optional Attribute Error")]
    OptionalAttributeError = 9,

    #[strum(serialize = "Invalid Network Field")]
    InvalidNetworkField = 10,

    #[strum(serialize = "Malformed AS_PATH")]
    MalformedAsPath = 11,
}

impl From<UpdateMessageErrorSubCode> for u8 {
    fn from(value: UpdateMessageErrorSubCode) -> Self {
        value as u8
    }
}

#[derive(Copy, Clone, PartialEq, Eq, Debug, Serialize, Deserialize)]
#[cfg_attr(feature = "fuzz", derive(arbitrary::Arbitrary))]
pub struct UndefinedUpdateMessageErrorSubCode(pub u8);

impl TryFrom<u8> for UpdateMessageErrorSubCode {
    type Error = UndefinedUpdateMessageErrorSubCode;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match Self::from_repr(value) {
            Some(val) => Ok(val),
            None => Err(UndefinedUpdateMessageErrorSubCode(value)),
        }
    }
}

/// Sub-codes for [`BgpErrorNotificationCode::HoldTimerExpired`], only the
/// unspecific value is assigned.
#[repr(u8)]
#[derive(
    Display,
    FromRepr,
    IntoStaticStr,
    EnumIter,
    Copy,
    Clone,
    PartialEq,
    Eq,
    Debug,
    Serialize,
    Deserialize,
)]
#[cfg_attr(feature = "fuzz", derive(arbitrary::Arbitrary))]
pub enum HoldTimerExpiredErrorSubCode {
    #[strum(serialize = "Unspecific")]
    Unspecific = 0,
}

impl From<HoldTimerExpiredErrorSubCode> for u8 {
    fn from(value: HoldTimerExpiredErrorSubCode) -> Self {
        value as u8
    }
}

#[derive(Copy, Clone, PartialEq, Eq, Debug, Serialize, Deserialize)]
#[cfg_attr(feature = "fuzz", derive(arbitrary::Arbitrary))]
pub struct UndefinedHoldTimerExpiredErrorSubCode(pub u8);

impl TryFrom<u8> for HoldTimerExpiredErrorSubCode {
    type Error = UndefinedHoldTimerExpiredErrorSubCode;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match Self::from_repr(value) {
            Some(val) => Ok(val),
            None => Err(UndefinedHoldTimerExpiredErrorSubCode(value)),
        }
    }
}

/// BGP Finite State Machine Error sub-codes for [`BgpErrorNotificationCode::FiniteStateMachineError`] as defined by IANA [BGP Finite State Machine Error Subcodes](https://www.iana.org/assignments/bgp-parameters/bgp-parameters.xhtml#bgp-finite-state-machine-error-subcodes)
#[repr(u8)]
#[derive(
    Display,
    FromRepr,
    IntoStaticStr,
    EnumIter,
    Copy,
    Clone,
    PartialEq,
    Eq,
    Debug,
    Serialize,
    Deserialize,
)]
#[cfg_attr(feature = "fuzz", derive(arbitrary::Arbitrary))]
pub enum FiniteStateMachineErrorSubCode {
    /// [RFC6608](https://datatracker.ietf.org/doc/html/rfc6608)
    #[strum(serialize = "Unspecific")]
    UnspecifiedError = 0,

    /// [RFC6608](https://datatracker.ietf.org/doc/html/rfc6608)
    #[strum(serialize = "Receive Unexpected Message in OpenSent State")]
    ReceiveUnexpectedMessageInOpenSentState = 1,

    /// [RFC6608](https://datatracker.ietf.org/doc/html/rfc6608)
    #[strum(serialize = "Receive Unexpected Message in OpenConfirm State")]
    ReceiveUnexpectedMessageInOpenConfirmState = 2,

    /// [RFC6608](https://datatracker.ietf.org/doc/html/rfc6608)
    #[strum(serialize = "Receive Unexpected Message in Established State")]
    ReceiveUnexpectedMessageInEstablishedState = 3,
}

impl From<FiniteStateMachineErrorSubCode> for u8 {
    fn from(value: FiniteStateMachineErrorSubCode) -> Self {
        value as u8
    }
}

#[derive(Copy, Clone, PartialEq, Eq, Debug, Serialize, Deserialize)]
#[cfg_attr(feature = "fuzz", derive(arbitrary::Arbitrary))]
pub struct UndefinedFiniteStateMachineErrorSubCode(pub u8);

impl TryFrom<u8> for FiniteStateMachineErrorSubCode {
    type Error = UndefinedFiniteStateMachineErrorSubCode;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match Self::from_repr(value) {
            Some(val) => Ok(val),
            None => Err(UndefinedFiniteStateMachineErrorSubCode(value)),
        }
    }
}

/// BGP Cease NOTIFICATION message Error sub-codes for [`BgpErrorNotificationCode::Cease`] as defined by IANA [BGP Cease NOTIFICATION message subcodes](https://www.iana.org/assignments/bgp-parameters/bgp-parameters.xhtml#bgp-parameters-8)
#[repr(u8)]
#[derive(
    Display,
    FromRepr,
    IntoStaticStr,
    EnumIter,
    Copy,
    Clone,
    PartialEq,
    Eq,
    Debug,
    Serialize,
    Deserialize,
)]
#[cfg_attr(feature = "fuzz", derive(arbitrary::Arbitrary))]
pub enum CeaseErrorSubCode {
    #[strum(serialize = "Unspecific")]
    Unspecific = 0,

    /// [RFC4486](https://datatracker.ietf.org/doc/html/rfc4486)
    #[strum(serialize = "Maximum Number of Prefixes Reached")]
    MaximumNumberOfPrefixesReached = 1,

    /// [RFC4486](https://datatracker.ietf.org/doc/html/rfc4486), the data
    /// field may carry a Shutdown Communication as defined by
    /// [draft-ietf-idr-shutdown](https://datatracker.ietf.org/doc/html/draft-ietf-idr-shutdown)
    #[strum(serialize = "Administrative Shutdown")]
    AdministrativeShutdown = 2,

    /// [RFC4486](https://datatracker.ietf.org/doc/html/rfc4486)
    #[strum(serialize = "Peer De-configured")]
    PeerDeConfigured = 3,

    /// [RFC4486](https://datatracker.ietf.org/doc/html/rfc4486)
    #[strum(serialize = "Administrative Reset")]
    AdministrativeReset = 4,

    /// [RFC4486](https://datatracker.ietf.org/doc/html/rfc4486)
    #[strum(serialize = "Connection Rejected")]
    ConnectionRejected = 5,

    /// [RFC4486](https://datatracker.ietf.org/doc/html/rfc4486)
    #[strum(serialize = "Other Configuration Change")]
    OtherConfigurationChange = 6,

    /// [RFC4486](https://datatracker.ietf.org/doc/html/rfc4486)
    #[strum(serialize = "Connection Collision Resolution")]
    ConnectionCollisionResolution = 7,

    /// [RFC4486](https://datatracker.ietf.org/doc/html/rfc4486)
    #[strum(serialize = "Out of Resources")]
    OutOfResources = 8,
}

impl From<CeaseErrorSubCode> for u8 {
    fn from(value: CeaseErrorSubCode) -> Self {
        value as u8
    }
}

#[derive(Copy, Clone, PartialEq, Eq, Debug, Serialize, Deserialize)]
#[cfg_attr(feature = "fuzz", derive(arbitrary::Arbitrary))]
pub struct UndefinedCeaseErrorSubCode(pub u8);

impl TryFrom<u8> for CeaseErrorSubCode {
    type Error = UndefinedCeaseErrorSubCode;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match Self::from_repr(value) {
            Some(val) => Ok(val),
            None => Err(UndefinedCeaseErrorSubCode(value)),
        }
    }
}

/// BGP ROUTE-REFRESH Message Error subcodes for [`BgpErrorNotificationCode::RouteRefreshMessageError`] as defined by [draft-keyur-bgp-enhanced-route-refresh-00](https://datatracker.ietf.org/doc/html/draft-keyur-bgp-enhanced-route-refresh-00)
#[repr(u8)]
#[derive(
    Display,
    FromRepr,
    IntoStaticStr,
    EnumIter,
    Copy,
    Clone,
    PartialEq,
    Eq,
    Debug,
    Serialize,
    Deserialize,
)]
#[cfg_attr(feature = "fuzz", derive(arbitrary::Arbitrary))]
pub enum RouteRefreshMessageErrorSubCode {
    #[strum(serialize = "Invalid Message Length")]
    InvalidMessageLength = 1,

    #[strum(serialize = "Malformed Message Subtype")]
    MalformedMessageSubtype = 2,
}

impl From<RouteRefreshMessageErrorSubCode> for u8 {
    fn from(value: RouteRefreshMessageErrorSubCode) -> Self {
        value as u8
    }
}

#[derive(Copy, Clone, PartialEq, Eq, Debug, Serialize, Deserialize)]
#[cfg_attr(feature = "fuzz", derive(arbitrary::Arbitrary))]
pub struct UndefinedRouteRefreshMessageErrorSubCode(pub u8);

impl TryFrom<u8> for RouteRefreshMessageErrorSubCode {
    type Error = UndefinedRouteRefreshMessageErrorSubCode;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match Self::from_repr(value) {
            Some(val) => Ok(val),
            None => Err(UndefinedRouteRefreshMessageErrorSubCode(value)),
        }
    }
}
