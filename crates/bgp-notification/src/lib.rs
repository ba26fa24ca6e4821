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

//! BGP NOTIFICATION message codec.
//!
//! Decodes the body of a received NOTIFICATION (error code, sub-code and
//! data) into a [`NotificationMessage`] whose data is always rendered into a
//! loggable string, including the Administrative Shutdown Communication of
//! [RFC 8203](https://datatracker.ietf.org/doc/html/rfc8203). Outgoing
//! notifications are made with [`NotificationMessage::build`] and written
//! with [`encode`].
//!
//! ```
//! use netgauze_bgp_notification::{decode, encode, NotificationMessage};
//!
//! let msg = decode(&[6, 2, 3, b'b', b'y', b'e']).unwrap();
//! assert_eq!(msg.data(), "Shutdown Communication: \"bye\"");
//!
//! let outgoing = NotificationMessage::build(6, 2, None);
//! assert_eq!(&encode(&outgoing).unwrap()[2..], b"Administrative Shutdown");
//! ```

pub mod description;
pub mod iana;
pub mod notification;
pub mod shutdown;
pub mod text;
pub mod wire;

pub use crate::{
    notification::NotificationMessage,
    wire::{decode, encode, WireFormatError},
};
