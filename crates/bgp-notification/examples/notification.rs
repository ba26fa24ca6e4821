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

//! Decode a few NOTIFICATION messages received from a peer and build one to
//! send back. Run with `RUST_LOG=debug` to see the codec logs as well.

use netgauze_bgp_notification::{decode, encode, NotificationMessage};

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let received: [&[u8]; 5] = [
        &[4, 0],
        &[6, 2, 5, b'B', b'y', b'e', b'!', b'!'],
        &[6, 2, 200, 0x41, 0x42],
        &[3, 6, 0xff],
        &[9, 9, b'A', b'B'],
    ];
    for buf in received {
        match decode(buf) {
            Ok(msg) => log::info!("Received notification: {msg}"),
            Err(err) => log::error!("Malformed notification: {err}"),
        }
    }
    if let Err(err) = decode(&[6]) {
        log::error!("Malformed notification: {err}");
    }

    let outgoing = NotificationMessage::build(6, 2, None);
    let buf = encode(&outgoing).unwrap();
    log::info!("Sending notification: {outgoing}, wire: {buf:?}");
    let echoed = decode(&buf).unwrap();
    assert_eq!(echoed.code(), outgoing.code());
    assert_eq!(echoed.subcode(), outgoing.subcode());
}
