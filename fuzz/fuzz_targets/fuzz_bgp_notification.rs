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

#![no_main]
extern crate libfuzzer_sys;
use libfuzzer_sys::fuzz_target;
use netgauze_bgp_notification::{decode, encode};

fuzz_target!(|buf: &[u8]| {
    if let Ok(msg) = decode(buf) {
        assert_eq!(msg.code(), buf[0]);
        assert_eq!(msg.subcode(), buf[1]);
        assert_eq!(encode(&msg).map(|wire| wire[..2] == buf[..2]), Ok(true));
    }
});
