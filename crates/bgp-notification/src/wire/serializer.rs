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

use crate::{notification::NotificationMessage, wire::WritablePdu};
use byteorder::WriteBytesExt;

#[derive(thiserror::Error, Eq, PartialEq, Clone, Debug)]
pub enum NotificationMessageWritingError {
    #[error("failed writing notification message: {0}")]
    StdIOError(String),
}

impl From<std::io::Error> for NotificationMessageWritingError {
    fn from(err: std::io::Error) -> Self {
        NotificationMessageWritingError::StdIOError(err.to_string())
    }
}

impl WritablePdu<NotificationMessageWritingError> for NotificationMessage {
    // One octet code and one octet sub-code
    const BASE_LENGTH: usize = 2;

    fn len(&self) -> usize {
        Self::BASE_LENGTH + self.data().len()
    }

    fn write<T: std::io::Write>(
        &self,
        writer: &mut T,
    ) -> Result<(), NotificationMessageWritingError> {
        writer.write_u8(self.code())?;
        writer.write_u8(self.subcode())?;
        writer.write_all(self.data().as_bytes())?;
        Ok(())
    }
}
