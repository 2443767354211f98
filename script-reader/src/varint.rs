// Copyright (c) 2021-2025 RBB S.r.l
// opensource@mintlayer.org
// SPDX-License-Identifier: MIT
// Licensed under the MIT License;
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
// https://github.com/mintlayer/mintlayer-core/blob/master/LICENSE
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! CompactSize variable-length integers and blobs prefixed with them.

use std::borrow::Cow;

use crate::{error::Result, reader::ScriptReader};

/// Prefix of a CompactSize integer followed by 2 bytes.
pub const VARINT_PREFIX_U16: u8 = 0xfd;
/// Prefix of a CompactSize integer followed by 4 bytes.
pub const VARINT_PREFIX_U32: u8 = 0xfe;
/// Prefix of a CompactSize integer followed by 8 bytes.
pub const VARINT_PREFIX_U64: u8 = 0xff;

/// Number of bytes following given CompactSize prefix byte.
pub fn varint_extension_len(prefix: u8) -> usize {
    match prefix {
        VARINT_PREFIX_U16 => 2,
        VARINT_PREFIX_U32 => 4,
        VARINT_PREFIX_U64 => 8,
        _ => 0,
    }
}

impl<'a> ScriptReader<'a> {
    /// Read a CompactSize integer.
    pub fn read_varint_num(&mut self) -> Result<u64> {
        self.atomically(|r| match r.read_u8()? {
            VARINT_PREFIX_U16 => r.read_u16_le().map(u64::from),
            VARINT_PREFIX_U32 => r.read_u32_le().map(u64::from),
            VARINT_PREFIX_U64 => r.read_u64_le(),
            first => Ok(u64::from(first)),
        })
    }

    /// Read the raw bytes of a CompactSize integer, prefix included, without interpreting them.
    pub fn read_varint_buf(&mut self) -> Result<Cow<'a, [u8]>> {
        let prefix = self.peek_u8()?;
        self.read(1 + varint_extension_len(prefix))
    }

    /// Read a blob prefixed with its CompactSize encoded length.
    pub fn read_var_length_buffer(&mut self) -> Result<Cow<'a, [u8]>> {
        self.atomically(|r| {
            let len = r.read_varint_num()?;
            // A length not fitting into usize can never be satisfied by the buffer either.
            r.read(usize::try_from(len).unwrap_or(usize::MAX))
        })
    }
}
