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

//! Script push-data items and the decoding loop over a whole script.

use std::{borrow::Cow, fmt, iter::FusedIterator};

use logging::log;

use crate::{error::Result, opcodes::PushKind, reader::ScriptReader};

/// A single item of a script stream.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum PushItem<'a> {
    /// An opcode that carries no payload, emitted verbatim.
    Opcode(u8),
    /// Payload of a push opcode.
    Data(Cow<'a, [u8]>),
}

impl<'a> PushItem<'a> {
    pub fn opcode(&self) -> Option<u8> {
        match self {
            PushItem::Opcode(opcode) => Some(*opcode),
            PushItem::Data(_) => None,
        }
    }

    pub fn data(&self) -> Option<&[u8]> {
        match self {
            PushItem::Opcode(_) => None,
            PushItem::Data(data) => Some(data.as_ref()),
        }
    }

    pub fn is_data(&self) -> bool {
        matches!(self, PushItem::Data(_))
    }

    /// Detach the item from the buffer it was read from.
    pub fn into_owned(self) -> PushItem<'static> {
        match self {
            PushItem::Opcode(opcode) => PushItem::Opcode(opcode),
            PushItem::Data(data) => PushItem::Data(Cow::Owned(data.into_owned())),
        }
    }
}

impl fmt::Display for PushItem<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PushItem::Opcode(opcode) => write!(f, "opcode(0x{opcode:02x})"),
            PushItem::Data(data) => write!(f, "push(0x{})", hex::encode(data)),
        }
    }
}

/// Payload length from a little-endian length field. A length that doesn't fit `usize` can never
/// be satisfied by the buffer, so it saturates and the payload read underruns.
fn length_from_le(field: &[u8]) -> usize {
    let len = field.iter().rev().fold(0u64, |acc, byte| (acc << 8) | u64::from(*byte));
    usize::try_from(len).unwrap_or(usize::MAX)
}

impl<'a> ScriptReader<'a> {
    /// Decode one script item at the current position.
    pub fn read_push_data(&mut self) -> Result<PushItem<'a>> {
        let start = self.position();
        let item = self.atomically(|r| {
            let opcode = r.read_u8()?;
            let kind = PushKind::classify(opcode);
            if !kind.is_push() {
                return Ok(PushItem::Opcode(opcode));
            }
            let len = match kind.length_field_width() {
                Some(width) => length_from_le(&r.read(width)?),
                // Direct push, the opcode is the length.
                None => usize::from(opcode),
            };
            r.read(len).map(PushItem::Data)
        })?;
        log::trace!("Script item at position {start}: {item}");
        Ok(item)
    }

    /// Iterate over the items of the script, starting at the current position.
    ///
    /// The iterator stops at the end of the buffer. If an item cannot be decoded, the error is
    /// yielded once and the iteration ends.
    pub fn decode_parts(&mut self) -> DecodeParts<'_, 'a> {
        DecodeParts {
            reader: self,
            failed: false,
        }
    }
}

/// Iterator over script items, see [ScriptReader::decode_parts].
pub struct DecodeParts<'r, 'a> {
    reader: &'r mut ScriptReader<'a>,
    failed: bool,
}

impl<'a> Iterator for DecodeParts<'_, 'a> {
    type Item = Result<PushItem<'a>>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.failed || self.reader.at_end() {
            return None;
        }
        let item = self.reader.read_push_data();
        self.failed = item.is_err();
        Some(item)
    }
}

impl FusedIterator for DecodeParts<'_, '_> {}
