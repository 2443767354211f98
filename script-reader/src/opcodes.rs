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

//! Opcodes relevant to recognizing push-data items.
//!
//! Only the push/non-push distinction matters to the reader. Every other opcode is passed
//! through to the caller as a raw byte.

/// Push an empty array. Not a data push as far as the reader is concerned.
pub const OP_0: u8 = 0x00;
/// Smallest direct push, the opcode itself is the payload length.
pub const OP_PUSHBYTES_1: u8 = 0x01;
/// Largest direct push.
pub const OP_PUSHBYTES_75: u8 = 0x4b;
/// Payload length follows in 1 byte.
pub const OP_PUSHDATA1: u8 = 0x4c;
/// Payload length follows in 2 bytes, little-endian.
pub const OP_PUSHDATA2: u8 = 0x4d;
/// Payload length follows in 4 bytes, little-endian.
pub const OP_PUSHDATA4: u8 = 0x4e;

/// Classification of an opcode byte by how it encodes its payload.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PushKind {
    /// The opcode is the payload length (1 to 75 bytes).
    Direct(u8),
    PushData1,
    PushData2,
    PushData4,
    /// Any opcode that carries no payload, including [OP_0].
    NonPush,
}

impl PushKind {
    pub fn classify(opcode: u8) -> Self {
        match opcode {
            OP_PUSHBYTES_1..=OP_PUSHBYTES_75 => PushKind::Direct(opcode),
            OP_PUSHDATA1 => PushKind::PushData1,
            OP_PUSHDATA2 => PushKind::PushData2,
            OP_PUSHDATA4 => PushKind::PushData4,
            _ => PushKind::NonPush,
        }
    }

    /// Width of the explicit length field following the opcode, if there is one.
    pub fn length_field_width(&self) -> Option<usize> {
        match self {
            PushKind::PushData1 => Some(1),
            PushKind::PushData2 => Some(2),
            PushKind::PushData4 => Some(4),
            PushKind::Direct(_) | PushKind::NonPush => None,
        }
    }

    pub fn is_push(&self) -> bool {
        *self != PushKind::NonPush
    }
}
