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

//! Test helpers: seeded randomness and encoders producing the byte streams the reader consumes.

pub mod random;

use hex::ToHex;
use rand::Rng;

/// How a push is encoded in a script.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PushForm {
    /// The opcode is the length, 1 to 75 bytes only.
    Direct,
    PushData1,
    PushData2,
    PushData4,
}

impl PushForm {
    pub const ALL: [PushForm; 4] = [
        PushForm::Direct,
        PushForm::PushData1,
        PushForm::PushData2,
        PushForm::PushData4,
    ];

    /// Largest payload the form can carry.
    pub fn max_len(&self) -> usize {
        match self {
            PushForm::Direct => 0x4b,
            PushForm::PushData1 => u8::MAX as usize,
            PushForm::PushData2 => u16::MAX as usize,
            PushForm::PushData4 => u32::MAX as usize,
        }
    }

    /// Bytes occupied by the opcode and the length field.
    pub fn header_len(&self) -> usize {
        match self {
            PushForm::Direct => 1,
            PushForm::PushData1 => 2,
            PushForm::PushData2 => 3,
            PushForm::PushData4 => 5,
        }
    }
}

/// Encode an integer as CompactSize, using the shortest form.
pub fn encode_compact_size(value: u64) -> Vec<u8> {
    if value < 0xfd {
        vec![value as u8]
    } else if value <= u16::MAX as u64 {
        [&[0xfd][..], &(value as u16).to_le_bytes()].concat()
    } else if value <= u32::MAX as u64 {
        [&[0xfe][..], &(value as u32).to_le_bytes()].concat()
    } else {
        [&[0xff][..], &value.to_le_bytes()].concat()
    }
}

/// Encode a push of the payload in given form. Panics if the payload does not fit the form, or
/// if it is empty and the form is [PushForm::Direct].
pub fn encode_push_as(form: PushForm, payload: &[u8]) -> Vec<u8> {
    assert!(payload.len() <= form.max_len(), "Payload too long for {form:?}");
    let len = payload.len();
    let mut encoded = match form {
        PushForm::Direct => {
            assert!(len > 0, "Direct push of an empty payload is OP_0");
            vec![len as u8]
        }
        PushForm::PushData1 => vec![0x4c, len as u8],
        PushForm::PushData2 => [&[0x4d][..], &(len as u16).to_le_bytes()].concat(),
        PushForm::PushData4 => [&[0x4e][..], &(len as u32).to_le_bytes()].concat(),
    };
    encoded.extend_from_slice(payload);
    encoded
}

/// Encode a push of the payload in the shortest applicable form.
pub fn encode_push(payload: &[u8]) -> Vec<u8> {
    let form = PushForm::ALL
        .into_iter()
        .find(|form| !payload.is_empty() && payload.len() <= form.max_len())
        .unwrap_or(PushForm::PushData1);
    encode_push_as(form, payload)
}

pub fn random_bytes(rng: &mut impl Rng, len: usize) -> Vec<u8> {
    (0..len).map(|_| rng.gen::<u8>()).collect()
}

/// Encodes bytes to a hex string
pub fn encode_to_hex(bytes: &[u8]) -> String {
    bytes.encode_hex::<String>()
}
