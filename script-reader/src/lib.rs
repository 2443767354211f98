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

//! Sequential reader for serialized Bitcoin-style scripts.
//!
//! The [ScriptReader] walks over an immutable byte buffer and decodes fixed-width integers,
//! CompactSize integers, length-prefixed blobs and script push-data items, advancing its
//! position by exactly the number of bytes consumed. It does not execute or validate scripts,
//! it only splits them into [PushItem]s.
//!
//! ## Example
//!
//! ```
//! use script_reader::{PushItem, ScriptReader};
//!
//! // OP_PUSHDATA2 with a 5 byte payload, followed by OP_CHECKSIG.
//! let mut reader = ScriptReader::from_hex("4d050048656c6c6fac").unwrap();
//!
//! let items = reader.decode_parts().collect::<script_reader::Result<Vec<_>>>().unwrap();
//! assert_eq!(items.len(), 2);
//! assert_eq!(items[0].data(), Some(&b"Hello"[..]));
//! assert_eq!(items[1], PushItem::Opcode(0xac));
//! assert!(reader.at_end());
//! ```

mod error;
pub mod opcodes;
mod pushdata;
mod reader;
pub mod varint;
#[cfg(test)]
mod tests;

pub use error::{Error, Result};
pub use pushdata::{DecodeParts, PushItem};
pub use reader::{ReaderInput, ReaderState, ScriptReader};
