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

//! Cursor over a script byte buffer: construction, position tracking and fixed-width reads.

use std::{borrow::Cow, ops::Range};

use logging::log;

use crate::error::{Error, Result};

/// Bytes backing a reader.
///
/// The [Cow] type is used so that readers constructed over a borrowed slice hand out slices of it
/// without copying. Readers constructed from hex own their buffer, and hand out copies.
type Buffer<'a> = Cow<'a, [u8]>;

/// Snapshot of a reader: the buffer and the position within it.
///
/// Used to resume decoding from a known point, or to fork a reader.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ReaderState<'a> {
    pub buf: Buffer<'a>,
    pub pos: usize,
}

impl<'a> ReaderState<'a> {
    pub fn new(buf: impl Into<Buffer<'a>>) -> Self {
        Self {
            buf: buf.into(),
            pos: 0,
        }
    }

    pub fn with_position(mut self, pos: usize) -> Self {
        self.pos = pos;
        self
    }
}

/// Anything a reader can be constructed from.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ReaderInput<'a> {
    /// Raw script bytes.
    Bytes(&'a [u8]),
    /// Hex encoded script bytes.
    Hex(&'a str),
    /// Previously captured reader state.
    State(ReaderState<'a>),
}

impl<'a> From<&'a [u8]> for ReaderInput<'a> {
    fn from(bytes: &'a [u8]) -> Self {
        ReaderInput::Bytes(bytes)
    }
}

impl<'a> From<&'a str> for ReaderInput<'a> {
    fn from(hex: &'a str) -> Self {
        ReaderInput::Hex(hex)
    }
}

impl<'a> From<ReaderState<'a>> for ReaderInput<'a> {
    fn from(state: ReaderState<'a>) -> Self {
        ReaderInput::State(state)
    }
}

/// Sequential reader over a serialized script.
///
/// Every read consumes bytes at the current position and advances it by exactly the number of
/// bytes consumed. A read that fails leaves the position where it was. The position never
/// exceeds the buffer length.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ScriptReader<'a> {
    buf: Buffer<'a>,
    pos: usize,
}

impl<'a> ScriptReader<'a> {
    /// Reader over given bytes, starting at the beginning.
    pub fn new(buf: &'a [u8]) -> Self {
        Self {
            buf: Cow::Borrowed(buf),
            pos: 0,
        }
    }

    /// Reader over hex-decoded bytes.
    ///
    /// Odd length strings and non-hex characters are rejected.
    pub fn from_hex(hex_str: &str) -> Result<ScriptReader<'static>> {
        let buf = hex::decode(hex_str)?;
        Ok(ScriptReader {
            buf: Cow::Owned(buf),
            pos: 0,
        })
    }

    /// Resume reading from a captured state.
    pub fn from_state(state: ReaderState<'a>) -> Result<Self> {
        let ReaderState { buf, pos } = state;
        if pos > buf.len() {
            return Err(Error::UnsupportedInput(format!(
                "state position {pos} is beyond buffer length {}",
                buf.len()
            )));
        }
        Ok(Self { buf, pos })
    }

    pub fn from_input(input: impl Into<ReaderInput<'a>>) -> Result<Self> {
        match input.into() {
            ReaderInput::Bytes(bytes) => Ok(Self::new(bytes)),
            ReaderInput::Hex(hex_str) => Self::from_hex(hex_str),
            ReaderInput::State(state) => Self::from_state(state),
        }
    }

    /// Capture the current state. The buffer is only copied if the reader owns it.
    pub fn state(&self) -> ReaderState<'a> {
        ReaderState {
            buf: self.buf.clone(),
            pos: self.pos,
        }
    }

    pub fn position(&self) -> usize {
        self.pos
    }

    /// Length of the whole underlying buffer, regardless of the position.
    pub fn len(&self) -> usize {
        self.buf.len()
    }

    pub fn is_empty(&self) -> bool {
        self.buf.is_empty()
    }

    /// Number of bytes not consumed yet.
    pub fn remaining(&self) -> usize {
        self.buf.len() - self.pos
    }

    pub fn at_end(&self) -> bool {
        self.pos == self.buf.len()
    }

    /// Claim the next `len` bytes, returning their range in the buffer.
    fn advance(&mut self, len: usize) -> Result<Range<usize>> {
        let remaining = self.remaining();
        if len > remaining {
            log::debug!(
                "Script read of {len} bytes at position {} overruns the buffer by {} bytes",
                self.pos,
                len - remaining
            );
            return Err(Error::BufferUnderrun {
                requested: len,
                position: self.pos,
                remaining,
            });
        }
        let start = self.pos;
        self.pos += len;
        Ok(start..self.pos)
    }

    fn slice(&self, range: Range<usize>) -> Buffer<'a> {
        match &self.buf {
            Cow::Borrowed(buf) => {
                let buf: &'a [u8] = *buf;
                Cow::Borrowed(&buf[range])
            }
            Cow::Owned(buf) => Cow::Owned(buf[range].to_vec()),
        }
    }

    fn read_array<const N: usize>(&mut self) -> Result<[u8; N]> {
        let range = self.advance(N)?;
        let mut bytes = [0u8; N];
        bytes.copy_from_slice(&self.buf[range]);
        Ok(bytes)
    }

    /// Run a composite read, rewinding to the original position if any part of it fails.
    pub(crate) fn atomically<T>(
        &mut self,
        read: impl FnOnce(&mut Self) -> Result<T>,
    ) -> Result<T> {
        let start = self.pos;
        read(self).inspect_err(|_| self.pos = start)
    }

    /// Read the next `len` bytes.
    pub fn read(&mut self, len: usize) -> Result<Buffer<'a>> {
        let range = self.advance(len)?;
        Ok(self.slice(range))
    }

    /// Read everything up to the end of the buffer.
    pub fn read_remaining(&mut self) -> Buffer<'a> {
        let range = self.pos..self.buf.len();
        self.pos = self.buf.len();
        self.slice(range)
    }

    /// Look at the next byte without consuming it.
    pub fn peek_u8(&self) -> Result<u8> {
        self.buf.get(self.pos).copied().ok_or(Error::BufferUnderrun {
            requested: 1,
            position: self.pos,
            remaining: 0,
        })
    }

    pub fn read_u8(&mut self) -> Result<u8> {
        self.read_array::<1>().map(|[b]| b)
    }

    pub fn read_u16_be(&mut self) -> Result<u16> {
        self.read_array().map(u16::from_be_bytes)
    }

    pub fn read_u16_le(&mut self) -> Result<u16> {
        self.read_array().map(u16::from_le_bytes)
    }

    pub fn read_u32_be(&mut self) -> Result<u32> {
        self.read_array().map(u32::from_be_bytes)
    }

    pub fn read_u32_le(&mut self) -> Result<u32> {
        self.read_array().map(u32::from_le_bytes)
    }

    pub fn read_i32_le(&mut self) -> Result<i32> {
        self.read_array().map(i32::from_le_bytes)
    }

    /// Read 8 bytes as a big-endian integer. All 64 bits are preserved.
    pub fn read_u64_be(&mut self) -> Result<u64> {
        self.read_array().map(u64::from_be_bytes)
    }

    /// Read 8 bytes as a little-endian integer. All 64 bits are preserved.
    pub fn read_u64_le(&mut self) -> Result<u64> {
        self.read_array().map(u64::from_le_bytes)
    }
}

impl<'a> From<&'a [u8]> for ScriptReader<'a> {
    fn from(buf: &'a [u8]) -> Self {
        Self::new(buf)
    }
}
