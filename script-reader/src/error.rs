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

/// Script reader errors
#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum Error {
    #[error("Unsupported reader input: {0}")]
    UnsupportedInput(String),
    #[error("Invalid hex encoding: {0}")]
    InvalidEncoding(#[from] hex::FromHexError),
    #[error(
        "Buffer underrun: {requested} bytes requested at position {position}, only {remaining} remaining"
    )]
    BufferUnderrun {
        requested: usize,
        position: usize,
        remaining: usize,
    },
}

pub type Result<T> = core::result::Result<T, Error>;
