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

pub use rand::{Rng, SeedableRng};
use rand_chacha::ChaChaRng;

/// Seed of a test PRNG, printed by [make_seedable_rng!](crate::make_seedable_rng) so that a
/// failing randomized test can be reproduced.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Seed(pub u64);

impl Seed {
    pub fn from_entropy() -> Self {
        Seed(rand::thread_rng().gen::<u64>())
    }

    pub fn from_u64(v: u64) -> Self {
        Seed(v)
    }
}

#[must_use]
pub fn make_seedable_rng(seed: Seed) -> impl Rng {
    ChaChaRng::seed_from_u64(seed.0)
}

/// Makes PRNG that should be used in unit tests to get deterministic values from non-deterministic seed.
///
/// # Example
///
/// ```
/// use test_utils::{make_seedable_rng, random::*};
/// let mut rng = make_seedable_rng!(Seed::from_entropy());
/// ```
///
/// The seed is printed to std out, e.g:
///
/// `script-reader/src/tests/mod.rs:45 Using seed '4862969352335513650' for the PRNG`
///
/// That output can be used to reproduce a failure by passing the printed seed instead of entropy:
/// ```
/// use test_utils::{make_seedable_rng, random::*};
/// let mut rng = make_seedable_rng!(Seed::from_u64(4862969352335513650));
/// ```
#[macro_export]
macro_rules! make_seedable_rng {
    ($seed:expr) => {{
        let seed: $crate::random::Seed = $seed;
        println!(
            "{}:{} Using seed '{}' for the PRNG",
            file!(),
            line!(),
            seed.0
        );
        $crate::random::make_seedable_rng(seed)
    }};
}
