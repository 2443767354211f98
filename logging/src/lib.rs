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

mod log_style;
mod utils;

pub use log;

pub use log_style::{get_log_style_from_env, LogStyle, LogStyleParseError};
pub use utils::{get_from_env, GetFromEnvError};

/// Env var selecting the coloring of log output, see [LogStyle::parse].
pub const LOG_STYLE_ENV_VAR_NAME: &str = "SCRIPT_READER_LOG_STYLE";

static INITIALIZE_LOGGER_ONCE_FLAG: std::sync::Once = std::sync::Once::new();

/// Initialize the logger. Filtering is controlled by `RUST_LOG`, coloring by
/// [LOG_STYLE_ENV_VAR_NAME]. Calling it more than once has no further effect.
pub fn init_logging() {
    INITIALIZE_LOGGER_ONCE_FLAG.call_once(|| {
        let (style, style_error) = match get_log_style_from_env(LOG_STYLE_ENV_VAR_NAME) {
            Ok(style) => (style.unwrap_or_default(), None),
            Err(err) => (LogStyle::default(), Some(err)),
        };

        let init_result = env_logger::Builder::from_default_env()
            .write_style(style.write_style())
            .try_init();

        match (init_result, style_error) {
            (Err(err), _) => eprintln!("Logger initialization failed: {err}"),
            (Ok(()), Some(err)) => {
                log::warn!("Ignoring {LOG_STYLE_ENV_VAR_NAME}: {err}");
            }
            (Ok(()), None) => {}
        }
    });
}
