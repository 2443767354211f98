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

//! Command line front end printing the push-data items of a script.

use std::{ffi::OsString, io::Write, path::PathBuf};

use clap::{Parser, ValueEnum};

use logging::log;
use script_reader::{ReaderState, ScriptReader};

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum InputKind {
    /// The input argument is the hex encoded script
    Hex,
    /// The input argument is a path to a file containing the raw script bytes
    File,
    /// The input argument is a path to a file containing the hex encoded script
    HexFile,
}

/// Decode a serialized script into its push-data items, one per line
#[derive(Parser, Debug)]
#[command(version, about)]
pub struct CliArgs {
    /// The script, or a path to it depending on --input-kind
    pub input: String,

    /// How to interpret the input argument
    #[arg(long, value_enum, default_value_t = InputKind::Hex)]
    pub input_kind: InputKind,

    /// Byte offset to start decoding from
    #[arg(long, value_name = "POSITION", default_value_t = 0)]
    pub start: usize,
}

impl CliArgs {
    pub fn from_args<A: Into<OsString> + Clone>(args: impl IntoIterator<Item = A>) -> Self {
        Parser::parse_from(args)
    }
}

#[derive(thiserror::Error, Debug)]
pub enum CliError {
    #[error("Cannot read input file {}: {source}", path.display())]
    InputFile {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("Script decoding failed: {0}")]
    Decode(#[from] script_reader::Error),
    #[error("Cannot write output: {0}")]
    Output(#[from] std::io::Error),
}

fn read_file(path: &str) -> Result<Vec<u8>, CliError> {
    std::fs::read(path).map_err(|source| CliError::InputFile {
        path: path.into(),
        source,
    })
}

fn decode_hex(hex_str: &str) -> Result<Vec<u8>, CliError> {
    hex::decode(hex_str.trim()).map_err(|err| script_reader::Error::from(err).into())
}

/// Load the script bytes as selected by the arguments.
fn load_script(args: &CliArgs) -> Result<Vec<u8>, CliError> {
    let bytes = match args.input_kind {
        InputKind::Hex => decode_hex(&args.input)?,
        InputKind::File => read_file(&args.input)?,
        InputKind::HexFile => {
            let contents = read_file(&args.input)?;
            decode_hex(&String::from_utf8_lossy(&contents))?
        }
    };
    Ok(bytes)
}

/// Decode the script and write one item per line into `out`.
///
/// Items decoded before a failure are written out before the error is returned.
pub fn run(args: CliArgs, out: &mut impl Write) -> Result<(), CliError> {
    let script = load_script(&args)?;
    log::debug!("Decoding {} script bytes from position {}", script.len(), args.start);

    let mut reader =
        ScriptReader::from_input(ReaderState::new(&script[..]).with_position(args.start))?;
    for item in reader.decode_parts() {
        writeln!(out, "{}", item?)?;
    }

    Ok(())
}
