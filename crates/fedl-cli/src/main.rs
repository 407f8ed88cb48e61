// Dweve FEDL - Finite Element Deck Language
//
// Copyright (c) 2025 Dweve IP B.V. and individual contributors.
//
// SPDX-License-Identifier: Apache-2.0
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License in the LICENSE file at the
// root of this repository or at: http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! FEDL Command Line Interface

use clap::Parser;
use fedl_cli::cli::Commands;
use std::process::ExitCode;

/// FEDL - Finite Element Deck Language toolkit
///
/// A command-line interface for working with FEDL simulation decks,
/// providing requirement checking, layout inspection, and batch
/// processing capabilities.
///
/// # Examples
///
/// ```bash
/// # Check a deck
/// fedl check plate.fedl
///
/// # Check structure without run requirements
/// fedl check fragment.fedl --structure-only
///
/// # Inspect the block layout as JSON
/// fedl inspect plate.fedl --json
///
/// # Batch check multiple decks
/// fedl batch-check bench/*.fedl --parallel
/// ```
#[derive(Parser)]
#[command(name = "fedl")]
#[command(author, version, about = "FEDL - Finite Element Deck Language toolkit", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    match cli.command.execute() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}
