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

//! Core FEDL commands for checking and inspecting decks.
//!
//! This module contains the fundamental FEDL CLI commands that operate on
//! individual deck files.

use crate::commands;
use clap::Subcommand;

/// Core FEDL commands.
///
/// These commands provide the essential functionality for working with deck
/// files: requirement checking, layout inspection, and the keyword
/// reference.
///
/// # Commands
///
/// - **Check**: Scan a deck and enforce structure and run requirements
/// - **Inspect**: Report the block layout of a deck
/// - **Keywords**: List the recognized block vocabulary
#[derive(Subcommand)]
pub enum CoreCommands {
    /// Check a FEDL deck
    ///
    /// Scans a deck file and checks structural correctness plus the run
    /// requirements (mesh, unknown fields, element formulations). With
    /// --structure-only, only structural correctness is enforced.
    Check {
        /// Input deck path
        #[arg(value_name = "FILE")]
        file: String,

        /// Check structure without demanding a runnable physics setup
        #[arg(short, long)]
        structure_only: bool,

        /// Show hints in addition to errors and warnings
        #[arg(short, long)]
        verbose: bool,
    },

    /// Report the block layout of a deck
    ///
    /// Scans a deck in structure-only mode and reports where every block
    /// sits, which recognized keywords are unused, and any diagnostics.
    Inspect {
        /// Input deck path
        #[arg(value_name = "FILE")]
        file: String,

        /// Emit the layout as pretty-printed JSON
        #[arg(short, long)]
        json: bool,

        /// Output file path (defaults to stdout)
        #[arg(short, long)]
        output: Option<String>,
    },

    /// List the recognized block keywords
    ///
    /// Prints the full block vocabulary with descriptions and ordering
    /// requirements. A quick reference for writing decks by hand.
    Keywords,
}

impl CoreCommands {
    /// Execute the core command.
    ///
    /// # Errors
    ///
    /// Returns `Err` if the command execution fails.
    pub fn execute(self) -> Result<(), String> {
        match self {
            CoreCommands::Check {
                file,
                structure_only,
                verbose,
            } => commands::check(&file, structure_only, verbose),
            CoreCommands::Inspect { file, json, output } => {
                commands::inspect(&file, json, output.as_deref())
            }
            CoreCommands::Keywords => commands::keywords(),
        }
    }
}
