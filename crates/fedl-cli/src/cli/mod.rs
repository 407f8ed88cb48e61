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

//! CLI command definitions and argument parsing.
//!
//! This module contains all command-line interface structures for the FEDL
//! CLI, organized into logical categories for better maintainability.
//!
//! # Organization
//!
//! Commands are organized into the following modules:
//!
//! - [`core`]: Core commands (check, inspect, keywords)
//! - [`batch`]: Batch processing commands (batch-check)
//! - [`utility`]: Utility commands (completion)

mod batch;
mod core;
mod utility;

use clap::Subcommand;

pub use batch::BatchCommands;
pub use core::CoreCommands;
pub use utility::UtilityCommands;

/// Top-level CLI commands enum.
///
/// This is the main command dispatcher that delegates to specialized command
/// categories. Each variant represents a category of related commands.
///
/// # Architecture
///
/// The commands are organized hierarchically:
///
/// ```text
/// Commands
/// ├── Core (check, inspect, keywords)
/// ├── Batch (batch-check)
/// └── Utility (completion)
/// ```
///
/// # Examples
///
/// ```no_run
/// use clap::Parser;
/// use fedl_cli::cli::Commands;
///
/// #[derive(Parser)]
/// struct Cli {
///     #[command(subcommand)]
///     command: Commands,
/// }
/// ```
#[derive(Subcommand)]
pub enum Commands {
    // Core commands - flattened to appear at top level
    #[command(flatten)]
    Core(CoreCommands),

    // Batch commands - flattened to appear at top level
    #[command(flatten)]
    Batch(BatchCommands),

    // Utility commands - flattened to appear at top level
    #[command(flatten)]
    Utility(UtilityCommands),
}

impl Commands {
    /// Execute the command with the provided arguments.
    ///
    /// This method dispatches to the appropriate command handler based on the
    /// command variant.
    ///
    /// # Errors
    ///
    /// Returns `Err` if:
    /// - File I/O fails
    /// - Scanning or requirement checking fails
    /// - Any other command-specific error occurs
    pub fn execute(self) -> Result<(), String> {
        match self {
            Commands::Core(cmd) => cmd.execute(),
            Commands::Batch(cmd) => cmd.execute(),
            Commands::Utility(cmd) => cmd.execute(),
        }
    }
}
