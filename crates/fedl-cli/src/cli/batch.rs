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

//! Batch processing commands for FEDL.
//!
//! This module provides commands for processing multiple deck files in
//! parallel, enabling efficient bulk operations on large collections.

use crate::commands;
use clap::Subcommand;

/// Batch processing commands.
///
/// These commands operate on multiple deck files simultaneously, with
/// automatic parallelization for improved performance.
///
/// # Design
///
/// All batch commands follow consistent patterns:
/// - Multiple file inputs
/// - Optional parallel processing flag
/// - Verbose mode for detailed progress
#[derive(Subcommand)]
pub enum BatchCommands {
    /// Batch check multiple FEDL decks
    ///
    /// Checks multiple deck files in parallel and provides aggregated
    /// results with a progress summary.
    BatchCheck {
        /// Input deck paths
        #[arg(value_name = "FILES", num_args = 1..)]
        files: Vec<String>,

        /// Check structure without demanding a runnable physics setup
        #[arg(short, long)]
        structure_only: bool,

        /// Force parallel processing
        #[arg(short, long)]
        parallel: bool,

        /// Show verbose progress
        #[arg(short, long)]
        verbose: bool,
    },
}

impl BatchCommands {
    /// Execute the batch command.
    ///
    /// # Errors
    ///
    /// Returns `Err` if:
    /// - Any file operation fails
    /// - Processing fails for any deck
    ///
    /// # Performance
    ///
    /// Batch commands automatically parallelize when beneficial. The
    /// `parallel` flag forces parallelization even for small file sets.
    pub fn execute(self) -> Result<(), String> {
        match self {
            BatchCommands::BatchCheck {
                files,
                structure_only,
                parallel,
                verbose,
            } => commands::batch_check(files, structure_only, parallel, verbose),
        }
    }
}
