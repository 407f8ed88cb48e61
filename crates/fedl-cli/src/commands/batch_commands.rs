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

//! Batch command implementations - Process multiple FEDL decks efficiently
//!
//! This module wires the batch processor into the CLI, checking many decks
//! in parallel or sequentially with a progress summary.

use crate::batch::{BatchConfig, BatchProcessor, CheckOperation};
use crate::error::CliError;
use colored::Colorize;
use std::path::PathBuf;

/// Batch check multiple FEDL decks.
///
/// Checks multiple deck files for structural and requirement correctness,
/// with optional parallel processing for large file sets.
///
/// # Arguments
///
/// * `files` - List of deck file paths to check
/// * `structure_only` - If `true`, skip the run-mode requirement checks
/// * `parallel` - If `true`, process files in parallel regardless of count
/// * `verbose` - If `true`, show per-file progress with error details
///
/// # Returns
///
/// Returns `Ok(())` if all decks pass, `Err` with a summary if any fail.
///
/// # Errors
///
/// Returns `Err` if:
/// - Any file cannot be read
/// - Any deck is structurally broken
/// - Any deck misses a run requirement (unless `structure_only` is set)
///
/// # Examples
///
/// ```no_run
/// use fedl_cli::commands::batch_check;
///
/// # fn main() -> Result<(), String> {
/// // Check multiple decks in parallel
/// let files = vec!["plate.fedl".to_string(), "beam.fedl".to_string()];
/// batch_check(files, false, true, false)?;
///
/// // Structure-only checking with verbose output
/// let files = vec!["a.fedl".to_string(), "b.fedl".to_string()];
/// batch_check(files, true, true, true)?;
/// # Ok(())
/// # }
/// ```
///
/// # Output
///
/// Displays progress information and a summary:
/// - Success/failure for each deck (✓ or ✗)
/// - Detailed error messages for failures
/// - Final count of failures
pub fn batch_check(
    files: Vec<String>,
    structure_only: bool,
    parallel: bool,
    verbose: bool,
) -> Result<(), String> {
    let paths: Vec<PathBuf> = files.iter().map(PathBuf::from).collect();

    let config = BatchConfig {
        parallel_threshold: if parallel { 1 } else { usize::MAX },
        verbose,
        ..Default::default()
    };

    let processor = BatchProcessor::new(config);
    let operation = CheckOperation { structure_only };

    let results = processor
        .process(&paths, operation, true)
        .map_err(|e: CliError| e.to_string())?;

    if results.has_failures() {
        eprintln!();
        eprintln!("{}", "Check failures:".red().bold());
        for failure in results.failures() {
            eprintln!("  {} {}", "✗".red(), failure.path.display());
            if let Err(e) = &failure.result {
                eprintln!("    {}", e.to_string().dimmed());
            }
        }
        return Err(format!(
            "{} of {} decks failed the check",
            results.failure_count(),
            results.total_files()
        ));
    }

    Ok(())
}
