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

//! Check command - FEDL deck structure and requirement validation

use super::read_file;
use colored::Colorize;
use fedl_core::{check_deck, BlockKind, Diagnostics, ScanOptions, Severity};

/// Check a FEDL deck for structural and requirement correctness.
///
/// Scans a deck file and reports whether it is well-formed. In the default
/// mode the deck must also satisfy the run requirements (mesh, unknown
/// fields and element formulations present); with `structure_only` the scan
/// stops at structural correctness.
///
/// # Arguments
///
/// * `file` - Path to the deck file to check
/// * `structure_only` - If `true`, skip the run-mode requirement checks
/// * `verbose` - If `true`, show hints in addition to errors and warnings
///
/// # Returns
///
/// Returns `Ok(())` if the deck passes, `Err` with a descriptive error
/// message otherwise.
///
/// # Errors
///
/// Returns `Err` if:
/// - The file cannot be read
/// - The deck is structurally broken (unterminated block, malformed header,
///   nesting limit, dependency violation)
/// - The deck misses a run requirement (unless `structure_only` is set)
///
/// # Examples
///
/// ```no_run
/// use fedl_cli::commands::check;
///
/// # fn main() -> Result<(), String> {
/// // Check a complete deck
/// check("plate.fedl", false, false)?;
///
/// // Structure-only mode accepts decks without a physics setup
/// check("fragment.fedl", true, false)?;
///
/// // Broken decks fail
/// let result = check("unterminated.fedl", false, false);
/// assert!(result.is_err());
/// # Ok(())
/// # }
/// ```
///
/// # Output
///
/// Prints a summary to stdout including:
/// - Check status (✓ or ✗)
/// - Count of satisfied blocks out of the recognized set
/// - Diagnostics grouped under the file, colored by severity
pub fn check(file: &str, structure_only: bool, verbose: bool) -> Result<(), String> {
    let content = read_file(file)?;

    // Configure scan options with the requested mode
    let options = ScanOptions {
        validate_only: structure_only,
        source_name: file.to_string(),
        ..ScanOptions::default()
    };

    match check_deck(&content, &options) {
        Ok(report) => {
            if report.success() {
                println!("{} {}", "✓".green().bold(), file);
                println!(
                    "  Blocks: {} of {} satisfied",
                    report.presence.satisfied_count(),
                    BlockKind::COUNT
                );
                if structure_only {
                    println!("  Mode: structure only (run requirements not enforced)");
                }
                print_diagnostics(&report.diagnostics, verbose);
                Ok(())
            } else {
                println!("{} {}", "✗".red().bold(), file);
                print_diagnostics(&report.diagnostics, verbose);
                Err(format!(
                    "deck has {} requirement error(s)",
                    report.diagnostics.error_count()
                ))
            }
        }
        Err(e) => {
            println!("{} {}", "✗".red().bold(), file);
            Err(format!("{}", e))
        }
    }
}

/// Print diagnostics indented under the file line, colored by severity.
/// Hints are suppressed unless `verbose` is set.
fn print_diagnostics(diagnostics: &Diagnostics, verbose: bool) {
    for diagnostic in diagnostics.iter() {
        if diagnostic.severity() == Severity::Hint && !verbose {
            continue;
        }
        let label = match diagnostic.severity() {
            Severity::Error => "error".red().bold(),
            Severity::Warning => "warning".yellow().bold(),
            Severity::Hint => "hint".cyan(),
        };
        println!("  {}: {}", label, diagnostic.message());
    }
}
