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

//! Example demonstrating structure-only deck checking.
//!
//! This example shows how to scan simulation decks for structural problems,
//! how validate-only mode differs from run mode, and how nesting limits are
//! enforced for untrusted input.

use fedl_core::{check_deck, Limits, ScanOptions};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("FEDL Deck Checking Example\n");

    // Example 1: a well-formed deck
    println!("1. Well-Formed Deck:");
    let deck = br#"// 1d poisson benchmark
[mesh]
  type = asfem
  dim = 1
  nx = 50
[end]

[dofs]
  name = phi
[end]

[elmts]
  [poisson]
    type = diffusion
    dofs = phi
  [end]
[end]
"#;

    let report = check_deck(deck, &ScanOptions::default())?;
    println!("   success: {}", report.success());
    for (kind, status) in report.presence.iter() {
        if status.present {
            println!("   found {}", kind);
        }
    }
    println!();

    // Example 2: structural faults are fatal
    println!("2. Structural Faults:");
    let unterminated = b"[mesh]\n  type = asfem\n  dim = 2\n";
    match check_deck(unterminated, &ScanOptions::default()) {
        Ok(_) => println!("   Unexpected success!\n"),
        Err(e) => println!("   Expected error: {}\n", e),
    }

    // Example 3: validate-only mode vs run mode
    println!("3. Validate-Only vs Run Mode:");
    let structure_only = b"[mesh]\n  type = asfem\n[end]\n[dofs]\n  name = u\n[end]\n";

    let validating = check_deck(
        structure_only,
        &ScanOptions {
            validate_only: true,
            ..ScanOptions::default()
        },
    )?;
    println!(
        "   validate-only: success = {}, diagnostics = {}",
        validating.success(),
        validating.diagnostics.len()
    );

    let running = check_deck(structure_only, &ScanOptions::default())?;
    println!(
        "   run mode:      success = {}, diagnostics = {}",
        running.success(),
        running.diagnostics.len()
    );
    for diagnostic in &running.diagnostics {
        println!("   [{}] {}", diagnostic.severity(), diagnostic.message());
    }
    println!();

    // Example 4: nesting limits for untrusted decks
    println!("4. Nesting Limits for Untrusted Input:");
    let mut hostile = String::from("[mesh]\n");
    for level in 0..64 {
        hostile.push_str(&format!("[nest{}]\n", level));
    }
    let options = ScanOptions {
        limits: Limits {
            max_nesting_depth: 8,
            ..Limits::default()
        },
        ..ScanOptions::default()
    };
    match check_deck(hostile.as_bytes(), &options) {
        Ok(_) => println!("   Unexpected success!\n"),
        Err(e) => println!("   Expected error (nesting limit): {}\n", e),
    }

    // Example 5: mode recommendations
    println!("5. Mode Recommendations:");
    println!("   - Editors and linters: validate_only = true");
    println!("   - Job submission front-ends: validate_only = false");
    println!("   - Untrusted uploads: lower max_nesting_depth and max_file_size");

    Ok(())
}
