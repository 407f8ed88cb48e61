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

//! Example demonstrating custom block body readers.
//!
//! This example implements [`BlockReader`] for the `[mesh]` and `[dofs]`
//! bodies. Numeric scalars are read off the normalized view of each line;
//! the degree-of-freedom name list needs the raw view because normalization
//! strips the spaces separating the names.

use fedl_core::config::{DofConfig, MeshConfig};
use fedl_core::{scan_deck, skip_block, BlockReader, BlockSpan, DeckStream, ScanOptions};

fn parse_field(value: &str, slot: &mut usize) -> bool {
    match value.parse() {
        Ok(parsed) => {
            *slot = parsed;
            true
        }
        Err(_) => false,
    }
}

struct DeckReader;

impl BlockReader for DeckReader {
    fn read_mesh(
        &mut self,
        stream: &mut DeckStream,
        span: BlockSpan,
        mesh: &mut MeshConfig,
    ) -> bool {
        let mut ok = true;
        while let Some(line) = stream.next_content() {
            if line.number >= span.terminator_line {
                break;
            }
            if let Some(value) = line.text.strip_prefix("dim=") {
                ok &= parse_field(value, &mut mesh.dim);
            } else if let Some(value) = line.text.strip_prefix("order=") {
                ok &= parse_field(value, &mut mesh.order);
            } else if let Some(value) = line.text.strip_prefix("nx=") {
                ok &= parse_field(value, &mut mesh.nx);
            } else if let Some(value) = line.text.strip_prefix("ny=") {
                ok &= parse_field(value, &mut mesh.ny);
            }
        }
        // The cursor must end past the terminator whatever happened above.
        skip_block(stream, span);
        ok
    }

    fn read_dofs(
        &mut self,
        stream: &mut DeckStream,
        span: BlockSpan,
        dofs: &mut DofConfig,
    ) -> bool {
        while let Some((number, raw)) = stream.next_line() {
            if number >= span.terminator_line {
                break;
            }
            let trimmed = raw.trim();
            if let Some(rest) = trimmed.strip_prefix("name") {
                if let Some(names) = rest.trim_start().strip_prefix('=') {
                    for name in names.split_whitespace() {
                        dofs.add_dof(name);
                    }
                }
            }
        }
        skip_block(stream, span);
        dofs.count() > 0
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("FEDL Custom Readers Example\n");

    // Example 1: interpreting mesh and dofs bodies
    println!("1. Interpreting Bodies:");
    let deck = br#"[mesh]
  type = asfem
  dim = 2
  order = 2
  nx = 40
  ny = 8
[end]

[dofs]
  name = ux uy
[end]

[elmts]
  [solids]
    type = mechanics
    dofs = ux uy
  [end]
[end]
"#;

    let mut readers = DeckReader;
    let (report, config) = scan_deck(deck, &ScanOptions::default(), &mut readers)?;
    println!("   success: {}", report.success());
    println!(
        "   mesh: dim = {}, order = {}, {} x {} cells",
        config.mesh.dim, config.mesh.order, config.mesh.nx, config.mesh.ny
    );
    println!("   dofs: {:?} ({} unknowns)", config.dofs.names(), config.dofs.count());
    println!();

    // Example 2: defaults derived from what the readers populated
    println!("2. Derived Defaults:");
    println!(
        "   quadrature: {} of order {} over {} cells",
        config.quadrature.rule, config.quadrature.bulk_order, config.quadrature.cell_count()
    );
    println!(
        "   solver: {} (max {} iterations)",
        config.solver.method, config.solver.max_iterations
    );
    println!();

    // Example 3: a failed body read degrades the block
    println!("3. Failed Body Reads:");
    let bad_deck = b"[mesh]\n  dim = banana\n[end]\n[dofs]\n  name = u\n[end]\n";
    let mut readers = DeckReader;
    let (report, _) = scan_deck(bad_deck, &ScanOptions::default(), &mut readers)?;
    println!("   success: {}", report.success());
    for diagnostic in &report.diagnostics {
        println!("   [{}] {}", diagnostic.severity(), diagnostic.message());
    }

    Ok(())
}
