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

//! Keywords command - lists the recognized block vocabulary

use colored::Colorize;
use fedl_core::{BlockKind, KEYWORDS, TERMINATOR};

/// List every block keyword the scanner recognizes.
///
/// Prints the full block vocabulary with a one-line description and any
/// ordering requirement. Useful as a quick reference when writing decks
/// by hand.
///
/// # Examples
///
/// ```no_run
/// use fedl_cli::commands::keywords;
///
/// # fn main() -> Result<(), String> {
/// keywords()?;
/// # Ok(())
/// # }
/// ```
pub fn keywords() -> Result<(), String> {
    println!("{}", "Recognized block keywords".bold().underline());
    println!();

    for spec in &KEYWORDS {
        let padded = format!("{:<17}", spec.token);
        let requires = if spec.requires.is_empty() {
            String::new()
        } else {
            let names: Vec<&str> = spec.requires.iter().map(|k| k.token()).collect();
            format!("(requires {})", names.join(", "))
        };
        println!(
            "  {} {:<40} {}",
            padded.green(),
            describe(spec.kind),
            requires.dimmed()
        );
    }

    println!();
    println!("Every block closes with {}.", TERMINATOR.cyan());
    println!("Headers match case-insensitively and ignore whitespace.");
    Ok(())
}

fn describe(kind: BlockKind) -> &'static str {
    match kind {
        BlockKind::Mesh => "computational mesh and domain geometry",
        BlockKind::Dofs => "unknown fields (degrees of freedom)",
        BlockKind::Elements => "element formulations",
        BlockKind::Materials => "material models and parameters",
        BlockKind::BoundaryConditions => "boundary conditions",
        BlockKind::InitialConditions => "initial conditions",
        BlockKind::QuadraturePoints => "numerical integration settings",
        BlockKind::Output => "result output settings",
        BlockKind::Projection => "quantities projected to nodes",
        BlockKind::NonlinearSolver => "nonlinear solver settings",
    }
}
