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

//! The deck scanning engine.
//!
//! [`read_deck`] makes exactly one pass over the deck. Per content line it
//! matches the normalized text against the keyword table; on a match it
//! checks the block's dependencies, proves the block terminated, and hands
//! the stream to the matching body reader. Normalized lines that match no
//! keyword are ignored unless they contain an empty bracket pair, which is
//! a malformed header and fatal.
//!
//! Structural faults end the scan immediately with an error. What the deck
//! merely *lacks* is never fatal here: after the pass, the requirement and
//! defaulting policy turns absences into diagnostics and fills the
//! configuration gaps, and the caller reads the verdict off the
//! [`ScanReport`].

use crate::config::SimulationConfig;
use crate::diagnostics::Diagnostics;
use crate::error::{FedlError, FedlResult};
use crate::keyword::BlockKind;
use crate::limits::Limits;
use crate::policy;
use crate::presence::PresenceRecord;
use crate::reader::{BlockReader, StructuralReader};
use crate::span::{validate_span, BlockSpan};
use crate::stream::DeckStream;

/// Options governing one scan pass.
///
/// `validate_only` selects structure checking: requirement findings for
/// optional blocks are suppressed and a missing `[elmts]` is tolerated,
/// while the mesh and unknown-field requirements still apply. Defaults are
/// applied either way, so a validate-only pass leaves the configuration in
/// the same state a run-mode pass would.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScanOptions {
    /// Check deck structure without demanding a runnable physics setup.
    pub validate_only: bool,
    /// Name of the deck source, used to derive default output names.
    pub source_name: String,
    /// Resource limits for preprocessing and span validation.
    pub limits: Limits,
}

impl Default for ScanOptions {
    fn default() -> Self {
        ScanOptions {
            validate_only: false,
            source_name: "deck".to_string(),
            limits: Limits::default(),
        }
    }
}

/// The outcome of one scan pass.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScanReport {
    /// Which blocks were found and how their body reads went.
    pub presence: PresenceRecord,
    /// Requirement and defaulting findings, in emission order.
    pub diagnostics: Diagnostics,
}

impl ScanReport {
    /// True when no error-severity diagnostic was emitted.
    pub fn success(&self) -> bool {
        !self.diagnostics.has_errors()
    }
}

/// Scan a deck through `readers` into `config`.
///
/// The stream should be freshly positioned at its start; the pass consumes
/// it to the end. Recognized blocks are dispatched in deck order; the
/// post-scan policy then applies requirement checks and defaults.
///
/// # Errors
///
/// Structural faults abort the pass: a malformed header, a failed
/// dependency, an unterminated block, a resource limit, or a failed
/// `[ics]` body read. Everything else is reported through the returned
/// [`ScanReport`].
pub fn read_deck<R: BlockReader>(
    stream: &mut DeckStream,
    options: &ScanOptions,
    readers: &mut R,
    config: &mut SimulationConfig,
) -> FedlResult<ScanReport> {
    let mut presence = PresenceRecord::new();

    while let Some(line) = stream.next_content() {
        let kind = match BlockKind::from_token(&line.text) {
            Some(kind) => kind,
            None => {
                if line.text.contains("[]") {
                    return Err(FedlError::malformed_header(
                        "incomplete bracket pair where a block header was expected",
                        line.number,
                    ));
                }
                continue;
            }
        };

        for &required in kind.requires() {
            if !presence.satisfied(required) {
                return Err(FedlError::dependency(
                    format!(
                        "{} block requires the {} block to be defined before it",
                        kind.token(),
                        required.token()
                    ),
                    line.number,
                ));
            }
        }

        let span = validate_span(stream, kind, line.number, &options.limits)?;

        let parsed_ok = dispatch(kind, span, stream, readers, config);
        presence.record(kind, parsed_ok);

        if kind == BlockKind::InitialConditions && !parsed_ok {
            return Err(FedlError::reader(
                "[ics] body read failed; initial conditions cannot be partially applied",
                line.number,
            ));
        }
    }

    let mut diagnostics = Diagnostics::new();
    policy::apply_defaults(&presence, options, config, &mut diagnostics);

    Ok(ScanReport {
        presence,
        diagnostics,
    })
}

fn dispatch<R: BlockReader>(
    kind: BlockKind,
    span: BlockSpan,
    stream: &mut DeckStream,
    readers: &mut R,
    config: &mut SimulationConfig,
) -> bool {
    match kind {
        BlockKind::Mesh => readers.read_mesh(stream, span, &mut config.mesh),
        BlockKind::Dofs => readers.read_dofs(stream, span, &mut config.dofs),
        BlockKind::Elements => {
            readers.read_elements(stream, span, &mut config.elements, &config.dofs)
        }
        BlockKind::Materials => readers.read_materials(stream, span, &mut config.materials),
        BlockKind::BoundaryConditions => {
            readers.read_boundary_conditions(stream, span, &mut config.bcs, &config.dofs)
        }
        BlockKind::InitialConditions => {
            readers.read_initial_conditions(stream, span, &mut config.ics, &config.dofs)
        }
        BlockKind::QuadraturePoints => {
            readers.read_quadrature(stream, span, &mut config.quadrature)
        }
        BlockKind::Output => readers.read_output(stream, span, &mut config.output),
        BlockKind::Projection => readers.read_projection(stream, span, &mut config.projection),
        BlockKind::NonlinearSolver => {
            readers.read_nonlinear_solver(stream, span, &mut config.solver)
        }
    }
}

/// Scan raw deck bytes through `readers`, returning the report and the
/// populated configuration.
pub fn scan_deck<R: BlockReader>(
    input: &[u8],
    options: &ScanOptions,
    readers: &mut R,
) -> FedlResult<(ScanReport, SimulationConfig)> {
    let mut stream = DeckStream::from_bytes(input, &options.limits)?;
    let mut config = SimulationConfig::new();
    let report = read_deck(&mut stream, options, readers, &mut config)?;
    Ok((report, config))
}

/// Structure-only scan of raw deck bytes.
///
/// Runs [`StructuralReader`] over a fresh configuration and discards the
/// configuration. The usual entry point for validation tooling.
pub fn check_deck(input: &[u8], options: &ScanOptions) -> FedlResult<ScanReport> {
    let mut readers = StructuralReader;
    scan_deck(input, options, &mut readers).map(|(report, _)| report)
}
