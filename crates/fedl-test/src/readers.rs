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

//! Body reader test doubles.

use fedl_core::config::{
    BcConfig, DofConfig, ElementConfig, IcConfig, MaterialConfig, MeshConfig, OutputConfig,
    ProjectionConfig, QuadratureConfig, SolverConfig,
};
use fedl_core::{skip_block, BlockKind, BlockReader, BlockSpan, DeckStream};

/// Records every body-reader invocation, skips every body.
///
/// Each dispatched block pushes its [`BlockSpan`]; the kinds listed in
/// `fail_on` report failure instead of success, which is how dependency
/// degradation and the initial-condition escalation get exercised.
#[derive(Debug, Clone, Default)]
pub struct RecordingReader {
    calls: Vec<BlockSpan>,
    fail_kinds: Vec<BlockKind>,
}

impl RecordingReader {
    /// A reader that accepts everything.
    pub fn new() -> Self {
        Self::default()
    }

    /// Make the body read for `kind` report failure.
    pub fn fail_on(mut self, kind: BlockKind) -> Self {
        self.fail_kinds.push(kind);
        self
    }

    /// Spans of every dispatched block, in dispatch order.
    pub fn calls(&self) -> &[BlockSpan] {
        &self.calls
    }

    /// How many times `kind` was dispatched.
    pub fn count(&self, kind: BlockKind) -> usize {
        self.calls.iter().filter(|span| span.kind == kind).count()
    }

    /// True when `kind` was dispatched at least once.
    pub fn was_invoked(&self, kind: BlockKind) -> bool {
        self.count(kind) > 0
    }

    /// The recorded span for the first dispatch of `kind`.
    pub fn span_of(&self, kind: BlockKind) -> Option<BlockSpan> {
        self.calls.iter().find(|span| span.kind == kind).copied()
    }

    fn note(&mut self, stream: &mut DeckStream, span: BlockSpan) -> bool {
        self.calls.push(span);
        skip_block(stream, span);
        !self.fail_kinds.contains(&span.kind)
    }
}

impl BlockReader for RecordingReader {
    fn read_mesh(&mut self, stream: &mut DeckStream, span: BlockSpan, _: &mut MeshConfig) -> bool {
        self.note(stream, span)
    }

    fn read_dofs(&mut self, stream: &mut DeckStream, span: BlockSpan, _: &mut DofConfig) -> bool {
        self.note(stream, span)
    }

    fn read_elements(
        &mut self,
        stream: &mut DeckStream,
        span: BlockSpan,
        _: &mut ElementConfig,
        _: &DofConfig,
    ) -> bool {
        self.note(stream, span)
    }

    fn read_materials(
        &mut self,
        stream: &mut DeckStream,
        span: BlockSpan,
        _: &mut MaterialConfig,
    ) -> bool {
        self.note(stream, span)
    }

    fn read_boundary_conditions(
        &mut self,
        stream: &mut DeckStream,
        span: BlockSpan,
        _: &mut BcConfig,
        _: &DofConfig,
    ) -> bool {
        self.note(stream, span)
    }

    fn read_initial_conditions(
        &mut self,
        stream: &mut DeckStream,
        span: BlockSpan,
        _: &mut IcConfig,
        _: &DofConfig,
    ) -> bool {
        self.note(stream, span)
    }

    fn read_quadrature(
        &mut self,
        stream: &mut DeckStream,
        span: BlockSpan,
        _: &mut QuadratureConfig,
    ) -> bool {
        self.note(stream, span)
    }

    fn read_output(
        &mut self,
        stream: &mut DeckStream,
        span: BlockSpan,
        _: &mut OutputConfig,
    ) -> bool {
        self.note(stream, span)
    }

    fn read_projection(
        &mut self,
        stream: &mut DeckStream,
        span: BlockSpan,
        _: &mut ProjectionConfig,
    ) -> bool {
        self.note(stream, span)
    }

    fn read_nonlinear_solver(
        &mut self,
        stream: &mut DeckStream,
        span: BlockSpan,
        _: &mut SolverConfig,
    ) -> bool {
        self.note(stream, span)
    }
}

/// Plants a known mesh geometry, skips everything else.
///
/// Defaulting behavior derives quadrature orders and dimensionality from
/// the mesh; this reader gives those derivations a non-default source
/// without needing a real `[mesh]` grammar.
#[derive(Debug, Clone, Copy)]
pub struct SeedMeshReader {
    /// Spatial dimension to plant.
    pub dim: usize,
    /// Bulk interpolation order to plant.
    pub order: usize,
}

impl SeedMeshReader {
    /// A reader planting `dim`/`order` with two cells per active axis.
    pub fn new(dim: usize, order: usize) -> Self {
        SeedMeshReader { dim, order }
    }
}

impl BlockReader for SeedMeshReader {
    fn read_mesh(
        &mut self,
        stream: &mut DeckStream,
        span: BlockSpan,
        mesh: &mut MeshConfig,
    ) -> bool {
        mesh.dim = self.dim;
        mesh.order = self.order;
        mesh.nx = 2;
        mesh.ny = if self.dim >= 2 { 2 } else { 0 };
        mesh.nz = if self.dim >= 3 { 2 } else { 0 };
        skip_block(stream, span);
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use fedl_core::{scan_deck, ScanOptions};

    #[test]
    fn test_recording_reader_counts_dispatches() {
        let deck = "[mesh]\ntype = asfem\n[end]\n[dofs]\nname = u\n[end]\n";
        let mut readers = RecordingReader::new();
        scan_deck(deck.as_bytes(), &ScanOptions::default(), &mut readers).unwrap();
        assert_eq!(readers.count(BlockKind::Mesh), 1);
        assert_eq!(readers.count(BlockKind::Dofs), 1);
        assert!(!readers.was_invoked(BlockKind::Elements));
        assert_eq!(readers.calls().len(), 2);
    }

    #[test]
    fn test_recording_reader_fail_on() {
        let deck = "[mates]\ntype = x\n[end]\n";
        let mut readers = RecordingReader::new().fail_on(BlockKind::Materials);
        let (report, _) =
            scan_deck(deck.as_bytes(), &ScanOptions::default(), &mut readers).unwrap();
        assert!(readers.was_invoked(BlockKind::Materials));
        assert!(!report.presence.satisfied(BlockKind::Materials));
    }

    #[test]
    fn test_seed_mesh_reader_plants_geometry() {
        let deck = "[mesh]\ntype = asfem\n[end]\n";
        let mut readers = SeedMeshReader::new(3, 2);
        let (_, config) =
            scan_deck(deck.as_bytes(), &ScanOptions::default(), &mut readers).unwrap();
        assert_eq!(config.mesh.dim, 3);
        assert_eq!(config.mesh.order, 2);
        assert_eq!(config.mesh.cell_count(), 8);
    }
}
