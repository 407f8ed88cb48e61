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

//! The body-reader seam between the scanner and block-specific grammars.
//!
//! The scanner proves a block is well-formed and then hands the stream to
//! the block's body reader, positioned on the first body line. The reader
//! owns its block's grammar: it consumes lines into its configuration
//! object, leaves the cursor past the block's own `[end]`, and reports
//! success or failure as a plain `bool`. On failure the scanner downgrades
//! the block to absent, except for initial conditions where a partial read
//! is not recoverable.
//!
//! Every trait method defaults to a structural skip, so a reader
//! implementation only overrides the blocks it actually interprets.

use crate::config::{
    BcConfig, DofConfig, ElementConfig, IcConfig, MaterialConfig, MeshConfig, OutputConfig,
    ProjectionConfig, QuadratureConfig, SolverConfig,
};
use crate::span::BlockSpan;
use crate::stream::DeckStream;

/// Position the cursor on the line after a block's terminator.
///
/// The standard way for a body reader to finish, and the whole body of the
/// default structural skip.
pub fn skip_block(stream: &mut DeckStream, span: BlockSpan) {
    stream.seek_past_line(span.terminator_line);
}

/// Block body readers.
///
/// Dependency-bearing blocks receive a shared reference to the already
/// populated [`DofConfig`]; the scanner guarantees it was satisfied before
/// their headers were accepted.
pub trait BlockReader {
    /// Read a `[mesh]` body.
    fn read_mesh(
        &mut self,
        stream: &mut DeckStream,
        span: BlockSpan,
        _mesh: &mut MeshConfig,
    ) -> bool {
        skip_block(stream, span);
        true
    }

    /// Read a `[dofs]` body.
    fn read_dofs(
        &mut self,
        stream: &mut DeckStream,
        span: BlockSpan,
        _dofs: &mut DofConfig,
    ) -> bool {
        skip_block(stream, span);
        true
    }

    /// Read an `[elmts]` body.
    fn read_elements(
        &mut self,
        stream: &mut DeckStream,
        span: BlockSpan,
        _elements: &mut ElementConfig,
        _dofs: &DofConfig,
    ) -> bool {
        skip_block(stream, span);
        true
    }

    /// Read a `[mates]` body.
    fn read_materials(
        &mut self,
        stream: &mut DeckStream,
        span: BlockSpan,
        _materials: &mut MaterialConfig,
    ) -> bool {
        skip_block(stream, span);
        true
    }

    /// Read a `[bcs]` body.
    fn read_boundary_conditions(
        &mut self,
        stream: &mut DeckStream,
        span: BlockSpan,
        _bcs: &mut BcConfig,
        _dofs: &DofConfig,
    ) -> bool {
        skip_block(stream, span);
        true
    }

    /// Read an `[ics]` body. Failure here aborts the whole scan.
    fn read_initial_conditions(
        &mut self,
        stream: &mut DeckStream,
        span: BlockSpan,
        _ics: &mut IcConfig,
        _dofs: &DofConfig,
    ) -> bool {
        skip_block(stream, span);
        true
    }

    /// Read a `[qpoint]` body.
    fn read_quadrature(
        &mut self,
        stream: &mut DeckStream,
        span: BlockSpan,
        _quadrature: &mut QuadratureConfig,
    ) -> bool {
        skip_block(stream, span);
        true
    }

    /// Read an `[output]` body.
    fn read_output(
        &mut self,
        stream: &mut DeckStream,
        span: BlockSpan,
        _output: &mut OutputConfig,
    ) -> bool {
        skip_block(stream, span);
        true
    }

    /// Read a `[projection]` body.
    fn read_projection(
        &mut self,
        stream: &mut DeckStream,
        span: BlockSpan,
        _projection: &mut ProjectionConfig,
    ) -> bool {
        skip_block(stream, span);
        true
    }

    /// Read a `[nonlinearsolver]` body.
    fn read_nonlinear_solver(
        &mut self,
        stream: &mut DeckStream,
        span: BlockSpan,
        _solver: &mut SolverConfig,
    ) -> bool {
        skip_block(stream, span);
        true
    }
}

/// Reader that verifies structure and interprets nothing.
///
/// Every block body is skipped and reported successful. This is what
/// validate-only scanning runs with, and the fallback for tools that care
/// about deck shape rather than deck content.
#[derive(Debug, Clone, Copy, Default)]
pub struct StructuralReader;

impl BlockReader for StructuralReader {}
