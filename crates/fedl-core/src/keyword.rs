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

//! Block keywords and the dispatch table.
//!
//! Every recognizable top-level block is a row in [`KEYWORDS`]: its
//! bracketed token, its [`BlockKind`], and the kinds that must already be
//! satisfied when its header appears. Matching is exact equality on the
//! normalized line, so `[output]` and a hypothetical `[outputextra]` can
//! never shadow each other. Normalized lines that contain brackets but
//! match no row are not block headers and are ignored by the scanner.

use std::fmt;

/// The block terminator token in normalized form.
pub const TERMINATOR: &str = "[end]";

/// The fixed set of recognized top-level deck blocks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum BlockKind {
    /// `[mesh]` - mesh generation or import.
    Mesh,
    /// `[dofs]` - unknown field registration.
    Dofs,
    /// `[elmts]` - element formulations.
    Elements,
    /// `[mates]` - material property sets.
    Materials,
    /// `[bcs]` - boundary conditions.
    BoundaryConditions,
    /// `[ics]` - initial conditions.
    InitialConditions,
    /// `[qpoint]` - numerical integration options.
    QuadraturePoints,
    /// `[output]` - result output options.
    Output,
    /// `[projection]` - nodal projection quantities.
    Projection,
    /// `[nonlinearsolver]` - nonlinear solution options.
    NonlinearSolver,
}

impl BlockKind {
    /// Number of distinct block kinds.
    pub const COUNT: usize = 10;

    /// All kinds in canonical recognition order.
    pub const ALL: [BlockKind; BlockKind::COUNT] = [
        BlockKind::Mesh,
        BlockKind::Dofs,
        BlockKind::Elements,
        BlockKind::Materials,
        BlockKind::BoundaryConditions,
        BlockKind::InitialConditions,
        BlockKind::QuadraturePoints,
        BlockKind::Output,
        BlockKind::Projection,
        BlockKind::NonlinearSolver,
    ];

    /// The normalized header token for this kind.
    pub const fn token(self) -> &'static str {
        match self {
            BlockKind::Mesh => "[mesh]",
            BlockKind::Dofs => "[dofs]",
            BlockKind::Elements => "[elmts]",
            BlockKind::Materials => "[mates]",
            BlockKind::BoundaryConditions => "[bcs]",
            BlockKind::InitialConditions => "[ics]",
            BlockKind::QuadraturePoints => "[qpoint]",
            BlockKind::Output => "[output]",
            BlockKind::Projection => "[projection]",
            BlockKind::NonlinearSolver => "[nonlinearsolver]",
        }
    }

    /// Kinds that must be satisfied before this block's header may appear.
    pub const fn requires(self) -> &'static [BlockKind] {
        match self {
            BlockKind::Elements
            | BlockKind::BoundaryConditions
            | BlockKind::InitialConditions => &[BlockKind::Dofs],
            BlockKind::QuadraturePoints => &[BlockKind::Mesh],
            _ => &[],
        }
    }

    /// Exact-match lookup of a normalized line against the keyword table.
    pub fn from_token(text: &str) -> Option<BlockKind> {
        KEYWORDS
            .iter()
            .find(|spec| spec.token == text)
            .map(|spec| spec.kind)
    }

    pub(crate) const fn index(self) -> usize {
        self as usize
    }
}

impl fmt::Display for BlockKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.token())
    }
}

/// One row of the keyword dispatch table.
#[derive(Debug, Clone, Copy)]
pub struct KeywordSpec {
    /// Normalized header token, brackets included.
    pub token: &'static str,
    /// The kind this token opens.
    pub kind: BlockKind,
    /// Kinds that must already be satisfied.
    pub requires: &'static [BlockKind],
}

const fn row(kind: BlockKind) -> KeywordSpec {
    KeywordSpec {
        token: kind.token(),
        kind,
        requires: kind.requires(),
    }
}

/// The keyword dispatch table, in canonical recognition order.
///
/// The order matches the historical recognition order of the format and is
/// what presence listings display; matching itself is order-independent
/// because tokens are compared by exact equality.
pub const KEYWORDS: [KeywordSpec; BlockKind::COUNT] = [
    row(BlockKind::Mesh),
    row(BlockKind::Dofs),
    row(BlockKind::Elements),
    row(BlockKind::Materials),
    row(BlockKind::BoundaryConditions),
    row(BlockKind::InitialConditions),
    row(BlockKind::QuadraturePoints),
    row(BlockKind::Output),
    row(BlockKind::Projection),
    row(BlockKind::NonlinearSolver),
];

/// True when normalized text is exactly the `[end]` terminator.
pub fn is_terminator(text: &str) -> bool {
    text == TERMINATOR
}

/// True when normalized text opens a bracketed section during span
/// validation: it contains both `[` and `]` and is not the terminator.
///
/// This intentionally matches unknown sub-block headers such as
/// `[gradient]` inside `[projection]`; nested sections count toward
/// bracket depth whether or not the scanner knows their names.
pub fn is_opener(text: &str) -> bool {
    !is_terminator(text) && text.contains('[') && text.contains(']')
}
