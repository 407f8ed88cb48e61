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

//! Configuration objects populated from deck blocks.
//!
//! The scanner owns none of these. The caller constructs a
//! [`SimulationConfig`], the engine hands mutable references to body
//! readers and to the defaulting policy, and the populated bundle stays
//! with the caller for the downstream analysis stages. Body readers fill
//! in what their block says; the policy fills in what an absent block
//! would have said.

mod conditions;
mod dofs;
mod elements;
mod materials;
mod mesh;
mod output;
mod projection;
mod quadrature;
mod solver;

pub use conditions::{BcConfig, BcSpec, IcConfig, IcSpec};
pub use dofs::DofConfig;
pub use elements::{ElementConfig, ElementSpec};
pub use materials::{MaterialConfig, MaterialSpec};
pub use mesh::{MeshConfig, MeshKind};
pub use output::{OutputConfig, OutputFormat};
pub use projection::ProjectionConfig;
pub use quadrature::{QuadratureConfig, QuadratureRule};
pub use solver::{SolverConfig, SolverMethod};

/// One configuration handle per block kind, bundled for a scan pass.
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct SimulationConfig {
    /// `[mesh]` target.
    pub mesh: MeshConfig,
    /// `[dofs]` target.
    pub dofs: DofConfig,
    /// `[elmts]` target.
    pub elements: ElementConfig,
    /// `[mates]` target.
    pub materials: MaterialConfig,
    /// `[bcs]` target.
    pub bcs: BcConfig,
    /// `[ics]` target.
    pub ics: IcConfig,
    /// `[qpoint]` target.
    pub quadrature: QuadratureConfig,
    /// `[projection]` target.
    pub projection: ProjectionConfig,
    /// `[output]` target.
    pub output: OutputConfig,
    /// `[nonlinearsolver]` target.
    pub solver: SolverConfig,
}

impl SimulationConfig {
    /// A bundle with every block at its built-in defaults.
    pub fn new() -> Self {
        Self::default()
    }
}
