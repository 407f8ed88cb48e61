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

//! Numerical integration options populated from the `[qpoint]` block.
//!
//! Whether or not the block appears, the post-scan policy finalizes this
//! configuration against the mesh: absent, the rule falls back to
//! Gauss-Legendre with both accuracy orders set to the mesh interpolation
//! order plus one; present or absent, the dimensionality is taken from the
//! mesh and the point set is marked built.

use super::mesh::MeshConfig;

/// The quadrature rule family.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum QuadratureRule {
    /// Gauss-Legendre integration.
    #[default]
    GaussLegendre,
    /// Gauss-Lobatto integration, including the cell end points.
    GaussLobatto,
}

impl std::fmt::Display for QuadratureRule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            QuadratureRule::GaussLegendre => "gauss-legendre",
            QuadratureRule::GaussLobatto => "gauss-lobatto",
        };
        write!(f, "{}", name)
    }
}

/// Integration rule, accuracy orders, and point-set state.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct QuadratureConfig {
    /// Rule family.
    pub rule: QuadratureRule,
    /// Spatial dimension; mirrors the mesh after the post-scan phase.
    pub dim: usize,
    /// Accuracy order for bulk cells.
    pub bulk_order: usize,
    /// Accuracy order for boundary cells.
    pub boundary_order: usize,
    /// Number of cells the point set was sized for.
    cell_count: usize,
    /// True once the point set has been built against a mesh.
    points_ready: bool,
}

impl Default for QuadratureConfig {
    fn default() -> Self {
        QuadratureConfig {
            rule: QuadratureRule::GaussLegendre,
            dim: 1,
            bulk_order: 2,
            boundary_order: 2,
            cell_count: 0,
            points_ready: false,
        }
    }
}

impl QuadratureConfig {
    /// Select the rule family.
    pub fn set_rule(&mut self, rule: QuadratureRule) {
        self.rule = rule;
    }

    /// Set the spatial dimension.
    pub fn set_dim(&mut self, dim: usize) {
        self.dim = dim;
    }

    /// Set the bulk accuracy order.
    pub fn set_bulk_order(&mut self, order: usize) {
        self.bulk_order = order;
    }

    /// Set the boundary accuracy order.
    pub fn set_boundary_order(&mut self, order: usize) {
        self.boundary_order = order;
    }

    /// Build the point set for `mesh`.
    ///
    /// The coordinates and weights themselves are produced downstream by
    /// the integration subsystem; this records that rule, orders, and mesh
    /// are consistent and sized.
    pub fn build_points(&mut self, mesh: &MeshConfig) {
        self.cell_count = mesh.cell_count();
        self.points_ready = true;
    }

    /// True once [`build_points`](Self::build_points) has run.
    pub fn points_ready(&self) -> bool {
        self.points_ready
    }

    /// Number of cells the point set was sized for.
    pub fn cell_count(&self) -> usize {
        self.cell_count
    }
}
