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

//! Mesh configuration populated from the `[mesh]` block.

/// How the mesh is obtained.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum MeshKind {
    /// Structured grid built by the internal generator.
    #[default]
    Structured,
    /// Imported from an external mesh file.
    Imported,
}

/// Geometry and discretization of the analysis domain.
///
/// The quadrature defaulting policy reads `dim` and `order` from here, so
/// a `[mesh]` body reader must have populated them before the post-scan
/// phase runs. The built-in defaults describe a single linear cell on the
/// unit line.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct MeshConfig {
    /// Where the mesh comes from.
    pub kind: MeshKind,
    /// Spatial dimension, 1 to 3.
    pub dim: usize,
    /// Interpolation order of the bulk mesh.
    pub order: usize,
    /// Cell count along x.
    pub nx: usize,
    /// Cell count along y; 0 when `dim < 2`.
    pub ny: usize,
    /// Cell count along z; 0 when `dim < 3`.
    pub nz: usize,
    /// Domain extent along x.
    pub xmin: f64,
    /// Domain extent along x.
    pub xmax: f64,
    /// Domain extent along y.
    pub ymin: f64,
    /// Domain extent along y.
    pub ymax: f64,
    /// Domain extent along z.
    pub zmin: f64,
    /// Domain extent along z.
    pub zmax: f64,
}

impl Default for MeshConfig {
    fn default() -> Self {
        MeshConfig {
            kind: MeshKind::Structured,
            dim: 1,
            order: 1,
            nx: 1,
            ny: 0,
            nz: 0,
            xmin: 0.0,
            xmax: 1.0,
            ymin: 0.0,
            ymax: 1.0,
            zmin: 0.0,
            zmax: 1.0,
        }
    }
}

impl MeshConfig {
    /// Total number of bulk cells; unused axes count as one layer.
    pub fn cell_count(&self) -> usize {
        self.nx * self.ny.max(1) * self.nz.max(1)
    }
}
