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

//! Nodal projection quantities populated from the `[projection]` block.

/// Quantities projected from quadrature points to mesh nodes for output.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct ProjectionConfig {
    quantities: Vec<String>,
}

impl ProjectionConfig {
    /// An empty quantity set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a quantity to project. Duplicates are kept; the projection
    /// stage deduplicates against its own registry.
    pub fn add_quantity(&mut self, name: impl Into<String>) {
        self.quantities.push(name.into());
    }

    /// Number of registered quantities.
    pub fn count(&self) -> usize {
        self.quantities.len()
    }

    /// Registered quantities in deck order.
    pub fn quantities(&self) -> &[String] {
        &self.quantities
    }

    /// One-line summary for scan reporting. Emitted after every scan, with
    /// the same wording whether the block was present or absent.
    pub fn summary(&self) -> String {
        if self.quantities.is_empty() {
            "projection: no quantities registered".to_string()
        } else {
            format!(
                "projection: {} quantities ({})",
                self.quantities.len(),
                self.quantities.join(", ")
            )
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_summary_when_empty() {
        let projection = ProjectionConfig::new();
        assert_eq!(projection.summary(), "projection: no quantities registered");
    }

    #[test]
    fn test_summary_lists_quantities() {
        let mut projection = ProjectionConfig::new();
        projection.add_quantity("von_mises");
        projection.add_quantity("hydrostatic_stress");
        assert_eq!(projection.count(), 2);
        assert_eq!(
            projection.summary(),
            "projection: 2 quantities (von_mises, hydrostatic_stress)"
        );
    }
}
