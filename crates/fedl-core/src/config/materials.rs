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

//! Material property sets populated from the `[mates]` block.
//!
//! When the block is absent the set stays empty and element formulations
//! fall back to their built-in property values; the defaulting policy
//! reports that as a warning, not an error.

/// One named material with its numeric parameters.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct MaterialSpec {
    /// Material name referenced by element formulations.
    pub name: String,
    /// Constitutive model, e.g. `linearelastic`.
    pub model: String,
    /// Model parameters in declaration order.
    pub params: Vec<f64>,
}

impl MaterialSpec {
    /// A material with no parameters.
    pub fn new(name: impl Into<String>, model: impl Into<String>) -> Self {
        MaterialSpec {
            name: name.into(),
            model: model.into(),
            params: Vec::new(),
        }
    }

    /// Attach model parameters.
    pub fn with_params(mut self, params: Vec<f64>) -> Self {
        self.params = params;
        self
    }
}

/// All material property sets of the analysis.
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct MaterialConfig {
    specs: Vec<MaterialSpec>,
}

impl MaterialConfig {
    /// An empty set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a material.
    pub fn add(&mut self, spec: MaterialSpec) {
        self.specs.push(spec);
    }

    /// Number of materials.
    pub fn count(&self) -> usize {
        self.specs.len()
    }

    /// True when no material is registered.
    pub fn is_empty(&self) -> bool {
        self.specs.is_empty()
    }

    /// Look up a material by name.
    pub fn find(&self, name: &str) -> Option<&MaterialSpec> {
        self.specs.iter().find(|spec| spec.name == name)
    }

    /// Materials in deck order.
    pub fn specs(&self) -> &[MaterialSpec] {
        &self.specs
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_material_with_params() {
        let mat = MaterialSpec::new("steel", "linearelastic").with_params(vec![210.0e9, 0.3]);
        assert_eq!(mat.params.len(), 2);
        assert_eq!(mat.params[0], 210.0e9);
    }

    #[test]
    fn test_find_by_name() {
        let mut config = MaterialConfig::new();
        config.add(MaterialSpec::new("steel", "linearelastic"));
        config.add(MaterialSpec::new("rubber", "neohookean"));
        assert_eq!(config.count(), 2);
        assert_eq!(config.find("rubber").unwrap().model, "neohookean");
        assert!(config.find("wood").is_none());
    }
}
