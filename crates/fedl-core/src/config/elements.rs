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

//! Element formulations populated from the `[elmts]` block.

/// One element formulation: a named sub-block of `[elmts]`.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct ElementSpec {
    /// Sub-block name.
    pub name: String,
    /// Physics model, e.g. `mechanics` or `diffusion`.
    pub model: String,
    /// Names of the unknown fields this formulation drives.
    pub dofs: Vec<String>,
    /// Mesh domain the formulation applies to.
    pub domain: String,
}

impl ElementSpec {
    /// A formulation over the whole domain with no fields attached yet.
    pub fn new(name: impl Into<String>, model: impl Into<String>) -> Self {
        ElementSpec {
            name: name.into(),
            model: model.into(),
            dofs: Vec::new(),
            domain: "alldomain".to_string(),
        }
    }

    /// Attach the unknown fields this formulation drives.
    pub fn with_dofs(mut self, dofs: Vec<String>) -> Self {
        self.dofs = dofs;
        self
    }

    /// Restrict the formulation to a named domain.
    pub fn with_domain(mut self, domain: impl Into<String>) -> Self {
        self.domain = domain.into();
        self
    }
}

/// All element formulations of the analysis.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct ElementConfig {
    specs: Vec<ElementSpec>,
}

impl ElementConfig {
    /// An empty set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a formulation.
    pub fn add(&mut self, spec: ElementSpec) {
        self.specs.push(spec);
    }

    /// Number of formulations.
    pub fn count(&self) -> usize {
        self.specs.len()
    }

    /// True when no formulation is registered.
    pub fn is_empty(&self) -> bool {
        self.specs.is_empty()
    }

    /// Formulations in deck order.
    pub fn specs(&self) -> &[ElementSpec] {
        &self.specs
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_spec_builder() {
        let spec = ElementSpec::new("solids", "mechanics")
            .with_dofs(vec!["u".to_string(), "v".to_string()])
            .with_domain("matrix");
        assert_eq!(spec.name, "solids");
        assert_eq!(spec.model, "mechanics");
        assert_eq!(spec.dofs.len(), 2);
        assert_eq!(spec.domain, "matrix");
    }

    #[test]
    fn test_default_domain_is_whole_domain() {
        let spec = ElementSpec::new("poisson", "diffusion");
        assert_eq!(spec.domain, "alldomain");
        assert!(spec.dofs.is_empty());
    }

    #[test]
    fn test_config_collects_in_order() {
        let mut config = ElementConfig::new();
        assert!(config.is_empty());
        config.add(ElementSpec::new("a", "mechanics"));
        config.add(ElementSpec::new("b", "thermal"));
        assert_eq!(config.count(), 2);
        assert_eq!(config.specs()[1].name, "b");
    }
}
