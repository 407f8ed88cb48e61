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

//! Boundary and initial conditions from the `[bcs]` and `[ics]` blocks.
//!
//! Both refer to unknown fields by name, which is why their blocks may not
//! appear before `[dofs]`. Absence of either block is legal; the analysis
//! then runs unconstrained or from a zero state.

/// One boundary condition.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct BcSpec {
    /// Condition type, e.g. `dirichlet` or `neumann`.
    pub kind: String,
    /// Constrained unknown field.
    pub dof: String,
    /// Boundary name the condition applies to.
    pub boundary: String,
    /// Prescribed value.
    pub value: f64,
}

impl BcSpec {
    /// Create a boundary condition.
    pub fn new(
        kind: impl Into<String>,
        dof: impl Into<String>,
        boundary: impl Into<String>,
        value: f64,
    ) -> Self {
        BcSpec {
            kind: kind.into(),
            dof: dof.into(),
            boundary: boundary.into(),
            value,
        }
    }
}

/// Boundary conditions in deck order.
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct BcConfig {
    specs: Vec<BcSpec>,
}

impl BcConfig {
    /// An empty set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a boundary condition.
    pub fn add(&mut self, spec: BcSpec) {
        self.specs.push(spec);
    }

    /// Number of conditions.
    pub fn count(&self) -> usize {
        self.specs.len()
    }

    /// Conditions in deck order.
    pub fn specs(&self) -> &[BcSpec] {
        &self.specs
    }
}

/// One initial condition.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct IcSpec {
    /// Condition type, e.g. `constant` or `random`.
    pub kind: String,
    /// Initialized unknown field.
    pub dof: String,
    /// Domain the condition applies to.
    pub domain: String,
    /// Type-specific parameters.
    pub params: Vec<f64>,
}

impl IcSpec {
    /// Create an initial condition over the whole domain.
    pub fn new(kind: impl Into<String>, dof: impl Into<String>) -> Self {
        IcSpec {
            kind: kind.into(),
            dof: dof.into(),
            domain: "alldomain".to_string(),
            params: Vec::new(),
        }
    }

    /// Attach type-specific parameters.
    pub fn with_params(mut self, params: Vec<f64>) -> Self {
        self.params = params;
        self
    }

    /// Restrict the condition to a named domain.
    pub fn with_domain(mut self, domain: impl Into<String>) -> Self {
        self.domain = domain.into();
        self
    }
}

/// Initial conditions in deck order.
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct IcConfig {
    specs: Vec<IcSpec>,
}

impl IcConfig {
    /// An empty set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an initial condition.
    pub fn add(&mut self, spec: IcSpec) {
        self.specs.push(spec);
    }

    /// Number of conditions.
    pub fn count(&self) -> usize {
        self.specs.len()
    }

    /// Conditions in deck order.
    pub fn specs(&self) -> &[IcSpec] {
        &self.specs
    }
}
