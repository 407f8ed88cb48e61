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

//! Unknown-field registry populated from the `[dofs]` block.

/// The named unknown fields of the analysis, in registration order.
///
/// Degree-of-freedom ids are 1-based, following the usual finite element
/// convention.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct DofConfig {
    names: Vec<String>,
}

impl DofConfig {
    /// An empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register an unknown field. Re-registering an existing name is a
    /// no-op; registration order fixes the id.
    pub fn add_dof(&mut self, name: impl Into<String>) {
        let name = name.into();
        if !self.names.iter().any(|n| *n == name) {
            self.names.push(name);
        }
    }

    /// Number of registered fields.
    pub fn count(&self) -> usize {
        self.names.len()
    }

    /// True when `name` is registered.
    pub fn has(&self, name: &str) -> bool {
        self.names.iter().any(|n| n == name)
    }

    /// 1-based id of `name`, if registered.
    pub fn id_of(&self, name: &str) -> Option<usize> {
        self.names.iter().position(|n| n == name).map(|i| i + 1)
    }

    /// Registered names in id order.
    pub fn names(&self) -> &[String] {
        &self.names
    }
}
