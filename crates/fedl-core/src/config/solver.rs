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

//! Nonlinear solution options populated from the `[nonlinearsolver]` block.

/// Nonlinear iteration scheme.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum SolverMethod {
    /// Full Newton-Raphson.
    NewtonRaphson,
    /// Damped Newton with line search. The default when no
    /// `[nonlinearsolver]` block appears.
    #[default]
    NewtonLineSearch,
}

impl std::fmt::Display for SolverMethod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            SolverMethod::NewtonRaphson => "newton-raphson",
            SolverMethod::NewtonLineSearch => "newton with line search",
        };
        write!(f, "{}", name)
    }
}

/// Iteration scheme and convergence controls.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct SolverConfig {
    /// Iteration scheme.
    pub method: SolverMethod,
    /// Iteration cap per solve.
    pub max_iterations: usize,
    /// Absolute residual tolerance.
    pub abs_tolerance: f64,
    /// Relative residual tolerance.
    pub rel_tolerance: f64,
}

impl Default for SolverConfig {
    fn default() -> Self {
        SolverConfig {
            method: SolverMethod::NewtonLineSearch,
            max_iterations: 25,
            abs_tolerance: 5.0e-7,
            rel_tolerance: 1.0e-9,
        }
    }
}
