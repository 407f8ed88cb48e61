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

//! Well-formed deck fixtures.

/// Every block kind once, in canonical order, with realistic bodies.
pub const COMPLETE: &str = "\
// 2d tensile bar, linear elasticity
[mesh]
  type = asfem
  dim = 2
  xmax = 10.0
  ymax = 2.0
  nx = 100
  ny = 20
[end]

[dofs]
  name = ux uy
[end]

[elmts]
  [solids]
    type = mechanics
    dofs = ux uy
    mate = steel
    domain = alldomain
  [end]
[end]

[mates]
  [steel]
    type = linearelastic
    params = 210.0e3 0.3
  [end]
[end]

[bcs]
  [fix]
    type = dirichlet
    dof = ux
    boundary = left
    value = 0.0
  [end]
  [pull]
    type = dirichlet
    dof = ux
    boundary = right
    value = 0.1
  [end]
[end]

[ics]
  [rest]
    type = constant
    dof = ux
    params = 0.0
  [end]
[end]

[qpoint]
  type = gausslegendre
  order = 3
[end]

[output]
  type = vtu
  interval = 1
[end]

[projection]
  name = von_mises hydrostatic_stress
[end]

[nonlinearsolver]
  type = newtonls
  maxiters = 25
  r_abs_tol = 5.0e-7
  r_rel_tol = 1.0e-9
[end]
";

/// The smallest deck a run-mode scan accepts without errors.
pub const MINIMAL: &str = "\
[mesh]
  type = asfem
  dim = 1
  nx = 10
[end]
[dofs]
  name = u
[end]
[elmts]
  [poisson]
    type = diffusion
    dofs = u
  [end]
[end]
";

/// `[elmts]` with two sub-blocks; the block's span runs to the outermost
/// `[end]` on the last line.
pub const NESTED_SUBBLOCKS: &str = "\
[mesh]
  type = asfem
  dim = 2
  nx = 20
  ny = 20
[end]
[dofs]
  name = c mu
[end]
[elmts]
  [diffusion]
    type = cahnhilliard
    dofs = c mu
  [end]
  [mechanics]
    type = mechanics
    dofs = c
  [end]
[end]
";

/// Header matching survives comments, blank lines, indentation, and mixed
/// case.
pub const WITH_COMMENTS: &str = "\
// thermal benchmark
// generated deck, do not edit

  [ MESH ]
    type = asfem
    dim = 1
    nx = 50   // cells
  [end]

[DOFS]
  name = T
[End]

\t[Elmts]
  [heat]
    type = thermal
    dofs = T
  [end]
[END]
";

/// All well-formed fixtures as (name, deck text) pairs.
pub fn all() -> Vec<(&'static str, &'static str)> {
    vec![
        ("complete", COMPLETE),
        ("minimal", MINIMAL),
        ("nested_subblocks", NESTED_SUBBLOCKS),
        ("with_comments", WITH_COMMENTS),
    ]
}
