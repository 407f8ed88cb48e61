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

//! Broken deck fixtures, each carrying one structural fault.

use fedl_core::FedlErrorKind;

/// `[mesh]` never closed; the deck ends mid-block.
pub const UNTERMINATED_MESH: &str = "\
[mesh]
  type = asfem
  dim = 2
";

/// Sub-block closed, outer block not.
pub const UNBALANCED_NESTING: &str = "\
[mesh]
  type = asfem
[end]
[dofs]
  name = u
[end]
[elmts]
  [inner]
    type = diffusion
  [end]
";

/// `[elmts]` appears before `[dofs]`.
pub const ELMTS_BEFORE_DOFS: &str = "\
[mesh]
  type = asfem
[end]
[elmts]
  [e]
    type = mechanics
  [end]
[end]
[dofs]
  name = u
[end]
";

/// `[qpoint]` appears before `[mesh]`.
pub const QPOINT_BEFORE_MESH: &str = "\
[qpoint]
  type = gausslegendre
[end]
[mesh]
  type = asfem
[end]
";

/// An empty bracket pair where a header was expected.
pub const EMPTY_BRACKET_PAIR: &str = "\
[mesh]
  type = asfem
[end]
[]
";

/// All broken fixtures as (name, deck text, expected error kind) triples.
pub fn all() -> Vec<(&'static str, &'static str, FedlErrorKind)> {
    vec![
        (
            "unterminated_mesh",
            UNTERMINATED_MESH,
            FedlErrorKind::Unterminated,
        ),
        (
            "unbalanced_nesting",
            UNBALANCED_NESTING,
            FedlErrorKind::Unterminated,
        ),
        (
            "elmts_before_dofs",
            ELMTS_BEFORE_DOFS,
            FedlErrorKind::Dependency,
        ),
        (
            "qpoint_before_mesh",
            QPOINT_BEFORE_MESH,
            FedlErrorKind::Dependency,
        ),
        (
            "empty_bracket_pair",
            EMPTY_BRACKET_PAIR,
            FedlErrorKind::MalformedHeader,
        ),
    ]
}
