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

//! Post-scan requirement checks and defaulting.
//!
//! Runs once after the scan pass, in the fixed order of the keyword table.
//! Requirements come in three tiers:
//!
//! - mesh and unknown fields are demanded in every mode;
//! - element formulations are demanded only in run mode;
//! - every other absence is at most a warning, and warnings are only
//!   emitted in run mode.
//!
//! Defaults are applied in both modes, so the configuration a
//! validate-only pass leaves behind matches a run-mode pass over the same
//! deck.

use crate::config::{QuadratureRule, SimulationConfig};
use crate::diagnostics::Diagnostics;
use crate::keyword::BlockKind;
use crate::presence::PresenceRecord;
use crate::scanner::ScanOptions;

pub(crate) fn apply_defaults(
    presence: &PresenceRecord,
    options: &ScanOptions,
    config: &mut SimulationConfig,
    diagnostics: &mut Diagnostics,
) {
    let run_mode = !options.validate_only;

    if !presence.satisfied(BlockKind::Mesh) {
        diagnostics.error("no [mesh] block found; finite element analysis requires a mesh");
    }
    if !presence.satisfied(BlockKind::Dofs) {
        diagnostics.error("no [dofs] block found; at least one unknown field must be defined");
    }
    if !presence.satisfied(BlockKind::Elements) && run_mode {
        diagnostics
            .error("no [elmts] block found; at least one element formulation must be defined");
    }
    if !presence.satisfied(BlockKind::Materials) && run_mode {
        diagnostics.warning(
            "no [mates] block found; element formulations fall back to built-in property values",
        );
    }
    if !presence.satisfied(BlockKind::BoundaryConditions) && run_mode {
        diagnostics.warning("no [bcs] block found; no boundary conditions will be applied");
    }
    if !presence.satisfied(BlockKind::InitialConditions) && run_mode {
        diagnostics.warning("no [ics] block found; no initial conditions will be applied");
    }

    if !presence.satisfied(BlockKind::QuadraturePoints) {
        if run_mode {
            diagnostics
                .warning("no [qpoint] block found; default gauss-legendre integration is used");
        }
        config.quadrature.set_rule(QuadratureRule::GaussLegendre);
        config.quadrature.set_bulk_order(config.mesh.order + 1);
        config.quadrature.set_boundary_order(config.mesh.order + 1);
    }
    // Present or absent, the point set is finalized against the mesh.
    config.quadrature.set_dim(config.mesh.dim);
    config.quadrature.build_points(&config.mesh);

    if !presence.satisfied(BlockKind::Projection) && run_mode {
        diagnostics.warning("no [projection] block found; the default projection set is used");
    }
    // Same summary in the present and absent branches; presence is not
    // observable through this diagnostic.
    diagnostics.hint(config.projection.summary());

    if !presence.satisfied(BlockKind::Output) {
        if run_mode {
            diagnostics.warning("no [output] block found; default output options are used");
        }
        config.output.init_from_source(&options.source_name);
    }

    if !presence.satisfied(BlockKind::NonlinearSolver) && run_mode {
        diagnostics.warning(
            "no [nonlinearsolver] block found; newton with line search is used by default",
        );
    }
}
