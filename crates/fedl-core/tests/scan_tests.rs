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

//! End-to-end scanning behavior over the shared deck fixtures.

use fedl_core::{
    check_deck, scan_deck, BlockKind, FedlErrorKind, ScanOptions, Severity, StructuralReader,
};
use fedl_test::fixtures::{decks, errors};
use fedl_test::{RecordingReader, SeedMeshReader};

fn validate_options() -> ScanOptions {
    ScanOptions {
        validate_only: true,
        ..ScanOptions::default()
    }
}

/// 1-based line of the first fixture line whose trimmed text equals `needle`.
fn line_of(deck: &str, needle: &str) -> usize {
    deck.lines()
        .position(|line| line.trim() == needle)
        .map(|idx| idx + 1)
        .expect("fixture contains the line")
}

// =============================================================================
// Recognition and dispatch
// =============================================================================

#[test]
fn test_complete_deck_dispatches_every_block_once() {
    let mut readers = RecordingReader::new();
    let (report, _) = scan_deck(
        decks::COMPLETE.as_bytes(),
        &ScanOptions::default(),
        &mut readers,
    )
    .unwrap();

    assert!(report.success());
    for kind in BlockKind::ALL {
        assert_eq!(readers.count(kind), 1, "{} dispatched once", kind);
        assert!(report.presence.satisfied(kind));
    }
}

#[test]
fn test_all_valid_fixtures_scan_cleanly() {
    for (name, deck) in fedl_test::fixtures::all() {
        let result = check_deck(deck.as_bytes(), &validate_options());
        let report = result.unwrap_or_else(|e| panic!("{} failed: {}", name, e));
        assert!(report.success(), "{} reported errors", name);
    }
}

#[test]
fn test_broken_fixtures_fail_with_expected_kind() {
    for (name, deck, expected) in errors::all() {
        let err = check_deck(deck.as_bytes(), &ScanOptions::default())
            .expect_err("broken fixture must fail");
        assert_eq!(err.kind, expected, "{}", name);
    }
}

#[test]
fn test_header_matching_survives_case_space_and_comments() {
    let mut readers = RecordingReader::new();
    let (report, _) = scan_deck(
        decks::WITH_COMMENTS.as_bytes(),
        &validate_options(),
        &mut readers,
    )
    .unwrap();

    assert!(report.presence.satisfied(BlockKind::Mesh));
    assert!(report.presence.satisfied(BlockKind::Dofs));
    assert!(report.presence.satisfied(BlockKind::Elements));
}

#[test]
fn test_longer_token_is_not_matched_as_shorter_keyword() {
    // "[outputextra]" must not satisfy [output]; the unknown block is
    // ignored wholesale and the output defaults kick in.
    let deck = "\
[mesh]\n  type = asfem\n[end]\n[dofs]\n  name = u\n[end]\n[outputextra]\n  type = vtu\n[end]\n";
    let mut readers = RecordingReader::new();
    let (report, config) =
        scan_deck(deck.as_bytes(), &ScanOptions::default(), &mut readers).unwrap();

    assert!(!report.presence.is_present(BlockKind::Output));
    assert!(!readers.was_invoked(BlockKind::Output));
    assert_eq!(config.output.file_base, "deck");
}

#[test]
fn test_stray_toplevel_lines_are_ignored() {
    // Unmatched content between blocks is skipped: bare values, unknown
    // bracketed tokens, even a stray [end].
    let deck = "\
stray = 1\n[end]\n[mesh]\n  type = asfem\n[end]\nnx = [3]\n[dofs]\n  name = u\n[end]\n";
    let report = check_deck(deck.as_bytes(), &validate_options()).unwrap();
    assert!(report.success());
}

// =============================================================================
// Span validation through the engine
// =============================================================================

#[test]
fn test_nested_subblocks_span_to_outermost_end() {
    let mut readers = RecordingReader::new();
    scan_deck(
        decks::NESTED_SUBBLOCKS.as_bytes(),
        &ScanOptions::default(),
        &mut readers,
    )
    .unwrap();

    let span = readers.span_of(BlockKind::Elements).unwrap();
    assert_eq!(span.header_line, line_of(decks::NESTED_SUBBLOCKS, "[elmts]"));
    assert_eq!(
        span.terminator_line,
        decks::NESTED_SUBBLOCKS.lines().count()
    );
    // Sub-blocks belong to the body; they are never dispatched themselves.
    assert_eq!(readers.count(BlockKind::Elements), 1);
}

#[test]
fn test_unterminated_block_reader_never_runs() {
    let mut readers = RecordingReader::new();
    let err = scan_deck(
        errors::UNTERMINATED_MESH.as_bytes(),
        &ScanOptions::default(),
        &mut readers,
    )
    .unwrap_err();

    assert_eq!(err.kind, FedlErrorKind::Unterminated);
    assert_eq!(err.line, 1);
    assert!(readers.calls().is_empty());
}

#[test]
fn test_unbalanced_nesting_blames_the_outer_header() {
    let err = check_deck(
        errors::UNBALANCED_NESTING.as_bytes(),
        &ScanOptions::default(),
    )
    .unwrap_err();
    assert_eq!(err.kind, FedlErrorKind::Unterminated);
    assert_eq!(err.line, line_of(errors::UNBALANCED_NESTING, "[elmts]"));
}

// =============================================================================
// Dependency ordering
// =============================================================================

#[test]
fn test_elmts_before_dofs_aborts_without_dispatch() {
    let mut readers = RecordingReader::new();
    let err = scan_deck(
        errors::ELMTS_BEFORE_DOFS.as_bytes(),
        &ScanOptions::default(),
        &mut readers,
    )
    .unwrap_err();

    assert_eq!(err.kind, FedlErrorKind::Dependency);
    assert_eq!(err.line, line_of(errors::ELMTS_BEFORE_DOFS, "[elmts]"));
    assert!(!readers.was_invoked(BlockKind::Elements));
    // The mesh before it was already dispatched.
    assert!(readers.was_invoked(BlockKind::Mesh));
}

#[test]
fn test_qpoint_before_mesh_aborts() {
    let err = check_deck(
        errors::QPOINT_BEFORE_MESH.as_bytes(),
        &ScanOptions::default(),
    )
    .unwrap_err();
    assert_eq!(err.kind, FedlErrorKind::Dependency);
    assert_eq!(err.line, 1);
}

#[test]
fn test_bcs_and_ics_require_dofs() {
    for header in ["[bcs]", "[ics]"] {
        let deck = format!("{}\n  type = dirichlet\n[end]\n", header);
        let err = check_deck(deck.as_bytes(), &ScanOptions::default()).unwrap_err();
        assert_eq!(err.kind, FedlErrorKind::Dependency, "{}", header);
        assert!(err.message.contains("[dofs]"));
    }
}

#[test]
fn test_dependency_on_failed_block_still_fails() {
    let deck = "\
[dofs]\n  name = u\n[end]\n[bcs]\n  type = dirichlet\n[end]\n";
    let mut readers = RecordingReader::new().fail_on(BlockKind::Dofs);
    let err = scan_deck(deck.as_bytes(), &ScanOptions::default(), &mut readers).unwrap_err();
    assert_eq!(err.kind, FedlErrorKind::Dependency);
}

// =============================================================================
// Malformed headers
// =============================================================================

#[test]
fn test_empty_bracket_pair_aborts_with_line() {
    let err = check_deck(
        errors::EMPTY_BRACKET_PAIR.as_bytes(),
        &ScanOptions::default(),
    )
    .unwrap_err();
    assert_eq!(err.kind, FedlErrorKind::MalformedHeader);
    assert_eq!(err.line, line_of(errors::EMPTY_BRACKET_PAIR, "[]"));
}

// =============================================================================
// Reader failure handling
// =============================================================================

#[test]
fn test_failed_materials_degrades_with_warning() {
    let mut readers = RecordingReader::new().fail_on(BlockKind::Materials);
    let (report, _) = scan_deck(
        decks::COMPLETE.as_bytes(),
        &ScanOptions::default(),
        &mut readers,
    )
    .unwrap();

    assert!(report.presence.is_present(BlockKind::Materials));
    assert!(!report.presence.satisfied(BlockKind::Materials));
    assert!(report
        .diagnostics
        .iter()
        .any(|d| d.severity() == Severity::Warning && d.message().contains("[mates]")));
    assert!(report.success());
}

#[test]
fn test_failed_ics_read_is_fatal() {
    let mut readers = RecordingReader::new().fail_on(BlockKind::InitialConditions);
    let err = scan_deck(
        decks::COMPLETE.as_bytes(),
        &ScanOptions::default(),
        &mut readers,
    )
    .unwrap_err();

    assert_eq!(err.kind, FedlErrorKind::Reader);
    assert_eq!(err.line, line_of(decks::COMPLETE, "[ics]"));
}

// =============================================================================
// Requirement tiers and modes
// =============================================================================

#[test]
fn test_empty_deck_two_errors_validating_three_running() {
    let validating = check_deck(b"", &validate_options()).unwrap();
    assert_eq!(validating.diagnostics.error_count(), 2);

    let running = check_deck(b"", &ScanOptions::default()).unwrap();
    assert_eq!(running.diagnostics.error_count(), 3);
}

#[test]
fn test_mesh_and_dofs_suffice_when_validating_only() {
    let deck = "[mesh]\n  type = asfem\n[end]\n[dofs]\n  name = u\n[end]\n";

    let validating = check_deck(deck.as_bytes(), &validate_options()).unwrap();
    assert!(validating.success());
    assert_eq!(validating.diagnostics.warning_count(), 0);

    let running = check_deck(deck.as_bytes(), &ScanOptions::default()).unwrap();
    assert!(!running.success());
    assert_eq!(running.diagnostics.error_count(), 1);
    assert!(running.diagnostics.warning_count() > 0);
}

#[test]
fn test_minimal_deck_runs_with_warnings_only() {
    let report = check_deck(decks::MINIMAL.as_bytes(), &ScanOptions::default()).unwrap();
    assert!(report.success());
    // mates, bcs, ics, qpoint, projection, output, nonlinearsolver
    assert_eq!(report.diagnostics.warning_count(), 7);
    assert_eq!(report.diagnostics.hint_count(), 1);
}

// =============================================================================
// Defaulting
// =============================================================================

#[test]
fn test_quadrature_defaults_derive_from_planted_mesh() {
    let mut readers = SeedMeshReader::new(2, 2);
    let (_, config) = scan_deck(
        decks::MINIMAL.as_bytes(),
        &ScanOptions::default(),
        &mut readers,
    )
    .unwrap();

    assert_eq!(config.quadrature.bulk_order, 3);
    assert_eq!(config.quadrature.boundary_order, 3);
    assert_eq!(config.quadrature.dim, 2);
    assert!(config.quadrature.points_ready());
}

#[test]
fn test_output_base_defaults_to_deck_stem() {
    let options = ScanOptions {
        source_name: "bench/plate-hole.fedl".to_string(),
        ..ScanOptions::default()
    };
    let mut readers = StructuralReader;
    let (_, config) = scan_deck(decks::MINIMAL.as_bytes(), &options, &mut readers).unwrap();
    assert_eq!(config.output.file_base, "plate-hole");
}

#[test]
fn test_validate_only_leaves_same_configuration_behind() {
    let mut validating = StructuralReader;
    let (_, validated) =
        scan_deck(decks::MINIMAL.as_bytes(), &validate_options(), &mut validating).unwrap();

    let mut running = StructuralReader;
    let (_, ran) = scan_deck(
        decks::MINIMAL.as_bytes(),
        &ScanOptions {
            validate_only: false,
            ..validate_options()
        },
        &mut running,
    )
    .unwrap();

    assert_eq!(validated, ran);
}

#[test]
fn test_projection_hint_present_in_both_modes() {
    for options in [validate_options(), ScanOptions::default()] {
        let report = check_deck(decks::MINIMAL.as_bytes(), &options).unwrap();
        let hints: Vec<&str> = report
            .diagnostics
            .iter()
            .filter(|d| d.severity() == Severity::Hint)
            .map(|d| d.message())
            .collect();
        assert_eq!(hints, vec!["projection: no quantities registered"]);
    }
}

// =============================================================================
// Determinism
// =============================================================================

#[test]
fn test_repeated_scans_agree() {
    for (name, deck) in fedl_test::fixtures::all() {
        let first = check_deck(deck.as_bytes(), &ScanOptions::default()).unwrap();
        let second = check_deck(deck.as_bytes(), &ScanOptions::default()).unwrap();
        assert_eq!(first, second, "{}", name);
    }
    for (name, deck, _) in errors::all() {
        let first = check_deck(deck.as_bytes(), &ScanOptions::default()).unwrap_err();
        let second = check_deck(deck.as_bytes(), &ScanOptions::default()).unwrap_err();
        assert_eq!(first.kind, second.kind, "{}", name);
        assert_eq!(first.line, second.line, "{}", name);
    }
}
