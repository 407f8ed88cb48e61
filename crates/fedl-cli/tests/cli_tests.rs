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

//! Comprehensive CLI integration tests

use assert_cmd::Command;
use fedl_test::fixtures::{decks, errors};
use predicates::prelude::*;
use std::fs;
use tempfile::NamedTempFile;

// Test helper to create a FEDL command
fn fedl_cmd() -> Command {
    Command::cargo_bin("fedl").expect("Failed to find fedl binary")
}

// Test helper to create a temporary file with content
fn create_temp_file(content: &str, suffix: &str) -> NamedTempFile {
    let file = tempfile::Builder::new()
        .suffix(suffix)
        .tempfile()
        .expect("Failed to create temp file");
    fs::write(file.path(), content).expect("Failed to write temp file");
    file
}

// A structurally complete deck fragment without a physics setup.
const FRAGMENT: &str = "\
[mesh]
dim = 2
[end]
[dofs]
name = u
[end]
";

// ===== Help and Version Tests =====

#[test]
fn test_help_output() {
    fedl_cmd()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "FEDL - Finite Element Deck Language toolkit",
        ))
        .stdout(predicate::str::contains("Usage:"));
}

#[test]
fn test_version_output() {
    fedl_cmd()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("fedl"));
}

#[test]
fn test_no_subcommand_fails() {
    fedl_cmd().assert().failure();
}

// ===== Check Command Tests =====

#[test]
fn test_check_complete_deck() {
    let file = create_temp_file(decks::COMPLETE, ".fedl");

    fedl_cmd()
        .arg("check")
        .arg(file.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("✓"))
        .stdout(predicate::str::contains("Blocks: 10 of 10 satisfied"));
}

#[test]
fn test_check_minimal_deck_warns_but_passes() {
    let file = create_temp_file(decks::MINIMAL, ".fedl");

    fedl_cmd()
        .arg("check")
        .arg(file.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("✓"))
        .stdout(predicate::str::contains("warning"));
}

#[test]
fn test_check_unterminated_deck_fails() {
    let file = create_temp_file(errors::UNTERMINATED_MESH, ".fedl");

    fedl_cmd()
        .arg("check")
        .arg(file.path())
        .assert()
        .failure()
        .stdout(predicate::str::contains("✗"))
        .stderr(predicate::str::contains("Error:"));
}

#[test]
fn test_check_dependency_violation_fails() {
    let file = create_temp_file(errors::ELMTS_BEFORE_DOFS, ".fedl");

    fedl_cmd()
        .arg("check")
        .arg(file.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("[dofs]"));
}

#[test]
fn test_check_missing_file() {
    fedl_cmd()
        .arg("check")
        .arg("/nonexistent/deck.fedl")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to"));
}

#[test]
fn test_check_fragment_fails_in_run_mode() {
    let file = create_temp_file(FRAGMENT, ".fedl");

    fedl_cmd()
        .arg("check")
        .arg(file.path())
        .assert()
        .failure()
        .stdout(predicate::str::contains("[elmts]"));
}

#[test]
fn test_check_structure_only_accepts_fragment() {
    let file = create_temp_file(FRAGMENT, ".fedl");

    fedl_cmd()
        .arg("check")
        .arg(file.path())
        .arg("--structure-only")
        .assert()
        .success()
        .stdout(predicate::str::contains("structure only"));
}

#[test]
fn test_check_verbose_reveals_hints() {
    let file = create_temp_file(decks::COMPLETE, ".fedl");

    // Hints are hidden by default and shown with --verbose.
    fedl_cmd()
        .arg("check")
        .arg(file.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("hint").not());

    fedl_cmd()
        .arg("check")
        .arg(file.path())
        .arg("--verbose")
        .assert()
        .success()
        .stdout(predicate::str::contains("hint"));
}

#[test]
fn test_check_respects_file_size_env() {
    let file = create_temp_file(decks::COMPLETE, ".fedl");

    fedl_cmd()
        .arg("check")
        .arg(file.path())
        .env("FEDL_MAX_FILE_SIZE", "10")
        .assert()
        .failure()
        .stderr(predicate::str::contains("too large"));
}

// ===== Inspect Command Tests =====

#[test]
fn test_inspect_text_output() {
    let file = create_temp_file(decks::COMPLETE, ".fedl");

    fedl_cmd()
        .arg("inspect")
        .arg(file.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("FEDL Deck"))
        .stdout(predicate::str::contains("Source:"))
        .stdout(predicate::str::contains("[mesh]"))
        .stdout(predicate::str::contains("[nonlinearsolver]"));
}

#[test]
fn test_inspect_json_output_parses() {
    let file = create_temp_file(decks::MINIMAL, ".fedl");

    let output = fedl_cmd()
        .arg("inspect")
        .arg(file.path())
        .arg("--json")
        .output()
        .expect("Failed to run fedl inspect");
    assert!(output.status.success());

    let stdout = String::from_utf8(output.stdout).expect("Non-UTF-8 inspect output");
    let value: serde_json::Value =
        serde_json::from_str(&stdout).expect("inspect --json did not emit valid JSON");

    let blocks = value["blocks"].as_array().expect("blocks array");
    assert_eq!(blocks.len(), 3);
    assert_eq!(blocks[0]["keyword"], "[mesh]");
    assert!(value["absent"].as_array().expect("absent array").len() == 7);
}

#[test]
fn test_inspect_writes_output_file() {
    let file = create_temp_file(decks::COMPLETE, ".fedl");
    let out = NamedTempFile::new().expect("Failed to create temp file");

    fedl_cmd()
        .arg("inspect")
        .arg(file.path())
        .arg("--output")
        .arg(out.path())
        .assert()
        .success();

    let written = fs::read_to_string(out.path()).expect("Failed to read output file");
    assert!(written.contains("[mesh]"));
    assert!(written.contains("FEDL Deck"));
}

#[test]
fn test_inspect_fragment_lists_absent_blocks() {
    let fragment = "[output]\nfile_format = vtu\n[end]\n";
    let file = create_temp_file(fragment, ".fedl");

    // Inspection is structural; a deck with no physics setup still inspects.
    fedl_cmd()
        .arg("inspect")
        .arg(file.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("[output]"))
        .stdout(predicate::str::contains("Absent:"));
}

#[test]
fn test_inspect_broken_deck_fails() {
    let file = create_temp_file(errors::UNBALANCED_NESTING, ".fedl");

    fedl_cmd()
        .arg("inspect")
        .arg(file.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("Scan error"));
}

// ===== Keywords Command Tests =====

#[test]
fn test_keywords_lists_vocabulary() {
    fedl_cmd()
        .arg("keywords")
        .assert()
        .success()
        .stdout(predicate::str::contains("[mesh]"))
        .stdout(predicate::str::contains("[qpoint]"))
        .stdout(predicate::str::contains("[nonlinearsolver]"))
        .stdout(predicate::str::contains("[end]"));
}

#[test]
fn test_keywords_shows_requirements() {
    fedl_cmd()
        .arg("keywords")
        .assert()
        .success()
        .stdout(predicate::str::contains("requires [dofs]"))
        .stdout(predicate::str::contains("requires [mesh]"));
}

// ===== Batch Check Tests =====

#[test]
fn test_batch_check_multiple_valid_decks() {
    let a = create_temp_file(decks::COMPLETE, ".fedl");
    let b = create_temp_file(decks::MINIMAL, ".fedl");

    fedl_cmd()
        .arg("batch-check")
        .arg(a.path())
        .arg(b.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Succeeded:"));
}

#[test]
fn test_batch_check_reports_failures() {
    let good = create_temp_file(decks::COMPLETE, ".fedl");
    let bad = create_temp_file(errors::UNTERMINATED_MESH, ".fedl");

    fedl_cmd()
        .arg("batch-check")
        .arg(good.path())
        .arg(bad.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("Check failures:"))
        .stderr(predicate::str::contains("1 of 2 decks failed"));
}

#[test]
fn test_batch_check_structure_only() {
    let a = create_temp_file(FRAGMENT, ".fedl");
    let b = create_temp_file(decks::MINIMAL, ".fedl");

    fedl_cmd()
        .arg("batch-check")
        .arg(a.path())
        .arg(b.path())
        .arg("--structure-only")
        .assert()
        .success();
}

#[test]
fn test_batch_check_parallel_flag() {
    let a = create_temp_file(decks::COMPLETE, ".fedl");
    let b = create_temp_file(decks::WITH_COMMENTS, ".fedl");

    fedl_cmd()
        .arg("batch-check")
        .arg(a.path())
        .arg(b.path())
        .arg("--parallel")
        .assert()
        .success();
}

// ===== Completion Command Tests =====

#[test]
fn test_completion_bash() {
    fedl_cmd()
        .arg("completion")
        .arg("bash")
        .assert()
        .success()
        .stdout(predicate::str::contains("fedl"));
}

#[test]
fn test_completion_zsh() {
    fedl_cmd()
        .arg("completion")
        .arg("zsh")
        .assert()
        .success()
        .stdout(predicate::str::contains("fedl"));
}

#[test]
fn test_completion_invalid_shell() {
    fedl_cmd()
        .arg("completion")
        .arg("tcsh")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unsupported shell"));
}

#[test]
fn test_completion_install_instructions() {
    fedl_cmd()
        .arg("completion")
        .arg("bash")
        .arg("--install")
        .assert()
        .success()
        .stdout(predicate::str::contains("Bash completion installation"));
}
