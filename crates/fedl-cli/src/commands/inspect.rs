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

//! Inspect command - FEDL deck layout visualization

use super::{read_file, write_output};
use fedl_core::{
    scan_deck, skip_block, BlockKind, BlockReader, BlockSpan, DeckStream, ScanOptions, ScanReport,
};
use fedl_core::config::{
    BcConfig, DofConfig, ElementConfig, IcConfig, MaterialConfig, MeshConfig, OutputConfig,
    ProjectionConfig, QuadratureConfig, SolverConfig,
};
use std::fmt::Write as _;

/// Reader that records where each block sits in the deck.
///
/// Bodies are skipped, not interpreted; inspection reports deck layout,
/// not deck content.
#[derive(Debug, Default)]
struct LayoutReader {
    spans: Vec<BlockSpan>,
}

impl LayoutReader {
    fn record(&mut self, stream: &mut DeckStream, span: BlockSpan) -> bool {
        self.spans.push(span);
        skip_block(stream, span);
        true
    }
}

impl BlockReader for LayoutReader {
    fn read_mesh(&mut self, stream: &mut DeckStream, span: BlockSpan, _: &mut MeshConfig) -> bool {
        self.record(stream, span)
    }

    fn read_dofs(&mut self, stream: &mut DeckStream, span: BlockSpan, _: &mut DofConfig) -> bool {
        self.record(stream, span)
    }

    fn read_elements(
        &mut self,
        stream: &mut DeckStream,
        span: BlockSpan,
        _: &mut ElementConfig,
        _: &DofConfig,
    ) -> bool {
        self.record(stream, span)
    }

    fn read_materials(
        &mut self,
        stream: &mut DeckStream,
        span: BlockSpan,
        _: &mut MaterialConfig,
    ) -> bool {
        self.record(stream, span)
    }

    fn read_boundary_conditions(
        &mut self,
        stream: &mut DeckStream,
        span: BlockSpan,
        _: &mut BcConfig,
        _: &DofConfig,
    ) -> bool {
        self.record(stream, span)
    }

    fn read_initial_conditions(
        &mut self,
        stream: &mut DeckStream,
        span: BlockSpan,
        _: &mut IcConfig,
        _: &DofConfig,
    ) -> bool {
        self.record(stream, span)
    }

    fn read_quadrature(
        &mut self,
        stream: &mut DeckStream,
        span: BlockSpan,
        _: &mut QuadratureConfig,
    ) -> bool {
        self.record(stream, span)
    }

    fn read_output(
        &mut self,
        stream: &mut DeckStream,
        span: BlockSpan,
        _: &mut OutputConfig,
    ) -> bool {
        self.record(stream, span)
    }

    fn read_projection(
        &mut self,
        stream: &mut DeckStream,
        span: BlockSpan,
        _: &mut ProjectionConfig,
    ) -> bool {
        self.record(stream, span)
    }

    fn read_nonlinear_solver(
        &mut self,
        stream: &mut DeckStream,
        span: BlockSpan,
        _: &mut SolverConfig,
    ) -> bool {
        self.record(stream, span)
    }
}

/// Inspect the block layout of a FEDL deck.
///
/// Scans a deck in structure-only mode and reports where every recognized
/// block sits: header line, terminator line and body size, plus the
/// recognized keywords the deck does not use. Run requirements are not
/// enforced, so fragments inspect cleanly.
///
/// # Arguments
///
/// * `file` - Path to the deck file to inspect
/// * `json` - If `true`, emit the layout as pretty-printed JSON
/// * `output` - Optional output file path; stdout if `None`
///
/// # Returns
///
/// Returns `Ok(())` on success.
///
/// # Errors
///
/// Returns `Err` if:
/// - The file cannot be read
/// - The deck is structurally broken
/// - The report cannot be written
///
/// # Examples
///
/// ```no_run
/// use fedl_cli::commands::inspect;
///
/// # fn main() -> Result<(), String> {
/// // Human-readable layout on stdout
/// inspect("plate.fedl", false, None)?;
///
/// // Machine-readable layout into a file
/// inspect("plate.fedl", true, Some("layout.json"))?;
/// # Ok(())
/// # }
/// ```
pub fn inspect(file: &str, json: bool, output: Option<&str>) -> Result<(), String> {
    let content = read_file(file)?;

    // Layout is a structural question; run requirements stay out of it.
    let options = ScanOptions {
        validate_only: true,
        source_name: file.to_string(),
        ..ScanOptions::default()
    };

    let mut layout = LayoutReader::default();
    let (report, _) = scan_deck(&content, &options, &mut layout)
        .map_err(|e| format!("Scan error: {}", e))?;

    let rendered = if json {
        render_json(file, &layout.spans, &report)?
    } else {
        render_text(file, &layout.spans, &report)
    };

    write_output(&rendered, output)
}

fn render_text(file: &str, spans: &[BlockSpan], report: &ScanReport) -> String {
    let mut out = String::new();

    writeln!(out, "FEDL Deck").ok();
    writeln!(out).ok();
    writeln!(out, "Source: {}", file).ok();
    writeln!(out).ok();

    writeln!(out, "Blocks:").ok();
    if spans.is_empty() {
        writeln!(out, "  (none)").ok();
    }
    for span in spans {
        writeln!(
            out,
            "  {:<17} lines {}-{} ({} body line{})",
            span.kind.token(),
            span.header_line,
            span.terminator_line,
            span.body_lines(),
            if span.body_lines() == 1 { "" } else { "s" }
        )
        .ok();
    }

    let absent: Vec<&str> = BlockKind::ALL
        .iter()
        .filter(|kind| !report.presence.is_present(**kind))
        .map(|kind| kind.token())
        .collect();
    if !absent.is_empty() {
        writeln!(out).ok();
        writeln!(out, "Absent: {}", absent.join(", ")).ok();
    }

    if !report.diagnostics.is_empty() {
        writeln!(out).ok();
        writeln!(out, "Diagnostics:").ok();
        for diagnostic in report.diagnostics.iter() {
            writeln!(out, "  {}", diagnostic).ok();
        }
    }

    out
}

fn render_json(file: &str, spans: &[BlockSpan], report: &ScanReport) -> Result<String, String> {
    let blocks: Vec<serde_json::Value> = spans
        .iter()
        .map(|span| {
            serde_json::json!({
                "keyword": span.kind.token(),
                "header_line": span.header_line,
                "terminator_line": span.terminator_line,
                "body_lines": span.body_lines(),
            })
        })
        .collect();

    let absent: Vec<&str> = BlockKind::ALL
        .iter()
        .filter(|kind| !report.presence.is_present(**kind))
        .map(|kind| kind.token())
        .collect();

    let diagnostics: Vec<&fedl_core::Diagnostic> = report.diagnostics.iter().collect();

    let value = serde_json::json!({
        "source": file,
        "blocks": blocks,
        "absent": absent,
        "diagnostics": diagnostics,
    });

    serde_json::to_string_pretty(&value)
        .map(|mut s| {
            s.push('\n');
            s
        })
        .map_err(|e| format!("JSON serialization error: {}", e))
}
