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

//! Result output options populated from the `[output]` block.

use std::path::Path;

/// Result file format.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum OutputFormat {
    /// VTK unstructured grid files.
    #[default]
    Vtu,
    /// Comma-separated values.
    Csv,
}

/// Where and how often results are written.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct OutputConfig {
    /// Result file format.
    pub format: OutputFormat,
    /// Base name for result files, without extension.
    pub file_base: String,
    /// Write results every this many steps.
    pub interval: usize,
}

impl Default for OutputConfig {
    fn default() -> Self {
        OutputConfig {
            format: OutputFormat::Vtu,
            file_base: String::new(),
            interval: 1,
        }
    }
}

impl OutputConfig {
    /// Derive the result file base name from the deck source name.
    ///
    /// Used by the defaulting policy when no `[output]` block configured a
    /// name: the deck's file stem becomes the base, so `cahn-hilliard.fedl`
    /// writes `cahn-hilliard-*.vtu`. A source with no usable stem falls
    /// back to `output`.
    pub fn init_from_source(&mut self, source_name: &str) {
        let base = Path::new(source_name)
            .file_stem()
            .and_then(|stem| stem.to_str())
            .unwrap_or("output");
        self.file_base = base.to_string();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_format_and_interval() {
        let output = OutputConfig::default();
        assert_eq!(output.format, OutputFormat::Vtu);
        assert_eq!(output.interval, 1);
        assert!(output.file_base.is_empty());
    }

    #[test]
    fn test_init_strips_extension() {
        let mut output = OutputConfig::default();
        output.init_from_source("decks/cahn-hilliard.fedl");
        assert_eq!(output.file_base, "cahn-hilliard");
    }

    #[test]
    fn test_init_without_extension() {
        let mut output = OutputConfig::default();
        output.init_from_source("mechanics");
        assert_eq!(output.file_base, "mechanics");
    }

    #[test]
    fn test_init_empty_source_falls_back() {
        let mut output = OutputConfig::default();
        output.init_from_source("");
        assert_eq!(output.file_base, "output");
    }
}
