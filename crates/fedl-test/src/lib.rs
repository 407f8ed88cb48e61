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

//! Shared deck fixtures and reader test doubles for the FEDL scanner.
//!
//! Everything that more than one test suite wants lives here: canonical
//! deck texts (valid and broken), a body reader that records which blocks
//! it was handed, and a reader that plants known mesh geometry so
//! defaulting behavior has something real to derive from.
//!
//! # Quick Start
//!
//! ```
//! use fedl_core::{scan_deck, BlockKind, ScanOptions};
//! use fedl_test::{fixtures, RecordingReader};
//!
//! let mut readers = RecordingReader::new();
//! let (report, _) = scan_deck(
//!     fixtures::decks::COMPLETE.as_bytes(),
//!     &ScanOptions::default(),
//!     &mut readers,
//! )
//! .unwrap();
//!
//! assert!(report.success());
//! assert!(readers.was_invoked(BlockKind::Mesh));
//! ```

use fedl_core::{normalize, BlockKind};

pub mod fixtures;
mod readers;

pub use readers::{RecordingReader, SeedMeshReader};

/// Block kinds whose headers appear in `deck`, in deck order.
///
/// A plain text sweep with the scanner's own normalization, independent of
/// the scanning engine. Useful for asserting what a fixture contains
/// without trusting the code under test.
pub fn recognized_blocks(deck: &str) -> Vec<BlockKind> {
    deck.lines()
        .filter_map(|raw| BlockKind::from_token(&normalize(raw)))
        .collect()
}
