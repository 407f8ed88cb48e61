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

//! Core deck scanner and configuration model for FEDL.
//!
//! FEDL (Finite Element Deck Language) is a plain-text, line-oriented,
//! block-structured input format for finite element analysis runs. A deck
//! is a sequence of bracketed blocks, each closed by `[end]`:
//!
//! ```text
//! [mesh]
//!   type = asfem
//!   dim = 2
//! [end]
//!
//! [dofs]
//!   name = u v
//! [end]
//! ```
//!
//! This crate provides the pieces the format's tooling is built from:
//!
//! - [`DeckStream`]: preprocessed deck text with a rewindable line cursor
//! - [`normalize`]: the whitespace- and case-insensitive matching form
//! - [`BlockKind`] and [`KEYWORDS`]: the block dispatch table
//! - [`validate_span`]: bracket-nesting terminator proof for one block
//! - [`read_deck`] / [`scan_deck`] / [`check_deck`]: the scanning engine
//! - [`BlockReader`]: the seam where block grammars plug in
//! - [`config`]: the configuration objects a scan populates
//!
//! # Scanning model
//!
//! One pass over the deck recognizes block headers, proves each block is
//! terminated, and dispatches block bodies to a [`BlockReader`]. Structural
//! faults (unterminated blocks, ordering violations, malformed headers)
//! abort the pass as [`FedlError`]s. Missing blocks never abort: the
//! post-scan policy records requirement findings as [`Diagnostics`] and
//! fills every gap with defaults, so a successful scan always leaves a
//! fully specified [`SimulationConfig`] behind.
//!
//! # Example
//!
//! ```
//! use fedl_core::{check_deck, ScanOptions};
//!
//! let deck = b"[mesh]\ntype = asfem\n[end]\n[dofs]\nname = u\n[end]\n";
//! let options = ScanOptions {
//!     validate_only: true,
//!     ..ScanOptions::default()
//! };
//! let report = check_deck(deck, &options).unwrap();
//! assert!(report.success());
//! ```

pub mod config;
mod diagnostics;
mod error;
mod keyword;
mod limits;
mod normalize;
mod policy;
mod presence;
mod reader;
mod scanner;
mod span;
mod stream;

pub use config::SimulationConfig;
pub use diagnostics::{Diagnostic, Diagnostics, Severity};
pub use error::{FedlError, FedlErrorKind, FedlResult};
pub use keyword::{is_opener, is_terminator, BlockKind, KeywordSpec, KEYWORDS, TERMINATOR};
pub use limits::Limits;
pub use normalize::{is_comment, is_skippable, normalize, NormalizedLine};
pub use presence::{BlockStatus, PresenceRecord};
pub use reader::{skip_block, BlockReader, StructuralReader};
pub use scanner::{check_deck, read_deck, scan_deck, ScanOptions, ScanReport};
pub use span::{is_terminated, validate_span, BlockSpan};
pub use stream::{DeckStream, StreamMark};
