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

//! FEDL CLI library for command-line parsing and execution.
//!
//! This library provides the core functionality for the FEDL command-line
//! interface: checking decks against structure and run requirements,
//! inspecting deck layout, and batch processing.
//!
//! # Commands
//!
//! The CLI provides the following commands:
//!
//! ## Checking & Inspection
//!
//! - **check**: Check a deck's structure and run requirements
//! - **inspect**: Report a deck's block layout (text or JSON)
//! - **keywords**: List the recognized block vocabulary
//!
//! ## Batch Processing
//!
//! - **batch-check**: Check multiple decks in parallel
//!
//! ## Utilities
//!
//! - **completion**: Generate shell completion scripts (bash, zsh, fish,
//!   powershell, elvish)
//!
//! # Examples
//!
//! ## Checking
//!
//! ```no_run
//! use fedl_cli::commands::check;
//!
//! # fn main() -> Result<(), String> {
//! // Check a deck for structure and run requirements
//! check("plate.fedl", false, false)?;
//!
//! // Structure-only mode accepts decks without a physics setup
//! check("fragment.fedl", true, false)?;
//! # Ok(())
//! # }
//! ```
//!
//! ## Batch Processing
//!
//! ```no_run
//! use fedl_cli::commands::batch_check;
//!
//! # fn main() -> Result<(), String> {
//! // Check multiple decks in parallel
//! let files = vec!["plate.fedl".to_string(), "beam.fedl".to_string()];
//! batch_check(files, false, true, false)?;
//! # Ok(())
//! # }
//! ```
//!
//! # Security
//!
//! The CLI includes several security features:
//!
//! - **File size limits**: Prevents OOM attacks (configurable via
//!   `FEDL_MAX_FILE_SIZE`)
//! - **Nesting limits**: The scanner bounds bracket nesting depth
//! - **Encoding checks**: Invalid UTF-8 is reported with a line number
//!
//! # Error Handling
//!
//! All commands return `Result<(), String>` for consistent error handling.
//! Errors are descriptive and include context like file paths and line
//! numbers where applicable.

pub mod batch;
pub mod cli;
pub mod commands;
pub mod error;
