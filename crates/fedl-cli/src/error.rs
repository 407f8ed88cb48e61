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

//! Structured error types for the FEDL CLI.
//!
//! This module provides type-safe, composable error handling using
//! `thiserror`. Batch operations return `Result<T, CliError>` so failures
//! can be collected and reported per file.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// The main error type for FEDL CLI operations.
///
/// Each variant provides enough context for a per-file failure report.
/// Implements `Clone` to support result collection in parallel batch
/// processing.
#[derive(Error, Debug, Clone)]
pub enum CliError {
    /// I/O operation failed (file read, write, or metadata access).
    #[error("I/O error for '{path}': {message}")]
    Io {
        /// The file path that caused the error
        path: PathBuf,
        /// The error message
        message: String,
    },

    /// File size exceeds the maximum allowed limit.
    ///
    /// This prevents denial-of-service attacks via memory exhaustion.
    #[error("File '{path}' is too large ({actual} bytes). Maximum allowed: {max} bytes ({max_mb} MB)")]
    FileTooLarge {
        /// The file path that exceeded the limit
        path: PathBuf,
        /// The actual file size in bytes
        actual: u64,
        /// The maximum allowed file size in bytes
        max: u64,
        /// The maximum allowed file size in MB (for display)
        max_mb: u64,
    },

    /// The scan aborted on a structural fault.
    ///
    /// This wraps fatal errors from the fedl-core scanner: malformed
    /// headers, unterminated blocks, ordering violations, resource limits.
    #[error("Scan error: {0}")]
    Scan(String),

    /// The deck scanned cleanly but the requirement policy found errors.
    #[error("deck has {count} requirement error(s)")]
    DeckErrors {
        /// Number of error-severity diagnostics
        count: usize,
    },
}

impl CliError {
    /// Create an I/O error with file path context.
    pub fn io_error(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::Io {
            path: path.into(),
            message: source.to_string(),
        }
    }

    /// Create a file-too-large error.
    pub fn file_too_large(path: impl Into<PathBuf>, actual: u64, max: u64) -> Self {
        Self::FileTooLarge {
            path: path.into(),
            actual,
            max,
            max_mb: max / (1024 * 1024),
        }
    }

    /// Create a scan error from a fatal scanner fault.
    pub fn scan(msg: impl Into<String>) -> Self {
        Self::Scan(msg.into())
    }

    /// Create a requirement-errors error.
    pub fn deck_errors(count: usize) -> Self {
        Self::DeckErrors { count }
    }
}

impl From<fedl_core::FedlError> for CliError {
    fn from(source: fedl_core::FedlError) -> Self {
        Self::Scan(source.to_string())
    }
}
