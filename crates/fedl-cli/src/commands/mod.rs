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

//! CLI command implementations

mod batch_commands;
mod check;
mod completion;
mod inspect;
mod keywords;

pub use batch_commands::batch_check;
pub use check::check;
pub use completion::{generate_completion_for_command, print_installation_instructions};
pub use inspect::inspect;
pub use keywords::keywords;

use std::fs;
use std::io::{self, Write};

/// Default maximum file size to prevent OOM attacks (1 GB)
/// Can be overridden via FEDL_MAX_FILE_SIZE environment variable
pub const DEFAULT_MAX_FILE_SIZE: u64 = 1024 * 1024 * 1024;

/// Get the maximum file size from environment or use default.
///
/// Reads the `FEDL_MAX_FILE_SIZE` environment variable to allow customization
/// of the maximum allowed file size. Falls back to [`DEFAULT_MAX_FILE_SIZE`]
/// if the variable is not set or contains an invalid value.
pub(crate) fn max_file_size() -> u64 {
    std::env::var("FEDL_MAX_FILE_SIZE")
        .ok()
        .and_then(|s| s.parse::<u64>().ok())
        .unwrap_or(DEFAULT_MAX_FILE_SIZE)
}

/// Read a deck file from disk with size validation.
///
/// Reads the entire contents of a file into a byte buffer, with built-in
/// protection against out-of-memory (OOM) attacks. Files larger than the
/// configured maximum size are rejected before reading.
///
/// The bytes are returned unvalidated: encoding checks belong to the
/// scanner, which reports UTF-8 faults with a line number.
///
/// # Errors
///
/// Returns `Err` if:
/// - The file metadata cannot be accessed
/// - The file size exceeds the maximum allowed size (configurable via
///   `FEDL_MAX_FILE_SIZE`)
/// - The file cannot be read
///
/// # Examples
///
/// ```no_run
/// use fedl_cli::commands::read_file;
///
/// # fn main() -> Result<(), String> {
/// let content = read_file("plate.fedl")?;
/// assert!(!content.is_empty());
/// # Ok(())
/// # }
/// ```
///
/// # Security
///
/// Checks file size via `fs::metadata()` before allocating memory. The
/// maximum defaults to 1 GB but can be customized via `FEDL_MAX_FILE_SIZE`.
pub fn read_file(path: &str) -> Result<Vec<u8>, String> {
    // Check file size first to prevent reading extremely large files
    let metadata = fs::metadata(path)
        .map_err(|e| format!("Failed to get metadata for '{}': {}", path, e))?;

    let max_file_size = max_file_size();

    if metadata.len() > max_file_size {
        return Err(format!(
            "File '{}' is too large ({} bytes). Maximum allowed size is {} bytes ({} MB).\n\
             To process larger files, set FEDL_MAX_FILE_SIZE environment variable (in bytes).",
            path,
            metadata.len(),
            max_file_size,
            max_file_size / (1024 * 1024)
        ));
    }

    fs::read(path).map_err(|e| format!("Failed to read '{}': {}", path, e))
}

/// Write content to a file or stdout.
///
/// Writes the provided content to either a specified file path or to stdout
/// if no path is provided. This is the standard output mechanism used by
/// all FEDL CLI commands.
///
/// # Errors
///
/// Returns `Err` if:
/// - File creation or writing fails (when `path` is `Some`)
/// - Writing to stdout fails (when `path` is `None`)
///
/// # Examples
///
/// ```no_run
/// use fedl_cli::commands::write_output;
///
/// # fn main() -> Result<(), String> {
/// // Write to stdout
/// write_output("[mesh] present\n", None)?;
///
/// // Write to file
/// write_output("[mesh] present\n", Some("report.txt"))?;
/// # Ok(())
/// # }
/// ```
pub fn write_output(content: &str, path: Option<&str>) -> Result<(), String> {
    match path {
        Some(p) => fs::write(p, content).map_err(|e| format!("Failed to write '{}': {}", p, e)),
        None => io::stdout()
            .write_all(content.as_bytes())
            .map_err(|e| format!("Failed to write to stdout: {}", e)),
    }
}
