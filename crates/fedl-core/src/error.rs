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

//! Error types for deck scanning.
//!
//! Every structural failure the scanner can hit carries a kind, a message,
//! and the 1-based source line it was detected on. Errors returned from
//! [`read_deck`](crate::read_deck) abort the scan at the first structural
//! fault; requirement and defaulting findings travel separately as
//! [`Diagnostics`](crate::Diagnostics) so the caller decides how to react.

use std::fmt;
use thiserror::Error;

/// Classification of a deck scanning error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FedlErrorKind {
    /// Input is not valid UTF-8, or contains a bare CR or control characters.
    Encoding,
    /// A resource limit was exceeded (file size, line length, nesting depth).
    Security,
    /// An empty bracket pair (`[]`) appeared where a block header was expected.
    MalformedHeader,
    /// A block header has no matching `[end]` terminator.
    Unterminated,
    /// A block appeared before a block it depends on.
    Dependency,
    /// A body reader reported failure in a position that cannot be degraded.
    Reader,
    /// An I/O failure while acquiring the deck text.
    Io,
}

impl fmt::Display for FedlErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            FedlErrorKind::Encoding => "EncodingError",
            FedlErrorKind::Security => "SecurityError",
            FedlErrorKind::MalformedHeader => "MalformedHeaderError",
            FedlErrorKind::Unterminated => "UnterminatedBlockError",
            FedlErrorKind::Dependency => "DependencyError",
            FedlErrorKind::Reader => "ReaderError",
            FedlErrorKind::Io => "IOError",
        };
        write!(f, "{}", name)
    }
}

/// A deck scanning error with its detection site.
///
/// `line` is 1-based; 0 means the error is not tied to a specific line
/// (for example an I/O failure before any line was read).
#[derive(Debug, Clone, Error)]
#[error("{kind} at line {line}: {message}")]
pub struct FedlError {
    /// What category of fault this is.
    pub kind: FedlErrorKind,
    /// Human-readable description.
    pub message: String,
    /// 1-based line number, or 0 when no line applies.
    pub line: usize,
}

impl FedlError {
    /// Create an error with an explicit kind, message, and line.
    pub fn new(kind: FedlErrorKind, message: impl Into<String>, line: usize) -> Self {
        FedlError {
            kind,
            message: message.into(),
            line,
        }
    }

    /// Encoding error at a specific line.
    pub fn encoding(message: impl Into<String>, line: usize) -> Self {
        Self::new(FedlErrorKind::Encoding, message, line)
    }

    /// Resource limit violation at a specific line.
    pub fn security(message: impl Into<String>, line: usize) -> Self {
        Self::new(FedlErrorKind::Security, message, line)
    }

    /// Empty bracket pair at a specific line.
    pub fn malformed_header(message: impl Into<String>, line: usize) -> Self {
        Self::new(FedlErrorKind::MalformedHeader, message, line)
    }

    /// Missing `[end]` terminator; `line` is the header line of the block.
    pub fn unterminated(message: impl Into<String>, line: usize) -> Self {
        Self::new(FedlErrorKind::Unterminated, message, line)
    }

    /// Block ordering violation at the offending header line.
    pub fn dependency(message: impl Into<String>, line: usize) -> Self {
        Self::new(FedlErrorKind::Dependency, message, line)
    }

    /// Non-degradable body reader failure at the block's header line.
    pub fn reader(message: impl Into<String>, line: usize) -> Self {
        Self::new(FedlErrorKind::Reader, message, line)
    }

    /// I/O failure with no line attribution.
    pub fn io(message: impl Into<String>) -> Self {
        Self::new(FedlErrorKind::Io, message, 0)
    }
}

/// Result alias used throughout the crate.
pub type FedlResult<T> = Result<T, FedlError>;
