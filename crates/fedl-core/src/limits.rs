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

//! Resource limits for deck scanning.
//!
//! Decks come from users and from generated tooling; the limits below bound
//! memory and stack behavior when a deck is hostile or simply broken. All
//! limits are checked during preprocessing and span validation, before any
//! body reader runs.

/// Configurable resource limits.
///
/// The defaults are far above anything a realistic analysis deck needs
/// while still rejecting pathological input early.
///
/// # Examples
///
/// ```
/// use fedl_core::Limits;
///
/// let limits = Limits::default();
/// assert_eq!(limits.max_nesting_depth, 32);
///
/// let relaxed = Limits {
///     max_file_size: 256 * 1024 * 1024,
///     ..Limits::default()
/// };
/// assert!(relaxed.max_file_size > limits.max_file_size);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Limits {
    /// Maximum deck size in bytes. Default: 64 MB.
    pub max_file_size: usize,
    /// Maximum length of a single line in bytes. Default: 64 KB.
    pub max_line_length: usize,
    /// Maximum bracket nesting depth inside one block. Default: 32.
    pub max_nesting_depth: usize,
}

impl Default for Limits {
    fn default() -> Self {
        Limits {
            max_file_size: 64 * 1024 * 1024,
            max_line_length: 64 * 1024,
            max_nesting_depth: 32,
        }
    }
}

impl Limits {
    /// Limits that never trigger. Only for trusted input.
    pub fn unlimited() -> Self {
        Limits {
            max_file_size: usize::MAX,
            max_line_length: usize::MAX,
            max_nesting_depth: usize::MAX,
        }
    }
}
