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

//! Line normalization.
//!
//! The deck format is whitespace- and case-insensitive everywhere the
//! scanner looks: every raw line is reduced to a canonical form before any
//! keyword matching happens. `[ Mesh ]`, `[mesh]`, and `\t[MESH]` all
//! normalize to `[mesh]`. Body readers receive the raw lines; only the
//! scanner's own matching runs on the normalized form.

/// Reduce a raw line to its canonical matching form.
///
/// Removes every Unicode whitespace character (leading, trailing, and
/// interior) and lower-cases the remainder.
///
/// # Examples
///
/// ```
/// use fedl_core::normalize;
///
/// assert_eq!(normalize("  [ MESH ]  "), "[mesh]");
/// assert_eq!(normalize("type = asfem"), "type=asfem");
/// assert_eq!(normalize("\t"), "");
/// ```
pub fn normalize(raw: &str) -> String {
    raw.chars()
        .filter(|c| !c.is_whitespace())
        .flat_map(char::to_lowercase)
        .collect()
}

/// True when normalized text is a comment line (`//` prefix).
///
/// Because normalization strips whitespace first, `  // note` and `//note`
/// are both comments, while `x // note` is not: the marker must lead the
/// line's content.
pub fn is_comment(text: &str) -> bool {
    text.starts_with("//")
}

/// True when normalized text carries nothing for the scanner to match.
pub fn is_skippable(text: &str) -> bool {
    text.is_empty() || is_comment(text)
}

/// A raw input line paired with its canonical matching form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NormalizedLine {
    /// 1-based line number in the deck.
    pub number: usize,
    /// Whitespace-free, lower-cased content.
    pub text: String,
}

impl NormalizedLine {
    /// Normalize `raw` as line `number`.
    pub fn new(number: usize, raw: &str) -> Self {
        NormalizedLine {
            number,
            text: normalize(raw),
        }
    }

    /// True when this line is blank or a comment.
    pub fn is_skippable(&self) -> bool {
        is_skippable(&self.text)
    }
}
