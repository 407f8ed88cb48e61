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

//! Deck preprocessing and the scanning cursor.
//!
//! [`DeckStream`] owns the deck text after preprocessing:
//!
//! 1. Size limit check (before any allocation beyond the input itself)
//! 2. UTF-8 validation
//! 3. BOM (U+FEFF) removal
//! 4. Control character rejection (tab, LF, CR excepted)
//! 5. CRLF normalization; bare CR is rejected
//! 6. Line offset table construction with a per-line length limit
//!
//! On top of that sits a line cursor with save/restore. Span validation
//! reads ahead through a block and then rewinds, so the position a body
//! reader consumes from is always the line right after the block header,
//! whether or not the lookahead succeeded.

use crate::error::{FedlError, FedlResult};
use crate::limits::Limits;
use crate::normalize::NormalizedLine;
use std::borrow::Cow;

/// Saved cursor position, restored with [`DeckStream::rewind`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StreamMark(usize);

/// Preprocessed deck text with a line cursor.
///
/// # Examples
///
/// ```
/// use fedl_core::DeckStream;
///
/// let mut stream = DeckStream::from_text("[mesh]\n  type = asfem\n[end]\n").unwrap();
/// let header = stream.next_content().unwrap();
/// assert_eq!(header.number, 1);
/// assert_eq!(header.text, "[mesh]");
/// ```
#[derive(Debug, Clone)]
pub struct DeckStream {
    text: String,
    /// Byte ranges of each line, newline excluded. Index = line number - 1.
    line_offsets: Vec<(usize, usize)>,
    /// Number of lines already consumed; also the index of the next line.
    cursor: usize,
}

impl DeckStream {
    /// Preprocess raw deck bytes under the given limits.
    ///
    /// # Errors
    ///
    /// Returns [`FedlErrorKind::Security`](crate::FedlErrorKind::Security)
    /// when a size limit trips, and
    /// [`FedlErrorKind::Encoding`](crate::FedlErrorKind::Encoding) for
    /// invalid UTF-8, disallowed control characters, or bare CR line
    /// endings.
    pub fn from_bytes(input: &[u8], limits: &Limits) -> FedlResult<Self> {
        if input.len() > limits.max_file_size {
            return Err(FedlError::security(
                format!(
                    "deck size {} bytes exceeds the limit of {} bytes",
                    input.len(),
                    limits.max_file_size
                ),
                0,
            ));
        }

        let text = std::str::from_utf8(input)
            .map_err(|e| FedlError::encoding(format!("deck is not valid UTF-8: {}", e), 0))?;
        let text = text.strip_prefix('\u{feff}').unwrap_or(text);

        let mut line = 1usize;
        for c in text.chars() {
            match c {
                '\n' => line += 1,
                '\t' | '\r' => {}
                c if c.is_control() => {
                    return Err(FedlError::encoding(
                        format!("control character U+{:04X} is not allowed", c as u32),
                        line,
                    ));
                }
                _ => {}
            }
        }

        let normalized: Cow<'_, str> = if text.contains('\r') {
            let mut out = String::with_capacity(text.len());
            let mut chars = text.chars().peekable();
            let mut line = 1usize;
            while let Some(c) = chars.next() {
                match c {
                    '\r' => {
                        if chars.peek() == Some(&'\n') {
                            chars.next();
                            out.push('\n');
                            line += 1;
                        } else {
                            return Err(FedlError::encoding(
                                "bare CR line ending; use LF or CRLF",
                                line,
                            ));
                        }
                    }
                    '\n' => {
                        out.push('\n');
                        line += 1;
                    }
                    c => out.push(c),
                }
            }
            Cow::Owned(out)
        } else {
            Cow::Borrowed(text)
        };

        let bytes = normalized.as_bytes();
        let mut line_offsets = Vec::new();
        let mut start = 0usize;
        for (i, &b) in bytes.iter().enumerate() {
            if b == b'\n' {
                line_offsets.push((start, i));
                start = i + 1;
            }
        }
        if start < bytes.len() || line_offsets.is_empty() {
            line_offsets.push((start, bytes.len()));
        }
        for (idx, &(s, e)) in line_offsets.iter().enumerate() {
            if e - s > limits.max_line_length {
                return Err(FedlError::security(
                    format!(
                        "line length {} bytes exceeds the limit of {} bytes",
                        e - s,
                        limits.max_line_length
                    ),
                    idx + 1,
                ));
            }
        }

        Ok(DeckStream {
            text: normalized.into_owned(),
            line_offsets,
            cursor: 0,
        })
    }

    /// Preprocess deck text under default limits.
    pub fn from_text(input: &str) -> FedlResult<Self> {
        Self::from_bytes(input.as_bytes(), &Limits::default())
    }

    /// Total number of lines in the deck.
    pub fn line_count(&self) -> usize {
        self.line_offsets.len()
    }

    /// Raw text of a 1-based line, without its newline.
    pub fn line(&self, number: usize) -> Option<&str> {
        let (s, e) = *self.line_offsets.get(number.checked_sub(1)?)?;
        Some(&self.text[s..e])
    }

    /// Consume and return the next raw line with its 1-based number.
    pub fn next_line(&mut self) -> Option<(usize, &str)> {
        let (s, e) = *self.line_offsets.get(self.cursor)?;
        self.cursor += 1;
        Some((self.cursor, &self.text[s..e]))
    }

    /// Consume lines until one survives normalization.
    ///
    /// Blank lines and whole-line comments are consumed and dropped; the
    /// first content line is returned in normalized form.
    pub fn next_content(&mut self) -> Option<NormalizedLine> {
        while let Some((number, raw)) = self.next_line() {
            let line = NormalizedLine::new(number, raw);
            if !line.is_skippable() {
                return Some(line);
            }
        }
        None
    }

    /// 1-based number of the most recently consumed line, or 0 before any
    /// line has been read.
    pub fn current_line(&self) -> usize {
        self.cursor
    }

    /// Save the cursor position.
    pub fn mark(&self) -> StreamMark {
        StreamMark(self.cursor)
    }

    /// Restore a previously saved cursor position.
    pub fn rewind(&mut self, mark: StreamMark) {
        self.cursor = mark.0;
    }

    /// Place the cursor so the next read returns line `number + 1`.
    ///
    /// Body readers use this to hand the stream back positioned just past
    /// their block's `[end]` line. Positions past the last line clamp to
    /// end-of-deck.
    pub fn seek_past_line(&mut self, number: usize) {
        self.cursor = number.min(self.line_offsets.len());
    }

    /// True when every line has been consumed.
    pub fn is_at_end(&self) -> bool {
        self.cursor >= self.line_offsets.len()
    }
}
