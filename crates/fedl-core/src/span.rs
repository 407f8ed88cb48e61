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

//! Block span validation.
//!
//! Before a body reader runs, the scanner proves that the block's `[end]`
//! exists. Validation is a pure lookahead: it walks content lines keeping a
//! bracket depth counter, and always rewinds the stream to where it started
//! (just after the header line) so the body reader sees the block from its
//! first body line onward.
//!
//! Depth starts at 1 for the already-consumed header. An exact `[end]`
//! closes one level; any other content line containing both `[` and `]`
//! opens one, which is how nested sub-sections (`[solids]` inside
//! `[elmts]`) extend the span to the outermost matching terminator.

use crate::error::{FedlError, FedlResult};
use crate::keyword::{self, BlockKind};
use crate::limits::Limits;
use crate::stream::DeckStream;

/// The line range a block occupies, nested sub-sections included.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct BlockSpan {
    /// Which block this is.
    pub kind: BlockKind,
    /// 1-based line of the block header.
    pub header_line: usize,
    /// 1-based line of the matching `[end]`.
    pub terminator_line: usize,
}

impl BlockSpan {
    /// Number of lines strictly between header and terminator.
    pub const fn body_lines(&self) -> usize {
        self.terminator_line - self.header_line - 1
    }
}

/// Validate that the block opened at `header_line` has a matching `[end]`.
///
/// The stream must be positioned just after the header line; it is restored
/// to that position before returning, on success and on failure alike.
///
/// # Errors
///
/// Returns an [`Unterminated`](crate::FedlErrorKind::Unterminated) error
/// carrying the header line when the deck ends before the bracket depth
/// returns to zero, and a [`Security`](crate::FedlErrorKind::Security)
/// error when nesting exceeds `limits.max_nesting_depth`.
pub fn validate_span(
    stream: &mut DeckStream,
    kind: BlockKind,
    header_line: usize,
    limits: &Limits,
) -> FedlResult<BlockSpan> {
    let mark = stream.mark();
    let mut depth: usize = 1;
    let mut terminator_line = None;

    while let Some(line) = stream.next_content() {
        if keyword::is_terminator(&line.text) {
            depth -= 1;
            if depth == 0 {
                terminator_line = Some(line.number);
                break;
            }
        } else if keyword::is_opener(&line.text) {
            depth += 1;
            if depth > limits.max_nesting_depth {
                stream.rewind(mark);
                return Err(FedlError::security(
                    format!(
                        "bracket nesting depth {} exceeds the limit of {}",
                        depth, limits.max_nesting_depth
                    ),
                    line.number,
                ));
            }
        }
    }
    stream.rewind(mark);

    match terminator_line {
        Some(line) => Ok(BlockSpan {
            kind,
            header_line,
            terminator_line: line,
        }),
        None => Err(FedlError::unterminated(
            format!(
                "{}/[end] bracket pair does not match before the end of the deck",
                kind.token()
            ),
            header_line,
        )),
    }
}

/// Boolean form of [`validate_span`] for callers that only need validity.
pub fn is_terminated(
    stream: &mut DeckStream,
    kind: BlockKind,
    header_line: usize,
    limits: &Limits,
) -> bool {
    validate_span(stream, kind, header_line, limits).is_ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::FedlErrorKind;

    fn stream_past_header(text: &str) -> (DeckStream, usize) {
        let mut stream = DeckStream::from_text(text).unwrap();
        let header = stream.next_content().expect("deck has a header line");
        (stream, header.number)
    }

    // ==================== flat block tests ====================

    #[test]
    fn test_flat_block() {
        let (mut stream, header) = stream_past_header("[mesh]\ntype=asfem\n[end]\n");
        let span =
            validate_span(&mut stream, BlockKind::Mesh, header, &Limits::default()).unwrap();
        assert_eq!(span.header_line, 1);
        assert_eq!(span.terminator_line, 3);
        assert_eq!(span.body_lines(), 1);
    }

    #[test]
    fn test_empty_block() {
        let (mut stream, header) = stream_past_header("[dofs]\n[end]\n");
        let span =
            validate_span(&mut stream, BlockKind::Dofs, header, &Limits::default()).unwrap();
        assert_eq!(span.terminator_line, 2);
        assert_eq!(span.body_lines(), 0);
    }

    #[test]
    fn test_comments_and_blanks_ignored() {
        let deck = "[mesh]\n// comment\n\nnx = 10\n[end]\n";
        let (mut stream, header) = stream_past_header(deck);
        let span =
            validate_span(&mut stream, BlockKind::Mesh, header, &Limits::default()).unwrap();
        assert_eq!(span.terminator_line, 5);
    }

    // ==================== nesting tests ====================

    #[test]
    fn test_nested_subblock_extends_span() {
        let deck = "[elmts]\n[solids]\ntype=mechanics\n[end]\n[end]\n";
        let (mut stream, header) = stream_past_header(deck);
        let span =
            validate_span(&mut stream, BlockKind::Elements, header, &Limits::default()).unwrap();
        assert_eq!(span.terminator_line, 5);
    }

    #[test]
    fn test_two_sequential_subblocks() {
        let deck = "[elmts]\n[a]\n[end]\n[b]\n[end]\n[end]\n";
        let (mut stream, header) = stream_past_header(deck);
        let span =
            validate_span(&mut stream, BlockKind::Elements, header, &Limits::default()).unwrap();
        assert_eq!(span.terminator_line, 6);
    }

    #[test]
    fn test_deeply_nested() {
        let deck = "[a]\n[b]\n[c]\nx=1\n[end]\n[end]\n[end]\n";
        let (mut stream, header) = stream_past_header(deck);
        let span =
            validate_span(&mut stream, BlockKind::Mesh, header, &Limits::default()).unwrap();
        assert_eq!(span.terminator_line, 7);
    }

    #[test]
    fn test_nesting_depth_limit() {
        let limits = Limits {
            max_nesting_depth: 2,
            ..Limits::default()
        };
        let deck = "[a]\n[b]\n[c]\n[end]\n[end]\n[end]\n";
        let (mut stream, header) = stream_past_header(deck);
        let err = validate_span(&mut stream, BlockKind::Mesh, header, &limits).unwrap_err();
        assert_eq!(err.kind, FedlErrorKind::Security);
        assert_eq!(err.line, 3);
    }

    // ==================== failure tests ====================

    #[test]
    fn test_missing_terminator() {
        let (mut stream, header) = stream_past_header("[mesh]\ntype=asfem\n");
        let err =
            validate_span(&mut stream, BlockKind::Mesh, header, &Limits::default()).unwrap_err();
        assert_eq!(err.kind, FedlErrorKind::Unterminated);
        assert_eq!(err.line, 1);
        assert!(err.message.contains("[mesh]"));
    }

    #[test]
    fn test_unbalanced_nesting() {
        let deck = "[elmts]\n[solids]\nx=1\n[end]\n";
        let (mut stream, header) = stream_past_header(deck);
        let err =
            validate_span(&mut stream, BlockKind::Elements, header, &Limits::default())
                .unwrap_err();
        assert_eq!(err.kind, FedlErrorKind::Unterminated);
    }

    // ==================== cursor restore tests ====================

    #[test]
    fn test_cursor_restored_on_success() {
        let (mut stream, header) = stream_past_header("[mesh]\nnx=4\n[end]\n");
        validate_span(&mut stream, BlockKind::Mesh, header, &Limits::default()).unwrap();
        let next = stream.next_content().unwrap();
        assert_eq!(next.number, 2);
        assert_eq!(next.text, "nx=4");
    }

    #[test]
    fn test_cursor_restored_on_failure() {
        let (mut stream, header) = stream_past_header("[mesh]\nnx=4\n");
        validate_span(&mut stream, BlockKind::Mesh, header, &Limits::default()).unwrap_err();
        let next = stream.next_content().unwrap();
        assert_eq!(next.number, 2);
    }

    #[test]
    fn test_cursor_restored_on_depth_limit() {
        let limits = Limits {
            max_nesting_depth: 1,
            ..Limits::default()
        };
        let (mut stream, header) = stream_past_header("[mesh]\n[sub]\n[end]\n[end]\n");
        validate_span(&mut stream, BlockKind::Mesh, header, &limits).unwrap_err();
        let next = stream.next_content().unwrap();
        assert_eq!(next.number, 2);
    }

    // ==================== boolean form tests ====================

    #[test]
    fn test_is_terminated() {
        let (mut stream, header) = stream_past_header("[mesh]\n[end]\n");
        assert!(is_terminated(
            &mut stream,
            BlockKind::Mesh,
            header,
            &Limits::default()
        ));

        let (mut stream, header) = stream_past_header("[mesh]\nnx=1\n");
        assert!(!is_terminated(
            &mut stream,
            BlockKind::Mesh,
            header,
            &Limits::default()
        ));
    }
}
