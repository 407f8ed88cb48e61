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

//! Presence bookkeeping for one scan pass.
//!
//! The dispatcher records each recognized block here; the post-scan policy
//! reads it to decide which requirement errors, warnings, and defaults
//! apply. A block whose body reader returned failure is recorded as present
//! but unsatisfied, which downstream is the same as absent except for the
//! kinds where failure is escalated immediately.

use crate::keyword::BlockKind;

/// The recorded outcome for one block kind.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct BlockStatus {
    /// A header for this kind was recognized.
    pub present: bool,
    /// The body reader reported success.
    pub parsed_ok: bool,
}

/// Which blocks one scan pass found, and how their body reads went.
///
/// A repeated block overwrites its earlier status; the last occurrence in
/// the deck wins.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PresenceRecord {
    statuses: [BlockStatus; BlockKind::COUNT],
}

impl PresenceRecord {
    /// An empty record with every kind absent.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record that a block of `kind` was recognized and whether its body
    /// reader succeeded.
    pub fn record(&mut self, kind: BlockKind, parsed_ok: bool) {
        self.statuses[kind.index()] = BlockStatus {
            present: true,
            parsed_ok,
        };
    }

    /// The recorded status for `kind`.
    pub fn status(&self, kind: BlockKind) -> BlockStatus {
        self.statuses[kind.index()]
    }

    /// True when a header for `kind` was recognized, regardless of how the
    /// body read went.
    pub fn is_present(&self, kind: BlockKind) -> bool {
        self.status(kind).present
    }

    /// True when `kind` is present and its body reader succeeded. This is
    /// the test dependency checks and the defaulting policy use.
    pub fn satisfied(&self, kind: BlockKind) -> bool {
        let status = self.status(kind);
        status.present && status.parsed_ok
    }

    /// Number of satisfied kinds.
    pub fn satisfied_count(&self) -> usize {
        BlockKind::ALL
            .iter()
            .filter(|&&kind| self.satisfied(kind))
            .count()
    }

    /// Iterate statuses in canonical recognition order.
    pub fn iter(&self) -> impl Iterator<Item = (BlockKind, BlockStatus)> + '_ {
        BlockKind::ALL.iter().map(move |&kind| (kind, self.status(kind)))
    }
}
