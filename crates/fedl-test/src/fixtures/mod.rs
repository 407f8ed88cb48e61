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

//! Canonical deck fixtures.
//!
//! [`decks`] holds well-formed decks a scan must accept; [`errors`] holds
//! broken decks with the structural fault each one carries. Both expose an
//! `all()` list so a suite can sweep every fixture in one loop.

pub mod decks;
pub mod errors;

/// All well-formed fixtures as (name, deck text) pairs.
pub fn all() -> Vec<(&'static str, &'static str)> {
    decks::all()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_fixture_names_are_unique() {
        let fixtures = all();
        for (i, (name, _)) in fixtures.iter().enumerate() {
            for (other, _) in fixtures.iter().skip(i + 1) {
                assert_ne!(name, other);
            }
        }
    }
}
