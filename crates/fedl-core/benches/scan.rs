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

//! Deck scanning benchmarks.
//!
//! Measures the full structure-only scan (preprocessing, keyword matching,
//! span validation, policy) over flat and nested decks, plus the
//! preprocessing stage alone.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use fedl_core::{check_deck, DeckStream, Limits, ScanOptions};

const BODY_SIZES: [usize; 3] = [100, 1_000, 10_000];
const NESTING_DEPTHS: [usize; 3] = [4, 8, 16];

/// A runnable deck whose `[mesh]` body carries `lines` filler entries.
fn flat_deck(lines: usize) -> String {
    let mut deck = String::from("[mesh]\n  type = asfem\n  dim = 2\n");
    for i in 0..lines {
        deck.push_str(&format!("  field_{} = {}\n", i, i));
    }
    deck.push_str("[end]\n[dofs]\n  name = u\n[end]\n");
    deck.push_str("[elmts]\n  [e]\n    type = diffusion\n    dofs = u\n  [end]\n[end]\n");
    deck
}

/// A deck whose `[elmts]` block nests sub-sections `depth` levels deep with
/// two siblings per level.
fn nested_deck(depth: usize) -> String {
    fn emit(out: &mut String, level: usize, depth: usize) {
        if level == depth {
            out.push_str("    value = 1\n");
            return;
        }
        for slot in 0..2 {
            out.push_str(&format!("  [sub{}_{}]\n", level, slot));
            emit(out, level + 1, depth);
            out.push_str("  [end]\n");
        }
    }

    let mut deck = String::from(
        "[mesh]\n  type = asfem\n[end]\n[dofs]\n  name = u\n[end]\n[elmts]\n",
    );
    emit(&mut deck, 0, depth);
    deck.push_str("[end]\n");
    deck
}

fn bench_scan_flat(c: &mut Criterion) {
    let mut group = c.benchmark_group("scan_flat");
    let options = ScanOptions::default();
    for size in BODY_SIZES {
        let deck = flat_deck(size);
        group.throughput(Throughput::Bytes(deck.len() as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), &deck, |b, input| {
            b.iter(|| check_deck(black_box(input.as_bytes()), &options))
        });
    }
    group.finish();
}

fn bench_scan_nested(c: &mut Criterion) {
    let mut group = c.benchmark_group("scan_nested");
    let options = ScanOptions::default();
    for depth in NESTING_DEPTHS {
        let deck = nested_deck(depth);
        group.throughput(Throughput::Bytes(deck.len() as u64));
        group.bench_with_input(BenchmarkId::from_parameter(depth), &deck, |b, input| {
            b.iter(|| check_deck(black_box(input.as_bytes()), &options))
        });
    }
    group.finish();
}

fn bench_preprocess(c: &mut Criterion) {
    let mut group = c.benchmark_group("preprocess");
    let limits = Limits::default();
    for size in BODY_SIZES {
        let deck = flat_deck(size);
        group.throughput(Throughput::Bytes(deck.len() as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), &deck, |b, input| {
            b.iter(|| DeckStream::from_bytes(black_box(input.as_bytes()), &limits))
        });
    }
    group.finish();
}

criterion_group!(benches, bench_scan_flat, bench_scan_nested, bench_preprocess);
criterion_main!(benches);
