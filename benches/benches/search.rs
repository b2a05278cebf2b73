// Copyright 2026 the Lookout Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{Criterion, black_box, criterion_group, criterion_main};
use lookout_search::{SearchIndex, SectionSource};

const WORDS: [&str; 12] = [
    "rust", "services", "latency", "design", "portfolio", "cloud", "testing", "mentor",
    "kernel", "compiler", "frontend", "database",
];

fn sections(count: usize) -> Vec<SectionSource> {
    (0..count)
        .map(|i| {
            let text: Vec<&str> = (0..200).map(|w| WORDS[(i * 7 + w * 3) % WORDS.len()]).collect();
            SectionSource::new(format!("section-{i}"), text.join(" "))
                .with_title(format!("Section {i}"))
        })
        .collect()
}

fn bench_search(c: &mut Criterion) {
    let mut group = c.benchmark_group("search");
    for count in [12_usize, 120] {
        group.bench_function(format!("build_{count}"), |b| {
            b.iter(|| SearchIndex::build(black_box(sections(count))));
        });
        let index = SearchIndex::build(sections(count));
        group.bench_function(format!("query_hit_{count}"), |b| {
            b.iter(|| index.query(black_box("  Compiler ")).items().len());
        });
        group.bench_function(format!("query_miss_{count}"), |b| {
            b.iter(|| index.query(black_box("cobol")).items().len());
        });
    }
    group.finish();
}

criterion_group!(benches, bench_search);
criterion_main!(benches);
