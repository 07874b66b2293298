// Copyright 2025 the Waymark Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Benchmarks for `waymark_site` text extraction and search.

use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use waymark_site::{IndexEntry, Page, make_snippet, search_index, strip_html_tags};

fn article(i: usize) -> String {
    let mut html = format!("<html><head><title>Article {i}</title></head><body><h2>第{i}篇</h2>");
    for p in 0..40 {
        html.push_str(&format!(
            "<p>Paragraph {p} of article {i} describes the <b>old walls</b> and the 城門.</p>\n"
        ));
    }
    if i % 7 == 0 {
        html.push_str("<p>The East Gate was rebuilt.</p>");
    }
    html.push_str("</body></html>");
    html
}

fn bench_strip(c: &mut Criterion) {
    let html = article(1);
    c.bench_function("strip_html_tags", |b| {
        b.iter(|| black_box(strip_html_tags(black_box(&html))));
    });
}

fn bench_search(c: &mut Criterion) {
    let mut group = c.benchmark_group("search_index");
    for &pages in &[10_usize, 200] {
        let entries: Vec<IndexEntry> = (0..pages)
            .map(|i| IndexEntry::from(Page::from_html(&format!("{i}.html"), &article(i))))
            .collect();
        group.bench_with_input(BenchmarkId::new("pages", pages), &entries, |b, entries| {
            b.iter(|| black_box(search_index(entries, black_box("east gate"))));
        });
    }
    group.finish();

    let text = strip_html_tags(&article(7));
    c.bench_function("make_snippet_late_match", |b| {
        b.iter(|| black_box(make_snippet(black_box(&text), "rebuilt")));
    });
}

criterion_group!(benches, bench_strip, bench_search);
criterion_main!(benches);
