//! Criterion benchmarks for the per-keystroke path: search, visibility
//! recomputation and full render.
//!
//! Every keystroke in the search box re-runs the linear scan and rebuilds the
//! visibility map, so both must stay well under a frame on realistic data.
//!
//! Run with:
//! ```bash
//! cargo bench --package streamdiag-core --bench search_bench
//! ```

use std::sync::Arc;

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use streamdiag_core::{
    search::run_query, Category, Document, Layer, Page, Renderer, Technology, VisibilityMap,
    MIN_QUERY_LEN,
};

// ── Fixture builders ──────────────────────────────────────────────────────────

/// Builds a document with `layers` layers × 6 categories × 12 technologies.
fn build_document(layers: usize) -> Document {
    Document {
        layers: (0..layers)
            .map(|l| Layer {
                id: format!("layer-{l}"),
                name: format!("Layer {l}"),
                categories: (0..6)
                    .map(|c| Category {
                        id: format!("cat-{l}-{c}"),
                        name: format!("Category {l}.{c}"),
                        technologies: (0..12)
                            .map(|t| Technology {
                                name: format!("Tech {l}.{c}.{t}"),
                                description: "A streaming standard".to_string(),
                                search_terms: vec![
                                    format!("term{t}"),
                                    "mpeg".to_string(),
                                    "low-latency".to_string(),
                                ],
                                links: None,
                            })
                            .collect(),
                        ..Category::default()
                    })
                    .collect(),
                ..Layer::default()
            })
            .collect(),
        ..Document::default()
    }
}

fn bench_search(c: &mut Criterion) {
    let mut group = c.benchmark_group("search");
    for layers in [5usize, 20, 80] {
        let doc = build_document(layers);
        group.bench_with_input(BenchmarkId::new("query_and_apply", layers), &doc, |b, doc| {
            let mut visibility = VisibilityMap::for_document(doc);
            b.iter(|| {
                let outcome = run_query(doc, black_box("term7"), MIN_QUERY_LEN);
                visibility.apply(&outcome);
            });
        });
    }
    group.finish();
}

fn bench_render(c: &mut Criterion) {
    let renderer = Renderer::with_document(Arc::new(build_document(20)));
    c.bench_function("render_20_layers", |b| {
        b.iter(|| {
            let mut page = Page::new().with_mount("diagram");
            renderer
                .render(&mut page, "diagram")
                .expect("mount exists and document is loaded");
            black_box(page);
        });
    });
}

criterion_group!(benches, bench_search, bench_render);
criterion_main!(benches);
