//! Benchmarks for layout tokenization performance.
//!
//! Run with: cargo bench
//!
//! These benchmarks measure the pipeline over synthetic page geometry.

use criterion::{black_box, criterion_group, criterion_main, Criterion};

use pagecut::{process_pages, InputElement, LayoutOptions, PageInput, Rectangle};

/// Build a synthetic two-column page with `rows` lines per column.
fn synthetic_page(rows: usize) -> PageInput {
    let mut page = PageInput::new();
    for column in 0..2 {
        let x0 = 50.0 + column as f32 * 260.0;
        for row in 0..rows {
            let y = 760.0 - row as f32 * 12.0;
            for word in 0..6 {
                let wx = x0 + word as f32 * 38.0;
                for i in 0..6 {
                    let cx = wx + i as f32 * 5.0;
                    page.push(InputElement::character(
                        Rectangle::new(cx, y, cx + 4.5, y + 7.0),
                        "a",
                        "F1",
                        10.0,
                    ));
                }
            }
        }
    }
    page
}

fn bench_tokenize_page(c: &mut Criterion) {
    let page = synthetic_page(50);
    let doc = process_pages(std::slice::from_ref(&page)).unwrap();
    assert!(!doc.is_empty());

    c.bench_function("tokenize_two_column_page", |b| {
        b.iter(|| {
            let doc = process_pages(black_box(std::slice::from_ref(&page))).unwrap();
            black_box(doc.block_count())
        });
    });
}

fn bench_multi_page_document(c: &mut Criterion) {
    let pages: Vec<PageInput> = (0..8).map(|_| synthetic_page(40)).collect();

    c.bench_function("process_eight_pages", |b| {
        b.iter(|| {
            let doc = process_pages(black_box(&pages)).unwrap();
            black_box(doc.paragraphs.len())
        });
    });

    let sequential = LayoutOptions::new().sequential();
    c.bench_function("process_eight_pages_sequential", |b| {
        b.iter(|| {
            let doc =
                pagecut::process_pages_with_options(black_box(&pages), &sequential).unwrap();
            black_box(doc.paragraphs.len())
        });
    });
}

criterion_group!(benches, bench_tokenize_page, bench_multi_page_document);
criterion_main!(benches);
