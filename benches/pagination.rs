//! Benchmarks for pagination and page selection
//!
//! Run with: cargo bench --bench pagination

use folio::paginate::{paginate, select_pages};

#[global_allocator]
static ALLOC: divan::AllocProfiler = divan::AllocProfiler::system();

fn main() {
    divan::main();
}

#[divan::bench(args = [1_000, 100_000, 1_000_000])]
fn paginate_text(bencher: divan::Bencher, chars: usize) {
    let text = "x".repeat(chars);
    bencher.bench(|| paginate(divan::black_box(&text), 1800));
}

#[divan::bench(args = ["", "1,3-5,2", "1-500"])]
fn select_range(bencher: divan::Bencher, spec: &str) {
    let pages = paginate(&"y".repeat(1800 * 500), 1800).unwrap_or_default();
    bencher.bench(|| select_pages(&pages, divan::black_box(spec)));
}
