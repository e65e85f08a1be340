//! Benchmarks for order book operations

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use matchbook::{OrderBook, Side};

fn seed_book(levels: i64) -> OrderBook {
    let mut book = OrderBook::new("BTCUSDT");
    for i in 0..levels {
        book.add(50_000 - i, 10, Side::Bid).unwrap();
        book.add(50_001 + i, 10, Side::Ask).unwrap();
    }
    book
}

fn benchmark_seed(c: &mut Criterion) {
    c.bench_function("seed_100_levels", |b| {
        b.iter(|| seed_book(black_box(100)))
    });
}

fn benchmark_resting_add(c: &mut Criterion) {
    let mut book = seed_book(100);

    c.bench_function("resting_add", |b| {
        b.iter(|| {
            book.add(black_box(49_950), black_box(1), Side::Bid).unwrap();
        })
    });
}

fn benchmark_crossing_add(c: &mut Criterion) {
    c.bench_function("crossing_add_sweeps_10_levels", |b| {
        b.iter_with_setup(
            || seed_book(100),
            |mut book| {
                book.add(black_box(50_010), black_box(100), Side::Bid).unwrap();
                book
            },
        )
    });
}

fn benchmark_queries(c: &mut Criterion) {
    let book = seed_book(100);

    c.bench_function("best_bid", |b| {
        b.iter(|| black_box(book.best_bid().unwrap()))
    });

    c.bench_function("depth_20", |b| {
        b.iter(|| black_box(book.depth(Side::Bid, 20)))
    });

    c.bench_function("calculate_metrics", |b| {
        b.iter(|| black_box(book.metrics()))
    });

    c.bench_function("get_state", |b| {
        b.iter(|| black_box(book.state()))
    });
}

criterion_group!(
    benches,
    benchmark_seed,
    benchmark_resting_add,
    benchmark_crossing_add,
    benchmark_queries
);
criterion_main!(benches);
