//! Engine performance benchmarks (Criterion).
//!
//! Run: `cargo bench` or `cargo bench --bench engine`.

use criterion::{criterion_group, criterion_main, BatchSize, Criterion, Throughput};
use limit_order_book::{Engine, Generator, GeneratorConfig, Side};
use rust_decimal::Decimal;

fn bench_submit_throughput(c: &mut Criterion) {
    const N: usize = 1000;
    let mut group = c.benchmark_group("engine");
    group.throughput(Throughput::Elements(N as u64));
    group.bench_function("submit_1000_mixed", |b| {
        b.iter_batched(
            || {
                let orders = Generator::new(GeneratorConfig {
                    seed: 42,
                    num_orders: N,
                    ..Default::default()
                })
                .all_orders();
                (Engine::new(), orders)
            },
            |(mut engine, orders)| {
                for (side, price, quantity) in orders {
                    engine.submit(side, price, quantity).unwrap();
                }
            },
            BatchSize::SmallInput,
        )
    });
    group.finish();
}

fn bench_deep_book_sweep(c: &mut Criterion) {
    const LEVELS: i64 = 500;
    let mut group = c.benchmark_group("engine");
    group.throughput(Throughput::Elements(1));
    group.bench_function("sweep_500_ask_levels", |b| {
        b.iter_batched(
            || {
                let mut engine = Engine::new();
                for i in 0..LEVELS {
                    engine
                        .submit(Side::Sell, Decimal::from(100 + i), 10)
                        .unwrap();
                }
                engine
            },
            |mut engine| {
                // One aggressive buy clears the whole ask side.
                let result = engine
                    .submit(Side::Buy, Decimal::from(100 + LEVELS), (LEVELS as u64) * 10)
                    .unwrap();
                assert_eq!(result.trades.len(), LEVELS as usize);
            },
            BatchSize::SmallInput,
        )
    });
    group.finish();
}

criterion_group!(benches, bench_submit_throughput, bench_deep_book_sweep);
criterion_main!(benches);
