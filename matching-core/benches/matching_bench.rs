use criterion::{criterion_group, criterion_main, Criterion, Throughput};
use matching_core::prelude::*;

fn seeded_engine(depth: u64) -> (MatchingEngine, ExecutionContext) {
    let mut engine = MatchingEngine::new(SelfTradePreventionConfig::default());
    engine.register_symbol("BTC-USD").unwrap();
    let mut context = ExecutionContext::new();

    for i in 0..depth {
        let trader = format!("maker-{i}");
        context.add_traders([trader.as_str()]);
        engine
            .submit_limit(&mut context, Side::Sell, trader, "BTC-USD", 1000 + (i % 500) as i64, 10)
            .unwrap();
    }

    (engine, context)
}

fn bench_resting_insertion(c: &mut Criterion) {
    let mut group = c.benchmark_group("resting insertion");
    group.throughput(Throughput::Elements(10_000));
    group.bench_function("submit_limit 10k non-crossing orders", |b| {
        b.iter_batched(
            || seeded_engine(0),
            |(mut engine, mut context)| {
                context.add_traders(["bulk"]);
                for i in 0..10_000u64 {
                    engine
                        .submit_limit(&mut context, Side::Buy, "bulk", "BTC-USD", 1 + (i % 1000) as i64, 10)
                        .unwrap();
                }
            },
            criterion::BatchSize::LargeInput,
        );
    });
    group.finish();
}

fn bench_crossing_throughput(c: &mut Criterion) {
    let mut group = c.benchmark_group("crossing throughput");
    group.throughput(Throughput::Elements(10_000));
    group.bench_function("submit_limit 10k aggressors against 10k resting asks", |b| {
        b.iter_batched(
            || seeded_engine(10_000),
            |(mut engine, mut context)| {
                context.add_traders(["aggressor"]);
                for _ in 0..10_000u64 {
                    engine
                        .submit_limit(&mut context, Side::Buy, "aggressor", "BTC-USD", 1500, 10)
                        .unwrap();
                }
            },
            criterion::BatchSize::LargeInput,
        );
    });
    group.finish();
}

fn bench_cancel_scan(c: &mut Criterion) {
    let mut group = c.benchmark_group("cancel scan");
    group.throughput(Throughput::Elements(1));
    group.bench_function("cancel miss on a 5k-level book", |b| {
        let (mut engine, mut context) = seeded_engine(5_000);
        b.iter(|| {
            let _ = engine.cancel(
                &mut context,
                CancelRequest {
                    order_id: u64::MAX,
                    symbol: "BTC-USD".to_string(),
                    trader_id: "nobody".to_string(),
                },
            );
        });
    });
    group.finish();
}

criterion_group!(
    benches,
    bench_resting_insertion,
    bench_crossing_throughput,
    bench_cancel_scan
);
criterion_main!(benches);
