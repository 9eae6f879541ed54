//! Reuse-cycle benchmarks
//!
//! Simulates a request/response cycle: grab a buffer, fill it, hand it back.

use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};
use synckit::{ObjectPool, WaitGroup};

fn bench_request_response(c: &mut Criterion) {
    let mut group = c.benchmark_group("request_response");
    group.throughput(Throughput::Elements(1));

    group.bench_function("pool_reuse", |b| {
        let pool = ObjectPool::new(|| Vec::<u8>::with_capacity(4096));
        b.iter(|| {
            let mut buf = pool.get().unwrap();
            buf.clear();
            buf.extend_from_slice(&[0x42; 256]);
            black_box(buf.len());
        });
    });

    group.bench_function("fresh_allocation", |b| {
        b.iter(|| {
            let mut buf = Vec::<u8>::with_capacity(4096);
            buf.extend_from_slice(&[0x42; 256]);
            black_box(buf);
        });
    });

    group.finish();
}

fn bench_wait_group_round(c: &mut Criterion) {
    let mut group = c.benchmark_group("wait_group");
    group.throughput(Throughput::Elements(1));

    group.bench_function("add_done_wait", |b| {
        let wg = WaitGroup::new();
        b.iter(|| {
            wg.add(1).unwrap();
            wg.done().unwrap();
            wg.wait();
        });
    });

    group.finish();
}

criterion_group!(benches, bench_request_response, bench_wait_group_round);
criterion_main!(benches);
