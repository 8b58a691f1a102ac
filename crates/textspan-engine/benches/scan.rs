use criterion::{Criterion, criterion_group, criterion_main};
use textspan_engine::scan::longest_bounded;

fn bench_longest_bounded(c: &mut Criterion) {
    let mut group = c.benchmark_group("scan");
    group.sample_size(10);

    // Alternating markers make every position a candidate endpoint
    let text = "ab".repeat(500);
    group.bench_function("longest_bounded", |b| {
        b.iter(|| {
            let got = longest_bounded(std::hint::black_box(&text), 'a', 'b');
            std::hint::black_box(got);
        });
    });

    group.finish();
}

criterion_group!(benches, bench_longest_bounded);
criterion_main!(benches);
