// Merge-and-rank benchmarks over synthetic candidate lists
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use paperrank_core::{merge_and_rank, AlignmentPolicy, CandidatePaper};

fn generate_candidates(n: usize) -> Vec<CandidatePaper> {
    (0..n)
        .map(|i| {
            CandidatePaper::new(
                format!("Paper {}", i),
                vec![format!("Author {}", i)],
                format!("Abstract number {}", i),
                format!("http://arxiv.org/abs/{:04}.{:05}v1", 2000 + i % 25, i),
            )
        })
        .collect()
}

// Deterministic spread with plenty of ties
fn generate_scores(n: usize) -> Vec<f64> {
    (0..n).map(|i| ((i * 7919) % 1000) as f64 / 1000.0).collect()
}

fn benchmark_merge_and_rank(c: &mut Criterion) {
    let mut group = c.benchmark_group("merge_and_rank");

    for size in [5, 100, 2000].iter() {
        let candidates = generate_candidates(*size);
        let scores = generate_scores(*size);

        group.bench_with_input(BenchmarkId::new("truncate", size), size, |b, _| {
            b.iter(|| {
                merge_and_rank(
                    black_box(candidates.clone()),
                    black_box(&scores),
                    AlignmentPolicy::Truncate,
                )
            });
        });
    }

    group.finish();
}

criterion_group!(benches, benchmark_merge_and_rank);
criterion_main!(benches);
