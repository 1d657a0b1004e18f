use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use tegen_sim::prelude::*;

const SIZES: [usize; 3] = [100, 1_000, 10_000];

/// A genome of `n` sites with an active element every 50 sites.
fn populated(n: usize, backend: GenomeBackend) -> Box<dyn Genome> {
    let mut genome = new_genome(n, backend);
    for pos in (0..n).step_by(50) {
        // Each insertion shifts later positions, so place from the back
        let _ = genome.insert_te(n - 1 - pos, 3);
    }
    genome
}

fn bench_insert(c: &mut Criterion) {
    let mut group = c.benchmark_group("insert_te");

    for backend in GenomeBackend::ALL {
        for &n in &SIZES {
            group.bench_with_input(BenchmarkId::new(backend.to_string(), n), &n, |b, &n| {
                b.iter_batched(
                    || new_genome(n, backend),
                    |mut genome| {
                        black_box(genome.insert_te(black_box(n / 2), black_box(5)).unwrap());
                        genome
                    },
                    criterion::BatchSize::SmallInput,
                )
            });
        }
    }

    group.finish();
}

fn bench_copy(c: &mut Criterion) {
    let mut group = c.benchmark_group("copy_te");

    for backend in GenomeBackend::ALL {
        for &n in &SIZES {
            group.bench_with_input(BenchmarkId::new(backend.to_string(), n), &n, |b, &n| {
                b.iter_batched(
                    || {
                        let mut genome = new_genome(n, backend);
                        let te = genome.insert_te(n / 4, 5).unwrap();
                        (genome, te)
                    },
                    |(mut genome, te)| {
                        black_box(genome.copy_te(te, black_box(n as i64 / 2)));
                        genome
                    },
                    criterion::BatchSize::SmallInput,
                )
            });
        }
    }

    group.finish();
}

fn bench_queries(c: &mut Criterion) {
    let mut group = c.benchmark_group("queries");

    for backend in GenomeBackend::ALL {
        for &n in &SIZES {
            let genome = populated(n, backend);
            let last = genome.active_tes().last().copied().unwrap_or(TeId(0));

            group.bench_function(BenchmarkId::new(format!("locate/{backend}"), n), |b| {
                b.iter(|| black_box(genome.locate(black_box(last))))
            });
            group.bench_function(BenchmarkId::new(format!("render/{backend}"), n), |b| {
                b.iter(|| black_box(genome.render()))
            });
        }
    }

    group.finish();
}

criterion_group!(benches, bench_insert, bench_copy, bench_queries);
criterion_main!(benches);
