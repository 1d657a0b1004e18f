use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use tegen_sim::prelude::*;

fn config(backend: GenomeBackend, initial_length: usize, steps: usize) -> SimulationConfig {
    SimulationConfig {
        initial_length,
        steps,
        seed: Some(42),
        backend,
        events: EventConfig::default(),
    }
}

fn bench_simulation_run(c: &mut Criterion) {
    let mut group = c.benchmark_group("simulation_run");
    let steps = 500;

    group.throughput(Throughput::Elements(steps as u64));

    for backend in GenomeBackend::ALL {
        for initial_length in [100, 10_000] {
            group.bench_with_input(
                BenchmarkId::new(backend.to_string(), initial_length),
                &initial_length,
                |b, &initial_length| {
                    b.iter_batched(
                        || Simulation::new(config(backend, initial_length, steps)).unwrap(),
                        |mut sim| black_box(sim.run().unwrap()),
                        criterion::BatchSize::SmallInput,
                    )
                },
            );
        }
    }

    group.finish();
}

fn bench_replay(c: &mut Criterion) {
    let mut group = c.benchmark_group("replay");

    let mut sim = Simulation::new(config(GenomeBackend::Contiguous, 1_000, 1_000)).unwrap();
    sim.run().unwrap();
    let events = sim.history().to_vec();

    for backend in GenomeBackend::ALL {
        group.bench_function(backend.to_string(), |b| {
            b.iter(|| black_box(replay(black_box(&events), 1_000, backend).unwrap()))
        });
    }

    group.finish();
}

criterion_group!(benches, bench_simulation_run, bench_replay);
criterion_main!(benches);
