use std::time::{Duration, Instant};

use anyhow::{bail, Context, Result};
use serde_json::json;
use tegen_sim::prelude::{GenomeBackend, Simulation, SimulationConfig, Snapshot, TeEvent};
use tracing::info;

use crate::args::CompareArgs;
use crate::printing::print_compare_parameters;

struct BackendRun {
    backend: GenomeBackend,
    elapsed: Duration,
    snapshot: Snapshot,
    history: Vec<TeEvent>,
}

fn run_backend(config: &SimulationConfig, backend: GenomeBackend) -> Result<BackendRun> {
    let config = SimulationConfig {
        backend,
        ..config.clone()
    };

    let start = Instant::now();
    let mut sim = Simulation::new(config)
        .with_context(|| format!("Failed to create {backend} simulation"))?;
    let snapshot = sim
        .run()
        .with_context(|| format!("{backend} simulation failed"))?;
    let elapsed = start.elapsed();
    info!(%backend, ?elapsed, "backend finished");

    Ok(BackendRun {
        backend,
        elapsed,
        snapshot,
        history: sim.history().to_vec(),
    })
}

/// Describe the first observable difference between two runs.
fn divergence(a: &BackendRun, b: &BackendRun) -> Option<String> {
    if let Some(step) = a.history.iter().zip(&b.history).position(|(x, y)| x != y) {
        return Some(format!("event logs differ at step {}", step + 1));
    }
    let (x, y) = (&a.snapshot, &b.snapshot);
    if x.length != y.length {
        return Some(format!("lengths differ: {} vs {}", x.length, y.length));
    }
    if x.active != y.active {
        return Some("active TE sets differ".to_string());
    }
    if x.issued != y.issued {
        return Some(format!("issued ids differ: {} vs {}", x.issued, y.issued));
    }
    if x.render != y.render {
        return Some("renders differ".to_string());
    }
    None
}

/// Run the same seeded simulation on every backend and check they agree.
pub fn compare_backends(args: &CompareArgs) -> Result<()> {
    let mut config = args.sim.resolve()?;
    // Both runs must draw the same events
    let seed = *config.seed.get_or_insert_with(rand::random);

    if !args.json {
        print_compare_parameters(&config);
        println!();
    }

    let runs = GenomeBackend::ALL
        .into_iter()
        .map(|backend| run_backend(&config, backend))
        .collect::<Result<Vec<_>>>()?;

    let reference = &runs[0];
    let mismatch = runs[1..]
        .iter()
        .find_map(|run| divergence(reference, run).map(|why| (run.backend, why)));

    if args.json {
        let report = json!({
            "seed": seed,
            "identical": mismatch.is_none(),
            "length": reference.snapshot.length,
            "active": reference.snapshot.active.len(),
            "backends": runs
                .iter()
                .map(|run| json!({
                    "backend": run.backend,
                    "elapsed_secs": run.elapsed.as_secs_f64(),
                }))
                .collect::<Vec<_>>(),
        });
        println!(
            "{}",
            serde_json::to_string_pretty(&report).context("Failed to serialize report")?
        );
    } else {
        println!("⏱  Backend Timings");
        for run in &runs {
            println!(
                "  • {:<10} {:>10.3} ms",
                run.backend.to_string(),
                run.elapsed.as_secs_f64() * 1e3
            );
        }
    }

    if let Some((backend, why)) = mismatch {
        bail!(
            "{} and {backend} diverged with seed {seed}: {why}",
            reference.backend
        );
    }

    if !args.json {
        println!(
            "\n✓ Backends agree after {} steps (length {}, {} active TEs)",
            reference.snapshot.step,
            reference.snapshot.length,
            reference.snapshot.active.len()
        );
    }
    Ok(())
}
