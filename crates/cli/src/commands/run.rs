use anyhow::{Context, Result};
use indicatif::{ProgressBar, ProgressStyle};
use tegen_sim::prelude::Simulation;

use crate::args::RunArgs;
use crate::printing::{print_parameters, print_render, print_summary};

pub fn run_simulation(args: &RunArgs) -> Result<()> {
    let config = args.sim.resolve()?;
    let total_steps = config.steps;

    if !args.json {
        print_parameters(&config);
        println!();
    }

    let mut sim = Simulation::new(config).context("Failed to create simulation")?;

    let show_every = args.show_every.filter(|&k| k > 0);
    if !args.json && show_every.is_some() {
        print_render(0, &sim.genome().render());
    }

    // Step renders and the bar would interleave on the terminal
    let pb = if args.json || args.no_progress || show_every.is_some() {
        None
    } else {
        let pb = ProgressBar::new(total_steps as u64);
        pb.set_style(
            ProgressStyle::default_bar()
                .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} ({eta}) {per_sec}")
                .context("Invalid progress bar template")?
                .progress_chars("#>-"),
        );
        Some(pb)
    };

    while !sim.is_finished() {
        let step = sim.current_step() + 1;
        sim.step()
            .with_context(|| format!("Step {step} failed"))?;

        if let Some(k) = show_every {
            if !args.json && step % k == 0 {
                print_render(step, &sim.genome().render());
            }
        }
        if let Some(pb) = &pb {
            pb.inc(1);
        }
    }

    if let Some(pb) = pb {
        pb.finish_with_message("Done");
    }

    let snapshot = sim.snapshot();
    if args.json {
        println!(
            "{}",
            serde_json::to_string_pretty(&snapshot).context("Failed to serialize snapshot")?
        );
    } else {
        print_summary(&snapshot);
    }
    Ok(())
}
