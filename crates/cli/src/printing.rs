use tegen_sim::prelude::{GenomeBackend, SimulationConfig, Snapshot};

pub fn print_parameters(config: &SimulationConfig) {
    print_configuration(config, &format!("Backend: {} [--backend]", config.backend));
}

/// Parameters of a run repeated on every backend; `--backend` is ignored there.
pub fn print_compare_parameters(config: &SimulationConfig) {
    let backends = GenomeBackend::ALL.map(|b| b.to_string()).join(", ");
    print_configuration(config, &format!("Backends: {backends}"));
}

fn print_configuration(config: &SimulationConfig, backend_line: &str) {
    let events = &config.events;

    println!("📋 Simulation Configuration");
    println!("  • {backend_line}");
    println!("  • Initial Length: {} sites [--length]", config.initial_length);
    println!("  • Steps: {} [--steps]", config.steps);
    match config.seed {
        Some(seed) => println!("  • Random Seed: {seed} [--seed]"),
        None => println!("  • Random Seed: Random [--seed]"),
    }

    println!("\n🎲 Event Mix");
    println!("  • Insert: {:.2}", events.insert_prob());
    println!("  • Copy: {:.2} (offset window ±{})", events.copy_prob, events.copy_window);
    println!("  • Disable: {:.2}", events.disable_prob);
    println!(
        "  • Insert Length: Geometric(p = {}), mean {:.1}, at most {}",
        events.length_p,
        events.mean_length(),
        events.max_length
    );
}

/// Print one genome line, prefixed with its step number.
pub fn print_render(step: usize, render: &str) {
    println!("{step:>6} {render}");
}

pub fn print_summary(snapshot: &Snapshot) {
    println!("\n📊 Summary");
    println!("  • Steps: {}", snapshot.step);
    println!("  • Length: {}", snapshot.length);
    println!("  • Active TEs: {}", snapshot.active.len());
    println!("  • TEs Created: {}", snapshot.issued);
    println!("\n{}", snapshot.render);
}
