mod args;
mod commands;
mod printing;

use anyhow::Result;
use clap::{ArgAction, Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use args::{CompareArgs, InitArgs, RunArgs};
use commands::{compare, init, run};

/// tegen: a transposable element genome simulator
///
/// Simulates a circular genome in which transposable elements (TEs) insert,
/// copy themselves and get disabled over time.
#[derive(Parser, Debug)]
#[command(name = "tegen")]
#[command(author, version, about = "Simulates transposable elements in a circular genome", long_about = None)]
struct Cli {
    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    ///
    /// RUST_LOG takes precedence when set.
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Write a simulation configuration file.
    ///
    /// The file can be edited and passed back with `tegen run --config`.
    Init(InitArgs),

    /// Run a simulation and print the resulting genome.
    Run(RunArgs),

    /// Run the same seeded simulation on every backend and check they agree.
    ///
    /// Exits with an error if the backends produce different genomes.
    Compare(CompareArgs),
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match cli.command {
        Commands::Init(args) => init::init_config(&args)?,
        Commands::Run(args) => run::run_simulation(&args)?,
        Commands::Compare(args) => compare::compare_backends(&args)?,
    }

    Ok(())
}
