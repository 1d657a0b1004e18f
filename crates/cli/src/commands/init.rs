use anyhow::{bail, Context, Result};

use crate::args::InitArgs;
use crate::printing::print_parameters;

/// Write a configuration file that `tegen run --config` can load.
pub fn init_config(args: &InitArgs) -> Result<()> {
    let output = &args.output;
    if output.exists() && !args.force {
        bail!(
            "{} already exists (use --force to overwrite)",
            output.display()
        );
    }

    let config = args.sim.resolve()?;
    config
        .to_file(output)
        .with_context(|| format!("Failed to write {}", output.display()))?;

    print_parameters(&config);
    println!("\n✓ Configuration written to {}", output.display());
    Ok(())
}
