mod report;
mod runner;

pub use runner::{run_simulation, RunSummary};

use crate::config::{Args, Config};
use crate::io::setup_output;
use clap::Parser;
use color_eyre::eyre::{Result, WrapErr};
use std::fs;
use tracing::info;

pub struct GcmcApplication {
    args: Args,
    config: Config,
}

impl GcmcApplication {
    pub fn from_cli() -> Result<Self> {
        let args = Args::parse();
        let config = load_config(&args)?;
        Ok(Self { args, config })
    }

    pub fn run(self) -> Result<()> {
        setup_output(self.args.output.as_ref());
        info!("Configuration read from: {}", self.args.config_file);

        let summary = run_simulation(&self.config)?;
        info!(
            "Finished {} steps with N = {} and E = {:.6} K",
            summary.steps, summary.n_particles, summary.final_energy
        );
        Ok(())
    }
}

fn load_config(args: &Args) -> Result<Config> {
    let config_content = fs::read_to_string(&args.config_file)
        .wrap_err_with(|| format!("Unable to read configuration file: {}", args.config_file))?;

    let config = Config::from_yaml(&config_content)
        .wrap_err("Failed to parse configuration file")?
        .apply_args(args);

    Ok(config)
}
