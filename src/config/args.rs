//! Command-line argument parsing for GCMC runs

use clap::Parser;

/// Grand canonical Monte Carlo simulation of a Lennard-Jones fluid
#[derive(Parser, Debug, Default)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Path to the YAML configuration file
    #[arg(short, long, default_value = "config.yaml")]
    pub config_file: String,

    /// Override chemical species (Ar, He, Ne, Kr, Xe, Water)
    #[arg(long)]
    pub species: Option<String>,

    /// Override temperature (K)
    #[arg(long)]
    pub temperature: Option<f64>,

    /// Override cubic box side length (Å)
    #[arg(long)]
    pub box_length: Option<f64>,

    /// Override number of Monte Carlo steps
    #[arg(long)]
    pub steps: Option<usize>,

    /// Override random seed
    #[arg(long)]
    pub seed: Option<u64>,

    /// Override directory for trajectory and distribution files
    #[arg(long)]
    pub output_dir: Option<String>,

    /// Log file (default stdout)
    #[arg(short, long)]
    pub output: Option<String>,
}
