//! GCMC Command-Line Interface
//!
//! Runs a grand canonical Monte Carlo simulation described by a YAML file.

use color_eyre::eyre::Result;
use grand::app::GcmcApplication;

fn main() -> Result<()> {
    color_eyre::install()?;
    GcmcApplication::from_cli()?.run()
}
