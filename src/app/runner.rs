use super::report::{report_progress, report_setup};
use crate::config::Config;
use crate::gcmc::{Gcmc, GcmcStatistics};
use crate::io::{write_radial_distribution, TrajectoryWriter};
use crate::rdf::RadialDistribution;
use color_eyre::eyre::{Result, WrapErr};
use tracing::{debug, info};

/// Final state of a finished run
#[derive(Debug, Clone)]
pub struct RunSummary {
    pub steps: usize,
    pub n_particles: usize,
    pub final_energy: f64,
    pub stats: GcmcStatistics,
}

/// Run a full simulation and write every output file.
///
/// Output files are opened before the first step so an unwritable directory
/// stops the run before any sampling happens.
pub fn run_simulation(config: &Config) -> Result<RunSummary> {
    config.validate().wrap_err("Invalid configuration")?;

    let species = config.species()?;
    let steps = config.steps();
    let output_dir = config.output_dir();

    let mut gcmc = Gcmc::from_species(species, config.box_length(), config.temperature())
        .with_boltzmann_constant(config.k_boltzmann());
    match config.seed {
        Some(seed) => {
            info!("Using random seed {}", seed);
            gcmc = gcmc.with_seed(seed);
        }
        None => info!("No seed given, drawing one from system entropy"),
    }
    report_setup(&gcmc, species, steps);

    let mut writer = TrajectoryWriter::create(&output_dir, species)?;
    let mut rdf = RadialDistribution::new(config.rdf_n_bins(), config.rdf_bin_size());
    let log_interval = config.log_interval();

    for step in 0..steps {
        let outcome = gcmc.monte_carlo_step();
        debug!(
            "step {}: {} {} (N = {})",
            step,
            outcome.move_type,
            if outcome.accepted { "accepted" } else { "rejected" },
            outcome.n_particles
        );

        gcmc.sample();
        writer
            .record(step as u64, outcome.energy, &gcmc.positions)
            .wrap_err_with(|| format!("Failed to write output for step {}", step))?;
        rdf.accumulate(gcmc.sim_box(), &gcmc.positions);

        if (step + 1) % log_interval == 0 {
            report_progress(step + 1, &gcmc);
        }
    }

    writer.flush().wrap_err("Failed to flush trajectory output")?;

    let bins = rdf.finalize(gcmc.sim_box(), gcmc.n_particles());
    write_radial_distribution(&output_dir, &bins)?;
    info!(
        "Radial distribution ({} shells) written to {}",
        bins.len(),
        output_dir.display()
    );

    gcmc.stats.report();

    Ok(RunSummary {
        steps,
        n_particles: gcmc.n_particles(),
        final_energy: gcmc.energy(),
        stats: gcmc.stats.clone(),
    })
}
