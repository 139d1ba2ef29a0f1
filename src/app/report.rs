use crate::gcmc::Gcmc;
use crate::species::Species;
use tracing::info;

pub fn report_setup(gcmc: &Gcmc, species: Species, steps: usize) {
    let params = species.parameters();
    info!("GCMC run for {} ({} steps)", species, steps);
    info!(
        "  sigma = {:.6} Å, epsilon = {:.6} K, mass = {:.4} AMU",
        params.sigma, params.epsilon, params.mass
    );
    info!(
        "  box length = {:.4} Å, volume = {:.4} Å³, cutoff = {:.4} Å",
        gcmc.sim_box().length,
        gcmc.sim_box().volume(),
        gcmc.sim_box().cutoff()
    );
    info!(
        "  T = {:.4} K, beta = {:.6e}, thermal wavelength = {:.6} Å",
        gcmc.temperature(),
        gcmc.criterion.beta(),
        gcmc.criterion.thermal_wavelength()
    );
}

pub fn report_progress(step: usize, gcmc: &Gcmc) {
    info!(
        "Step {:>8}: N = {:>5}, E = {:>14.6} K, rho = {:.6e} Å⁻³",
        step,
        gcmc.n_particles(),
        gcmc.energy(),
        gcmc.density()
    );
}
