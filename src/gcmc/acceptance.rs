// file: `src/gcmc/acceptance.rs`
use super::MoveType;
use std::f64::consts::PI;

/// Unit-conversion factor of the insertion/deletion volume term.
///
/// Equals one atmosphere expressed in K/Å³ (1.01325 bar over k_B in Å³·bar/K),
/// matching energies in Kelvin and volumes in Å³.
pub const CALIBRATION: f64 = 0.0073389366;

pub const BOLTZMANN_SI: f64 = 1.380649e-23;
pub const PLANCK_SI: f64 = 6.62607015e-34;
pub const AMU_KG: f64 = 1.66053906660e-27;

/// Acceptance rules for the three GCMC move types.
///
/// Follows the asymmetric Metropolis scheme of Frenkel & Smit (UMS, 2nd ed.,
/// p. 130): a downhill move is always taken, otherwise the move-specific
/// probability is compared with a uniform draw supplied by the caller.
#[derive(Debug, Clone, PartialEq)]
pub struct AcceptanceCriterion {
    /// Temperature (K)
    pub temperature: f64,
    /// Particle mass (AMU)
    pub mass: f64,
    /// Box volume (Å³)
    pub volume: f64,
    /// Boltzmann constant in energy units per Kelvin (1.0 when energies are in K)
    pub k_boltzmann: f64,
}

impl AcceptanceCriterion {
    pub fn new(temperature: f64, mass: f64, volume: f64) -> Self {
        Self {
            temperature,
            mass,
            volume,
            k_boltzmann: 1.0,
        }
    }

    pub fn with_boltzmann_constant(mut self, k_boltzmann: f64) -> Self {
        self.k_boltzmann = k_boltzmann;
        self
    }

    /// Thermodynamic beta, 1/(kT)
    pub fn beta(&self) -> f64 {
        1.0 / (self.k_boltzmann * self.temperature)
    }

    /// Thermal de Broglie wavelength in Å
    pub fn thermal_wavelength(&self) -> f64 {
        let mass_kg = self.mass * AMU_KG;
        let lambda = PLANCK_SI / (2.0 * PI * mass_kg * BOLTZMANN_SI * self.temperature).sqrt();
        lambda * 1e10
    }

    pub fn boltzmann_factor(&self, delta: f64) -> f64 {
        (-self.beta() * delta).exp()
    }

    /// Move-specific acceptance probability for an uphill move.
    ///
    /// `n` is the particle count before the move was made. The value is not
    /// clamped to 1.
    pub fn probability(&self, current_pe: f64, new_pe: f64, move_type: MoveType, n: usize) -> f64 {
        let boltzmann_factor = self.boltzmann_factor(new_pe - current_pe);
        let kt = self.temperature * self.k_boltzmann;
        match move_type {
            MoveType::Translate => boltzmann_factor,
            MoveType::Create => {
                let volume_term = self.volume / (kt * n as f64);
                volume_term * boltzmann_factor * CALIBRATION
            }
            MoveType::Destroy => {
                let volume_term = kt * (n + 1) as f64 / self.volume;
                volume_term * boltzmann_factor / CALIBRATION
            }
        }
    }

    /// Decide a trial move given the uniform draw `u` in [0, 1)
    pub fn accepts(
        &self,
        current_pe: f64,
        new_pe: f64,
        move_type: MoveType,
        n: usize,
        u: f64,
    ) -> bool {
        if new_pe - current_pe < 0.0 {
            return true;
        }
        self.probability(current_pe, new_pe, move_type, n) > u
    }
}
