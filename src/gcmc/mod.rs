// file: `src/gcmc/mod.rs`
mod acceptance;
mod moves;

pub use acceptance::{AcceptanceCriterion, AMU_KG, BOLTZMANN_SI, CALIBRATION, PLANCK_SI};

use crate::lj_pot::LennardJones;
use crate::pbc::SimulationBox;
use crate::species::Species;
use nalgebra::Vector3;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::fmt;
use tracing::info;

/// Kind of trial move
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MoveType {
    Create,
    Translate,
    Destroy,
}

impl fmt::Display for MoveType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            MoveType::Create => "create",
            MoveType::Translate => "translate",
            MoveType::Destroy => "destroy",
        };
        f.write_str(name)
    }
}

/// Everything needed to take back the trial move that is waiting for a decision
#[derive(Debug, Clone, PartialEq)]
pub enum PendingMove {
    Translate {
        index: usize,
        displacement: Vector3<f64>,
    },
    Create {
        index: usize,
    },
    Destroy {
        index: usize,
        position: Vector3<f64>,
    },
}

impl PendingMove {
    pub fn move_type(&self) -> MoveType {
        match self {
            PendingMove::Translate { .. } => MoveType::Translate,
            PendingMove::Create { .. } => MoveType::Create,
            PendingMove::Destroy { .. } => MoveType::Destroy,
        }
    }
}

/// Result of one resolved Monte Carlo step
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StepOutcome {
    pub step: u64,
    pub move_type: MoveType,
    pub accepted: bool,
    /// Energy of the committed configuration after the step (K)
    pub energy: f64,
    pub n_particles: usize,
}

/// Grand Canonical Monte Carlo (GCMC) simulator for Lennard-Jones particles
///
/// In the grand canonical ensemble (μVT), the following are constant:
/// - Chemical potential (μ)
/// - Volume (V)
/// - Temperature (T)
///
/// The number of particles (N) fluctuates. Each step proposes one of three
/// moves, recomputes the total energy from scratch and either keeps the move
/// or takes it back:
/// 1. Displacement of a random particle
/// 2. Insertion at a random position
/// 3. Deletion of a random particle
#[derive(Debug)]
pub struct Gcmc {
    /// Lennard-Jones potential with PBC support
    pub lj: LennardJones,
    /// Current particle positions
    pub positions: Vec<Vector3<f64>>,
    /// Acceptance rules for this temperature, mass and volume
    pub criterion: AcceptanceCriterion,
    /// Random number generator
    rng: StdRng,
    /// Trial move awaiting commit or revert
    pending: Option<PendingMove>,
    /// Energy of the committed configuration
    energy: f64,
    /// Step counter
    pub step: u64,
    /// Statistics
    pub stats: GcmcStatistics,
}

impl Gcmc {
    /// Create a new GCMC simulation in an empty cubic box
    ///
    /// # Arguments
    /// * `epsilon` - LJ well depth ε/k_B (K)
    /// * `sigma` - LJ collision diameter (Å)
    /// * `mass` - Particle mass (AMU)
    /// * `box_length` - Side length of the cubic box (Å)
    /// * `temperature` - Temperature (K)
    pub fn new(epsilon: f64, sigma: f64, mass: f64, box_length: f64, temperature: f64) -> Self {
        let sim_box = SimulationBox::new(box_length);
        let lj = LennardJones::new(epsilon, sigma, sim_box);
        let criterion = AcceptanceCriterion::new(temperature, mass, sim_box.volume());

        Self {
            lj,
            positions: Vec::new(),
            criterion,
            rng: StdRng::from_entropy(),
            pending: None,
            energy: 0.0,
            step: 0,
            stats: GcmcStatistics::new(),
        }
    }

    pub fn from_species(species: Species, box_length: f64, temperature: f64) -> Self {
        let params = species.parameters();
        Self::new(
            params.epsilon,
            params.sigma,
            params.mass,
            box_length,
            temperature,
        )
    }

    /// Reseed the random stream so the run can be replayed exactly
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.rng = StdRng::seed_from_u64(seed);
        self
    }

    pub fn with_boltzmann_constant(mut self, k_boltzmann: f64) -> Self {
        self.criterion = self.criterion.with_boltzmann_constant(k_boltzmann);
        self
    }

    /// Replace the configuration, folding every position into the box
    pub fn set_positions(&mut self, positions: Vec<Vector3<f64>>) {
        let sim_box = self.lj.sim_box;
        self.positions = positions.into_iter().map(|p| sim_box.wrap_any(p)).collect();
        self.pending = None;
        self.energy = self.lj.total_energy(&self.positions);
    }

    pub fn sim_box(&self) -> &SimulationBox {
        &self.lj.sim_box
    }

    pub fn temperature(&self) -> f64 {
        self.criterion.temperature
    }

    /// Minimum-image distance between two particles
    pub fn distance(&self, a: usize, b: usize) -> f64 {
        self.lj
            .sim_box
            .minimum_image_distance(&self.positions[a], &self.positions[b])
    }

    /// Energy of the committed configuration, carried from step to step
    pub fn energy(&self) -> f64 {
        self.energy
    }

    /// Energy recomputed from the current positions
    pub fn compute_energy(&self) -> f64 {
        self.lj.total_energy(&self.positions)
    }

    pub fn pending(&self) -> Option<&PendingMove> {
        self.pending.as_ref()
    }

    /// Get current number of particles
    pub fn n_particles(&self) -> usize {
        self.positions.len()
    }

    /// Get current number density (Å⁻³)
    pub fn density(&self) -> f64 {
        self.positions.len() as f64 / self.lj.sim_box.volume()
    }

    /// Perform one Monte Carlo step.
    ///
    /// Random draws happen in a fixed order: move selection, move-specific
    /// coordinates, then the acceptance draw (taken even for downhill moves).
    pub fn monte_carlo_step(&mut self) -> StepOutcome {
        let n_before = self.positions.len();
        let move_type = self.propose_move();
        let new_energy = self.lj.total_energy(&self.positions);
        let u = self.rng.gen::<f64>();

        let accepted = self
            .criterion
            .accepts(self.energy, new_energy, move_type, n_before, u);
        if accepted {
            self.commit(new_energy);
        } else {
            self.revert();
        }

        self.stats.record(move_type, accepted);
        self.step += 1;

        StepOutcome {
            step: self.step,
            move_type,
            accepted,
            energy: self.energy,
            n_particles: self.positions.len(),
        }
    }

    /// Perform multiple Monte Carlo steps
    pub fn run(&mut self, n_steps: usize) {
        for _ in 0..n_steps {
            self.monte_carlo_step();
        }
    }

    /// Sample current state for statistics
    pub fn sample(&mut self) {
        self.stats.sample(self.positions.len(), self.energy);
    }
}

/// Statistics for tracking GCMC simulation
#[derive(Debug, Clone, Default, PartialEq)]
pub struct GcmcStatistics {
    pub translate_attempts: u64,
    pub translate_accepted: u64,
    pub create_attempts: u64,
    pub create_accepted: u64,
    pub destroy_attempts: u64,
    pub destroy_accepted: u64,
    /// Running average of number of particles
    pub avg_n_particles: f64,
    /// Running average of energy
    pub avg_energy: f64,
    /// Number of samples for averages
    pub n_samples: u64,
}

impl GcmcStatistics {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, move_type: MoveType, accepted: bool) {
        let (attempts, hits) = match move_type {
            MoveType::Translate => (&mut self.translate_attempts, &mut self.translate_accepted),
            MoveType::Create => (&mut self.create_attempts, &mut self.create_accepted),
            MoveType::Destroy => (&mut self.destroy_attempts, &mut self.destroy_accepted),
        };
        *attempts += 1;
        if accepted {
            *hits += 1;
        }
    }

    pub fn sample(&mut self, n_particles: usize, energy: f64) {
        let count = self.n_samples as f64;
        self.avg_n_particles = (self.avg_n_particles * count + n_particles as f64) / (count + 1.0);
        self.avg_energy = (self.avg_energy * count + energy) / (count + 1.0);
        self.n_samples += 1;
    }

    pub fn attempts(&self) -> u64 {
        self.translate_attempts + self.create_attempts + self.destroy_attempts
    }

    pub fn acceptance_rate(&self, move_type: MoveType) -> f64 {
        let (attempts, accepted) = match move_type {
            MoveType::Translate => (self.translate_attempts, self.translate_accepted),
            MoveType::Create => (self.create_attempts, self.create_accepted),
            MoveType::Destroy => (self.destroy_attempts, self.destroy_accepted),
        };
        if attempts == 0 {
            0.0
        } else {
            accepted as f64 / attempts as f64
        }
    }

    /// Reset all statistics
    pub fn reset(&mut self) {
        *self = Self::new();
    }

    /// Log summary statistics
    pub fn report(&self) {
        info!("=== GCMC Statistics ===");
        info!(
            "Translate moves: {} / {} ({:.2}% accepted)",
            self.translate_accepted,
            self.translate_attempts,
            100.0 * self.acceptance_rate(MoveType::Translate)
        );
        info!(
            "Create moves:    {} / {} ({:.2}% accepted)",
            self.create_accepted,
            self.create_attempts,
            100.0 * self.acceptance_rate(MoveType::Create)
        );
        info!(
            "Destroy moves:   {} / {} ({:.2}% accepted)",
            self.destroy_accepted,
            self.destroy_attempts,
            100.0 * self.acceptance_rate(MoveType::Destroy)
        );
        info!("Average N particles: {:.2}", self.avg_n_particles);
        info!("Average energy:      {:.6} K", self.avg_energy);
        info!("Number of samples:   {}", self.n_samples);
    }
}
