// file: `src/rdf.rs`
use crate::pbc::SimulationBox;
use itertools::Itertools;
use nalgebra::Vector3;
use std::f64::consts::PI;

/// Histogram of pair distances accumulated over a run
#[derive(Debug, Clone)]
pub struct RadialDistribution {
    pub bin_size: f64,
    /// Pair counts per shell, each pair counted twice
    pub counts: Vec<f64>,
    pub n_samples: u64,
}

/// Normalised value of one shell
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RdfBin {
    /// Outer radius of the shell
    pub r: f64,
    /// Average count per sample
    pub unweighted: f64,
    /// Average count relative to an ideal gas at the same density
    pub weighted: f64,
}

impl RadialDistribution {
    pub fn new(n_bins: usize, bin_size: f64) -> Self {
        Self {
            bin_size,
            counts: vec![0.0; n_bins],
            n_samples: 0,
        }
    }

    /// Add every pair distance of one configuration to the histogram
    pub fn accumulate(&mut self, sim_box: &SimulationBox, positions: &[Vector3<f64>]) {
        for (a, b) in positions.iter().tuple_combinations() {
            let r = sim_box.minimum_image_distance(a, b);
            let bin = (r / self.bin_size) as usize;
            if let Some(count) = self.counts.get_mut(bin) {
                *count += 2.0;
            }
        }
        self.n_samples += 1;
    }

    /// Average the histogram over the samples and compare each shell with the
    /// ideal-gas count at the final density.
    pub fn finalize(&self, sim_box: &SimulationBox, n_particles: usize) -> Vec<RdfBin> {
        let samples = self.n_samples.max(1) as f64;
        let number_density = n_particles as f64 / sim_box.volume();

        self.counts
            .iter()
            .enumerate()
            .map(|(i, &count)| {
                let r_lo = i as f64 * self.bin_size;
                let r_hi = (i + 1) as f64 * self.bin_size;
                let unweighted = count / samples;
                let expected = shell_volume(r_lo, r_hi) * number_density;
                let weighted = if expected > 0.0 {
                    unweighted / expected
                } else {
                    0.0
                };
                RdfBin {
                    r: r_hi,
                    unweighted,
                    weighted,
                }
            })
            .collect()
    }
}

fn shell_volume(r_lo: f64, r_hi: f64) -> f64 {
    4.0 / 3.0 * PI * (r_hi.powi(3) - r_lo.powi(3))
}
