// file: `src/lj_pot.rs`
use crate::pbc::SimulationBox;
use itertools::Itertools;
use nalgebra::Vector3;

/// Truncated 12-6 Lennard-Jones potential in a cubic periodic box.
///
/// Energies come out in Kelvin since ε is given as ε/k_B. Pairs at or beyond
/// half the box length do not interact and no tail correction is applied.
#[derive(Debug, Clone)]
pub struct LennardJones {
    pub epsilon: f64,
    pub sigma: f64,
    pub sim_box: SimulationBox,
}

impl LennardJones {
    pub fn new(epsilon: f64, sigma: f64, sim_box: SimulationBox) -> Self {
        LennardJones {
            epsilon,
            sigma,
            sim_box,
        }
    }

    pub fn pair_potential(&self, r: f64) -> f64 {
        let sor6 = (self.sigma / r).powi(6);
        4.0 * self.epsilon * (sor6 * sor6 - sor6)
    }

    /// Interaction of a single pair, zero outside the cutoff
    pub fn pair_energy(&self, a: &Vector3<f64>, b: &Vector3<f64>) -> f64 {
        let r = self.sim_box.minimum_image_distance(a, b);
        if r >= self.sim_box.cutoff() {
            return 0.0;
        }
        self.pair_potential(r)
    }

    /// Total potential energy summed over every unordered pair
    pub fn total_energy(&self, positions: &[Vector3<f64>]) -> f64 {
        // an empty f64 `sum()` is -0.0, which would print as "-0.000000"
        positions
            .iter()
            .tuple_combinations()
            .map(|(a, b)| self.pair_energy(a, b))
            .fold(0.0, |acc, e| acc + e)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn reduced(length: f64) -> LennardJones {
        LennardJones::new(1.0, 1.0, SimulationBox::new(length))
    }

    #[test]
    fn test_empty_and_single_particle_energy() {
        let lj = reduced(10.0);
        assert_eq!(lj.total_energy(&[]), 0.0);
        assert_eq!(lj.total_energy(&[Vector3::new(1.0, 1.0, 1.0)]), 0.0);
    }

    #[test]
    fn test_no_pairs_gives_positive_zero() {
        let lj = reduced(10.0);
        assert!(lj.total_energy(&[]).is_sign_positive());
        assert!(lj
            .total_energy(&[Vector3::new(1.0, 1.0, 1.0)])
            .is_sign_positive());
        assert_eq!(format!("{:.6}", lj.total_energy(&[])), "0.000000");
    }

    #[test]
    fn test_pair_at_sigma_is_zero() {
        let lj = reduced(10.0);
        let positions = [Vector3::new(1.0, 1.0, 1.0), Vector3::new(2.0, 1.0, 1.0)];
        assert_eq!(lj.total_energy(&positions), 0.0);
    }

    #[test]
    fn test_pair_at_cutoff_is_excluded() {
        let lj = reduced(10.0);
        let positions = [Vector3::new(0.0, 0.0, 0.0), Vector3::new(5.0, 0.0, 0.0)];
        assert_eq!(lj.total_energy(&positions), 0.0);
    }

    #[test]
    fn test_pair_at_minimum() {
        let lj = reduced(10.0);
        let r_min = 2.0_f64.powf(1.0 / 6.0);
        let positions = [Vector3::new(1.0, 1.0, 1.0), Vector3::new(1.0 + r_min, 1.0, 1.0)];
        assert_relative_eq!(lj.total_energy(&positions), -1.0, epsilon = 1e-12);
    }

    #[test]
    fn test_pair_interacts_through_boundary() {
        let lj = reduced(10.0);
        let r_min = 2.0_f64.powf(1.0 / 6.0);
        let positions = [
            Vector3::new(0.5 * r_min, 5.0, 5.0),
            Vector3::new(10.0 - 0.5 * r_min, 5.0, 5.0),
        ];
        assert_relative_eq!(lj.total_energy(&positions), -1.0, epsilon = 1e-12);
    }

    #[test]
    fn test_three_body_sum_matches_pairs() {
        let lj = LennardJones::new(128.326802, 3.371914, SimulationBox::new(30.0));
        let positions = vec![
            Vector3::new(1.0, 2.0, 3.0),
            Vector3::new(4.5, 2.0, 3.0),
            Vector3::new(2.0, 5.5, 3.5),
        ];
        let expected = lj.pair_energy(&positions[0], &positions[1])
            + lj.pair_energy(&positions[0], &positions[2])
            + lj.pair_energy(&positions[1], &positions[2]);
        assert_relative_eq!(lj.total_energy(&positions), expected, epsilon = 1e-9);
    }

    #[test]
    fn test_energy_is_idempotent() {
        let lj = reduced(8.0);
        let positions = vec![
            Vector3::new(0.5, 0.5, 0.5),
            Vector3::new(1.6, 0.4, 0.7),
            Vector3::new(7.6, 0.9, 0.2),
            Vector3::new(3.3, 3.3, 3.3),
        ];
        let first = lj.total_energy(&positions);
        let second = lj.total_energy(&positions);
        assert_eq!(first.to_bits(), second.to_bits());
    }

    #[test]
    fn test_overlap_is_not_finite() {
        let lj = reduced(10.0);
        let positions = [Vector3::new(1.0, 1.0, 1.0), Vector3::new(1.0, 1.0, 1.0)];
        assert!(!lj.total_energy(&positions).is_finite());
    }
}
