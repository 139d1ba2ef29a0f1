// file: `src/pbc.rs`
use nalgebra::Vector3;
use serde::{Deserialize, Serialize};

/// Cubic simulation box with periodic boundary conditions.
///
/// The side length is fixed for a whole run; volume and cutoff derive from it.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SimulationBox {
    pub length: f64,
}

impl SimulationBox {
    pub fn new(length: f64) -> Self {
        SimulationBox { length }
    }

    pub fn volume(&self) -> f64 {
        self.length * self.length * self.length
    }

    /// Half the box side; interactions are truncated here
    pub fn cutoff(&self) -> f64 {
        0.5 * self.length
    }

    // Apply minimum-image convention
    pub fn minimum_image(&self, mut d: Vector3<f64>) -> Vector3<f64> {
        let half = self.cutoff();
        for k in 0..3 {
            if d[k] >= half {
                d[k] -= self.length;
            } else if d[k] <= -half {
                d[k] += self.length;
            }
        }
        d
    }

    pub fn minimum_image_distance(&self, a: &Vector3<f64>, b: &Vector3<f64>) -> f64 {
        self.minimum_image(a - b).norm()
    }

    /// Fold a position back into `[0, L)`.
    ///
    /// Single-step correction: the caller guarantees every coordinate is within
    /// one box length of the box.
    pub fn wrap(&self, mut pos: Vector3<f64>) -> Vector3<f64> {
        let l = self.length;
        for k in 0..3 {
            if pos[k] >= l {
                pos[k] -= l;
            } else if pos[k] < 0.0 {
                pos[k] += l;
                // -tiny + L rounds up to L
                if pos[k] >= l {
                    pos[k] = 0.0;
                }
            }
        }
        pos
    }

    /// Fold an arbitrary position into `[0, L)`, however far outside it lies
    pub fn wrap_any(&self, pos: Vector3<f64>) -> Vector3<f64> {
        let l = self.length;
        pos.map(|x| {
            let folded = x.rem_euclid(l);
            // rem_euclid of a tiny negative can round up to L, and an exact
            // negative multiple of L gives -0.0
            if folded >= l {
                0.0
            } else {
                folded.abs()
            }
        })
    }

    pub fn contains(&self, pos: &Vector3<f64>) -> bool {
        pos.iter().all(|&x| (0.0..self.length).contains(&x))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_distance_wraps_around_box() {
        let sim_box = SimulationBox::new(10.0);
        let a = Vector3::new(0.0, 0.0, 0.0);
        let b = Vector3::new(9.5, 0.0, 0.0);
        assert_relative_eq!(sim_box.minimum_image_distance(&a, &b), 0.5, epsilon = 1e-12);
        assert_relative_eq!(sim_box.minimum_image_distance(&b, &a), 0.5, epsilon = 1e-12);
    }

    #[test]
    fn test_distance_bounded_by_half_diagonal() {
        let sim_box = SimulationBox::new(10.0);
        let max = 10.0 * 3.0_f64.sqrt() / 2.0;
        let points = [
            Vector3::new(0.0, 0.0, 0.0),
            Vector3::new(5.0, 5.0, 5.0),
            Vector3::new(9.99, 0.01, 4.99),
            Vector3::new(2.5, 7.5, 9.0),
            Vector3::new(7.3, 1.1, 5.0),
        ];
        for a in &points {
            for b in &points {
                let r = sim_box.minimum_image_distance(a, b);
                assert!(r >= 0.0);
                assert!(r <= max + 1e-12, "distance {} exceeds {}", r, max);
            }
        }
    }

    #[test]
    fn test_distance_inside_half_box_is_direct() {
        let sim_box = SimulationBox::new(20.0);
        let a = Vector3::new(1.0, 2.0, 3.0);
        let b = Vector3::new(4.0, 6.0, 3.0);
        assert_relative_eq!(sim_box.minimum_image_distance(&a, &b), 5.0, epsilon = 1e-12);
    }

    #[test]
    fn test_wrap_upper_edge_goes_to_zero() {
        let sim_box = SimulationBox::new(10.0);
        let wrapped = sim_box.wrap(Vector3::new(10.0, 3.0, 3.0));
        assert_eq!(wrapped.x, 0.0);
        assert_eq!(wrapped.y, 3.0);
    }

    #[test]
    fn test_wrap_below_zero() {
        let sim_box = SimulationBox::new(10.0);
        let eps = 1e-3;
        let wrapped = sim_box.wrap(Vector3::new(0.0 - eps, 12.0, -4.0));
        assert_relative_eq!(wrapped.x, 10.0 - eps, epsilon = 1e-12);
        assert_relative_eq!(wrapped.y, 2.0, epsilon = 1e-12);
        assert_relative_eq!(wrapped.z, 6.0, epsilon = 1e-12);
        assert!(sim_box.contains(&wrapped));
    }

    #[test]
    fn test_wrap_tiny_negative_stays_in_box() {
        let sim_box = SimulationBox::new(10.0);
        let wrapped = sim_box.wrap(Vector3::new(-1e-300, 0.0, 0.0));
        assert!(sim_box.contains(&wrapped));
    }

    #[test]
    fn test_wrap_any_folds_several_box_lengths() {
        let sim_box = SimulationBox::new(10.0);
        let wrapped = sim_box.wrap_any(Vector3::new(25.0, -13.0, 3.0));
        assert_relative_eq!(wrapped, Vector3::new(5.0, 7.0, 3.0), epsilon = 1e-12);

        let edge = sim_box.wrap_any(Vector3::new(-1e-300, 30.0, -20.0));
        assert!(sim_box.contains(&edge), "{:?} left the box", edge);
        assert_eq!(edge.y, 0.0);
        assert_eq!(edge.z, 0.0);
        assert!(edge.iter().all(|x| x.is_sign_positive()));
    }

    #[test]
    fn test_derived_quantities() {
        let sim_box = SimulationBox::new(3.0);
        assert_relative_eq!(sim_box.volume(), 27.0);
        assert_relative_eq!(sim_box.cutoff(), 1.5);
    }
}
