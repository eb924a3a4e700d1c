use crate::core::actions::generate_fractal::ports::fractal_algorithm::FractalAlgorithm;
use crate::core::data::complex::Complex;
use crate::core::fractals::recurrence::count_bounded_steps;

/// Mandelbrot recurrence where every pixel uses its own sample as `c`.
///
/// The orbit starts at `z0 = c`, not at the textbook `z0 = 0`. This is one
/// step ahead of the usual orbit and changes the rendered image, so keep it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MandelbrotAlgorithm {
    max_iterations: u32,
}

impl FractalAlgorithm for MandelbrotAlgorithm {
    fn compute(&self, seed: Complex) -> u32 {
        count_bounded_steps(seed, seed, self.max_iterations)
    }
}

impl MandelbrotAlgorithm {
    #[must_use]
    pub fn new(max_iterations: u32) -> Self {
        Self { max_iterations }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_origin_is_bounded_for_full_budget() {
        let algorithm = MandelbrotAlgorithm::new(64);

        assert_eq!(algorithm.compute(Complex::ZERO), 64);
    }

    #[test]
    fn test_divergent_point_escapes_immediately() {
        let algorithm = MandelbrotAlgorithm::new(64);

        assert_eq!(algorithm.compute(Complex::new(100.0, 100.0)), 0);
    }

    #[test]
    fn test_main_cardioid_point_is_bounded() {
        let algorithm = MandelbrotAlgorithm::new(5);

        assert_eq!(algorithm.compute(Complex::new(-0.5, 0.0)), 5);
    }

    #[test]
    fn test_seed_is_used_as_starting_iterate() {
        // Starting at z0 = c skips the first step of the z0 = 0 orbit, so an
        // escaping point counts one bounded step fewer.
        let c = Complex::new(0.3, 0.0);
        let algorithm = MandelbrotAlgorithm::new(500);
        let count = algorithm.compute(c);

        assert_eq!(count, count_bounded_steps(c, c, 500));
        assert!(count < 500);
        assert_eq!(count + 1, count_bounded_steps(Complex::ZERO, c, 500));
    }

    #[test]
    fn test_zero_iterations_yields_zero() {
        let algorithm = MandelbrotAlgorithm::new(0);

        assert_eq!(algorithm.compute(Complex::ZERO), 0);
    }
}
