use crate::core::actions::generate_fractal::ports::fractal_algorithm::FractalAlgorithm;
use crate::core::data::complex::Complex;
use crate::core::errors::InvalidParameters;
use crate::core::fractals::recurrence::count_bounded_steps;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct JuliaAlgorithm {
    constant: Complex,
    max_iterations: u32,
}

impl FractalAlgorithm for JuliaAlgorithm {
    fn compute(&self, seed: Complex) -> u32 {
        count_bounded_steps(seed, self.constant, self.max_iterations)
    }
}

impl JuliaAlgorithm {
    pub fn new(constant: Complex, max_iterations: u32) -> Result<Self, InvalidParameters> {
        if !constant.is_finite() {
            return Err(InvalidParameters::NonFiniteJuliaConstant { constant });
        }

        Ok(Self {
            constant,
            max_iterations,
        })
    }
}
