use crate::core::data::complex::Complex;

pub trait FractalAlgorithm {
    /// Number of steps of the iteration budget after which the orbit of
    /// `seed` lies inside the escape radius.
    fn compute(&self, seed: Complex) -> u32;
}
