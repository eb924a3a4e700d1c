use rayon::prelude::*;

use crate::core::actions::generate_fractal::ports::fractal_algorithm::FractalAlgorithm;
use crate::core::data::complex::Complex;
use crate::core::data::viewport::Viewport;

/// Generates fractal data in parallel using rayon's work-stealing scheduler.
///
/// One task per image row; each task owns its row, so no locking is needed.
/// Returns row-major results identical to
/// [`generate_fractal_serial`](super::generate_fractal_serial::generate_fractal_serial).
pub fn generate_fractal_parallel_rayon<Alg>(viewport: &Viewport, algorithm: &Alg) -> Vec<u32>
where
    Alg: FractalAlgorithm + Sync,
{
    let xs = viewport.xs();

    let rows: Vec<Vec<u32>> = viewport
        .ys()
        .into_par_iter()
        .map(|y| {
            xs.iter()
                .map(|&x| algorithm.compute(Complex::new(x, y)))
                .collect()
        })
        .collect();

    rows.into_iter().flatten().collect()
}
