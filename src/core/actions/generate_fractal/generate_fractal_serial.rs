use crate::core::actions::generate_fractal::ports::fractal_algorithm::FractalAlgorithm;
use crate::core::data::complex::Complex;
use crate::core::data::viewport::Viewport;

/// Single-threaded reference generation, row-major with row 0 at `y_min`.
pub fn generate_fractal_serial<Alg: FractalAlgorithm>(viewport: &Viewport, algorithm: &Alg) -> Vec<u32> {
    let xs = viewport.xs();
    let xs = xs.as_slice();

    viewport
        .ys()
        .into_iter()
        .flat_map(move |y| {
            xs.iter()
                .map(move |&x| algorithm.compute(Complex::new(x, y)))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::fractals::fractal_kinds::FractalKinds;

    #[derive(Debug)]
    struct StubAlgorithm {}

    impl FractalAlgorithm for StubAlgorithm {
        fn compute(&self, seed: Complex) -> u32 {
            (seed.real + 10.0 * seed.imag) as u32
        }
    }

    #[test]
    fn test_generates_row_major_order() {
        let viewport = Viewport::new(0.0, 2.0, 0.0, 1.0, 3).unwrap();
        let results = generate_fractal_serial(&viewport, &StubAlgorithm {});

        // xs = [0, 1, 2], ys = [0, 0.5, 1]
        assert_eq!(results, vec![0, 1, 2, 5, 6, 7, 10, 11, 12]);
    }

    #[test]
    fn test_output_length_is_size_squared() {
        let viewport = Viewport::for_kind(FractalKinds::Julia, 17, 1.0).unwrap();
        let results = generate_fractal_serial(&viewport, &StubAlgorithm {});

        assert_eq!(results.len(), 17 * 17);
    }
}
