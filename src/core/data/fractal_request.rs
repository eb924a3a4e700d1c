use crate::core::data::complex::Complex;
use crate::core::fractals::fractal_kinds::FractalKinds;
use crate::core::palettes::kinds::Palette;

const DEFAULT_SIZE: usize = 500;
const DEFAULT_ZOOM: f64 = 1.0;
const DEFAULT_ITERATIONS: u32 = 20;
const DEFAULT_JULIA_CONSTANT: Complex = Complex::new(-0.4, 0.6);

/// Everything needed to render one image. The constant is only read for Julia sets.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FractalRequest {
    pub kind: FractalKinds,
    pub size: usize,
    pub zoom: f64,
    pub iterations: u32,
    pub palette: Palette,
    pub julia_constant: Complex,
}

impl Default for FractalRequest {
    fn default() -> Self {
        Self {
            kind: FractalKinds::default(),
            size: DEFAULT_SIZE,
            zoom: DEFAULT_ZOOM,
            iterations: DEFAULT_ITERATIONS,
            palette: Palette::default(),
            julia_constant: DEFAULT_JULIA_CONSTANT,
        }
    }
}

impl FractalRequest {
    #[must_use]
    pub fn julia_constant_for_kind(&self) -> Option<Complex> {
        match self.kind {
            FractalKinds::Julia => Some(self.julia_constant),
            FractalKinds::Mandelbrot => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_matches_initial_controls() {
        let request = FractalRequest::default();

        assert_eq!(request.kind, FractalKinds::Mandelbrot);
        assert_eq!(request.size, 500);
        assert_eq!(request.zoom, 1.0);
        assert_eq!(request.iterations, 20);
        assert_eq!(request.palette, Palette::Rainbow);
        assert_eq!(request.julia_constant, Complex::new(-0.4, 0.6));
    }

    #[test]
    fn test_constant_only_exposed_for_julia() {
        let mandelbrot = FractalRequest::default();
        let julia = FractalRequest {
            kind: FractalKinds::Julia,
            ..FractalRequest::default()
        };

        assert_eq!(mandelbrot.julia_constant_for_kind(), None);
        assert_eq!(julia.julia_constant_for_kind(), Some(Complex::new(-0.4, 0.6)));
    }
}
