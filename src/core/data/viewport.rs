use crate::core::errors::InvalidParameters;
use crate::core::fractals::fractal_kinds::FractalKinds;

/// Square region of the complex plane sampled onto a `size × size` image.
///
/// Row 0 of the image samples `y_min`; column 0 samples `x_min`.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Viewport {
    x_min: f64,
    x_max: f64,
    y_min: f64,
    y_max: f64,
    size: usize,
}

impl Viewport {
    pub fn new(
        x_min: f64,
        x_max: f64,
        y_min: f64,
        y_max: f64,
        size: usize,
    ) -> Result<Self, InvalidParameters> {
        if size == 0 {
            return Err(InvalidParameters::ZeroSize);
        }

        let finite = [x_min, x_max, y_min, y_max].iter().all(|v| v.is_finite());

        if !finite || x_min >= x_max || y_min >= y_max {
            return Err(InvalidParameters::InvalidViewport {
                x_min,
                x_max,
                y_min,
                y_max,
            });
        }

        Ok(Self {
            x_min,
            x_max,
            y_min,
            y_max,
            size,
        })
    }

    /// Scales the kind's base extents by `1 / zoom`, keeping the origin fixed.
    pub fn for_kind(kind: FractalKinds, size: usize, zoom: f64) -> Result<Self, InvalidParameters> {
        if !zoom.is_finite() || zoom <= 0.0 {
            return Err(InvalidParameters::InvalidZoom { zoom });
        }

        let (min, max) = kind.base_extents();

        Self::new(
            min.real / zoom,
            max.real / zoom,
            min.imag / zoom,
            max.imag / zoom,
            size,
        )
    }

    #[must_use]
    pub fn size(&self) -> usize {
        self.size
    }

    #[must_use]
    pub fn x_min(&self) -> f64 {
        self.x_min
    }

    #[must_use]
    pub fn x_max(&self) -> f64 {
        self.x_max
    }

    #[must_use]
    pub fn y_min(&self) -> f64 {
        self.y_min
    }

    #[must_use]
    pub fn y_max(&self) -> f64 {
        self.y_max
    }

    #[must_use]
    pub fn xs(&self) -> Vec<f64> {
        linspace(self.x_min, self.x_max, self.size)
    }

    #[must_use]
    pub fn ys(&self) -> Vec<f64> {
        linspace(self.y_min, self.y_max, self.size)
    }
}

// Inclusive endpoints; a single sample sits on `min`.
fn linspace(min: f64, max: f64, count: usize) -> Vec<f64> {
    (0..count).map(|i| linspace_at(min, max, count, i)).collect()
}

fn linspace_at(min: f64, max: f64, count: usize, index: usize) -> f64 {
    if count == 1 {
        return min;
    }
    if index == count - 1 {
        return max;
    }

    let step = (max - min) / (count - 1) as f64;
    min + index as f64 * step
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mandelbrot_viewport_at_zoom_one() {
        let viewport = Viewport::for_kind(FractalKinds::Mandelbrot, 3, 1.0).unwrap();

        assert_eq!(viewport.xs(), vec![-2.0, -0.5, 1.0]);
        assert_eq!(viewport.ys(), vec![-1.5, 0.0, 1.5]);
    }

    #[test]
    fn test_zoom_scales_bounds_towards_origin() {
        let viewport = Viewport::for_kind(FractalKinds::Julia, 10, 2.0).unwrap();

        assert_eq!(viewport.x_min(), -0.75);
        assert_eq!(viewport.x_max(), 0.75);
        assert_eq!(viewport.y_min(), -0.75);
        assert_eq!(viewport.y_max(), 0.75);
    }

    #[test]
    fn test_single_pixel_samples_minimum_corner() {
        let viewport = Viewport::for_kind(FractalKinds::Mandelbrot, 1, 1.0).unwrap();

        assert_eq!(viewport.xs(), vec![-2.0]);
        assert_eq!(viewport.ys(), vec![-1.5]);
    }

    #[test]
    fn test_samples_are_evenly_spaced_with_exact_endpoints() {
        let viewport = Viewport::new(-1.0, 1.0, 0.0, 4.0, 5).unwrap();

        assert_eq!(viewport.xs(), vec![-1.0, -0.5, 0.0, 0.5, 1.0]);
        assert_eq!(viewport.ys(), vec![0.0, 1.0, 2.0, 3.0, 4.0]);
    }

    #[test]
    fn test_zero_size_is_rejected() {
        assert_eq!(
            Viewport::for_kind(FractalKinds::Mandelbrot, 0, 1.0),
            Err(InvalidParameters::ZeroSize)
        );
    }

    #[test]
    fn test_non_positive_or_non_finite_zoom_is_rejected() {
        for zoom in [0.0, -1.0, f64::INFINITY] {
            assert_eq!(
                Viewport::for_kind(FractalKinds::Julia, 10, zoom),
                Err(InvalidParameters::InvalidZoom { zoom })
            );
        }
        assert!(matches!(
            Viewport::for_kind(FractalKinds::Julia, 10, f64::NAN),
            Err(InvalidParameters::InvalidZoom { .. })
        ));
    }

    #[test]
    fn test_empty_or_inverted_bounds_are_rejected() {
        assert_eq!(
            Viewport::new(1.0, 1.0, 0.0, 1.0, 4),
            Err(InvalidParameters::InvalidViewport {
                x_min: 1.0,
                x_max: 1.0,
                y_min: 0.0,
                y_max: 1.0
            })
        );
        assert!(Viewport::new(0.0, 1.0, 2.0, -2.0, 4).is_err());
        assert!(Viewport::new(0.0, f64::INFINITY, 0.0, 1.0, 4).is_err());
    }
}
