use tracing::debug;

use crate::core::actions::generate_fractal::generate_fractal_parallel_rayon::generate_fractal_parallel_rayon;
use crate::core::data::complex::Complex;
use crate::core::data::scalar_field::ScalarField;
use crate::core::data::viewport::Viewport;
use crate::core::errors::{FractalError, InvalidParameters};
use crate::core::fractals::fractal_kinds::FractalKinds;
use crate::core::fractals::julia::algorithm::JuliaAlgorithm;
use crate::core::fractals::mandelbrot::algorithm::MandelbrotAlgorithm;

/// Computes the bounded-step count of every pixel of a `size × size` image.
///
/// The viewport is the kind's base region scaled by `1 / zoom`. The Julia
/// constant is required for [`FractalKinds::Julia`] and ignored otherwise.
/// Every cell of the result lies in `[0, iterations]`.
pub fn compute_field(
    kind: FractalKinds,
    size: usize,
    zoom: f64,
    iterations: u32,
    julia_constant: Option<Complex>,
) -> Result<ScalarField, FractalError> {
    let _span = tracing::debug_span!("compute_field", %kind, size, zoom, iterations).entered();

    let viewport = Viewport::for_kind(kind, size, zoom)?;

    let counts = match kind {
        FractalKinds::Mandelbrot => {
            generate_fractal_parallel_rayon(&viewport, &MandelbrotAlgorithm::new(iterations))
        }
        FractalKinds::Julia => {
            let constant = julia_constant.ok_or(InvalidParameters::MissingJuliaConstant)?;
            generate_fractal_parallel_rayon(&viewport, &JuliaAlgorithm::new(constant, iterations)?)
        }
    };

    debug!(
        x_min = viewport.x_min(),
        x_max = viewport.x_max(),
        y_min = viewport.y_min(),
        y_max = viewport.y_max(),
        "field computed"
    );

    Ok(ScalarField::from_generated_counts(viewport.size(), counts))
}
