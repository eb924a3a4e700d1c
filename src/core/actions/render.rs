use tracing::warn;

use crate::core::actions::compute_field::compute_field;
use crate::core::actions::generate_pixel_buffer::generate_pixel_buffer::map_colors;
use crate::core::data::colour::Colour;
use crate::core::data::fractal_request::FractalRequest;
use crate::core::data::pixel_buffer::PixelBuffer;
use crate::core::errors::FractalError;

/// Runs the full request: field computation followed by colour mapping.
///
/// A field with nothing inside the escape radius (for example zero
/// iterations) cannot be normalised; it is rendered as an opaque black image
/// instead of failing. Invalid parameters are returned unchanged.
pub fn render(request: &FractalRequest) -> Result<PixelBuffer, FractalError> {
    let field = compute_field(
        request.kind,
        request.size,
        request.zoom,
        request.iterations,
        request.julia_constant_for_kind(),
    )?;

    match map_colors(&field, request.palette) {
        Err(FractalError::DegenerateField) => {
            warn!(
                kind = %request.kind,
                iterations = request.iterations,
                "field is all zero, rendering black image"
            );
            Ok(PixelBuffer::filled(field.size(), Colour::BLACK))
        }
        result => result,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::errors::InvalidParameters;
    use crate::core::fractals::fractal_kinds::FractalKinds;
    use crate::core::palettes::kinds::Palette;

    #[test]
    fn test_render_produces_square_rgba_image() {
        let request = FractalRequest {
            size: 16,
            ..FractalRequest::default()
        };

        let buffer = render(&request).unwrap();

        assert_eq!(buffer.size(), 16);
        assert_eq!(buffer.buffer_size(), 16 * 16 * 4);
    }

    #[test]
    fn test_zero_iterations_renders_black() {
        let request = FractalRequest {
            size: 8,
            iterations: 0,
            palette: Palette::Rainbow,
            ..FractalRequest::default()
        };

        let buffer = render(&request).unwrap();

        assert!(buffer.pixels().all(|px| px == Colour::BLACK));
    }

    #[test]
    fn test_invalid_parameters_propagate() {
        let request = FractalRequest {
            kind: FractalKinds::Julia,
            zoom: -2.0,
            ..FractalRequest::default()
        };

        assert_eq!(
            render(&request),
            Err(FractalError::InvalidParameters(InvalidParameters::InvalidZoom { zoom: -2.0 }))
        );
    }
}
