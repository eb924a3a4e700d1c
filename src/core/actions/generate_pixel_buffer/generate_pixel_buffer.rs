use rayon::prelude::*;
use tracing::debug;

use crate::core::actions::generate_pixel_buffer::ports::colour_map::ColourMap;
use crate::core::data::colour::Colour;
use crate::core::data::pixel_buffer::{CHANNELS, PixelBuffer};
use crate::core::data::scalar_field::ScalarField;
use crate::core::errors::FractalError;
use crate::core::palettes::factory::palette_colour_map_factory;
use crate::core::palettes::kinds::Palette;

/// Colours a field with one of the built-in palettes.
///
/// Values are compressed with `ln(v + 1)` and divided by the largest
/// compressed value before the palette is applied. A field whose maximum is
/// zero cannot be normalised and yields [`FractalError::DegenerateField`].
pub fn map_colors(field: &ScalarField, palette: Palette) -> Result<PixelBuffer, FractalError> {
    let _span = tracing::debug_span!("map_colors", size = field.size(), %palette).entered();

    generate_pixel_buffer(field, &palette_colour_map_factory(palette))
}

/// Generates a pixel buffer by mapping log-normalised field values to colours.
///
/// The global maximum is reduced first, then every pixel is coloured
/// independently into its own slot of the output buffer.
pub fn generate_pixel_buffer<CMap>(field: &ScalarField, mapper: &CMap) -> Result<PixelBuffer, FractalError>
where
    CMap: ColourMap + Sync,
{
    let max = field
        .values()
        .par_iter()
        .map(|v| v.ln_1p())
        .reduce(|| 0.0, f64::max);

    if max <= 0.0 {
        return Err(FractalError::DegenerateField);
    }

    debug!(max, mapper = mapper.display_name(), "normalising field");

    let mut pixel_buffer = PixelBuffer::filled(field.size(), Colour::BLACK);

    pixel_buffer
        .buffer_mut()
        .par_chunks_exact_mut(CHANNELS)
        .zip(field.values().par_iter())
        .for_each(|(pixel, value)| {
            let colour = mapper.map(value.ln_1p() / max);
            pixel.copy_from_slice(&colour.to_rgba());
        });

    Ok(pixel_buffer)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug)]
    struct StubColourMap {}

    impl ColourMap for StubColourMap {
        fn map(&self, value: f64) -> Colour {
            let byte = (value * 100.0).round() as u8;
            Colour::opaque(byte, byte, byte)
        }

        fn display_name(&self) -> &str {
            "Stub"
        }
    }

    #[test]
    fn test_values_are_log_normalised() {
        // ln(1) = 0, ln(e) = 1 relative to max ln(e^2 - 1 + 1) = 2
        let e = std::f64::consts::E;
        let field = ScalarField::new(2, vec![0.0, e - 1.0, e * e - 1.0, 0.0]).unwrap();

        let buffer = generate_pixel_buffer(&field, &StubColourMap {}).unwrap();
        let reds: Vec<u8> = buffer.pixels().map(|px| px.r).collect();

        assert_eq!(reds, vec![0, 50, 100, 0]);
    }

    #[test]
    fn test_all_zero_field_is_degenerate() {
        let field = ScalarField::filled(3, 0.0).unwrap();

        assert_eq!(
            generate_pixel_buffer(&field, &StubColourMap {}),
            Err(FractalError::DegenerateField)
        );
    }

    #[test]
    fn test_uniform_field_gives_uniform_image() {
        let field = ScalarField::filled(4, 7.0).unwrap();

        for &palette in Palette::ALL {
            let buffer = map_colors(&field, palette).unwrap();
            let first = buffer.pixel(0, 0).unwrap();

            assert!(buffer.pixels().all(|px| px == first));
            assert_eq!(first, palette_colour_map_factory(palette).map(1.0));
        }
    }

    #[test]
    fn test_grayscale_output_shape_and_channels() {
        let field = ScalarField::from_counts(3, vec![0, 1, 2, 3, 4, 5, 6, 7, 8]).unwrap();
        let buffer = map_colors(&field, Palette::Grayscale).unwrap();

        assert_eq!(buffer.size(), 3);
        assert_eq!(buffer.buffer_size(), 36);
        assert_eq!(buffer.pixel(0, 0), Some(Colour::BLACK));
        assert_eq!(buffer.pixel(2, 2), Some(Colour::opaque(255, 255, 255)));
        assert!(buffer.pixels().all(|px| px.r == px.g && px.g == px.b && px.a == 255));
    }

    #[test]
    fn test_single_nonzero_cell_is_brightest() {
        let mut values = vec![0.0; 25];
        values[12] = 3.0;
        let field = ScalarField::new(5, values).unwrap();

        let buffer = map_colors(&field, Palette::Grayscale).unwrap();

        assert_eq!(buffer.pixel(2, 2), Some(Colour::opaque(255, 255, 255)));
        assert_eq!(buffer.pixel(0, 0), Some(Colour::BLACK));
    }
}
