use crate::core::actions::generate_pixel_buffer::ports::colour_map::ColourMap;
use crate::core::data::colour::Colour;
use crate::core::palettes::kinds::Palette;
use crate::core::palettes::map::PaletteColourMap;

#[derive(Debug, Default)]
pub struct Grayscale;

impl ColourMap for Grayscale {
    fn map(&self, value: f64) -> Colour {
        let v = value.clamp(0.0, 1.0);

        Colour::from_unit_rgba(v, v, v, 1.0)
    }

    fn display_name(&self) -> &str {
        self.kind().display_name()
    }
}

impl PaletteColourMap for Grayscale {
    fn kind(&self) -> Palette {
        Palette::Grayscale
    }
}
