use crate::core::actions::generate_pixel_buffer::ports::colour_map::ColourMap;
use crate::core::data::colour::Colour;
use crate::core::palettes::kinds::Palette;

pub trait PaletteColourMap: ColourMap + Send + Sync {
    fn kind(&self) -> Palette;
}

impl ColourMap for Box<dyn PaletteColourMap> {
    fn map(&self, value: f64) -> Colour {
        (**self).map(value)
    }

    fn display_name(&self) -> &str {
        (**self).display_name()
    }
}
