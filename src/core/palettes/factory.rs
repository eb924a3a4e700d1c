use crate::core::palettes::kinds::Palette;
use crate::core::palettes::map::PaletteColourMap;
use crate::core::palettes::maps::{grayscale::Grayscale, rainbow::Rainbow};

#[must_use]
pub fn palette_colour_map_factory(palette: Palette) -> Box<dyn PaletteColourMap> {
    match palette {
        Palette::Rainbow => Box::new(Rainbow),
        Palette::Grayscale => Box::new(Grayscale),
    }
}
