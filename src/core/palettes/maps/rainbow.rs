use std::f64::consts::PI;

use crate::core::actions::generate_pixel_buffer::ports::colour_map::ColourMap;
use crate::core::data::colour::Colour;
use crate::core::palettes::kinds::Palette;
use crate::core::palettes::map::PaletteColourMap;

/// Hue sweep from violet-blue at 0 through cyan, green and yellow to red at 1.
///
/// Channels are `|2t - 0.5|`, `sin(πt)` and `cos(πt / 2)`, each clipped to
/// `[0, 1]`.
#[must_use]
pub fn hue_to_rgb(t: f64) -> (f64, f64, f64) {
    let t = t.clamp(0.0, 1.0);

    let r = (2.0 * t - 0.5).abs();
    let g = (PI * t).sin();
    let b = (PI * t / 2.0).cos();

    (r.clamp(0.0, 1.0), g.clamp(0.0, 1.0), b.clamp(0.0, 1.0))
}

#[derive(Debug, Default)]
pub struct Rainbow;

impl ColourMap for Rainbow {
    fn map(&self, value: f64) -> Colour {
        let (r, g, b) = hue_to_rgb(value);

        Colour::from_unit_rgba(r, g, b, 1.0)
    }

    fn display_name(&self) -> &str {
        self.kind().display_name()
    }
}

impl PaletteColourMap for Rainbow {
    fn kind(&self) -> Palette {
        Palette::Rainbow
    }
}
