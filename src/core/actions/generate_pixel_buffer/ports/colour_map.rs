use crate::core::data::colour::Colour;

pub trait ColourMap {
    /// Maps a normalised value in `[0, 1]` to a colour.
    fn map(&self, value: f64) -> Colour;

    fn display_name(&self) -> &str;
}
