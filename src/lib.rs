//! Escape-time renderer for Mandelbrot and Julia sets.
//!
//! [`compute_field`] turns a fractal kind, image size, zoom and iteration
//! budget into a per-pixel field of bounded-step counts; [`map_colors`]
//! turns that field into an RGBA image using a [`Palette`]. [`render`] runs
//! both for a [`FractalRequest`].

mod controllers;
mod core;
mod input;
mod presenters;

pub use controllers::ports::file_presenter::FilePresenterPort;
pub use controllers::render::RenderController;
pub use crate::core::actions::compute_field::compute_field;
pub use crate::core::actions::generate_fractal::generate_fractal_parallel_rayon::generate_fractal_parallel_rayon;
pub use crate::core::actions::generate_fractal::generate_fractal_serial::generate_fractal_serial;
pub use crate::core::actions::generate_fractal::ports::fractal_algorithm::FractalAlgorithm;
pub use crate::core::actions::generate_pixel_buffer::generate_pixel_buffer::{generate_pixel_buffer, map_colors};
pub use crate::core::actions::generate_pixel_buffer::ports::colour_map::ColourMap;
pub use crate::core::actions::render::render;
pub use crate::core::data::colour::Colour;
pub use crate::core::data::complex::{Complex, ParseComplexError};
pub use crate::core::data::fractal_request::FractalRequest;
pub use crate::core::data::pixel_buffer::{PixelBuffer, PixelBufferError};
pub use crate::core::data::scalar_field::{ScalarField, ScalarFieldError};
pub use crate::core::data::viewport::Viewport;
pub use crate::core::errors::{FractalError, InvalidParameters};
pub use crate::core::fractals::fractal_kinds::{FractalKinds, UnknownFractalKind};
pub use crate::core::fractals::julia::algorithm::JuliaAlgorithm;
pub use crate::core::fractals::mandelbrot::algorithm::MandelbrotAlgorithm;
pub use crate::core::palettes::factory::palette_colour_map_factory;
pub use crate::core::palettes::kinds::{Palette, UnknownPalette};
pub use crate::core::palettes::maps::rainbow::hue_to_rgb;
pub use input::cli::args::CliArgs;
pub use presenters::file::pam::PamFilePresenter;
pub use presenters::file::ppm::PpmFilePresenter;
pub use presenters::file::presenter_for_path;
