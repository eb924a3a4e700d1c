use std::path::PathBuf;

use clap::Parser;

use crate::core::data::complex::Complex;
use crate::core::data::fractal_request::FractalRequest;
use crate::core::fractals::fractal_kinds::FractalKinds;
use crate::core::palettes::kinds::Palette;

const MIN_ZOOM: f64 = 1.0;
const MAX_ZOOM: f64 = 10.0;

/// Render Mandelbrot and Julia escape-time fractals to an image file.
#[derive(Debug, Parser)]
#[command(name = "fractal_generator", version, about)]
pub struct CliArgs {
    /// Fractal to render: Mandelbrot or Julia
    #[arg(long, default_value_t = FractalKinds::Mandelbrot)]
    pub kind: FractalKinds,

    /// Image width and height in pixels
    #[arg(long, default_value_t = 500, value_parser = clap::value_parser!(u32).range(100..=1000))]
    pub size: u32,

    /// Magnification towards the origin
    #[arg(long, default_value_t = 1.0, value_parser = parse_zoom)]
    pub zoom: f64,

    /// Iteration budget per pixel
    #[arg(long, default_value_t = 20, value_parser = clap::value_parser!(u32).range(1..=50))]
    pub iterations: u32,

    /// Colour scheme: Rainbow or Grayscale
    #[arg(long, default_value_t = Palette::Rainbow)]
    pub palette: Palette,

    /// Julia constant, e.g. "-0.4 + 0.6j" (ignored for Mandelbrot)
    #[arg(short = 'c', long = "julia-constant", default_value = "-0.4 + 0.6j", allow_hyphen_values = true)]
    pub julia_constant: Complex,

    /// Output path; a .pam extension keeps the alpha channel, anything else writes PPM
    #[arg(short, long, default_value = "output/fractal.ppm")]
    pub output: PathBuf,
}

impl CliArgs {
    #[must_use]
    pub fn to_request(&self) -> FractalRequest {
        FractalRequest {
            kind: self.kind,
            size: self.size as usize,
            zoom: self.zoom,
            iterations: self.iterations,
            palette: self.palette,
            julia_constant: self.julia_constant,
        }
    }
}

fn parse_zoom(s: &str) -> Result<f64, String> {
    let zoom: f64 = s
        .trim()
        .parse()
        .map_err(|_| format!("'{}' is not a number", s))?;

    if !(MIN_ZOOM..=MAX_ZOOM).contains(&zoom) {
        return Err(format!("zoom must be between {} and {}", MIN_ZOOM, MAX_ZOOM));
    }

    Ok(zoom)
}
