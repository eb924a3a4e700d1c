use crate::core::data::complex::Complex;
use std::error::Error;
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FractalKinds {
    #[default]
    Mandelbrot,
    Julia,
}

impl FractalKinds {
    pub const ALL: &'static [Self] = &[Self::Mandelbrot, Self::Julia];

    #[must_use]
    pub const fn display_name(self) -> &'static str {
        match self {
            Self::Mandelbrot => "Mandelbrot",
            Self::Julia => "Julia",
        }
    }

    /// Lower-left and upper-right corners of the plane region shown at zoom 1.
    #[must_use]
    pub const fn base_extents(self) -> (Complex, Complex) {
        match self {
            Self::Mandelbrot => (Complex::new(-2.0, -1.5), Complex::new(1.0, 1.5)),
            Self::Julia => (Complex::new(-1.5, -1.5), Complex::new(1.5, 1.5)),
        }
    }
}

impl fmt::Display for FractalKinds {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str((*self).display_name())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownFractalKind(pub String);

impl fmt::Display for UnknownFractalKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown fractal kind '{}' (expected Mandelbrot or Julia)", self.0)
    }
}

impl Error for UnknownFractalKind {}

impl FromStr for FractalKinds {
    type Err = UnknownFractalKind;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .iter()
            .copied()
            .find(|kind| kind.display_name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| UnknownFractalKind(s.to_string()))
    }
}
