use crate::core::data::complex::Complex;
use std::error::Error;
use std::fmt;

#[derive(Debug, Copy, Clone, PartialEq)]
pub enum InvalidParameters {
    ZeroSize,
    InvalidZoom {
        zoom: f64,
    },
    MissingJuliaConstant,
    NonFiniteJuliaConstant {
        constant: Complex,
    },
    InvalidViewport {
        x_min: f64,
        x_max: f64,
        y_min: f64,
        y_max: f64,
    },
}

impl fmt::Display for InvalidParameters {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ZeroSize => write!(f, "image size must be at least one pixel"),
            Self::InvalidZoom { zoom } => {
                write!(f, "zoom must be a finite number greater than zero, got {}", zoom)
            }
            Self::MissingJuliaConstant => {
                write!(f, "a Julia set needs a complex constant")
            }
            Self::NonFiniteJuliaConstant { constant } => {
                write!(f, "Julia constant must be finite, got {}", constant)
            }
            Self::InvalidViewport {
                x_min,
                x_max,
                y_min,
                y_max,
            } => {
                write!(
                    f,
                    "viewport bounds must be finite and non-empty: x [{}, {}], y [{}, {}]",
                    x_min, x_max, y_min, y_max
                )
            }
        }
    }
}

impl Error for InvalidParameters {}

#[derive(Debug, Copy, Clone, PartialEq)]
pub enum FractalError {
    InvalidParameters(InvalidParameters),
    /// The log-scaled field has no positive maximum to normalise against.
    DegenerateField,
}

impl fmt::Display for FractalError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidParameters(err) => write!(f, "invalid parameters: {}", err),
            Self::DegenerateField => {
                write!(f, "scalar field is all zero and cannot be normalised")
            }
        }
    }
}

impl Error for FractalError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::InvalidParameters(err) => Some(err),
            Self::DegenerateField => None,
        }
    }
}

impl From<InvalidParameters> for FractalError {
    fn from(err: InvalidParameters) -> Self {
        Self::InvalidParameters(err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_parameters_wraps_with_source() {
        let err: FractalError = InvalidParameters::ZeroSize.into();

        assert_eq!(err, FractalError::InvalidParameters(InvalidParameters::ZeroSize));
        assert_eq!(
            err.to_string(),
            "invalid parameters: image size must be at least one pixel"
        );
        assert!(err.source().is_some());
    }

    #[test]
    fn test_degenerate_field_has_no_source() {
        let err = FractalError::DegenerateField;

        assert!(err.source().is_none());
        assert_eq!(
            err.to_string(),
            "scalar field is all zero and cannot be normalised"
        );
    }

    #[test]
    fn test_non_finite_constant_message_includes_value() {
        let err = InvalidParameters::NonFiniteJuliaConstant {
            constant: Complex::new(f64::NAN, 1.0),
        };

        assert_eq!(err.to_string(), "Julia constant must be finite, got NaN+1i");
    }
}
