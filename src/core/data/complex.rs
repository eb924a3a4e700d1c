use std::error::Error;
use std::fmt;
use std::ops::{Add, Mul};
use std::str::FromStr;

// implement Complex instead of using the num-complex trait for learning
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Complex {
    pub real: f64,
    pub imag: f64,
}

impl Complex {
    pub const ZERO: Self = Self {
        real: 0.0,
        imag: 0.0,
    };

    #[must_use]
    pub const fn new(real: f64, imag: f64) -> Self {
        Self { real, imag }
    }

    #[must_use]
    pub fn magnitude(&self) -> f64 {
        self.real.hypot(self.imag)
    }

    #[must_use]
    pub fn square(self) -> Self {
        self * self
    }

    #[must_use]
    pub fn is_finite(&self) -> bool {
        self.real.is_finite() && self.imag.is_finite()
    }
}

impl fmt::Display for Complex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.imag.is_sign_negative() {
            write!(f, "{}-{}i", self.real, -self.imag)
        } else {
            write!(f, "{}+{}i", self.real, self.imag)
        }
    }
}

impl Add for Complex {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Self {
            real: self.real + other.real,
            imag: self.imag + other.imag,
        }
    }
}

impl Mul for Complex {
    type Output = Self;

    fn mul(self, other: Self) -> Self {
        Self {
            real: self.real * other.real - self.imag * other.imag,
            imag: self.real * other.imag + self.imag * other.real,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseComplexError {
    Empty,
    Malformed { input: String },
}

impl fmt::Display for ParseComplexError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "complex constant is empty"),
            Self::Malformed { input } => {
                write!(f, "'{}' is not a complex number (expected a form like -0.4+0.6j)", input)
            }
        }
    }
}

impl Error for ParseComplexError {}

/// Parses `a+bj`, `a-bj`, `bj`, `a` and bare `j`, ignoring all whitespace.
///
/// Either `i` or `j` (any case) is accepted as the imaginary unit and the
/// whole value may be wrapped in one pair of parentheses.
impl FromStr for Complex {
    type Err = ParseComplexError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let compact: String = s.chars().filter(|c| !c.is_whitespace()).collect();
        if compact.is_empty() {
            return Err(ParseComplexError::Empty);
        }

        let malformed = || ParseComplexError::Malformed {
            input: s.to_string(),
        };

        let body = match compact.strip_prefix('(') {
            Some(rest) => rest.strip_suffix(')').ok_or_else(malformed)?,
            None => compact.as_str(),
        };

        let Some(without_unit) = body.strip_suffix(['j', 'J', 'i', 'I']) else {
            let real = parse_real(body).ok_or_else(malformed)?;
            return Ok(Self::new(real, 0.0));
        };

        // The real/imaginary split is the last sign that is not the leading
        // sign and not part of an exponent.
        let split = without_unit
            .char_indices()
            .filter(|&(idx, c)| (c == '+' || c == '-') && idx > 0)
            .filter(|&(idx, _)| !matches!(without_unit.as_bytes()[idx - 1], b'e' | b'E'))
            .map(|(idx, _)| idx)
            .last();

        let (real, imag) = match split {
            Some(idx) => (
                parse_real(&without_unit[..idx]).ok_or_else(malformed)?,
                parse_imag_coefficient(&without_unit[idx..]).ok_or_else(malformed)?,
            ),
            None => (0.0, parse_imag_coefficient(without_unit).ok_or_else(malformed)?),
        };

        Ok(Self::new(real, imag))
    }
}

fn parse_real(s: &str) -> Option<f64> {
    if s.is_empty() || s.ends_with(['+', '-']) {
        return None;
    }
    s.parse::<f64>().ok()
}

fn parse_imag_coefficient(s: &str) -> Option<f64> {
    match s {
        "" | "+" => Some(1.0),
        "-" => Some(-1.0),
        _ => parse_real(s),
    }
}
