use std::error::Error;
use std::fmt;

#[derive(Debug, Copy, Clone, PartialEq)]
pub enum ScalarFieldError {
    ShapeMismatch {
        expected_len: usize,
        actual_len: usize,
    },
    InvalidValue {
        index: usize,
        value: f64,
    },
}

impl fmt::Display for ScalarFieldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ShapeMismatch {
                expected_len,
                actual_len,
            } => {
                write!(
                    f,
                    "field needs {} values but {} were supplied",
                    expected_len, actual_len
                )
            }
            Self::InvalidValue { index, value } => {
                write!(
                    f,
                    "field value {} at index {} is not a finite non-negative number",
                    value, index
                )
            }
        }
    }
}

impl Error for ScalarFieldError {}

/// Row-major `size × size` grid of finite, non-negative per-pixel values.
#[derive(Debug, Clone, PartialEq)]
pub struct ScalarField {
    size: usize,
    values: Vec<f64>,
}

impl ScalarField {
    pub fn new(size: usize, values: Vec<f64>) -> Result<Self, ScalarFieldError> {
        let expected_len = size * size;

        if values.len() != expected_len {
            return Err(ScalarFieldError::ShapeMismatch {
                expected_len,
                actual_len: values.len(),
            });
        }

        if let Some((index, &value)) = values
            .iter()
            .enumerate()
            .find(|(_, v)| !v.is_finite() || **v < 0.0)
        {
            return Err(ScalarFieldError::InvalidValue { index, value });
        }

        Ok(Self { size, values })
    }

    /// Builds a field from per-pixel step counts, which are always valid values.
    pub fn from_counts(size: usize, counts: Vec<u32>) -> Result<Self, ScalarFieldError> {
        Self::new(size, counts.into_iter().map(f64::from).collect())
    }

    /// Infallible form of [`ScalarField::from_counts`] for generators that
    /// emit exactly one count per pixel of a `size × size` viewport.
    pub(crate) fn from_generated_counts(size: usize, counts: Vec<u32>) -> Self {
        debug_assert_eq!(counts.len(), size * size);

        Self {
            size,
            values: counts.into_iter().map(f64::from).collect(),
        }
    }

    pub fn filled(size: usize, value: f64) -> Result<Self, ScalarFieldError> {
        Self::new(size, vec![value; size * size])
    }

    #[must_use]
    pub fn size(&self) -> usize {
        self.size
    }

    #[must_use]
    pub fn values(&self) -> &[f64] {
        &self.values
    }

    #[must_use]
    pub fn get(&self, row: usize, col: usize) -> Option<f64> {
        if row >= self.size || col >= self.size {
            return None;
        }

        Some(self.values[row * self.size + col])
    }
}
