use crate::core::data::colour::Colour;
use std::error::Error;
use std::fmt;

pub const CHANNELS: usize = 4;

fn size_to_buffer_len(size: usize) -> usize {
    size * size * CHANNELS
}

#[derive(Debug, Clone, PartialEq)]
pub enum PixelBufferError {
    ShapeMismatch {
        expected_len: usize,
        buffer_len: usize,
    },
}

impl fmt::Display for PixelBufferError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ShapeMismatch {
                expected_len,
                buffer_len,
            } => {
                write!(
                    f,
                    "image needs {} bytes but buffer holds {}",
                    expected_len, buffer_len
                )
            }
        }
    }
}

impl Error for PixelBufferError {}

pub type PixelBufferData = Vec<u8>;

/// Square RGBA8 image, row-major, four bytes per pixel.
#[derive(Debug, Clone, PartialEq)]
pub struct PixelBuffer {
    size: usize,
    buffer: PixelBufferData,
}

impl PixelBuffer {
    #[must_use]
    pub fn filled(size: usize, colour: Colour) -> Self {
        let buffer = colour.to_rgba().repeat(size * size);

        Self { size, buffer }
    }

    pub fn from_data(size: usize, buffer: PixelBufferData) -> Result<Self, PixelBufferError> {
        let expected_len = size_to_buffer_len(size);

        if expected_len != buffer.len() {
            return Err(PixelBufferError::ShapeMismatch {
                expected_len,
                buffer_len: buffer.len(),
            });
        }

        Ok(Self { size, buffer })
    }

    #[must_use]
    pub fn size(&self) -> usize {
        self.size
    }

    #[must_use]
    pub fn buffer(&self) -> &PixelBufferData {
        &self.buffer
    }

    /// Mutable view of the pixel bytes; the length is fixed by the image size.
    pub fn buffer_mut(&mut self) -> &mut [u8] {
        &mut self.buffer
    }

    #[must_use]
    pub fn buffer_size(&self) -> usize {
        self.buffer.len()
    }

    #[must_use]
    pub fn pixel(&self, row: usize, col: usize) -> Option<Colour> {
        if row >= self.size || col >= self.size {
            return None;
        }

        let index = (row * self.size + col) * CHANNELS;
        let px = &self.buffer[index..index + CHANNELS];

        Some(Colour {
            r: px[0],
            g: px[1],
            b: px[2],
            a: px[3],
        })
    }

    pub fn pixels(&self) -> impl Iterator<Item = Colour> + '_ {
        self.buffer.chunks_exact(CHANNELS).map(|px| Colour {
            r: px[0],
            g: px[1],
            b: px[2],
            a: px[3],
        })
    }
}
