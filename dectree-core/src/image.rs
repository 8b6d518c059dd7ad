use crate::error::DecTreeError;

/// Width (and height) of every image, in pixels.
pub const WIDTH: usize = 28;

/// Number of pixels in an image (`WIDTH * WIDTH`).
pub const NUM_PIXELS: usize = WIDTH * WIDTH;

/// Number of distinct labels (digits 0 to 9).
pub const NUM_LABELS: usize = 10;

/// Intensities strictly below this value go to the left branch of a split.
pub const PIXEL_THRESHOLD: u8 = 128;

/// A 28x28 grayscale image stored as a flat row-major pixel buffer.
///
/// Only the flat pixel index (0..784) is ever used by the tree algorithms;
/// the 2D shape is implicit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Image {
    data: Box<[u8]>,
}

impl Image {
    /// Creates an image from exactly `NUM_PIXELS` bytes.
    ///
    /// # Errors
    ///
    /// Returns `DecTreeError::ImageSizeMismatch` if `data` has the wrong length.
    pub fn new(data: Vec<u8>) -> Result<Self, DecTreeError> {
        if data.len() != NUM_PIXELS {
            return Err(DecTreeError::ImageSizeMismatch {
                expected: NUM_PIXELS,
                actual: data.len(),
            });
        }
        Ok(Self {
            data: data.into_boxed_slice(),
        })
    }

    /// An all-black image.
    pub fn blank() -> Self {
        Self {
            data: vec![0u8; NUM_PIXELS].into_boxed_slice(),
        }
    }

    /// Intensity at flat pixel index `pixel`.
    ///
    /// # Panics
    /// Panics if `pixel >= NUM_PIXELS`.
    #[inline]
    pub fn pixel(&self, pixel: usize) -> u8 {
        self.data[pixel]
    }

    /// Whether this image falls on the left side of a split at `pixel`.
    #[inline]
    pub fn goes_left(&self, pixel: usize) -> bool {
        self.data[pixel] < PIXEL_THRESHOLD
    }

    /// Intensity at row `y`, column `x`.
    pub fn at(&self, x: usize, y: usize) -> u8 {
        self.data[y * WIDTH + x]
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.data
    }

    pub(crate) fn as_bytes_mut(&mut self) -> &mut [u8] {
        &mut self.data
    }
}

impl TryFrom<Vec<u8>> for Image {
    type Error = DecTreeError;

    fn try_from(data: Vec<u8>) -> Result<Self, Self::Error> {
        Image::new(data)
    }
}

#[cfg(test)]
#[path = "image_test.rs"]
mod tests;
