use crate::core::data::colour::Colour;
use crate::core::data::point::Point;
use crate::core::data::viewport::Viewport;
use std::error::Error;
use std::fmt;

const BYTES_PER_PIXEL: usize = 3;

fn buffer_size(viewport: Viewport) -> usize {
    viewport.area() as usize * BYTES_PER_PIXEL
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PixelBufferError {
    SizeMismatch { expected: usize, actual: usize },
}

impl fmt::Display for PixelBufferError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::SizeMismatch { expected, actual } => {
                write!(
                    f,
                    "buffer of {} bytes does not match viewport size {}",
                    actual, expected
                )
            }
        }
    }
}

impl Error for PixelBufferError {}

/// An RGB framebuffer sized to one viewport.
///
/// Out-of-bounds writes are ignored rather than reported: scene painting
/// routinely clips glows and line segments at the viewport edges.
#[derive(Debug, Clone, PartialEq)]
pub struct PixelBuffer {
    viewport: Viewport,
    data: Vec<u8>,
}

impl PixelBuffer {
    #[must_use]
    pub fn new(viewport: Viewport) -> Self {
        Self {
            viewport,
            data: vec![0; buffer_size(viewport)],
        }
    }

    pub fn from_data(viewport: Viewport, data: Vec<u8>) -> Result<Self, PixelBufferError> {
        let expected = buffer_size(viewport);

        if data.len() != expected {
            return Err(PixelBufferError::SizeMismatch {
                expected,
                actual: data.len(),
            });
        }

        Ok(Self { viewport, data })
    }

    #[must_use]
    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    #[must_use]
    pub fn data(&self) -> &[u8] {
        &self.data
    }

    #[must_use]
    pub fn get(&self, point: Point) -> Option<Colour> {
        let index = self.index_of(point)?;

        Some(Colour {
            r: self.data[index],
            g: self.data[index + 1],
            b: self.data[index + 2],
        })
    }

    pub fn set(&mut self, point: Point, colour: Colour) {
        if let Some(index) = self.index_of(point) {
            self.data[index] = colour.r;
            self.data[index + 1] = colour.g;
            self.data[index + 2] = colour.b;
        }
    }

    /// Composites `colour` over the existing pixel at the given alpha.
    pub fn blend(&mut self, point: Point, colour: Colour, alpha: f32) {
        let Some(index) = self.index_of(point) else {
            return;
        };

        let base = Colour {
            r: self.data[index],
            g: self.data[index + 1],
            b: self.data[index + 2],
        };
        let blended = colour.over(base, alpha);

        self.data[index] = blended.r;
        self.data[index + 1] = blended.g;
        self.data[index + 2] = blended.b;
    }

    fn index_of(&self, point: Point) -> Option<usize> {
        if !self.viewport.contains(point.x, point.y) {
            return None;
        }

        let width = self.viewport.width() as usize;
        Some((point.y as usize * width + point.x as usize) * BYTES_PER_PIXEL)
    }
}
