use std::error::Error;
use std::fmt;

/// Pixels of viewport area per spawned particle.
const AREA_PER_PARTICLE: u32 = 4000;

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum ViewportError {
    ZeroArea { width: u32, height: u32 },
}

impl fmt::Display for ViewportError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ZeroArea { width, height } => {
                write!(f, "viewport must have positive area: {}x{}", width, height)
            }
        }
    }
}

impl Error for ViewportError {}

/// Validated viewport dimensions in physical pixels.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct Viewport {
    width: u32,
    height: u32,
}

impl Viewport {
    pub fn new(width: u32, height: u32) -> Result<Self, ViewportError> {
        if width == 0 || height == 0 {
            return Err(ViewportError::ZeroArea { width, height });
        }

        Ok(Self { width, height })
    }

    #[must_use]
    pub fn width(&self) -> u32 {
        self.width
    }

    #[must_use]
    pub fn height(&self) -> u32 {
        self.height
    }

    #[must_use]
    pub fn area(&self) -> u64 {
        u64::from(self.width) * u64::from(self.height)
    }

    /// Number of particles this viewport sustains, proportional to area.
    #[must_use]
    pub fn particle_budget(&self) -> usize {
        (self.area() / u64::from(AREA_PER_PARTICLE)) as usize
    }

    #[must_use]
    pub fn contains(&self, x: i32, y: i32) -> bool {
        x >= 0 && y >= 0 && (x as u32) < self.width && (y as u32) < self.height
    }
}
