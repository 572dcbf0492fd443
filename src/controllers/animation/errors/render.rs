use std::error::Error;
use std::fmt;

/// A frame that failed to render, tagged with its generation so stale
/// errors can be ignored by the presenter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderError {
    pub generation: u64,
    pub message: String,
}

impl fmt::Display for RenderError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "frame {} failed: {}", self.generation, self.message)
    }
}

impl Error for RenderError {}
