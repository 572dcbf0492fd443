use std::path::Path;

use crate::core::data::pixel_buffer::PixelBuffer;

/// Outbound port of the snapshot flow: one rendered starfield frame
/// written to a file on disk.
pub trait FilePresenterPort {
    fn write_frame(&self, frame: &PixelBuffer, filepath: impl AsRef<Path>) -> std::io::Result<()>;
}
