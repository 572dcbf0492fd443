pub mod angle;
pub mod easing;
pub mod rotary;

pub use angle::{SECTOR_ANGLE_DEG, SECTOR_COUNT};
pub use easing::EasedRotation;
pub use rotary::{DragStep, RotaryError, RotaryState, Selection};
