//! Sector geometry for the rotary selector.
//!
//! The wheel has 12 fixed 30-degree sectors. Sector 0 sits at the top and
//! indices increase clockwise, while a positive rotation turns the wheel
//! clockwise in screen space; the two reference frames run opposite ways,
//! which is why [`selected_sector`] mirrors the nearest-sector index.

pub const SECTOR_COUNT: usize = 12;
pub const SECTOR_ANGLE_DEG: f64 = 30.0;

/// Angle of the pointer around a centre, in degrees in (-180, 180].
#[must_use]
pub fn pointer_angle(x: f64, y: f64, centre_x: f64, centre_y: f64) -> f64 {
    (y - centre_y).atan2(x - centre_x).to_degrees()
}

/// Folds an unbounded rotation into [0, 360).
#[must_use]
pub fn normalize(rotation: f64) -> f64 {
    ((rotation % 360.0) + 360.0) % 360.0
}

/// Centre angle of sector `index`, measured from the positive x axis.
#[must_use]
pub fn sector_centre_angle(index: usize) -> f64 {
    index as f64 * SECTOR_ANGLE_DEG - 90.0
}

/// Wheel rotation that brings sector `index` to the top.
#[must_use]
pub fn rotation_for_sector(index: usize) -> f64 {
    -(index as f64) * SECTOR_ANGLE_DEG
}

/// Nearest exact sector boundary, preserving the sign and winding of the
/// raw rotation. Rounding is half-away-from-zero (`f64::round`).
#[must_use]
pub fn snapped_rotation(rotation: f64) -> f64 {
    (rotation / SECTOR_ANGLE_DEG).round() * SECTOR_ANGLE_DEG
}

/// Sector selected by a raw rotation: the nearest sector of the normalized
/// rotation, mirrored back into the clockwise index frame.
#[must_use]
pub fn selected_sector(rotation: f64) -> usize {
    let nearest = (normalize(rotation) / SECTOR_ANGLE_DEG).round() as usize % SECTOR_COUNT;

    (SECTOR_COUNT - nearest) % SECTOR_COUNT
}
