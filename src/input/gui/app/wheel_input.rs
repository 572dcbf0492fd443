use crate::core::wheel::angle::{SECTOR_ANGLE_DEG, SECTOR_COUNT, normalize, pointer_angle};
use crate::core::wheel::easing::EasedRotation;
use crate::core::wheel::rotary::{RotaryState, Selection};

/// Pointer travel below this is a click on a sector rather than a drag.
pub const CLICK_SLOP_PX: f64 = 4.0;

const WHEEL_RADIUS_FRACTION: f64 = 0.35;

/// Where the wheel sits in the window, in physical pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WheelLayout {
    pub centre_x: f64,
    pub centre_y: f64,
    pub radius: f64,
}

impl WheelLayout {
    #[must_use]
    pub fn for_window(width: u32, height: u32) -> Self {
        let w = f64::from(width);
        let h = f64::from(height);

        Self {
            centre_x: w / 2.0,
            centre_y: h / 2.0,
            radius: w.min(h) * WHEEL_RADIUS_FRACTION,
        }
    }

    #[must_use]
    pub fn contains(&self, x: f64, y: f64) -> bool {
        let dx = x - self.centre_x;
        let dy = y - self.centre_y;

        dx * dx + dy * dy <= self.radius * self.radius
    }

    #[must_use]
    pub fn pointer_angle(&self, x: f64, y: f64) -> f64 {
        pointer_angle(x, y, self.centre_x, self.centre_y)
    }
}

#[derive(Debug, Clone, Copy)]
struct Gesture {
    last_x: f64,
    last_y: f64,
    travel: f64,
}

/// Turns pointer gestures on the wheel into rotation and sign selection.
///
/// A press inside the wheel starts a drag session; releases with less than
/// [`CLICK_SLOP_PX`] of accumulated travel are reinterpreted as a click on
/// the sector under the pointer. The eased rotation tracks drags directly
/// and glides for clicks and release snaps.
pub struct WheelInteraction {
    rotary: RotaryState,
    eased: EasedRotation,
    gesture: Option<Gesture>,
}

impl WheelInteraction {
    #[must_use]
    pub fn new() -> Self {
        Self {
            rotary: RotaryState::new(),
            eased: EasedRotation::new(0.0),
            gesture: None,
        }
    }

    /// The rotation to draw the wheel at, in degrees.
    #[must_use]
    pub fn display_rotation(&self) -> f64 {
        self.eased.current()
    }

    #[must_use]
    pub fn selected(&self) -> Option<usize> {
        self.rotary.selected()
    }

    #[must_use]
    pub fn is_dragging(&self) -> bool {
        self.gesture.is_some()
    }

    /// Advances the glide animation; returns true while still moving.
    pub fn advance(&mut self, dt_secs: f64) -> bool {
        self.eased.advance(dt_secs)
    }

    /// Returns true if the press landed on the wheel and a session began.
    pub fn pointer_pressed(&mut self, layout: WheelLayout, x: f64, y: f64) -> bool {
        if !layout.contains(x, y) {
            return false;
        }

        // Pressing mid-glide jumps to the glide target before dragging.
        self.eased.snap_to(self.rotary.rotation());
        self.rotary.begin_drag(layout.pointer_angle(x, y));
        self.gesture = Some(Gesture {
            last_x: x,
            last_y: y,
            travel: 0.0,
        });

        true
    }

    pub fn pointer_moved(&mut self, layout: WheelLayout, x: f64, y: f64) {
        let Some(gesture) = self.gesture.as_mut() else {
            return;
        };

        gesture.travel += (x - gesture.last_x).hypot(y - gesture.last_y);
        gesture.last_x = x;
        gesture.last_y = y;

        if self.rotary.drag_to(layout.pointer_angle(x, y)).is_some() {
            self.eased.snap_to(self.rotary.rotation());
        }
    }

    pub fn pointer_released(&mut self, layout: WheelLayout, x: f64, y: f64) -> Option<Selection> {
        let gesture = self.gesture.take()?;

        if gesture.travel <= CLICK_SLOP_PX {
            let index = self.sector_at(layout, x, y);
            let _ = self.rotary.end_drag();
            let selection = self.rotary.select_sector(index).ok()?;
            self.eased.glide_to(selection.rotation);

            return Some(selection);
        }

        let selection = self.rotary.end_drag()?;
        self.eased.glide_to(selection.rotation);

        Some(selection)
    }

    /// The sector whose label sits under the pointer at the current rotation.
    #[must_use]
    pub fn sector_at(&self, layout: WheelLayout, x: f64, y: f64) -> usize {
        let pointer = layout.pointer_angle(x, y);
        let relative = normalize(pointer - self.rotary.rotation() + 90.0);

        (relative / SECTOR_ANGLE_DEG).round() as usize % SECTOR_COUNT
    }
}

impl Default for WheelInteraction {
    fn default() -> Self {
        Self::new()
    }
}
