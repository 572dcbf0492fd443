use crate::core::wheel::angle::{
    SECTOR_COUNT, normalize, rotation_for_sector, selected_sector, snapped_rotation,
};
use std::error::Error;
use std::fmt;

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum RotaryError {
    SectorOutOfRange { index: usize },
}

impl fmt::Display for RotaryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::SectorOutOfRange { index } => {
                write!(f, "sector index {} outside 0..{}", index, SECTOR_COUNT)
            }
        }
    }
}

impl Error for RotaryError {}

/// A completed selection, reported exactly once per click or drag release.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Selection {
    pub index: usize,
    pub rotation: f64,
    /// Discrete rotation changes (click, snap) get an eased visual
    /// transition; gesture-driven rotation never does.
    pub eased: bool,
}

/// One wheel gesture step while dragging.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DragStep {
    pub delta: f64,
    pub rotation: f64,
}

/// The rotary selector's state machine.
///
/// Two states, Idle and Dragging, with `last_pointer_angle` carried only
/// while dragging. Pointer moves in the Idle state never mutate rotation,
/// which is what keeps a finished gesture from leaking into the next one.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct RotaryState {
    rotation: f64,
    last_pointer_angle: Option<f64>,
    selected: Option<usize>,
}

impl RotaryState {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Continuous accumulated rotation in degrees, unbounded.
    #[must_use]
    pub fn rotation(&self) -> f64 {
        self.rotation
    }

    #[must_use]
    pub fn selected(&self) -> Option<usize> {
        self.selected
    }

    #[must_use]
    pub fn is_dragging(&self) -> bool {
        self.last_pointer_angle.is_some()
    }

    /// Direct selection of sector `index`: rotation lands on the exact
    /// boundary with no snapping ambiguity.
    pub fn select_sector(&mut self, index: usize) -> Result<Selection, RotaryError> {
        if index >= SECTOR_COUNT {
            return Err(RotaryError::SectorOutOfRange { index });
        }

        self.rotation = rotation_for_sector(index);
        self.last_pointer_angle = None;
        self.selected = Some(index);

        Ok(Selection {
            index,
            rotation: self.rotation,
            eased: true,
        })
    }

    /// Idle -> Dragging. A caller whose geometry lookup failed passes an
    /// angle of 0; the gesture still proceeds and only the first delta is
    /// off. A pointer-down while already dragging re-anchors the angle.
    pub fn begin_drag(&mut self, pointer_angle: f64) {
        self.last_pointer_angle = Some(pointer_angle);
    }

    /// Dragging self-loop: accumulates the angle delta since the previous
    /// move. Deltas, not absolute angles, so the atan2 wrap at ±180 degrees
    /// causes no jump as long as one move stays under half a turn.
    pub fn drag_to(&mut self, pointer_angle: f64) -> Option<DragStep> {
        let last = self.last_pointer_angle?;
        let delta = pointer_angle - last;

        self.rotation += delta;
        self.last_pointer_angle = Some(pointer_angle);

        Some(DragStep {
            delta,
            rotation: self.rotation,
        })
    }

    /// Dragging -> Idle. Snaps to the nearest sector boundary (preserving
    /// multi-turn winding) and reports the selected sector. Returns `None`
    /// when no drag was in progress, so a stray release reports nothing.
    pub fn end_drag(&mut self) -> Option<Selection> {
        self.last_pointer_angle.take()?;

        // Snap before computing the index. At an exact half-sector release
        // the raw rotation and the snapped rotation round to different
        // sectors, and the committed rotation is the one the wheel shows.
        self.rotation = snapped_rotation(self.rotation);
        let index = selected_sector(self.rotation);
        self.selected = Some(index);

        Some(Selection {
            index,
            rotation: self.rotation,
            eased: true,
        })
    }

    /// Normalized form of the current rotation, for display.
    #[must_use]
    pub fn normalized_rotation(&self) -> f64 {
        normalize(self.rotation)
    }
}

#[cfg(test)]
mod tests {
    use super::{RotaryError, RotaryState};
    use crate::core::wheel::angle::{SECTOR_COUNT, selected_sector};

    #[test]
    fn clicking_each_sector_sets_the_exact_rotation_and_index() {
        for index in 0..SECTOR_COUNT {
            let mut wheel = RotaryState::new();

            let selection = wheel.select_sector(index).unwrap();

            assert_eq!(selection.index, index);
            assert_eq!(selection.rotation, -30.0 * index as f64);
            assert_eq!(wheel.rotation(), -30.0 * index as f64);
            assert_eq!(wheel.selected(), Some(index));
            assert!(selection.eased);
        }
    }

    #[test]
    fn clicking_out_of_range_is_an_error() {
        let mut wheel = RotaryState::new();

        assert_eq!(
            wheel.select_sector(12),
            Err(RotaryError::SectorOutOfRange { index: 12 })
        );
        assert_eq!(wheel.selected(), None);
    }

    #[test]
    fn drag_accumulates_deltas_between_moves() {
        let mut wheel = RotaryState::new();

        wheel.begin_drag(10.0);
        let first = wheel.drag_to(25.0).unwrap();
        let second = wheel.drag_to(15.0).unwrap();

        assert_eq!(first.delta, 15.0);
        assert_eq!(second.delta, -10.0);
        assert_eq!(wheel.rotation(), 5.0);
    }

    #[test]
    fn crossing_the_atan2_wrap_keeps_the_normalized_rotation_continuous() {
        let mut wheel = RotaryState::new();

        // Pointer crosses the discontinuity: 179 -> -179 is a 2-degree
        // clockwise move, but the raw delta reads -358. That raw delta is
        // one full turn short of +2, so the normalized rotation (which is
        // what the wheel visually shows) stays continuous.
        wheel.begin_drag(170.0);
        wheel.drag_to(179.0);
        let step = wheel.drag_to(-179.0).unwrap();

        assert_eq!(step.delta, -358.0);
        assert!((wheel.normalized_rotation() - 11.0).abs() < 1e-9);
    }

    #[test]
    fn release_at_372_degrees_snaps_to_a_full_turn() {
        let mut wheel = RotaryState::new();

        // Rotation accumulates across sessions: first drag settles at 150,
        // the second adds 222 in two sub-half-turn moves, reaching 372.
        wheel.begin_drag(0.0);
        wheel.drag_to(160.0);
        wheel.end_drag();
        assert_eq!(wheel.rotation(), 150.0);

        wheel.begin_drag(-170.0);
        wheel.drag_to(-60.0);
        wheel.drag_to(52.0);
        assert!((wheel.rotation() - 372.0).abs() < 1e-9);

        let selection = wheel.end_drag().unwrap();

        // Nearest boundary to 372 is the full turn, not 12 degrees' worth
        // of sector.
        assert_eq!(selection.rotation, 360.0);
        assert_eq!(selection.index, 0);
    }

    #[test]
    fn release_snaps_minus_45_to_minus_60() {
        let mut wheel = RotaryState::new();

        wheel.begin_drag(45.0);
        wheel.drag_to(0.0);
        let selection = wheel.end_drag().unwrap();

        assert_eq!(selection.rotation, -60.0);
        assert_eq!(selection.index, 2);
        assert!(selection.eased);
    }

    #[test]
    fn half_boundary_release_index_matches_the_committed_rotation() {
        // -45 is equidistant from sectors 1 and 2; rounding away from zero
        // commits -60, and the reported index must describe that rotation,
        // not the raw -45 the pointer released at.
        let mut wheel = RotaryState::new();

        wheel.begin_drag(0.0);
        wheel.drag_to(-45.0);
        let selection = wheel.end_drag().unwrap();

        assert_eq!(selection.rotation, -60.0);
        assert_eq!(selection.index, selected_sector(selection.rotation));
        assert_eq!(selection.index, 2);
    }

    #[test]
    fn drag_and_click_agree_on_the_selected_sector() {
        for index in 0..SECTOR_COUNT {
            let mut clicked = RotaryState::new();
            let by_click = clicked.select_sector(index).unwrap();

            // Drag the wheel to exactly the clicked rotation and release.
            let mut dragged = RotaryState::new();
            dragged.begin_drag(0.0);
            dragged.drag_to(-30.0 * index as f64);
            let by_drag = dragged.end_drag().unwrap();

            assert_eq!(by_drag.index, by_click.index);
            assert_eq!(by_drag.rotation, by_click.rotation);
        }
    }

    #[test]
    fn moves_while_idle_do_not_mutate_rotation() {
        let mut wheel = RotaryState::new();

        assert_eq!(wheel.drag_to(90.0), None);
        assert_eq!(wheel.rotation(), 0.0);

        wheel.begin_drag(0.0);
        wheel.drag_to(30.0);
        wheel.end_drag();
        let settled = wheel.rotation();

        // Drag session over: stray moves change nothing until the next down.
        assert_eq!(wheel.drag_to(180.0), None);
        assert_eq!(wheel.rotation(), settled);

        wheel.begin_drag(0.0);
        assert!(wheel.drag_to(10.0).is_some());
    }

    #[test]
    fn stray_release_reports_nothing() {
        let mut wheel = RotaryState::new();

        assert_eq!(wheel.end_drag(), None);

        wheel.begin_drag(0.0);
        wheel.drag_to(40.0);
        assert!(wheel.end_drag().is_some());
        assert_eq!(wheel.end_drag(), None);
    }

    #[test]
    fn selection_fires_exactly_once_per_completed_gesture() {
        let mut wheel = RotaryState::new();
        let mut selections = 0;

        for _ in 0..2 {
            wheel.begin_drag(0.0);
            wheel.drag_to(50.0);
            if wheel.end_drag().is_some() {
                selections += 1;
            }
        }

        assert_eq!(selections, 2);
    }

    #[test]
    fn rotation_accumulates_across_drag_sessions() {
        let mut wheel = RotaryState::new();

        wheel.begin_drag(0.0);
        wheel.drag_to(40.0);
        wheel.end_drag(); // snaps to 30

        wheel.begin_drag(0.0);
        wheel.drag_to(40.0);
        let selection = wheel.end_drag().unwrap(); // 70 snaps to 60

        assert_eq!(selection.rotation, 60.0);
        assert_eq!(wheel.normalized_rotation(), 60.0);
    }
}
