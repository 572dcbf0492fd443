use winit::event::{ElementState, MouseButton, TouchPhase};

/// A primary-button pointer transition in window coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PointerTransition {
    Pressed { x: f64, y: f64 },
    Moved { x: f64, y: f64 },
    Released { x: f64, y: f64 },
}

/// Tracks the cursor position and primary-button state from raw window
/// events, collapsing them into [`PointerTransition`]s.
///
/// Button events arriving before any cursor position are dropped, and a
/// cursor leaving the window while held is treated as a release so no
/// gesture is left dangling. Touch input maps to the same transitions,
/// and only the first touch id drives a gesture.
#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct PointerInputState {
    position: Option<(f64, f64)>,
    primary_held: bool,
    active_touch: Option<u64>,
}

impl PointerInputState {
    pub fn handle_cursor_moved(&mut self, x: f64, y: f64) -> Option<PointerTransition> {
        self.position = Some((x, y));

        if self.primary_held {
            Some(PointerTransition::Moved { x, y })
        } else {
            None
        }
    }

    pub fn handle_mouse_input(
        &mut self,
        button: MouseButton,
        state: ElementState,
    ) -> Option<PointerTransition> {
        if button != MouseButton::Left {
            return None;
        }

        let (x, y) = self.position?;

        match state {
            ElementState::Pressed if !self.primary_held => {
                self.primary_held = true;
                Some(PointerTransition::Pressed { x, y })
            }
            ElementState::Released if self.primary_held => {
                self.primary_held = false;
                Some(PointerTransition::Released { x, y })
            }
            _ => None,
        }
    }

    pub fn handle_touch(
        &mut self,
        id: u64,
        phase: TouchPhase,
        x: f64,
        y: f64,
    ) -> Option<PointerTransition> {
        match phase {
            TouchPhase::Started => {
                if self.active_touch.is_some() {
                    return None;
                }

                self.active_touch = Some(id);
                self.position = Some((x, y));
                self.primary_held = true;
                Some(PointerTransition::Pressed { x, y })
            }
            TouchPhase::Moved => {
                if self.active_touch != Some(id) {
                    return None;
                }

                self.position = Some((x, y));
                Some(PointerTransition::Moved { x, y })
            }
            TouchPhase::Ended | TouchPhase::Cancelled => {
                if self.active_touch != Some(id) {
                    return None;
                }

                self.active_touch = None;
                self.primary_held = false;
                self.position = Some((x, y));
                Some(PointerTransition::Released { x, y })
            }
        }
    }

    pub fn handle_cursor_left(&mut self) -> Option<PointerTransition> {
        if !self.primary_held {
            return None;
        }

        self.primary_held = false;
        let (x, y) = self.position?;

        Some(PointerTransition::Released { x, y })
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

#[cfg(test)]
mod tests {
    use super::{PointerInputState, PointerTransition};
    use winit::event::{ElementState, MouseButton, TouchPhase};

    #[test]
    fn press_move_release_maps_to_a_gesture() {
        let mut input = PointerInputState::default();

        assert_eq!(input.handle_cursor_moved(10.0, 20.0), None);
        assert_eq!(
            input.handle_mouse_input(MouseButton::Left, ElementState::Pressed),
            Some(PointerTransition::Pressed { x: 10.0, y: 20.0 })
        );
        assert_eq!(
            input.handle_cursor_moved(15.0, 25.0),
            Some(PointerTransition::Moved { x: 15.0, y: 25.0 })
        );
        assert_eq!(
            input.handle_mouse_input(MouseButton::Left, ElementState::Released),
            Some(PointerTransition::Released { x: 15.0, y: 25.0 })
        );
    }

    #[test]
    fn press_before_any_cursor_position_is_dropped() {
        let mut input = PointerInputState::default();

        assert_eq!(
            input.handle_mouse_input(MouseButton::Left, ElementState::Pressed),
            None
        );
    }

    #[test]
    fn non_primary_buttons_are_ignored() {
        let mut input = PointerInputState::default();
        input.handle_cursor_moved(10.0, 10.0);

        assert_eq!(
            input.handle_mouse_input(MouseButton::Right, ElementState::Pressed),
            None
        );
    }

    #[test]
    fn duplicate_press_and_stray_release_are_ignored() {
        let mut input = PointerInputState::default();
        input.handle_cursor_moved(10.0, 10.0);

        assert_eq!(
            input.handle_mouse_input(MouseButton::Left, ElementState::Released),
            None
        );

        input.handle_mouse_input(MouseButton::Left, ElementState::Pressed);
        assert_eq!(
            input.handle_mouse_input(MouseButton::Left, ElementState::Pressed),
            None
        );
    }

    #[test]
    fn only_the_first_touch_id_drives_a_gesture() {
        let mut input = PointerInputState::default();

        assert_eq!(
            input.handle_touch(7, TouchPhase::Started, 10.0, 10.0),
            Some(PointerTransition::Pressed { x: 10.0, y: 10.0 })
        );

        // A second finger joins mid-gesture: ignored entirely.
        assert_eq!(input.handle_touch(8, TouchPhase::Started, 50.0, 50.0), None);
        assert_eq!(input.handle_touch(8, TouchPhase::Moved, 55.0, 55.0), None);
        assert_eq!(input.handle_touch(8, TouchPhase::Ended, 55.0, 55.0), None);

        assert_eq!(
            input.handle_touch(7, TouchPhase::Moved, 20.0, 20.0),
            Some(PointerTransition::Moved { x: 20.0, y: 20.0 })
        );
        assert_eq!(
            input.handle_touch(7, TouchPhase::Ended, 20.0, 20.0),
            Some(PointerTransition::Released { x: 20.0, y: 20.0 })
        );
    }

    #[test]
    fn a_cancelled_touch_releases_the_gesture() {
        let mut input = PointerInputState::default();
        input.handle_touch(1, TouchPhase::Started, 10.0, 10.0);

        assert_eq!(
            input.handle_touch(1, TouchPhase::Cancelled, 12.0, 12.0),
            Some(PointerTransition::Released { x: 12.0, y: 12.0 })
        );
        assert_eq!(input.handle_touch(1, TouchPhase::Moved, 15.0, 15.0), None);
    }

    #[test]
    fn cursor_leaving_while_held_releases_the_gesture() {
        let mut input = PointerInputState::default();
        input.handle_cursor_moved(10.0, 10.0);
        input.handle_mouse_input(MouseButton::Left, ElementState::Pressed);

        assert_eq!(
            input.handle_cursor_left(),
            Some(PointerTransition::Released { x: 10.0, y: 10.0 })
        );
        assert_eq!(input.handle_cursor_left(), None);
    }
}
