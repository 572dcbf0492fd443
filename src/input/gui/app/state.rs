use std::sync::Arc;

use crate::controllers::animation::data::frame_request::FrameRequest;
use crate::controllers::animation::{FrameScheduler, SchedulerAction};
use crate::core::data::viewport::Viewport;
use crate::input::gui::app::wheel_input::WheelInteraction;

pub struct GuiAppState {
    pub wheel: WheelInteraction,
    scheduler: FrameScheduler,
    pub latest_submitted_generation: u64,
}

impl Default for GuiAppState {
    fn default() -> Self {
        Self {
            wheel: WheelInteraction::new(),
            scheduler: FrameScheduler::new(),
            latest_submitted_generation: 0,
        }
    }
}

impl GuiAppState {
    /// Feeds the newest desired frame to the scheduler, remembering the
    /// generation when a submission actually happens.
    pub fn submit_frame_if_ready(
        &mut self,
        viewport: Viewport,
        last_completed_generation: u64,
        submit: impl FnOnce(Arc<FrameRequest>) -> u64,
    ) -> SchedulerAction {
        let desired = Arc::new(FrameRequest { viewport });
        let action = self
            .scheduler
            .update(desired, true, last_completed_generation, submit);

        if let SchedulerAction::Submitted { generation } = action {
            self.latest_submitted_generation = generation;
        }

        action
    }

    /// Forgets the in-flight frame, for viewport changes that make it stale.
    pub fn reset_schedule(&mut self) {
        self.scheduler.reset();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn viewport() -> Viewport {
        Viewport::new(800, 600).unwrap()
    }

    #[test]
    fn a_submission_records_its_generation() {
        let mut state = GuiAppState::default();

        let action = state.submit_frame_if_ready(viewport(), 0, |_| 5);

        assert_eq!(action, SchedulerAction::Submitted { generation: 5 });
        assert_eq!(state.latest_submitted_generation, 5);
    }

    #[test]
    fn frames_coalesce_while_one_is_in_flight() {
        let mut state = GuiAppState::default();
        let _ = state.submit_frame_if_ready(viewport(), 0, |_| 1);

        let action = state.submit_frame_if_ready(viewport(), 0, |_| panic!("must not submit"));

        assert_eq!(action, SchedulerAction::Coalesced);
        assert_eq!(state.latest_submitted_generation, 1);
    }

    #[test]
    fn completion_lets_the_next_frame_through() {
        let mut state = GuiAppState::default();
        let _ = state.submit_frame_if_ready(viewport(), 0, |_| 1);
        let _ = state.submit_frame_if_ready(viewport(), 0, |_| panic!("must not submit"));

        let action = state.submit_frame_if_ready(viewport(), 1, |_| 2);

        assert_eq!(action, SchedulerAction::Submitted { generation: 2 });
        assert_eq!(state.latest_submitted_generation, 2);
    }

    #[test]
    fn reset_schedule_allows_an_immediate_resubmission() {
        let mut state = GuiAppState::default();
        let _ = state.submit_frame_if_ready(viewport(), 0, |_| 1);

        state.reset_schedule();
        let action = state.submit_frame_if_ready(viewport(), 0, |_| 2);

        assert_eq!(action, SchedulerAction::Submitted { generation: 2 });
    }
}
