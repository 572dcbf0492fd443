use crate::controllers::animation::data::frame_request::FrameRequest;
use std::sync::Arc;

/// Keeps at most one frame in flight and one pending behind it.
///
/// The animation loop produces desired frames faster than the worker can
/// render them on large viewports; older pending requests are simply
/// replaced since only the newest frame matters.
pub struct FrameScheduler {
    pending_request: Option<Arc<FrameRequest>>,
    in_flight_generation: Option<u64>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SchedulerAction {
    Submitted { generation: u64 },
    Coalesced,
    NothingToDo,
}

impl FrameScheduler {
    #[must_use]
    pub fn new() -> Self {
        Self {
            pending_request: None,
            in_flight_generation: None,
        }
    }

    /// Records the newest desired frame and submits it unless an earlier
    /// frame is still in flight while the animation is running.
    pub fn update(
        &mut self,
        desired: Arc<FrameRequest>,
        animating: bool,
        last_completed_gen: u64,
        submit: impl FnOnce(Arc<FrameRequest>) -> u64,
    ) -> SchedulerAction {
        self.mark_completed(last_completed_gen);
        self.pending_request = Some(desired);

        if self.in_flight_generation.is_none() || !animating {
            return self.submit_pending(submit);
        }

        SchedulerAction::Coalesced
    }

    pub fn reset(&mut self) {
        self.pending_request = None;
        self.in_flight_generation = None;
    }

    pub fn observe_completion(&mut self, last_completed_gen: u64) {
        self.mark_completed(last_completed_gen);
    }

    #[must_use]
    pub fn has_pending(&self) -> bool {
        self.pending_request.is_some()
    }

    #[must_use]
    pub fn in_flight_generation(&self) -> Option<u64> {
        self.in_flight_generation
    }

    fn mark_completed(&mut self, last_completed_gen: u64) {
        if self
            .in_flight_generation
            .is_some_and(|generation| last_completed_gen >= generation)
        {
            self.in_flight_generation = None;
        }
    }

    fn submit_pending(
        &mut self,
        submit: impl FnOnce(Arc<FrameRequest>) -> u64,
    ) -> SchedulerAction {
        let Some(request) = self.pending_request.take() else {
            return SchedulerAction::NothingToDo;
        };

        let generation = submit(request);
        self.in_flight_generation = Some(generation);

        SchedulerAction::Submitted { generation }
    }
}

impl Default for FrameScheduler {
    fn default() -> Self {
        Self::new()
    }
}
