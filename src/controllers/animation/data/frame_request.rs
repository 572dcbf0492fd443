use crate::core::data::viewport::Viewport;

/// What the shell wants the next frame rendered against.
///
/// Immutable snapshot; `PartialEq` lets the scheduler detect redundant
/// requests. The worker owns all animation state, so the request carries
/// only the target viewport.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FrameRequest {
    pub viewport: Viewport,
}
