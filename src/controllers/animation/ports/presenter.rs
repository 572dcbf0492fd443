use crate::controllers::animation::events::render::RenderEvent;

/// Output seam of the animation controller: rendered frames and render
/// failures flow through here to whatever is presenting them.
pub trait AnimationPresenterPort: Send + Sync {
    fn present(&self, event: RenderEvent);
}
