use crate::controllers::animation::data::frame_data::FrameData;
use crate::controllers::animation::errors::render::RenderError;

#[derive(Debug)]
pub enum RenderEvent {
    Frame(FrameData),
    Error(RenderError),
}
