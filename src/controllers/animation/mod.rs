//! Animation controller for the recurring particle-field frame loop.
//!
//! This module provides the application layer for continuous rendering,
//! managing frame requests and dispatching results to the presentation layer.
//!
//! # Architecture
//!
//! The animation controller follows the ports & adapters pattern:
//! - **Input**: `FrameRequest` structs describing the frame to render
//! - **Output**: `AnimationPresenterPort` trait for receiving rendered frames
//! - **Core**: Uses the field engine from `core/` for simulation and painting

mod controller;
mod scheduler;
pub mod data;
pub mod errors;
pub mod events;
pub mod ports;

pub use controller::AnimationController;
pub use data::frame_data::FrameData;
pub use data::frame_request::FrameRequest;
pub use errors::render::RenderError;
pub use events::render::RenderEvent;
pub use ports::presenter::AnimationPresenterPort;
pub use scheduler::{FrameScheduler, SchedulerAction};
