mod controllers;
mod core;
#[cfg(feature = "gui")]
mod input;
mod presenters;

pub use controllers::snapshot::snapshot_controller;
pub use crate::core::actions::cancellation::NeverCancel;
pub use crate::core::data::viewport::Viewport;
pub use crate::core::field::engine::{FieldEngine, FieldTuning};
pub use presenters::file::ppm::PpmFilePresenter;

#[cfg(feature = "gui")]
pub use input::gui::commands::run_gui::RunGuiCommand;
#[cfg(feature = "gui")]
pub use presenters::pixels::factory::PixelsPresenterFactory;
