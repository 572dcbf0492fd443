pub mod events;
pub mod gui_app;
pub mod pointer_input;
pub mod ports;
pub mod signs;
pub mod state;
pub mod wheel_input;
