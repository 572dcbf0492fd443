pub mod animation;
pub mod ports;
pub mod snapshot;
