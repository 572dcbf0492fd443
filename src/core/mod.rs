pub mod actions;
pub mod data;
pub mod field;
pub mod render;
pub mod wheel;
