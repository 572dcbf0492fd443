//! GUI input adapter for the interactive zodiac wheel.
//!
//! This module provides a windowed interface using winit for window
//! management, pixels for framebuffer rendering, and egui for the wheel
//! overlay and info panel.

pub mod app;
pub mod commands;
