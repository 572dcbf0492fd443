//! Input adapters for the star wheel.
//!
//! This module contains adapters that receive input from various sources
//! and translate them into domain requests.

#[cfg(feature = "gui")]
pub mod gui;
