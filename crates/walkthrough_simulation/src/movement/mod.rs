//! Movement domain — дискретный input → шаг аватара → collision → camera
//!
//! Содержит:
//! - Direction / DirectionalInput (input event)
//! - apply_directional_input (snapshot → tentative move → resolve → revert/commit → camera)
//! - process_directional_input (exclusive system, дренирует очередь input событий)

pub mod controller;
pub mod events;

pub use controller::*;
pub use events::*;
