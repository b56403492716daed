//! Door domain — proximity trigger + rotation tween
//!
//! Каждый кадр:
//! 1. tick_proximity — distance(avatar, door) < threshold && Idle → Triggered + старт tween
//! 2. advance_rotation_tweens — продвигает все активные tweens на Time::delta
//!
//! Tween — "внешний" animation facility: core только стартует его, completion не опрашивает.

pub mod proximity;
pub mod tween;

pub use proximity::*;
pub use tween::*;
