//! Camera domain — follow rule + free-look поверх него
//!
//! Follow: snap к аватару на каждое input событие (не на кадр), без сглаживания.
//! Free-look: ViewAdjustment применяется каждый кадр поверх last_follow.

pub mod follow;

pub use follow::*;
