//! Collision resolver (reject-and-revert)
//!
//! Чистая функция решения: пересечение AABB → reject. Касание граней считается
//! пересечением (inclusive). Никакого sliding / axis decomposition: контакт по любой оси
//! блокирует весь шаг, даже если движение вдоль одной оси прошло бы.

use bevy::math::bounding::{Aabb3d, IntersectsVolume};
use bevy::prelude::*;

/// Решение resolver'а
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CollisionVerdict {
    Accepted,
    Rejected,
}

impl CollisionVerdict {
    pub fn is_accepted(self) -> bool {
        self == CollisionVerdict::Accepted
    }
}

/// Решить принять ли tentative move
///
/// `previous` — snapshot до шага; resolver его не использует структурно,
/// это reference для полного revert на стороне caller'а.
pub fn resolve(
    _previous: &Transform,
    proposed_avatar_volume: &Aabb3d,
    obstacle_volume: &Aabb3d,
) -> CollisionVerdict {
    if proposed_avatar_volume.intersects(obstacle_volume) {
        CollisionVerdict::Rejected
    } else {
        CollisionVerdict::Accepted
    }
}
